#![allow(non_snake_case)]

use super::*;
use crate::HostError;
use appload_locator::{LocatorError, PackageDescriptor};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

fn write_archive(path: &Path, entries: &[(&str, &[u8])]) {
    let file = File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    for (name, contents) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(contents).unwrap();
    }
    zip.finish().unwrap();
}

/// Platform environment backed by a temp directory layout.
struct FakeEnv {
    primary_archive: std::path::PathBuf,
    native_dir: std::path::PathBuf,
    storage_dir: std::path::PathBuf,
    cache_dir: std::path::PathBuf,
    fail_descriptor: bool,
}

impl FakeEnv {
    fn new(temp_dir: &TempDir) -> Self {
        let native_dir = temp_dir.path().join("native");
        fs::create_dir_all(&native_dir).unwrap();
        Self {
            primary_archive: temp_dir.path().join("base.apk"),
            native_dir,
            storage_dir: temp_dir.path().join("files"),
            cache_dir: temp_dir.path().join("code_cache"),
            fail_descriptor: false,
        }
    }
}

impl PlatformEnv for FakeEnv {
    fn package_descriptor(&self) -> HostResult<PackageDescriptor> {
        if self.fail_descriptor {
            return Err(HostError::Environment("package manager died".to_string()));
        }
        Ok(PackageDescriptor::new(
            &self.primary_archive,
            &self.native_dir,
            "arm64-v8a",
        ))
    }

    fn app_info(&self) -> HostResult<AppInfo> {
        Ok(AppInfo {
            package_name: "com.example.app".to_string(),
            native_library_dir: self.native_dir.display().to_string(),
            source_dir: self.primary_archive.display().to_string(),
            split_source_dirs: Vec::new(),
            version_name: "1.0.0".to_string(),
            version_code: "1".to_string(),
            architecture: "arm64-v8a".to_string(),
        })
    }

    fn device_architecture(&self) -> String {
        "arm64-v8a".to_string()
    }

    fn storage_paths(&self) -> StoragePaths {
        StoragePaths {
            app_storage_dir: self.storage_dir.display().to_string(),
            code_cache_dir: self.cache_dir.display().to_string(),
        }
    }
}

fn router_for(temp_dir: &TempDir, env: FakeEnv) -> CallRouter<FakeEnv> {
    CallRouter::new(env, temp_dir.path().join("extraction"))
}

#[test]
fn CallRouter___libapp_paths___loader_identifier_first() {
    let temp_dir = TempDir::new().unwrap();
    let env = FakeEnv::new(&temp_dir);
    fs::write(env.native_dir.join("libapp.so"), b"loose payload").unwrap();
    let router = router_for(&temp_dir, env);

    let reply = router.dispatch(HostCall::LibappPaths).unwrap();

    match reply {
        CallReply::Paths(paths) => {
            assert_eq!(paths.len(), 2);
            assert_eq!(paths[0], "libapp.so");
            assert!(paths[1].ends_with("native/libapp.so"));
        }
        other => panic!("expected Paths, got {other:?}"),
    }
}

#[test]
fn CallRouter___libapp_paths___returns_fallback_on_total_miss() {
    let temp_dir = TempDir::new().unwrap();
    let env = FakeEnv::new(&temp_dir);
    write_archive(&env.primary_archive, &[("assets/unrelated", b"data")]);
    let router = router_for(&temp_dir, env);

    let reply = router.dispatch(HostCall::LibappPaths).unwrap();

    match reply {
        CallReply::Paths(paths) => {
            assert_eq!(paths.len(), 2);
            assert!(!Path::new(&paths[1]).exists());
        }
        other => panic!("expected Paths, got {other:?}"),
    }
}

#[test]
fn CallRouter___libapp_paths___extracts_when_only_archived() {
    let temp_dir = TempDir::new().unwrap();
    let env = FakeEnv::new(&temp_dir);
    write_archive(
        &env.primary_archive,
        &[("lib/arm64-v8a/libapp.so", b"archived payload")],
    );
    let router = router_for(&temp_dir, env);

    let reply = router.dispatch(HostCall::LibappPaths).unwrap();

    match reply {
        CallReply::Paths(paths) => {
            assert_eq!(fs::read(&paths[1]).unwrap(), b"archived payload");
        }
        other => panic!("expected Paths, got {other:?}"),
    }
}

#[test]
fn CallRouter___app_info___passes_through_environment() {
    let temp_dir = TempDir::new().unwrap();
    let router = router_for(&temp_dir, FakeEnv::new(&temp_dir));

    let reply = router.dispatch(HostCall::AppInfo).unwrap();

    match reply {
        CallReply::AppInfo(info) => {
            assert_eq!(info.package_name, "com.example.app");
            assert_eq!(info.version_code, "1");
        }
        other => panic!("expected AppInfo, got {other:?}"),
    }
}

#[test]
fn CallRouter___device_architecture___returns_tag() {
    let temp_dir = TempDir::new().unwrap();
    let router = router_for(&temp_dir, FakeEnv::new(&temp_dir));

    let reply = router.dispatch(HostCall::DeviceArchitecture).unwrap();

    match reply {
        CallReply::Architecture(tag) => assert_eq!(tag, "arm64-v8a"),
        other => panic!("expected Architecture, got {other:?}"),
    }
}

#[test]
fn CallRouter___storage_paths___serializes_fixed_keys() {
    let temp_dir = TempDir::new().unwrap();
    let router = router_for(&temp_dir, FakeEnv::new(&temp_dir));

    let reply = router.dispatch(HostCall::StoragePaths).unwrap();
    let json = reply.to_json().unwrap();

    assert!(json.get("appStorageDir").is_some());
    assert!(json.get("codeCacheDir").is_some());
}

#[test]
fn CallRouter___extract_payload___returns_absolute_path() {
    let temp_dir = TempDir::new().unwrap();
    let env = FakeEnv::new(&temp_dir);
    write_archive(&env.primary_archive, &[("lib/arm64-v8a/libapp.so", b"payload")]);
    let router = router_for(&temp_dir, env);

    let reply = router.dispatch(HostCall::ExtractPayload).unwrap();

    match reply {
        CallReply::Extracted(path) => {
            assert_eq!(fs::read(&path).unwrap(), b"payload");
        }
        other => panic!("expected Extracted, got {other:?}"),
    }
}

#[test]
fn CallRouter___extract_payload___surfaces_entry_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let env = FakeEnv::new(&temp_dir);
    write_archive(&env.primary_archive, &[("assets/unrelated", b"data")]);
    let router = router_for(&temp_dir, env);

    let err = router.dispatch(HostCall::ExtractPayload).unwrap_err();

    assert!(matches!(
        err,
        HostError::Locator(LocatorError::EntryNotFound { .. })
    ));
}

#[test]
fn CallRouter___debug_payload_locations___reports_candidates() {
    let temp_dir = TempDir::new().unwrap();
    let env = FakeEnv::new(&temp_dir);
    write_archive(&env.primary_archive, &[("lib/x86/libapp.so", b"wrong arch")]);
    let router = router_for(&temp_dir, env);

    let reply = router.dispatch(HostCall::DebugPayloadLocations).unwrap();

    match reply {
        CallReply::Debug(report) => {
            assert_eq!(report.architecture, "arm64-v8a");
            assert_eq!(report.archives.len(), 1);
            assert!(report.archives[0].openable);
            assert!(!report.archives[0].contains_payload_entry);
        }
        other => panic!("expected Debug, got {other:?}"),
    }
}

#[test]
fn CallRouter___dispatch___environment_failure_surfaces() {
    let temp_dir = TempDir::new().unwrap();
    let mut env = FakeEnv::new(&temp_dir);
    env.fail_descriptor = true;
    let router = router_for(&temp_dir, env);

    let err = router.dispatch(HostCall::LibappPaths).unwrap_err();

    assert!(matches!(err, HostError::Environment(_)));
}

#[test]
fn CallRouter___dispatch___cache_shared_across_calls() {
    let temp_dir = TempDir::new().unwrap();
    let env = FakeEnv::new(&temp_dir);
    write_archive(&env.primary_archive, &[("lib/arm64-v8a/libapp.so", b"payload")]);
    let primary = env.primary_archive.clone();
    let router = router_for(&temp_dir, env);

    let first = router.dispatch(HostCall::LibappPaths).unwrap();

    // A later call must be served from the cache, not a re-extraction
    fs::write(&primary, b"garbage").unwrap();
    let second = router.dispatch(HostCall::LibappPaths).unwrap();

    let (CallReply::Paths(first), CallReply::Paths(second)) = (first, second) else {
        panic!("expected Paths replies");
    };
    assert_eq!(first, second);
}
