//! Dynamic loading and symbol resolution for the update client.

use crate::{ShimError, ShimResult};
use libloading::{Library, Symbol};
use std::ffi::{CStr, CString, c_char};
use std::path::Path;

/// A loaded update client, keeping the library alive and providing safe
/// wrappers over its exports.
#[derive(Debug)]
pub struct UpdateClient {
    /// The loaded library (must be kept alive while the client is in use).
    _library: Library,

    /// Function pointers resolved from the library.
    api: UpdateClientApi,
}

/// Function pointers to the update client's fixed export set.
#[derive(Debug)]
struct UpdateClientApi {
    init: InitFn,
    current_boot_patch: PatchNumberFn,
    next_boot_patch: PatchNumberFn,
    check_for_update: CheckForUpdateFn,
    apply_update: ApplyUpdateFn,
    release_version: ReleaseVersionFn,
    free_string: FreeStringFn,
}

// Type signatures for the update client's exports
type InitFn = unsafe extern "C" fn(config_json: *const c_char) -> bool;
type PatchNumberFn = unsafe extern "C" fn() -> i64;
type CheckForUpdateFn = unsafe extern "C" fn() -> bool;
type ApplyUpdateFn = unsafe extern "C" fn() -> bool;
type ReleaseVersionFn = unsafe extern "C" fn() -> *mut c_char;
type FreeStringFn = unsafe extern "C" fn(ptr: *mut c_char);

impl UpdateClient {
    /// Load the update-client library and resolve its exports.
    ///
    /// Symbols are resolved eagerly: a missing export fails here rather
    /// than at call time.
    pub fn load<P: AsRef<Path>>(library_path: P) -> ShimResult<Self> {
        let library_path = library_path.as_ref();

        // SAFETY: We're loading a shared library. The caller is responsible
        // for ensuring the library path is valid and trusted.
        let library = unsafe { Library::new(library_path) }
            .map_err(|e| ShimError::LibraryLoad(format!("{}: {}", library_path.display(), e)))?;

        let api = UpdateClientApi::resolve(&library)?;

        tracing::debug!(library = %library_path.display(), "update client loaded");

        Ok(Self {
            _library: library,
            api,
        })
    }

    /// Initialize the client with a JSON configuration document.
    pub fn init(&self, config_json: &str) -> ShimResult<bool> {
        let config =
            CString::new(config_json).map_err(|e| ShimError::StringConversion(e.to_string()))?;

        // SAFETY: config is a valid NUL-terminated C string for the
        // duration of the call
        Ok(unsafe { (self.api.init)(config.as_ptr()) })
    }

    /// Patch number the current boot is running, or a sentinel when none.
    pub fn current_boot_patch(&self) -> i64 {
        // SAFETY: no arguments; the export has no preconditions
        unsafe { (self.api.current_boot_patch)() }
    }

    /// Patch number the next boot will run, or a sentinel when none.
    pub fn next_boot_patch(&self) -> i64 {
        // SAFETY: no arguments; the export has no preconditions
        unsafe { (self.api.next_boot_patch)() }
    }

    /// Ask the client whether a downloadable update is available.
    pub fn check_for_update(&self) -> bool {
        // SAFETY: no arguments; the export has no preconditions
        unsafe { (self.api.check_for_update)() }
    }

    /// Download and stage an available update for the next boot.
    pub fn apply_update(&self) -> bool {
        // SAFETY: no arguments; the export has no preconditions
        unsafe { (self.api.apply_update)() }
    }

    /// The release version the client was configured with, if any.
    pub fn release_version(&self) -> Option<String> {
        // SAFETY: the library owns the returned string; we copy it out and
        // hand the pointer straight back to the library's own free
        unsafe {
            let ptr = (self.api.release_version)();
            if ptr.is_null() {
                return None;
            }
            let value = CStr::from_ptr(ptr).to_string_lossy().into_owned();
            (self.api.free_string)(ptr);
            Some(value)
        }
    }
}

impl UpdateClientApi {
    fn resolve(library: &Library) -> ShimResult<Self> {
        let init: Symbol<InitFn> = resolve_symbol(library, b"update_client_init\0")?;
        let current_boot_patch: Symbol<PatchNumberFn> =
            resolve_symbol(library, b"update_client_current_boot_patch\0")?;
        let next_boot_patch: Symbol<PatchNumberFn> =
            resolve_symbol(library, b"update_client_next_boot_patch\0")?;
        let check_for_update: Symbol<CheckForUpdateFn> =
            resolve_symbol(library, b"update_client_check_for_update\0")?;
        let apply_update: Symbol<ApplyUpdateFn> =
            resolve_symbol(library, b"update_client_apply_update\0")?;
        let release_version: Symbol<ReleaseVersionFn> =
            resolve_symbol(library, b"update_client_release_version\0")?;
        let free_string: Symbol<FreeStringFn> =
            resolve_symbol(library, b"update_client_free_string\0")?;

        // Store raw function pointers (they must outlive the Symbol guards)
        // SAFETY: These function pointers are valid as long as the library
        // is loaded, and UpdateClient keeps the library alive
        Ok(Self {
            init: *init,
            current_boot_patch: *current_boot_patch,
            next_boot_patch: *next_boot_patch,
            check_for_update: *check_for_update,
            apply_update: *apply_update,
            release_version: *release_version,
            free_string: *free_string,
        })
    }
}

fn resolve_symbol<'lib, T>(
    library: &'lib Library,
    name: &'static [u8],
) -> ShimResult<Symbol<'lib, T>> {
    // SAFETY: the caller pins T to the export's actual signature
    unsafe { library.get(name) }.map_err(|e| {
        let symbol = String::from_utf8_lossy(&name[..name.len().saturating_sub(1)]).into_owned();
        ShimError::SymbolNotFound(format!("{symbol}: {e}"))
    })
}
