//! Device architecture detection and identification.

use std::fmt;

/// Known device architecture tags.
///
/// These back architecture detection and convenience constructors only.
/// [`PackageDescriptor::target_architecture`](crate::PackageDescriptor) is a
/// free-form string: an unrecognized tag is used verbatim and simply finds
/// no archive entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Architecture {
    /// 64-bit ARM.
    Arm64V8a,
    /// 32-bit ARM.
    ArmeabiV7a,
    /// 64-bit x86.
    X86_64,
    /// 32-bit x86.
    X86,
}

impl Architecture {
    /// Detect the device architecture at runtime.
    #[must_use]
    pub fn current() -> Option<Self> {
        match std::env::consts::ARCH {
            "aarch64" => Some(Self::Arm64V8a),
            "arm" => Some(Self::ArmeabiV7a),
            "x86_64" => Some(Self::X86_64),
            "x86" => Some(Self::X86),
            _ => None,
        }
    }

    /// Get the architecture tag string (e.g., "arm64-v8a").
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arm64V8a => "arm64-v8a",
            Self::ArmeabiV7a => "armeabi-v7a",
            Self::X86_64 => "x86_64",
            Self::X86 => "x86",
        }
    }

    /// Parse an architecture from its tag string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "arm64-v8a" => Some(Self::Arm64V8a),
            "armeabi-v7a" => Some(Self::ArmeabiV7a),
            "x86_64" => Some(Self::X86_64),
            "x86" => Some(Self::X86),
            _ => None,
        }
    }

    /// Get all known architectures.
    #[must_use]
    pub fn all() -> &'static [Architecture] {
        &[Self::Arm64V8a, Self::ArmeabiV7a, Self::X86_64, Self::X86]
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
