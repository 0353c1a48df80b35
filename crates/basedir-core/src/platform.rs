use std::fmt;

use serde::{Deserialize, Serialize};

/// A concrete platform family whose directory conventions are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    MacOS,
    Windows,
    FreeBSD,
    OpenBSD,
}

impl Platform {
    /// Map a host operating system identifier onto a platform family.
    ///
    /// Accepts both Rust's `std::env::consts::OS` values and the `darwin`
    /// spelling. Anything unrecognised is treated as Linux.
    pub fn from_os_name(os: &str) -> Self {
        match os {
            "macos" | "darwin" => Self::MacOS,
            "windows" => Self::Windows,
            "freebsd" => Self::FreeBSD,
            "openbsd" => Self::OpenBSD,
            _ => Self::Linux,
        }
    }

    /// Platforms where XDG is the native convention.
    pub fn is_xdg_native(self) -> bool {
        match self {
            Self::Linux | Self::FreeBSD | Self::OpenBSD => true,
            Self::MacOS | Self::Windows => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::MacOS => "macos",
            Self::Windows => "windows",
            Self::FreeBSD => "freebsd",
            Self::OpenBSD => "openbsd",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform selection in a [`ResolverConfig`](crate::ResolverConfig).
///
/// `Auto` is resolved against the host exactly once, when the resolver is
/// constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformChoice {
    #[default]
    Auto,
    Linux,
    MacOS,
    Windows,
    FreeBSD,
    OpenBSD,
}

impl PlatformChoice {
    /// Resolve to a concrete platform. `host_os` is only consulted for `Auto`.
    pub fn resolve(self, host_os: impl FnOnce() -> String) -> Platform {
        match self {
            Self::Auto => Platform::from_os_name(&host_os()),
            Self::Linux => Platform::Linux,
            Self::MacOS => Platform::MacOS,
            Self::Windows => Platform::Windows,
            Self::FreeBSD => Platform::FreeBSD,
            Self::OpenBSD => Platform::OpenBSD,
        }
    }
}

impl From<Platform> for PlatformChoice {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Linux => Self::Linux,
            Platform::MacOS => Self::MacOS,
            Platform::Windows => Self::Windows,
            Platform::FreeBSD => Self::FreeBSD,
            Platform::OpenBSD => Self::OpenBSD,
        }
    }
}
