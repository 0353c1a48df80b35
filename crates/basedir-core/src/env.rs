//! Access to ambient process state.
//!
//! The resolver reads environment variables, the home and temp directories,
//! the numeric user id and Windows Known Folders only through [`Environment`].
//! [`SystemEnv`] talks to the real host; [`MapEnv`] is an in-memory stand-in
//! for tests and reproducible resolution.

use std::collections::BTreeMap;
use std::env::VarError;
use std::path::PathBuf;

/// Windows Known Folder roots used for application directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KnownFolder {
    RoamingAppData,
    LocalAppData,
    ProgramData,
}

impl KnownFolder {
    /// Environment variable consulted when the Known Folder API fails.
    pub fn env_var(self) -> &'static str {
        match self {
            Self::RoamingAppData => "APPDATA",
            Self::LocalAppData => "LOCALAPPDATA",
            Self::ProgramData => "ProgramData",
        }
    }
}

/// Read-only view of the host environment.
pub trait Environment: Send + Sync {
    /// Value of an environment variable, if set.
    fn var(&self, key: &str) -> Option<String>;

    fn home_dir(&self) -> Option<PathBuf>;

    fn temp_dir(&self) -> PathBuf;

    /// Numeric id of the current user, where the host has one.
    fn uid(&self) -> Option<u32>;

    /// Path from the Windows Known Folder API. Hosts without the API
    /// return `None`.
    fn known_folder(&self, _folder: KnownFolder) -> Option<PathBuf> {
        None
    }

    /// Host operating system identifier, as in `std::env::consts::OS`.
    fn os_name(&self) -> String {
        std::env::consts::OS.to_string()
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl Environment for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        var_value(key, std::env::var(key))
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn temp_dir(&self) -> PathBuf {
        std::env::temp_dir()
    }

    fn uid(&self) -> Option<u32> {
        #[cfg(unix)]
        {
            // SAFETY: getuid has no preconditions and cannot fail.
            Some(unsafe { libc::getuid() })
        }

        #[cfg(not(unix))]
        {
            None
        }
    }

    fn known_folder(&self, folder: KnownFolder) -> Option<PathBuf> {
        #[cfg(windows)]
        {
            match folder {
                KnownFolder::RoamingAppData => dirs_sys::known_folder_roaming_app_data(),
                KnownFolder::LocalAppData => dirs_sys::known_folder_local_app_data(),
                KnownFolder::ProgramData => dirs_sys::known_folder(
                    windows_sys::Win32::UI::Shell::FOLDERID_ProgramData,
                ),
            }
        }

        #[cfg(not(windows))]
        {
            let _ = folder;
            None
        }
    }
}

/// A variable that is not valid UTF-8 cannot be joined into a path here, so
/// it is treated as unset and reported.
fn var_value(key: &str, value: Result<String, VarError>) -> Option<String> {
    match value {
        Ok(value) => Some(value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(raw)) => {
            tracing::warn!("Ignoring ${key}: value {raw:?} is not valid UTF-8");
            None
        }
    }
}

/// A deterministic, in-memory environment.
///
/// ```
/// use basedir_core::MapEnv;
///
/// let env = MapEnv::new()
///     .with_home("/home/u")
///     .with_var("XDG_CONFIG_HOME", "/cfg")
///     .with_uid(1000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
    home: Option<PathBuf>,
    temp: Option<PathBuf>,
    uid: Option<u32>,
    known_folders: BTreeMap<KnownFolder, PathBuf>,
    os: Option<String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Fixes the temp directory. Without it `TMPDIR` is used, then `/tmp`.
    pub fn with_temp_dir(mut self, temp: impl Into<PathBuf>) -> Self {
        self.temp = Some(temp.into());
        self
    }

    pub fn with_uid(mut self, uid: u32) -> Self {
        self.uid = Some(uid);
        self
    }

    pub fn with_known_folder(mut self, folder: KnownFolder, path: impl Into<PathBuf>) -> Self {
        self.known_folders.insert(folder, path.into());
        self
    }

    /// Host OS reported for platform auto-detection.
    pub fn with_os(mut self, os: impl Into<String>) -> Self {
        self.os = Some(os.into());
        self
    }
}

impl Environment for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn temp_dir(&self) -> PathBuf {
        self.temp
            .clone()
            .or_else(|| self.var("TMPDIR").filter(|t| !t.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("/tmp"))
    }

    fn uid(&self) -> Option<u32> {
        self.uid
    }

    fn known_folder(&self, folder: KnownFolder) -> Option<PathBuf> {
        self.known_folders.get(&folder).cloned()
    }

    fn os_name(&self) -> String {
        self.os
            .clone()
            .unwrap_or_else(|| std::env::consts::OS.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_value_passes_unicode_through() {
        assert_eq!(
            var_value("XDG_CONFIG_HOME", Ok("/cfg".to_string())),
            Some("/cfg".to_string())
        );
        assert_eq!(var_value("XDG_CONFIG_HOME", Err(VarError::NotPresent)), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_var_value_drops_non_unicode() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(vec![b'/', 0xff, b'x']);
        assert_eq!(var_value("XDG_CONFIG_HOME", Err(VarError::NotUnicode(raw))), None);
    }
}
