use std::path::PathBuf;

/// The application whose directories are being resolved.
///
/// `author` only affects Windows paths. Empty `author`/`version` strings are
/// treated as unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    pub name: String,
    pub author: Option<String>,
    pub version: Option<String>,
}

impl AppIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: None,
            version: None,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// `true` when the name is non-empty after trimming whitespace.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref().filter(|a| !a.is_empty())
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.is_empty())
    }

    /// `{name}[/{version}]`
    pub fn app_path(&self) -> PathBuf {
        let mut path = PathBuf::from(&self.name);
        if let Some(version) = self.version() {
            path.push(version);
        }
        path
    }

    /// `[{author}/]{name}[/{version}]`, the Windows layout.
    pub fn windows_app_path(&self) -> PathBuf {
        match self.author() {
            Some(author) => PathBuf::from(author).join(self.app_path()),
            None => self.app_path(),
        }
    }
}
