use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The logical directory kinds an application can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirKind {
    Config,
    Data,
    Cache,
    State,
    Log,
    Runtime,
}

impl DirKind {
    pub const ALL: [DirKind; 6] = [
        Self::Config,
        Self::Data,
        Self::Cache,
        Self::State,
        Self::Log,
        Self::Runtime,
    ];

    /// Config and data at system scope are ordered search lists; every other
    /// role has at most one directory.
    pub fn is_search_list(self, scope: Scope) -> bool {
        matches!(
            (scope, self),
            (Scope::System, Self::Config) | (Scope::System, Self::Data)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Data => "data",
            Self::Cache => "cache",
            Self::State => "state",
            Self::Log => "log",
            Self::Runtime => "runtime",
        }
    }
}

impl fmt::Display for DirKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-account or machine-wide resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    User,
    System,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::System => f.write_str("system"),
        }
    }
}

/// The single directory for a role, or an explicit "this platform has none".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Path(PathBuf),
    NotAvailable,
}

impl Location {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Path(path) => Some(path),
            Self::NotAvailable => None,
        }
    }

    pub fn into_path(self) -> Option<PathBuf> {
        match self {
            Self::Path(path) => Some(path),
            Self::NotAvailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Path(_))
    }

    /// Join `segments` onto the directory. `NotAvailable` stays `NotAvailable`.
    pub fn join<S: AsRef<Path>>(self, segments: &[S]) -> Self {
        match self {
            Self::Path(path) => Self::Path(basedir_util::fs::join_all(&path, segments)),
            Self::NotAvailable => Self::NotAvailable,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::NotAvailable => f.write_str("<not available>"),
        }
    }
}

/// A role's directory in its natural shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Single(PathBuf),
    /// Ordered, highest priority first.
    SearchList(Vec<PathBuf>),
    NotAvailable,
}

impl Resolved {
    /// The highest-priority directory, if any.
    pub fn primary(&self) -> Location {
        match self {
            Self::Single(path) => Location::Path(path.clone()),
            Self::SearchList(paths) => match paths.first() {
                Some(path) => Location::Path(path.clone()),
                None => Location::NotAvailable,
            },
            Self::NotAvailable => Location::NotAvailable,
        }
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        match self {
            Self::Single(path) => vec![path],
            Self::SearchList(paths) => paths,
            Self::NotAvailable => Vec::new(),
        }
    }
}
