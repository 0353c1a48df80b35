//! The resolution capability as a trait.
//!
//! Host applications should depend on [`DirResolver`] rather than on
//! [`Resolver`](crate::Resolver) so a fixed in-memory implementation can
//! stand in during tests. Only [`DirResolver::resolve`] and
//! [`DirResolver::resolve_all`] are required; everything else is built on
//! top of them.

use std::path::PathBuf;

use basedir_util::errors::{BasedirError, BasedirResult};
use basedir_util::fs::{ensure_dir, path_exists};

use crate::kind::{DirKind, Location, Resolved, Scope};

pub trait DirResolver {
    /// The primary directory for a role: where to write.
    fn resolve(&self, kind: DirKind, scope: Scope) -> BasedirResult<Location>;

    /// Every candidate directory for a role, highest priority first: where to
    /// read. For user scope the first entry always equals [`Self::resolve`].
    fn resolve_all(&self, kind: DirKind, scope: Scope) -> BasedirResult<Vec<PathBuf>>;

    /// The role's directory in its natural shape.
    fn lookup(&self, kind: DirKind, scope: Scope) -> BasedirResult<Resolved> {
        if kind.is_search_list(scope) {
            return Ok(Resolved::SearchList(self.resolve_all(kind, scope)?));
        }
        Ok(match self.resolve(kind, scope)? {
            Location::Path(path) => Resolved::Single(path),
            Location::NotAvailable => Resolved::NotAvailable,
        })
    }

    /// The primary directory with `segments` joined on.
    fn join(&self, kind: DirKind, scope: Scope, segments: &[&str]) -> BasedirResult<Location> {
        Ok(self.resolve(kind, scope)?.join(segments))
    }

    /// Every place `filename` could live for `kind`: user candidates first,
    /// then system ones. Roles that fail to resolve are skipped. Existence is
    /// not checked.
    fn candidate_files(&self, kind: DirKind, filename: &str) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        for scope in [Scope::User, Scope::System] {
            match self.resolve_all(kind, scope) {
                Ok(dirs) => paths.extend(dirs.into_iter().map(|dir| dir.join(filename))),
                Err(e) => tracing::debug!("Skipping {scope} {kind} candidates: {e}"),
            }
        }
        paths
    }

    /// The highest-priority existing instance of `filename`.
    fn find_file(&self, kind: DirKind, filename: &str) -> Option<PathBuf> {
        self.candidate_files(kind, filename)
            .into_iter()
            .find(|path| path_exists(path))
    }

    /// Every existing instance of `filename`, in priority order.
    fn existing_files(&self, kind: DirKind, filename: &str) -> Vec<PathBuf> {
        self.candidate_files(kind, filename)
            .into_iter()
            .filter(|path| path_exists(path))
            .collect()
    }

    /// Create the primary user directory for `kind` (owner-only on Unix) if
    /// it doesn't exist, and return it. Never called implicitly.
    fn ensure_user_dir(&self, kind: DirKind) -> BasedirResult<PathBuf> {
        let dir = self.user_dir(kind)?;
        ensure_dir(&dir)?;
        Ok(dir)
    }

    /// The primary user directory, which every platform provides.
    fn user_dir(&self, kind: DirKind) -> BasedirResult<PathBuf> {
        required(self.resolve(kind, Scope::User)?, kind, Scope::User)
    }

    fn user_config_dir(&self) -> BasedirResult<PathBuf> {
        self.user_dir(DirKind::Config)
    }

    fn user_data_dir(&self) -> BasedirResult<PathBuf> {
        self.user_dir(DirKind::Data)
    }

    fn user_cache_dir(&self) -> BasedirResult<PathBuf> {
        self.user_dir(DirKind::Cache)
    }

    fn user_state_dir(&self) -> BasedirResult<PathBuf> {
        self.user_dir(DirKind::State)
    }

    fn user_log_dir(&self) -> BasedirResult<PathBuf> {
        self.user_dir(DirKind::Log)
    }

    /// Fails with [`BasedirError::RuntimeDirUnavailable`] where no runtime
    /// directory can be produced.
    fn user_runtime_dir(&self) -> BasedirResult<PathBuf> {
        self.user_dir(DirKind::Runtime)
    }

    /// System config search list, highest priority first.
    fn system_config_dirs(&self) -> BasedirResult<Vec<PathBuf>> {
        self.resolve_all(DirKind::Config, Scope::System)
    }

    /// System data search list, highest priority first.
    fn system_data_dirs(&self) -> BasedirResult<Vec<PathBuf>> {
        self.resolve_all(DirKind::Data, Scope::System)
    }

    fn system_cache_dir(&self) -> BasedirResult<PathBuf> {
        required(self.resolve(DirKind::Cache, Scope::System)?, DirKind::Cache, Scope::System)
    }

    fn system_state_dir(&self) -> BasedirResult<PathBuf> {
        required(self.resolve(DirKind::State, Scope::System)?, DirKind::State, Scope::System)
    }

    fn system_log_dir(&self) -> BasedirResult<PathBuf> {
        required(self.resolve(DirKind::Log, Scope::System)?, DirKind::Log, Scope::System)
    }

    /// `None` on macOS and Windows, which have no system runtime directory.
    fn system_runtime_dir(&self) -> BasedirResult<Option<PathBuf>> {
        Ok(self.resolve(DirKind::Runtime, Scope::System)?.into_path())
    }
}

fn required(location: Location, kind: DirKind, scope: Scope) -> BasedirResult<PathBuf> {
    location.into_path().ok_or_else(|| BasedirError::Unavailable {
        role: format!("{scope} {kind}"),
    })
}

