//! XDG Base Directory resolution, plus the FHS locations used for
//! system-scope cache/state/log/runtime on XDG platforms.

use std::path::PathBuf;

use basedir_util::errors::{BasedirError, BasedirResult};
use basedir_util::fs::join_all;

use crate::env::Environment;
use crate::kind::{DirKind, Location, Resolved, Scope};
use crate::resolver::Resolver;

const XDG_RUNTIME_DIR: &str = "XDG_RUNTIME_DIR";

/// Which sources an XDG lookup may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lookup {
    /// Variable if set, otherwise the default.
    EnvThenDefault,
    /// Only an explicitly set variable.
    EnvOnly,
    /// Only the default, ignoring variables.
    DefaultOnly,
}

impl Lookup {
    fn env(self) -> bool {
        matches!(self, Self::EnvThenDefault | Self::EnvOnly)
    }

    fn default(self) -> bool {
        matches!(self, Self::EnvThenDefault | Self::DefaultOnly)
    }
}

/// Base variable and `$HOME`-relative default for user kinds that have one.
fn user_base(kind: DirKind) -> Option<(&'static str, &'static [&'static str])> {
    match kind {
        DirKind::Config => Some(("XDG_CONFIG_HOME", &[".config"])),
        DirKind::Data => Some(("XDG_DATA_HOME", &[".local", "share"])),
        DirKind::Cache => Some(("XDG_CACHE_HOME", &[".cache"])),
        DirKind::State => Some(("XDG_STATE_HOME", &[".local", "state"])),
        DirKind::Log | DirKind::Runtime => None,
    }
}

/// Colon-separated search variable and its default for system kinds that
/// are search lists.
fn system_search_base(kind: DirKind) -> Option<(&'static str, &'static str)> {
    match kind {
        DirKind::Config => Some(("XDG_CONFIG_DIRS", "/etc/xdg")),
        DirKind::Data => Some(("XDG_DATA_DIRS", "/usr/local/share:/usr/share")),
        DirKind::Cache | DirKind::State | DirKind::Log | DirKind::Runtime => None,
    }
}

fn fhs_root(kind: DirKind) -> Option<&'static str> {
    match kind {
        DirKind::Cache => Some("/var/cache"),
        DirKind::State => Some("/var/lib"),
        DirKind::Log => Some("/var/log"),
        DirKind::Runtime => Some("/run"),
        DirKind::Config | DirKind::Data => None,
    }
}

impl<E: Environment> Resolver<E> {
    /// The full XDG algorithm for a role.
    pub(crate) fn xdg_dir(&self, kind: DirKind, scope: Scope) -> BasedirResult<Resolved> {
        let found = match (scope, kind) {
            (Scope::User, DirKind::Runtime) => Some(Resolved::Single(self.xdg_runtime_dir()?)),
            (Scope::User, _) => self
                .xdg_user_dir(kind, Lookup::EnvThenDefault)
                .map(Resolved::Single),
            (Scope::System, _) => self.xdg_system_dir(kind, Lookup::EnvThenDefault),
        };
        Ok(found.unwrap_or(Resolved::NotAvailable))
    }

    /// A role decided by an explicitly set XDG variable, if any.
    pub(crate) fn xdg_explicit_dir(&self, kind: DirKind, scope: Scope) -> Option<Resolved> {
        match (scope, kind) {
            (Scope::User, DirKind::Runtime) => self.xdg_runtime_explicit().map(Resolved::Single),
            (Scope::User, _) => self.xdg_user_dir(kind, Lookup::EnvOnly).map(Resolved::Single),
            (Scope::System, _) => self.xdg_system_dir(kind, Lookup::EnvOnly),
        }
    }

    /// User config/data/cache/state/log under XDG rules. Log is not an XDG
    /// concept and lives under the state directory. Runtime is handled by
    /// [`Self::xdg_runtime_dir`].
    pub(crate) fn xdg_user_dir(&self, kind: DirKind, lookup: Lookup) -> Option<PathBuf> {
        if kind == DirKind::Log {
            return self
                .xdg_user_dir(DirKind::State, lookup)
                .map(|state| state.join("log"));
        }

        let (var, default) = user_base(kind)?;
        let from_env = if lookup.env() {
            self.var(var).map(PathBuf::from)
        } else {
            None
        };
        let base = match from_env {
            Some(base) => base,
            None if lookup.default() => join_all(&self.home(), default),
            None => return None,
        };
        Some(base.join(self.identity.app_path()))
    }

    fn xdg_runtime_explicit(&self) -> Option<PathBuf> {
        self.var(XDG_RUNTIME_DIR)
            .map(|dir| PathBuf::from(dir).join(self.identity.app_path()))
    }

    /// `$XDG_RUNTIME_DIR/{app}`, else `{temp}/{name}-{uid}`.
    ///
    /// The temp fallback is neither tmpfs-backed nor restricted to the user,
    /// so it does not give the guarantees XDG requires of a runtime
    /// directory. Its shape is stable. Without a uid, platforms that have a
    /// native runtime directory use it instead.
    fn xdg_runtime_dir(&self) -> BasedirResult<PathBuf> {
        if let Some(dir) = self.xdg_runtime_explicit() {
            return Ok(dir);
        }
        if let Some(uid) = self.env.uid() {
            return Ok(self
                .env
                .temp_dir()
                .join(format!("{}-{uid}", self.identity.name)));
        }
        if let Some(Location::Path(dir)) = self
            .native_dir(DirKind::Runtime, Scope::User)
            .map(|found| found.primary())
        {
            tracing::debug!("User id unknown, using the {} runtime directory", self.platform);
            return Ok(dir);
        }
        Err(BasedirError::RuntimeDirUnavailable {
            platform: self.platform.to_string(),
            reason: format!("{XDG_RUNTIME_DIR} is not set and the user id is unknown"),
        })
    }

    fn xdg_system_dir(&self, kind: DirKind, lookup: Lookup) -> Option<Resolved> {
        if let Some((var, default)) = system_search_base(kind) {
            let from_env = if lookup.env() {
                self.var(var)
                    .map(|value| self.split_search_path(&value))
                    .filter(|dirs| !dirs.is_empty())
            } else {
                None
            };
            return match from_env {
                Some(dirs) => Some(Resolved::SearchList(dirs)),
                None if lookup.default() => {
                    Some(Resolved::SearchList(self.split_search_path(default)))
                }
                None => None,
            };
        }

        if !lookup.default() {
            return None;
        }
        fhs_root(kind).map(|root| Resolved::Single(PathBuf::from(root).join(self.identity.app_path())))
    }

    /// Split a colon-separated list, skipping empty segments, and append the
    /// application path to each entry.
    fn split_search_path(&self, value: &str) -> Vec<PathBuf> {
        let app = self.identity.app_path();
        value
            .split(':')
            .filter(|segment| !segment.is_empty())
            .map(|segment| PathBuf::from(segment).join(&app))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_sources() {
        assert!(Lookup::EnvThenDefault.env() && Lookup::EnvThenDefault.default());
        assert!(Lookup::EnvOnly.env() && !Lookup::EnvOnly.default());
        assert!(!Lookup::DefaultOnly.env() && Lookup::DefaultOnly.default());
    }

    #[test]
    fn test_tables_cover_disjoint_kinds() {
        for kind in DirKind::ALL {
            let has_user_base = user_base(kind).is_some();
            let is_search = system_search_base(kind).is_some();
            let is_fhs = fhs_root(kind).is_some();
            assert_ne!(is_search, is_fhs, "{kind} must be exactly one of search list / FHS");
            if matches!(kind, DirKind::Log | DirKind::Runtime) {
                assert!(!has_user_base);
            }
        }
    }
}
