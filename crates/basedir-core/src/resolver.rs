use std::fmt;
use std::path::PathBuf;

use basedir_util::errors::{BasedirError, BasedirResult};

use crate::config::ResolverConfig;
use crate::dirs::DirResolver;
use crate::env::{Environment, SystemEnv};
use crate::identity::AppIdentity;
use crate::kind::{DirKind, Location, Resolved, Scope};
use crate::platform::Platform;
use crate::xdg::Lookup;

/// Resolves application directories for one identity under one policy.
///
/// Construction fixes the platform (auto-detection happens once, here) and
/// the configuration; every query afterwards is a pure function of the role,
/// the environment and that snapshot. Safe to share across threads.
///
/// Resolution order for every role:
///
/// 1. An application override variable from [`EnvOverrides`](crate::EnvOverrides).
/// 2. On Linux/FreeBSD/OpenBSD, or with `use_xdg_everywhere`, the XDG
///    algorithm (variables, then XDG/FHS defaults).
/// 3. Elsewhere, an XDG variable that is explicitly set.
/// 4. The platform's native layout.
#[derive(Debug, Clone)]
pub struct Resolver<E = SystemEnv> {
    pub(crate) identity: AppIdentity,
    pub(crate) config: ResolverConfig,
    pub(crate) platform: Platform,
    pub(crate) env: E,
}

impl Resolver<SystemEnv> {
    /// Build a resolver over the real process environment.
    pub fn new(identity: AppIdentity, config: ResolverConfig) -> BasedirResult<Self> {
        Self::with_env(identity, config, SystemEnv)
    }
}

impl<E: Environment> Resolver<E> {
    /// Build a resolver reading ambient state through `env`.
    ///
    /// Fails with [`BasedirError::MissingApplicationName`] if the name is
    /// empty or whitespace-only.
    pub fn with_env(identity: AppIdentity, config: ResolverConfig, env: E) -> BasedirResult<Self> {
        if !identity.is_valid() {
            return Err(BasedirError::MissingApplicationName);
        }
        let platform = config.platform.resolve(|| env.os_name());
        tracing::debug!("Resolving directories for {} using {platform} conventions", identity.name);
        Ok(Self {
            identity,
            config,
            platform,
            env,
        })
    }

    pub fn identity(&self) -> &AppIdentity {
        &self.identity
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The concrete platform chosen at construction.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// XDG resolution is primary on XDG-native platforms or when forced.
    pub(crate) fn uses_xdg(&self) -> bool {
        self.platform.is_xdg_native() || self.config.use_xdg_everywhere
    }

    /// An environment variable, with empty values treated as unset.
    pub(crate) fn var(&self, key: &str) -> Option<String> {
        self.env.var(key).filter(|v| !v.is_empty())
    }

    pub(crate) fn home(&self) -> PathBuf {
        match self.env.home_dir() {
            Some(home) => home,
            None => {
                let temp = self.env.temp_dir();
                tracing::warn!(
                    "Home directory could not be determined, using {} instead",
                    temp.display()
                );
                temp
            }
        }
    }

    fn override_dir(&self, kind: DirKind, scope: Scope) -> Option<PathBuf> {
        let overrides = self.config.env_overrides.as_ref()?;
        let var = overrides.var_for(kind, scope)?;
        let value = self.var(var)?;
        tracing::debug!("{scope} {kind} directory taken from ${var}");

        if !overrides.append_identity {
            return Some(PathBuf::from(value));
        }
        let app = match (self.platform, scope) {
            (Platform::Windows, Scope::User) => self.identity.windows_app_path(),
            _ => self.identity.app_path(),
        };
        Some(PathBuf::from(value).join(app))
    }

    fn lookup_role(&self, kind: DirKind, scope: Scope) -> BasedirResult<Resolved> {
        if let Some(dir) = self.override_dir(kind, scope) {
            return Ok(if kind.is_search_list(scope) {
                Resolved::SearchList(vec![dir])
            } else {
                Resolved::Single(dir)
            });
        }

        if self.uses_xdg() {
            return self.xdg_dir(kind, scope);
        }

        if let Some(found) = self.xdg_explicit_dir(kind, scope) {
            tracing::debug!("{scope} {kind} directory taken from an explicit XDG variable");
            return Ok(found);
        }

        match self.native_dir(kind, scope) {
            Some(found) => Ok(found),
            None => self.xdg_dir(kind, scope),
        }
    }

    /// Whether user candidate lists get the XDG default appended.
    fn wants_xdg_fallbacks(&self) -> bool {
        !self.uses_xdg() && self.config.includes_xdg_fallbacks()
    }
}

impl<E: Environment> DirResolver for Resolver<E> {
    fn resolve(&self, kind: DirKind, scope: Scope) -> BasedirResult<Location> {
        Ok(self.lookup_role(kind, scope)?.primary())
    }

    fn resolve_all(&self, kind: DirKind, scope: Scope) -> BasedirResult<Vec<PathBuf>> {
        let mut dirs = self.lookup_role(kind, scope)?.into_paths();
        if scope == Scope::User && self.wants_xdg_fallbacks() {
            if let (Some(primary), Some(fallback)) =
                (dirs.first(), self.xdg_user_dir(kind, Lookup::DefaultOnly))
            {
                if *primary != fallback {
                    dirs.push(fallback);
                }
            }
        }
        Ok(dirs)
    }

    fn lookup(&self, kind: DirKind, scope: Scope) -> BasedirResult<Resolved> {
        self.lookup_role(kind, scope)
    }
}

impl<E: Environment> fmt::Display for Resolver<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "basedir::Resolver {{")?;
        writeln!(f, "  name:     {:?}", self.identity.name)?;
        if let Some(version) = self.identity.version() {
            writeln!(f, "  version:  {version:?}")?;
        }
        writeln!(f, "  platform: {}", self.platform)?;

        for scope in [Scope::User, Scope::System] {
            writeln!(f)?;
            writeln!(f, "  {scope} directories:")?;
            for kind in DirKind::ALL {
                let label = format!("{kind}:");
                match self.resolve(kind, scope) {
                    Ok(location) => writeln!(f, "    {label:<9}{location}")?,
                    Err(e) => writeln!(f, "    {label:<9}<error: {e}>")?,
                }
            }
        }
        write!(f, "}}")
    }
}
