use std::fmt;
use std::path::{Path, PathBuf};

use basedir_core::{
    AppIdentity, BasedirResult, DirKind, DirResolver, Environment, Location, Resolved, Resolver,
    ResolverConfig, Scope, SystemEnv,
};
use basedir_search::{AscendingSearch, FsSearch, Match, Query};

/// Both capabilities in one bound.
pub trait Dirs: DirResolver + AscendingSearch {}

impl<T: DirResolver + AscendingSearch + ?Sized> Dirs for T {}

/// Directory resolution for one application plus filesystem marker search.
#[derive(Debug, Clone)]
pub struct AppDirs<E = SystemEnv> {
    resolver: Resolver<E>,
    search: FsSearch,
}

impl AppDirs<SystemEnv> {
    /// Default policy for `name` on the host platform.
    pub fn new(name: impl Into<String>) -> BasedirResult<Self> {
        Self::with_config(AppIdentity::new(name), ResolverConfig::default())
    }

    pub fn with_config(identity: AppIdentity, config: ResolverConfig) -> BasedirResult<Self> {
        Ok(Self::from_resolver(Resolver::new(identity, config)?))
    }
}

impl<E: Environment> AppDirs<E> {
    pub fn with_env(identity: AppIdentity, config: ResolverConfig, env: E) -> BasedirResult<Self> {
        Ok(Self::from_resolver(Resolver::with_env(identity, config, env)?))
    }

    pub fn from_resolver(resolver: Resolver<E>) -> Self {
        Self {
            resolver,
            search: FsSearch,
        }
    }

    pub fn resolver(&self) -> &Resolver<E> {
        &self.resolver
    }
}

impl<E: Environment> DirResolver for AppDirs<E> {
    fn resolve(&self, kind: DirKind, scope: Scope) -> BasedirResult<Location> {
        self.resolver.resolve(kind, scope)
    }

    fn resolve_all(&self, kind: DirKind, scope: Scope) -> BasedirResult<Vec<PathBuf>> {
        self.resolver.resolve_all(kind, scope)
    }

    fn lookup(&self, kind: DirKind, scope: Scope) -> BasedirResult<Resolved> {
        self.resolver.lookup(kind, scope)
    }
}

impl<E> AscendingSearch for AppDirs<E> {
    fn walk_up(&self, start: &Path, query: &Query<'_>) -> Vec<Match> {
        self.search.walk_up(start, query)
    }
}

impl<E: Environment> fmt::Display for AppDirs<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.resolver, f)
    }
}
