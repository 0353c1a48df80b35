//! Cross-platform application directories.
//!
//! ```no_run
//! use basedir::{AppDirs, DirResolver};
//!
//! # fn main() -> basedir::BasedirResult<()> {
//! let dirs = AppDirs::new("myapp")?;
//! let config = dirs.user_config_dir()?;
//! let cache = dirs.ensure_user_dir(basedir::DirKind::Cache)?;
//! # let _ = (config, cache);
//! # Ok(())
//! # }
//! ```
//!
//! [`AppDirs`] bundles a [`Resolver`] with filesystem marker search. Code
//! that only needs one of the two should depend on [`DirResolver`] or
//! [`AscendingSearch`] instead so tests can substitute either.

mod app_dirs;

pub use app_dirs::{AppDirs, Dirs};

pub use basedir_core::{
    AppIdentity, BasedirError, BasedirResult, DirKind, DirResolver, EnvOverrides, Environment,
    KnownFolder, Location, MapEnv, Platform, PlatformChoice, Resolved, Resolver, ResolverConfig,
    RoleVars, Scope, SystemEnv,
};
pub use basedir_search::{walk_up, AscendingSearch, FsSearch, Match, Query};
