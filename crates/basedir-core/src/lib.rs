//! Directory resolution for basedir.
//!
//! A [`Resolver`] maps an application identity onto the six directory kinds
//! (config, data, cache, state, log, runtime) at user and system scope. On
//! Linux and the BSDs it follows the XDG Base Directory Specification; on
//! macOS and Windows it uses the native layout while still honouring XDG
//! variables that are explicitly set.
//!
//! All ambient state (environment variables, home and temp directories, the
//! user id, Windows Known Folders) is read through the [`Environment`] trait,
//! so resolution can be made fully deterministic with [`MapEnv`].
//!
//! Nothing here creates directories unless asked to via
//! [`DirResolver::ensure_user_dir`].

pub mod config;
pub mod dirs;
pub mod env;
pub mod identity;
pub mod kind;
mod native;
pub mod platform;
pub mod resolver;
mod xdg;

pub use config::{EnvOverrides, ResolverConfig, RoleVars};
pub use dirs::DirResolver;
pub use env::{Environment, KnownFolder, MapEnv, SystemEnv};
pub use identity::AppIdentity;
pub use kind::{DirKind, Location, Resolved, Scope};
pub use platform::{Platform, PlatformChoice};
pub use resolver::Resolver;

pub use basedir_util::errors::{BasedirError, BasedirResult};
