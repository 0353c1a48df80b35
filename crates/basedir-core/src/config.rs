use std::path::Path;

use basedir_util::errors::{BasedirError, BasedirResult};
use serde::{Deserialize, Serialize};

use crate::kind::{DirKind, Scope};
use crate::platform::PlatformChoice;

/// Resolution policy, fixed for the lifetime of a [`Resolver`](crate::Resolver).
///
/// Can be built in code or loaded from TOML:
///
/// ```toml
/// platform = "macos"
/// use-xdg-everywhere = false
/// include-xdg-fallbacks = true
///
/// [env-overrides]
/// append-identity = true
///
/// [env-overrides.user]
/// config = "MYAPP_CONFIG_HOME"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ResolverConfig {
    pub platform: PlatformChoice,

    /// Use the roaming profile instead of the local one for Windows user
    /// config/data/state.
    pub roaming_on_windows: bool,

    /// Use XDG resolution on macOS and Windows too.
    pub use_xdg_everywhere: bool,

    /// Append the XDG default to user candidate lists on non-XDG platforms.
    /// Unset means `true`.
    pub include_xdg_fallbacks: Option<bool>,

    pub env_overrides: Option<EnvOverrides>,
}

impl ResolverConfig {
    pub fn with_platform(mut self, platform: impl Into<PlatformChoice>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn with_roaming_on_windows(mut self, roaming: bool) -> Self {
        self.roaming_on_windows = roaming;
        self
    }

    pub fn with_xdg_everywhere(mut self, enabled: bool) -> Self {
        self.use_xdg_everywhere = enabled;
        self
    }

    pub fn with_xdg_fallbacks(mut self, include: bool) -> Self {
        self.include_xdg_fallbacks = Some(include);
        self
    }

    pub fn with_env_overrides(mut self, overrides: EnvOverrides) -> Self {
        self.env_overrides = Some(overrides);
        self
    }

    pub fn includes_xdg_fallbacks(&self) -> bool {
        self.include_xdg_fallbacks.unwrap_or(true)
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(content: &str) -> BasedirResult<Self> {
        toml::from_str(content).map_err(|e| BasedirError::Config {
            message: format!("Failed to parse resolver config: {e}"),
        })
    }

    /// Load a config file, or return defaults if it doesn't exist.
    pub fn load(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| BasedirError::Config {
            message: format!("Failed to read resolver config {}: {e}", path.display()),
        })?;
        Ok(Self::from_toml_str(&content)?)
    }
}

/// Application-specific environment variables that take precedence over
/// every other resolution strategy when set to a non-empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EnvOverrides {
    /// Append `{name}[/{version}]` to the variable's value instead of using
    /// it verbatim.
    pub append_identity: bool,
    pub user: RoleVars,
    pub system: RoleVars,
}

impl EnvOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_append_identity(mut self, append: bool) -> Self {
        self.append_identity = append;
        self
    }

    /// Bind `var` as the override for `(kind, scope)`.
    pub fn with_var(mut self, kind: DirKind, scope: Scope, var: impl Into<String>) -> Self {
        *self.scope_mut(scope).slot_mut(kind) = Some(var.into());
        self
    }

    /// The variable name bound to a role, if any.
    pub fn var_for(&self, kind: DirKind, scope: Scope) -> Option<&str> {
        match scope {
            Scope::User => self.user.get(kind),
            Scope::System => self.system.get(kind),
        }
    }

    fn scope_mut(&mut self, scope: Scope) -> &mut RoleVars {
        match scope {
            Scope::User => &mut self.user,
            Scope::System => &mut self.system,
        }
    }
}

/// One optional variable name per directory kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleVars {
    pub config: Option<String>,
    pub data: Option<String>,
    pub cache: Option<String>,
    pub state: Option<String>,
    pub log: Option<String>,
    pub runtime: Option<String>,
}

impl RoleVars {
    pub fn get(&self, kind: DirKind) -> Option<&str> {
        let slot = match kind {
            DirKind::Config => &self.config,
            DirKind::Data => &self.data,
            DirKind::Cache => &self.cache,
            DirKind::State => &self.state,
            DirKind::Log => &self.log,
            DirKind::Runtime => &self.runtime,
        };
        slot.as_deref().filter(|v| !v.is_empty())
    }

    fn slot_mut(&mut self, kind: DirKind) -> &mut Option<String> {
        match kind {
            DirKind::Config => &mut self.config,
            DirKind::Data => &mut self.data,
            DirKind::Cache => &mut self.cache,
            DirKind::State => &mut self.state,
            DirKind::Log => &mut self.log,
            DirKind::Runtime => &mut self.runtime,
        }
    }
}
