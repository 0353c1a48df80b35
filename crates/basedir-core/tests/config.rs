use basedir_core::{DirKind, EnvOverrides, PlatformChoice, ResolverConfig, Scope};
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = ResolverConfig::default();
    assert_eq!(config.platform, PlatformChoice::Auto);
    assert!(!config.roaming_on_windows);
    assert!(!config.use_xdg_everywhere);
    assert!(config.include_xdg_fallbacks.is_none());
    assert!(config.includes_xdg_fallbacks());
    assert!(config.env_overrides.is_none());
}

#[test]
fn test_empty_toml_is_default() {
    let config = ResolverConfig::from_toml_str("").unwrap();
    assert_eq!(config, ResolverConfig::default());
}

#[test]
fn test_parse_from_toml() {
    let toml = r#"
platform = "macos"
roaming-on-windows = true
use-xdg-everywhere = true
include-xdg-fallbacks = false

[env-overrides]
append-identity = true

[env-overrides.user]
config = "MYAPP_CONFIG_HOME"
runtime = "MYAPP_RUNTIME_DIR"

[env-overrides.system]
log = "MYAPP_SYSTEM_LOG"
"#;
    let config = ResolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.platform, PlatformChoice::MacOS);
    assert!(config.roaming_on_windows);
    assert!(config.use_xdg_everywhere);
    assert!(!config.includes_xdg_fallbacks());

    let overrides = config.env_overrides.unwrap();
    assert!(overrides.append_identity);
    assert_eq!(overrides.var_for(DirKind::Config, Scope::User), Some("MYAPP_CONFIG_HOME"));
    assert_eq!(overrides.var_for(DirKind::Runtime, Scope::User), Some("MYAPP_RUNTIME_DIR"));
    assert_eq!(overrides.var_for(DirKind::Log, Scope::System), Some("MYAPP_SYSTEM_LOG"));
    assert_eq!(overrides.var_for(DirKind::Log, Scope::User), None);
}

#[test]
fn test_parse_all_platform_names() {
    for (name, expected) in [
        ("auto", PlatformChoice::Auto),
        ("linux", PlatformChoice::Linux),
        ("macos", PlatformChoice::MacOS),
        ("windows", PlatformChoice::Windows),
        ("freebsd", PlatformChoice::FreeBSD),
        ("openbsd", PlatformChoice::OpenBSD),
    ] {
        let config = ResolverConfig::from_toml_str(&format!("platform = \"{name}\"")).unwrap();
        assert_eq!(config.platform, expected);
    }
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = ResolverConfig::from_toml_str("platform = \"beos\"").unwrap_err();
    assert!(err.to_string().starts_with("Config error:"), "got: {err}");
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = ResolverConfig::load(&tmp.path().join("absent.toml")).unwrap();
    assert_eq!(config, ResolverConfig::default());
}

#[test]
fn test_load_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("dirs.toml");
    std::fs::write(&path, "platform = \"windows\"\nroaming-on-windows = true\n").unwrap();
    let config = ResolverConfig::load(&path).unwrap();
    assert_eq!(config.platform, PlatformChoice::Windows);
    assert!(config.roaming_on_windows);
}

#[test]
fn test_load_malformed_file_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("dirs.toml");
    std::fs::write(&path, "use-xdg-everywhere = \"sometimes\"").unwrap();
    assert!(ResolverConfig::load(&path).is_err());
}

#[test]
fn test_env_overrides_builder_and_empty_names() {
    let overrides = EnvOverrides::new()
        .with_var(DirKind::Cache, Scope::System, "MYAPP_SYSTEM_CACHE")
        .with_var(DirKind::Data, Scope::User, "");
    assert_eq!(
        overrides.var_for(DirKind::Cache, Scope::System),
        Some("MYAPP_SYSTEM_CACHE")
    );
    assert_eq!(overrides.var_for(DirKind::Cache, Scope::User), None);
    assert_eq!(overrides.var_for(DirKind::Data, Scope::User), None);
    assert!(!overrides.append_identity);
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = ResolverConfig::default()
        .with_xdg_fallbacks(false)
        .with_env_overrides(EnvOverrides::new().with_var(DirKind::Log, Scope::User, "MYAPP_LOG"));
    let text = toml::to_string(&config).unwrap();
    assert_eq!(ResolverConfig::from_toml_str(&text).unwrap(), config);
}
