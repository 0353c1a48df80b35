use std::path::PathBuf;

use basedir_core::{
    AppIdentity, DirKind, DirResolver, EnvOverrides, MapEnv, Platform, Resolver, ResolverConfig,
    Scope,
};

fn env() -> MapEnv {
    MapEnv::new()
        .with_home("/home/u")
        .with_temp_dir("/tmp")
        .with_uid(1000)
        .with_var("MYAPP_CONFIG", "/override/config")
        .with_var("MYAPP_SYSTEM_CONFIG", "/override/etc")
        .with_var("MYAPP_RUNTIME", "/override/run")
        .with_var("MYAPP_EMPTY", "")
        .with_var("XDG_CONFIG_HOME", "/xdg/config")
}

fn overrides(append: bool) -> EnvOverrides {
    EnvOverrides::new()
        .with_append_identity(append)
        .with_var(DirKind::Config, Scope::User, "MYAPP_CONFIG")
        .with_var(DirKind::Config, Scope::System, "MYAPP_SYSTEM_CONFIG")
        .with_var(DirKind::Runtime, Scope::User, "MYAPP_RUNTIME")
        .with_var(DirKind::Data, Scope::User, "MYAPP_EMPTY")
        .with_var(DirKind::Cache, Scope::User, "MYAPP_UNSET")
}

fn resolver(identity: AppIdentity, platform: Platform, append: bool, env: MapEnv) -> Resolver<MapEnv> {
    let config = ResolverConfig::default()
        .with_platform(platform)
        .with_env_overrides(overrides(append));
    Resolver::with_env(identity, config, env).unwrap()
}

#[test]
fn test_override_verbatim() {
    let r = resolver(AppIdentity::new("testapp"), Platform::Linux, false, env());
    assert_eq!(r.user_config_dir().unwrap(), PathBuf::from("/override/config"));
}

#[test]
fn test_override_verbatim_is_byte_for_byte() {
    let env = env().with_var("MYAPP_CONFIG", "relative/./odd//path");
    let r = resolver(AppIdentity::new("testapp"), Platform::Linux, false, env);
    assert_eq!(
        r.user_config_dir().unwrap().as_os_str(),
        std::ffi::OsStr::new("relative/./odd//path")
    );
}

#[test]
fn test_override_appends_identity() {
    let r = resolver(
        AppIdentity::new("testapp").with_version("3.0"),
        Platform::Linux,
        true,
        env(),
    );
    assert_eq!(r.user_config_dir().unwrap(), PathBuf::from("/override/config/testapp/3.0"));
}

#[test]
fn test_override_appends_author_on_windows_user_scope() {
    let identity = AppIdentity::new("testapp").with_author("MyCompany");
    let r = resolver(identity, Platform::Windows, true, env());
    assert_eq!(
        r.user_config_dir().unwrap(),
        PathBuf::from("/override/config/MyCompany/testapp")
    );
    assert_eq!(
        r.system_config_dirs().unwrap(),
        vec![PathBuf::from("/override/etc/testapp")]
    );
}

#[test]
fn test_override_beats_xdg_variables() {
    let r = resolver(AppIdentity::new("testapp"), Platform::MacOS, false, env());
    assert_eq!(r.user_config_dir().unwrap(), PathBuf::from("/override/config"));
}

#[test]
fn test_empty_or_unset_override_falls_through() {
    let r = resolver(AppIdentity::new("testapp"), Platform::Linux, false, env());
    assert_eq!(r.user_data_dir().unwrap(), PathBuf::from("/home/u/.local/share/testapp"));
    assert_eq!(r.user_cache_dir().unwrap(), PathBuf::from("/home/u/.cache/testapp"));
}

#[test]
fn test_system_search_list_override_replaces_list() {
    let env = env().with_var("XDG_CONFIG_DIRS", "/a:/b");
    let r = resolver(AppIdentity::new("testapp"), Platform::Linux, false, env);
    assert_eq!(
        r.resolve_all(DirKind::Config, Scope::System).unwrap(),
        vec![PathBuf::from("/override/etc")]
    );
}

#[test]
fn test_runtime_override_needs_no_uid() {
    let env = MapEnv::new()
        .with_home("/home/u")
        .with_var("MYAPP_RUNTIME", "/override/run");
    let r = resolver(AppIdentity::new("testapp"), Platform::Linux, false, env);
    assert_eq!(r.user_runtime_dir().unwrap(), PathBuf::from("/override/run"));
}

#[test]
fn test_override_keeps_xdg_fallback_on_native_platforms() {
    let env = env().with_var("XDG_CONFIG_HOME", "");
    let r = resolver(AppIdentity::new("testapp"), Platform::MacOS, false, env);
    assert_eq!(
        r.resolve_all(DirKind::Config, Scope::User).unwrap(),
        vec![
            PathBuf::from("/override/config"),
            PathBuf::from("/home/u/.config/testapp"),
        ]
    );
}
