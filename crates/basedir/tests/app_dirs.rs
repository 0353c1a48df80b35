use std::fs;
use std::path::PathBuf;

use basedir::{
    AppDirs, AppIdentity, AscendingSearch, BasedirError, DirKind, DirResolver, Dirs, MapEnv,
    Platform, Resolver, ResolverConfig, Scope,
};
use tempfile::TempDir;

fn linux_dirs(home: &std::path::Path) -> AppDirs<MapEnv> {
    let env = MapEnv::new().with_home(home).with_uid(1000);
    let config = ResolverConfig::default().with_platform(Platform::Linux);
    AppDirs::with_env(AppIdentity::new("testapp"), config, env).unwrap()
}

#[test]
fn test_new_uses_host_platform() {
    let dirs = AppDirs::new("testapp").unwrap();
    assert_eq!(
        dirs.resolver().platform(),
        Platform::from_os_name(std::env::consts::OS)
    );
    assert!(dirs.user_config_dir().unwrap().is_absolute());
}

#[test]
fn test_new_rejects_blank_name() {
    assert!(matches!(
        AppDirs::new(" ").unwrap_err(),
        BasedirError::MissingApplicationName
    ));
}

#[test]
fn test_delegates_to_resolver() {
    let dirs = linux_dirs(std::path::Path::new("/home/u"));
    assert_eq!(dirs.user_config_dir().unwrap(), PathBuf::from("/home/u/.config/testapp"));
    assert_eq!(
        dirs.resolve_all(DirKind::Data, Scope::System).unwrap(),
        dirs.resolver().resolve_all(DirKind::Data, Scope::System).unwrap()
    );
    assert_eq!(dirs.to_string(), dirs.resolver().to_string());
}

#[test]
fn test_from_resolver() {
    let config = ResolverConfig::default().with_platform(Platform::MacOS);
    let env = MapEnv::new().with_home("/Users/u");
    let resolver = Resolver::with_env(AppIdentity::new("testapp"), config, env).unwrap();
    let dirs = AppDirs::from_resolver(resolver);
    assert_eq!(
        dirs.user_cache_dir().unwrap(),
        PathBuf::from("/Users/u/Library/Caches/testapp")
    );
}

/// Locate a project root, then the user's config for the app: both
/// capabilities through one bound.
fn project_and_config(dirs: &impl Dirs, start: &std::path::Path) -> Option<(PathBuf, PathBuf)> {
    let project = dirs.find_up(start, &[".testapp.toml"])?;
    let config = dirs.user_config_dir().ok()?;
    Some((project.dir, config))
}

#[test]
fn test_both_capabilities() {
    let tmp = TempDir::new().unwrap();
    let project = tmp.path().join("project");
    let src = project.join("src/bin");
    fs::create_dir_all(&src).unwrap();
    fs::write(project.join(".testapp.toml"), "").unwrap();

    let dirs = linux_dirs(&tmp.path().join("home"));
    let (root, config) = project_and_config(&dirs, &src).unwrap();
    assert_eq!(root, project);
    assert_eq!(config, tmp.path().join("home/.config/testapp"));
}

#[test]
fn test_ensure_and_find() {
    let tmp = TempDir::new().unwrap();
    let dirs = linux_dirs(&tmp.path().join("home"));
    let data = dirs.ensure_user_dir(DirKind::Data).unwrap();
    fs::write(data.join("index.db"), "").unwrap();
    assert_eq!(dirs.find_file(DirKind::Data, "index.db"), Some(data.join("index.db")));
}
