use std::io;
use std::path::{Component, Path, PathBuf};

/// Returns `true` if `path` exists, following symlinks.
///
/// A symlink whose target is missing does not exist.
pub fn path_exists(path: &Path) -> bool {
    std::fs::metadata(path).is_ok()
}

/// Ensure a directory exists, creating it and any parents if needed.
///
/// New directories are created owner-only (`0o700`) on Unix. A directory
/// that already exists, or that a concurrent caller creates first, is not an
/// error.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }

    match builder.create(path) {
        Ok(()) => {
            tracing::debug!("Created directory {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(e),
    }
}

/// Join `segments` onto `base` in order.
pub fn join_all<S: AsRef<Path>>(base: &Path, segments: &[S]) -> PathBuf {
    let mut path = base.to_path_buf();
    for segment in segments {
        path.push(segment);
    }
    path
}

/// Lexically clean a path: drop `.` components and fold `..` into the
/// preceding component. Symlinks are never consulted.
///
/// `..` directly under the root stays at the root; leading `..` of a
/// relative path are kept.
pub fn normalize_logical(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Make `path` absolute against the current directory and clean it
/// lexically, without resolving symlinks.
///
/// If the current directory cannot be read the cleaned relative path is
/// returned as-is.
pub fn absolutize_logical(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return normalize_logical(path);
    }
    match std::env::current_dir() {
        Ok(cwd) => normalize_logical(&cwd.join(path)),
        Err(e) => {
            tracing::warn!("Failed to read current directory, using {} as given: {e}", path.display());
            normalize_logical(path)
        }
    }
}
