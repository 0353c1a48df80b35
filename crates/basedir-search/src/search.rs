use std::path::{Path, PathBuf};

use basedir_util::fs::{absolutize_logical, path_exists};

/// A marker found during an ascending search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// The directory the marker was found in.
    pub dir: PathBuf,
    /// The marker name as the caller passed it.
    pub marker: String,
}

impl Match {
    /// `dir/marker`.
    pub fn full_path(&self) -> PathBuf {
        self.dir.join(&self.marker)
    }
}

/// Parameters of one walk.
///
/// `markers` are tested in order within each directory. A marker only
/// counts if `predicate` (when set) accepts its full path. The walk halts
/// after finishing a directory that contains any of `stop_at`.
#[derive(Clone, Copy, Default)]
pub struct Query<'a> {
    pub markers: &'a [&'a str],
    pub stop_at: &'a [&'a str],
    pub predicate: Option<&'a dyn Fn(&Path) -> bool>,
    pub collect_all: bool,
}

impl<'a> Query<'a> {
    pub fn new(markers: &'a [&'a str]) -> Self {
        Self {
            markers,
            ..Self::default()
        }
    }

    pub fn stop_at(mut self, stop_at: &'a [&'a str]) -> Self {
        self.stop_at = stop_at;
        self
    }

    pub fn predicate(mut self, predicate: &'a dyn Fn(&Path) -> bool) -> Self {
        self.predicate = Some(predicate);
        self
    }

    pub fn collect_all(mut self) -> Self {
        self.collect_all = true;
        self
    }
}

impl std::fmt::Debug for Query<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Query")
            .field("markers", &self.markers)
            .field("stop_at", &self.stop_at)
            .field("predicate", &self.predicate.is_some())
            .field("collect_all", &self.collect_all)
            .finish()
    }
}

/// Walk from `start` toward the root, testing markers with `exists`.
///
/// `start` is made absolute against the current directory and cleaned
/// lexically; symlinks along the way are not resolved. Matches come back
/// nearest first. Without `collect_all` at most one match is returned.
pub fn walk_up(start: &Path, query: &Query<'_>, exists: impl Fn(&Path) -> bool) -> Vec<Match> {
    let mut found = Vec::new();
    if query.markers.is_empty() {
        return found;
    }

    let start = absolutize_logical(start);
    let mut dir = start.as_path();
    loop {
        tracing::trace!("Searching {} for {:?}", dir.display(), query.markers);

        for marker in query.markers {
            let candidate = dir.join(marker);
            if !exists(&candidate) {
                continue;
            }
            if let Some(predicate) = query.predicate {
                if !predicate(&candidate) {
                    continue;
                }
            }
            found.push(Match {
                dir: dir.to_path_buf(),
                marker: (*marker).to_string(),
            });
            if !query.collect_all {
                return found;
            }
            // One match per directory.
            break;
        }

        if query.stop_at.iter().any(|stop| exists(&dir.join(stop))) {
            tracing::trace!("Stop marker found in {}", dir.display());
            break;
        }

        match dir.parent() {
            Some(parent) if parent != dir => dir = parent,
            _ => break,
        }
    }
    found
}

/// Ascending marker search as a capability.
///
/// Only [`AscendingSearch::walk_up`] is required; the eight search
/// operations are built on it.
pub trait AscendingSearch {
    fn walk_up(&self, start: &Path, query: &Query<'_>) -> Vec<Match>;

    /// The nearest directory containing any of `markers`.
    fn find_up(&self, start: &Path, markers: &[&str]) -> Option<Match> {
        first(self.walk_up(start, &Query::new(markers)))
    }

    /// Like [`Self::find_up`], but a marker only counts if `predicate`
    /// accepts its full path.
    fn find_up_with(
        &self,
        start: &Path,
        markers: &[&str],
        predicate: &dyn Fn(&Path) -> bool,
    ) -> Option<Match> {
        first(self.walk_up(start, &Query::new(markers).predicate(predicate)))
    }

    /// Like [`Self::find_up`], but give up after a directory containing any
    /// of `stop_at`. A target in that same directory is still found.
    fn find_up_until(&self, start: &Path, markers: &[&str], stop_at: &[&str]) -> Option<Match> {
        first(self.walk_up(start, &Query::new(markers).stop_at(stop_at)))
    }

    fn find_up_until_with(
        &self,
        start: &Path,
        markers: &[&str],
        stop_at: &[&str],
        predicate: &dyn Fn(&Path) -> bool,
    ) -> Option<Match> {
        let query = Query::new(markers).stop_at(stop_at).predicate(predicate);
        first(self.walk_up(start, &query))
    }

    /// Every directory containing one of `markers`, nearest first.
    fn find_all_up(&self, start: &Path, markers: &[&str]) -> Vec<Match> {
        self.walk_up(start, &Query::new(markers).collect_all())
    }

    fn find_all_up_with(
        &self,
        start: &Path,
        markers: &[&str],
        predicate: &dyn Fn(&Path) -> bool,
    ) -> Vec<Match> {
        self.walk_up(start, &Query::new(markers).predicate(predicate).collect_all())
    }

    fn find_all_up_until(&self, start: &Path, markers: &[&str], stop_at: &[&str]) -> Vec<Match> {
        self.walk_up(start, &Query::new(markers).stop_at(stop_at).collect_all())
    }

    fn find_all_up_until_with(
        &self,
        start: &Path,
        markers: &[&str],
        stop_at: &[&str],
        predicate: &dyn Fn(&Path) -> bool,
    ) -> Vec<Match> {
        let query = Query::new(markers)
            .stop_at(stop_at)
            .predicate(predicate)
            .collect_all();
        self.walk_up(start, &query)
    }
}

fn first(matches: Vec<Match>) -> Option<Match> {
    matches.into_iter().next()
}

/// [`AscendingSearch`] against the real filesystem.
///
/// Existence follows symlinks, so a dangling symlink is not a match.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSearch;

impl AscendingSearch for FsSearch {
    fn walk_up(&self, start: &Path, query: &Query<'_>) -> Vec<Match> {
        walk_up(start, query, path_exists)
    }
}
