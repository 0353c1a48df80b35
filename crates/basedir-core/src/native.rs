//! Native macOS and Windows directory layouts.

use std::path::PathBuf;

use crate::env::{Environment, KnownFolder};
use crate::kind::{DirKind, Resolved, Scope};
use crate::platform::Platform;
use crate::resolver::Resolver;

#[cfg(windows)]
fn default_program_data() -> PathBuf {
    PathBuf::from(r"C:\ProgramData")
}

#[cfg(not(windows))]
fn default_program_data() -> PathBuf {
    PathBuf::from("/ProgramData")
}

impl<E: Environment> Resolver<E> {
    /// The native layout for a role, or `None` on XDG-native platforms.
    pub(crate) fn native_dir(&self, kind: DirKind, scope: Scope) -> Option<Resolved> {
        match self.platform {
            Platform::MacOS => Some(self.macos_dir(kind, scope)),
            Platform::Windows => Some(self.windows_dir(kind, scope)),
            Platform::Linux | Platform::FreeBSD | Platform::OpenBSD => None,
        }
    }

    fn macos_dir(&self, kind: DirKind, scope: Scope) -> Resolved {
        let app = self.identity.app_path();
        let library = match scope {
            Scope::User => self.home().join("Library"),
            Scope::System => PathBuf::from("/Library"),
        };
        let support = library.join("Application Support").join(&app);

        match (scope, kind) {
            (Scope::User, DirKind::Config | DirKind::Data | DirKind::State) => {
                Resolved::Single(support)
            }
            (Scope::User, DirKind::Runtime) => Resolved::Single(self.env.temp_dir().join(&app)),
            (Scope::System, DirKind::Config | DirKind::Data) => Resolved::SearchList(vec![support]),
            (Scope::System, DirKind::State) => Resolved::Single(support),
            (Scope::System, DirKind::Runtime) => Resolved::NotAvailable,
            (_, DirKind::Cache) => Resolved::Single(library.join("Caches").join(&app)),
            (_, DirKind::Log) => Resolved::Single(library.join("Logs").join(&app)),
        }
    }

    fn windows_dir(&self, kind: DirKind, scope: Scope) -> Resolved {
        let app = self.identity.windows_app_path();
        match scope {
            Scope::User => {
                let profile = if self.config.roaming_on_windows {
                    KnownFolder::RoamingAppData
                } else {
                    KnownFolder::LocalAppData
                };
                // Cache, log and runtime never roam.
                let local = || self.known_folder_root(KnownFolder::LocalAppData).join(&app);
                match kind {
                    DirKind::Config | DirKind::Data | DirKind::State => {
                        Resolved::Single(self.known_folder_root(profile).join(&app))
                    }
                    DirKind::Cache => Resolved::Single(local().join("cache")),
                    DirKind::Log => Resolved::Single(local().join("log")),
                    DirKind::Runtime => Resolved::Single(local().join("runtime")),
                }
            }
            Scope::System => {
                let base = self.known_folder_root(KnownFolder::ProgramData).join(&app);
                match kind {
                    DirKind::Config | DirKind::Data => Resolved::SearchList(vec![base]),
                    DirKind::State => Resolved::Single(base),
                    DirKind::Cache => Resolved::Single(base.join("cache")),
                    DirKind::Log => Resolved::Single(base.join("log")),
                    DirKind::Runtime => Resolved::NotAvailable,
                }
            }
        }
    }

    /// Known Folder API, then its environment variable, then the layout a
    /// default Windows profile would have.
    fn known_folder_root(&self, folder: KnownFolder) -> PathBuf {
        if let Some(path) = self.env.known_folder(folder) {
            return path;
        }
        if let Some(path) = self.var(folder.env_var()) {
            tracing::debug!("Known folder {folder:?} unavailable, using ${}", folder.env_var());
            return PathBuf::from(path);
        }
        tracing::warn!(
            "Known folder {folder:?} unavailable and ${} unset, using the default profile layout",
            folder.env_var()
        );
        match folder {
            KnownFolder::RoamingAppData => self.home().join("AppData").join("Roaming"),
            KnownFolder::LocalAppData => self.home().join("AppData").join("Local"),
            KnownFolder::ProgramData => default_program_data(),
        }
    }
}
