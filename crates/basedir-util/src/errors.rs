use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all basedir operations.
#[derive(Debug, Error, Diagnostic)]
pub enum BasedirError {
    /// The application identity has an empty or whitespace-only name.
    #[error("Application name is required")]
    #[diagnostic(help("Pass a non-empty application name, e.g. AppIdentity::new(\"myapp\")"))]
    MissingApplicationName,

    /// No user runtime directory can be produced for this platform/environment.
    #[error("Runtime directory unavailable on {platform}: {reason}")]
    #[diagnostic(help("Set XDG_RUNTIME_DIR or skip features that need a runtime directory"))]
    RuntimeDirUnavailable { platform: String, reason: String },

    /// A path was required for a role that has no location.
    #[error("No {role} directory is available")]
    Unavailable { role: String },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unreadable resolver configuration.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check the resolver config file for syntax errors"))]
    Config { message: String },
}

/// Convenience alias for results carrying a [`BasedirError`].
pub type BasedirResult<T> = Result<T, BasedirError>;
