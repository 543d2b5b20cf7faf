/// Centralized error types for fnindex using thiserror
///
/// The scan is all-or-nothing: a filesystem or parse failure in any single
/// file fails the whole scan rather than silently omitting that file from
/// the catalog.
use thiserror::Error;

/// Main error type for the function index scanner
#[derive(Error, Debug)]
pub enum ScanError {
    /// No repository root is configured. Signaled distinctly from scan
    /// failures so the HTTP facade can answer 400 instead of 500.
    #[error("Repository not loaded")]
    RepositoryNotLoaded,

    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Path is not a directory: {0}")]
    NotADirectory(String),

    #[error("Failed to walk directory: {0}")]
    WalkFailed(String),

    #[error("Failed to read file '{file}': {reason}")]
    FileReadFailed { file: String, reason: String },

    #[error("Failed to parse '{file}': {reason}")]
    ParseFailed { file: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to load configuration file: {0}")]
    LoadFailed(String),

    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    #[error("Invalid configuration value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

impl ScanError {
    /// Check if this is a user error (missing configuration) vs a scan failure
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ScanError::RepositoryNotLoaded | ScanError::Config(ConfigError::InvalidValue { .. })
        )
    }
}
