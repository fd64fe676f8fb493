use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

impl ShellError {
    /// Map a read failure for `path`, splitting "not found" from other IO errors.
    pub fn from_read(path: &str, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound(path.to_string())
        } else {
            Self::Io(err)
        }
    }
}

/// Convenience type alias for Results with ShellError
pub type Result<T> = std::result::Result<T, ShellError>;
