use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    /// The configured scan root does not exist. The run aborts before any
    /// output is written.
    #[error("directory '{0}' does not exist")]
    RootNotFound(String),

    /// Traversal failure (permission denied, file vanished mid-walk).
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// Failure writing the output file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
