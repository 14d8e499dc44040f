use thiserror::Error;

/// Result type for all book operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by book operations
#[derive(Error, Debug)]
pub enum Error {
    /// Container file is missing or not a readable archive
    #[error("container unreadable: {0}")]
    ContainerUnreadable(String),

    /// The meta.json entry is present but cannot be decoded
    #[error("metadata corrupt: {0}")]
    MetadataCorrupt(String),

    /// Source file does not carry a recognized image suffix
    #[error("not a valid image file: {0}")]
    InvalidImageFormat(String),

    /// The next page number does not fit in the fixed-width field
    #[error("no page numbers left")]
    PageNumbersExhausted,

    /// Index or entry name does not resolve to an existing page
    #[error("page does not exist: {0}")]
    PageNotFound(String),

    /// Underlying filesystem or archive I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
