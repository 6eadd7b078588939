/// Errors raised at the edges of the cache layer.
///
/// Store operations themselves never fail; these cover the suppliers that
/// feed them and the process setup around them.
#[derive(thiserror::Error, Debug)]
pub enum CacheError {
    #[error("Source error: {0}")]
    Source(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type CacheResult<T> = Result<T, CacheError>;
