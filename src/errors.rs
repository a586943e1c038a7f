use thiserror::Error;

/// Various errors
#[derive(Error, Debug)]
pub enum QueryError {
    /// The hostname could not be resolved to any address.
    #[error("address resolution failed for '{host}:{port}': {source}")]
    ResolveError {
        host: String,
        port: u16,
        source: std::io::Error,
    },
    /// Every resolved address failed to produce a usable reply.
    #[error("all query attempts failed for '{host}:{port}'")]
    AllAttemptsFailed { host: String, port: u16 },
    /// Unexpected failure on a background query worker.
    #[error("unknown error '{0}'")]
    UnknownError(String),
}

/// A type alias to handle Results with QueryError.
pub type Result<T, V = QueryError> = std::result::Result<T, V>;
