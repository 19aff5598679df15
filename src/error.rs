//! Unified error types for the API service.

use thiserror::Error;

/// Errors raised while starting or running the server.
///
/// Request handling itself never fails; these cover bootstrap only.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// The address that failed to bind.
        addr: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_error_names_the_address() {
        let err = AppError::Bind {
            addr: "0.0.0.0:5000".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        };

        assert_eq!(err.to_string(), "failed to bind 0.0.0.0:5000: address in use");
    }
}
