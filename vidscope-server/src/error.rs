use thiserror::Error;
use vidscope_core::VidscopeError;

/// Startup and serving failures. Request-level failures never reach this type.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to load configuration: {0}")]
    Config(String),

    #[error("Failed to build aggregation engine: {0}")]
    Engine(#[from] VidscopeError),

    #[error("Failed to bind to address {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}
