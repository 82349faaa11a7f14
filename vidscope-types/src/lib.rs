//! Vidscope-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod connector;
mod error;
mod fetch_key;
mod outcome;

pub use config::{DEFAULT_TOP_COMMENTS, VidscopeConfig};
pub use connector::ConnectorKey;
pub use error::VidscopeError;
pub use fetch_key::FetchKey;
pub use outcome::Outcome;
