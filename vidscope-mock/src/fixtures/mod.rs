pub mod channels;
pub mod comments;
pub mod search;
pub mod transcripts;
pub mod videos;

use serde_json::Value;
use vidscope_core::VidscopeError;

/// Decode a fixture document into its payload type.
pub fn decode<T: serde::de::DeserializeOwned>(v: Value) -> Result<T, VidscopeError> {
    serde_json::from_value(v).map_err(|e| VidscopeError::Data(format!("bad fixture: {e}")))
}
