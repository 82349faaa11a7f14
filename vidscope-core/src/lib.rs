//! vidscope-core
//!
//! Core types and traits shared across the vidscope workspace.
//!
//! - `types`: upstream payload shapes (video details, comments, transcript,
//!   channel) plus re-exports of the error, outcome, and key types.
//! - `connector`: the `VideoConnector` trait and its capability role traits.
//! - `fields`: the `FieldSet` value object parsed from request parameters.

/// Connector capability traits and the primary `VideoConnector` interface.
pub mod connector;
/// Requested-field value object.
pub mod fields;
pub mod types;

pub use connector::VideoConnector;
pub use fields::FieldSet;
pub use types::*;
