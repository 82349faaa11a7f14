//! Vidscope aggregates video-platform data behind a field-driven request model.
//!
//! Overview
//! - Plans the minimal set of upstream fetches for a request (search, video
//!   details, comments, transcript, channel) from its identifiers and fields.
//! - Runs planned fetches concurrently; one failure never cancels another.
//! - Merges outcomes into an ordered mapping that mirrors the request shape.
//! - Synthesizes a fixed-section text report for a single video, degrading
//!   optional sources (channel, transcript) to placeholders.
//!
//! Key behaviors
//! - Routing: each capability goes to the first registered connector that
//!   advertises it. No fallback, no retry.
//! - JSON aggregation is all-or-nothing: any failed fetch turns the whole
//!   body into an error once every fetch has finished.
//! - Reports only fail on details or comments; the failure text is embedded
//!   in the returned string.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use vidscope::{FetchRequest, FieldSet, Vidscope};
//!
//! let vs = Vidscope::builder()
//!     .with_connector(Arc::new(vidscope_invidious::InvidiousConnector::new_default()?))
//!     .build()?;
//!
//! let req = FetchRequest::new()
//!     .video_id("dQw4w9WgXcQ")
//!     .fields(FieldSet::parse("details,comments"));
//! let body = vs.aggregate(&req).await?.into_body()?;
//! println!("{}", serde_json::to_string(&body)?);
//!
//! let report = vs.generate_report("dQw4w9WgXcQ").await;
//! ```
#![warn(missing_docs)]

mod aggregate;
mod core;
mod executor;
mod merge;
mod planner;
/// Report synthesis: ranking, formatting, and document assembly.
pub mod report;

pub use core::{Vidscope, VidscopeBuilder};
pub use executor::FetchedValue;
pub use merge::{AggregateBody, AggregateResult};
pub use planner::{FetchOp, FetchRequest, FetchTask, plan};
pub use report::{ReportSources, attempt};

pub use vidscope_core::{FetchKey, FieldSet, Outcome, VidscopeConfig, VidscopeError};
