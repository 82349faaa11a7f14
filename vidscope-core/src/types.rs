//! Upstream payload shapes and re-exports of foundational types.
//!
//! Payloads mirror the upstream JSON (camelCase on the wire). Fields the
//! aggregation layer does not interpret are kept in a flattened `extra`
//! map so the JSON endpoint passes upstream documents through unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use vidscope_types::{
    ConnectorKey, DEFAULT_TOP_COMMENTS, FetchKey, Outcome, VidscopeConfig, VidscopeError,
};

/// Opaque search response; forwarded as-is.
pub type SearchResults = Value;

/// Video metadata as returned by the upstream `videos/{id}` resource.
///
/// Count and date fields stay raw JSON values: the report formatter decides
/// how to render them and falls back to placeholders for odd shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub like_count: Option<Value>,
    /// RFC 3339 / ISO date string or Unix epoch seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VideoDetails {
    /// The channel id to look up, if the upstream exposed a non-empty one.
    #[must_use]
    pub fn channel_id(&self) -> Option<&str> {
        self.author_id.as_deref().filter(|s| !s.is_empty())
    }
}

/// A single top-level comment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Raw upstream value; may be a float or a string on some instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub like_count: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Comment {
    /// Like count used for ranking.
    ///
    /// Numbers and numeric strings are coerced; missing or non-numeric
    /// counts rank as zero.
    #[must_use]
    pub fn likes(&self) -> f64 {
        let n = match &self.like_count {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        n.filter(|f| f.is_finite()).unwrap_or(0.0)
    }
}

/// Response of the upstream `comments/{id}` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentsPayload {
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One timestamped transcript fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptLine {
    /// Start offset in milliseconds.
    pub start: f64,
    #[serde(default)]
    pub text: String,
}

/// Transcript for a video, or the reason it could not be produced.
///
/// Transcript retrieval never fails as a call: every problem along the
/// caption lookup is folded into `Unavailable`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranscriptPayload {
    /// Captions were missing or one of the lookup steps failed.
    Unavailable {
        /// Human-readable reason.
        error: String,
    },
    /// Lines ordered by start time, as delivered upstream.
    Lines {
        #[serde(default)]
        lines: Vec<TranscriptLine>,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
}

impl TranscriptPayload {
    /// Build an `Unavailable` payload.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            error: reason.into(),
        }
    }

    /// Build a `Lines` payload without extra fields.
    #[must_use]
    pub fn from_lines(lines: Vec<TranscriptLine>) -> Self {
        Self::Lines {
            lines,
            extra: Map::new(),
        }
    }

    /// Lines to render, or `None` when the transcript is unavailable or empty.
    #[must_use]
    pub fn usable_lines(&self) -> Option<&[TranscriptLine]> {
        match self {
            Self::Lines { lines, .. } if !lines.is_empty() => Some(lines),
            _ => None,
        }
    }
}

/// Channel details as returned by the upstream `authors/{id}` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_count: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
