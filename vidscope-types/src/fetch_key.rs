use core::fmt;
use serde::{Deserialize, Serialize};

/// Output keys for planned upstream fetches.
///
/// Each key names one upstream capability and the slot it fills in an
/// aggregate response. The declaration order is the fixed planning
/// precedence, so `Ord` on this type matches response key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FetchKey {
    /// Free-text video search.
    SearchResults,
    /// Video metadata (title, counts, author).
    Details,
    /// Top-level comments for a video.
    Comments,
    /// Timestamped transcript lines from the first caption track.
    Transcript,
    /// Channel (author) details.
    Channel,
}

impl FetchKey {
    /// Every key in planning precedence order.
    pub const ALL: [Self; 5] = [
        Self::SearchResults,
        Self::Details,
        Self::Comments,
        Self::Transcript,
        Self::Channel,
    ];

    /// Stable camelCase identifier used as the JSON response key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SearchResults => "searchResults",
            Self::Details => "details",
            Self::Comments => "comments",
            Self::Transcript => "transcript",
            Self::Channel => "channel",
        }
    }

    /// Name of the requested field that enables this key, if any.
    ///
    /// Search is driven by the presence of a query and has no field name.
    #[must_use]
    pub const fn field_name(self) -> Option<&'static str> {
        match self {
            Self::SearchResults => None,
            Self::Details => Some("details"),
            Self::Comments => Some("comments"),
            Self::Transcript => Some("transcript"),
            Self::Channel => Some("channel"),
        }
    }
}

impl fmt::Display for FetchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
