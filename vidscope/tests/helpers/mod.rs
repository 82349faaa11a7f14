#![allow(dead_code)]

// Re-export helpers so tests can `use helpers::*;`
pub mod mock_connector;

pub use mock_connector::MockConnector;

use serde_json::json;
use vidscope_core::{
    ChannelDetails, Comment, CommentsPayload, TranscriptLine, TranscriptPayload, VideoDetails,
    VidscopeError,
};

pub const VID: &str = "dQw4w9WgXcQ";
pub const CHAN: &str = "UCuAXFkgsw1L7xaCfnd5JJOw";

/// Video details with every rendered field populated.
pub fn details() -> VideoDetails {
    serde_json::from_value(json!({
        "title": "Never Gonna Give You Up",
        "viewCount": 1_500_000_000_u64,
        "likeCount": 17_000_000,
        "published": 1_256_515_200,
        "author": "Rick Astley",
        "authorId": CHAN,
        "description": "The official video.",
        "lengthSeconds": 213
    }))
    .unwrap()
}

pub fn comment(content: &str, likes: i64) -> Comment {
    Comment {
        content: Some(content.to_string()),
        like_count: Some(json!(likes)),
        ..Comment::default()
    }
}

pub fn comments(items: &[(&str, i64)]) -> CommentsPayload {
    CommentsPayload {
        comments: items.iter().map(|(c, l)| comment(c, *l)).collect(),
        ..CommentsPayload::default()
    }
}

pub fn channel(subs: u64) -> ChannelDetails {
    ChannelDetails {
        sub_count: Some(json!(subs)),
        ..ChannelDetails::default()
    }
}

pub fn transcript(lines: &[(f64, &str)]) -> TranscriptPayload {
    TranscriptPayload::from_lines(
        lines
            .iter()
            .map(|(start, text)| TranscriptLine {
                start: *start,
                text: (*text).to_string(),
            })
            .collect(),
    )
}

pub fn upstream_down(what: &str) -> VidscopeError {
    VidscopeError::connector("mock", format!("status 503: {what}"))
}
