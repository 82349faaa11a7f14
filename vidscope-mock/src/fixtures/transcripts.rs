use serde_json::{Value, json};

use super::videos::RICKROLL;

pub fn by_video(id: &str) -> Option<Value> {
    match id {
        RICKROLL => Some(json!({
            "lines": [
                {"start": 18_800, "text": "We're no strangers to love"},
                {"start": 22_640, "text": "You know the rules and so do I"},
                {"start": 27_040, "text": "A full commitment's what I'm thinking of"}
            ]
        })),
        _ => None,
    }
}
