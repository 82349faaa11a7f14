use serde_json::{Value, json};

use super::videos::{RICKROLL, ZOO};

pub fn by_video(id: &str) -> Option<Value> {
    match id {
        RICKROLL => Some(json!({
            "videoId": RICKROLL,
            "commentCount": 2_300_000,
            "comments": [
                {"author": "@a", "content": "Still a banger.", "likeCount": 5_120},
                {"author": "@b", "content": "  Got me again  ", "likeCount": 48_301},
                {"author": "@c", "content": "2009 called.", "likeCount": 12},
                {"author": "@d", "content": "Legend.", "likeCount": 48_301}
            ]
        })),
        ZOO => Some(json!({"videoId": ZOO, "comments": []})),
        _ => None,
    }
}
