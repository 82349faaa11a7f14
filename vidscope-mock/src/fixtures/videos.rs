use serde_json::{Value, json};

pub const RICKROLL: &str = "dQw4w9WgXcQ";
pub const ZOO: &str = "jNQXAC9IVRw";

pub fn by_id(id: &str) -> Option<Value> {
    match id {
        RICKROLL => Some(json!({
            "type": "video",
            "title": "Rick Astley - Never Gonna Give You Up (Official Music Video)",
            "videoId": RICKROLL,
            "viewCount": 1_634_000_000_u64,
            "likeCount": 18_200_000,
            "published": 1_256_515_200,
            "publishedText": "15 years ago",
            "author": "Rick Astley",
            "authorId": "UCuAXFkgsw1L7xaCfnd5JJOw",
            "description": "The official video for \u{201c}Never Gonna Give You Up\u{201d} by Rick Astley.",
            "lengthSeconds": 213
        })),
        ZOO => Some(json!({
            "type": "video",
            "title": "Me at the zoo",
            "videoId": ZOO,
            "viewCount": 340_000_000,
            "likeCount": 17_000_000,
            "published": "2005-04-24T03:31:52Z",
            "author": "jawed",
            "authorId": "UC4QobU6STFB0P71PMvOGN5A",
            "description": "",
            "lengthSeconds": 19
        })),
        _ => None,
    }
}
