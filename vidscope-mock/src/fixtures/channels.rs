use serde_json::{Value, json};

pub fn by_id(id: &str) -> Option<Value> {
    match id {
        "UCuAXFkgsw1L7xaCfnd5JJOw" => Some(json!({
            "author": "Rick Astley",
            "authorId": id,
            "subCount": 4_210_000
        })),
        "UC4QobU6STFB0P71PMvOGN5A" => Some(json!({
            "author": "jawed",
            "authorId": id,
            "subCount": 5_120_000
        })),
        _ => None,
    }
}
