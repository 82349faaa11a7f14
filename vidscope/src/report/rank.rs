use vidscope_core::Comment;

/// Select the `n` most-liked comments.
///
/// Sorts references, so the input slice keeps its order. Ties keep their
/// original relative order; missing or non-numeric like counts rank as zero.
#[must_use]
pub fn top_comments(comments: &[Comment], n: usize) -> Vec<&Comment> {
    let mut ranked: Vec<&Comment> = comments.iter().collect();
    ranked.sort_by(|a, b| b.likes().total_cmp(&a.likes()));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn comment(content: &str, likes: Option<i64>) -> Comment {
        raw(content, likes.map(Value::from))
    }

    fn raw(content: &str, like_count: Option<Value>) -> Comment {
        Comment {
            content: Some(content.to_string()),
            like_count,
            ..Comment::default()
        }
    }

    #[test]
    fn ranks_by_likes_with_stable_ties() {
        let cs = vec![
            comment("x", Some(5)),
            comment("y", Some(20)),
            comment("z", Some(1)),
            comment("w", Some(20)),
        ];
        let top: Vec<_> = top_comments(&cs, 3)
            .into_iter()
            .filter_map(|c| c.content.as_deref())
            .collect();
        assert_eq!(top, vec!["y", "w", "x"]);
    }

    #[test]
    fn missing_likes_rank_below_positive_counts() {
        let cs = vec![comment("none", None), comment("one", Some(1))];
        let top = top_comments(&cs, 3);
        assert_eq!(top[0].content.as_deref(), Some("one"));
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn float_and_string_counts_are_coerced() {
        let cs = vec![
            raw("junk", Some(json!("1.2K"))),
            raw("float", Some(json!(3.0))),
            raw("string", Some(json!("12"))),
            raw("int", Some(json!(4))),
        ];
        let top: Vec<_> = top_comments(&cs, 4)
            .into_iter()
            .filter_map(|c| c.content.as_deref())
            .collect();
        assert_eq!(top, vec!["string", "int", "float", "junk"]);
    }
}
