//! Generic utilities used across core modules.

/// Filter items by case-insensitive query matching on two string fields.
/// Returns all items when query is empty.
pub fn filter_by_query<'a, T, F>(items: &'a [T], query: &str, get_fields: F) -> Vec<&'a T>
where
    F: Fn(&'a T) -> (&'a str, &'a str),
{
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| {
            let (a, b) = get_fields(item);
            a.to_lowercase().contains(&q) || b.to_lowercase().contains(&q)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAGS: [(&str, &str); 3] = [
        ("llama3:8b (4.3 GB)", "llama3:8b"),
        ("qwen3:14b (8.6 GB)", "qwen3:14b"),
        ("nomic-embed-text (261.6 MB)", "nomic-embed-text"),
    ];

    #[test]
    fn blank_query_returns_all() {
        assert_eq!(filter_by_query(&TAGS, "", |t| (t.0, t.1)).len(), 3);
        assert_eq!(filter_by_query(&TAGS, "   ", |t| (t.0, t.1)).len(), 3);
    }

    #[test]
    fn matches_either_field_ignoring_case() {
        let out = filter_by_query(&TAGS, "QWEN", |t| (t.0, t.1));
        assert_eq!(out, vec![&TAGS[1]]);
        let out = filter_by_query(&TAGS, "mb)", |t| (t.0, ""));
        assert_eq!(out, vec![&TAGS[2]]);
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(filter_by_query(&TAGS, "gemma", |t| (t.0, t.1)).is_empty());
    }
}
