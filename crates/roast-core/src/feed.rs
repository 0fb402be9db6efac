use serde::Deserialize;

/// Opaque pagination token returned by the feed API.
///
/// The server owns this value entirely: it is copied verbatim from one page
/// response into the next page request and is never inspected, parsed, or
/// constructed client-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor(String);

impl Cursor {
    /// The first-page cursor (empty token).
    pub fn start() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Cursor {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// Top-level envelope of one feed page.
///
/// `code == 0` means success; any other value carries a server-side error
/// described by `message`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedResponse {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: FeedData,
}

/// Pagination payload: the records plus the continuation metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedData {
    #[serde(default)]
    pub items: Vec<FeedItem>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub offset: String,
}

/// One unit of user activity. The interesting text lives in a different
/// nested location per record shape; every level is optional because the
/// upstream API is structurally inconsistent across record kinds.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedItem {
    #[serde(default)]
    pub modules: Modules,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Modules {
    #[serde(default)]
    pub module_dynamic: ModuleDynamic,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleDynamic {
    pub desc: Option<Desc>,
    pub major: Option<Major>,
}

/// Plain post description.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Desc {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Major {
    pub archive: Option<Archive>,
    pub article: Option<Article>,
    pub opus: Option<Opus>,
}

/// Video-archive post; the title is the human-readable text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Archive {
    #[serde(default)]
    pub title: String,
}

/// Article post; the description is the human-readable text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub desc: String,
}

/// Composite ("opus") post; text sits one level deeper, in the summary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Opus {
    pub summary: Option<OpusSummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpusSummary {
    #[serde(default)]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_real_shaped_page() {
        let json = serde_json::json!({
            "code": 0,
            "message": "0",
            "data": {
                "has_more": true,
                "offset": "953265518602813463",
                "items": [
                    {"modules": {"module_dynamic": {"desc": {"text": "hello"}}}},
                    {"modules": {"module_dynamic": {"major": {"archive": {"title": "a video"}}}}}
                ]
            }
        });

        let page: FeedResponse = serde_json::from_value(json).unwrap();
        assert_eq!(page.code, 0);
        assert!(page.data.has_more);
        assert_eq!(page.data.offset, "953265518602813463");
        assert_eq!(page.data.items.len(), 2);
    }

    #[test]
    fn tolerates_missing_nested_fields() {
        let json = serde_json::json!({
            "code": 0,
            "data": {
                "items": [
                    {},
                    {"modules": {}},
                    {"modules": {"module_dynamic": {}}}
                ]
            }
        });

        let page: FeedResponse = serde_json::from_value(json).unwrap();
        assert_eq!(page.data.items.len(), 3);
        assert!(!page.data.has_more);
        assert!(page.data.offset.is_empty());
    }

    #[test]
    fn cursor_round_trips_verbatim() {
        let cursor = Cursor::from("  weird token \t".to_string());
        assert_eq!(cursor.as_str(), "  weird token \t");
        assert_eq!(Cursor::start().as_str(), "");
    }
}
