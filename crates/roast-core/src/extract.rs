//! Per-record shape matching and page-level text extraction.

use crate::feed::{Cursor, FeedData, FeedItem};

/// The known record shapes, in matcher priority order.
///
/// Classification is first-match-wins: a record carrying both a plain
/// description and an archive title classifies as `Plain`. A matcher only
/// "matches" when its candidate text is non-empty after trimming; otherwise
/// evaluation falls through to the next shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicKind<'a> {
    /// Plain post with a description text.
    Plain(&'a str),
    /// Video-archive post; text is the video title.
    Archive(&'a str),
    /// Article post; text is the article description.
    Article(&'a str),
    /// Composite post; text is the nested summary.
    Opus(&'a str),
    /// No known shape matched. The record yields no text.
    Unknown,
}

impl<'a> DynamicKind<'a> {
    /// The extracted text, if this record matched any shape.
    pub fn text(&self) -> Option<&'a str> {
        match *self {
            DynamicKind::Plain(t)
            | DynamicKind::Archive(t)
            | DynamicKind::Article(t)
            | DynamicKind::Opus(t) => Some(t),
            DynamicKind::Unknown => None,
        }
    }
}

/// Extraction result for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageExtract {
    /// Trimmed text fragments, in server return order.
    pub fragments: Vec<String>,
    /// Cursor for the next page. Present only when the server reports more
    /// data AND supplied a usable offset; `has_more` is authoritative, so a
    /// stale offset alongside `has_more=false` never resumes pagination.
    pub next: Option<Cursor>,
}

fn non_empty(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Classify one record by probing the four known text locations in fixed
/// priority order.
pub fn classify(item: &FeedItem) -> DynamicKind<'_> {
    let dynamic = &item.modules.module_dynamic;

    if let Some(text) = dynamic.desc.as_ref().and_then(|d| non_empty(&d.text)) {
        return DynamicKind::Plain(text);
    }

    let Some(major) = &dynamic.major else {
        return DynamicKind::Unknown;
    };

    if let Some(title) = major.archive.as_ref().and_then(|a| non_empty(&a.title)) {
        return DynamicKind::Archive(title);
    }
    if let Some(desc) = major.article.as_ref().and_then(|a| non_empty(&a.desc)) {
        return DynamicKind::Article(desc);
    }
    if let Some(text) = major
        .opus
        .as_ref()
        .and_then(|o| o.summary.as_ref())
        .and_then(|s| non_empty(&s.text))
    {
        return DynamicKind::Opus(text);
    }

    DynamicKind::Unknown
}

/// Extract all text fragments from one page and surface its continuation.
///
/// Stateless: one record failing to match never affects its neighbours, and
/// nothing carries over between calls.
pub fn extract_page(data: &FeedData) -> PageExtract {
    let mut fragments = Vec::new();
    for item in &data.items {
        match classify(item).text() {
            Some(text) => fragments.push(text.to_string()),
            None => tracing::debug!("record matched no known shape, skipping"),
        }
    }

    let next = (data.has_more && !data.offset.is_empty())
        .then(|| Cursor::from(data.offset.clone()));

    PageExtract { fragments, next }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{archive_item, article_item, opus_item, plain_item, unknown_item};

    fn page(items: Vec<FeedItem>, has_more: bool, offset: &str) -> FeedData {
        FeedData {
            items,
            has_more,
            offset: offset.to_string(),
        }
    }

    #[test]
    fn all_four_shapes_extract_in_server_order() {
        let data = page(
            vec![
                plain_item("one"),
                archive_item("two"),
                article_item("three"),
                opus_item("four"),
                unknown_item(),
            ],
            false,
            "",
        );

        let extract = extract_page(&data);
        assert_eq!(extract.fragments, vec!["one", "two", "three", "four"]);
        assert_eq!(extract.next, None);
    }

    #[test]
    fn plain_wins_over_archive_when_both_present() {
        let mut item = plain_item("the description");
        item.modules.module_dynamic.major = archive_item("the title").modules.module_dynamic.major;

        assert_eq!(classify(&item), DynamicKind::Plain("the description"));
    }

    #[test]
    fn empty_desc_falls_through_to_archive() {
        let mut item = plain_item("   ");
        item.modules.module_dynamic.major = archive_item("the title").modules.module_dynamic.major;

        assert_eq!(classify(&item), DynamicKind::Archive("the title"));
    }

    #[test]
    fn whitespace_only_text_yields_no_fragment() {
        let data = page(vec![plain_item(" \t \n ")], false, "");
        assert!(extract_page(&data).fragments.is_empty());
    }

    #[test]
    fn fragments_are_trimmed() {
        let data = page(vec![plain_item("  hello  ")], false, "");
        assert_eq!(extract_page(&data).fragments, vec!["hello"]);
    }

    #[test]
    fn unmatched_record_is_skipped_not_fatal() {
        let data = page(vec![unknown_item(), plain_item("kept")], false, "");
        assert_eq!(extract_page(&data).fragments, vec!["kept"]);
    }

    #[test]
    fn has_more_false_suppresses_a_present_offset() {
        let data = page(vec![], false, "stale-cursor");
        assert_eq!(extract_page(&data).next, None);
    }

    #[test]
    fn has_more_true_with_empty_offset_reports_no_continuation() {
        let data = page(vec![], true, "");
        assert_eq!(extract_page(&data).next, None);
    }

    #[test]
    fn continuation_carries_the_offset_verbatim() {
        let data = page(vec![], true, "opaque-123");
        let next = extract_page(&data).next.unwrap();
        assert_eq!(next.as_str(), "opaque-123");
    }
}
