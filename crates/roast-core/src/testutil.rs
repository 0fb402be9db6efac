//! Test utilities: mock implementations of the core traits plus feed
//! fixture builders.
//!
//! Handwritten mocks for dependency injection in unit tests. Mocks use
//! `Arc<Mutex<_>>` for interior mutability, allowing test assertions on
//! recorded calls.

use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::feed::{
    Archive, Article, Cursor, Desc, FeedData, FeedItem, FeedResponse, Major, ModuleDynamic,
    Modules, Opus, OpusSummary,
};
use crate::traits::{Critic, FeedSource};

// ---------------------------------------------------------------------------
// MockFeedSource
// ---------------------------------------------------------------------------

/// Mock feed source that serves a queue of page responses and records every
/// requested cursor.
#[derive(Clone)]
pub struct MockFeedSource {
    /// Queue of pages. Each call pops the first element; an empty queue
    /// yields a network error.
    pages: Arc<Mutex<Vec<Result<FeedResponse, AppError>>>>,
    cursors: Arc<Mutex<Vec<String>>>,
}

impl MockFeedSource {
    pub fn with_pages(pages: Vec<Result<FeedResponse, AppError>>) -> Self {
        Self {
            pages: Arc::new(Mutex::new(pages)),
            cursors: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The cursor of every request made so far, in order.
    pub fn requested_cursors(&self) -> Vec<String> {
        self.cursors.lock().unwrap().clone()
    }
}

impl FeedSource for MockFeedSource {
    async fn fetch_page(
        &self,
        _subject_id: &str,
        cursor: &Cursor,
    ) -> Result<FeedResponse, AppError> {
        self.cursors.lock().unwrap().push(cursor.as_str().to_string());
        let mut pages = self.pages.lock().unwrap();
        if pages.is_empty() {
            Err(AppError::NetworkError("mock queue exhausted".into()))
        } else {
            pages.remove(0)
        }
    }
}

// ---------------------------------------------------------------------------
// MockCritic
// ---------------------------------------------------------------------------

/// Mock critic that serves a queue of completions and records every prompt.
#[derive(Clone)]
pub struct MockCritic {
    /// Queue of completions. Each call pops the first element; an empty
    /// queue yields a default string.
    responses: Arc<Mutex<Vec<Result<String, AppError>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockCritic {
    pub fn new(completion: &str) -> Self {
        Self {
            responses: Arc::new(Mutex::new(vec![Ok(completion.to_string())])),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_error(error: AppError) -> Self {
        Self {
            responses: Arc::new(Mutex::new(vec![Err(error)])),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn received_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Critic for MockCritic {
    async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("default completion".to_string())
        } else {
            responses.remove(0)
        }
    }
}

// ---------------------------------------------------------------------------
// Feed fixtures
// ---------------------------------------------------------------------------

/// Build a complete successful page envelope.
pub fn feed_page(items: Vec<FeedItem>, has_more: bool, offset: &str) -> FeedResponse {
    FeedResponse {
        code: 0,
        message: String::new(),
        data: FeedData {
            items,
            has_more,
            offset: offset.to_string(),
        },
    }
}

/// A plain post carrying a description text.
pub fn plain_item(text: &str) -> FeedItem {
    item_with(ModuleDynamic {
        desc: Some(Desc {
            text: text.to_string(),
        }),
        major: None,
    })
}

/// A video-archive post carrying a title.
pub fn archive_item(title: &str) -> FeedItem {
    item_with(ModuleDynamic {
        desc: None,
        major: Some(Major {
            archive: Some(Archive {
                title: title.to_string(),
            }),
            ..Default::default()
        }),
    })
}

/// An article post carrying a description.
pub fn article_item(desc: &str) -> FeedItem {
    item_with(ModuleDynamic {
        desc: None,
        major: Some(Major {
            article: Some(Article {
                desc: desc.to_string(),
            }),
            ..Default::default()
        }),
    })
}

/// A composite post carrying a nested summary.
pub fn opus_item(text: &str) -> FeedItem {
    item_with(ModuleDynamic {
        desc: None,
        major: Some(Major {
            opus: Some(Opus {
                summary: Some(OpusSummary {
                    text: text.to_string(),
                }),
            }),
            ..Default::default()
        }),
    })
}

/// A record matching none of the known shapes.
pub fn unknown_item() -> FeedItem {
    FeedItem::default()
}

fn item_with(module_dynamic: ModuleDynamic) -> FeedItem {
    FeedItem {
        modules: Modules { module_dynamic },
    }
}
