use std::future::Future;

use crate::error::AppError;
use crate::feed::{Cursor, FeedResponse};

/// Fetches one page of a subject's public activity feed.
///
/// Implementations own the transport details (headers, timeouts, base URL);
/// the pipeline only sees the parsed page envelope.
pub trait FeedSource: Send + Sync + Clone {
    fn fetch_page(
        &self,
        subject_id: &str,
        cursor: &Cursor,
    ) -> impl Future<Output = Result<FeedResponse, AppError>> + Send;
}

/// Produces a completion for a prompt via an LLM backend.
///
/// How the backend delivers the text (streamed or not) is an implementation
/// detail; callers receive the fully assembled completion.
pub trait Critic: Send + Sync + Clone {
    fn complete(&self, prompt: &str) -> impl Future<Output = Result<String, AppError>> + Send;
}
