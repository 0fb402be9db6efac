use crate::paginate::FeedAggregator;
use crate::prompt::build_critique_prompt;
use crate::traits::{Critic, FeedSource};

/// Message returned when the feed yields no usable text.
const EMPTY_FEED_MESSAGE: &str =
    "could not retrieve any feed content for this subject; check that the id is correct";

/// Orchestrates the full pipeline: paginate the feed, build the critique
/// prompt, call the LLM.
///
/// Generic over its collaborators via traits, enabling dependency injection
/// and testability without real HTTP or LLM calls.
pub struct CritiqueService<S: FeedSource, C: Critic> {
    aggregator: FeedAggregator<S>,
    critic: C,
}

impl<S: FeedSource, C: Critic> CritiqueService<S, C> {
    pub fn new(aggregator: FeedAggregator<S>, critic: C) -> Self {
        Self { aggregator, critic }
    }

    /// Generate a critique of `subject_id`'s feed, reading up to
    /// `max_pages` pages.
    ///
    /// This is the outer tool boundary: it always returns a string. A
    /// failure at any stage degrades to a human-readable failure message
    /// rather than an error, so the invoking host never sees a fault.
    pub async fn critique(&self, subject_id: &str, max_pages: usize) -> String {
        let feed_text = match self
            .aggregator
            .fetch_aggregated_text(subject_id, max_pages)
            .await
        {
            Ok(text) => text,
            Err(e) => return format!("critique failed: {e}"),
        };

        if feed_text.is_empty() {
            return EMPTY_FEED_MESSAGE.to_string();
        }

        let prompt = build_critique_prompt(&feed_text);
        tracing::info!(
            feed_bytes = feed_text.len(),
            "requesting critique generation"
        );

        match self.critic.complete(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, "critique generation failed");
                format!("critique generation failed: {e}")
            }
        }
    }
}
