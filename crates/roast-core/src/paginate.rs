use std::time::Duration;

use crate::error::AppError;
use crate::extract::extract_page;
use crate::feed::Cursor;
use crate::traits::FeedSource;

/// Tuning knobs for the pagination loop.
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Courtesy pause before every page request, to avoid hammering the
    /// upstream API. Cooperative: suspends this task only.
    pub page_delay: Duration,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            page_delay: Duration::from_millis(100),
        }
    }
}

/// Drives the opaque cursor across pages of a subject's feed and aggregates
/// the extracted text.
///
/// Pages are fetched strictly sequentially: each request depends on the
/// cursor returned by the previous response, so there is no parallelism to
/// exploit.
pub struct FeedAggregator<S: FeedSource> {
    source: S,
    config: AggregatorConfig,
}

impl<S: FeedSource> FeedAggregator<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, AggregatorConfig::default())
    }

    pub fn with_config(source: S, config: AggregatorConfig) -> Self {
        Self { source, config }
    }

    /// Fetch up to `max_pages` pages of `subject_id`'s feed and return the
    /// newline-joined text fragments in encounter order.
    ///
    /// Best-effort: the first failed page (transport error, malformed
    /// payload, or non-zero body code) ends pagination and whatever was
    /// collected up to that point is returned. An empty string is valid
    /// output, not an error. Only an empty `subject_id` is rejected.
    pub async fn fetch_aggregated_text(
        &self,
        subject_id: &str,
        max_pages: usize,
    ) -> Result<String, AppError> {
        if subject_id.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "subject id must be non-empty".into(),
            ));
        }

        let mut cursor = Cursor::start();
        let mut fragments: Vec<String> = Vec::new();

        for page_num in 1..=max_pages {
            tokio::time::sleep(self.config.page_delay).await;

            tracing::info!(page = page_num, "fetching feed page");
            let response = match self.source.fetch_page(subject_id, &cursor).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!(
                        page = page_num,
                        error = %e,
                        "page fetch failed, keeping partial results"
                    );
                    break;
                }
            };

            if response.code != 0 {
                tracing::warn!(
                    page = page_num,
                    code = response.code,
                    message = %response.message,
                    "feed API reported failure, keeping partial results"
                );
                break;
            }

            let page = extract_page(&response.data);
            fragments.extend(page.fragments);

            match page.next {
                Some(next) => cursor = next,
                None => {
                    tracing::info!(page = page_num, "feed exhausted");
                    break;
                }
            }
        }

        tracing::info!(fragments = fragments.len(), "aggregation complete");
        Ok(fragments.join("\n"))
    }
}
