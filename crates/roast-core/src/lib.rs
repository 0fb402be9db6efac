pub mod critique;
pub mod error;
pub mod extract;
pub mod feed;
pub mod paginate;
pub mod prompt;
pub mod testutil;
pub mod traits;

pub use critique::CritiqueService;
pub use error::AppError;
pub use extract::{DynamicKind, PageExtract, classify, extract_page};
pub use feed::{Cursor, FeedResponse};
pub use paginate::{AggregatorConfig, FeedAggregator};
pub use traits::{Critic, FeedSource};
