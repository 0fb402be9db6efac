pub mod feed;
pub mod llm;

pub use feed::BiliFeedClient;
pub use llm::OpenAiCritic;
