use async_trait::async_trait;
use egot_wiki::{FetchedCelebrity, WikiError, WikidataClient};

/// Where celebrities come from on a store miss.
#[async_trait]
pub trait CelebritySource: Send + Sync {
    /// Resolve `name` into a celebrity with its classified EGOT awards.
    async fn fetch_celebrity(&self, name: &str) -> Result<FetchedCelebrity, WikiError>;
}

#[async_trait]
impl CelebritySource for WikidataClient {
    async fn fetch_celebrity(&self, name: &str) -> Result<FetchedCelebrity, WikiError> {
        WikidataClient::fetch_celebrity(self, name).await
    }
}
