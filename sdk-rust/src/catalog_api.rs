use crate::{CatalogItem, CatalogResult, ChatReply, ChatRequest, UniversityDetails};

/// The remote catalog service: listing, detail lookup and assistant turns.
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    /// A short name of the backend, used in traces.
    fn provider(&self) -> &'static str;
    /// Fetch the full set of universities.
    async fn list_universities(&self) -> CatalogResult<Vec<CatalogItem>>;
    /// Fetch the extended record of one university.
    async fn get_university(&self, slug: &str) -> CatalogResult<UniversityDetails>;
    /// Send one chat turn to the assistant.
    async fn chat(&self, request: ChatRequest) -> CatalogResult<ChatReply>;
}
