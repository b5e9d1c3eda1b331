use std::{collections::VecDeque, sync::Mutex};

use futures::channel::oneshot;

use crate::{
    catalog_api::CatalogApi,
    errors::{CatalogError, CatalogResult},
    CatalogItem, ChatReply, ChatRequest, UniversityDetails,
};

const PROVIDER: &str = "mock";

/// Result for a mocked call.
/// It can be a response, an error, or a result the test supplies later
/// through the paired sender.
pub enum MockResult<T> {
    Response(T),
    Error(CatalogError),
    Deferred(oneshot::Receiver<CatalogResult<T>>),
}

impl<T> MockResult<T> {
    /// Construct a result that yields the provided response.
    pub fn response(response: T) -> Self {
        Self::Response(response)
    }

    /// Construct a result that yields the provided error.
    pub fn error(error: CatalogError) -> Self {
        Self::Error(error)
    }

    /// Construct a result that resolves once the returned sender is used.
    /// Dropping the sender resolves the call with an error.
    pub fn deferred() -> (Self, oneshot::Sender<CatalogResult<T>>) {
        let (tx, rx) = oneshot::channel();
        (Self::Deferred(rx), tx)
    }

    async fn resolve(self) -> CatalogResult<T> {
        match self {
            Self::Response(response) => Ok(response),
            Self::Error(error) => Err(error),
            Self::Deferred(rx) => rx.await.unwrap_or_else(|_| {
                Err(CatalogError::Invariant(
                    PROVIDER,
                    "deferred result sender dropped".into(),
                ))
            }),
        }
    }
}

impl From<ChatReply> for MockResult<ChatReply> {
    fn from(reply: ChatReply) -> Self {
        Self::response(reply)
    }
}

impl From<UniversityDetails> for MockResult<UniversityDetails> {
    fn from(details: UniversityDetails) -> Self {
        Self::response(details)
    }
}

impl From<Vec<CatalogItem>> for MockResult<Vec<CatalogItem>> {
    fn from(items: Vec<CatalogItem>) -> Self {
        Self::response(items)
    }
}

impl<T> From<CatalogError> for MockResult<T> {
    fn from(error: CatalogError) -> Self {
        Self::error(error)
    }
}

#[derive(Default)]
struct MockCatalogApiState {
    mocked_list_results: VecDeque<MockResult<Vec<CatalogItem>>>,
    mocked_detail_results: VecDeque<MockResult<UniversityDetails>>,
    mocked_chat_results: VecDeque<MockResult<ChatReply>>,
    list_calls: usize,
    tracked_detail_slugs: Vec<String>,
    tracked_chat_requests: Vec<ChatRequest>,
}

impl MockCatalogApiState {
    fn reset(&mut self) {
        self.list_calls = 0;
        self.tracked_detail_slugs.clear();
        self.tracked_chat_requests.clear();
    }

    fn restore(&mut self) {
        self.mocked_list_results.clear();
        self.mocked_detail_results.clear();
        self.mocked_chat_results.clear();
        self.reset();
    }
}

/// A mock catalog service for testing that tracks requests and yields
/// predefined results in FIFO order.
#[derive(Default)]
pub struct MockCatalogApi {
    state: Mutex<MockCatalogApiState>,
}

impl MockCatalogApi {
    /// Construct a new mock catalog service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a mocked listing result.
    pub fn enqueue_list<R>(&self, result: R) -> &Self
    where
        R: Into<MockResult<Vec<CatalogItem>>>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_list_results.push_back(result.into());
        drop(state);
        self
    }

    /// Enqueue a mocked detail result.
    pub fn enqueue_detail<R>(&self, result: R) -> &Self
    where
        R: Into<MockResult<UniversityDetails>>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_detail_results.push_back(result.into());
        drop(state);
        self
    }

    /// Enqueue one or more mocked chat results.
    pub fn enqueue_chat_results<I>(&self, results: I) -> &Self
    where
        I: IntoIterator<Item = MockResult<ChatReply>>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        for result in results {
            state.mocked_chat_results.push_back(result);
        }
        drop(state);
        self
    }

    /// Convenience to enqueue a single mocked chat result.
    pub fn enqueue_chat<R>(&self, result: R) -> &Self
    where
        R: Into<MockResult<ChatReply>>,
    {
        self.enqueue_chat_results(std::iter::once(result.into()))
    }

    /// Number of listing calls made so far.
    pub fn list_calls(&self) -> usize {
        let state = self.state.lock().expect("mock state poisoned");
        state.list_calls
    }

    /// Slugs requested from the detail endpoint so far.
    pub fn tracked_detail_slugs(&self) -> Vec<String> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_detail_slugs.clone()
    }

    /// Chat requests received so far, in arrival order.
    pub fn tracked_chat_requests(&self) -> Vec<ChatRequest> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_chat_requests.clone()
    }

    /// Reset tracked calls without touching enqueued results.
    pub fn reset(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.reset();
    }

    /// Clear both tracked calls and enqueued results.
    pub fn restore(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.restore();
    }
}

fn exhausted<T>(what: &str) -> CatalogResult<T> {
    Err(CatalogError::Invariant(
        PROVIDER,
        format!("no mocked {what} results available"),
    ))
}

#[async_trait::async_trait]
impl CatalogApi for MockCatalogApi {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn list_universities(&self) -> CatalogResult<Vec<CatalogItem>> {
        let result = {
            let mut state = self.state.lock().expect("mock state poisoned");
            state.list_calls += 1;
            state.mocked_list_results.pop_front()
        };

        match result {
            Some(result) => result.resolve().await,
            None => exhausted("list"),
        }
    }

    async fn get_university(&self, slug: &str) -> CatalogResult<UniversityDetails> {
        let result = {
            let mut state = self.state.lock().expect("mock state poisoned");
            state.tracked_detail_slugs.push(slug.to_string());
            state.mocked_detail_results.pop_front()
        };

        match result {
            Some(result) => result.resolve().await,
            None => exhausted("detail"),
        }
    }

    async fn chat(&self, request: ChatRequest) -> CatalogResult<ChatReply> {
        let result = {
            let mut state = self.state.lock().expect("mock state poisoned");
            state.tracked_chat_requests.push(request);
            state.mocked_chat_results.pop_front()
        };

        match result {
            Some(result) => result.resolve().await,
            None => exhausted("chat"),
        }
    }
}
