use crate::{
    transcript::{DEFAULT_FALLBACK_TEXT, DEFAULT_GREETING},
    CatalogView,
};
use catalog_sdk::{CatalogApi, CatalogItem};
use std::sync::Arc;

/// Parameters required to open a catalog view.
/// # Default Values
/// - `items`: `vec![]`
/// - `greeting`: [`DEFAULT_GREETING`]
/// - `fallback_text`: [`DEFAULT_FALLBACK_TEXT`]
pub struct CatalogViewParams {
    /// The catalog service used for listing and chat turns.
    pub api: Arc<dyn CatalogApi>,
    /// Items to start with, e.g. a listing the caller already fetched.
    pub items: Vec<CatalogItem>,
    /// The assistant message a fresh transcript starts with.
    pub greeting: String,
    /// The assistant message appended when a chat turn fails.
    pub fallback_text: String,
}

impl CatalogViewParams {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            items: Vec::new(),
            greeting: DEFAULT_GREETING.to_string(),
            fallback_text: DEFAULT_FALLBACK_TEXT.to_string(),
        }
    }

    /// Set the initial items
    #[must_use]
    pub fn items(mut self, items: Vec<CatalogItem>) -> Self {
        self.items = items;
        self
    }

    /// Set the greeting
    #[must_use]
    pub fn greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    /// Set the fallback message for failed turns
    #[must_use]
    pub fn fallback_text(mut self, fallback_text: impl Into<String>) -> Self {
        self.fallback_text = fallback_text.into();
        self
    }

    /// Open the view. Must be called within a Tokio runtime.
    #[must_use]
    pub fn build(self) -> CatalogView {
        CatalogView::new(self)
    }
}
