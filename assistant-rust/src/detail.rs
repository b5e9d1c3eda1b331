use catalog_sdk::{validate_slug, CatalogApi, UniversityDetails};
use tracing::error;

pub const NO_SLUG_MESSAGE: &str = "No university specified.";
pub const LOAD_FAILED_MESSAGE: &str =
    "Failed to load university details. Please try again later.";

/// Outcome of opening a university's detail page.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// No identifier was supplied. Nothing was requested.
    NoSlug,
    Loaded(Box<UniversityDetails>),
    /// The record could not be loaded. Holds the cause for diagnostics.
    Failed(String),
}

impl DetailState {
    /// The text to show instead of the record, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::NoSlug => Some(NO_SLUG_MESSAGE),
            Self::Failed(_) => Some(LOAD_FAILED_MESSAGE),
            Self::Loaded(_) => None,
        }
    }

    pub fn details(&self) -> Option<&UniversityDetails> {
        match self {
            Self::Loaded(details) => Some(details),
            Self::NoSlug | Self::Failed(_) => None,
        }
    }
}

/// Load the detail record for `slug`.
///
/// A missing or blank slug yields [`DetailState::NoSlug`]; a malformed one
/// yields [`DetailState::Failed`]. Neither reaches the service.
pub async fn load_detail(api: &dyn CatalogApi, slug: Option<&str>) -> DetailState {
    let Some(slug) = slug.filter(|slug| !slug.trim().is_empty()) else {
        return DetailState::NoSlug;
    };

    let result = match validate_slug(slug) {
        Ok(slug) => api.get_university(slug).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(details) => DetailState::Loaded(Box::new(details)),
        Err(err) => {
            error!(slug, error = %err, "failed to fetch university details");
            DetailState::Failed(err.to_string())
        }
    }
}
