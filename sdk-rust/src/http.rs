use crate::{
    catalog_api::CatalogApi,
    client_utils,
    errors::{CatalogError, CatalogResult},
    opentelemetry::{trace_request, RequestOperation},
    CatalogItem, ChatReply, ChatRequest, UniversityDetails,
};
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client,
};
use std::time::Duration;

const PROVIDER: &str = "http";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// `CatalogApi` backed by the catalog service's JSON endpoints.
pub struct HttpCatalogApi {
    base_url: String,
    client: Client,
    headers: HeaderMap,
}

#[derive(Clone, Default)]
pub struct HttpCatalogApiOptions {
    /// Root of the service, e.g. `http://127.0.0.1:8000/api`.
    pub base_url: Option<String>,
    /// Upper bound for a whole request. No timeout when unset.
    pub timeout: Option<Duration>,
    /// Extra headers sent with every request.
    pub headers: HeaderMap,
    /// A preconfigured client. `timeout` is ignored when one is supplied.
    pub client: Option<Client>,
}

impl HttpCatalogApi {
    pub fn new(options: HttpCatalogApiOptions) -> CatalogResult<Self> {
        let HttpCatalogApiOptions {
            base_url,
            timeout,
            headers,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let client = match client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(Self {
            base_url,
            client,
            headers,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_headers(&self) -> HeaderMap {
        let mut headers = self.headers.clone();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }
}

/// Check that `slug` can be placed in a URL path as is.
/// Slugs are non-empty and made of unreserved URL characters only.
pub fn validate_slug(slug: &str) -> CatalogResult<&str> {
    if slug.trim().is_empty() {
        return Err(CatalogError::InvalidInput("slug is empty".to_string()));
    }
    if let Some(c) = slug
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~')))
    {
        return Err(CatalogError::InvalidInput(format!(
            "slug {slug:?} contains invalid character {c:?}"
        )));
    }
    if slug == "." || slug == ".." {
        return Err(CatalogError::InvalidInput(format!(
            "slug {slug:?} is a path segment"
        )));
    }
    Ok(slug)
}

#[async_trait::async_trait]
impl CatalogApi for HttpCatalogApi {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn list_universities(&self) -> CatalogResult<Vec<CatalogItem>> {
        trace_request(PROVIDER, RequestOperation::ListUniversities, async {
            client_utils::get_json(
                &self.client,
                &format!("{}/universities", self.base_url),
                self.request_headers(),
            )
            .await
        })
        .await
    }

    async fn get_university(&self, slug: &str) -> CatalogResult<UniversityDetails> {
        trace_request(PROVIDER, RequestOperation::GetUniversity, async {
            let slug = validate_slug(slug)?;
            client_utils::get_json(
                &self.client,
                &format!("{}/universities/{slug}", self.base_url),
                self.request_headers(),
            )
            .await
        })
        .await
    }

    async fn chat(&self, request: ChatRequest) -> CatalogResult<ChatReply> {
        trace_request(PROVIDER, RequestOperation::Chat, async {
            client_utils::send_json(
                &self.client,
                &format!("{}/chat", self.base_url),
                &request,
                self.request_headers(),
            )
            .await
        })
        .await
    }
}
