use crate::{CatalogError, CatalogResult};
use opentelemetry::trace::Status;
use std::time::Instant;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

#[derive(Clone, Copy)]
pub enum RequestOperation {
    ListUniversities,
    GetUniversity,
    Chat,
}

impl RequestOperation {
    fn as_str(self) -> &'static str {
        match self {
            Self::ListUniversities => "list_universities",
            Self::GetUniversity => "get_university",
            Self::Chat => "chat",
        }
    }
}

pub struct RequestSpan {
    span: Span,
    start_time: Instant,
}

impl RequestSpan {
    pub fn new(provider: &str, operation: RequestOperation) -> Self {
        let span = match operation {
            RequestOperation::ListUniversities => info_span!("catalog_sdk.list_universities"),
            RequestOperation::GetUniversity => info_span!("catalog_sdk.get_university"),
            RequestOperation::Chat => info_span!("catalog_sdk.chat"),
        };
        span.set_attribute("catalog_sdk.provider", provider.to_string());
        span.set_attribute("catalog_sdk.operation", operation.as_str());

        Self {
            span,
            start_time: Instant::now(),
        }
    }

    fn span(&self) -> Span {
        self.span.clone()
    }

    pub fn on_error(&mut self, error: &CatalogError) {
        if let CatalogError::StatusCode(status, _) = error {
            self.span
                .set_attribute("http.response.status_code", i64::from(status.as_u16()));
        }
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }

    pub fn on_end(&mut self) {
        self.span.set_attribute(
            "catalog_sdk.duration_seconds",
            self.start_time.elapsed().as_secs_f64(),
        );
    }
}

/// Run one request future inside a `catalog_sdk.<operation>` span, recording
/// its failure on the span.
pub async fn trace_request<T, Fut>(
    provider: &str,
    operation: RequestOperation,
    future: Fut,
) -> CatalogResult<T>
where
    Fut: std::future::Future<Output = CatalogResult<T>>,
{
    let mut span = RequestSpan::new(provider, operation);
    let result = future.instrument(span.span()).await;

    if let Err(error) = &result {
        span.on_error(error);
    }

    span.on_end();
    result
}
