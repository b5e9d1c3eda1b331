use catalog_sdk::{CatalogError, CatalogResult, ChatReply, Field};
use opentelemetry::trace::Status;
use std::future::Future;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub struct TurnSpan {
    span: Span,
}

impl TurnSpan {
    pub fn new(history_len: usize) -> Self {
        let span = info_span!("catalog_assistant.turn");
        span.set_attribute("catalog_assistant.operation", "chat_turn");
        span.set_attribute(
            "catalog_assistant.history_length",
            i64::try_from(history_len).unwrap_or(i64::MAX),
        );

        Self { span }
    }

    pub fn span(&self) -> Span {
        self.span.clone()
    }

    pub fn on_reply(&mut self, reply: &ChatReply) {
        self.span
            .set_attribute("catalog_assistant.has_directive", reply.action.is_some());
        if let Some(Field::Present(ids)) = reply.action.as_ref().map(|a| &a.highlight_ids) {
            self.span.set_attribute(
                "catalog_assistant.highlight_count",
                i64::try_from(ids.len()).unwrap_or(i64::MAX),
            );
        }
    }

    pub fn on_error(&mut self, error: &CatalogError) {
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }
}

/// Await one assistant call inside a `catalog_assistant.turn` span.
pub async fn trace_turn<Fut>(history_len: usize, future: Fut) -> CatalogResult<ChatReply>
where
    Fut: Future<Output = CatalogResult<ChatReply>> + Send,
{
    let mut span = TurnSpan::new(history_len);
    let result = future.instrument(span.span()).await;

    match &result {
        Ok(reply) => span.on_reply(reply),
        Err(error) => span.on_error(error),
    }

    result
}
