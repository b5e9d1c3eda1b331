use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    /// The worker that processes chat turns is gone, so the turn could not be
    /// submitted or its outcome was lost.
    #[error("The chat turn queue has shut down")]
    Closed,
}
