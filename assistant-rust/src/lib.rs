mod detail;
mod errors;
pub mod filter;
mod opentelemetry;
mod params;
pub mod transcript;
mod view;

pub use detail::{load_detail, DetailState, LOAD_FAILED_MESSAGE, NO_SLUG_MESSAGE};
pub use errors::AssistantError;
pub use filter::{reconcile, visible_items, FilterOptions, FilterState, Selection};
pub use params::CatalogViewParams;
pub use transcript::{Transcript, QUICK_REPLIES};
pub use view::{CatalogView, TurnOutcome, ViewSnapshot};
