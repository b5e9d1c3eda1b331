//! Test doubles for code built on [`CatalogApi`](crate::CatalogApi).

mod api;

pub use api::{MockCatalogApi, MockResult};
