mod catalog_api;
pub mod catalog_sdk_test;
mod client_utils;
mod errors;
pub mod http;
mod opentelemetry;
mod types;
mod types_ext;

pub use catalog_api::CatalogApi;
pub use errors::*;
pub use http::{validate_slug, HttpCatalogApi, HttpCatalogApiOptions};
pub use types::*;
pub use types_ext::HeadlineStat;
