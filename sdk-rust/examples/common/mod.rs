use catalog_sdk::{HttpCatalogApi, HttpCatalogApiOptions};
use std::time::Duration;

pub fn get_api() -> HttpCatalogApi {
    HttpCatalogApi::new(HttpCatalogApiOptions {
        base_url: std::env::var("CATALOG_API_BASE_URL").ok(),
        timeout: Some(Duration::from_secs(60)),
        ..Default::default()
    })
    .expect("failed to build catalog client")
}
