use catalog_sdk::CatalogApi;
use dotenvy::dotenv;

mod common;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let slug = std::env::args()
        .nth(1)
        .expect("usage: university-details <slug>");

    let api = common::get_api();

    let details = api.get_university(&slug).await.unwrap();

    println!("{details:#?}");
    for stat in details.headline_stats() {
        println!("{}: {}", stat.label, stat.value);
    }
}
