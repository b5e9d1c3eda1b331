use catalog_sdk::CatalogApi;
use dotenvy::dotenv;

mod common;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let api = common::get_api();

    let items = api.list_universities().await.unwrap();

    for item in &items {
        println!(
            "#{} {} ({}) from {} KZT [{}]",
            item.id,
            item.name,
            item.city,
            item.min_price,
            item.tags.join(", ")
        );
    }
}
