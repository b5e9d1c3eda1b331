use catalog_sdk::{CatalogApi, ChatRequest, Message};
use dotenvy::dotenv;

mod common;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let api = common::get_api();

    let reply = api
        .chat(ChatRequest {
            message: "IT programs in Astana".to_string(),
            history: vec![Message::assistant(
                "Hi! Tell me your goals, budget, and preferred city.",
            )],
        })
        .await
        .unwrap();

    println!("{reply:#?}");
}
