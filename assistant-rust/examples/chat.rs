use catalog_assistant::{load_detail, CatalogView, DetailState, TurnOutcome, QUICK_REPLIES};
use catalog_sdk::{HttpCatalogApi, HttpCatalogApiOptions, Role};
use dotenvy::dotenv;
use std::{
    env,
    io::{self, BufRead, Write},
    sync::Arc,
    time::Duration,
};
use tracing_subscriber::EnvFilter;

async fn print_catalog(view: &CatalogView) {
    let snapshot = view.snapshot().await;
    println!(
        "[city: {} | tag: {} | highlighted: {:?}] {} universities match your filters",
        snapshot.filter.city,
        snapshot.filter.tag,
        snapshot.filter.highlighted_ids,
        snapshot.visible.len()
    );
    for item in &snapshot.visible {
        let marker = if snapshot.filter.is_highlighted(item.id) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} {} ({}) from {} KZT [{}]",
            item.name,
            item.city,
            item.min_price,
            item.tags.join(", ")
        );
    }
}

async fn print_detail(api: &HttpCatalogApi, slug: Option<&str>) {
    match load_detail(api, slug).await {
        DetailState::Loaded(details) => {
            println!("{}", details.name_ru);
            if let Some(location) = details.location() {
                println!("  {location}");
            }
            for stat in details.headline_stats() {
                println!("  {}: {}", stat.label, stat.value);
            }
            for program in &details.programs {
                let tuition = program
                    .latest_stat()
                    .and_then(|stat| stat.tuition_fee)
                    .map(|fee| format!(" - tuition {fee} KZT"))
                    .unwrap_or_default();
                println!("  * {}{tuition}", program.name);
            }
        }
        state => println!("{}", state.error_message().unwrap_or_default()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api = Arc::new(HttpCatalogApi::new(HttpCatalogApiOptions {
        base_url: env::var("CATALOG_API_BASE_URL").ok(),
        timeout: Some(Duration::from_secs(60)),
        ..Default::default()
    })?);

    let view = CatalogView::builder(api.clone()).build();
    view.load_items().await;

    for message in view.messages().await {
        println!("Advisor: {}", message.text);
    }
    println!("Commands: /reset, /city <name>, /tag <name>, /detail <slug>, /quick <1-3>, /quit");
    print_catalog(&view).await;

    let stdin = io::stdin();
    loop {
        print!("You: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        let text = match line.split_once(' ').unwrap_or((line, "")) {
            ("/quit", _) => break,
            ("/reset", _) => {
                view.reset_filters().await;
                print_catalog(&view).await;
                continue;
            }
            ("/city", city) => {
                view.select_city(city.trim()).await;
                print_catalog(&view).await;
                continue;
            }
            ("/tag", tag) => {
                view.select_tag(tag.trim()).await;
                print_catalog(&view).await;
                continue;
            }
            ("/detail", slug) => {
                print_detail(&api, Some(slug.trim())).await;
                continue;
            }
            ("/quick", index) => {
                let Some(question) = index
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| QUICK_REPLIES.get(i.wrapping_sub(1)))
                else {
                    println!("Quick replies: {QUICK_REPLIES:?}");
                    continue;
                };
                println!("You: {question}");
                (*question).to_string()
            }
            _ => line.to_string(),
        };

        match view.send(&text).await? {
            TurnOutcome::Ignored | TurnOutcome::Discarded => continue,
            TurnOutcome::Answered { .. } | TurnOutcome::Failed(_) => {}
        }

        if let Some(message) = view.messages().await.last() {
            if message.role == Role::Assistant {
                println!("Advisor: {}", message.text);
            }
        }
        print_catalog(&view).await;
    }

    Ok(())
}
