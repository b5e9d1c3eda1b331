use catalog_sdk::{
    CatalogItem, ChatReply, Directive, DirectiveFilters, Field, Message, Program, ProgramStat, Role,
    UniversityDetails,
};
use serde_json::json;

fn reply(value: serde_json::Value) -> ChatReply {
    serde_json::from_value(value).expect("reply should decode")
}

#[test]
fn reply_without_action_has_no_directive() {
    assert_eq!(reply(json!({ "text": "Hello" })).action, None);
    assert_eq!(reply(json!({ "text": "Hello", "action": null })).action, None);
}

#[test]
fn empty_action_is_a_directive_with_every_field_missing() {
    let action = reply(json!({ "text": "", "action": {} })).action.unwrap();
    assert_eq!(action, Directive::default());
    assert!(action.filters.is_missing());
    assert!(action.highlight_ids.is_missing());
}

#[test]
fn distinguishes_missing_null_and_present_keys() {
    let action = reply(json!({
        "text": "",
        "action": { "filters": { "city": null, "tag": "IT" } }
    }))
    .action
    .unwrap();

    let filters = action.filters.as_present().unwrap();
    assert_eq!(filters.city, Field::Null);
    assert_eq!(filters.tag, Field::Present("IT".to_string()));
    assert_eq!(action.highlight_ids, Field::Missing);

    let action = reply(json!({
        "text": "",
        "action": { "filters": null, "highlight_ids": [] }
    }))
    .action
    .unwrap();
    assert_eq!(action.filters, Field::Null);
    assert_eq!(action.highlight_ids, Field::Present(vec![]));
}

#[test]
fn malformed_directive_field_decodes_as_null() {
    let reply = reply(json!({
        "text": "Try KBTU",
        "action": { "highlight_ids": ["1"], "filters": { "city": "Almaty", "tag": 5 } }
    }));

    assert_eq!(reply.text, "Try KBTU");
    let action = reply.action.unwrap();
    assert_eq!(action.highlight_ids, Field::Null);
    let filters = action.filters.as_present().unwrap();
    assert_eq!(filters.city, Field::Present("Almaty".to_string()));
    assert_eq!(filters.tag, Field::Null);
}

#[test]
fn non_object_action_is_no_directive() {
    for action in [json!("reset"), json!(42), json!(true)] {
        let reply = reply(json!({ "text": "Hello", "action": action }));
        assert_eq!(reply.text, "Hello");
        assert_eq!(reply.action, None);
    }

    let action = reply(json!({ "text": "", "action": { "filters": "Almaty" } }))
        .action
        .unwrap();
    assert_eq!(action.filters, Field::Null);
}

#[test]
fn reply_without_text_is_rejected() {
    assert!(serde_json::from_value::<ChatReply>(json!({ "action": {} })).is_err());
}

#[test]
fn decodes_listing_with_null_image_and_no_slug() {
    let items: Vec<CatalogItem> = serde_json::from_value(json!([
        {
            "id": 1,
            "name": "KBTU",
            "city": "Almaty",
            "image": null,
            "logo": null,
            "min_price": 0,
            "tags": ["IT"]
        },
        {
            "id": 2,
            "name": "AITU",
            "city": "Astana",
            "image": "https://img.example/aitu.jpg",
            "logo": "https://img.example/aitu-logo.png",
            "min_price": 1_500_000,
            "tags": ["IT", "Engineering"]
        }
    ]))
    .unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].image_url, None);
    assert_eq!(items[0].slug, "");
    assert_eq!(items[0].logo, None);
    assert_eq!(
        items[1].image_url.as_deref(),
        Some("https://img.example/aitu.jpg")
    );
}

#[test]
fn serializes_directive_without_missing_keys() {
    let directive = Directive::default()
        .with_filters(DirectiveFilters::default().with_city("Almaty"))
        .with_highlight_ids([3, 4]);

    assert_eq!(
        serde_json::to_value(&directive).unwrap(),
        json!({ "filters": { "city": "Almaty" }, "highlight_ids": [3, 4] })
    );
}

#[test]
fn serializes_messages_with_lowercase_roles() {
    assert_eq!(
        serde_json::to_value(Message::user("hi")).unwrap(),
        json!({ "role": "user", "text": "hi" })
    );
    let message: Message =
        serde_json::from_value(json!({ "role": "assistant", "text": "hello" })).unwrap();
    assert_eq!(message.role, Role::Assistant);
}

fn details() -> UniversityDetails {
    serde_json::from_value(json!({
        "id": 7,
        "name_ru": "Университет",
        "slug": "uni",
        "country": "Kazakhstan",
        "graduates_yearly": 1200,
        "qs_ranking": 150,
        "programs": []
    }))
    .unwrap()
}

#[test]
fn headline_stats_skip_unreported_figures() {
    let stats = details().headline_stats();

    let rendered: Vec<(&str, &str)> = stats
        .iter()
        .map(|stat| (stat.label, stat.value.as_str()))
        .collect();
    assert_eq!(
        rendered,
        vec![("Graduates yearly", "1200"), ("QS ranking", "#150")]
    );
}

#[test]
fn location_joins_known_parts() {
    let mut details = details();
    assert_eq!(details.location().as_deref(), Some("Kazakhstan"));

    details.city = Some("Almaty".to_string());
    assert_eq!(details.location().as_deref(), Some("Almaty, Kazakhstan"));

    details.city = None;
    details.country = None;
    assert_eq!(details.location(), None);
}

#[test]
fn latest_stat_is_the_first_row() {
    let program = Program {
        id: 1,
        name: "Law".to_string(),
        code: None,
        category: None,
        tags: None,
        description: None,
        program_stats: vec![
            ProgramStat {
                year: Some(2024),
                ..Default::default()
            },
            ProgramStat {
                year: Some(2023),
                ..Default::default()
            },
        ],
    };
    assert_eq!(program.latest_stat().and_then(|stat| stat.year), Some(2024));
}
