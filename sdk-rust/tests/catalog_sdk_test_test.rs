use catalog_sdk::{
    catalog_sdk_test::{MockCatalogApi, MockResult},
    CatalogApi, CatalogError, CatalogItem, ChatReply, ChatRequest, Message,
};

fn request(text: &str) -> ChatRequest {
    ChatRequest {
        message: text.to_string(),
        history: vec![Message::assistant("Hi!")],
    }
}

fn text_reply(text: &str) -> ChatReply {
    ChatReply {
        text: text.to_string(),
        action: None,
    }
}

#[tokio::test]
async fn mock_catalog_api_tracks_chat_requests_and_returns_results() {
    let api = MockCatalogApi::new();

    api.enqueue_chat(text_reply("first"))
        .enqueue_chat(CatalogError::InvalidInput("chat error".to_string()))
        .enqueue_chat(text_reply("third"));

    let res1 = api.chat(request("one")).await.expect("first chat should succeed");
    assert_eq!(res1, text_reply("first"));

    let err = api.chat(request("two")).await.unwrap_err();
    assert!(matches!(err, CatalogError::InvalidInput(msg) if msg == "chat error"));

    let res3 = api.chat(request("three")).await.unwrap();
    assert_eq!(res3.text, "third");

    let tracked = api.tracked_chat_requests();
    assert_eq!(tracked.len(), 3);
    assert_eq!(tracked[1], request("two"));

    api.reset();
    assert!(api.tracked_chat_requests().is_empty());
}

#[tokio::test]
async fn mock_catalog_api_errors_when_queue_is_empty() {
    let api = MockCatalogApi::new();

    let err = api.list_universities().await.unwrap_err();
    assert!(matches!(err, CatalogError::Invariant("mock", _)));
    assert_eq!(api.list_calls(), 1);

    let err = api.get_university("aitu").await.unwrap_err();
    assert!(matches!(err, CatalogError::Invariant("mock", _)));
    assert_eq!(api.tracked_detail_slugs(), vec!["aitu".to_string()]);
}

#[tokio::test]
async fn mock_catalog_api_resolves_deferred_results_when_sent() {
    let api = MockCatalogApi::new();
    let (deferred, tx) = MockResult::<ChatReply>::deferred();
    api.enqueue_chat(deferred);

    let pending = api.chat(request("later"));
    tx.send(Ok(text_reply("done"))).unwrap();

    assert_eq!(pending.await.unwrap().text, "done");
}

#[tokio::test]
async fn mock_catalog_api_fails_deferred_result_when_sender_dropped() {
    let api = MockCatalogApi::new();
    let (deferred, tx) = MockResult::<ChatReply>::deferred();
    api.enqueue_chat(deferred);
    drop(tx);

    let err = api.chat(request("never")).await.unwrap_err();
    assert!(matches!(err, CatalogError::Invariant("mock", _)));
}

#[tokio::test]
async fn mock_catalog_api_restore_clears_queued_results() {
    let api = MockCatalogApi::new();
    api.enqueue_list(Vec::<CatalogItem>::new());
    api.restore();

    assert!(api.list_universities().await.is_err());
}
