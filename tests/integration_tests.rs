//! Integration tests for fleetlabel
//!
//! These tests verify the label directory contract end-to-end: the HTTP source
//! against a mock fleet server, and the selector driven through the same
//! transitions the GUI shell performs.
//!
//! ```bash
//! cargo test --test integration_tests
//! ```

use fleetlabel::core::labels::{
    HttpLabelSource, LABELS_ENDPOINT, Label, LabelSource, StaticLabelSource,
};
use fleetlabel::core::rule::LabelClientRule;
use fleetlabel::core::selector::{LabelSelector, LoadStatus};
use httpmock::prelude::*;

/// Stub the directory listing on a mock fleet server
async fn serve_labels<'a>(server: &'a MockServer, names: &[&str]) -> httpmock::Mock<'a> {
    let items: Vec<serde_json::Value> = names
        .iter()
        .map(|name| serde_json::json!({"name": name}))
        .collect();

    server
        .mock_async(|when, then| {
            when.method(GET).path(LABELS_ENDPOINT);
            then.status(200)
                .json_body(serde_json::json!({ "items": items }));
        })
        .await
}

/// Drive a selector through one fetch against the given source, the way the
/// GUI shell does: begin, await, apply.
async fn load_selector(source: &dyn LabelSource) -> LabelSelector {
    let mut selector = LabelSelector::new();
    let generation = selector.begin_fetch();
    match source.fetch_labels().await {
        Ok(labels) => selector.apply_loaded(generation, labels),
        Err(e) => selector.apply_failed(generation, e.to_string()),
    };
    selector
}

#[tokio::test]
async fn test_shows_list_of_labels() {
    let server = MockServer::start_async().await;
    let mock = serve_labels(&server, &["label_1", "label_2"]).await;

    let source = HttpLabelSource::for_server(&server.base_url()).unwrap();
    let selector = load_selector(&source).await;

    mock.assert_async().await;
    assert_eq!(selector.options(), ["label_1", "label_2"]);
    assert_eq!(*selector.status(), LoadStatus::Loaded);

    // No bound rule: the first option is the default selection
    let rule = LabelClientRule::default();
    assert_eq!(selector.selection(&rule), Some("label_1".to_string()));
}

#[tokio::test]
async fn test_recognizes_matching_rule_on_init() {
    let server = MockServer::start_async().await;
    serve_labels(&server, &["label_1", "label_2"]).await;

    let source = HttpLabelSource::for_server(&server.base_url()).unwrap();
    let selector = load_selector(&source).await;

    let rule = LabelClientRule::named("label_2");
    assert_eq!(selector.selection(&rule), Some("label_2".to_string()));
}

#[tokio::test]
async fn test_unmatched_rule_falls_back_to_default() {
    let server = MockServer::start_async().await;
    serve_labels(&server, &["label_1", "label_2"]).await;

    let source = HttpLabelSource::for_server(&server.base_url()).unwrap();
    let selector = load_selector(&source).await;

    let rule = LabelClientRule::named("label_3");
    assert_eq!(selector.selection(&rule), Some("label_1".to_string()));
    // Fallback never rewrites the bound value
    assert_eq!(rule.label_name.as_deref(), Some("label_3"));
}

#[tokio::test]
async fn test_empty_listing_renders_no_options() {
    let server = MockServer::start_async().await;
    serve_labels(&server, &[]).await;

    let source = HttpLabelSource::for_server(&server.base_url()).unwrap();
    let selector = load_selector(&source).await;

    assert!(selector.options().is_empty());
    assert_eq!(selector.selection(&LabelClientRule::default()), None);
}

#[tokio::test]
async fn test_only_the_labels_endpoint_is_requested() {
    let server = MockServer::start_async().await;
    let labels_mock = serve_labels(&server, &["label_1"]).await;

    // Even a base URL carrying a path prefix must resolve to the fixed
    // absolute endpoint, exactly once per fetch.
    let base = format!("{}/ui/v2", server.base_url());
    let source = HttpLabelSource::for_server(&base).unwrap();
    let selector = load_selector(&source).await;

    labels_mock.assert_hits_async(1).await;
    assert_eq!(selector.options(), ["label_1"]);
}

#[tokio::test]
async fn test_pick_round_trips_through_bound_rule() {
    let server = MockServer::start_async().await;
    serve_labels(&server, &["label_1", "label_2"]).await;

    let source = HttpLabelSource::for_server(&server.base_url()).unwrap();
    let selector = load_selector(&source).await;

    let mut rule = LabelClientRule::default();
    selector.pick("label_2".to_string(), &mut rule);

    assert_eq!(rule.label_name.as_deref(), Some("label_2"));
    assert_eq!(selector.selection(&rule), Some("label_2".to_string()));

    // The enclosing form serializes the rule with the picked label
    let json = serde_json::to_string(&rule).unwrap();
    assert_eq!(json, r#"{"label_name":"label_2"}"#);
}

#[tokio::test]
async fn test_directory_failure_is_survivable() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(LABELS_ENDPOINT);
            then.status(500);
        })
        .await;

    let source = HttpLabelSource::for_server(&server.base_url()).unwrap();
    let selector = load_selector(&source).await;

    assert!(selector.options().is_empty());
    assert!(matches!(selector.status(), LoadStatus::Failed(_)));
    // Rendering still works: there is simply nothing to select
    assert_eq!(selector.selection(&LabelClientRule::named("label_1")), None);
}

#[tokio::test]
async fn test_malformed_listing_is_a_failure_not_a_crash() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(LABELS_ENDPOINT);
            then.status(200).body("<html>not a fleet server</html>");
        })
        .await;

    let source = HttpLabelSource::for_server(&server.base_url()).unwrap();
    let selector = load_selector(&source).await;

    match selector.status() {
        LoadStatus::Failed(message) => assert!(message.contains("malformed label listing")),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_reload_supersedes_inflight_fetch() {
    let source = StaticLabelSource::new(&["fresh_1", "fresh_2"]);

    let mut selector = LabelSelector::new();
    let first = selector.begin_fetch();
    let second = selector.begin_fetch();

    // The superseded fetch resolves late; its listing must be dropped
    assert!(!selector.apply_loaded(first, vec![Label::new("stale")]));
    assert!(selector.is_loading());

    let labels = source.fetch_labels().await.unwrap();
    assert!(selector.apply_loaded(second, labels));
    assert_eq!(selector.options(), ["fresh_1", "fresh_2"]);
}

#[tokio::test]
async fn test_duplicate_delivery_never_duplicates_options() {
    let server = MockServer::start_async().await;
    serve_labels(&server, &["label_1", "label_2"]).await;

    let source = HttpLabelSource::for_server(&server.base_url()).unwrap();

    let mut selector = LabelSelector::new();
    let generation = selector.begin_fetch();
    let labels = source.fetch_labels().await.unwrap();

    assert!(selector.apply_loaded(generation, labels.clone()));
    assert!(selector.apply_loaded(generation, labels));
    assert_eq!(selector.options(), ["label_1", "label_2"]);
}

#[tokio::test]
async fn test_static_source_substitutes_for_the_directory() {
    // The in-memory fake drives the same component transitions as HTTP
    let source = StaticLabelSource::new(&["label_1", "label_2"]);
    let selector = load_selector(&source).await;

    assert_eq!(selector.options(), ["label_1", "label_2"]);

    let outage = StaticLabelSource::failing("connection refused");
    let selector = load_selector(&outage).await;
    assert!(matches!(selector.status(), LoadStatus::Failed(_)));
}
