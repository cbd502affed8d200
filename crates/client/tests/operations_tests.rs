//! Data-plane operations, snapshot capability, and diagnostics.

mod common;

use common::*;
use esadmin_client::{Acknowledged, ServerVersion, Verdict};
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_data_plane_operations_report_shards() {
    let mock_server = MockServer::start().await;
    for suffix in ["/_refresh", "/_flush", "/_optimize", "/_cache/clear", "/_gateway/snapshot"] {
        Mock::given(method("POST"))
            .and(path(index_path(suffix)))
            .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("shards/success.json")))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let transport = transport(&mock_server);
    let index = IndexAdmin::new(INDEX, &transport).unwrap();

    let results = [
        index.refresh().await.unwrap(),
        index.flush().await.unwrap(),
        index.optimize().await.unwrap(),
        index.clear_cache().await.unwrap(),
        index.snapshot().await.unwrap(),
    ];
    for result in results {
        assert_eq!(result.shards.failed, 0);
        assert_eq!(result.verdict(), Verdict::Success);
    }
}

#[tokio::test]
async fn test_optimize_empty_index_has_no_failed_shards() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(index_path("/_optimize")))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("shards/success.json")))
        .mount(&mock_server)
        .await;

    let transport = transport(&mock_server);
    let index = IndexAdmin::new(INDEX, &transport).unwrap();
    let outcome = index.optimize().await.unwrap();
    assert_eq!(outcome.raw["_shards"]["failed"], 0);
}

#[tokio::test]
async fn test_partial_shard_failure_is_data() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(index_path("/_refresh")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("shards/partial_failure.json")),
        )
        .mount(&mock_server)
        .await;

    let transport = transport(&mock_server);
    let index = IndexAdmin::new(INDEX, &transport)
        .unwrap()
        .with_metrics(esadmin_client::MetricsCollector::new());
    let outcome = index.refresh().await.unwrap();

    assert_eq!(outcome.verdict(), Verdict::PartialFailure { failed: 2 });
    assert_eq!(outcome.shards.successful, 2);
    assert_eq!(outcome.shards.failures.len(), 2);
}

#[tokio::test]
async fn test_missing_shards_block_is_malformed() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(index_path("/_flush")))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("ack/acknowledged.json")))
        .mount(&mock_server)
        .await;

    let transport = transport(&mock_server);
    let index = IndexAdmin::new(INDEX, &transport).unwrap();
    assert!(matches!(
        index.flush().await.unwrap_err(),
        ClientError::MalformedResponse(_)
    ));
}

#[tokio::test]
async fn test_snapshot_without_handler_is_unsupported() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(index_path("/_gateway/snapshot")))
        .respond_with(ResponseTemplate::new(400).set_body_json(load_fixture("errors/no_handler.json")))
        .mount(&mock_server)
        .await;

    let transport = transport(&mock_server);
    let index = IndexAdmin::new(INDEX, &transport).unwrap();
    assert!(matches!(
        index.snapshot().await.unwrap_err(),
        ClientError::Unsupported(_)
    ));
}

#[tokio::test]
async fn test_snapshot_if_supported_skips_request_on_new_servers() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(index_path("/_gateway/snapshot")))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("shards/success.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = transport(&mock_server);
    let index = IndexAdmin::new(INDEX, &transport).unwrap();

    let new_server: ServerVersion = "1.4.4".parse().unwrap();
    assert!(matches!(
        index.snapshot_if_supported(&new_server).await.unwrap_err(),
        ClientError::Unsupported(_)
    ));

    let old_server: ServerVersion = "0.90.13".parse().unwrap();
    let outcome = index.snapshot_if_supported(&old_server).await.unwrap();
    assert!(outcome.is_complete());
}

#[tokio::test]
async fn test_stats_indices_in_either_location() {
    for fixture in ["diagnostics/stats.json", "diagnostics/stats_legacy.json"] {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(index_path("/_stats")))
            .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture(fixture)))
            .mount(&mock_server)
            .await;

        let transport = transport(&mock_server);
        let index = IndexAdmin::new(INDEX, &transport).unwrap();
        let stats = index.stats().await.unwrap();
        assert!(stats.contains_index(INDEX), "{fixture}");
    }
}

#[tokio::test]
async fn test_status_and_segments() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(index_path("/_status")))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("diagnostics/stats.json")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(index_path("/_segments")))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("diagnostics/segments.json")))
        .mount(&mock_server)
        .await;

    let transport = transport(&mock_server);
    let index = IndexAdmin::new(INDEX, &transport).unwrap();
    assert!(index.status().await.unwrap().contains_index(INDEX));
    let segments = index.segments().await.unwrap();
    assert!(segments.index(INDEX).unwrap().get("shards").is_some());
}

#[tokio::test]
async fn test_stats_of_missing_index_is_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(index_path("/_stats")))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(load_fixture("errors/index_missing_legacy.json")),
        )
        .mount(&mock_server)
        .await;

    let transport = transport(&mock_server);
    let index = IndexAdmin::new(INDEX, &transport).unwrap();
    assert!(matches!(
        index.stats().await.unwrap_err(),
        ClientError::NotFound(_)
    ));
}
