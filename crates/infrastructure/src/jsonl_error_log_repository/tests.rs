use std::sync::Arc;

use gateview_application::ErrorLogRepository;
use gateview_core::AppError;
use gateview_domain::{ErrorEvent, ErrorType, LogLimit, PartitionDate};
use serde_json::{Map, Value};
use tempfile::TempDir;

use super::{JsonlErrorLogRepository, READ_CHUNK_BYTES};

fn event(stream_id: &str, timestamp: &str) -> ErrorEvent {
    ErrorEvent {
        timestamp: timestamp.to_owned(),
        stream_id: stream_id.to_owned(),
        error_type: ErrorType::ConnectionFailed,
        error_message: "x".to_owned(),
        status_code: None,
        whep_url: None,
        user_agent: None,
        client_info: None,
    }
}

fn limit(value: usize) -> LogLimit {
    LogLimit::new(value, 10_000).unwrap_or_else(|_| unreachable!())
}

async fn append(repository: &JsonlErrorLogRepository, event: ErrorEvent) {
    let partition = event.partition_date().unwrap_or_else(|_| unreachable!());
    let result = repository.append(partition, &event).await;
    assert!(result.is_ok(), "append failed: {result:?}");
}

fn temp_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|error| panic!("failed to create temp dir: {error}"))
}

#[tokio::test]
async fn sequential_appends_land_in_one_partition_in_order() {
    let directory = temp_dir();
    let repository = JsonlErrorLogRepository::new(directory.path().join("mediamtx_errors"));

    append(&repository, event("s1", "2024-03-01T10:00:00Z")).await;
    append(&repository, event("s2", "2024-03-01T10:05:00Z")).await;

    let content =
        std::fs::read_to_string(directory.path().join("mediamtx_errors/2024-03-01.jsonl"))
            .unwrap_or_default();
    let stream_ids: Vec<String> = content
        .lines()
        .filter_map(|line| serde_json::from_str::<ErrorEvent>(line).ok())
        .map(|event| event.stream_id)
        .collect();
    assert_eq!(stream_ids, vec!["s1".to_owned(), "s2".to_owned()]);
}

#[tokio::test]
async fn append_receipt_names_the_partition_file() {
    let directory = temp_dir();
    let repository = JsonlErrorLogRepository::new(directory.path());

    let event = event("s1", "2024-03-01T10:00:00Z");
    let partition = event.partition_date().unwrap_or_else(|_| unreachable!());
    let receipt = repository.append(partition, &event).await;

    assert_eq!(
        receipt.map(|receipt| receipt.location).ok().as_deref(),
        Some("2024-03-01.jsonl")
    );
}

#[tokio::test]
async fn latest_is_newest_appended_first_across_partitions() {
    let directory = temp_dir();
    let repository = JsonlErrorLogRepository::new(directory.path());

    append(&repository, event("old-1", "2024-02-28T08:00:00Z")).await;
    append(&repository, event("old-2", "2024-02-28T09:00:00Z")).await;
    append(&repository, event("s1", "2024-03-01T10:00:00Z")).await;
    append(&repository, event("s2", "2024-03-01T10:05:00Z")).await;

    let newest = repository.latest(limit(1)).await.unwrap_or_default();
    assert_eq!(newest.len(), 1);
    assert_eq!(newest[0].stream_id, "s2");

    let three: Vec<String> = repository
        .latest(limit(3))
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|event| event.stream_id)
        .collect();
    assert_eq!(three, vec!["s2", "s1", "old-2"]);

    let all = repository.latest(limit(50)).await.unwrap_or_default();
    assert_eq!(all.len(), 4);
}

#[tokio::test]
async fn latest_on_missing_directory_is_empty() {
    let directory = temp_dir();
    let repository = JsonlErrorLogRepository::new(directory.path().join("never-created"));

    let events = repository.latest(limit(50)).await;
    assert!(events.is_ok());
    assert!(events.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn round_trip_preserves_every_field() {
    let directory = temp_dir();
    let repository = JsonlErrorLogRepository::new(directory.path());

    let mut client_info = Map::new();
    client_info.insert("browserName".to_owned(), Value::from("Firefox"));
    client_info.insert(
        "screen".to_owned(),
        serde_json::json!({"width": 1920, "height": 1080}),
    );
    let original = ErrorEvent {
        timestamp: "2024-03-01T10:00:00.123456+09:00".to_owned(),
        stream_id: "stream-007".to_owned(),
        error_type: ErrorType::Other("ice_failed".to_owned()),
        error_message: "WHEP POST failed: 502 Bad Gateway".to_owned(),
        status_code: Some(502),
        whep_url: Some("http://192.168.0.10:8889/stitched/whep".to_owned()),
        user_agent: Some("Mozilla/5.0".to_owned()),
        client_info: Some(client_info),
    };
    append(&repository, original.clone()).await;

    let events = repository.latest(limit(1)).await.unwrap_or_default();
    assert_eq!(events, vec![original]);
}

#[tokio::test]
async fn malformed_records_are_skipped() {
    let directory = temp_dir();
    let repository = JsonlErrorLogRepository::new(directory.path());

    append(&repository, event("good-1", "2024-03-01T10:00:00Z")).await;
    let path = directory.path().join("2024-03-01.jsonl");
    let mut content = std::fs::read_to_string(&path).unwrap_or_default();
    content.push_str("{not json}\n\n");
    assert!(std::fs::write(&path, content).is_ok());
    append(&repository, event("good-2", "2024-03-01T11:00:00Z")).await;

    let stream_ids: Vec<String> = repository
        .latest(limit(10))
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|event| event.stream_id)
        .collect();
    assert_eq!(stream_ids, vec!["good-2", "good-1"]);
}

#[tokio::test]
async fn torn_tail_does_not_swallow_next_record() {
    let directory = temp_dir();
    let repository = JsonlErrorLogRepository::new(directory.path());

    append(&repository, event("before", "2024-03-01T10:00:00Z")).await;
    let path = directory.path().join("2024-03-01.jsonl");
    let mut content = std::fs::read_to_string(&path).unwrap_or_default();
    content.push_str("{\"timestamp\":\"2024-03-01T10:0");
    assert!(std::fs::write(&path, content).is_ok());

    append(&repository, event("after", "2024-03-01T10:10:00Z")).await;

    let stream_ids: Vec<String> = repository
        .latest(limit(10))
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|event| event.stream_id)
        .collect();
    assert_eq!(stream_ids, vec!["after", "before"]);
}

#[tokio::test]
async fn unrelated_files_are_ignored() {
    let directory = temp_dir();
    let repository = JsonlErrorLogRepository::new(directory.path());

    append(&repository, event("s1", "2024-03-01T10:00:00Z")).await;
    assert!(std::fs::write(directory.path().join("notes.txt"), "hello\n").is_ok());
    assert!(std::fs::write(directory.path().join("2024-3-2.jsonl"), "{}\n").is_ok());
    assert!(std::fs::create_dir(directory.path().join("2024-03-09.jsonl")).is_ok());

    let events = repository.latest(limit(10)).await.unwrap_or_default();
    assert_eq!(events.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_appends_to_one_partition_never_corrupt_records() {
    let directory = temp_dir();
    let repository = Arc::new(JsonlErrorLogRepository::new(directory.path()));
    let append_count = 64;

    let mut handles = Vec::new();
    for index in 0..append_count {
        let repository = repository.clone();
        handles.push(tokio::spawn(async move {
            let mut event = event(&format!("stream-{index:03}"), "2024-03-01T10:00:00Z");
            event.error_message = "x".repeat(4096 + index);
            let partition = event.partition_date()?;
            repository.append(partition, &event).await
        }));
    }
    for handle in handles {
        let joined = handle.await;
        assert!(matches!(joined, Ok(Ok(_))));
    }

    let content = std::fs::read_to_string(directory.path().join("2024-03-01.jsonl"))
        .unwrap_or_default();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), append_count);
    assert!(
        lines
            .iter()
            .all(|line| serde_json::from_str::<ErrorEvent>(line).is_ok())
    );
}

#[tokio::test]
async fn unwritable_directory_is_a_storage_error() {
    let directory = temp_dir();
    let blocker = directory.path().join("blocker");
    assert!(std::fs::write(&blocker, "file, not a directory").is_ok());
    let repository = JsonlErrorLogRepository::new(blocker.join("logs"));

    let event = event("s1", "2024-03-01T10:00:00Z");
    let Ok(partition) = "2024-03-01".parse::<PartitionDate>() else {
        panic!("partition literal must parse");
    };
    let result = repository.append(partition, &event).await;
    assert!(matches!(result, Err(AppError::Storage(_))));
}

#[tokio::test]
async fn latest_reads_records_spanning_chunk_boundaries() {
    let directory = temp_dir();
    let repository = JsonlErrorLogRepository::new(directory.path());
    let record_count = 40;

    for index in 0..record_count {
        let mut event = event(&format!("stream-{index:03}"), "2024-03-01T10:00:00Z");
        event.error_message = "y".repeat(5_000 + index * 7);
        append(&repository, event).await;
    }
    let file_len = std::fs::metadata(directory.path().join("2024-03-01.jsonl"))
        .map(|metadata| metadata.len())
        .unwrap_or_default();
    assert!(file_len > 2 * READ_CHUNK_BYTES);

    let stream_ids: Vec<String> = repository
        .latest(limit(record_count))
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|event| event.stream_id)
        .collect();
    let expected: Vec<String> = (0..record_count)
        .rev()
        .map(|index| format!("stream-{index:03}"))
        .collect();
    assert_eq!(stream_ids, expected);

    let newest = repository.latest(limit(2)).await.unwrap_or_default();
    assert_eq!(newest.len(), 2);
    assert_eq!(newest[1].error_message.len(), 5_000 + 38 * 7);
}

#[tokio::test]
async fn record_longer_than_a_read_chunk_is_returned_whole() {
    let directory = temp_dir();
    let repository = JsonlErrorLogRepository::new(directory.path());
    let oversized = usize::try_from(READ_CHUNK_BYTES).unwrap_or(usize::MAX / 4) * 3;

    append(&repository, event("small", "2024-03-01T09:00:00Z")).await;
    let mut big = event("big", "2024-03-01T10:00:00Z");
    big.error_message = "z".repeat(oversized);
    append(&repository, big).await;

    let events = repository.latest(limit(5)).await.unwrap_or_default();
    let stream_ids: Vec<&str> = events.iter().map(|event| event.stream_id.as_str()).collect();
    assert_eq!(stream_ids, vec!["big", "small"]);
    assert_eq!(events[0].error_message.len(), oversized);
}

#[tokio::test]
async fn idle_partition_locks_are_released() {
    let directory = temp_dir();
    let repository = JsonlErrorLogRepository::new(directory.path());

    append(&repository, event("s1", "2024-03-01T10:00:00Z")).await;
    append(&repository, event("s2", "2024-03-02T10:00:00Z")).await;
    append(&repository, event("s3", "2024-03-03T10:00:00Z")).await;

    assert!(repository.partition_locks.lock().await.is_empty());
}
