#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use t4tag::Error;
use t4tag::config::SessionConfig;
use t4tag::ndef::{NdefRecord, decode_message, decode_text_payload};
use t4tag::session::mock::{MockScanner, MockTag};
use t4tag::session::{begin_write_records, begin_write_session};
use t4tag::types::{NdefState, NdefStatus};

#[tokio::test]
async fn write_text_to_writable_tag() -> anyhow::Result<()> {
    common::helpers::init_logging();
    let tag = MockTag::writable(256, Vec::new());
    let scanner = MockScanner::new().with_tag(tag.clone());

    let handle = begin_write_session(scanner, "Hello", &SessionConfig::default())?;
    assert_eq!(handle.outcome().await?, "Message written successfully.");

    let written = tag.written();
    assert_eq!(written.len(), 1);
    let records = decode_message(&written[0])?;
    assert_eq!(decode_text_payload(&records[0].payload)?.text, "Hello");
    assert_eq!(tag.connect_count(), 1);
    Ok(())
}

#[tokio::test]
async fn read_only_tag_receives_nothing() {
    let tag = MockTag::read_only(common::fixtures::hello_message());
    let scanner = MockScanner::new().with_tag(tag.clone());
    let handle = begin_write_session(scanner, "Hello", &SessionConfig::default()).unwrap();
    let err = handle.outcome().await.unwrap_err();
    assert!(matches!(err, Error::NotWritable));
    assert_eq!(err.to_string(), "Tag is not writable.");
    assert!(tag.written().is_empty());
}

#[tokio::test]
async fn unsupported_tag_is_not_writable() {
    let tag = MockTag::new(NdefStatus::new(NdefState::NotSupported, 0), None);
    let scanner = MockScanner::new().with_tag(tag.clone());
    let handle = begin_write_session(scanner, "x", &SessionConfig::default()).unwrap();
    assert!(matches!(handle.outcome().await, Err(Error::NotWritable)));
}

#[tokio::test]
async fn message_larger_than_tag_is_refused() {
    let tag = MockTag::writable(8, Vec::new());
    let scanner = MockScanner::new().with_tag(tag.clone());
    let handle = begin_write_session(scanner, "far too long for eight bytes", &SessionConfig::default())
        .unwrap();
    assert!(matches!(
        handle.outcome().await,
        Err(Error::CapacityExceeded { max: 8, .. })
    ));
    assert!(tag.written().is_empty());
}

#[tokio::test]
async fn write_failure_is_not_retried() {
    let mut tag = MockTag::writable(256, Vec::new());
    tag.fail_write = true;
    let observer = tag.clone();
    let scanner = MockScanner::new()
        .with_tag(tag)
        .with_tag(MockTag::writable(256, Vec::new()));
    let handle = begin_write_records(
        scanner,
        vec![NdefRecord::uri("https://example.org", &[])],
        &SessionConfig::default(),
    )
    .unwrap();
    match handle.outcome().await {
        Err(Error::Session(msg)) => assert!(msg.starts_with("Write failed")),
        other => panic!("expected write failure, got {:?}", other),
    }
    assert_eq!(observer.connect_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn abandoned_outcome_stops_pending_write() {
    let tag = MockTag::writable(256, Vec::new());
    let mut scanner = MockScanner::new().with_tag(tag.clone());
    scanner.discovery_delay = Some(Duration::from_secs(10));
    let handle = begin_write_session(scanner, "Hello", &SessionConfig::default()).unwrap();
    let invalidator = handle.invalidator();

    tokio::select! {
        outcome = handle.outcome() => panic!("session finished early: {:?}", outcome),
        _ = tokio::time::sleep(Duration::from_secs(1)) => {}
    }
    assert!(invalidator.is_finished());

    tokio::time::sleep(Duration::from_secs(20)).await;
    assert!(tag.written().is_empty());
    assert_eq!(tag.connect_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn invalidator_cancels_awaited_write() {
    let tag = MockTag::writable(256, Vec::new());
    let mut scanner = MockScanner::new().with_tag(tag.clone());
    scanner.discovery_delay = Some(Duration::from_secs(10));
    let handle = begin_write_session(scanner, "Hello", &SessionConfig::default()).unwrap();
    let invalidator = handle.invalidator();
    let waiter = tokio::spawn(handle.outcome());

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(invalidator.invalidate("user dismissed the sheet"));
    assert!(matches!(waiter.await.unwrap(), Err(Error::Invalidated(_))));

    tokio::time::sleep(Duration::from_secs(20)).await;
    assert!(tag.written().is_empty());
}
