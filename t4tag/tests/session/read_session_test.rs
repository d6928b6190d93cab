#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use t4tag::ndef::{NdefRecord, RTD_TEXT};
use t4tag::{Error, Tnf};
use t4tag::config::SessionConfig;
use t4tag::session::begin_read_session;
use t4tag::session::mock::{MockHaptics, MockScanner, MockTag};

#[tokio::test]
async fn read_uri_tag_summary() -> anyhow::Result<()> {
    common::helpers::init_logging();
    let haptics = MockHaptics::new();
    let scanner =
        MockScanner::new().with_tag(MockTag::read_only(common::fixtures::example_uri_message()));

    let handle = begin_read_session(scanner, haptics.clone(), &SessionConfig::default())?;
    let summary = handle.outcome().await?;

    assert!(summary.contains("http://www.example.com"));
    assert_eq!(haptics.pulses(), vec![Duration::from_millis(150)]);
    Ok(())
}

#[tokio::test]
async fn read_reports_every_record() -> anyhow::Result<()> {
    let records = vec![
        t4tag::ndef::NdefRecord::text("en", "first", &[])?,
        t4tag::ndef::NdefRecord::text("en", "second", &[])?,
    ];
    let message = t4tag::ndef::encode_message(&records)?;
    let scanner = MockScanner::new().with_tag(MockTag::read_only(message));
    let handle = begin_read_session(scanner, MockHaptics::new(), &SessionConfig::default())?;
    let summary = handle.outcome().await?;
    assert_eq!(summary.lines().count(), 2);
    assert!(summary.starts_with("rec: 0"));
    Ok(())
}

#[tokio::test]
async fn malformed_record_is_listed_with_the_rest() -> anyhow::Result<()> {
    let records = vec![
        NdefRecord::new(Tnf::WellKnown, RTD_TEXT, Vec::<u8>::new(), vec![0x05, b'e']),
        NdefRecord::text("en", "still here", &[])?,
    ];
    let message = t4tag::ndef::encode_message(&records)?;
    let scanner = MockScanner::new().with_tag(MockTag::read_only(message));
    let handle = begin_read_session(scanner, MockHaptics::new(), &SessionConfig::default())?;
    let summary = handle.outcome().await?;

    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("rec: 0 malformed: "));
    assert_eq!(lines[1], "rec: 1 Well known Text [en] still here");
    Ok(())
}

#[tokio::test]
async fn empty_tag_reports_no_records() {
    let scanner = MockScanner::new().with_tag(MockTag::read_only(Vec::new()));
    let handle = begin_read_session(scanner, MockHaptics::new(), &SessionConfig::default()).unwrap();
    let err = handle.outcome().await.unwrap_err();
    assert_eq!(err.to_string(), "No NDEF records found");
}

#[tokio::test]
async fn corrupt_ndef_is_malformed() {
    let scanner = MockScanner::new().with_tag(MockTag::read_only(vec![0xD1, 0x01, 0x40, b'T']));
    let handle = begin_read_session(scanner, MockHaptics::new(), &SessionConfig::default()).unwrap();
    assert!(matches!(
        handle.outcome().await,
        Err(Error::MalformedRecord(_))
    ));
}

#[tokio::test(start_paused = true)]
async fn invalidate_wins_over_late_tag() {
    let mut scanner =
        MockScanner::new().with_tag(MockTag::read_only(common::fixtures::example_uri_message()));
    scanner.discovery_delay = Some(Duration::from_secs(10));
    let haptics = MockHaptics::new();
    let handle = begin_read_session(scanner, haptics.clone(), &SessionConfig::default()).unwrap();

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(handle.invalidate("user cancelled"));
    assert!(matches!(handle.outcome().await, Err(Error::Invalidated(_))));

    // The aborted flow never reaches the tag
    tokio::time::sleep(Duration::from_secs(20)).await;
    assert!(haptics.pulses().is_empty());
}

#[tokio::test(start_paused = true)]
async fn session_times_out() {
    let config = SessionConfig::default().with_timeout(Duration::from_secs(2));
    let handle = begin_read_session(MockScanner::new(), MockHaptics::new(), &config).unwrap();
    assert!(matches!(handle.outcome().await, Err(Error::Timeout)));
}
