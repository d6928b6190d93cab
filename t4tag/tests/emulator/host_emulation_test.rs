#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;
use std::thread;

use t4tag::Error;
use t4tag::config::EmulatorConfig;
use t4tag::emulator::{EmulatorBuilder, StaticAdapter};
use t4tag::ndef::{decode_message, decode_text_payload};
use t4tag::test_support;

#[test]
fn reader_sees_emulated_text() -> anyhow::Result<()> {
    common::helpers::init_logging();
    let emulator = test_support::text_emulator("Hello")?;
    let mut session = emulator.open_session()?;
    let message = test_support::read_like_reader(&mut session)?;
    assert_eq!(message, common::fixtures::hello_message());
    Ok(())
}

#[test]
fn new_message_visible_to_open_session() -> anyhow::Result<()> {
    let emulator = test_support::text_emulator("first")?;
    let mut session = emulator.open_session()?;
    emulator.emulate_message("second")?;
    let message = test_support::read_like_reader(&mut session)?;
    let records = decode_message(&message)?;
    assert_eq!(decode_text_payload(&records[0].payload)?.text, "second");
    Ok(())
}

#[test]
fn concurrent_replacement_never_tears_reads() {
    let emulator = Arc::new(test_support::text_emulator("aaaa").unwrap());
    let writer = {
        let emulator = Arc::clone(&emulator);
        thread::spawn(move || {
            for i in 0..200 {
                let text = if i % 2 == 0 { "bbbbbbbb" } else { "aaaa" };
                emulator.emulate_message(text).unwrap();
            }
        })
    };

    for _ in 0..200 {
        let mut session = emulator.open_session().unwrap();
        test_support::select_ndef(&mut session).unwrap();
        let file = session.process_command(&common::fixtures::read_binary(0, 2));
        assert!(file.is_success());
        // Whatever file was current, its NLEN names one of the two messages
        let nlen = u16::from_be_bytes([file.data[0], file.data[1]]);
        assert!(nlen == 14 || nlen == 18, "unexpected NLEN {}", nlen);
    }
    writer.join().unwrap();
}

#[test]
fn configured_language_and_limit() {
    let config = EmulatorConfig {
        language_code: "de".into(),
        max_ndef_size: 40,
        ..Default::default()
    };
    let emulator = EmulatorBuilder::new()
        .with_adapter(StaticAdapter::available())
        .with_config(config)
        .build()
        .unwrap();
    assert!(matches!(
        emulator.emulate_message(&"x".repeat(60)),
        Err(Error::CapacityExceeded { max: 40, .. })
    ));
    emulator.emulate_message("kurz").unwrap();
    let records = decode_message(emulator.current_file().message()).unwrap();
    assert_eq!(decode_text_payload(&records[0].payload).unwrap().language_code, "de");
}

#[test]
fn invalid_config_rejected_at_build() {
    let config = EmulatorConfig {
        max_ndef_size: 1024,
        ..Default::default()
    };
    let res = EmulatorBuilder::new()
        .with_adapter(StaticAdapter::available())
        .with_config(config)
        .build();
    assert!(matches!(res, Err(Error::InvalidConfig(_))));
}

#[cfg(feature = "async")]
#[tokio::test]
async fn disabled_adapter_refuses_sessions() {
    use t4tag::session::mock::{MockHaptics, MockScanner};

    let emulator = EmulatorBuilder::new()
        .with_adapter(StaticAdapter {
            enabled: false,
            host_card_emulation: true,
        })
        .build()
        .unwrap();
    let res = emulator.begin_read_session(MockScanner::new(), MockHaptics::new());
    assert!(matches!(res, Err(Error::Session(_))));
}
