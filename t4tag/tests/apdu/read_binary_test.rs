#[path = "../common/mod.rs"]
mod common;

use t4tag::test_support;

#[test]
fn reader_fetches_hello_message() {
    common::helpers::init_logging();
    let message = common::fixtures::hello_message();
    let mut session = test_support::session_with_message(&message).unwrap();
    test_support::select_ndef(&mut session).unwrap();

    let nlen = session.process_command(&common::fixtures::read_binary(0, 2));
    assert_eq!(nlen.to_bytes(), vec![0x00, 0x0F, 0x90, 0x00]);

    let body = session.process_command(&common::fixtures::read_binary(2, 0x0F));
    let mut expected = message.clone();
    expected.extend_from_slice(&[0x90, 0x00]);
    assert_eq!(body.to_bytes(), expected);
}

#[test]
fn cc_read_returns_fixed_descriptor() {
    let mut session = test_support::session_with_message(&[]).unwrap();
    test_support::select_cc(&mut session).unwrap();
    let resp = session.process_command(&common::fixtures::read_binary(0, 0x0F));
    assert_eq!(resp.data, common::fixtures::default_cc_bytes());
    assert!(resp.is_success());
}

#[test]
fn chunked_reader_sees_whole_message() {
    let long_text = "a".repeat(200);
    let message = t4tag::ndef::encode_text_record("en", &long_text, &[0xE1, 0x04]).unwrap();
    let mut session = test_support::session_with_message(&message).unwrap();
    assert_eq!(test_support::read_like_reader(&mut session).unwrap(), message);
}

#[test]
fn out_of_range_read_fails_without_data() {
    let message = common::fixtures::hello_message();
    let mut session = test_support::session_with_message(&message).unwrap();
    test_support::select_ndef(&mut session).unwrap();
    let resp = session.process_command(&common::fixtures::read_binary(10, 0x10));
    assert!(resp.data.is_empty());
    common::helpers::assert_failure(&resp);
    // Reading exactly to the end is fine
    assert!(
        session
            .process_command(&common::fixtures::read_binary(10, 7))
            .is_success()
    );
}
