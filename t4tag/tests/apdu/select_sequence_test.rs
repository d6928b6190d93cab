#[path = "../common/mod.rs"]
mod common;

use t4tag::apdu::{ApduService, SelectionState};
use t4tag::constants::{SELECT_APPLICATION, SELECT_CAPABILITY_CONTAINER, SELECT_NDEF_FILE};
use t4tag::test_support;
use t4tag::types::DeactivationReason;

#[test]
fn full_select_sequence() {
    common::helpers::init_logging();
    let mut session = test_support::session_with_message(&common::fixtures::hello_message()).unwrap();

    assert_eq!(session.process_command_apdu(&SELECT_APPLICATION), vec![0x90, 0x00]);
    assert_eq!(session.state(), SelectionState::AppSelected);
    assert_eq!(
        session.process_command_apdu(&SELECT_CAPABILITY_CONTAINER),
        vec![0x90, 0x00]
    );
    assert_eq!(session.state(), SelectionState::CcSelected);
    assert_eq!(session.process_command_apdu(&SELECT_NDEF_FILE), vec![0x90, 0x00]);
    assert_eq!(session.state(), SelectionState::NdefSelected);
}

#[test]
fn file_selects_before_application_fail() {
    let mut session = test_support::session_with_message(&[]).unwrap();
    for cmd in [&SELECT_CAPABILITY_CONTAINER, &SELECT_NDEF_FILE] {
        common::helpers::assert_failure(&session.process_command(cmd));
        assert_eq!(session.state(), SelectionState::Initial);
    }
}

#[test]
fn near_miss_select_is_rejected() {
    let mut session = test_support::session_with_message(&[]).unwrap();
    test_support::select_cc(&mut session).unwrap();

    // Wrong AID byte, missing Le, and a different file id
    let mut wrong_aid = SELECT_APPLICATION;
    wrong_aid[11] = 0x02;
    common::helpers::assert_failure(&session.process_command(&wrong_aid));
    common::helpers::assert_failure(&session.process_command(&SELECT_APPLICATION[..12]));
    common::helpers::assert_failure(
        &session.process_command(&[0x00, 0xA4, 0x00, 0x0C, 0x02, 0xE1, 0x05]),
    );
    assert_eq!(session.state(), SelectionState::CcSelected);
}

#[test]
fn deactivation_requires_reselect() {
    let mut session = test_support::session_with_message(&common::fixtures::hello_message()).unwrap();
    test_support::select_ndef(&mut session).unwrap();
    session.on_deactivated(DeactivationReason::from(1));
    assert_eq!(session.state(), SelectionState::Initial);
    common::helpers::assert_failure(
        &session.process_command(&common::fixtures::read_binary(0, 2)),
    );
    test_support::select_ndef(&mut session).unwrap();
    assert!(
        session
            .process_command(&common::fixtures::read_binary(0, 2))
            .is_success()
    );
}
