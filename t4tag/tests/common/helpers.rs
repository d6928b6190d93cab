// helpers.rs: logging setup and small assertions shared by tests

use t4tag::apdu::ResponseApdu;

/// Install env_logger once; repeated calls are ignored.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn assert_failure(resp: &ResponseApdu) {
    assert_eq!(resp.to_bytes(), vec![0x6A, 0x82], "expected 6A 82");
}
