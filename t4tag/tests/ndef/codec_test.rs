#[path = "../common/mod.rs"]
mod common;

use proptest::prelude::*;
use t4tag::Tnf;
use t4tag::ndef::{
    NdefRecord, decode_message, decode_text_payload, decode_uri_payload, encode_message,
    encode_text_record, encode_uri_record,
};

#[test]
fn hello_text_record_bytes() {
    let encoded = encode_text_record("en", "Hello", &[0xE1, 0x04]).unwrap();
    assert_eq!(encoded, common::fixtures::hello_message());
}

#[test]
fn example_uri_decodes() {
    let records = decode_message(&common::fixtures::example_uri_message()).unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].is_well_known(b"U"));
    assert_eq!(
        decode_uri_payload(&records[0].payload).unwrap(),
        "http://www.example.com"
    );
    assert_eq!(
        encode_uri_record("http://www.example.com", &[]).unwrap(),
        common::fixtures::example_uri_message()
    );
}

#[test]
fn mixed_message_flags() -> anyhow::Result<()> {
    let records = vec![
        NdefRecord::text("fr", "Bonjour", &[])?,
        NdefRecord::uri("https://example.org/a", &[]),
        NdefRecord::mime("application/json", "{}", &[0x01])?,
    ];
    let bytes = encode_message(&records)?;
    let decoded = decode_message(&bytes)?;
    assert_eq!(decoded, records);

    // MB on the first header only, ME on the last only
    assert_eq!(bytes[0] & 0xC0, 0x80);
    let last = decoded[0].encoded_len() + decoded[1].encoded_len();
    assert_eq!(bytes[last] & 0xC0, 0x40);
    assert_eq!(decoded[2].tnf, Tnf::MimeMedia);

    let text = decode_text_payload(&decoded[0].payload)?;
    assert_eq!((text.language_code.as_str(), text.text.as_str()), ("fr", "Bonjour"));
    Ok(())
}

#[test]
fn long_payload_uses_four_byte_length() -> anyhow::Result<()> {
    let text = "z".repeat(300);
    let bytes = encode_text_record("en", &text, &[])?;
    // SR clear
    assert_eq!(bytes[0] & 0x10, 0);
    assert_eq!(&bytes[2..6], &(303u32).to_be_bytes());
    let records = decode_message(&bytes)?;
    assert_eq!(decode_text_payload(&records[0].payload)?.text, text);
    Ok(())
}

proptest! {
    #[test]
    fn decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = decode_message(&bytes);
    }

    #[test]
    fn text_records_survive_message_framing(
        texts in prop::collection::vec(".{0,40}", 1..4)
    ) {
        let records: Vec<NdefRecord> = texts
            .iter()
            .map(|t| NdefRecord::text("en", t, &[]).unwrap())
            .collect();
        let bytes = encode_message(&records).unwrap();
        let decoded = decode_message(&bytes).unwrap();
        prop_assert_eq!(decoded.len(), texts.len());
        for (record, text) in decoded.iter().zip(&texts) {
            prop_assert_eq!(&decode_text_payload(&record.payload).unwrap().text, text);
        }
    }
}
