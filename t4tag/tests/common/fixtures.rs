// fixtures.rs: provides commonly used test messages and APDUs

use t4tag::utils::parse_hex;

/// Text record "Hello", language "en", id E1 04.
pub fn hello_message() -> Vec<u8> {
    parse_hex("D9 01 08 02 54 E1 04 02 65 6E 48 65 6C 6C 6F").unwrap()
}

/// URI record "http://www.example.com" (prefix code 0x01).
pub fn example_uri_message() -> Vec<u8> {
    let mut msg = vec![0xD1, 0x01, 0x0C, b'U', 0x01];
    msg.extend_from_slice(b"example.com");
    msg
}

pub fn default_cc_bytes() -> Vec<u8> {
    parse_hex("00 0F 20 00 3B 00 34 04 06 E1 04 00 FF 00 FF").unwrap()
}

pub fn read_binary(offset: u16, le: u8) -> Vec<u8> {
    let [p1, p2] = offset.to_be_bytes();
    vec![0x00, 0xB0, p1, p2, le]
}
