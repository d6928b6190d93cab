// t4tag/src/session/describe.rs
//! Human-readable summaries of read records.

use std::fmt;

use log::warn;

use crate::Result;
use crate::ndef::{NdefRecord, RTD_TEXT, RTD_URI, decode_text_payload, decode_uri_payload};
use crate::types::Tnf;

/// Classification of one record for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordDescription {
    /// Well known Text record.
    Text {
        /// IANA language code from the status byte.
        language_code: String,
        /// Decoded text.
        text: String,
    },
    /// Well known URI record, prefix expanded.
    Uri(String),
    /// MIME media record, payload shown as (lossy) UTF-8.
    Mime {
        /// Media type from the record type field.
        mime_type: String,
        /// Payload text.
        payload: String,
    },
    /// NFC Forum external type.
    External {
        /// Domain-qualified type name.
        record_type: String,
        /// Payload text.
        payload: String,
    },
    /// Anything else, summarized by size.
    Other {
        /// Record TNF.
        tnf: Tnf,
        /// Payload length in bytes.
        payload_len: usize,
    },
}

impl RecordDescription {
    /// Classify `record`. Text and URI payloads are decoded and may fail.
    pub fn from_record(record: &NdefRecord) -> Result<Self> {
        let lossy = |bytes: &[u8]| String::from_utf8_lossy(bytes).into_owned();
        let description = match record.tnf {
            Tnf::WellKnown if record.record_type == RTD_TEXT => {
                let text = decode_text_payload(&record.payload)?;
                Self::Text {
                    language_code: text.language_code,
                    text: text.text,
                }
            }
            Tnf::WellKnown if record.record_type == RTD_URI => {
                Self::Uri(decode_uri_payload(&record.payload)?)
            }
            Tnf::MimeMedia => Self::Mime {
                mime_type: lossy(&record.record_type),
                payload: lossy(&record.payload),
            },
            Tnf::ExternalType => Self::External {
                record_type: lossy(&record.record_type),
                payload: lossy(&record.payload),
            },
            tnf => Self::Other {
                tnf,
                payload_len: record.payload.len(),
            },
        };
        Ok(description)
    }
}

impl fmt::Display for RecordDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text {
                language_code,
                text,
            } => write!(f, "Well known Text [{}] {}", language_code, text),
            Self::Uri(uri) => write!(f, "Well known Uri {}", uri),
            Self::Mime { mime_type, payload } => {
                write!(f, "Mime Media {}: {}", mime_type, payload)
            }
            Self::External {
                record_type,
                payload,
            } => write!(f, "External type {}: {}", record_type, payload),
            Self::Other { tnf, payload_len } => {
                write!(f, "{:?} record, {} payload bytes", tnf, payload_len)
            }
        }
    }
}

/// One line per record: `rec: <index> <description>`. A record whose
/// payload does not decode is listed as `rec: <index> malformed: <error>`.
pub fn describe_records(records: &[NdefRecord]) -> String {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| match RecordDescription::from_record(record) {
            Ok(description) => format!("rec: {} {}", i, description),
            Err(e) => {
                warn!("record {} not described: {}", i, e);
                format!("rec: {} malformed: {}", i, e)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
