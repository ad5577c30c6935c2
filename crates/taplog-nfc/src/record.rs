use crate::{tnf::TypeNameFormat, uri};

/// A single NDEF record as the platform delivers it, wire framing already
/// consumed. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, uniffi::Record)]
pub struct NdefRecord {
    pub type_name_format: TypeNameFormat,
    pub type_: Vec<u8>,
    pub id: Option<Vec<u8>>,
    pub payload: Vec<u8>,
}

/// What a record renders as: a decoded URI, or the raw payload.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum RecordContent {
    Uri(String),
    Payload(Vec<u8>),
}

impl NdefRecord {
    /// Classify the record, trying URI decoding first and falling back to the
    /// raw payload. The fallback is total, every record classifies as exactly
    /// one of the two variants.
    pub fn content(&self) -> RecordContent {
        match uri::decode(self) {
            Some(uri) => RecordContent::Uri(uri),
            None => RecordContent::Payload(self.payload.clone()),
        }
    }
}

// only used for uniffi
mod ffi {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, uniffi::Object)]
    pub struct NdefRecordReader {
        record: NdefRecord,
    }

    #[uniffi::export]
    impl NdefRecordReader {
        #[uniffi::constructor]
        pub fn new(record: NdefRecord) -> Self {
            Self { record }
        }

        pub fn type_(&self) -> Option<String> {
            String::from_utf8(self.record.type_.clone()).ok()
        }

        pub fn uri(&self) -> Option<String> {
            uri::decode(&self.record)
        }

        pub fn content(&self) -> RecordContent {
            self.record.content()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_record_classifies_as_uri() {
        let mut payload = vec![0x04];
        payload.extend_from_slice(b"example.com");

        let record = NdefRecord {
            type_name_format: TypeNameFormat::WellKnown,
            type_: b"U".to_vec(),
            id: None,
            payload,
        };

        assert_eq!(
            record.content(),
            RecordContent::Uri("https://example.com".to_string())
        );
    }

    #[test]
    fn test_opaque_record_classifies_as_payload() {
        let record = NdefRecord {
            type_name_format: TypeNameFormat::Mime,
            type_: b"application/octet-stream".to_vec(),
            id: None,
            payload: vec![0x01, 0x02],
        };

        assert_eq!(record.content(), RecordContent::Payload(vec![0x01, 0x02]));
    }

    #[test]
    fn test_classification_is_never_both_nor_neither() {
        // a well known U record that fails URI decoding still classifies
        let record = NdefRecord {
            type_name_format: TypeNameFormat::WellKnown,
            type_: b"U".to_vec(),
            id: None,
            payload: Vec::new(),
        };

        assert_eq!(record.content(), RecordContent::Payload(Vec::new()));
    }
}
