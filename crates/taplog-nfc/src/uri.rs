use url::Url;

use crate::{record::NdefRecord, tnf::TypeNameFormat};

/// NFC Forum URI record abbreviation table, indexed by the payload's first byte.
const URI_PREFIXES: [&str; 36] = [
    "",
    "http://www.",
    "https://www.",
    "http://",
    "https://",
    "tel:",
    "mailto:",
    "ftp://anonymous:anonymous@",
    "ftp://ftp.",
    "ftps://",
    "sftp://",
    "smb://",
    "nfs://",
    "ftp://",
    "dav://",
    "news:",
    "telnet://",
    "imap:",
    "rtsp://",
    "urn:",
    "pop:",
    "sip:",
    "sips:",
    "tftp:",
    "btspp://",
    "btl2cap://",
    "btgoep://",
    "tcpobex://",
    "irdaobex://",
    "file://",
    "urn:epc:id:",
    "urn:epc:tag:",
    "urn:epc:pat:",
    "urn:epc:raw:",
    "urn:epc:",
    "urn:nfc:",
];

/// Try decoding a record as a URI.
///
/// Handles Well Known `U` records (prefix byte + remainder) and Absolute URI
/// records (the whole payload is the URI). The decoded string only counts if it
/// parses as an absolute URL; anything else returns `None` and the caller falls
/// back to rendering the raw payload.
pub fn decode(record: &NdefRecord) -> Option<String> {
    let candidate = match record.type_name_format {
        TypeNameFormat::WellKnown if record.type_.as_slice() == b"U" => {
            expand_well_known(&record.payload)?
        }

        TypeNameFormat::AbsoluteUri => String::from_utf8(record.payload.clone()).ok()?,

        _ => return None,
    };

    // well-formedness gate only, the original spelling is what gets rendered
    Url::parse(&candidate).ok()?;

    Some(candidate)
}

fn expand_well_known(payload: &[u8]) -> Option<String> {
    let (&code, rest) = payload.split_first()?;
    let prefix = URI_PREFIXES.get(code as usize)?;
    let rest = std::str::from_utf8(rest).ok()?;

    Some(format!("{prefix}{rest}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri_record(payload: Vec<u8>) -> NdefRecord {
        NdefRecord {
            type_name_format: TypeNameFormat::WellKnown,
            type_: b"U".to_vec(),
            id: None,
            payload,
        }
    }

    #[test]
    fn test_expands_https_prefix() {
        let mut payload = vec![0x04];
        payload.extend_from_slice(b"example.com");

        let record = uri_record(payload);
        assert_eq!(decode(&record), Some("https://example.com".to_string()));
    }

    #[test]
    fn test_no_abbreviation_code_keeps_payload() {
        let mut payload = vec![0x00];
        payload.extend_from_slice(b"https://example.com/path?q=1");

        let record = uri_record(payload);
        assert_eq!(
            decode(&record),
            Some("https://example.com/path?q=1".to_string())
        );
    }

    #[test]
    fn test_tel_prefix() {
        let mut payload = vec![0x05];
        payload.extend_from_slice(b"+14085551212");

        let record = uri_record(payload);
        assert_eq!(decode(&record), Some("tel:+14085551212".to_string()));
    }

    #[test]
    fn test_absolute_uri_record() {
        let record = NdefRecord {
            type_name_format: TypeNameFormat::AbsoluteUri,
            type_: Vec::new(),
            id: None,
            payload: b"https://example.com".to_vec(),
        };

        assert_eq!(decode(&record), Some("https://example.com".to_string()));
    }

    #[test]
    fn test_empty_payload_is_not_a_uri() {
        let record = uri_record(Vec::new());
        assert_eq!(decode(&record), None);
    }

    #[test]
    fn test_prefix_code_out_of_table() {
        let mut payload = vec![36];
        payload.extend_from_slice(b"example.com");

        let record = uri_record(payload);
        assert_eq!(decode(&record), None);
    }

    #[test]
    fn test_remainder_must_be_utf8() {
        let record = uri_record(vec![0x04, 0xff, 0xfe]);
        assert_eq!(decode(&record), None);
    }

    #[test]
    fn test_relative_candidate_fails_validation() {
        // code 0 with a bare host, decodes to "example.com" which is not absolute
        let mut payload = vec![0x00];
        payload.extend_from_slice(b"example.com");

        let record = uri_record(payload);
        assert_eq!(decode(&record), None);
    }

    #[test]
    fn test_text_record_is_not_a_uri() {
        let record = NdefRecord {
            type_name_format: TypeNameFormat::WellKnown,
            type_: b"T".to_vec(),
            id: None,
            payload: b"\x02enhello".to_vec(),
        };

        assert_eq!(decode(&record), None);
    }

    #[test]
    fn test_mime_record_is_not_a_uri() {
        let record = NdefRecord {
            type_name_format: TypeNameFormat::Mime,
            type_: b"application/json".to_vec(),
            id: None,
            payload: b"https://example.com".to_vec(),
        };

        assert_eq!(decode(&record), None);
    }
}
