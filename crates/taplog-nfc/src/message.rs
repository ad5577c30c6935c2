use crate::record::NdefRecord;

/// An NDEF message: the ordered records found on one tag. Record order
/// reflects the physical tag encoding order and is preserved end to end.
#[derive(Debug, Clone, PartialEq, Eq, Hash, uniffi::Record)]
pub struct NdefMessage {
    pub records: Vec<NdefRecord>,
}

impl NdefMessage {
    pub fn new(records: Vec<NdefRecord>) -> Self {
        Self { records }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Generic one-line description, used for the rendered header line.
    pub fn description(&self) -> String {
        match self.record_count() {
            1 => "NDEF message with 1 record".to_string(),
            n => format!("NDEF message with {n} records"),
        }
    }
}

#[uniffi::export]
fn ndef_message_description(message: NdefMessage) -> String {
    message.description()
}
