//! Discovery notifications the platform hands to the screen.

use taplog_nfc::message::NdefMessage;

/// Platform intent action behind a discovery notification.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, strum::Display, uniffi::Enum)]
pub enum DiscoveryAction {
    NdefDiscovered,
    TechDiscovered,
    TagDiscovered,
    Unknown,
}

/// One tag tap as delivered by the platform, either as the screen's startup
/// payload or as a live callback. Ephemeral, handled once and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, uniffi::Record)]
pub struct DiscoveryEvent {
    pub action: DiscoveryAction,
    pub messages: Vec<NdefMessage>,
}

impl DiscoveryEvent {
    pub fn ndef(messages: Vec<NdefMessage>) -> Self {
        Self { action: DiscoveryAction::NdefDiscovered, messages }
    }

    pub fn is_ndef(&self) -> bool {
        self.action == DiscoveryAction::NdefDiscovered
    }
}
