//! Turn a discovery event into log lines.
//!
//! Pure functions, no I/O: the manager owns appending the result to the log
//! and telling the frontend to scroll.

use taplog_nfc::{
    message::NdefMessage,
    record::{NdefRecord, RecordContent},
};
use tracing::debug;

use crate::{discovery::DiscoveryEvent, log::LogEntry};

/// Render one discovery event.
///
/// Non NDEF events render to nothing. An NDEF event with no messages renders
/// a single zero count line. Otherwise each message yields a header line
/// followed by one line per record, in delivered order.
pub fn render_event(event: &DiscoveryEvent) -> Vec<LogEntry> {
    if !event.is_ndef() {
        debug!("ignoring discovery event with action {}", event.action);
        return Vec::new();
    }

    if event.messages.is_empty() {
        return vec![LogEntry::new("Messages", "0")];
    }

    event.messages.iter().flat_map(render_message).collect()
}

fn render_message(message: &NdefMessage) -> Vec<LogEntry> {
    let mut entries = Vec::with_capacity(message.record_count() + 1);
    entries.push(LogEntry::new("Message", message.description()));
    entries.extend(message.records.iter().map(render_record));

    entries
}

/// URI decoding is attempted first; this ordering is a fixed contract, not a
/// heuristic. The raw fallback is total, so rendering a record cannot fail.
fn render_record(record: &NdefRecord) -> LogEntry {
    match record.content() {
        RecordContent::Uri(uri) => LogEntry::new("URI", uri),
        RecordContent::Payload(payload) => LogEntry::new("Contents", format_bytes(&payload)),
    }
}

/// Fixed byte list form: decimal bytes, `", "` separated, in square brackets.
/// The empty payload renders as `[]`.
pub fn format_bytes(bytes: &[u8]) -> String {
    let inner = bytes.iter().map(|byte| byte.to_string()).collect::<Vec<String>>().join(", ");
    format!("[{inner}]")
}
