//! The single screen of the app: a scrolling log of scanned tag contents.
//!
//! The host drives the manager with [`ScanScreenAction`]s from its lifecycle
//! callbacks and listens for [`ScanScreenReconcileMessage`]s to keep the view
//! in sync. The cold start intent goes through the same `DiscoveryReceived`
//! action as a live tap; there is no second code path.
//!
//! Expected host wiring, in order: construct (optionally with the saved
//! snapshot), `listen_for_updates`, `set_dispatch_port`, populate the view
//! from `log_snapshot`, then forward lifecycle transitions and discovery
//! events as they happen.

use std::sync::Arc;

use flume::{Receiver, Sender};
use parking_lot::RwLock;
use tap::TapFallible as _;
use tracing::{debug, trace, warn};

use crate::{
    discovery::DiscoveryEvent,
    log::{LogEntry, ScanLog},
    registrar::{DispatchRegistrar, ForegroundDispatchPort, NfcCapability},
    render,
};

/// Saved state slot the host should stash the snapshot under.
pub const SAVED_STATE_KEY: &str = "logText";

#[derive(Debug, Clone, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum ScanScreenAction {
    ScreenVisible,
    ScreenHidden,
    DiscoveryReceived { event: DiscoveryEvent },
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum ScanScreenReconcileMessage {
    /// Append these entries to the log view and scroll to the bottom.
    LogEntriesAppended { entries: Vec<LogEntry> },
}

#[uniffi::export(callback_interface)]
pub trait ScanScreenReconciler: Send + Sync + std::fmt::Debug + 'static {
    /// Tells the frontend to reconcile the view model changes
    fn reconcile(&self, message: ScanScreenReconcileMessage);
}

#[derive(Debug)]
pub struct ScanScreenState {
    pub log: ScanLog,
    pub registrar: DispatchRegistrar,
}

#[derive(Debug, Clone, uniffi::Object)]
pub struct RustScanScreenManager {
    pub state: Arc<RwLock<ScanScreenState>>,
    pub reconciler: Sender<ScanScreenReconcileMessage>,
    pub reconcile_receiver: Arc<Receiver<ScanScreenReconcileMessage>>,
}

#[derive(Debug, Clone, thiserror::Error, uniffi::Error)]
pub enum ScanScreenError {
    #[error("failed to serialize the scan log: {0}")]
    SaveState(String),
}

pub type Error = ScanScreenError;

#[uniffi::export]
impl RustScanScreenManager {
    #[uniffi::constructor(default(saved_state = None))]
    pub fn new(capability: NfcCapability, saved_state: Option<String>) -> Self {
        crate::logging::init();

        let (sender, receiver) = flume::bounded(1000);

        let log = saved_state
            .as_deref()
            .and_then(restore_log)
            .unwrap_or_else(|| startup_log(capability));

        let state = ScanScreenState { log, registrar: DispatchRegistrar::new(capability) };

        Self {
            state: Arc::new(RwLock::new(state)),
            reconciler: sender,
            reconcile_receiver: Arc::new(receiver),
        }
    }

    #[uniffi::method]
    pub fn listen_for_updates(&self, reconciler: Box<dyn ScanScreenReconciler>) {
        let reconcile_receiver = self.reconcile_receiver.clone();

        std::thread::spawn(move || {
            while let Ok(message) = reconcile_receiver.recv() {
                // call the reconcile method on the frontend
                reconciler.reconcile(message);
            }
        });
    }

    #[uniffi::method]
    pub fn set_dispatch_port(&self, port: Box<dyn ForegroundDispatchPort>) {
        self.state.write().registrar.attach_port(port);
    }

    /// Lifecycle transitions and discovery events from the frontend.
    #[uniffi::method]
    pub fn dispatch(&self, action: ScanScreenAction) {
        match action {
            ScanScreenAction::ScreenVisible => {
                debug!("screen visible");
                self.state.write().registrar.activate();
            }

            ScanScreenAction::ScreenHidden => {
                debug!("screen hidden");
                self.state.write().registrar.deactivate();
            }

            ScanScreenAction::DiscoveryReceived { event } => {
                debug!("discovery event received, action: {}", event.action);
                self.handle_discovery(event);
            }
        }
    }

    /// The full log, for populating the view after construct or restore.
    #[uniffi::method]
    pub fn log_snapshot(&self) -> Vec<LogEntry> {
        self.state.read().log.entries().to_vec()
    }

    #[uniffi::method]
    pub fn is_dispatch_active(&self) -> bool {
        self.state.read().registrar.state() == crate::registrar::DispatchState::Active
    }

    /// Serialize the log for the host's saved state slot. Only the rendered
    /// log survives rotation; nothing survives process termination.
    #[uniffi::method]
    pub fn save_instance_state(&self) -> Result<String, Error> {
        serde_json::to_string(&self.state.read().log)
            .map_err(|error| ScanScreenError::SaveState(error.to_string()))
    }

    #[uniffi::method]
    pub fn saved_state_key(&self) -> String {
        SAVED_STATE_KEY.to_string()
    }
}

impl RustScanScreenManager {
    fn handle_discovery(&self, event: DiscoveryEvent) {
        let entries = render::render_event(&event);
        if entries.is_empty() {
            return;
        }

        for entry in &entries {
            trace!(%entry, "appending log entry");
        }

        self.state.write().log.extend(entries.iter().cloned());

        let _ = self
            .reconciler
            .send(ScanScreenReconcileMessage::LogEntriesAppended { entries })
            .tap_err(|error| warn!("failed to queue reconcile message: {error}"));
    }
}

fn restore_log(saved: &str) -> Option<ScanLog> {
    serde_json::from_str(saved)
        .tap_err(|error| warn!("discarding unreadable saved scan log: {error}"))
        .ok()
}

/// A fresh log opens with the capability report, same as the original screen.
fn startup_log(capability: NfcCapability) -> ScanLog {
    let mut log = ScanLog::new();
    log.append(LogEntry::new("NFC supported", capability.supported.to_string()));
    log.append(LogEntry::new("NFC enabled", capability.enabled.to_string()));

    log
}
