//! Foreground dispatch registration.
//!
//! The platform owns the NFC radio; this module owns the decision of when to
//! hold the foreground dispatch registration. Visibility transitions drive an
//! explicit two state machine, and each transition calls the host port at
//! most once, a strict acquire/release pair.

use tracing::{debug, warn};

/// Host side of foreground dispatch. On Android the implementation wraps
/// `NfcAdapter.enableForegroundDispatch` / `disableForegroundDispatch`, with
/// no intent filter so every NDEF discovery reaches the screen.
#[uniffi::export(callback_interface)]
pub trait ForegroundDispatchPort: Send + Sync + std::fmt::Debug + 'static {
    fn enable_foreground_dispatch(&self);
    fn disable_foreground_dispatch(&self);
}

/// What the host reported about the NFC hardware at startup.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, uniffi::Record)]
pub struct NfcCapability {
    pub supported: bool,
    pub enabled: bool,
}

impl NfcCapability {
    pub fn available(&self) -> bool {
        self.supported && self.enabled
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DispatchState {
    #[default]
    Inactive,
    Active,
}

#[derive(Debug)]
pub struct DispatchRegistrar {
    state: DispatchState,
    capability: NfcCapability,
    port: Option<Box<dyn ForegroundDispatchPort>>,
}

impl DispatchRegistrar {
    pub fn new(capability: NfcCapability) -> Self {
        Self { state: DispatchState::Inactive, capability, port: None }
    }

    pub fn attach_port(&mut self, port: Box<dyn ForegroundDispatchPort>) {
        self.port = Some(port);
    }

    pub fn state(&self) -> DispatchState {
        self.state
    }

    pub fn capability(&self) -> NfcCapability {
        self.capability
    }

    /// Screen became visible: acquire the registration.
    pub fn activate(&mut self) {
        if self.state == DispatchState::Active {
            return;
        }

        self.state = DispatchState::Active;
        debug!("dispatch registrar now {}", self.state);

        if !self.capability.available() {
            debug!("nfc unavailable, registration is a no-op");
            return;
        }

        match &self.port {
            Some(port) => port.enable_foreground_dispatch(),
            None => warn!("no dispatch port attached, cannot enable foreground dispatch"),
        }
    }

    /// Screen became hidden: release the registration. Events arriving after
    /// this point are no longer this screen's concern.
    pub fn deactivate(&mut self) {
        if self.state == DispatchState::Inactive {
            return;
        }

        self.state = DispatchState::Inactive;
        debug!("dispatch registrar now {}", self.state);

        if !self.capability.available() {
            return;
        }

        match &self.port {
            Some(port) => port.disable_foreground_dispatch(),
            None => warn!("no dispatch port attached, cannot disable foreground dispatch"),
        }
    }
}
