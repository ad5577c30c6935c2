pub mod discovery;
pub mod log;
pub mod manager;
pub mod registrar;
pub mod render;

pub(crate) mod logging;

uniffi::setup_scaffolding!();
