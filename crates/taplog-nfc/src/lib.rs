uniffi::setup_scaffolding!();

pub mod message;
pub mod record;
pub mod tnf;
pub mod uri;
