//! Port interfaces for the application layer
//!
//! Ports define the contract between the wizard use cases and the
//! infrastructure that backs them. Adapters live in `rw-infra` (registry,
//! clock) and in the bootstrap layer (event emission).

mod account_registry;
mod clock;
mod wizard_event_port;

pub use account_registry::AccountRegistryPort;
pub use clock::{current_year, ClockPort};
pub use wizard_event_port::WizardEventPort;
