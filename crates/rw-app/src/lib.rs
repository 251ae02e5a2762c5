//! Application layer for the registration wizard.
//!
//! Use cases drive the domain state machine in `rw-core` and call out through
//! its ports. No adapter is referenced here; wiring happens in the binary.

pub mod usecases;

pub use usecases::{WizardContext, WizardError, WizardOrchestrator};
