//! Wizard use cases.
//!
//! This module exposes the wizard orchestrator and the registry-backed use
//! cases it drives.

mod check_email_availability;
mod context;
pub mod orchestrator;
mod register_account;

pub use check_email_availability::CheckEmailAvailability;
pub use context::WizardContext;
pub use orchestrator::{WizardError, WizardOrchestrator};
pub use register_account::RegisterAccount;
