//! # rw-core
//!
//! Core domain models and validation rules for the registration wizard.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod config;
pub mod fields;
pub mod ids;
pub mod payment;
pub mod ports;
pub mod registry;
pub mod terms;
pub mod validation;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use config::WizardConfig;
pub use fields::{CardType, FieldId};
pub use ids::SessionId;
pub use registry::Availability;
pub use terms::{TermsGate, TermsState};
pub use validation::{ErrorMessage, StepReport, StepValidator, ValidationPolicy};
pub use wizard::{
    Toast, ToastKind, WizardAction, WizardEvent, WizardSession, WizardSnapshot, WizardStateMachine,
    WizardStep,
};
