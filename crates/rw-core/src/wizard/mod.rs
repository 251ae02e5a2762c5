//! Wizard domain module.
//!
//! Session data, the pure step state machine, and the signals exposed to the
//! presentation layer.

mod account;
mod session;
mod snapshot;
pub mod state_machine;
mod step;
mod toast;

pub use account::{preferred_full_name, ContactInfo, PaymentInfo, RegisteredAccount};
pub use session::WizardSession;
pub use snapshot::{StepIndicators, WizardSnapshot};
pub use state_machine::{WizardAction, WizardEvent, WizardStateMachine};
pub use step::{UnknownWizardStep, WizardStep};
pub use toast::{
    Toast, ToastKind, EMAIL_ALREADY_REGISTERED_MESSAGE, EMAIL_AVAILABLE_MESSAGE,
    EMAIL_CHECK_FAILED_MESSAGE, REGISTRATION_FAILED_MESSAGE,
};
