//! Field rules and per-step aggregation.

mod message;
mod policy;
mod rules;
mod step_validator;

pub use message::ErrorMessage;
pub use policy::{ValidationPolicy, DEFAULT_EXPIRY_YEAR_HORIZON, DEFAULT_POSTCODE_LENGTH};
pub use rules::{is_required, validate};
pub use step_validator::{StepReport, StepValidator};
