use std::collections::BTreeMap;

use serde::Serialize;

use crate::fields::FieldId;
use crate::ids::SessionId;
use crate::terms::TermsState;
use crate::validation::ErrorMessage;

use super::{Toast, WizardStep};

/// Filled flags for the progress indicator, one per non-terminal step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StepIndicators {
    pub email: bool,
    pub contact: bool,
    pub payment: bool,
    pub terms: bool,
}

impl StepIndicators {
    pub fn fill(&mut self, step: WizardStep) {
        match step {
            WizardStep::Email => self.email = true,
            WizardStep::Contact => self.contact = true,
            WizardStep::Payment => self.payment = true,
            WizardStep::Terms => self.terms = true,
            WizardStep::Complete => {}
        }
    }

    /// Unfills `step` and every step after it.
    pub fn clear_from(&mut self, step: WizardStep) {
        self.email &= step > WizardStep::Email;
        self.contact &= step > WizardStep::Contact;
        self.payment &= step > WizardStep::Payment;
        self.terms &= step > WizardStep::Terms;
    }

    pub fn is_filled(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Email => self.email,
            WizardStep::Contact => self.contact,
            WizardStep::Payment => self.payment,
            WizardStep::Terms => self.terms,
            WizardStep::Complete => self.terms,
        }
    }
}

/// Everything the presentation layer renders after a dispatch.
///
/// Field values are not included; the form owns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardSnapshot {
    pub session_id: SessionId,
    pub step: WizardStep,
    pub errors: BTreeMap<FieldId, Vec<ErrorMessage>>,
    pub toast: Option<Toast>,
    pub indicators: StepIndicators,
    pub primary_action_enabled: bool,
    pub advance_in_flight: bool,
    pub preferred_full_name: String,
    pub terms: TermsState,
    pub submitted: bool,
    pub confirmation: Option<String>,
}

impl WizardSnapshot {
    /// First message for `field`, the one rendered inline.
    pub fn error(&self, field: FieldId) -> Option<&str> {
        self.errors
            .get(&field)
            .and_then(|messages| messages.first())
            .map(ErrorMessage::as_str)
    }

    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|messages| !messages.is_empty())
    }
}
