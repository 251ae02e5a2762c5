use std::collections::BTreeMap;

use serde::Serialize;

use crate::fields::FieldId;
use crate::terms::TermsGate;
use crate::wizard::{WizardSession, WizardStep};

use super::{rules, ErrorMessage, ValidationPolicy};

pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";

/// Errors found on one step, keyed by field in render order.
///
/// An empty report means the step passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StepReport {
    errors: BTreeMap<FieldId, Vec<ErrorMessage>>,
}

impl StepReport {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push(&mut self, field: FieldId, message: ErrorMessage) {
        self.errors.entry(field).or_default().push(message);
    }

    pub fn get(&self, field: FieldId) -> &[ErrorMessage] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.errors.keys().copied()
    }

    /// All messages flattened in field order.
    pub fn messages(&self) -> impl Iterator<Item = &ErrorMessage> {
        self.errors.values().flatten()
    }

    pub fn into_errors(self) -> BTreeMap<FieldId, Vec<ErrorMessage>> {
        self.errors
    }
}

pub struct StepValidator;

impl StepValidator {
    /// Validates every field of `step` against the current session values.
    ///
    /// The email availability lookup is not part of this pass; it only runs
    /// once this report comes back empty.
    pub fn validate_step(
        step: WizardStep,
        session: &WizardSession,
        policy: &ValidationPolicy,
    ) -> StepReport {
        let mut report = StepReport::default();

        for field in FieldId::for_step(step) {
            if let Some(message) = rules::validate(field, session.value(field), policy) {
                report.push(field, message);
            }
        }

        match step {
            WizardStep::Email => {
                let password = session.value(FieldId::Password);
                let confirm = session.value(FieldId::ConfirmPassword);
                if !password.trim().is_empty()
                    && !confirm.trim().is_empty()
                    && password != confirm
                {
                    report.push(
                        FieldId::ConfirmPassword,
                        ErrorMessage::new(PASSWORD_MISMATCH_MESSAGE),
                    );
                }
            }
            WizardStep::Terms => {
                if let Some(message) = TermsGate::evaluate(session.terms()).message() {
                    report.push(FieldId::AgreedToTerms, message);
                }
            }
            WizardStep::Contact | WizardStep::Payment | WizardStep::Complete => {}
        }

        report
    }
}
