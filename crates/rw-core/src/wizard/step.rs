use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Wizard step.
///
/// Steps run in declaration order; `Complete` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    Email,
    Contact,
    Payment,
    Terms,
    Complete,
}

impl WizardStep {
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Email => Some(WizardStep::Contact),
            WizardStep::Contact => Some(WizardStep::Payment),
            WizardStep::Payment => Some(WizardStep::Terms),
            WizardStep::Terms => Some(WizardStep::Complete),
            WizardStep::Complete => None,
        }
    }

    /// Step reached by navigating back; `None` on the first and terminal steps.
    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Contact => Some(WizardStep::Email),
            WizardStep::Payment => Some(WizardStep::Contact),
            WizardStep::Terms => Some(WizardStep::Payment),
            WizardStep::Email | WizardStep::Complete => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardStep::Complete)
    }

    /// Title shown on the progress indicator.
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Email => "Email",
            WizardStep::Contact => "Contact",
            WizardStep::Payment => "Payment",
            WizardStep::Terms => "Terms",
            WizardStep::Complete => "Complete",
        }
    }
}

impl Display for WizardStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown wizard step: {0}")]
pub struct UnknownWizardStep(pub String);

impl FromStr for WizardStep {
    type Err = UnknownWizardStep;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            WizardStep::Email,
            WizardStep::Contact,
            WizardStep::Payment,
            WizardStep::Terms,
            WizardStep::Complete,
        ]
        .into_iter()
        .find(|step| step.title().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| UnknownWizardStep(s.to_string()))
    }
}
