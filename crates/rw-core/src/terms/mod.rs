//! Terms-and-conditions gate.

use serde::{Deserialize, Serialize};

use crate::validation::ErrorMessage;

pub const NOT_READ_MESSAGE: &str =
    "You must first read all the terms and conditions before submitting";
pub const NOT_AGREED_MESSAGE: &str =
    "You must agree to these terms and conditions before submitting";

/// Scroll and agreement flags for the terms step.
///
/// Both start false and only go back to false when the session restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsState {
    pub has_scrolled_to_end: bool,
    pub has_agreed: bool,
}

impl TermsState {
    /// Latches the scroll observation; scrolling back up does not undo it.
    pub fn mark_scrolled_to_end(&mut self) {
        self.has_scrolled_to_end = true;
    }

    pub fn set_agreed(&mut self, agreed: bool) {
        self.has_agreed = agreed;
    }
}

/// Outcome of a submit attempt against the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermsVerdict {
    NotRead,
    NotAgreed,
    Accepted,
}

impl TermsVerdict {
    pub fn message(&self) -> Option<ErrorMessage> {
        match self {
            TermsVerdict::NotRead => Some(ErrorMessage::new(NOT_READ_MESSAGE)),
            TermsVerdict::NotAgreed => Some(ErrorMessage::new(NOT_AGREED_MESSAGE)),
            TermsVerdict::Accepted => None,
        }
    }
}

pub struct TermsGate;

impl TermsGate {
    /// Scroll completion is checked before agreement.
    pub fn evaluate(state: &TermsState) -> TermsVerdict {
        if !state.has_scrolled_to_end {
            TermsVerdict::NotRead
        } else if !state.has_agreed {
            TermsVerdict::NotAgreed
        } else {
            TermsVerdict::Accepted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unread_terms_win_over_missing_agreement() {
        let state = TermsState {
            has_scrolled_to_end: false,
            has_agreed: true,
        };
        assert_eq!(TermsGate::evaluate(&state), TermsVerdict::NotRead);
        assert_eq!(
            TermsGate::evaluate(&TermsState::default()).message(),
            Some(ErrorMessage::new(NOT_READ_MESSAGE))
        );
    }

    #[test]
    fn scrolled_but_not_agreed() {
        let mut state = TermsState::default();
        state.mark_scrolled_to_end();
        assert_eq!(TermsGate::evaluate(&state), TermsVerdict::NotAgreed);
        assert_eq!(
            TermsGate::evaluate(&state).message().unwrap().as_str(),
            NOT_AGREED_MESSAGE
        );
    }

    #[test]
    fn scrolled_and_agreed_is_accepted() {
        let mut state = TermsState::default();
        state.mark_scrolled_to_end();
        state.set_agreed(true);
        assert_eq!(TermsGate::evaluate(&state), TermsVerdict::Accepted);
        assert_eq!(TermsGate::evaluate(&state).message(), None);

        state.set_agreed(false);
        assert_eq!(TermsGate::evaluate(&state), TermsVerdict::NotAgreed);
        assert!(state.has_scrolled_to_end);
    }
}
