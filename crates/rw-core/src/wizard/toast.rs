use serde::{Deserialize, Serialize};

pub const EMAIL_AVAILABLE_MESSAGE: &str = "Email address is available for registration";
pub const EMAIL_ALREADY_REGISTERED_MESSAGE: &str = "Email address is already registered";
pub const EMAIL_CHECK_FAILED_MESSAGE: &str =
    "Unable to check email availability, please try again";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Unable to complete registration, please try again";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient, session-wide status message.
///
/// Cleared by the next user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn email_available() -> Self {
        Self::success(EMAIL_AVAILABLE_MESSAGE)
    }

    pub fn email_already_registered() -> Self {
        Self::error(EMAIL_ALREADY_REGISTERED_MESSAGE)
    }

    pub fn email_check_failed() -> Self {
        Self::error(EMAIL_CHECK_FAILED_MESSAGE)
    }

    pub fn registration_failed() -> Self {
        Self::error(REGISTRATION_FAILED_MESSAGE)
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}
