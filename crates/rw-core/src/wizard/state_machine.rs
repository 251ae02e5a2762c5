//! Wizard state machine.
//!
//! Defines a pure state transition function for the registration flow. Step
//! validation happens before an event is built; the machine only sees the
//! verdict.

use serde::{Deserialize, Serialize};

use super::{Toast, WizardStep};

/// Events that drive the wizard.
///
/// 驱动注册向导的事件。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardEvent {
    /// Primary action pressed on a non-terminal step.
    ///
    /// 用户点击下一步。
    AdvanceRequested { passed: bool },
    /// Registry reported the email as free.
    ///
    /// 邮箱可注册（注册表回调）。
    EmailAvailable,
    /// Registry reported the email as taken.
    ///
    /// 邮箱已被注册（注册表回调）。
    EmailAlreadyRegistered,
    /// Registry could not be reached.
    ///
    /// 注册表查询失败。
    EmailCheckFailed,
    /// Submit pressed on the terms step.
    ///
    /// 用户提交条款页。
    SubmitRequested { passed: bool },
    /// Registry accepted the new account.
    ///
    /// 账户注册成功。
    AccountRegistered,
    /// Registry rejected or failed to record the account.
    ///
    /// 账户注册失败。
    RegistrationFailed,
    /// Navigate back.
    ///
    /// 返回上一步。
    BackRequested,
    /// Discard the session and start over.
    ///
    /// 重新开始。
    Restart,
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardAction {
    /// Disable the primary action and mark a request in flight.
    DisablePrimaryAction,
    /// Re-enable the primary action for the step now shown.
    EnablePrimaryAction,
    /// Ask the account registry whether the entered email is free.
    CheckEmailAvailability,
    /// Mark a step's progress indicator as completed.
    FillIndicator(WizardStep),
    /// Unfill the indicators of a step and every step after it.
    ClearIndicators(WizardStep),
    /// Show a transient message.
    ShowToast(Toast),
    /// Record the account with the registry.
    RegisterAccount,
    /// Publish the registration confirmation.
    ShowConfirmation,
    /// Replace the session with a fresh one.
    ResetSession,
}

/// Pure wizard state machine.
///
/// 纯状态机：不包含副作用。
pub struct WizardStateMachine;

impl WizardStateMachine {
    pub fn transition(step: WizardStep, event: WizardEvent) -> (WizardStep, Vec<WizardAction>) {
        match (step, event) {
            (_, WizardEvent::Restart) => (WizardStep::Email, vec![WizardAction::ResetSession]),

            // ===== Email =====
            (WizardStep::Email, WizardEvent::AdvanceRequested { passed: true }) => (
                WizardStep::Email,
                vec![
                    WizardAction::DisablePrimaryAction,
                    WizardAction::CheckEmailAvailability,
                ],
            ),
            (WizardStep::Email, WizardEvent::EmailAvailable) => (
                WizardStep::Contact,
                vec![
                    WizardAction::ShowToast(Toast::email_available()),
                    WizardAction::FillIndicator(WizardStep::Email),
                    WizardAction::EnablePrimaryAction,
                ],
            ),
            (WizardStep::Email, WizardEvent::EmailAlreadyRegistered) => (
                WizardStep::Email,
                vec![WizardAction::ShowToast(Toast::email_already_registered())],
            ),
            (WizardStep::Email, WizardEvent::EmailCheckFailed) => (
                WizardStep::Email,
                vec![WizardAction::ShowToast(Toast::email_check_failed())],
            ),

            // ===== Contact / Payment =====
            (WizardStep::Contact, WizardEvent::AdvanceRequested { passed: true }) => (
                WizardStep::Payment,
                vec![WizardAction::FillIndicator(WizardStep::Contact)],
            ),
            (WizardStep::Payment, WizardEvent::AdvanceRequested { passed: true }) => (
                WizardStep::Terms,
                vec![WizardAction::FillIndicator(WizardStep::Payment)],
            ),

            // ===== Terms =====
            (
                WizardStep::Terms,
                WizardEvent::SubmitRequested { passed: true }
                | WizardEvent::AdvanceRequested { passed: true },
            ) => (
                WizardStep::Terms,
                vec![
                    WizardAction::DisablePrimaryAction,
                    WizardAction::RegisterAccount,
                ],
            ),
            (WizardStep::Terms, WizardEvent::AccountRegistered) => (
                WizardStep::Complete,
                vec![
                    WizardAction::FillIndicator(WizardStep::Terms),
                    WizardAction::ShowConfirmation,
                ],
            ),
            (WizardStep::Terms, WizardEvent::RegistrationFailed) => (
                WizardStep::Terms,
                vec![WizardAction::ShowToast(Toast::registration_failed())],
            ),

            // ===== Back =====
            (step, WizardEvent::BackRequested) => match step.previous() {
                Some(previous) => (
                    previous,
                    vec![
                        WizardAction::ClearIndicators(previous),
                        WizardAction::EnablePrimaryAction,
                    ],
                ),
                None => (step, Vec::new()),
            },

            // Failed verdicts and anything out of place leave the step unchanged.
            (step, _event) => (step, Vec::new()),
        }
    }
}
