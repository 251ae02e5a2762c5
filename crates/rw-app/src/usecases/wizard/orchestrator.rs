//! Wizard orchestrator.
//!
//! This module coordinates the wizard state machine, step validation and the
//! registry round-trips.

use std::sync::Arc;

use rw_core::config::ValidationConfig;
use rw_core::ports::{current_year, AccountRegistryPort, ClockPort, WizardEventPort};
use rw_core::{
    Availability, CardType, FieldId, StepValidator, ValidationPolicy, WizardAction, WizardEvent,
    WizardSession, WizardSnapshot, WizardStateMachine, WizardStep,
};
use tracing::{debug, error, info, info_span, warn, Instrument};

use crate::usecases::wizard::context::WizardContext;
use crate::usecases::wizard::{CheckEmailAvailability, RegisterAccount};

/// Errors produced by the wizard orchestrator.
///
/// Validation failures are not errors; they come back in the snapshot. Only a
/// collaborator failing ends up here, after the session has been updated to
/// show it.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("email availability check failed: {0}")]
    EmailCheck(#[source] anyhow::Error),
    #[error("account registration failed: {0}")]
    Registration(#[source] anyhow::Error),
}

/// Requests that go through validation and the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WizardCommand {
    Advance,
    Submit,
    Back,
    Restart,
}

/// Orchestrator that drives the wizard session and its side effects.
pub struct WizardOrchestrator {
    context: Arc<WizardContext>,
    validation: ValidationConfig,
    clock: Arc<dyn ClockPort>,
    check_email: Arc<CheckEmailAvailability>,
    register_account: Arc<RegisterAccount>,
    event_port: Arc<dyn WizardEventPort>,
}

impl WizardOrchestrator {
    pub fn new(
        validation: ValidationConfig,
        clock: Arc<dyn ClockPort>,
        check_email: Arc<CheckEmailAvailability>,
        register_account: Arc<RegisterAccount>,
        event_port: Arc<dyn WizardEventPort>,
    ) -> Self {
        Self {
            context: WizardContext::default().arc(),
            validation,
            clock,
            check_email,
            register_account,
            event_port,
        }
    }

    /// Builds both registry use cases over the same port.
    pub fn from_ports(
        validation: ValidationConfig,
        clock: Arc<dyn ClockPort>,
        registry: Arc<dyn AccountRegistryPort>,
        event_port: Arc<dyn WizardEventPort>,
    ) -> Self {
        Self::new(
            validation,
            clock,
            Arc::new(CheckEmailAvailability::new(registry.clone())),
            Arc::new(RegisterAccount::new(registry)),
            event_port,
        )
    }

    // ===== User input =====

    pub async fn set_field(&self, field: FieldId, value: impl Into<String>) -> WizardSnapshot {
        let value = value.into();
        self.apply_input(field.as_str(), |session, policy| {
            session.set_field(field, &value, policy)
        })
        .await
    }

    pub async fn select_card_type(&self, card_type: CardType) -> WizardSnapshot {
        self.apply_input(FieldId::CardType.as_str(), |session, _| {
            session.select_card_type(card_type)
        })
        .await
    }

    pub async fn scroll_terms_to_end(&self) -> WizardSnapshot {
        self.apply_input("terms_scroll", |session, _| session.scroll_terms_to_end())
            .await
    }

    pub async fn set_agreed(&self, agreed: bool) -> WizardSnapshot {
        self.apply_input(FieldId::AgreedToTerms.as_str(), |session, _| {
            session.set_agreed(agreed)
        })
        .await
    }

    // ===== Navigation =====

    pub async fn request_advance(&self) -> Result<WizardSnapshot, WizardError> {
        self.dispatch(WizardCommand::Advance).await
    }

    pub async fn request_submit(&self) -> Result<WizardSnapshot, WizardError> {
        self.dispatch(WizardCommand::Submit).await
    }

    pub async fn request_back(&self) -> Result<WizardSnapshot, WizardError> {
        self.dispatch(WizardCommand::Back).await
    }

    pub async fn restart(&self) -> Result<WizardSnapshot, WizardError> {
        self.dispatch(WizardCommand::Restart).await
    }

    pub async fn snapshot(&self) -> WizardSnapshot {
        self.context.snapshot().await
    }

    fn policy(&self) -> ValidationPolicy {
        ValidationPolicy::new(&self.validation, current_year(self.clock.as_ref()))
    }

    async fn apply_input<F>(&self, input: &'static str, apply: F) -> WizardSnapshot
    where
        F: FnOnce(&mut WizardSession, &ValidationPolicy) -> bool,
    {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let mut session = self.context.get_session().await;

        if !apply(&mut session, &self.policy()) {
            warn!(input, step = %session.step(), "wizard input ignored");
            return session.snapshot();
        }

        debug!(input, step = %session.step(), "wizard input applied");
        self.commit_and_emit(session).await
    }

    async fn dispatch(&self, command: WizardCommand) -> Result<WizardSnapshot, WizardError> {
        // Held across the registry call so a result is applied before any
        // later input or validation sees the session.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.wizard_orchestrator.dispatch", command = ?command);
        async {
            let mut session = self.context.get_session().await;
            let Some(event) = self.build_event(&mut session, command) else {
                return Ok(session.snapshot());
            };

            let mut pending_events = vec![event];
            let mut failure = None;

            while let Some(event) = pending_events.pop() {
                let from = session.step();
                let event_name = format!("{:?}", event);
                let (next, actions) = WizardStateMachine::transition(from, event);
                info!(from = %from, to = %next, event = %event_name, "wizard step transition");
                let follow_up_events = self
                    .execute_actions(&mut session, actions, &mut failure)
                    .await;
                session.set_step(next);
                pending_events.extend(follow_up_events);
            }

            let snapshot = self.commit_and_emit(session).await;
            match failure {
                Some(err) => Err(err),
                None => Ok(snapshot),
            }
        }
        .instrument(span)
        .await
    }

    /// Turns a command into a state machine event, validating the active step
    /// where the command needs a verdict. `None` means the command is ignored.
    fn build_event(
        &self,
        session: &mut WizardSession,
        command: WizardCommand,
    ) -> Option<WizardEvent> {
        let step = session.step();
        match command {
            WizardCommand::Back => Some(WizardEvent::BackRequested),
            WizardCommand::Restart => Some(WizardEvent::Restart),
            WizardCommand::Advance | WizardCommand::Submit => {
                if session.is_complete() {
                    warn!(?command, "wizard already complete, request ignored");
                    return None;
                }
                if !session.primary_action_enabled() || session.advance_in_flight() {
                    warn!(?command, step = %step, "primary action disabled, request ignored");
                    return None;
                }
                if command == WizardCommand::Submit && step != WizardStep::Terms {
                    warn!(step = %step, "submit requested outside the terms step, ignored");
                    return None;
                }

                let report = StepValidator::validate_step(step, session, &self.policy());
                let passed = report.passed();
                if !passed {
                    let failed: Vec<FieldId> = report.fields().collect();
                    debug!(step = %step, fields = ?failed, "step validation failed");
                }
                session.apply_report(step, report);

                Some(match command {
                    WizardCommand::Submit => WizardEvent::SubmitRequested { passed },
                    _ => WizardEvent::AdvanceRequested { passed },
                })
            }
        }
    }

    async fn execute_actions(
        &self,
        session: &mut WizardSession,
        actions: Vec<WizardAction>,
        failure: &mut Option<WizardError>,
    ) -> Vec<WizardEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "wizard executing action");
            match action {
                WizardAction::DisablePrimaryAction => session.begin_request(),
                WizardAction::EnablePrimaryAction => session.enable_primary_action(),
                WizardAction::CheckEmailAvailability => {
                    self.publish(session).await;
                    let email = session.email().to_string();
                    let event = match self.check_email.execute(&email).await {
                        Ok(Availability::Available) => WizardEvent::EmailAvailable,
                        Ok(Availability::AlreadyRegistered) => WizardEvent::EmailAlreadyRegistered,
                        Err(err) => {
                            error!(
                                action = "CheckEmailAvailability",
                                error = %err,
                                "wizard email availability check failed"
                            );
                            *failure = Some(WizardError::EmailCheck(err));
                            WizardEvent::EmailCheckFailed
                        }
                    };
                    session.finish_request();
                    follow_up_events.push(event);
                }
                WizardAction::FillIndicator(step) => session.fill_indicator(step),
                WizardAction::ClearIndicators(step) => session.clear_indicators_from(step),
                WizardAction::ShowToast(toast) => session.show_toast(toast),
                WizardAction::RegisterAccount => {
                    self.publish(session).await;
                    let account = session.account();
                    let event = match self.register_account.execute(&account).await {
                        Ok(()) => WizardEvent::AccountRegistered,
                        Err(err) => {
                            error!(
                                action = "RegisterAccount",
                                error = %err,
                                "wizard account registration failed"
                            );
                            *failure = Some(WizardError::Registration(err));
                            WizardEvent::RegistrationFailed
                        }
                    };
                    session.finish_request();
                    follow_up_events.push(event);
                }
                WizardAction::ShowConfirmation => session.confirm(),
                WizardAction::ResetSession => *session = WizardSession::new(),
            }
        }

        follow_up_events
    }

    /// Makes the in-flight state observable before awaiting a collaborator.
    async fn publish(&self, session: &WizardSession) {
        self.context.set_session(session.clone()).await;
        self.event_port
            .emit_wizard_state_changed(session.snapshot())
            .await;
    }

    async fn commit_and_emit(&self, session: WizardSession) -> WizardSnapshot {
        let snapshot = session.snapshot();
        self.context.set_session(session).await;
        self.event_port
            .emit_wizard_state_changed(snapshot.clone())
            .await;
        snapshot
    }
}
