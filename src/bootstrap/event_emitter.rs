use async_trait::async_trait;
use rw_core::ports::WizardEventPort;
use rw_core::WizardSnapshot;
use tracing::info;

/// Event port that reports every snapshot as a structured log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingWizardEventPort;

#[async_trait]
impl WizardEventPort for TracingWizardEventPort {
    async fn emit_wizard_state_changed(&self, snapshot: WizardSnapshot) {
        let error_fields = snapshot.errors.len();
        info!(
            target: "wizard.events",
            session_id = %snapshot.session_id,
            step = %snapshot.step,
            error_fields,
            primary_action_enabled = snapshot.primary_action_enabled,
            advance_in_flight = snapshot.advance_in_flight,
            toast = ?snapshot.toast.as_ref().map(|t| t.message.as_str()),
            submitted = snapshot.submitted,
            "wizard state changed"
        );
    }
}
