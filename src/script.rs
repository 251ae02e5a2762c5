//! Scripted sessions.
//!
//! A script is a TOML list of inputs replayed in order against one
//! orchestrator; each input yields the snapshot the presentation layer would
//! have rendered.
//!
//! ```toml
//! [[steps]]
//! action = "set_field"
//! field = "emailAddress"
//! value = "john@gmail.com"
//!
//! [[steps]]
//! action = "advance"
//! ```

use std::path::Path;

use anyhow::Context;
use rw_app::{WizardError, WizardOrchestrator};
use rw_core::{CardType, FieldId, WizardSnapshot};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    SetField { field: FieldId, value: String },
    SelectCardType { card_type: CardType },
    ScrollTerms,
    SetAgreed { agreed: bool },
    Advance,
    Submit,
    Back,
    Restart,
    Snapshot,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Failed to parse script as TOML")
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptOutcome {
    pub index: usize,
    pub step: ScriptStep,
    pub snapshot: WizardSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn load_script(path: &Path) -> anyhow::Result<Script> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script file: {}", path.display()))?;
    Script::from_toml_str(&content)
        .with_context(|| format!("Invalid script file: {}", path.display()))
}

/// Runs every step, in order. A collaborator failure is recorded on its
/// outcome and the replay carries on with the session as it was left.
pub async fn replay(orchestrator: &WizardOrchestrator, script: &Script) -> Vec<ScriptOutcome> {
    let mut outcomes = Vec::with_capacity(script.steps.len());

    for (index, step) in script.steps.iter().enumerate() {
        let (snapshot, error) = match step {
            ScriptStep::SetField { field, value } => {
                (orchestrator.set_field(*field, value.as_str()).await, None)
            }
            ScriptStep::SelectCardType { card_type } => {
                (orchestrator.select_card_type(*card_type).await, None)
            }
            ScriptStep::ScrollTerms => (orchestrator.scroll_terms_to_end().await, None),
            ScriptStep::SetAgreed { agreed } => (orchestrator.set_agreed(*agreed).await, None),
            ScriptStep::Advance => settle(orchestrator, orchestrator.request_advance().await).await,
            ScriptStep::Submit => settle(orchestrator, orchestrator.request_submit().await).await,
            ScriptStep::Back => settle(orchestrator, orchestrator.request_back().await).await,
            ScriptStep::Restart => settle(orchestrator, orchestrator.restart().await).await,
            ScriptStep::Snapshot => (orchestrator.snapshot().await, None),
        };

        outcomes.push(ScriptOutcome {
            index,
            step: step.clone(),
            snapshot,
            error,
        });
    }

    info!(steps = outcomes.len(), "script replay finished");
    outcomes
}

async fn settle(
    orchestrator: &WizardOrchestrator,
    result: Result<WizardSnapshot, WizardError>,
) -> (WizardSnapshot, Option<String>) {
    match result {
        Ok(snapshot) => (snapshot, None),
        Err(err) => {
            warn!(error = %err, "script step failed");
            (orchestrator.snapshot().await, Some(err.to_string()))
        }
    }
}
