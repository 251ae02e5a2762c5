pub mod bootstrap;
pub mod script;

pub use bootstrap::{init_tracing_subscriber, load_config, wire_orchestrator, WizardWiring};
pub use script::{load_script, replay, Script, ScriptOutcome, ScriptStep};
