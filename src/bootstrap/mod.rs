pub mod config;
pub mod event_emitter;
pub mod tracing;
pub mod wiring;

pub use config::load_config;
pub use event_emitter::TracingWizardEventPort;
pub use self::tracing::init_tracing_subscriber;
pub use wiring::{wire_orchestrator, WizardWiring};
