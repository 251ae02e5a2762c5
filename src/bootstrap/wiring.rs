//! # Dependency Injection / 依赖注入模块
//!
//! Builds the adapters and hands them to the orchestrator. Assembly only; no
//! decisions about wizard behavior are made here.

use std::sync::Arc;

use rw_app::WizardOrchestrator;
use rw_core::ports::{AccountRegistryPort, ClockPort, WizardEventPort};
use rw_core::WizardConfig;
use rw_infra::{InMemoryAccountRegistry, SystemClock};
use tracing::info;

use super::TracingWizardEventPort;

/// The orchestrator plus the concrete registry behind it.
pub struct WizardWiring {
    pub orchestrator: WizardOrchestrator,
    pub registry: Arc<InMemoryAccountRegistry>,
}

/// Wire the orchestrator with the in-memory registry.
///
/// `clock` defaults to the system clock; `event_port` to tracing output.
pub fn wire_orchestrator(
    config: &WizardConfig,
    clock: Option<Arc<dyn ClockPort>>,
    event_port: Option<Arc<dyn WizardEventPort>>,
) -> WizardWiring {
    let registry = Arc::new(InMemoryAccountRegistry::with_seed(
        &config.registry.seeded_emails,
    ));
    info!(
        seeded = config.registry.seeded_emails.len(),
        postcode_length = config.validation.postcode_length,
        expiry_year_horizon = config.validation.expiry_year_horizon,
        "wiring registration wizard"
    );

    let registry_port: Arc<dyn AccountRegistryPort> = registry.clone();
    let orchestrator = WizardOrchestrator::from_ports(
        config.validation.clone(),
        clock.unwrap_or_else(|| Arc::new(SystemClock)),
        registry_port,
        event_port.unwrap_or_else(|| Arc::new(TracingWizardEventPort)),
    );

    WizardWiring {
        orchestrator,
        registry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn registry_is_seeded_from_config() {
        let mut config = WizardConfig::with_defaults();
        config.registry.seeded_emails.push("Eve@Example.com".to_string());

        let wiring = wire_orchestrator(&config, None, None);

        assert_eq!(wiring.registry.len().await, 2);
        assert!(wiring.registry.contains("eve@example.com").await);
        assert!(wiring.registry.contains("ADAM@orikan.com").await);
    }
}
