use std::sync::Arc;

use rw_core::ports::AccountRegistryPort;
use rw_core::Availability;
use tracing::{debug, info_span, Instrument};

/// Use case for asking the registry whether an email can be registered.
pub struct CheckEmailAvailability {
    registry: Arc<dyn AccountRegistryPort>,
}

impl CheckEmailAvailability {
    pub fn new(registry: Arc<dyn AccountRegistryPort>) -> Self {
        Self { registry }
    }

    pub async fn execute(&self, email: &str) -> anyhow::Result<Availability> {
        let span = info_span!("usecase.check_email_availability.execute", email = %email);
        async {
            let availability = self.registry.is_available(email).await?;
            debug!(?availability, "email availability resolved");
            Ok(availability)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rw_core::wizard::RegisteredAccount;

    mockall::mock! {
        pub Registry {}

        #[async_trait]
        impl AccountRegistryPort for Registry {
            async fn is_available(&self, email: &str) -> anyhow::Result<Availability>;
            async fn register(&self, account: &RegisteredAccount) -> anyhow::Result<()>;
        }
    }

    #[tokio::test]
    async fn passes_email_through_to_registry() {
        let mut registry = MockRegistry::new();
        registry
            .expect_is_available()
            .withf(|email| email == "adam@orikan.com")
            .times(1)
            .returning(|_| Ok(Availability::AlreadyRegistered));
        let use_case = CheckEmailAvailability::new(Arc::new(registry));

        let availability = use_case.execute("adam@orikan.com").await.unwrap();

        assert_eq!(availability, Availability::AlreadyRegistered);
    }

    #[tokio::test]
    async fn propagates_registry_errors() {
        let mut registry = MockRegistry::new();
        registry
            .expect_is_available()
            .returning(|_| Err(anyhow::anyhow!("registry offline")));
        let use_case = CheckEmailAvailability::new(Arc::new(registry));

        let err = use_case.execute("john@gmail.com").await.unwrap_err();

        assert!(err.to_string().contains("registry offline"));
    }
}
