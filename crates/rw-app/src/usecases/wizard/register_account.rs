use std::sync::Arc;

use rw_core::ports::AccountRegistryPort;
use rw_core::wizard::RegisteredAccount;
use tracing::{info, info_span, Instrument};

/// Use case for recording a submitted account with the registry.
pub struct RegisterAccount {
    registry: Arc<dyn AccountRegistryPort>,
}

impl RegisterAccount {
    pub fn new(registry: Arc<dyn AccountRegistryPort>) -> Self {
        Self { registry }
    }

    pub async fn execute(&self, account: &RegisteredAccount) -> anyhow::Result<()> {
        let span = info_span!("usecase.register_account.execute", email = %account.email);
        async {
            self.registry.register(account).await?;
            info!("account registered");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
