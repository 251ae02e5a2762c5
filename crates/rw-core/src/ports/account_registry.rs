use async_trait::async_trait;

use crate::registry::Availability;
use crate::wizard::RegisteredAccount;

/// Email-uniqueness oracle backed by whatever stores accounts.
///
/// Lookups are case-insensitive: `Adam@Orikan.com` and `adam@orikan.com` are
/// the same identity.
#[async_trait]
pub trait AccountRegistryPort: Send + Sync {
    async fn is_available(&self, email: &str) -> anyhow::Result<Availability>;

    /// Records a successfully submitted account.
    async fn register(&self, account: &RegisteredAccount) -> anyhow::Result<()>;
}
