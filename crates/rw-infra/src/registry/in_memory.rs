//! In-memory account registry.
//!
//! Holds the set of registered emails for the lifetime of the process.
//! Entries are stored lower-cased so lookups ignore case.

use std::collections::HashSet;

use async_trait::async_trait;
use rw_core::ports::AccountRegistryPort;
use rw_core::registry::normalize_email;
use rw_core::wizard::RegisteredAccount;
use rw_core::Availability;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Default)]
pub struct InMemoryAccountRegistry {
    emails: Mutex<HashSet<String>>,
}

impl InMemoryAccountRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with `emails`.
    pub fn with_seed<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            emails: Mutex::new(
                emails
                    .into_iter()
                    .map(|email| normalize_email(email.as_ref()))
                    .collect(),
            ),
        }
    }

    /// Add an email as already registered.
    pub async fn seed(&self, email: &str) {
        self.emails.lock().await.insert(normalize_email(email));
    }

    /// Forget every registered email, seeds included.
    pub async fn reset(&self) {
        self.emails.lock().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.emails.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.emails.lock().await.is_empty()
    }

    pub async fn contains(&self, email: &str) -> bool {
        self.emails.lock().await.contains(&normalize_email(email))
    }
}

#[async_trait]
impl AccountRegistryPort for InMemoryAccountRegistry {
    async fn is_available(&self, email: &str) -> anyhow::Result<Availability> {
        let taken = self.contains(email).await;
        debug!(email = %email, taken, "registry availability lookup");
        Ok(if taken {
            Availability::AlreadyRegistered
        } else {
            Availability::Available
        })
    }

    async fn register(&self, account: &RegisteredAccount) -> anyhow::Result<()> {
        let inserted = self
            .emails
            .lock()
            .await
            .insert(normalize_email(&account.email));
        if !inserted {
            anyhow::bail!("account {} is already registered", account.email);
        }
        debug!(email = %account.email, "account registered");
        Ok(())
    }
}
