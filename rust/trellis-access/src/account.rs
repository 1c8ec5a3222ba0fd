use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::StoreError;

/// The account settings relevant to access control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSettings {
    /// The base URL of the pod registered to this account, if any.
    pub pod_base_url: Option<String>,
}

/// Looks up account settings by WebID.
///
/// Only the ownership override consults this store. `Ok(None)` means no
/// account is registered for the WebID, distinct from an account without a
/// pod and from a lookup failure.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// The settings of the account registered for `web_id`, if any.
    async fn get_settings(&self, web_id: &str) -> Result<Option<AccountSettings>, StoreError>;
}

/// In-memory account store, for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountStore {
    accounts: HashMap<String, AccountSettings>,
}

impl InMemoryAccountStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account for the given WebID.
    pub fn register(&mut self, web_id: impl Into<String>, settings: AccountSettings) {
        self.accounts.insert(web_id.into(), settings);
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn get_settings(&self, web_id: &str) -> Result<Option<AccountSettings>, StoreError> {
        Ok(self.accounts.get(web_id).cloned())
    }
}
