use anyhow::Result;
use async_trait::async_trait;

use crate::errors::UploadError;
use crate::github;

/// The one operation the orchestrator needs from a secret store: submit
/// one secret and learn whether it stuck. The concrete `gh` subprocess
/// mechanism stays behind this trait so it can be swapped for a native
/// API client without touching the orchestrator.
#[async_trait]
pub trait SecretStore: Send + Sync {
    async fn set_secret(&self, repo: &str, key: &str, value: &str) -> Result<(), UploadError>;
}

pub struct RealSecretStore {
    inner: github::GhClient,
}

impl Default for RealSecretStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RealSecretStore {
    pub fn new() -> Self {
        Self {
            inner: github::GhClient::new(),
        }
    }
}

#[async_trait]
impl SecretStore for RealSecretStore {
    async fn set_secret(&self, repo: &str, key: &str, value: &str) -> Result<(), UploadError> {
        self.inner.set_secret(repo, key, value).await
    }
}

pub trait PromptInterface: Send + Sync {
    fn prompt_repo(&self) -> Result<String>;
    fn prompt_secret_key(&self) -> Result<String>;
    fn prompt_secret_value(&self, key: &str) -> Result<String>;
}

pub struct RealPrompt;

impl PromptInterface for RealPrompt {
    fn prompt_repo(&self) -> Result<String> {
        crate::prompt::prompt_repo()
    }

    fn prompt_secret_key(&self) -> Result<String> {
        crate::prompt::prompt_secret_key()
    }

    fn prompt_secret_value(&self, key: &str) -> Result<String> {
        crate::prompt::prompt_secret_value(key)
    }
}
