use serde::{Deserialize, Serialize};

use crate::shared::constants::DEFAULT_DOMAIN;
use crate::shared::errors::{AppError, Result};

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

/// Natural-language product search request (aligned with the `POST /intent` body)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IntentQuery {
    /// Free-text query made by the user
    pub query: String,
    /// Conversation thread for follow-up queries
    #[serde(default)]
    pub thread_id: Option<String>,
    /// Upstream domain selector
    #[serde(default = "default_domain")]
    pub domain: String,
    /// Upstream access key, passed through as-is
    #[serde(default)]
    pub key: Option<String>,
}

impl IntentQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            thread_id: None,
            domain: default_domain(),
            key: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_thread_id(mut self, thread_id: impl Into<String>) -> Self {
        self.thread_id = Some(thread_id.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// The access key, or `MissingCredential` if it is absent or empty.
    pub fn credential(&self) -> Result<&str> {
        match self.key.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(AppError::MissingCredential),
        }
    }

    /// Thread id to forward upstream; empty ids are dropped.
    pub fn thread(&self) -> Option<&str> {
        self.thread_id.as_deref().filter(|t| !t.is_empty())
    }

    /// Check the request is worth sending upstream.
    pub fn validate(&self) -> Result<&str> {
        let key = self.credential()?;
        if self.query.trim().is_empty() {
            return Err(AppError::InvalidRequest("query must not be empty".to_string()));
        }
        Ok(key)
    }
}
