//! Configuration for the sign-up page's users API endpoint.

use serde::{Deserialize, Serialize};

use crate::services::client::{ClientError, ClientResult};

pub const DEFAULT_USERS_PATH: &str = "/api/v1/users";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpConfig {
    /// Origin of the API server. When unset the page's own origin is used.
    pub api_base_url: Option<String>,

    /// Path of the user registration endpoint
    pub users_path: String,
}

impl Default for SignUpConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            users_path: DEFAULT_USERS_PATH.to_string(),
        }
    }
}

impl SignUpConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: Some(base_url.into()),
            ..Self::default()
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !self.users_path.starts_with('/') {
            errors.push("users_path must start with '/'".to_string());
        }

        if let Some(base) = &self.api_base_url {
            if !(base.starts_with("http://") || base.starts_with("https://")) {
                errors.push("api_base_url must be an http(s) URL".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Absolute URL of the registration endpoint, falling back to `origin`
    /// when no base URL is configured.
    pub fn users_url(&self, origin: Option<&str>) -> ClientResult<String> {
        if let Err(errors) = self.validate() {
            return Err(ClientError::Configuration {
                field: "sign_up".to_string(),
                value: errors.join("; "),
            });
        }

        let base = self
            .api_base_url
            .as_deref()
            .or(origin)
            .ok_or_else(|| ClientError::Configuration {
                field: "api_base_url".to_string(),
                value: "<unset>".to_string(),
            })?;

        Ok(format!("{}{}", base.trim_end_matches('/'), self.users_path))
    }
}
