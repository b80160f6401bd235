use async_trait::async_trait;
use reqwest::Client;
use std::ops::Deref;
use std::rc::Rc;
use tracing::{error, info, instrument, warn};

use super::errors::{ClientError, ClientResult};
use super::types::{ApiErrorResponse, CreateUserRequest};
use crate::services::config::{get_global_config, SignUpConfig};
use crate::utils::browser_origin;

/// Capability the sign-up form depends on for talking to the users API
#[async_trait(?Send)]
pub trait UsersApi {
    /// Register a new user
    async fn create_user(&self, request: &CreateUserRequest) -> ClientResult<()>;
}

/// Users API client over HTTP
#[derive(Clone)]
pub struct HttpUsersClient {
    pub(crate) http_client: Client,
    pub(crate) config: SignUpConfig,
}

impl HttpUsersClient {
    pub fn new(config: SignUpConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }
}

impl Default for HttpUsersClient {
    fn default() -> Self {
        Self::new(SignUpConfig::default())
    }
}

#[async_trait(?Send)]
impl UsersApi for HttpUsersClient {
    #[instrument(skip(self, request), fields(username = %request.username), err)]
    async fn create_user(&self, request: &CreateUserRequest) -> ClientResult<()> {
        let url = self.config.users_url(browser_origin().as_deref())?;
        info!("Creating user {} via {}", request.username, url);

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to call {}: {}", url, e);
                ClientError::Network {
                    message: format!("Failed to call {}: {}", url, e),
                }
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ClientError::Network {
            message: format!("Failed to read response: {}", e),
        })?;

        interpret_response(status, &body)
    }
}

/// Map a users API response to the outcome of the call.
///
/// Any 2xx status is a success and its body is ignored. Error statuses must
/// carry `{ "error": { "message": ... } }` to count as a server rejection.
pub fn interpret_response(status: u16, body: &str) -> ClientResult<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(parsed) => {
            warn!("Users API rejected request ({}): {}", status, parsed.error.message);
            Err(ClientError::ServerRejection {
                status,
                message: parsed.error.message,
            })
        }
        Err(_) => {
            error!("Users API returned {} without an error message", status);
            Err(ClientError::InvalidResponse {
                status,
                body: body.to_string(),
            })
        }
    }
}

/// Shared handle to a [`UsersApi`] implementation, provided through Dioxus context
#[derive(Clone)]
pub struct UsersApiHandle(Rc<dyn UsersApi>);

impl UsersApiHandle {
    pub fn new(api: impl UsersApi + 'static) -> Self {
        Self(Rc::new(api))
    }

    pub fn from_config(config: SignUpConfig) -> Self {
        Self::new(HttpUsersClient::new(config))
    }
}

impl Default for UsersApiHandle {
    fn default() -> Self {
        Self::from_config(get_global_config())
    }
}

impl Deref for UsersApiHandle {
    type Target = dyn UsersApi;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for UsersApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
