//! HTTP login client

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use soarca_gui_core::traits::AuthService;
use soarca_gui_core::types::{AuthOutcome, LoginRequest};
use soarca_gui_core::{CoreError, CoreResult};

/// Error body returned by the login endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LoginErrorBody {
    errors: Vec<String>,
    message: Option<String>,
}

/// Messages to show for a rejected login
///
/// `errors[]` wins over `message`; anything unparseable yields the generic message.
fn rejection_from_body(body: &str) -> AuthOutcome {
    let messages = match serde_json::from_str::<LoginErrorBody>(body) {
        Ok(parsed) if !parsed.errors.is_empty() => parsed.errors,
        Ok(parsed) => parsed.message.into_iter().collect(),
        Err(e) => {
            log::debug!("Login error body is not JSON: {e}");
            Vec::new()
        }
    };
    AuthOutcome::rejected(messages)
}

/// `POST {base}/login` with a JSON `{email, password}` body
pub struct HttpAuthService {
    client: reqwest::Client,
    base_uri: Option<String>,
}

impl HttpAuthService {
    pub fn new(base_uri: Option<String>) -> CoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| {
                log::error!("Failed to build the login HTTP client: {e}");
                CoreError::NetworkError(e.to_string())
            })?;
        Ok(Self { client, base_uri })
    }

    fn login_url(&self) -> CoreResult<String> {
        self.base_uri
            .as_deref()
            .map(|base| format!("{}/login", base.trim_end_matches('/')))
            .ok_or_else(|| CoreError::NetworkError("SOARCA URI is not configured".to_string()))
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn login(&self, request: &LoginRequest) -> CoreResult<AuthOutcome> {
        let url = self.login_url()?;
        log::debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| CoreError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(AuthOutcome::Success);
        }

        log::debug!("Login rejected with HTTP {status}");
        let body = response.text().await.unwrap_or_default();
        Ok(rejection_from_body(&body))
    }
}
