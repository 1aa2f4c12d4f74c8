pub mod response;

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

use cadastro_core::config::ApiConfig;
use cadastro_core::{
    ApiError, RegistrationApi, RegistrationReceipt, RegistrationRequest,
    GENERIC_FAILURE_MESSAGE,
};

/// HTTP client for the remote registration endpoint. One POST per accepted
/// submit; the payload goes out exactly as stored, masks included.
pub struct HttpRegistrationClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpRegistrationClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let endpoint =
            Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RegistrationApi for HttpRegistrationClient {
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationReceipt, ApiError> {
        let start = Instant::now();
        debug!(endpoint = %self.endpoint, "submitting registration");

        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "registration request failed");
                ApiError::Network(e.to_string())
            })?;

        let status = resp.status();
        if status.is_success() {
            let receipt = RegistrationReceipt {
                status: status.as_u16(),
                response_time_ms: start.elapsed().as_millis() as u64,
                completed_at: chrono::Utc::now(),
            };
            debug!(
                status = receipt.status,
                elapsed_ms = receipt.response_time_ms,
                "registration accepted"
            );
            return Ok(receipt);
        }

        // Non-2xx: surface the first structured error, or fail safe when
        // the body does not have the expected shape
        let body = resp.text().await.unwrap_or_default();
        let message = response::first_error_message(&body)
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
        warn!(status = status.as_u16(), message = %message, "registration rejected");

        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
