//! Outbound HTTP boundary to the gateway and the AI backend.
//!
//! [`ChatBackend`] is the seam the request engine, the availability monitor,
//! and the tests talk to; [`HttpBackend`] is the production implementation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use axon_core::config::BackendConfig;
use axon_core::error::{ApiError, Result};
use axon_core::types::{
    BotSummary, ChatReply, ChatRequest, ConversationDetail, ConversationSummary,
};

/// Timeout for chat and list/read calls.
pub const API_TIMEOUT: Duration = Duration::from_secs(15);

/// Timeout for the health probe.
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Limit on error-body text carried into an [`ApiError`].
const ERROR_BODY_LIMIT: usize = 512;

/// Outbound calls to the conversational-AI backend and its gateway.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Deliver one chat message; the backend replies with the answer and the
    /// (possibly newly created) conversation id.
    async fn send_chat(
        &self,
        bot_id: &str,
        message: &str,
        conversation_id: Option<&str>,
    ) -> Result<ChatReply>;

    /// List the available chatbots.
    async fn list_bots(&self) -> Result<Vec<BotSummary>>;

    /// List the conversations recorded for a bot.
    async fn list_conversations(&self, bot_id: &str) -> Result<Vec<ConversationSummary>>;

    /// Fetch the full message history of one conversation.
    async fn conversation_detail(
        &self,
        bot_id: &str,
        conversation_id: &str,
    ) -> Result<ConversationDetail>;

    /// Lightweight reachability probe against the AI backend's health
    /// endpoint; carries the bearer credential, performs no business work.
    async fn health(&self) -> Result<()>;
}

/// reqwest-backed production implementation of [`ChatBackend`].
pub struct HttpBackend {
    http: reqwest::Client,
    config: Arc<BackendConfig>,
}

impl HttpBackend {
    /// Build a backend over a client with the standard 15s request timeout.
    pub fn new(config: Arc<BackendConfig>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(API_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T>(&self, url: String) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(map_transport_error)?;
        let response = check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Deserialize(e.to_string()))
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn send_chat(
        &self,
        bot_id: &str,
        message: &str,
        conversation_id: Option<&str>,
    ) -> Result<ChatReply> {
        let url = self.api_url(&format!("/chatbots/{bot_id}/chat"));
        let body = ChatRequest {
            message: message.to_string(),
            conversation_id: conversation_id.map(str::to_owned),
        };

        debug!(%url, bot_id, "POST chat");
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;
        let response = check_status(response).await?;
        response
            .json::<ChatReply>()
            .await
            .map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    async fn list_bots(&self) -> Result<Vec<BotSummary>> {
        self.get_json(self.api_url("/chatbots")).await
    }

    async fn list_conversations(&self, bot_id: &str) -> Result<Vec<ConversationSummary>> {
        self.get_json(self.api_url(&format!("/chatbots/{bot_id}/conversations")))
            .await
    }

    async fn conversation_detail(
        &self,
        bot_id: &str,
        conversation_id: &str,
    ) -> Result<ConversationDetail> {
        self.get_json(self.api_url(&format!(
            "/chatbots/{bot_id}/conversations/{conversation_id}"
        )))
        .await
    }

    async fn health(&self) -> Result<()> {
        let url = format!(
            "{}/health",
            self.config.ai_api_url.trim_end_matches('/')
        );
        debug!(%url, "GET health");
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.config.ai_api_key)
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await
            .map_err(map_transport_error)?;
        check_status(response).await.map(|_| ())
    }
}

/// Map a reqwest transport failure to its [`ApiError`] classification.
fn map_transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout(e.to_string())
    } else if e.is_connect() {
        ApiError::ConnectionRefused(e.to_string())
    } else {
        ApiError::Transport(e.to_string())
    }
}

/// Turn non-success HTTP statuses into classified errors, consuming the
/// error body (truncated) as the message.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let mut body = response.text().await.unwrap_or_default();
    if body.len() > ERROR_BODY_LIMIT {
        // Back off to a char boundary so the cut never splits a code point.
        let mut end = ERROR_BODY_LIMIT;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
    }

    match status {
        StatusCode::SERVICE_UNAVAILABLE => Err(ApiError::ServiceUnavailable(body)),
        s if s.is_client_error() => Err(ApiError::Client {
            status: s.as_u16(),
            message: body,
        }),
        s => Err(ApiError::Server {
            status: s.as_u16(),
            message: body,
        }),
    }
}
