//! High-level API surface consumed by the chat UI.
//!
//! `ApiClient` wires the retry engine, the fallback policy, and the
//! notification seam around a [`ChatBackend`]. Chat delivery is the only
//! retried operation; list/read calls fail soft into empty-shaped defaults.

use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use axon_core::config::BackendConfig;
use axon_core::error::Result;
use axon_core::types::{BotSummary, ChatReply, ConversationDetail, ConversationSummary};

use crate::backend::ChatBackend;
use crate::fallback::{new_fallback_conversation_id, record_fallback_usage, select_fallback};
use crate::retry::{with_retry, RetryPolicy};

/// User-facing notification sink for soft failures on list/read calls.
///
/// The UI injects its own implementation (toast, banner); the default logs.
pub trait Notifier: Send + Sync {
    fn notify_error(&self, message: &str);
}

/// Default notifier: routes messages through tracing with a trace id.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_error(&self, message: &str) {
        let trace_id = Uuid::new_v4();
        error!(%trace_id, message, "user-facing notification");
    }
}

/// Resilient client over a [`ChatBackend`].
pub struct ApiClient {
    backend: Arc<dyn ChatBackend>,
    config: Arc<BackendConfig>,
    retry: RetryPolicy,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    /// Create a client with the default retry policy and tracing notifier.
    pub fn new(backend: Arc<dyn ChatBackend>, config: Arc<BackendConfig>) -> Self {
        Self {
            backend,
            config,
            retry: RetryPolicy::default(),
            notifier: Arc::new(TracingNotifier),
        }
    }

    /// Replace the retry policy.
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// Replace the notification sink.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Deliver a chat message with bounded retry.
    ///
    /// If every attempt fails and the terminal failure is fallback-eligible
    /// (service unavailable, connection refused, timeout) while fallback is
    /// enabled, a canned degraded reply is returned as success: the reply
    /// text comes from the fallback rule table, the conversation id echoes
    /// the caller's or is freshly synthesized, and `is_fallback` is set.
    /// Any other terminal failure is propagated with its classification
    /// intact; user-visible error reporting is the caller's job.
    pub async fn send_chat_message(
        &self,
        bot_id: &str,
        message: &str,
        conversation_id: Option<&str>,
    ) -> Result<ChatReply> {
        let outcome = with_retry(self.retry, || {
            self.backend.send_chat(bot_id, message, conversation_id)
        })
        .await;

        match outcome {
            Ok(reply) => Ok(reply),
            Err(e) if e.is_fallback_eligible() && self.config.fallback_enabled => {
                info!(bot_id, error = %e, "service unavailable, serving fallback reply");
                record_fallback_usage(bot_id, message);
                Ok(ChatReply {
                    message: select_fallback(message).to_string(),
                    conversation_id: conversation_id
                        .map(str::to_owned)
                        .unwrap_or_else(new_fallback_conversation_id),
                    is_fallback: true,
                })
            }
            Err(e) => {
                error!(bot_id, error = %e, "chat request failed");
                Err(e)
            }
        }
    }

    /// List chatbots. Never errors: on failure the user is notified and an
    /// empty list is returned so the UI always has a valid shape.
    pub async fn get_bots(&self) -> Vec<BotSummary> {
        match self.backend.list_bots().await {
            Ok(bots) => bots,
            Err(e) => {
                error!(error = %e, "failed to fetch bots");
                self.notifier.notify_error("Failed to load chatbots");
                Vec::new()
            }
        }
    }

    /// List a bot's conversations; same fail-soft contract as [`Self::get_bots`].
    pub async fn get_conversations(&self, bot_id: &str) -> Vec<ConversationSummary> {
        match self.backend.list_conversations(bot_id).await {
            Ok(conversations) => conversations,
            Err(e) => {
                error!(bot_id, error = %e, "failed to fetch conversations");
                self.notifier.notify_error("Failed to load conversations");
                Vec::new()
            }
        }
    }

    /// Fetch a conversation's messages; fails soft to the empty detail shape.
    pub async fn get_conversation_messages(
        &self,
        bot_id: &str,
        conversation_id: &str,
    ) -> ConversationDetail {
        match self
            .backend
            .conversation_detail(bot_id, conversation_id)
            .await
        {
            Ok(detail) => detail,
            Err(e) => {
                error!(bot_id, conversation_id, error = %e, "failed to fetch conversation");
                self.notifier.notify_error("Failed to load conversation");
                ConversationDetail::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use axon_core::error::ApiError;

    /// Mock backend whose chat path always fails with the given constructor.
    struct FailingBackend {
        chat_calls: AtomicU32,
        make_error: fn() -> ApiError,
    }

    impl FailingBackend {
        fn new(make_error: fn() -> ApiError) -> Self {
            Self {
                chat_calls: AtomicU32::new(0),
                make_error,
            }
        }
    }

    #[async_trait]
    impl ChatBackend for FailingBackend {
        async fn send_chat(
            &self,
            _bot_id: &str,
            _message: &str,
            _conversation_id: Option<&str>,
        ) -> Result<ChatReply> {
            self.chat_calls.fetch_add(1, Ordering::SeqCst);
            Err((self.make_error)())
        }

        async fn list_bots(&self) -> Result<Vec<BotSummary>> {
            Err((self.make_error)())
        }

        async fn list_conversations(&self, _bot_id: &str) -> Result<Vec<ConversationSummary>> {
            Err((self.make_error)())
        }

        async fn conversation_detail(
            &self,
            _bot_id: &str,
            _conversation_id: &str,
        ) -> Result<ConversationDetail> {
            Err((self.make_error)())
        }

        async fn health(&self) -> Result<()> {
            Err((self.make_error)())
        }
    }

    struct CollectingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl CollectingNotifier {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                messages: Mutex::new(Vec::new()),
            })
        }

        fn messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }
    }

    impl Notifier for CollectingNotifier {
        fn notify_error(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    fn refused() -> ApiError {
        ApiError::ConnectionRefused("ECONNREFUSED".to_string())
    }

    fn unauthorized() -> ApiError {
        ApiError::Client {
            status: 401,
            message: "invalid token".to_string(),
        }
    }

    fn client_with(
        backend: Arc<dyn ChatBackend>,
        fallback_enabled: bool,
    ) -> ApiClient {
        let config = BackendConfig {
            fallback_enabled,
            ..BackendConfig::default()
        };
        ApiClient::new(backend, Arc::new(config))
            .with_retry_policy(RetryPolicy::new(3, Duration::ZERO))
    }

    #[tokio::test]
    async fn test_connection_refused_degrades_to_fallback() {
        let backend = Arc::new(FailingBackend::new(refused));
        let client = client_with(Arc::clone(&backend) as Arc<dyn ChatBackend>, true);

        let reply = client
            .send_chat_message("bot-1", "hello there", None)
            .await
            .unwrap();

        assert!(reply.is_fallback);
        assert!(reply.message.contains("fallback mode"));
        assert!(reply.conversation_id.starts_with("fallback-"));
        // All retry attempts were burned before falling back.
        assert_eq!(backend.chat_calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_fallback_echoes_caller_conversation_id() {
        let backend = Arc::new(FailingBackend::new(refused));
        let client = client_with(backend, true);

        let reply = client
            .send_chat_message("bot-1", "hi", Some("conv-77"))
            .await
            .unwrap();

        assert!(reply.is_fallback);
        assert_eq!(reply.conversation_id, "conv-77");
    }

    #[tokio::test]
    async fn test_fallback_disabled_surfaces_error() {
        let backend = Arc::new(FailingBackend::new(refused));
        let client = client_with(backend, false);

        let err = client
            .send_chat_message("bot-1", "hello", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ConnectionRefused(_)));
    }

    #[tokio::test]
    async fn test_auth_failure_never_falls_back() {
        let backend = Arc::new(FailingBackend::new(unauthorized));
        let client = client_with(Arc::clone(&backend) as Arc<dyn ChatBackend>, true);

        let err = client
            .send_chat_message("bot-1", "hello", None)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Client { status: 401, .. }));
        // Non-retryable: a single attempt, regardless of the policy.
        assert_eq!(backend.chat_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_get_bots_fails_soft_with_notification() {
        let backend = Arc::new(FailingBackend::new(refused));
        let notifier = CollectingNotifier::new();
        let client = client_with(backend, true)
            .with_notifier(Arc::clone(&notifier) as Arc<dyn Notifier>);

        let bots = client.get_bots().await;
        assert!(bots.is_empty());
        assert_eq!(notifier.messages(), vec!["Failed to load chatbots"]);
    }

    #[tokio::test]
    async fn test_get_conversations_fails_soft() {
        let backend = Arc::new(FailingBackend::new(refused));
        let notifier = CollectingNotifier::new();
        let client = client_with(backend, true)
            .with_notifier(Arc::clone(&notifier) as Arc<dyn Notifier>);

        let conversations = client.get_conversations("bot-1").await;
        assert!(conversations.is_empty());
        assert_eq!(notifier.messages(), vec!["Failed to load conversations"]);
    }

    #[tokio::test]
    async fn test_get_conversation_messages_fails_soft_to_empty_shape() {
        let backend = Arc::new(FailingBackend::new(refused));
        let notifier = CollectingNotifier::new();
        let client = client_with(backend, true)
            .with_notifier(Arc::clone(&notifier) as Arc<dyn Notifier>);

        let detail = client.get_conversation_messages("bot-1", "conv-1").await;
        assert!(detail.messages.is_empty());
        assert_eq!(notifier.messages(), vec!["Failed to load conversation"]);
    }
}
