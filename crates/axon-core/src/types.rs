//! Wire types shared between the request engine, the availability monitor,
//! and the display boundary. Field names map to the backend's camelCase JSON.

use serde::{Deserialize, Serialize};

// =============================================================================
// Chat
// =============================================================================

/// JSON body of an outbound chat request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    /// `None` serializes as JSON `null`, which the backend treats as
    /// "start a new conversation".
    pub conversation_id: Option<String>,
}

/// A reply delivered to the chat UI.
///
/// `is_fallback` is true iff the text did not originate from the remote
/// backend; the backend never sends the field, so it defaults to false on
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub message: String,
    pub conversation_id: String,
    #[serde(default)]
    pub is_fallback: bool,
}

// =============================================================================
// Availability
// =============================================================================

/// Composite reachability status published by the availability monitor.
///
/// Each poll cycle fully replaces the prior value; there is no smoothing
/// across cycles. `loading` is true only before the first poll completes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityStatus {
    pub ai_reachable: bool,
    pub database_reachable: bool,
    pub loading: bool,
}

impl AvailabilityStatus {
    /// The pre-first-poll state.
    pub fn loading() -> Self {
        Self {
            ai_reachable: false,
            database_reachable: false,
            loading: true,
        }
    }
}

// =============================================================================
// List/read result shapes
// =============================================================================

/// A chatbot listed by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BotSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A conversation listed for a bot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Full detail of one conversation.
///
/// Defaults to the empty shape so read failures can hand the UI a valid
/// result instead of an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationDetail {
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatTurn>,
}

/// One turn inside a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_serializes_null_conversation() {
        let req = ChatRequest {
            message: "hello".to_string(),
            conversation_id: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["message"], "hello");
        assert!(json["conversationId"].is_null());
    }

    #[test]
    fn test_chat_request_camel_case_id() {
        let req = ChatRequest {
            message: "hi".to_string(),
            conversation_id: Some("conv-1".to_string()),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"conversationId\":\"conv-1\""));
    }

    #[test]
    fn test_chat_reply_is_fallback_defaults_false() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"message":"hi","conversationId":"c-1"}"#).unwrap();
        assert_eq!(reply.message, "hi");
        assert_eq!(reply.conversation_id, "c-1");
        assert!(!reply.is_fallback);
    }

    #[test]
    fn test_chat_reply_round_trip() {
        let reply = ChatReply {
            message: "degraded".to_string(),
            conversation_id: "fallback-1-2".to_string(),
            is_fallback: true,
        };
        let json = serde_json::to_string(&reply).unwrap();
        let back: ChatReply = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reply);
    }

    #[test]
    fn test_availability_loading_state() {
        let status = AvailabilityStatus::loading();
        assert!(status.loading);
        assert!(!status.ai_reachable);
        assert!(!status.database_reachable);
    }

    #[test]
    fn test_conversation_detail_default_is_empty() {
        let detail = ConversationDetail::default();
        assert!(detail.messages.is_empty());
        assert!(detail.conversation_id.is_none());
    }

    #[test]
    fn test_conversation_detail_tolerates_missing_fields() {
        let detail: ConversationDetail = serde_json::from_str("{}").unwrap();
        assert!(detail.messages.is_empty());
    }

    #[test]
    fn test_bot_summary_optional_description() {
        let bot: BotSummary =
            serde_json::from_str(r#"{"id":"b-1","name":"Support Bot"}"#).unwrap();
        assert_eq!(bot.id, "b-1");
        assert!(bot.description.is_none());
    }
}
