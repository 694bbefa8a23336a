use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A curated document. Immutable after load; the collection owns it for
/// the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
}

/// Chat request body. A missing `query` field defaults to empty and is
/// rejected by the handler the same way an explicit empty string is.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub query: String,
}

/// Chat response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// JSON error envelope for non-2xx responses.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// One line of the append-only interaction log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub timestamp: DateTime<Utc>,
    pub query: String,
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_missing_query_defaults_to_empty() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.query, "");
    }

    #[test]
    fn test_chat_response_serializes_response_field() {
        let json = serde_json::to_value(ChatResponse {
            response: "hello".into(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "response": "hello" }));
    }

    #[test]
    fn test_interaction_record_round_trips() {
        let record = InteractionRecord {
            timestamp: Utc::now(),
            query: "q".into(),
            response: "r".into(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: InteractionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.query, "q");
        assert_eq!(back.response, "r");
    }
}
