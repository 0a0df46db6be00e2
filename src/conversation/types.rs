use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::Display;
use uuid::Uuid;

use crate::responder::ReplyKind;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// Risk label attached to assistant replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];
}

/// Randomly generated decoration for assistant replies. The confidence is a
/// uniform integer in `[70, 99]` and the risk level a uniform three-way pick;
/// neither is derived from the reply content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMeta {
    pub confidence: u8,
    pub risk_level: RiskLevel,
}

impl ResponseMeta {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            confidence: rng.random_range(70..=99),
            risk_level: RiskLevel::ALL[rng.random_range(0..RiskLevel::ALL.len())],
        }
    }
}

/// One immutable entry of a conversation. Created once, never mutated; the
/// store position carries the ordering, the id only has to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ReplyKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ResponseMeta>,
}

impl Message {
    /// A user message. Content is recorded verbatim, untrimmed.
    pub fn user(content: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: MessageRole::User,
            content: content.to_owned(),
            timestamp: Utc::now(),
            kind: None,
            metadata: None,
        }
    }

    /// An assistant message, optionally tagged with the reply category and
    /// generated metadata.
    pub fn assistant(
        content: String,
        kind: Option<ReplyKind>,
        metadata: Option<ResponseMeta>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: MessageRole::Assistant,
            content,
            timestamp: Utc::now(),
            kind,
            metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_metadata_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let meta = ResponseMeta::random(&mut rng);
            assert!((70..=99).contains(&meta.confidence));
        }
    }

    #[test]
    fn message_ids_are_unique() {
        let first = Message::user("a");
        let second = Message::user("a");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_string(&MessageRole::Assistant).unwrap();
        assert_eq!(json, r#""assistant""#);
        let json = serde_json::to_string(&RiskLevel::Medium).unwrap();
        assert_eq!(json, r#""medium""#);
    }

    #[test]
    fn untagged_fields_are_omitted_from_json() {
        let message = Message::user("hello");
        let json = serde_json::to_value(&message).unwrap();
        assert!(json.get("kind").is_none());
        assert!(json.get("metadata").is_none());
    }
}
