//! Record Shapes
//!
//! The four record types a market-data backend must produce for the
//! dashboard and chat surfaces. All fields that carry prices, sizes and
//! amounts are preformatted display strings; the renderers pass them
//! through verbatim and never re-interpret them numerically.

use serde::{Deserialize, Serialize};

/// Direction of an open position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Long,
    Short,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Long => write!(f, "LONG"),
            Side::Short => write!(f, "SHORT"),
        }
    }
}

/// An open trading position.
///
/// `id` is unique within a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    /// Asset symbol, e.g. "BTC-USDT"
    pub asset: String,
    pub side: Side,
    /// Entry price as a decimal string
    pub entry_price: String,
    /// Quantity with unit, e.g. "0.5 BTC"
    pub size: String,
    /// Signed currency string, e.g. "+$1,250"
    pub pnl: String,
}

/// Directional sentiment attributed to one asset.
///
/// One entry per asset in a snapshot set. `value` is a signed decimal
/// string; `confidence` is a decimal string conceptually in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasSnapshot {
    pub asset: String,
    pub value: String,
    pub confidence: String,
}

/// A large on-chain transaction attributed to a notable wallet.
///
/// `tx_hash` is the unique key. `timestamp` is an ISO-8601 string;
/// recency-first ordering is the provider's responsibility, not the
/// renderer's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhaleEvent {
    pub tx_hash: String,
    pub wallet: String,
    /// Free-form verb, e.g. "deposited" / "withdrew"
    pub action: String,
    pub amount: String,
    pub asset: String,
    pub timestamp: String,
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Assistant,
    User,
}

/// One entry in a chat transcript.
///
/// `confidence` is only populated for assistant messages in practice,
/// though the type does not enforce this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    /// Ordered reference identifiers backing the message, possibly empty
    #[serde(default)]
    pub citations: Vec<String>,
    pub confidence: Option<f64>,
}

impl ChatMessage {
    /// A user-authored message: no citations, no confidence.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            citations: Vec::new(),
            confidence: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Side::Long).unwrap(), "\"LONG\"");
        assert_eq!(serde_json::to_string(&Side::Short).unwrap(), "\"SHORT\"");
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    }

    #[test]
    fn position_uses_camel_case_keys() {
        let position = Position {
            id: "pos-1".to_string(),
            asset: "BTC-USDT".to_string(),
            side: Side::Long,
            entry_price: "42500".to_string(),
            size: "0.5 BTC".to_string(),
            pnl: "+$1,250".to_string(),
        };

        let json = serde_json::to_value(&position).unwrap();
        assert_eq!(json["entryPrice"], "42500");
        assert_eq!(json["side"], "LONG");
    }

    #[test]
    fn whale_event_round_trips() {
        let raw = r#"{
            "txHash": "0xabc",
            "wallet": "0xWhale1",
            "action": "deposited",
            "amount": "500",
            "asset": "ETH",
            "timestamp": "2025-01-01T00:00:00Z"
        }"#;

        let event: WhaleEvent = serde_json::from_str(raw).unwrap();
        assert_eq!(event.tx_hash, "0xabc");
        assert_eq!(
            serde_json::to_value(&event).unwrap()["txHash"],
            "0xabc"
        );
    }

    #[test]
    fn user_message_has_no_confidence() {
        let message = ChatMessage::user("Hedge now?");
        assert_eq!(message.role, Role::User);
        assert!(message.citations.is_empty());
        assert!(message.confidence.is_none());
    }
}
