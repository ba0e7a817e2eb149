//! Sample Data Provider
//!
//! Fixture collections for the dashboard and chat surfaces, plus the
//! [`MarketData`] trait they are served through. The trait is the seam
//! where a live backend (whale-event feed, bias engine, chat service)
//! would be substituted; any implementation only has to hand back the
//! same four ordered collections.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};

use crate::model::{BiasSnapshot, ChatMessage, Position, Role, Side, WhaleEvent};

/// Read-only source of the four dashboard/chat collections.
///
/// No validation and no error conditions: providers return whatever they
/// have, and renderers degrade to empty sections when a collection is
/// empty.
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Open positions, in provider order.
    async fn positions(&self) -> Vec<Position>;

    /// Current bias snapshot, one entry per asset.
    async fn bias_snapshot(&self) -> Vec<BiasSnapshot>;

    /// Recent whale events, most recent first.
    async fn whale_events(&self) -> Vec<WhaleEvent>;

    /// Seed history for the chat transcript.
    async fn chat_history(&self) -> Vec<ChatMessage>;
}

/// The canonical fixture provider.
///
/// Collections are built once at construction; retrievals clone them so
/// callers never share mutable state with the provider.
pub struct SampleData {
    positions: Vec<Position>,
    bias: Vec<BiasSnapshot>,
    whale_events: Vec<WhaleEvent>,
    chat_history: Vec<ChatMessage>,
}

impl SampleData {
    pub fn new() -> Self {
        let mut whale_events = sample_whale_events();
        // Recency-first ordering is the provider's contract.
        whale_events.sort_by(|a, b| parse_timestamp(b).cmp(&parse_timestamp(a)));

        Self {
            positions: sample_positions(),
            bias: sample_bias(),
            whale_events,
            chat_history: sample_chat_history(),
        }
    }
}

impl Default for SampleData {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketData for SampleData {
    async fn positions(&self) -> Vec<Position> {
        self.positions.clone()
    }

    async fn bias_snapshot(&self) -> Vec<BiasSnapshot> {
        self.bias.clone()
    }

    async fn whale_events(&self) -> Vec<WhaleEvent> {
        self.whale_events.clone()
    }

    async fn chat_history(&self) -> Vec<ChatMessage> {
        self.chat_history.clone()
    }
}

/// Unparseable timestamps sort last.
fn parse_timestamp(event: &WhaleEvent) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(&event.timestamp).ok()
}

fn sample_positions() -> Vec<Position> {
    vec![
        Position {
            id: "pos-1".to_string(),
            asset: "BTC-USDT".to_string(),
            side: Side::Long,
            entry_price: "42500".to_string(),
            size: "0.5 BTC".to_string(),
            pnl: "+$1,250".to_string(),
        },
        Position {
            id: "pos-2".to_string(),
            asset: "ETH-USDT".to_string(),
            side: Side::Short,
            entry_price: "2300".to_string(),
            size: "5 ETH".to_string(),
            pnl: "-$320".to_string(),
        },
    ]
}

fn sample_bias() -> Vec<BiasSnapshot> {
    vec![
        BiasSnapshot {
            asset: "BTC".to_string(),
            value: "+0.35".to_string(),
            confidence: "0.82".to_string(),
        },
        BiasSnapshot {
            asset: "ETH".to_string(),
            value: "-0.15".to_string(),
            confidence: "0.64".to_string(),
        },
    ]
}

fn sample_whale_events() -> Vec<WhaleEvent> {
    vec![
        WhaleEvent {
            tx_hash: "0xabc".to_string(),
            wallet: "0xWhale1".to_string(),
            action: "deposited".to_string(),
            amount: "500".to_string(),
            asset: "ETH".to_string(),
            timestamp: "2025-01-01T00:00:00Z".to_string(),
        },
        WhaleEvent {
            tx_hash: "0xdef".to_string(),
            wallet: "0xWhale2".to_string(),
            action: "withdrew".to_string(),
            amount: "1500".to_string(),
            asset: "BTC".to_string(),
            timestamp: "2025-01-01T01:30:00Z".to_string(),
        },
    ]
}

fn sample_chat_history() -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            role: Role::Assistant,
            content: "Whale deposit detected; bias leaning bearish for BTC.".to_string(),
            citations: vec!["evt_123".to_string(), "evt_456".to_string()],
            confidence: Some(0.78),
        },
        ChatMessage {
            role: Role::User,
            content: "Should we hedge our ETH exposure?".to_string(),
            citations: Vec::new(),
            confidence: None,
        },
    ]
}
