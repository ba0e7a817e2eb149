//! Dashboard Page
//!
//! Three read-only sections: Open Positions, Bias Snapshot, Recent Whale
//! Events. Each section iterates its input collection in the order
//! received and emits one visual unit per record with the fields
//! verbatim. No filtering, sorting or aggregation happens here; ordering
//! is the provider's responsibility.

use super::{html_escape, shell};
use crate::model::{BiasSnapshot, Position, WhaleEvent};

/// Render the dashboard over the three non-chat collections.
pub fn render(
    positions: &[Position],
    bias: &[BiasSnapshot],
    whale_events: &[WhaleEvent],
) -> String {
    let body = format!(
        r#"<main>
<header>
<h1>Trading Dashboard</h1>
<p>Mocked overview. Wire real-time data once services are available.</p>
</header>
<section id="positions">
<h2>Open Positions</h2>
{positions}
</section>
<section id="bias">
<h2>Bias Snapshot</h2>
{bias}
</section>
<section id="whales">
<h2>Recent Whale Events</h2>
{whales}
</section>
<footer><a href="/">Return home</a></footer>
</main>"#,
        positions = render_positions(positions),
        bias = render_bias(bias),
        whales = render_whale_events(whale_events),
    );

    shell(&body)
}

fn render_positions(positions: &[Position]) -> String {
    let mut html = String::new();
    for position in positions {
        html.push_str(&format!(
            r#"<article class="position">
<h3>{asset}</h3>
<p>{side} @ {entry} &middot; size {size}</p>
<p>P&amp;L: {pnl}</p>
</article>
"#,
            asset = html_escape(&position.asset),
            side = position.side,
            entry = html_escape(&position.entry_price),
            size = html_escape(&position.size),
            pnl = html_escape(&position.pnl),
        ));
    }
    html
}

fn render_bias(bias: &[BiasSnapshot]) -> String {
    if bias.is_empty() {
        return String::new();
    }

    let mut html = String::from("<ul>\n");
    for snapshot in bias {
        html.push_str(&format!(
            "<li><strong>{asset}</strong>: {value} (confidence {confidence})</li>\n",
            asset = html_escape(&snapshot.asset),
            value = html_escape(&snapshot.value),
            confidence = html_escape(&snapshot.confidence),
        ));
    }
    html.push_str("</ul>");
    html
}

fn render_whale_events(events: &[WhaleEvent]) -> String {
    if events.is_empty() {
        return String::new();
    }

    let mut html = String::from("<ul>\n");
    for event in events {
        html.push_str(&format!(
            "<li><span>{wallet}</span> {action} {amount} {asset}<br><small>{timestamp}</small></li>\n",
            wallet = html_escape(&event.wallet),
            action = html_escape(&event.action),
            amount = html_escape(&event.amount),
            asset = html_escape(&event.asset),
            timestamp = html_escape(&event.timestamp),
        ));
    }
    html.push_str("</ul>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{MarketData, SampleData};

    async fn rendered_fixture_dashboard() -> String {
        let provider = SampleData::new();
        render(
            &provider.positions().await,
            &provider.bias_snapshot().await,
            &provider.whale_events().await,
        )
    }

    #[tokio::test]
    async fn one_visual_unit_per_position() {
        let html = rendered_fixture_dashboard().await;
        assert_eq!(html.matches(r#"<article class="position">"#).count(), 2);
    }

    #[tokio::test]
    async fn positions_carry_asset_and_pnl_verbatim() {
        let html = rendered_fixture_dashboard().await;
        assert!(html.contains("BTC-USDT"));
        assert!(html.contains("ETH-USDT"));
        assert!(html.contains("+$1,250"));
        assert!(html.contains("-$320"));
    }

    #[tokio::test]
    async fn bias_section_carries_value_and_confidence() {
        let html = rendered_fixture_dashboard().await;
        assert!(html.contains("<strong>BTC</strong>: +0.35 (confidence 0.82)"));
        assert!(html.contains("<strong>ETH</strong>: -0.15 (confidence 0.64)"));
    }

    #[tokio::test]
    async fn whale_section_carries_all_event_fields() {
        let html = rendered_fixture_dashboard().await;
        for needle in [
            "0xWhale1",
            "deposited",
            "500",
            "2025-01-01T00:00:00Z",
            "0xWhale2",
            "withdrew",
            "1500",
            "2025-01-01T01:30:00Z",
        ] {
            assert!(html.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn empty_collections_render_empty_sections() {
        let html = render(&[], &[], &[]);
        assert!(html.contains("Open Positions"));
        assert!(html.contains("Bias Snapshot"));
        assert!(html.contains("Recent Whale Events"));
        assert!(!html.contains("<article"));
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn position_ordering_is_pass_through() {
        let reversed = vec![
            Position {
                id: "pos-2".to_string(),
                asset: "ETH-USDT".to_string(),
                side: crate::model::Side::Short,
                entry_price: "2300".to_string(),
                size: "5 ETH".to_string(),
                pnl: "-$320".to_string(),
            },
            Position {
                id: "pos-1".to_string(),
                asset: "BTC-USDT".to_string(),
                side: crate::model::Side::Long,
                entry_price: "42500".to_string(),
                size: "0.5 BTC".to_string(),
                pnl: "+$1,250".to_string(),
            },
        ];

        let html = render(&reversed, &[], &[]);
        let eth = html.find("ETH-USDT").unwrap();
        let btc = html.find("BTC-USDT").unwrap();
        assert!(eth < btc);
    }

    #[test]
    fn record_fields_are_escaped() {
        let positions = vec![Position {
            id: "pos-x".to_string(),
            asset: "<script>BTC</script>".to_string(),
            side: crate::model::Side::Long,
            entry_price: "1".to_string(),
            size: "1 BTC".to_string(),
            pnl: "+$0".to_string(),
        }];

        let html = render(&positions, &[], &[]);
        assert!(!html.contains("<script>BTC"));
        assert!(html.contains("&lt;script&gt;BTC"));
    }
}
