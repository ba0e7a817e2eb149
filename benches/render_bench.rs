//! Benchmarks for BiasGPT page rendering
//!
//! Run with: cargo bench

use biasgpt::model::{BiasSnapshot, ChatMessage, Position, Role, Side, WhaleEvent};
use biasgpt::pages;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn create_positions(count: usize) -> Vec<Position> {
    (0..count)
        .map(|i| Position {
            id: format!("pos-{i}"),
            asset: "BTC-USDT".to_string(),
            side: if i % 2 == 0 { Side::Long } else { Side::Short },
            entry_price: "42500".to_string(),
            size: "0.5 BTC".to_string(),
            pnl: "+$1,250".to_string(),
        })
        .collect()
}

fn create_whale_events(count: usize) -> Vec<WhaleEvent> {
    (0..count)
        .map(|i| WhaleEvent {
            tx_hash: format!("0x{i:04x}"),
            wallet: format!("0xWhale{i}"),
            action: "deposited".to_string(),
            amount: "500".to_string(),
            asset: "ETH".to_string(),
            timestamp: "2025-01-01T00:00:00Z".to_string(),
        })
        .collect()
}

fn create_transcript(count: usize) -> Vec<ChatMessage> {
    (0..count)
        .map(|i| {
            if i % 2 == 0 {
                ChatMessage {
                    role: Role::Assistant,
                    content: "Whale deposit detected; bias leaning bearish for BTC.".to_string(),
                    citations: vec![format!("evt_{i}")],
                    confidence: Some(0.78),
                }
            } else {
                ChatMessage::user("Should we hedge our ETH exposure?")
            }
        })
        .collect()
}

fn bench_dashboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard");

    let bias = vec![BiasSnapshot {
        asset: "BTC".to_string(),
        value: "+0.35".to_string(),
        confidence: "0.82".to_string(),
    }];

    for size in [10, 100, 1000] {
        let positions = create_positions(size);
        let events = create_whale_events(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("render_{}", size), |b| {
            b.iter(|| {
                pages::dashboard::render(
                    black_box(&positions),
                    black_box(&bias),
                    black_box(&events),
                )
            })
        });
    }

    group.finish();
}

fn bench_chat(c: &mut Criterion) {
    let mut group = c.benchmark_group("chat");

    for size in [10, 100, 1000] {
        let transcript = create_transcript(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("render_{}", size), |b| {
            b.iter(|| pages::chat::render(black_box(&transcript)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dashboard, bench_chat);
criterion_main!(benches);
