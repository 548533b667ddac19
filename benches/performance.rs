use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ledger_sheets::{Fields, Ledger, ReportRenderer, Schema};

fn build_sample_ledger(record_count: usize) -> Ledger {
    let mut ledger = Ledger::new(Schema::raw_products());

    for idx in 0..record_count {
        ledger.add(
            Fields::new()
                .with("date", format!("2025-01-{:02}", idx % 28 + 1))
                .with("product", format!("Cane batch {idx}"))
                .with("quantity", (idx % 50).to_string())
                .with("rate", "310")
                .with("amount", ((idx % 50) * 310).to_string()),
        );
    }

    ledger
}

fn bench_render(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));
    let renderer = ReportRenderer::default();

    c.bench_function("render_10k", |b| {
        b.iter(|| {
            let document = renderer.render_ledger(&ledger);
            black_box(document);
        })
    });
}

fn bench_ledger_churn(c: &mut Criterion) {
    c.bench_function("add_remove_1k", |b| {
        b.iter(|| {
            let mut ledger = build_sample_ledger(1_000);
            let ids: Vec<_> = ledger.iter().step_by(2).map(|record| record.id()).collect();
            for id in ids {
                ledger.remove(id);
            }
            black_box(ledger.len());
        })
    });
}

criterion_group!(benches, bench_render, bench_ledger_churn);
criterion_main!(benches);
