//! Benchmarks for formatting and per-key edits
//!
//! Run with: cargo bench

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use delimit_engine::{
    Direction, EditEngine, EditRequest, FieldConfig, InputKey, Preset, Selection,
};

// ============================================================================
// Formatter
// ============================================================================

fn bench_format(c: &mut Criterion) {
    let thousands = EditEngine::new(FieldConfig::preset(Preset::Thousands));
    let serial = EditEngine::new(FieldConfig::preset(Preset::SerialKey));
    let long_payload = "1234567890".repeat(20);

    let mut group = c.benchmark_group("format");

    group.bench_function("rtl_short", |b| {
        b.iter(|| thousands.format(black_box("1234567")))
    });

    group.bench_function("rtl_long", |b| {
        b.iter(|| thousands.format(black_box(&long_payload)))
    });

    group.bench_function("ltr_dirty", |b| {
        b.iter(|| serial.format(black_box("82-741939-7601-9585")))
    });

    group.finish();
}

// ============================================================================
// Edit engine
// ============================================================================

fn bench_handle(c: &mut Criterion) {
    let engine = EditEngine::create(",", 3, Direction::Rtl).unwrap();

    let mut group = c.benchmark_group("handle");

    group.bench_function("insert_middle", |b| {
        let request = EditRequest::new("1,234,567", Selection::caret(4), InputKey::Printable('9'));
        b.iter(|| engine.handle(black_box(&request)))
    });

    group.bench_function("backspace_after_separator", |b| {
        let request = EditRequest::new("1,234,567", Selection::caret(6), InputKey::Delete);
        b.iter(|| engine.handle(black_box(&request)))
    });

    group.bench_function("type_sequence", |b| {
        b.iter(|| {
            let mut buffer = String::new();
            let mut caret = 0;
            for ch in "9876543210".chars() {
                let request =
                    EditRequest::new(&buffer, Selection::caret(caret), InputKey::Printable(ch));
                if let Some(result) = engine.handle(&request).into_result() {
                    buffer = result.buffer;
                    caret = result.caret;
                }
            }
            black_box(buffer)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_format, bench_handle);
criterion_main!(benches);
