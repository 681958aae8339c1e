use chabeau_emoji::EmojiCatalog;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn make_message(words: usize, base: &str) -> String {
    let mut message = String::new();
    for i in 0..words {
        if i > 0 {
            message.push(' ');
        }
        message.push_str(base);
    }
    message
}

fn bench_parse(c: &mut Criterion) {
    let catalog = EmojiCatalog::load_bundled().expect("bundled definitions must parse");
    let plain = "lorem ipsum dolor sit amet consectetur";
    let emoji_heavy = "gg \u{1F44D}\u{1F3FD} \u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466} \u{2764}\u{FE0F}\u{1F525}";

    for &words in &[8usize, 64usize] {
        let mut group = c.benchmark_group(format!("parse_words{}", words));
        for (label, base) in [("plain", plain), ("emoji", emoji_heavy)] {
            let message = make_message(words, base);
            group.throughput(Throughput::Bytes(message.len() as u64));
            group.bench_function(BenchmarkId::new(label, words), |b| {
                b.iter(|| catalog.parse(black_box(&message)).count())
            });
        }
        group.finish();
    }
}

fn bench_replace_short_codes(c: &mut Criterion) {
    let catalog = EmojiCatalog::load_bundled().expect("bundled definitions must parse");
    let mut group = c.benchmark_group("replace_short_codes");

    // Mix of known codes, unknown codes and colons that never form tokens.
    let message = make_message(16, ":penguin: at 12:30 :notacode: :thumbsup_tone2:");
    group.throughput(Throughput::Bytes(message.len() as u64));
    group.bench_function("mixed", |b| {
        b.iter(|| catalog.replace_short_codes(black_box(&message)))
    });

    let none = make_message(16, "no tokens in this text at all");
    group.bench_function("no_tokens", |b| {
        b.iter(|| catalog.replace_short_codes(black_box(&none)))
    });
    group.finish();
}

fn bench_load(c: &mut Criterion) {
    c.bench_function("load_bundled", |b| {
        b.iter(|| EmojiCatalog::load_bundled().expect("bundled definitions must parse"))
    });
}

criterion_group!(benches, bench_parse, bench_replace_short_codes, bench_load);
criterion_main!(benches);
