//! Counting throughput benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use textmeter::{CountType, RuleOverrides, RuleSet, WordCounter, count, count_all};

const PARAGRAPH: &str = "<p>The quick&nbsp;brown fox &mdash; jumps over the <em>lazy</em> dog. \
                         <!-- editor note -->[gallery ids=\"4,5\"] Numbers like 3.14 stay; \
                         emoji 🎉 count once.</p>\n";

fn plain_text(c: &mut Criterion) {
    let short = "Hello, World! This is a test string.";
    c.bench_function("count_words_short", |b| {
        b.iter(|| count(black_box(short), CountType::Words));
    });

    let long = "lorem ipsum dolor sit amet ".repeat(400);
    c.bench_function("count_words_plain_10k", |b| {
        b.iter(|| count(black_box(&long), CountType::Words));
    });
    c.bench_function("count_chars_plain_10k", |b| {
        b.iter(|| count(black_box(&long), CountType::CharactersIncludingSpaces));
    });
}

fn rich_text(c: &mut Criterion) {
    let doc = PARAGRAPH.repeat(100);
    let counter = WordCounter::new(&RuleOverrides::new().with_shortcodes(["gallery"])).unwrap();

    for ty in CountType::ALL {
        c.bench_function(&format!("count_rich_{ty}"), |b| {
            b.iter(|| counter.count(black_box(&doc), ty));
        });
    }

    c.bench_function("count_all_rich", |b| {
        b.iter(|| count_all(black_box(&doc), counter.rules()));
    });
}

fn resolve(c: &mut Criterion) {
    let overrides = RuleOverrides::new()
        .with_rule(textmeter::Rule::Connector, r"--|\x{2014}|\x{2013}")
        .with_shortcodes(["gallery", "caption", "audio", "video"]);

    c.bench_function("resolve_with_overrides", |b| {
        b.iter(|| RuleSet::resolve(black_box(&overrides)));
    });
    c.bench_function("resolve_defaults", |b| {
        b.iter(|| RuleSet::resolve(black_box(&RuleOverrides::new())));
    });
}

criterion_group!(benches, plain_text, rich_text, resolve);
criterion_main!(benches);
