// Benchmarks for the editing operations on a long dictated buffer
use criterion::{criterion_group, criterion_main, Criterion};
use dictation_engine::{
    get_replace_phrase_data, nav_next_sent, nav_prev_sent, select_between, smart_spacing,
    LocaleInfo,
};
use std::hint::black_box;

fn long_text() -> String {
    "The quick brown fox jumps over the lazy dog. ".repeat(200)
}

fn bench_phrase_lookup(c: &mut Criterion) {
    let text = long_text();
    let caret = text.chars().count() as isize;

    c.bench_function("get_replace_phrase_data/first_word", |b| {
        // Worst case: the only match sits at the very start
        let text = format!("Hello {}", text);
        b.iter(|| get_replace_phrase_data(black_box(&text), black_box(caret), black_box("hello")))
    });

    c.bench_function("select_between/closest", |b| {
        b.iter(|| select_between(black_box(&text), black_box(caret), "quick", "dog"))
    });
}

fn bench_sentence_nav(c: &mut Criterion) {
    let text = long_text();
    let locale = LocaleInfo::default();
    let middle = (text.chars().count() / 2) as isize;

    c.bench_function("nav_next_sent/middle", |b| {
        b.iter(|| nav_next_sent(black_box(&text), black_box(middle), &locale))
    });
    c.bench_function("nav_prev_sent/middle", |b| {
        b.iter(|| nav_prev_sent(black_box(&text), black_box(middle), &locale))
    });
}

fn bench_smart_spacing(c: &mut Criterion) {
    let text = long_text();
    c.bench_function("smart_spacing/end", |b| {
        b.iter(|| smart_spacing(black_box(&text), black_box(isize::MAX), "more words"))
    });
}

criterion_group!(benches, bench_phrase_lookup, bench_sentence_nav, bench_smart_spacing);
criterion_main!(benches);
