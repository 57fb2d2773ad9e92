use criterion::{Criterion, black_box, criterion_group, criterion_main};
use markup_core::{MarkerKind, toggle_marker};
use markup_core_highlight::{SpanExtractor, StyleTheme, render_overlay};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build a markup-heavy document of roughly `words` words, deterministic across runs.
fn build_document(words: usize) -> String {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut text = String::new();

    for i in 0..words {
        match i % 37 {
            0 => text.push_str("**bold words** "),
            5 => text.push_str("~~slanted~~ "),
            11 => text.push_str("--struck-- "),
            17 => text.push_str("``mono`` "),
            23 => text.push_str("#tagged "),
            29 => text.push_str("\n## Section heading\n"),
            _ => {
                for _ in 0..rng.gen_range(2..10) {
                    text.push(rng.gen_range(b'a'..=b'z') as char);
                }
                text.push(' ');
            }
        }
    }

    text
}

fn bench_extract(c: &mut Criterion) {
    let extractor = SpanExtractor::new().unwrap();
    let doc = build_document(2_000);

    c.bench_function("extract_full_document", |b| {
        b.iter(|| extractor.extract(black_box(&doc)))
    });

    let spans = extractor.extract(&doc);
    let theme = StyleTheme::default();
    c.bench_function("render_overlay", |b| {
        b.iter(|| render_overlay(black_box(&spans), &theme))
    });
}

fn bench_toggle(c: &mut Criterion) {
    let doc = build_document(2_000);
    let bold = MarkerKind::Bold.definition();
    let mid = doc.chars().count() / 2;

    c.bench_function("toggle_mid_document", |b| {
        b.iter(|| toggle_marker(black_box(&doc), mid, mid + 12, &bold))
    });
}

criterion_group!(benches, bench_extract, bench_toggle);
criterion_main!(benches);
