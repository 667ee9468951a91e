use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hela_core::converter::{convert, convert_word, transcribe};
use hela_core::lexicon::Lexicon;
use hela_core::rules::RuleTrie;

static INPUTS: &[(&str, &str)] = &[
    ("short", "mama gedhara yanavaa"),
    (
        "medium",
        "mama adha office ekata gihin aavaa eeka nisaa mata nidhimathayi.",
    ),
    (
        "long",
        "mama gedhara gihin bath kanna hadhanavaa. ehenam television balanna \
         hithenavaa. mama adha office ekata gihin aavaa eeka nisaa mata \
         nidhimathayi. passe dhavasaka api kathaa karamu needha?",
    ),
];

fn bench_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert/line");
    for &(label, text) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, text.len()), &text, |b, &text| {
            b.iter(|| convert(text));
        });
    }
    group.finish();
}

fn bench_word(c: &mut Criterion) {
    let rules = RuleTrie::global();
    let mut group = c.benchmark_group("convert/word");
    for word in ["mama", "aayuboovan", "janaadhipathithumaa"] {
        group.bench_with_input(BenchmarkId::new("transcribe", word.len()), &word, |b, &w| {
            b.iter(|| transcribe(rules, w));
        });
    }
    group.finish();
}

fn bench_boundary(c: &mut Criterion) {
    let rules = RuleTrie::global();
    let lexicon = Lexicon::global();
    let mut group = c.benchmark_group("convert/boundary");
    for word in ["mamagedhara", "mamagedharayanavaa"] {
        group.bench_with_input(BenchmarkId::new("split", word.len()), &word, |b, &w| {
            b.iter(|| convert_word(rules, lexicon, w));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_line, bench_word, bench_boundary);
criterion_main!(benches);
