//! Benchmarks for note store operations.
//!
//! Run with: cargo bench --bench store_benchmarks

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use qnote::domain::{Note, parse_tag_list};
use qnote::store::{NoteStore, SqliteStore};

// =============================================================================
// Test Data Generation
// =============================================================================

/// Tags cycled across generated notes
const TAGS: &[&str] = &[
    "#work",
    "#personal",
    "#todo",
    "#reference",
    "#rust",
    "#reading",
];

/// Sample words for generating note content
const WORDS: &[&str] = &[
    "note", "draft", "meeting", "reminder", "project", "review", "question", "idea", "summary",
    "followup", "deadline", "reference",
];

fn generate_content(seed: usize) -> String {
    let title: Vec<&str> = (0..4).map(|i| WORDS[(seed + i) % WORDS.len()]).collect();
    let body: Vec<&str> = (0..40)
        .map(|i| WORDS[(seed * 7 + i) % WORDS.len()])
        .collect();
    format!("{}\n\n{}", title.join(" "), body.join(" "))
}

fn generate_note(seed: usize) -> Note {
    let tags = parse_tag_list(TAGS[seed % TAGS.len()]).unwrap();
    Note::create(generate_content(seed), tags, 64).unwrap()
}

fn populated_store(count: usize) -> SqliteStore {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.ensure_notebook("inbox").unwrap();
    for seed in 0..count {
        store.create_note(&generate_note(seed), "inbox").unwrap();
    }
    store
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_create_notes(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_notes");
    for count in [100, 500] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| populated_store(count));
        });
    }
    group.finish();
}

fn bench_list_notebook(c: &mut Criterion) {
    let store = populated_store(500);
    c.bench_function("list_notebook_500", |b| {
        b.iter(|| store.notes_in_notebook("inbox", None).unwrap());
    });
}

fn bench_search_by_tags(c: &mut Criterion) {
    let store = populated_store(500);
    let tags = parse_tag_list("#work").unwrap();
    c.bench_function("search_by_tags_500", |b| {
        b.iter(|| store.find_by_tags(&tags).unwrap());
    });
}

fn bench_search_by_content(c: &mut Criterion) {
    let store = populated_store(500);
    c.bench_function("search_by_content_500", |b| {
        b.iter(|| store.find_by_content("deadline").unwrap());
    });
}

criterion_group!(
    benches,
    bench_create_notes,
    bench_list_notebook,
    bench_search_by_tags,
    bench_search_by_content
);
criterion_main!(benches);
