//! Benchmarks for pdfoutline extraction performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks run the outline pipeline over synthetic layout documents.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pdfoutline::{LayoutDocument, LayoutLine, LayoutPage, OutlineExtractor};

/// Creates a synthetic layout document with the given number of pages.
fn create_test_document(page_count: usize) -> LayoutDocument {
    let mut doc = LayoutDocument::new();

    for i in 0..page_count {
        let mut page = LayoutPage::new();
        if i == 0 {
            page.add_line(LayoutLine::uniform(
                "Benchmark Annual Report",
                760.0,
                "Helvetica-Bold",
                24.0,
            ));
        }
        page.add_line(LayoutLine::uniform(
            format!("Chapter {}", i + 1),
            720.0,
            "Helvetica-Bold",
            18.0,
        ));
        page.add_line(LayoutLine::uniform(
            format!("Section {}.1", i + 1),
            680.0,
            "Helvetica-Bold",
            14.0,
        ));

        // Body text
        let mut y = 660.0;
        for line in 0..30 {
            page.add_line(LayoutLine::uniform(
                format!("Body line {} of page {} with ordinary prose.", line, i + 1),
                y,
                "Helvetica",
                11.0,
            ));
            y -= 14.0;
        }
        doc.add_page(page);
    }

    doc.with_full_text("Benchmark Annual Report with ordinary English prose.")
}

/// Benchmark end-to-end extraction at various sizes.
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline_extraction");
    let extractor = OutlineExtractor::new();

    for page_count in [1, 10, 50].iter() {
        let doc = create_test_document(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| extractor.extract_document(black_box(&doc)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark language profiling on mixed text.
fn bench_language_detection(c: &mut Criterion) {
    let text = "Kleidung und Textilien. Über die Größe müssen wir sprechen. ".repeat(200);

    c.bench_function("language_detection", |b| {
        b.iter(|| pdfoutline::detect_language(black_box(&text)));
    });
}

criterion_group!(benches, bench_extraction, bench_language_detection);
criterion_main!(benches);
