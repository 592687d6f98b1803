// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for viewer state transitions.
//!
//! Measures the performance of:
//! - Page input validation
//! - Navigation through a long document (next + render completion)
//! - Zoom changes with superseded render completions

use criterion::{criterion_group, criterion_main, Criterion};
use folio::domain::{validate_page_input, DocumentMetadata, PageCount, RenderedPage};
use folio::ui::viewer::{DocumentViewer, Effect};
use std::hint::black_box;

const PAGES: u32 = 500;

fn first_render(effect: &Effect) -> Option<&folio::domain::RenderRequest> {
    match effect {
        Effect::RenderPage(request) => Some(request),
        Effect::Batch(effects) => effects.iter().find_map(first_render),
        _ => None,
    }
}

/// A viewer with a `PAGES`-page document whose first page is displayed.
fn loaded_viewer() -> DocumentViewer {
    let mut viewer = DocumentViewer::default();
    let Effect::LoadMetadata { id, .. } = viewer.load_document("bench.pdf") else {
        unreachable!("opening a valid url requests metadata");
    };
    let effect = viewer.on_metadata_loaded(id, Ok(DocumentMetadata::new(PAGES)));
    if let Some(request) = first_render(&effect).cloned() {
        viewer.on_page_rendered(request.id, Ok(RenderedPage::new(request.key, 1, 1, vec![0_u8])));
    }
    viewer
}

fn bench_validate_page_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer_transitions");
    let total = PageCount::new(PAGES);

    group.bench_function("validate_page_input", |b| {
        b.iter(|| {
            for text in ["1", " 250 ", "501", "abc", "7.5"] {
                let _ = black_box(validate_page_input(black_box(text), total));
            }
        });
    });

    group.finish();
}

/// Walks the whole document page by page, completing every render.
fn bench_navigate_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer_transitions");

    group.bench_function("navigate_document", |b| {
        b.iter(|| {
            let mut viewer = loaded_viewer();
            while viewer.can_go_next() {
                let effect = viewer.next_page();
                if let Some(request) = first_render(&effect).cloned() {
                    viewer.on_page_rendered(
                        request.id,
                        Ok(RenderedPage::new(request.key, 1, 1, vec![0_u8])),
                    );
                }
            }
            black_box(viewer.current_page());
        });
    });

    group.finish();
}

/// Cycles through every zoom level, completing renders in reverse order so
/// all but the newest are discarded.
fn bench_superseded_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer_transitions");

    group.bench_function("superseded_zoom", |b| {
        let levels: Vec<_> = DocumentViewer::default().zoom_levels().iter().collect();
        b.iter(|| {
            let mut viewer = loaded_viewer();
            let requests: Vec<_> = levels
                .iter()
                .rev()
                .filter_map(|level| first_render(&viewer.set_zoom(*level)).cloned())
                .collect();
            for request in requests.iter().rev() {
                viewer.on_page_rendered(
                    request.id,
                    Ok(RenderedPage::new(request.key, 1, 1, vec![0_u8])),
                );
            }
            black_box(viewer.rendered_zoom());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_validate_page_input,
    bench_navigate_document,
    bench_superseded_zoom
);
criterion_main!(benches);
