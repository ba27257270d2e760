use criterion::{black_box, criterion_group, criterion_main, Criterion};
use panel_detector::gutter::GutterClassifier;
use panel_detector::image::ImageRgba8;
use panel_detector::segments::{extract_components_with, SegmentWorkspace};
use panel_detector::{PanelDetector, PanelParams};

/// A 3x4 grid of dark panels on white, roughly a scanned page at low DPI.
fn synthetic_page(width: usize, height: usize) -> Vec<u8> {
    let gutter = 24;
    let (cols, rows) = (3, 4);
    let panel_w = (width - gutter * (cols + 1)) / cols;
    let panel_h = (height - gutter * (rows + 1)) / rows;
    let mut buf = [255u8; 4].repeat(width * height);
    for r in 0..rows {
        for c in 0..cols {
            let x0 = gutter + c * (panel_w + gutter);
            let y0 = gutter + r * (panel_h + gutter);
            for y in y0..y0 + panel_h {
                for x in x0..x0 + panel_w {
                    let i = (y * width + x) * 4;
                    buf[i..i + 3].copy_from_slice(&[(x % 200) as u8, (y % 180) as u8, 60]);
                }
            }
        }
    }
    buf
}

fn benchmark_segmentation(c: &mut Criterion) {
    let (w, h) = (1200, 1800);
    let buf = synthetic_page(w, h);
    let Ok(img) = ImageRgba8::packed(w, h, &buf) else {
        return;
    };

    let mut workspace = SegmentWorkspace::new();
    c.bench_function("extract_components_1200x1800", |b| {
        b.iter(|| {
            black_box(extract_components_with(
                black_box(&img),
                GutterClassifier::default(),
                &mut workspace,
            ))
        })
    });

    let mut detector = PanelDetector::new(PanelParams::default());
    c.bench_function("detect_panels_1200x1800", |b| {
        b.iter(|| black_box(detector.process(black_box(&img))))
    });
}

criterion_group!(benches, benchmark_segmentation);
criterion_main!(benches);
