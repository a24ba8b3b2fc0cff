use criterion::{Criterion, black_box, criterion_group, criterion_main};
use iso_contour::{ChainBuilder, IsolineConfig, extract_grid_isolines};
use iso_core::GridField;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn synthetic_field(width: usize, height: usize) -> GridField {
    let mut rng = StdRng::seed_from_u64(7);
    let peaks: Vec<(f64, f64, f64)> = (0..12)
        .map(|_| {
            (
                rng.gen_range(0.0..width as f64),
                rng.gen_range(0.0..height as f64),
                rng.gen_range(40.0..160.0),
            )
        })
        .collect();

    GridField::from_fn(width, height, |x, y| {
        let v = peaks
            .iter()
            .map(|&(px, py, s)| {
                let dx = x as f64 - px;
                let dy = y as f64 - py;
                (-(dx * dx + dy * dy) / (s * s)).exp()
            })
            .sum::<f64>();
        Some(v)
    })
}

fn bench_extract(c: &mut Criterion) {
    let field = synthetic_field(1024, 768);
    let levels: Vec<f64> = (1..20).map(|i| i as f64 * 0.1).collect();
    let cfg = IsolineConfig::default();

    c.bench_function("iso_contour_extract_1024x768_19_levels", |b| {
        b.iter(|| {
            let out = extract_grid_isolines(black_box(&field), black_box(&levels), &cfg)
                .expect("grid fits");
            black_box(out.len());
        });
    });
}

fn bench_chain_builder(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let mut edges: Vec<(u32, u32)> = (0..50_000u32).map(|i| (i, i + 1)).collect();
    edges.shuffle(&mut rng);

    c.bench_function("iso_contour_chain_path_50k", |b| {
        b.iter(|| {
            let chains = ChainBuilder::from_edges(black_box(&edges).iter().copied())
                .expect("consistent path");
            black_box(chains.opened.len());
        });
    });
}

/// Every merge joins a fresh three-node chain with the growing path.
fn bench_chain_builder_growing_path(c: &mut Criterion) {
    let n = 50_000u32;
    let mut edges = vec![(n - 1, n)];
    let mut k = n - 1;
    while k >= 2 {
        edges.push((k - 2, k - 1));
        edges.push((k - 1, k));
        k -= 2;
    }

    c.bench_function("iso_contour_chain_growing_path_50k", |b| {
        b.iter(|| {
            let chains = ChainBuilder::from_edges(black_box(&edges).iter().copied())
                .expect("consistent path");
            black_box(chains.opened.len());
        });
    });
}

criterion_group!(
    benches,
    bench_extract,
    bench_chain_builder,
    bench_chain_builder_growing_path
);
criterion_main!(benches);
