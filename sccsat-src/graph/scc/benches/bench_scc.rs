use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use scc::SccGraph;

fn path(n: usize) -> SccGraph {
    let mut g = SccGraph::new(n);
    for i in 1..n {
        g.add_edge(i - 1, i);
    }
    g
}

fn random<R: Rng>(n: usize, m: usize, rng: &mut R) -> SccGraph {
    let mut g = SccGraph::new(n);
    for _ in 0..m {
        g.add_edge(rng.gen_range(0..n), rng.gen_range(0..n));
    }
    g
}

fn bench_scc(c: &mut Criterion) {
    let mut group = c.benchmark_group("scc");

    let mut rng = ChaCha20Rng::from_seed([
        0x3A, 0x91, 0x0C, 0xE7, 0x52, 0x1F, 0xB8, 0x64, 0xD9, 0x07, 0x4E, 0xA2,
        0x6B, 0xF0, 0x15, 0xC3, 0x88, 0x2D, 0x79, 0xE4, 0x0B, 0x56, 0xAF, 0x31,
        0xCC, 0x47, 0x9E, 0x12, 0x6D, 0xB5, 0xF8, 0x20,
    ]);

    for n in [10_usize.pow(4), 10_usize.pow(5), 10_usize.pow(6)] {
        let g = path(n);
        group.bench_function(BenchmarkId::new("path", n), |b| {
            b.iter(|| black_box(g.find_sccs()))
        });

        let g = random(n, 2 * n, &mut rng);
        group.bench_function(BenchmarkId::new("random", n), |b| {
            b.iter(|| black_box(g.find_sccs()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scc);
criterion_main!(benches);
