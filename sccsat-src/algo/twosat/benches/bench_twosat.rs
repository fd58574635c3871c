use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use twosat::TwoSat;

fn rand_cnf<R: Rng>(
    len: usize,
    m: usize,
    rng: &mut R,
) -> Vec<[(usize, bool); 2]> {
    (0..m)
        .map(|_| {
            [
                (rng.gen_range(0..len), rng.gen()),
                (rng.gen_range(0..len), rng.gen()),
            ]
        })
        .collect()
}

fn bench_twosat(c: &mut Criterion) {
    let mut group = c.benchmark_group("twosat");

    let mut rng = ChaCha20Rng::from_seed([
        0xD4, 0x1B, 0x6E, 0x93, 0x08, 0xC7, 0x5A, 0x2F, 0xE1, 0x74, 0x3D, 0xB6,
        0x0F, 0x98, 0x45, 0xAC, 0x27, 0xF3, 0x6A, 0x11, 0x8E, 0xD0, 0x59, 0xB2,
        0x3C, 0x87, 0xE5, 0x40, 0x9B, 0x16, 0x7D, 0xC8,
    ]);

    for len in [10_usize.pow(4), 10_usize.pow(5)] {
        // around the satisfiability threshold of random 2-SAT
        let cnf = rand_cnf(len, len, &mut rng);
        group.bench_function(BenchmarkId::new("random", len), |b| {
            b.iter(|| {
                let mut ts = TwoSat::new(len);
                for &[(x, not_x), (y, not_y)] in &cnf {
                    ts.add_clause(x, y, not_x, not_y);
                }
                black_box(ts.assignment())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_twosat);
criterion_main!(benches);
