use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cmaes_elementary::{
    rng::RandomNumberGenerator,
    strategy::{Cmaes, CmaesConfig, Optimizer},
    DVector,
};

fn sphere(x: &DVector<f64>) -> f64 {
    x.norm_squared()
}

fn bench_advance_generation(c: &mut Criterion) {
    let cmaes = Cmaes::new();

    let mut group = c.benchmark_group("advance_generation");
    for dimension in [2, 10, 50, 100].iter() {
        let config = CmaesConfig::new(*dimension / 2 + 1, *dimension + 4);
        let initial = vec![DVector::from_element(*dimension, 1.0)];

        group.bench_function(&format!("ten_generations_{}", dimension), |b| {
            b.iter(|| {
                let mut state = cmaes.create_state(&config, &sphere, &initial).unwrap();
                let mut population = initial.clone();
                let mut rng = RandomNumberGenerator::from_seed(42);

                for _ in 0..10 {
                    let terminate = cmaes.advance_generation(
                        black_box(&sphere),
                        &mut state,
                        &mut population,
                        black_box(&config),
                        &mut rng,
                    );
                    assert!(!terminate);
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_advance_generation);
criterion_main!(benches);
