#![cfg(feature = "serde")]

use cmaes_elementary::{
    evolution::{EvolutionOptions, LogLevel},
    rng::RandomNumberGenerator,
    strategy::{Cmaes, CmaesConfig, CmaesState, Optimizer},
    DVector,
};

fn sphere(x: &DVector<f64>) -> f64 {
    x.norm_squared()
}

#[test]
fn test_state_checkpoint_resumes_identically() {
    let cmaes = Cmaes::new();
    let config = CmaesConfig::new(2, 6);
    let initial = vec![DVector::from_vec(vec![1.0, -2.0, 0.5])];
    let mut state = cmaes.create_state(&config, &sphere, &initial).unwrap();
    let mut population = initial.clone();
    let mut rng = RandomNumberGenerator::from_seed(4);

    for _ in 0..10 {
        cmaes.advance_generation(&sphere, &mut state, &mut population, &config, &mut rng);
    }

    let json = serde_json::to_string(&state).unwrap();
    let mut restored: CmaesState = serde_json::from_str(&json).unwrap();

    let mut rng_a = RandomNumberGenerator::from_seed(8);
    let mut rng_b = RandomNumberGenerator::from_seed(8);
    let mut population_b = population.clone();
    cmaes.advance_generation(&sphere, &mut state, &mut population, &config, &mut rng_a);
    cmaes.advance_generation(&sphere, &mut restored, &mut population_b, &config, &mut rng_b);

    assert_eq!(state.generation, restored.generation);
    assert!((state.sigma - restored.sigma).abs() <= 1e-12 * state.sigma);
    assert!((&state.parent - &restored.parent).norm() <= 1e-9);
}

#[test]
fn test_config_keeps_unset_time_constants() {
    let config = CmaesConfig::builder().mu(2).lambda(10).tau_c(30.0).build();

    let json = serde_json::to_string(&config).unwrap();
    let restored: CmaesConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, config);
    assert_eq!(restored.get_tau(), None);
    assert_eq!(restored.get_tau_c(), Some(30.0));
}

#[test]
fn test_options_serialize_log_level() {
    let options = EvolutionOptions::new(50, LogLevel::Minimal, Some(1e-9));

    let json = serde_json::to_string(&options).unwrap();
    let restored: EvolutionOptions = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, options);
}
