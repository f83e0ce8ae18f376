use std::collections::HashSet;

use blake3::hash;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use riddler::pumpkin::simulate_game_with_history;
use riddler::race;
use riddler::ruler::CutExperiment;

#[test]
fn elimination_game_is_deterministic() {
    let mut fingerprints = HashSet::new();
    for _ in 0..5 {
        let outcome = simulate_game_with_history(61, 136_232).expect("game runs");
        fingerprints.insert(hash(format!("{outcome:?}").as_bytes()));
    }

    assert_eq!(fingerprints.len(), 1, "outputs diverged across runs");
}

#[test]
fn seeded_ruler_estimate_is_deterministic() {
    let experiment = CutExperiment {
        ruler_length: 12.0,
        slices: 3,
        mark: 6.0,
    };

    let mut fingerprints = HashSet::new();
    for _ in 0..5 {
        let mut rng = ChaCha8Rng::seed_from_u64(538);
        let mean = experiment
            .expected_length(2_000, &mut rng)
            .expect("trials run");
        fingerprints.insert(hash(&mean.to_le_bytes()));
    }

    assert_eq!(fingerprints.len(), 1, "outputs diverged across runs");
}

#[test]
fn seeded_race_estimate_is_deterministic() {
    let mut fingerprints = HashSet::new();
    for _ in 0..5 {
        let mut rng = ChaCha8Rng::seed_from_u64(538);
        let mean = race::expected_score(2_000, &mut rng).expect("trials run");
        fingerprints.insert(hash(&mean.to_le_bytes()));
    }

    assert_eq!(fingerprints.len(), 1, "outputs diverged across runs");
}
