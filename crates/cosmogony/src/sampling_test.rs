use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::sampling::{integer, sawtooth, sum, unit_vector};

#[test]
fn test_integer_stays_in_half_open_range() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    for _ in 0..1_000 {
        let v = integer(&mut rng, 1, 8);
        assert!((1..8).contains(&v));
    }
}

#[test]
fn test_integer_reaches_both_ends() {
    let mut rng = ChaChaRng::seed_from_u64(2);
    let draws: Vec<u64> = (0..1_000).map(|_| integer(&mut rng, 1, 8)).collect();
    assert!(draws.contains(&1));
    assert!(draws.contains(&7));
    assert!(!draws.contains(&8));
}

#[test]
fn test_sawtooth_stays_in_range() {
    let mut rng = ChaChaRng::seed_from_u64(3);
    for _ in 0..1_000 {
        let v = sawtooth(&mut rng, 4);
        assert!((1..=4).contains(&v));
    }
}

#[test]
fn test_sawtooth_weights_proportional_to_value() {
    let mut rng = ChaChaRng::seed_from_u64(4);
    let n = 100_000;
    let mut counts = [0u32; 5];
    for _ in 0..n {
        counts[sawtooth(&mut rng, 4) as usize] += 1;
    }

    // For max = 4 the triangular weights give P(i) = i / 10.
    for (i, &count) in counts.iter().enumerate().skip(1) {
        let observed = count as f64 / n as f64;
        let expected = i as f64 / 10.0;
        assert!(
            (observed - expected).abs() < 0.01,
            "P({}) = {:.3}, expected {:.3}",
            i,
            observed,
            expected
        );
    }
}

#[test]
fn test_sawtooth_two_prefers_two() {
    // max = 2 drives the planet/moon split: P(1) = 1/3, P(2) = 2/3.
    let mut rng = ChaChaRng::seed_from_u64(5);
    let n = 30_000;
    let ones = (0..n).filter(|_| sawtooth(&mut rng, 2) == 1).count();
    let observed = ones as f64 / n as f64;
    assert!((observed - 1.0 / 3.0).abs() < 0.02, "P(1) = {:.3}", observed);
}

#[test]
fn test_sum_stays_within_count_scaled_bounds() {
    let mut rng = ChaChaRng::seed_from_u64(6);
    for _ in 0..1_000 {
        let v = sum(&mut rng, 1, 3, 3);
        assert!((3..=6).contains(&v));
    }
}

#[test]
fn test_unit_vector_has_unit_length() {
    let mut rng = ChaChaRng::seed_from_u64(7);
    for _ in 0..100 {
        let u = unit_vector(&mut rng);
        assert_relative_eq!(u.magnitude(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_draws_reproducible_from_seed() {
    let mut a = ChaChaRng::seed_from_u64(42);
    let mut b = ChaChaRng::seed_from_u64(42);
    for _ in 0..100 {
        assert_eq!(integer(&mut a, 0, 1_000), integer(&mut b, 0, 1_000));
    }
    assert_eq!(unit_vector(&mut a), unit_vector(&mut b));
}
