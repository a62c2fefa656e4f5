use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::body::{Body, Tier, TIER_FACTOR};

fn star_tree(seed: u64) -> Body {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let mut root = Body::new(TIER_FACTOR * TIER_FACTOR);
    root.split(&mut rng, Tier::Star);
    root
}

fn assert_group_mass(body: &Body) {
    let children_sum: f64 = body.children.iter().map(|c| c.group_mass).sum();
    assert_relative_eq!(
        body.group_mass,
        body.mass + children_sum,
        max_relative = 1e-12
    );
    for child in &body.children {
        assert_group_mass(child);
    }
}

#[test]
fn test_new_derives_radius_and_group_mass() {
    let body = Body::new(27.0);
    assert_relative_eq!(body.radius, 3.0, epsilon = 1e-12);
    assert_eq!(body.group_mass, 27.0);
    assert!(body.children.is_empty());
    assert_eq!(body.orbit_radius, 0.0);
    assert_eq!(body.orbit_velocity, 0.0);
}

#[test]
fn test_group_mass_invariant_holds_everywhere() {
    for seed in 0..20 {
        assert_group_mass(&star_tree(seed));
    }
}

#[test]
fn test_star_hosts_three_to_six_planets() {
    for seed in 0..50 {
        let planets = star_tree(seed).children.len();
        assert!((3..=6).contains(&planets), "{} planets", planets);
    }
}

#[test]
fn test_planets_host_at_most_one_moon() {
    for seed in 0..50 {
        for planet in &star_tree(seed).children {
            assert!(planet.children.len() <= 1);
        }
    }
}

#[test]
fn test_moons_are_leaves() {
    for seed in 0..50 {
        for planet in &star_tree(seed).children {
            for moon in &planet.children {
                assert!(moon.children.is_empty());
            }
        }
    }
}

#[test]
fn test_moon_tier_never_spawns() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    for _ in 0..100 {
        assert_eq!(Tier::Moon.child_count(&mut rng), 0);
    }
}

#[test]
fn test_all_bodies_is_preorder() {
    let root = star_tree(11);

    let mut expected: Vec<*const Body> = vec![&root as *const Body];
    for planet in &root.children {
        expected.push(planet as *const Body);
        for moon in &planet.children {
            expected.push(moon as *const Body);
        }
    }

    let actual: Vec<*const Body> = root
        .all_bodies()
        .iter()
        .map(|b| *b as *const Body)
        .collect();
    assert_eq!(actual, expected);
}
