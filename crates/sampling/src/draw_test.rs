use crate::draw::{
    child_seed, random_float, random_float_unseeded, random_int, random_int_unseeded, random_unit,
    tweak_seed,
};
use crate::seed::Seed;

#[test]
fn test_draws_are_reproducible() {
    let seed = Seed::new(12345);
    assert_eq!(random_unit(seed), random_unit(seed));
    assert_eq!(random_float(0.25, 7.5, seed), random_float(0.25, 7.5, seed));
    assert_eq!(random_int(1, 120, seed), random_int(1, 120, seed));
}

#[test]
fn test_float_stays_in_range() {
    for value in 1..500 {
        let seed = Seed::new(value);
        let x = random_float(2.0, 3.0, seed);
        assert!((2.0..3.0).contains(&x));

        let u = random_unit(seed);
        assert!((0.0..1.0).contains(&u));
    }
}

#[test]
fn test_inverted_float_range() {
    for value in 1..200 {
        let x = random_float(5.0, 1.0, Seed::new(value));
        assert!(x > 1.0 && x <= 5.0);
    }
}

#[test]
fn test_int_is_inclusive_and_order_free() {
    let mut saw_min = false;
    let mut saw_max = false;
    for value in 1..2000 {
        let seed = Seed::new(value);
        let n = random_int(1, 4, seed);
        assert!((1..=4).contains(&n));
        saw_min |= n == 1;
        saw_max |= n == 4;

        assert_eq!(random_int(4, 1, seed), n);
    }
    assert!(saw_min && saw_max);
}

#[test]
fn test_degenerate_int_range() {
    assert_eq!(random_int(3, 3, Seed::new(99)), 3);
}

#[test]
fn test_unseeded_draws_in_range() {
    for _ in 0..100 {
        let x = random_float_unseeded(-1.0, 1.0);
        assert!((-1.0..1.0).contains(&x));
        let n = random_int_unseeded(10, 0);
        assert!((0..=10).contains(&n));
    }
}

#[test]
fn test_tweak_is_deterministic_and_shrinks() {
    for value in [2_u64, 17, 12345, 9_876_543_210] {
        let seed = Seed::new(value);
        let tweaked = tweak_seed(seed);
        assert_eq!(tweaked, tweak_seed(seed));
        assert_eq!(tweaked, seed.tweak());
        assert!(tweaked.value() <= value);
        assert!(tweaked.value() >= 1);
    }
}

#[test]
fn test_tweak_of_one_never_yields_zero() {
    assert_eq!(tweak_seed(Seed::new(1)).value(), 1);
}

#[test]
fn test_unit_draw_matches_chacha_stream() {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    for value in [1, 42, 12345, u64::MAX] {
        let mut rng = ChaChaRng::seed_from_u64(value);
        let expected: f64 = rng.random();
        assert_eq!(random_unit(Seed::new(value)), expected);
    }
}

#[test]
fn test_child_seeds_are_reproducible_and_distinct() {
    let parent = Seed::new(12345);
    assert_eq!(child_seed(parent, 0), child_seed(parent, 0));
    assert_eq!(child_seed(parent, 3), parent.child(3));

    let children: Vec<Seed> = (0..64).map(|i| parent.child(i)).collect();
    for (i, a) in children.iter().enumerate() {
        assert_ne!(*a, parent);
        for b in &children[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_sibling_children_do_not_share_draw_keys() {
    // Offsets up to 1000 key per-entity property draws
    const PROPERTY_OFFSETS: u64 = 1000;
    for value in 1..=200_u64 {
        let parent = Seed::new(value);
        for index in 0..8 {
            let a = parent.child(index).value();
            let b = parent.child(index + 1).value();
            assert!(a.abs_diff(b) > PROPERTY_OFFSETS, "parent {value} child {index}");
            assert!(a.abs_diff(value) > PROPERTY_OFFSETS, "parent {value} child {index}");
        }
    }
}
