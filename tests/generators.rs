use random_v::lcg;
use random_v::mersenne::{mt19937, mt19937_64};
use random_v::sampler::Random;

const SEED: u64 = 0xdead_beef;

#[test]
fn drivers_through_sampler() {
    // first output of every 64-bit-state driver for the golden seed
    let drivers: [(fn(&mut u64) -> u32, u32); 4] = [
        (lcg::lcg_0, 3664492233),
        (lcg::minstd_rand, 2068214664),
        (lcg::java_util_random, 247989324),
        (lcg::lcg_xor_rot, 2380962238),
    ];

    for (driver, first) in drivers.iter() {
        let mut rng = Random::new(SEED, *driver);
        assert_eq!(rng.generate(), *first);
    }
}

#[test]
fn mersenne_through_sampler() {
    let mut engine = mt19937::Mt19937::default();

    // engines bind to the sampler through an adapter closure that
    // ignores the scalar state slot
    let mut rng = Random::new(0_u64, |_: &mut u64| engine.extract_number());

    let expected = [
        3499211612_u32,
        581869302,
        3890346734,
        3586334585,
        545404204,
        4161255391,
    ];
    for exp in expected.iter() {
        assert_eq!(rng.generate(), *exp);
    }
}

#[test]
fn mersenne_64_bounded_through_sampler() {
    let mut engine = mt19937_64::Mt19937::default();
    let mut rng = Random::new(0_u64, |_: &mut u64| engine.extract_number());

    for _i in 0..100 {
        let r = rng.bounded_rand(1000_u64).unwrap();
        assert!(r < 1000);
    }
}

#[test]
fn mersenne_determinism_across_boundary() {
    let mut first = mt19937::Mt19937::new(42);
    let mut second = mt19937::Mt19937::new(42);

    // far enough to cross the regeneration boundary more than once
    for _i in 0..900 {
        assert_eq!(first.extract_number(), second.extract_number());
    }
}

#[test]
fn scalar_driver_determinism() {
    let mut first = Random::new(SEED, lcg::lcg_xor_rot as fn(&mut u64) -> u32);
    let mut second = Random::new(SEED, lcg::lcg_xor_rot as fn(&mut u64) -> u32);

    for _i in 0..256 {
        assert_eq!(first.generate(), second.generate());
    }
}
