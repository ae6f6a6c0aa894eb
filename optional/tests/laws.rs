// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

use std::cell::Cell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, rng};
use retro_optional::{Error, Optional};

const ROUNDS: usize = 256;

fn seeded_rng() -> StdRng {
    let _ = env_logger::Builder::new().is_test(true).try_init();

    // read OPTIONAL_TEST_SEED from the environment. If it's there, parse it into a u64.
    let seed = std::env::var("OPTIONAL_TEST_SEED")
        .ok()
        .map_or_else(
            || None,
            |s| Some(str::parse(&s).expect("couldn't parse OPTIONAL_TEST_SEED; must be a u64")),
        )
        .unwrap_or_else(|| rng().random());

    // the test framework will only render this in verbose mode or if the test fails
    eprintln!("Seed {seed}: to rerun with this data, export OPTIONAL_TEST_SEED={seed}");
    StdRng::seed_from_u64(seed)
}

fn hash_of<H: Hash>(value: &H) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn wrap_then_get_returns_input() {
    let mut r = seeded_rng();
    for _ in 0..ROUNDS {
        let v: i64 = r.random();
        let wrapped = Optional::wrap(Some(v));
        assert!(wrapped.is_present());
        assert_eq!(wrapped.get(), Ok(v));
    }
    assert!(!Optional::<i64>::wrap(None).is_present());
    assert_eq!(Optional::<i64>::wrap(None).get(), Err(Error::ElementNotFound));
}

#[test]
fn map_matches_wrapping_the_transformed_value() {
    let mut r = seeded_rng();
    let f = |x: i64| x.wrapping_mul(31).wrapping_add(7);
    for _ in 0..ROUNDS {
        let v: i64 = r.random();
        assert_eq!(Optional::wrap(Some(v)).map(f), Optional::wrap(Some(f(v))));
    }
}

#[test]
fn flat_map_is_the_transform_result() {
    let mut r = seeded_rng();
    let f = |x: u32| {
        if x % 2 == 0 {
            Optional::present(x / 2)
        } else {
            Optional::absent()
        }
    };
    for _ in 0..ROUNDS {
        let v: u32 = r.random();
        assert_eq!(Optional::present(v).flat_map(f), f(v));
    }
}

#[test]
fn filter_keeps_exactly_accepted_values() {
    let mut r = seeded_rng();
    let threshold: u8 = r.random();
    for _ in 0..ROUNDS {
        let v: u8 = r.random();
        let filtered = Optional::present(v).filter(|x| *x > threshold);
        if v > threshold {
            assert_eq!(filtered, Optional::present(v));
        } else {
            assert_eq!(filtered, Optional::absent());
        }
    }
}

#[test]
fn absent_never_invokes_caller_functions() {
    let calls = Cell::new(0usize);
    let probe = || calls.set(calls.get() + 1);

    let absent = Optional::<u64>::absent();
    assert!(absent.map(|x| {
        probe();
        x
    })
    .is_absent());
    assert!(absent
        .filter_map(|x| {
            probe();
            Some(x)
        })
        .is_absent());
    assert!(absent
        .flat_map(|x| {
            probe();
            Optional::present(x)
        })
        .is_absent());
    assert!(absent
        .filter(|_| {
            probe();
            true
        })
        .is_absent());
    absent.do_if_present(|_| probe());
    assert_eq!(calls.get(), 0);

    // the fallbacks are the only closures that run on absent, once each
    assert_eq!(
        absent.or_else_get(|| {
            probe();
            1
        }),
        1
    );
    assert_eq!(
        absent.or_else_throw(|| {
            probe();
            "missing"
        }),
        Err("missing")
    );
    assert_eq!(calls.get(), 2);
}

#[test]
fn present_never_invokes_fallbacks() {
    let mut r = seeded_rng();
    let calls = Cell::new(0usize);
    for _ in 0..ROUNDS {
        let v: i32 = r.random();
        let opt = Optional::present(v);
        assert_eq!(opt.or_else(v.wrapping_add(1)), v);
        assert_eq!(
            opt.or_else_get(|| {
                calls.set(calls.get() + 1);
                0
            }),
            v
        );
        assert_eq!(
            opt.or_else_throw(|| {
                calls.set(calls.get() + 1);
                "unused"
            }),
            Ok(v)
        );
    }
    assert_eq!(calls.get(), 0);
}

#[test]
fn equal_optionals_hash_equally() {
    let mut r = seeded_rng();
    for _ in 0..ROUNDS {
        let v: u64 = r.random();
        let text = format!("{v:x}");
        let lhs = Optional::present(text.clone());
        let rhs = Optional::wrap(Some(text));
        assert_eq!(lhs, rhs);
        assert_eq!(hash_of(&lhs), hash_of(&rhs));
        assert_ne!(lhs, Optional::absent());
    }
    assert_eq!(
        hash_of(&Optional::<String>::wrap(None)),
        hash_of(&Optional::<String>::absent())
    );
}
