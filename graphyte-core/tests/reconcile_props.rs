use graphyte_core::timeseries::reconcile::{common_step, gcd, plan};
use graphyte_core::{Aggregation, GraphyteError, ResamplePlan};
use proptest::prelude::*;

fn naive_lcm(steps: &[i64]) -> i64 {
    let max = steps.iter().copied().max().unwrap_or(1);
    let mut m = max;
    while !steps.iter().all(|s| m % s == 0) {
        m += max;
    }
    m
}

proptest! {
    #[test]
    fn lcm_is_permutation_invariant(steps in proptest::collection::vec(1i64..200, 1..6), seed in any::<u64>()) {
        let base = common_step(steps.iter().copied()).unwrap();
        let mut shuffled = steps.clone();
        // Deterministic rotation + reversal driven by the seed.
        let k = usize::try_from(seed % steps.len() as u64).unwrap();
        shuffled.rotate_left(k);
        if seed % 2 == 0 {
            shuffled.reverse();
        }
        prop_assert_eq!(common_step(shuffled).unwrap(), base);
    }

    #[test]
    fn lcm_matches_definition(steps in proptest::collection::vec(1i64..60, 1..5)) {
        let l = common_step(steps.iter().copied()).unwrap();
        prop_assert_eq!(l, naive_lcm(&steps));
        for s in &steps {
            prop_assert_eq!(l % s, 0);
        }
    }
}

#[test]
fn gcd_basics() {
    assert_eq!(gcd(60, 90), 30);
    assert_eq!(gcd(7, 13), 1);
    assert_eq!(gcd(10, 0), 10);
}

#[test]
fn non_positive_step_is_rejected() {
    assert!(matches!(
        common_step([60, -60]),
        Err(GraphyteError::IncompatibleFrequencies(_))
    ));
}

#[test]
fn overflowing_lcm_is_rejected() {
    let big = i64::MAX / 2 + 1;
    assert!(matches!(
        common_step([big, big - 1]),
        Err(GraphyteError::IncompatibleFrequencies(_))
    ));
}

#[test]
fn equal_steps_keep() {
    let p = plan(&[60, 60, 60], None, Aggregation::Mean).unwrap();
    assert_eq!(p, ResamplePlan::Keep { step: 60 });
}

#[test]
fn differing_steps_go_to_the_largest() {
    let p = plan(&[60, 120, 40], None, Aggregation::Sum).unwrap();
    assert_eq!(
        p,
        ResamplePlan::Resample {
            step: 120,
            aggregation: Aggregation::Sum
        }
    );
}

#[test]
fn explicit_frequency_applies_only_when_it_covers_common_step() {
    let ok = plan(&[60, 120], Some(600), Aggregation::Max).unwrap();
    assert_eq!(ok.step(), 600);
    assert_eq!(
        plan(&[60, 90], Some(120), Aggregation::Mean).unwrap(),
        ResamplePlan::Resample {
            step: 90,
            aggregation: Aggregation::Mean
        }
    );
    assert_eq!(
        plan(&[300], Some(60), Aggregation::Mean).unwrap(),
        ResamplePlan::Keep { step: 300 }
    );
    assert!(matches!(
        plan(&[60], Some(0), Aggregation::Mean),
        Err(GraphyteError::IncompatibleFrequencies(_))
    ));
}

#[test]
fn empty_step_set() {
    assert!(matches!(
        plan(&[], None, Aggregation::Mean),
        Err(GraphyteError::EmptySeriesSet)
    ));
}
