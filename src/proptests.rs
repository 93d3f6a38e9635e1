use proptest::prelude::*;

use crate::solver::{mcss_cubic, mcss_linear, mcss_quadratic, McssResult};

fn small_sequence() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-10i32..10, 0..40)
}

proptest! {
    #[test]
    fn sums_agree(seq in small_sequence()) {
        let cubic = mcss_cubic(&seq);
        let quadratic = mcss_quadratic(&seq);
        let linear = mcss_linear(&seq);

        prop_assert_eq!(cubic.sum(), quadratic.sum());
        prop_assert_eq!(quadratic.sum(), linear.sum());
    }

    #[test]
    fn intervals_add_up(seq in small_sequence()) {
        for result in [mcss_cubic(&seq), mcss_quadratic(&seq), mcss_linear(&seq)] {
            prop_assert!(result.verify(&seq), "{} on {:?}", result, seq);
            prop_assert!(result.sum() >= 0);
        }
    }

    #[test]
    fn quadratic_keeps_cubic_tie_break(seq in small_sequence()) {
        prop_assert_eq!(mcss_quadratic(&seq), mcss_cubic(&seq));
    }

    #[test]
    fn non_positive_input_gives_empty_result(seq in prop::collection::vec(-10i32..=0, 0..40)) {
        for result in [mcss_cubic(&seq), mcss_quadratic(&seq), mcss_linear(&seq)] {
            prop_assert_eq!(result, McssResult::EMPTY);
        }
    }

    #[test]
    fn sum_dominates_every_interval(seq in prop::collection::vec(-1000i32..1000, 1..25)) {
        let best = mcss_linear(&seq).sum();

        for start in 0..seq.len() {
            for end in start..seq.len() {
                let sum: i64 = seq[start..=end].iter().map(|&v| v as i64).sum();
                prop_assert!(sum <= best);
            }
        }
    }
}
