use super::{McssResult, Solver};
use crate::common::ChangeMinMax as _;

pub struct QuadraticSolver;

impl Solver for QuadraticSolver {
    fn label(&self) -> &'static str {
        "quadratic"
    }

    fn complexity(&self) -> &'static str {
        "O(N^2)"
    }

    fn solve(&self, seq: &[i32]) -> McssResult {
        mcss_quadratic(seq)
    }
}

/// Same intervals as [`super::mcss_cubic`], but the sum for a fixed `start` is
/// carried forward as `end` advances.
pub fn mcss_quadratic(seq: &[i32]) -> McssResult {
    let mut best = McssResult::EMPTY;

    for start in 0..seq.len() {
        let mut sum = 0i64;

        for end in start..seq.len() {
            sum += seq[end] as i64;

            if best.sum.change_max(sum) {
                best.start = start;
                best.end = end;
            }
        }
    }

    best
}
