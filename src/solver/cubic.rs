use super::{McssResult, Solver};
use crate::common::ChangeMinMax as _;

pub struct CubicSolver;

impl Solver for CubicSolver {
    fn label(&self) -> &'static str {
        "cubic"
    }

    fn complexity(&self) -> &'static str {
        "O(N^3)"
    }

    fn solve(&self, seq: &[i32]) -> McssResult {
        mcss_cubic(seq)
    }
}

/// Brute force: every `[start, end]` interval is summed from scratch.
pub fn mcss_cubic(seq: &[i32]) -> McssResult {
    let mut best = McssResult::EMPTY;

    for start in 0..seq.len() {
        for end in start..seq.len() {
            let mut sum = 0i64;

            for &v in &seq[start..=end] {
                sum += v as i64;
            }

            if best.sum.change_max(sum) {
                best.start = start;
                best.end = end;
            }
        }
    }

    best
}
