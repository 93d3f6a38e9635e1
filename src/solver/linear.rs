use super::{McssResult, Solver};
use crate::common::ChangeMinMax as _;

pub struct LinearSolver;

impl Solver for LinearSolver {
    fn label(&self) -> &'static str {
        "linear"
    }

    fn complexity(&self) -> &'static str {
        "O(N^1)"
    }

    fn solve(&self, seq: &[i32]) -> McssResult {
        mcss_linear(seq)
    }
}

/// Single pass over `seq`.
///
/// The running window `[candidate_start, end]` is extended one element at a
/// time. Whenever its sum drops below zero it cannot help as a prefix of any
/// later window, so the window restarts right after the current position.
pub fn mcss_linear(seq: &[i32]) -> McssResult {
    let mut best = McssResult::EMPTY;
    let mut sum = 0i64;
    let mut candidate_start = 0;

    for (end, &v) in seq.iter().enumerate() {
        sum += v as i64;

        if best.sum.change_max(sum) {
            best.start = candidate_start;
            best.end = end;
        } else if sum < 0 {
            candidate_start = end + 1;
            sum = 0;
        }
    }

    best
}
