pub mod cubic;
pub mod linear;
pub mod quadratic;

use std::fmt::Display;

use clap::ValueEnum;

pub use cubic::{mcss_cubic, CubicSolver};
pub use linear::{mcss_linear, LinearSolver};
pub use quadratic::{mcss_quadratic, QuadraticSolver};

pub trait Solver {
    fn label(&self) -> &'static str;
    fn complexity(&self) -> &'static str;
    fn solve(&self, seq: &[i32]) -> McssResult;
}

/// Best contiguous subsequence found by a solver.
///
/// `start` and `end` are inclusive. When no positive-sum subsequence exists the
/// result is [`McssResult::EMPTY`]: the empty subsequence with sum 0, whose
/// indices carry no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct McssResult {
    start: usize,
    end: usize,
    sum: i64,
}

impl McssResult {
    pub const EMPTY: Self = Self::new(0, 0, 0);

    pub const fn new(start: usize, end: usize, sum: i64) -> Self {
        Self { start, end, sum }
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn end(&self) -> usize {
        self.end
    }

    pub const fn sum(&self) -> i64 {
        self.sum
    }

    pub const fn is_empty(&self) -> bool {
        self.sum == 0
    }

    /// Checks that the elements in `[start, end]` really add up to `sum`.
    pub fn verify(&self, seq: &[i32]) -> bool {
        if self.is_empty() {
            return true;
        }

        match seq.get(self.start..=self.end) {
            Some(run) => run.iter().map(|&v| v as i64).sum::<i64>() == self.sum,
            None => false,
        }
    }
}

impl Display for McssResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sum {} in [{}, {}]", self.sum, self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Cubic,
    Quadratic,
    Linear,
}

impl Algorithm {
    /// Race order: fastest first.
    pub const ALL: [Algorithm; 3] = [Algorithm::Linear, Algorithm::Quadratic, Algorithm::Cubic];

    pub fn solver(&self) -> Box<dyn Solver> {
        match self {
            Algorithm::Cubic => Box::new(CubicSolver),
            Algorithm::Quadratic => Box::new(QuadraticSolver),
            Algorithm::Linear => Box::new(LinearSolver),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMINANT_RUN: [i32; 9] = [-2, 1, -3, 4, -1, 2, 1, -5, 4];

    fn solve_all(seq: &[i32]) -> Vec<McssResult> {
        Algorithm::ALL.iter().map(|a| a.solver().solve(seq)).collect()
    }

    #[test]
    fn all_solvers_find_dominant_run() {
        for result in solve_all(&DOMINANT_RUN) {
            assert_eq!(result, McssResult::new(3, 6, 6));
        }
    }

    #[test]
    fn all_solvers_floor_at_empty_subsequence() {
        for result in solve_all(&[-3, -1, -4]) {
            assert_eq!(result, McssResult::EMPTY);
        }
    }

    #[test]
    fn all_solvers_take_whole_positive_sequence() {
        for result in solve_all(&[1, 2, 3]) {
            assert_eq!(result, McssResult::new(0, 2, 6));
        }
    }

    #[test]
    fn all_solvers_handle_single_element() {
        for result in solve_all(&[5]) {
            assert_eq!(result, McssResult::new(0, 0, 5));
        }
        for result in solve_all(&[-5]) {
            assert_eq!(result.sum(), 0);
        }
    }

    #[test]
    fn all_solvers_handle_empty_input() {
        for result in solve_all(&[]) {
            assert_eq!(result.sum(), 0);
            assert!(result.is_empty());
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        for algorithm in Algorithm::ALL {
            let solver = algorithm.solver();
            assert_eq!(solver.solve(&DOMINANT_RUN), solver.solve(&DOMINANT_RUN));
        }
    }

    #[test]
    fn verify_rejects_wrong_sum() {
        assert!(McssResult::new(3, 6, 6).verify(&DOMINANT_RUN));
        assert!(!McssResult::new(3, 6, 7).verify(&DOMINANT_RUN));
        assert!(!McssResult::new(3, 20, 6).verify(&DOMINANT_RUN));
        assert!(McssResult::EMPTY.verify(&[]));
    }

    #[test]
    fn labels_are_distinct() {
        let labels: Vec<_> = Algorithm::ALL.iter().map(|a| a.solver().complexity()).collect();
        assert_eq!(labels, vec!["O(N^1)", "O(N^2)", "O(N^3)"]);
    }
}
