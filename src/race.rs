use std::{fmt::Display, time::Duration, time::Instant};

use itertools::Itertools;
use log::{debug, warn};
use rand::Rng;

use crate::{
    common::ChangeMinMax as _,
    error::McssError,
    params::Params,
    problem::Sequence,
    solver::{Algorithm, McssResult, Solver},
};

/// One timed solver call.
#[derive(Debug, Clone)]
pub struct RaceRecord {
    algorithm: Algorithm,
    complexity: &'static str,
    result: McssResult,
    elapsed: Duration,
    len: usize,
}

impl RaceRecord {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn result(&self) -> McssResult {
        self.result
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Display for RaceRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MCSS {}: found mcss of {} between indexes {} and {} in {} ms, sequence length was {}",
            self.complexity,
            self.result.sum(),
            self.result.start(),
            self.result.end(),
            self.elapsed.as_millis(),
            self.len
        )
    }
}

pub fn run(algorithm: Algorithm, seq: &[i32]) -> RaceRecord {
    let solver = algorithm.solver();
    let since = Instant::now();
    let result = solver.solve(seq);
    let elapsed = since.elapsed();
    debug!("{} finished in {:?}: {}", solver.label(), elapsed, result);

    RaceRecord {
        algorithm,
        complexity: solver.complexity(),
        result,
        elapsed,
        len: seq.len(),
    }
}

/// The demo race: each algorithm gets its own sequence, sized by [`Params`].
pub struct Race {
    params: Params,
}

impl Race {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    fn len_of(&self, algorithm: Algorithm) -> usize {
        match algorithm {
            Algorithm::Cubic => self.params.cubic_len,
            Algorithm::Quadratic => self.params.quadratic_len,
            Algorithm::Linear => self.params.linear_len,
        }
    }

    pub fn run(&self, rng: &mut impl Rng) -> Result<Vec<RaceRecord>, McssError> {
        // generate everything up front so the timings exclude generation
        let sequences = Algorithm::ALL
            .iter()
            .map(|&a| Sequence::random(self.len_of(a), self.params.max_abs, rng))
            .collect::<Result<Vec<_>, _>>()?;

        let records = Algorithm::ALL
            .iter()
            .zip(sequences.iter())
            .map(|(&a, seq)| run(a, seq))
            .collect();

        Ok(records)
    }
}

/// All three algorithms run against one shared sequence.
#[derive(Debug, Clone)]
pub struct Comparison {
    records: Vec<RaceRecord>,
    verified: bool,
}

impl Comparison {
    pub fn new(seq: &[i32], algorithms: &[Algorithm]) -> Self {
        let records: Vec<_> = algorithms.iter().map(|&a| run(a, seq)).collect();
        let verified = records.iter().all(|r| r.result.verify(seq));

        Self { records, verified }
    }

    pub fn records(&self) -> &[RaceRecord] {
        &self.records
    }

    /// Every sum matches and every reported interval adds up to its sum.
    pub fn agrees(&self) -> bool {
        self.verified && self.records.iter().map(|r| r.result.sum()).all_equal()
    }
}

pub fn compare(seq: &[i32]) -> Comparison {
    Comparison::new(seq, &Algorithm::ALL)
}

/// Aggregate over many seeded comparisons.
#[derive(Debug, Clone)]
pub struct Summary {
    case_count: usize,
    disagreements: Vec<u64>,
    min_sum: i64,
    max_sum: i64,
    total_sum: i64,
    elapsed: [Duration; 3],
}

impl Summary {
    pub fn new() -> Self {
        Self {
            case_count: 0,
            disagreements: vec![],
            min_sum: i64::MAX,
            max_sum: i64::MIN,
            total_sum: 0,
            elapsed: [Duration::ZERO; 3],
        }
    }

    pub fn push(&mut self, seed: u64, comparison: &Comparison) {
        self.case_count += 1;

        if !comparison.agrees() {
            warn!(
                "seed {}: algorithms disagree ({})",
                seed,
                comparison.records().iter().map(|r| r.result()).join(", ")
            );
            self.disagreements.push(seed);
        }

        for record in comparison.records() {
            let i = Algorithm::ALL
                .iter()
                .position(|&a| a == record.algorithm())
                .unwrap_or(0);
            self.elapsed[i] += record.elapsed();
        }

        if let Some(record) = comparison.records().first() {
            let sum = record.result().sum();
            self.min_sum.change_min(sum);
            self.max_sum.change_max(sum);
            self.total_sum += sum;
        }
    }

    pub fn case_count(&self) -> usize {
        self.case_count
    }

    pub fn disagreements(&self) -> &[u64] {
        &self.disagreements
    }

    pub fn min_sum(&self) -> Option<i64> {
        (self.case_count > 0).then_some(self.min_sum)
    }

    pub fn max_sum(&self) -> Option<i64> {
        (self.case_count > 0).then_some(self.max_sum)
    }

    pub fn average_sum(&self) -> Option<f64> {
        (self.case_count > 0).then(|| self.total_sum as f64 / self.case_count as f64)
    }

    pub fn elapsed(&self, algorithm: Algorithm) -> Duration {
        Algorithm::ALL
            .iter()
            .position(|&a| a == algorithm)
            .map_or(Duration::ZERO, |i| self.elapsed[i])
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self::new()
    }
}
