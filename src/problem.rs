use std::{fmt::Display, ops::Deref, path::Path};

use itertools::Itertools;
use proconio::{input, source::once::OnceSource};
use rand::Rng;

use crate::error::McssError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    values: Vec<i32>,
}

impl Sequence {
    /// Default bound on element magnitude for generated sequences.
    pub const MAX_ABSOLUTE_VALUE: i32 = 10;

    pub fn new(values: Vec<i32>) -> Self {
        Self { values }
    }

    /// Generates `len` values drawn uniformly from `[-max_abs, max_abs)`.
    pub fn random(len: usize, max_abs: i32, rng: &mut impl Rng) -> Result<Self, McssError> {
        if max_abs <= 0 {
            return Err(McssError::InvalidMagnitude(max_abs));
        }

        let values = (0..len).map(|_| rng.gen_range(-max_abs..max_abs)).collect();
        Ok(Self::new(values))
    }

    /// Reads `n` followed by `n` integers.
    pub fn read_input(path: &Path) -> Result<Self, McssError> {
        let source = std::fs::read(path)?;
        let source = OnceSource::new(source.as_slice());
        input! {
            from source,
            n: usize,
            values: [i32; n],
        }

        Ok(Self::new(values))
    }

    pub fn read_stdin() -> Self {
        input! {
            n: usize,
            values: [i32; n],
        }

        Self::new(values)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }
}

impl Deref for Sequence {
    type Target = [i32];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl From<Vec<i32>> for Sequence {
    fn from(values: Vec<i32>) -> Self {
        Self::new(values)
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.values.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn random_respects_bounds() {
        let mut rng = Pcg64Mcg::seed_from_u64(42);
        let seq = Sequence::random(1000, 10, &mut rng).unwrap();

        assert_eq!(seq.len(), 1000);
        assert!(seq.iter().all(|&v| (-10..10).contains(&v)));
    }

    #[test]
    fn random_is_reproducible_with_same_seed() {
        let a = Sequence::random(50, 10, &mut Pcg64Mcg::seed_from_u64(7)).unwrap();
        let b = Sequence::random(50, 10, &mut Pcg64Mcg::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn random_rejects_non_positive_magnitude() {
        let mut rng = Pcg64Mcg::seed_from_u64(0);
        assert!(matches!(
            Sequence::random(5, 0, &mut rng),
            Err(McssError::InvalidMagnitude(0))
        ));
    }

    #[test]
    fn read_input_parses_length_prefixed_file() {
        let path = std::env::temp_dir().join(format!("mcss-seq-{}.txt", std::process::id()));
        std::fs::write(&path, "4\n-2 1 -3 4\n").unwrap();
        let seq = Sequence::read_input(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(seq.as_slice(), &[-2, 1, -3, 4]);
        assert_eq!(seq.to_string(), "-2 1 -3 4");
    }

    #[test]
    fn read_input_reports_missing_file() {
        let path = std::env::temp_dir().join("mcss-does-not-exist.txt");
        assert!(matches!(Sequence::read_input(&path), Err(McssError::Io(_))));
    }
}
