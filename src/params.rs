use std::{env, str::FromStr};

use crate::problem::Sequence;

/// Race settings. Each field can be overridden through an `MCSS_*` environment
/// variable; unparsable values fall back to the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    pub cubic_len: usize,
    pub quadratic_len: usize,
    pub linear_len: usize,
    pub max_abs: i32,
    pub seed: Option<u64>,
}

impl Params {
    pub fn from_env() -> Self {
        let default = Self::default();
        let cubic_len = get_env("MCSS_CUBIC_LEN", default.cubic_len);
        let quadratic_len = get_env("MCSS_QUADRATIC_LEN", default.quadratic_len);
        let linear_len = get_env("MCSS_LINEAR_LEN", default.linear_len);
        let max_abs = get_env("MCSS_MAX_ABS", default.max_abs);
        let seed = env::var("MCSS_SEED").ok().and_then(|s| s.parse().ok());

        Self {
            cubic_len,
            quadratic_len,
            linear_len,
            max_abs,
            seed,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            cubic_len: 100,
            quadratic_len: 100,
            linear_len: 100,
            max_abs: Sequence::MAX_ABSOLUTE_VALUE,
            seed: None,
        }
    }
}

fn get_env<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
