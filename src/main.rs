use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use mcss_races::{
    params::Params,
    race::{self, Race, Summary},
    Algorithm, McssError, Sequence, Solver as _,
};
use rand::{Rng as _, SeedableRng};
use rand_pcg::Pcg64Mcg;

#[derive(Debug, Parser)]
#[clap(version, about = "Races the cubic, quadratic and linear MCSS algorithms")]
struct Cli {
    #[clap(subcommand)]
    subcommand: Option<SubCommand>,
}

#[derive(Debug, Subcommand)]
enum SubCommand {
    /// Time each algorithm on its own random sequence
    Race {
        #[clap(long = "cubic-len")]
        cubic_len: Option<usize>,
        #[clap(long = "quadratic-len")]
        quadratic_len: Option<usize>,
        #[clap(long = "linear-len")]
        linear_len: Option<usize>,
        #[clap(short = 'm', long = "max-abs")]
        max_abs: Option<i32>,
        #[clap(short = 's', long = "seed")]
        seed: Option<u64>,
    },
    /// Run on a sequence read from a file (or stdin)
    Single {
        #[clap(short = 'p', long = "path")]
        path: Option<PathBuf>,
        #[clap(short = 'a', long = "algorithm", value_enum)]
        algorithm: Option<Algorithm>,
    },
    /// Cross-check all algorithms over a range of seeds
    Multi {
        #[clap(short = 's', long = "start")]
        start: u64,
        #[clap(short = 'e', long = "end")]
        end: u64,
        #[clap(short = 'n', long = "len", default_value_t = 100)]
        len: usize,
        #[clap(short = 'm', long = "max-abs")]
        max_abs: Option<i32>,
    },
}

fn main() -> Result<()> {
    let env = env_logger::Env::new()
        .filter("MCSS_LOG")
        .write_style("MCSS_LOG_STYLE");
    env_logger::init_from_env(env);

    let args = Cli::parse();
    let mut params = Params::from_env();
    debug!("params from environment: {:?}", params);

    match args.subcommand {
        None => run_race(&params),
        Some(SubCommand::Race {
            cubic_len,
            quadratic_len,
            linear_len,
            max_abs,
            seed,
        }) => {
            params.cubic_len = cubic_len.unwrap_or(params.cubic_len);
            params.quadratic_len = quadratic_len.unwrap_or(params.quadratic_len);
            params.linear_len = linear_len.unwrap_or(params.linear_len);
            params.max_abs = max_abs.unwrap_or(params.max_abs);
            params.seed = seed.or(params.seed);
            run_race(&params)
        }
        Some(SubCommand::Single { path, algorithm }) => {
            let seq = match path {
                Some(path) => Sequence::read_input(&path)
                    .with_context(|| format!("failed to read sequence from {:?}", path))?,
                None => Sequence::read_stdin(),
            };
            info!("read sequence of length {}", seq.len());

            match algorithm {
                Some(algorithm) => println!("{}", race::run(algorithm, &seq)),
                None => {
                    let comparison = race::compare(&seq);

                    for record in comparison.records() {
                        println!("{}", record);
                    }

                    if !comparison.agrees() {
                        bail!("algorithms disagree on the input sequence");
                    }
                }
            }

            Ok(())
        }
        Some(SubCommand::Multi {
            start,
            end,
            len,
            max_abs,
        }) => run_multi(start, end, len, max_abs.unwrap_or(params.max_abs)),
    }
}

fn run_race(params: &Params) -> Result<()> {
    let seed = params.seed.unwrap_or_else(|| Pcg64Mcg::from_entropy().gen());
    info!("seed: {}", seed);

    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let records = Race::new(params.clone()).run(&mut rng)?;

    for record in records {
        println!("{}", record);
    }

    Ok(())
}

fn run_multi(start: u64, end: u64, len: usize, max_abs: i32) -> Result<()> {
    if start >= end {
        return Err(McssError::InvalidRange { start, end }.into());
    }

    let mut summary = Summary::new();

    for seed in start..end {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let seq = Sequence::random(len, max_abs, &mut rng)?;
        let comparison = race::compare(&seq);
        debug!("seed {}: {}", seed, comparison.records()[0].result());
        summary.push(seed, &comparison);
    }

    println!("cases: {}", summary.case_count());

    if let (Some(min), Some(max), Some(average)) =
        (summary.min_sum(), summary.max_sum(), summary.average_sum())
    {
        println!("min_mcss: {}", min);
        println!("max_mcss: {}", max);
        println!("average_mcss: {:.2}", average);
    }

    for algorithm in Algorithm::ALL {
        let solver = algorithm.solver();
        println!(
            "{:>9} {}: {:?}",
            solver.label(),
            solver.complexity(),
            summary.elapsed(algorithm)
        );
    }

    if !summary.disagreements().is_empty() {
        bail!(
            "algorithms disagree on seeds {:?}",
            summary.disagreements()
        );
    }

    Ok(())
}
