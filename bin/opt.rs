use std::path::PathBuf;

use clap::{Args, Parser};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

#[derive(Args, Debug)]
pub struct ChainArgs {
    /// Path to a .yaml or .json run config holding `data` and the sampler
    /// settings
    #[clap(name = "RUN_CONFIG")]
    pub config: PathBuf,
    /// Optional .yaml or .json file to write the full output to
    #[clap(long = "output", short = 'o')]
    pub output: Option<PathBuf>,
    /// Seed for the random number generator. Seeded from entropy if absent.
    #[clap(long = "seed")]
    pub seed: Option<u64>,
    /// Number of leading draws to discard before summarizing
    #[clap(long = "burn", default_value = "0")]
    pub burn: usize,
    /// Credible mass of the reported interval
    #[clap(long = "level", default_value = "0.95")]
    pub level: f64,
}

impl ChainArgs {
    pub fn rng(&self) -> Xoshiro256Plus {
        seeded_rng(self.seed)
    }
}

#[derive(Args, Debug)]
pub struct GewekeArgs {
    /// Number of forward and posterior samples
    #[clap(long = "n-iters", short = 'n', default_value = "2000")]
    pub n_iters: usize,
    /// Number of Gibbs transitions between posterior chain samples. At least
    /// one.
    #[clap(
        long = "lag",
        default_value = "1",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub lag: u64,
    /// Number of observations in the simulated data
    #[clap(long = "n-obs", default_value = "5")]
    pub n_obs: usize,
    #[clap(long = "seed")]
    pub seed: Option<u64>,
    /// Optional .yaml file to write forward and posterior summaries to
    #[clap(long = "output", short = 'o')]
    pub output: Option<PathBuf>,
}

impl GewekeArgs {
    pub fn rng(&self) -> Xoshiro256Plus {
        seeded_rng(self.seed)
    }
}

fn seeded_rng(seed: Option<u64>) -> Xoshiro256Plus {
    match seed {
        Some(seed) => Xoshiro256Plus::seed_from_u64(seed),
        None => Xoshiro256Plus::from_entropy(),
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "bayeswalk",
    author,
    version,
    about = "Metropolis-Hastings and Gibbs samplers for normal models"
)]
pub enum Opt {
    /// Sample a normal mean under a Cauchy prior with random-walk
    /// Metropolis-Hastings
    #[clap(name = "mh")]
    Mh(ChainArgs),
    /// Sample a normal mean and variance with the Gibbs sampler
    #[clap(name = "gibbs")]
    Gibbs(ChainArgs),
    /// Run the Geweke joint distribution test on the Gibbs sampler
    #[clap(name = "geweke")]
    Geweke(GewekeArgs),
}
