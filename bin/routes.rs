use bayeswalk::config::{GibbsConfig, MhConfig};
use bayeswalk::gibbs::run_gibbs;
use bayeswalk::io::{load, save};
use bayeswalk::mh::run_mh_on_data;
use bayeswalk::trace::Trace;
use bayeswalk::Error;
use serde::{Deserialize, Serialize};

use crate::opt::ChainArgs;

/// Run file for the `mh` command
#[derive(Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct MhRun {
    pub data: Vec<f64>,
    #[serde(default)]
    pub sampler: MhConfig,
}

/// Run file for the `gibbs` command
#[derive(Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct GibbsRun {
    pub data: Vec<f64>,
    #[serde(default)]
    pub sampler: GibbsConfig,
}

fn validate_level(level: f64) -> Result<(), Error> {
    if level > 0.0 && level < 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidCredibleLevel(level))
    }
}

fn print_summary(name: &str, trace: &Trace<f64>, level: f64) {
    match trace.summarize(level) {
        Some(summary) => println!("{name}: {summary}"),
        None => println!("{name}: no draws left after burn-in"),
    }
}

fn run_mh_cmd(cmd: &ChainArgs) -> Result<(), Error> {
    validate_level(cmd.level)?;
    let run: MhRun = load(&cmd.config)?;
    let mut rng = cmd.rng();

    let output = run_mh_on_data(&run.data, &run.sampler, &mut rng)?;

    println!("acceptance rate: {:.4}", output.acceptance_rate());
    print_summary("mu", &output.trace.burned(cmd.burn), cmd.level);

    if let Some(path) = cmd.output.as_ref() {
        save(&output, path)?;
    }
    Ok(())
}

fn run_gibbs_cmd(cmd: &ChainArgs) -> Result<(), Error> {
    validate_level(cmd.level)?;
    let run: GibbsRun = load(&cmd.config)?;
    let mut rng = cmd.rng();

    let trace = run_gibbs(&run.data, &run.sampler, &mut rng)?;

    let burned = trace.burned(cmd.burn);
    print_summary("mu", &burned.mu(), cmd.level);
    print_summary("sig2", &burned.sig2(), cmd.level);

    if let Some(path) = cmd.output.as_ref() {
        save(&trace, path)?;
    }
    Ok(())
}

pub fn mh(cmd: ChainArgs) -> i32 {
    match run_mh_cmd(&cmd) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Metropolis-Hastings run failed: {err}");
            1
        }
    }
}

pub fn gibbs(cmd: ChainArgs) -> i32 {
    match run_gibbs_cmd(&cmd) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Gibbs run failed: {err}");
            1
        }
    }
}
