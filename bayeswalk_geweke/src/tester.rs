use std::collections::BTreeMap;
use std::fs::File;
use std::io::prelude::Write;
use std::path::Path;

use bayeswalk_stats::EmpiricalCdf;
use bayeswalk_utils::misc::transpose_mapvec;
use indicatif::ProgressBar;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::traits::*;

#[derive(Debug, Error)]
pub enum GewekeError {
    #[error("IoError: {0}")]
    Io(#[from] std::io::Error),
    #[error("YamlError: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Verifies the correctness of MCMC algorithms by way of the "joint
/// distribution" test
pub struct GewekeTester<G>
where
    G: GewekeModel + GewekeResampleData + GewekeSummarize,
{
    settings: G::Settings,
    pub verbose: bool,
    pub f_chain_out: Vec<BTreeMap<String, f64>>,
    pub p_chain_out: Vec<BTreeMap<String, f64>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GewekeResult {
    forward: Vec<BTreeMap<String, f64>>,
    posterior: Vec<BTreeMap<String, f64>>,
}

impl GewekeResult {
    /// Area between the P-P curve of the forward and posterior chains and the
    /// diagonal, for every summary statistic. Near zero when the sampler is
    /// correct.
    pub fn aucs(&self) -> BTreeMap<String, f64> {
        let forward_t = transpose_mapvec(&self.forward);
        let posterior_t = transpose_mapvec(&self.posterior);

        forward_t
            .iter()
            .filter_map(|(key, f_col)| {
                posterior_t.get(key).map(|p_col| {
                    let cdf_f = EmpiricalCdf::new(f_col);
                    let cdf_p = EmpiricalCdf::new(p_col);
                    (key.clone(), cdf_f.auc(&cdf_p))
                })
            })
            .collect()
    }

    pub fn report(&self) {
        println!("Geweke AUCs\n-----------");
        self.aucs()
            .iter()
            .for_each(|(k, auc)| println!("  {}: {}", k, auc));
    }
}

impl<G> GewekeTester<G>
where
    G: GewekeModel + GewekeResampleData + GewekeSummarize,
{
    pub fn new(settings: G::Settings) -> Self {
        GewekeTester {
            settings,
            f_chain_out: vec![],
            p_chain_out: vec![],
            verbose: false,
        }
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn result(&self) -> GewekeResult {
        GewekeResult {
            forward: self.f_chain_out.clone(),
            posterior: self.p_chain_out.clone(),
        }
    }

    /// Output results as yaml
    pub fn save(&self, path: &Path) -> Result<(), GewekeError> {
        let res = self.result();
        let y = serde_yaml::to_string(&res)?;
        let mut file = File::create(path)?;
        file.write_all(y.as_bytes())?;
        Ok(())
    }

    pub fn run<R: Rng>(
        &mut self,
        n_iter: usize,
        lag: Option<usize>,
        rng: &mut R,
    ) {
        self.run_forward_chain(n_iter, rng);
        self.run_posterior_chain(n_iter, lag.unwrap_or(1), rng);
        if self.verbose {
            self.result().report()
        }
    }

    fn progress_bar(&self, n_iter: usize) -> ProgressBar {
        if self.verbose {
            ProgressBar::new(n_iter as u64)
        } else {
            ProgressBar::hidden()
        }
    }

    fn run_forward_chain<R: Rng>(&mut self, n_iter: usize, rng: &mut R) {
        let pb = self.progress_bar(n_iter);
        self.f_chain_out.reserve(n_iter);

        for _ in 0..n_iter {
            let mut model = G::geweke_from_prior(&self.settings, rng);
            model.geweke_resample_data(Some(&self.settings), rng);
            self.f_chain_out
                .push(model.geweke_summarize(&self.settings));
            pb.inc(1);
        }
        pb.finish_and_clear();
    }

    fn run_posterior_chain<R: Rng>(
        &mut self,
        n_iter: usize,
        lag: usize,
        rng: &mut R,
    ) {
        let pb = self.progress_bar(n_iter);
        self.p_chain_out.reserve(n_iter);

        let mut model = G::geweke_from_prior(&self.settings, rng);
        model.geweke_resample_data(Some(&self.settings), rng);
        for _ in 0..n_iter {
            for _ in 0..lag {
                model.geweke_step(&self.settings, rng);
                model.geweke_resample_data(Some(&self.settings), rng);
            }
            self.p_chain_out
                .push(model.geweke_summarize(&self.settings));
            pb.inc(1);
        }
        pb.finish_and_clear();
    }
}
