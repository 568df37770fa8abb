//! Sampler configuration
use serde::{Deserialize, Serialize};

use crate::error::Error;
use bayeswalk_stats::conjugate::{InvGammaPrior, NormalMeanPrior};

fn default_n_iters() -> usize {
    1_000
}

fn default_cand_sd() -> f64 {
    0.9
}

/// Configuration for the random-walk Metropolis-Hastings sampler
///
/// # Example
///
/// ```rust
/// # use bayeswalk::config::MhConfig;
/// let config = MhConfig::new().n_iters(5_000).cand_sd(0.5);
/// assert!(config.validate().is_ok());
///
/// let bad = MhConfig::new().cand_sd(0.0);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MhConfig {
    /// Number of iterations, which is also the trace length
    #[serde(default = "default_n_iters")]
    pub n_iters: usize,
    /// Starting value of the chain
    #[serde(default)]
    pub mu_init: f64,
    /// Standard deviation of the Gaussian proposal
    #[serde(default = "default_cand_sd")]
    pub cand_sd: f64,
}

impl Default for MhConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MhConfig {
    pub fn new() -> Self {
        Self {
            n_iters: default_n_iters(),
            mu_init: 0.0,
            cand_sd: default_cand_sd(),
        }
    }

    pub fn n_iters(mut self, n_iters: usize) -> Self {
        self.n_iters = n_iters;
        self
    }

    pub fn mu_init(mut self, mu_init: f64) -> Self {
        self.mu_init = mu_init;
        self
    }

    pub fn cand_sd(mut self, cand_sd: f64) -> Self {
        self.cand_sd = cand_sd;
        self
    }

    /// Check the caller contract. Nothing is sampled from an invalid config.
    pub fn validate(&self) -> Result<(), Error> {
        validate_n_iters(self.n_iters)?;
        validate_init(self.mu_init)?;
        if self.cand_sd.is_finite() && self.cand_sd > 0.0 {
            Ok(())
        } else {
            Err(Error::InvalidProposalSd(self.cand_sd))
        }
    }
}

/// Independent priors for the normal model with unknown mean and variance:
/// μ ~ N(mu_0, sig2_0) and σ² ~ IG(nu_0, beta_0).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GibbsPrior {
    /// Prior mean of μ
    pub mu_0: f64,
    /// Prior variance of μ
    pub sig2_0: f64,
    /// Inverse-gamma shape of σ²
    pub nu_0: f64,
    /// Inverse-gamma scale of σ²
    pub beta_0: f64,
}

impl Default for GibbsPrior {
    fn default() -> Self {
        Self {
            mu_0: 0.0,
            sig2_0: 1.0,
            nu_0: 1.0,
            beta_0: 1.0,
        }
    }
}

impl GibbsPrior {
    pub fn new(mu_0: f64, sig2_0: f64, nu_0: f64, beta_0: f64) -> Self {
        Self {
            mu_0,
            sig2_0,
            nu_0,
            beta_0,
        }
    }

    pub fn mu_prior(&self) -> NormalMeanPrior {
        NormalMeanPrior::new(self.mu_0, self.sig2_0)
    }

    pub fn sig2_prior(&self) -> InvGammaPrior {
        InvGammaPrior::new(self.nu_0, self.beta_0)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !self.mu_0.is_finite() {
            return Err(Error::InvalidHyperparameter {
                name: "mu_0",
                requirement: "finite",
                value: self.mu_0,
            });
        }

        [
            ("sig2_0", self.sig2_0),
            ("nu_0", self.nu_0),
            ("beta_0", self.beta_0),
        ]
        .iter()
        .try_for_each(|&(name, value)| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(Error::InvalidHyperparameter {
                    name,
                    requirement: "finite and positive",
                    value,
                })
            }
        })
    }
}

/// Configuration for the two-parameter Gibbs sampler
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GibbsConfig {
    /// Number of iterations, which is also the trace length
    #[serde(default = "default_n_iters")]
    pub n_iters: usize,
    /// Starting value of μ. σ² is drawn first so it needs no starting value.
    #[serde(default)]
    pub mu_init: f64,
    #[serde(default)]
    pub prior: GibbsPrior,
}

impl Default for GibbsConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GibbsConfig {
    pub fn new() -> Self {
        Self {
            n_iters: default_n_iters(),
            mu_init: 0.0,
            prior: GibbsPrior::default(),
        }
    }

    pub fn n_iters(mut self, n_iters: usize) -> Self {
        self.n_iters = n_iters;
        self
    }

    pub fn mu_init(mut self, mu_init: f64) -> Self {
        self.mu_init = mu_init;
        self
    }

    pub fn prior(mut self, prior: GibbsPrior) -> Self {
        self.prior = prior;
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        validate_n_iters(self.n_iters)?;
        validate_init(self.mu_init)?;
        self.prior.validate()
    }
}

fn validate_n_iters(n_iters: usize) -> Result<(), Error> {
    if n_iters == 0 {
        Err(Error::ZeroIterations)
    } else {
        Ok(())
    }
}

fn validate_init(x: f64) -> Result<(), Error> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteInit(x))
    }
}
