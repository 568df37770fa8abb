//! Closed-form posterior updates for conjugate prior/likelihood pairs.
//!
//! Beta-Bernoulli and Gamma-Poisson are the `rv` conjugate pairs. The normal
//! mean with known variance and the variance with known mean are the two
//! halves of the semi-conjugate normal model and have no `rv` counterpart, so
//! their updates are written out here. Their posteriors are built unchecked,
//! so degenerate inputs show up as `NaN` parameters rather than errors.
use rv::data::{BernoulliSuffStat, DataOrSuffStat, PoissonSuffStat};
use rv::dist::{Bernoulli, Beta, Gamma, Gaussian, InvGamma, Poisson};
use rv::traits::{ConjugatePrior, SuffStat};
use serde::{Deserialize, Serialize};

/// Normal prior on the mean of a normal likelihood with known variance
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalMeanPrior {
    /// Prior mean
    pub m: f64,
    /// Prior variance
    pub s2: f64,
}

impl NormalMeanPrior {
    pub fn new(m: f64, s2: f64) -> Self {
        Self { m, s2 }
    }

    /// Posterior given `n` observations with mean `ybar` and known variance
    /// `sig2`.
    ///
    /// ```text
    /// v  = 1 / (n/σ² + 1/s2)
    /// m' = v (n ȳ/σ² + m/s2)
    /// ```
    pub fn posterior(&self, n: usize, ybar: f64, sig2: f64) -> Gaussian {
        let nf = n as f64;
        let var = (nf / sig2 + self.s2.recip()).recip();
        let mean = var * (nf * ybar / sig2 + self.m / self.s2);
        Gaussian::new_unchecked(mean, var.sqrt())
    }
}

/// Inverse-gamma prior on the variance of a normal likelihood with known mean
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvGammaPrior {
    pub shape: f64,
    pub scale: f64,
}

impl InvGammaPrior {
    pub fn new(shape: f64, scale: f64) -> Self {
        Self { shape, scale }
    }

    /// Posterior given `n` observations whose squared deviations about the
    /// known mean sum to `sum_sq`.
    pub fn posterior(&self, n: usize, sum_sq: f64) -> InvGamma {
        InvGamma::new_unchecked(
            self.shape + n as f64 / 2.0,
            self.scale + sum_sq / 2.0,
        )
    }
}

/// Posterior over the success probability of Bernoulli trials `xs`
pub fn beta_bernoulli(prior: &Beta, xs: &[bool]) -> Beta {
    let mut stat = BernoulliSuffStat::new();
    xs.iter().for_each(|x| stat.observe(x));
    prior.posterior(&DataOrSuffStat::SuffStat::<bool, Bernoulli>(&stat))
}

/// Posterior over the rate of the Poisson counts `xs`
pub fn gamma_poisson(prior: &Gamma, xs: &[u32]) -> Gamma {
    let mut stat = PoissonSuffStat::new();
    xs.iter().for_each(|x| stat.observe(x));
    prior.posterior(&DataOrSuffStat::SuffStat::<u32, Poisson>(&stat))
}
