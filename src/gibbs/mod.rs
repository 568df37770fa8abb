//! Two-parameter Gibbs sampler for a normal likelihood with unknown mean and
//! variance
pub mod geweke;

use bayeswalk_stats::conditional::{draw_mu, draw_sig2};
use bayeswalk_stats::suffstat;
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{GibbsConfig, GibbsPrior};
use crate::error::Error;
use crate::trace::Trace;

pub use geweke::GibbsGewekeSettings;

/// One joint draw of the mean and variance
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GibbsDraw {
    pub mu: f64,
    pub sig2: f64,
}

/// The loop-carried state of a Gibbs chain
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GibbsState {
    pub mu: f64,
    /// `NaN` until the first step. σ² is always drawn before it is read.
    pub sig2: f64,
}

impl GibbsState {
    pub fn new(mu_init: f64) -> Self {
        Self {
            mu: mu_init,
            sig2: f64::NAN,
        }
    }

    /// One Gibbs transition. σ² is drawn given the current μ, then μ is drawn
    /// given the new σ². The order defines the chain and must not change.
    pub fn step<R: Rng>(
        &mut self,
        ys: &[f64],
        ybar: f64,
        prior: &GibbsPrior,
        rng: &mut R,
    ) -> Result<(), Error> {
        self.sig2 = draw_sig2(ys, self.mu, &prior.sig2_prior(), rng)?;
        self.mu = draw_mu(ys.len(), ybar, self.sig2, &prior.mu_prior(), rng);
        Ok(())
    }

    pub fn draw(&self) -> GibbsDraw {
        GibbsDraw {
            mu: self.mu,
            sig2: self.sig2,
        }
    }
}

/// Run the Gibbs sampler on the observations `ys`.
///
/// An empty `ys` is allowed. The chain then samples the prior.
///
/// # Example
///
/// ```rust
/// # use bayeswalk::config::{GibbsConfig, GibbsPrior};
/// # use bayeswalk::gibbs::run_gibbs;
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256Plus;
///
/// let ys = [1.2, 1.4, -0.5, 0.3, 0.9, 2.3, 1.0, 0.1, 1.3, 1.9];
/// let config = GibbsConfig::new()
///     .n_iters(500)
///     .prior(GibbsPrior::new(0.0, 1.0, 1.0, 1.0));
///
/// let mut rng = Xoshiro256Plus::seed_from_u64(1337);
/// let trace = run_gibbs(&ys, &config, &mut rng).unwrap();
///
/// assert_eq!(trace.len(), 500);
/// assert!(trace.iter().all(|draw| draw.sig2 > 0.0));
/// ```
pub fn run_gibbs<R: Rng>(
    ys: &[f64],
    config: &GibbsConfig,
    rng: &mut R,
) -> Result<Trace<GibbsDraw>, Error> {
    config.validate()?;

    let ybar = suffstat::ybar(ys);
    info!(
        "Running Gibbs sampler for {} iterations (n = {}, ybar = {})",
        config.n_iters,
        ys.len(),
        ybar
    );

    let mut state = GibbsState::new(config.mu_init);
    let mut trace = Trace::with_capacity(config.n_iters);
    for _ in 0..config.n_iters {
        state.step(ys, ybar, &config.prior, rng)?;
        trace.push(state.draw());
    }

    debug!("Final Gibbs state: {:?}", state);
    Ok(trace)
}

impl Trace<GibbsDraw> {
    /// The trace of μ
    pub fn mu(&self) -> Trace<f64> {
        self.iter().map(|draw| draw.mu).collect::<Vec<_>>().into()
    }

    /// The trace of σ²
    pub fn sig2(&self) -> Trace<f64> {
        self.iter().map(|draw| draw.sig2).collect::<Vec<_>>().into()
    }
}
