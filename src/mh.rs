//! Random-walk Metropolis-Hastings for a normal mean under a Cauchy prior
use bayeswalk_stats::mh::{gaussian_walk, mh_symrw_trace};
use bayeswalk_stats::suffstat::{gaussian_suffstat, sample_mean};
use bayeswalk_stats::NormalCauchyTarget;
use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::MhConfig;
use crate::error::Error;
use crate::trace::Trace;

/// Acceptance rates outside of this range suggest retuning `cand_sd`
pub const ACCEPTANCE_GUIDE: (f64, f64) = (0.23, 0.5);

/// Output of a Metropolis-Hastings run
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MhOutput {
    /// The state after every iteration
    pub trace: Trace<f64>,
    /// Number of accepted proposals
    pub n_accepted: usize,
}

impl MhOutput {
    /// Fraction of iterations whose proposal was accepted
    pub fn acceptance_rate(&self) -> f64 {
        self.n_accepted as f64 / self.trace.len() as f64
    }
}

/// Sample the posterior of a normal mean (unit variance likelihood, standard
/// Cauchy prior) given the number of observations `n` and their mean `ybar`.
///
/// A non-finite `ybar` would make every score `NaN` and leave the chain
/// stuck at `mu_init`, so it is rejected with [`Error::NonFiniteDataMean`].
///
/// # Example
///
/// ```rust
/// # use bayeswalk::config::MhConfig;
/// # use bayeswalk::mh::run_mh;
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256Plus;
///
/// let mut rng = Xoshiro256Plus::seed_from_u64(1337);
/// let config = MhConfig::new().n_iters(1_000).cand_sd(0.9);
///
/// let output = run_mh(10, 0.99, &config, &mut rng).unwrap();
///
/// assert_eq!(output.trace.len(), 1_000);
/// assert!(output.acceptance_rate() > 0.0);
/// ```
pub fn run_mh<R: Rng>(
    n: usize,
    ybar: f64,
    config: &MhConfig,
    rng: &mut R,
) -> Result<MhOutput, Error> {
    config.validate()?;
    if !ybar.is_finite() {
        return Err(Error::NonFiniteDataMean(ybar));
    }

    info!(
        "Running Metropolis-Hastings for {} iterations (n = {}, ybar = {})",
        config.n_iters, n, ybar
    );

    let target = NormalCauchyTarget::new(n, ybar);
    let mh_trace = mh_symrw_trace(
        config.mu_init,
        |mu: &f64| target.ln_f(*mu),
        gaussian_walk(config.cand_sd),
        config.n_iters,
        rng,
    );

    let output = MhOutput {
        trace: mh_trace.samples.into(),
        n_accepted: mh_trace.n_accepted,
    };

    let rate = output.acceptance_rate();
    debug!(
        "Accepted {} of {} proposals ({:.3})",
        output.n_accepted, config.n_iters, rate
    );
    if rate < ACCEPTANCE_GUIDE.0 || rate > ACCEPTANCE_GUIDE.1 {
        warn!(
            "Acceptance rate {:.3} is outside [{}, {}]; consider retuning \
            cand_sd ({})",
            rate, ACCEPTANCE_GUIDE.0, ACCEPTANCE_GUIDE.1, config.cand_sd
        );
    }

    Ok(output)
}

/// Like [`run_mh`], but computes `n` and `ybar` from the observations
pub fn run_mh_on_data<R: Rng>(
    ys: &[f64],
    config: &MhConfig,
    rng: &mut R,
) -> Result<MhOutput, Error> {
    let stat = gaussian_suffstat(ys);
    run_mh(ys.len(), sample_mean(&stat), config, rng)
}
