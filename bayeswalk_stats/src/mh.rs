use rand::Rng;
use rand_distr::StandardNormal;

/// The chain produced by a Metropolis-Hastings (MH) run
#[derive(Clone, Debug, PartialEq)]
pub struct MhTrace<T> {
    /// The state after every iteration. Rejected iterations repeat the
    /// previous state.
    pub samples: Vec<T>,
    /// The number of accepted proposals
    pub n_accepted: usize,
    /// The score of the final state
    pub score_x: f64,
}

impl<T> MhTrace<T> {
    /// Fraction of iterations that accepted their proposal. `NaN` for an empty
    /// trace.
    pub fn acceptance_rate(&self) -> f64 {
        self.n_accepted as f64 / self.samples.len() as f64
    }

    /// The final state of the chain
    pub fn last(&self) -> Option<&T> {
        self.samples.last()
    }
}

/// Log acceptance ratio for a symmetric proposal. The proposal densities
/// cancel, leaving the difference in scores.
#[inline]
pub fn ln_acceptance(score_x: f64, score_y: f64) -> f64 {
    score_y - score_x
}

/// Acceptance probability, min(1, exp(ln_alpha)). `NaN` maps to zero.
#[inline]
pub fn acceptance_prob(ln_alpha: f64) -> f64 {
    if ln_alpha.is_nan() {
        0.0
    } else {
        ln_alpha.min(0.0).exp()
    }
}

/// Symmetric random-walk MCMC that records every state.
///
/// The accept test is `ln(u) < ln_alpha` with `u ~ U[0, 1)`, so ratios at or
/// above one are always accepted and nothing is exponentiated.
///
/// # Arguments
/// - x_start: the starting value
/// - score_fn: the log score function. For Bayesian inference: ln f(x|θ)π(θ)
/// - walk_fn: a symmetric transition function q(x -> x') = q(x' -> x)
/// - n_iters: the number of MH steps, which is also the trace length
/// - rng: The random number generator
pub fn mh_symrw_trace<T, F, Q, R>(
    x_start: T,
    score_fn: F,
    walk_fn: Q,
    n_iters: usize,
    rng: &mut R,
) -> MhTrace<T>
where
    T: Clone,
    F: Fn(&T) -> f64,
    Q: Fn(&T, &mut R) -> T,
    R: Rng,
{
    let mut samples: Vec<T> = Vec::with_capacity(n_iters);
    let mut n_accepted: usize = 0;

    let mut fx = score_fn(&x_start);
    let mut x = x_start;

    for _ in 0..n_iters {
        let y = walk_fn(&x, rng);
        let fy = score_fn(&y);
        let ln_alpha = ln_acceptance(fx, fy);

        let u: f64 = rng.gen::<f64>();
        if u.ln() < ln_alpha {
            x = y;
            fx = fy;
            n_accepted += 1;
        }
        samples.push(x.clone());
    }

    MhTrace {
        samples,
        n_accepted,
        score_x: fx,
    }
}

/// A Gaussian random walk, x' = x + sd·z with z ~ N(0, 1).
///
/// `sd` should be positive. The walk is symmetric for any `sd`.
pub fn gaussian_walk<R: Rng>(sd: f64) -> impl Fn(&f64, &mut R) -> f64 {
    move |&x, rng| {
        let z: f64 = rng.sample(StandardNormal);
        sd.mul_add(z, x)
    }
}
