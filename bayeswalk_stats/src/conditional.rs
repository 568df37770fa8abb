//! Full conditional distributions of the normal model with unknown mean μ and
//! variance σ², under independent priors μ ~ N(m, s2) and σ² ~ IG(ν, β).
//!
//! Both draws are exact conjugate draws. No accept/reject step is involved.
use bayeswalk_utils::sum_sq_dev;
use rand::Rng;
use rand_distr::{Distribution, Gamma, GammaError, StandardNormal};
use rv::dist::{Gaussian, InvGamma};
use thiserror::Error;

use crate::conjugate::{InvGammaPrior, NormalMeanPrior};

#[derive(Debug, Error)]
pub enum ConditionalError {
    #[error("cannot draw a variance with posterior shape {shape}: {source}")]
    GammaShape { shape: f64, source: GammaError },
}

/// Parameters of μ | σ², y
#[inline]
pub fn mu_conditional(
    n: usize,
    ybar: f64,
    sig2: f64,
    prior: &NormalMeanPrior,
) -> Gaussian {
    prior.posterior(n, ybar, sig2)
}

/// Draw μ | σ², y ~ N(m', v')
pub fn draw_mu<R: Rng>(
    n: usize,
    ybar: f64,
    sig2: f64,
    prior: &NormalMeanPrior,
    rng: &mut R,
) -> f64 {
    let post = mu_conditional(n, ybar, sig2, prior);
    let z: f64 = rng.sample(StandardNormal);
    post.sigma().mul_add(z, post.mu())
}

/// Parameters of σ² | μ, y
#[inline]
pub fn sig2_conditional(
    ys: &[f64],
    mu: f64,
    prior: &InvGammaPrior,
) -> InvGamma {
    prior.posterior(ys.len(), sum_sq_dev(ys, mu))
}

/// Draw σ² | μ, y ~ IG(ν + n/2, β + Σ(yᵢ - μ)²/2)
///
/// Draws g ~ Gamma(shape, rate = scale) and returns 1/g. The gamma variate is
/// drawn at unit rate and then divided by the rate, so a `NaN` scale coming
/// from degenerate data shows up as `NaN` in the output rather than an error.
pub fn draw_sig2<R: Rng>(
    ys: &[f64],
    mu: f64,
    prior: &InvGammaPrior,
    rng: &mut R,
) -> Result<f64, ConditionalError> {
    let post = sig2_conditional(ys, mu, prior);
    let gamma = Gamma::new(post.shape(), 1.0).map_err(|source| {
        ConditionalError::GammaShape {
            shape: post.shape(),
            source,
        }
    })?;
    let g = gamma.sample(rng) / post.scale();
    Ok(g.recip())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::*;
    use bayeswalk_utils::mean;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;
    use rv::misc::ks_test;
    use rv::traits::{Cdf, Mean};

    const KS_PVAL: f64 = 0.2;
    const N_FLAKY_TEST: usize = 10;

    const Y: [f64; 10] = [1.2, 1.4, -0.5, 0.3, 0.9, 2.3, 1.0, 0.1, 1.3, 1.9];

    #[test]
    fn mu_conditional_without_data_is_the_prior() {
        let prior = NormalMeanPrior::new(0.75, 2.0);
        for sig2 in [0.01, 0.5, 1.0, 40.0] {
            let post = mu_conditional(0, 0.0, sig2, &prior);
            assert_relative_eq!(post.mu(), 0.75, epsilon = 1E-14);
            assert_relative_eq!(
                post.sigma(),
                2.0_f64.sqrt(),
                epsilon = 1E-14
            );
        }
    }

    #[test]
    fn draw_mu_without_data_follows_the_prior() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0x5EED);
        let prior = NormalMeanPrior::new(0.75, 2.0);
        let gauss = Gaussian::new(0.75, 2.0_f64.sqrt()).unwrap();

        let n_passes = (0..N_FLAKY_TEST).fold(0, |acc, _| {
            let xs: Vec<f64> = (0..1_000)
                .map(|_| draw_mu(0, 0.0, 1.0, &prior, &mut rng))
                .collect();
            let (_, p) = ks_test(&xs, |x| gauss.cdf(&x));

            if p > KS_PVAL {
                acc + 1
            } else {
                acc
            }
        });

        assert!(n_passes > 0);
    }

    #[test]
    fn draw_mu_mean_matches_conditional_mean() {
        let mut rng = Xoshiro256Plus::seed_from_u64(11);
        let prior = NormalMeanPrior::new(0.0, 1.0);
        let ybar = mean(&Y);
        let post = mu_conditional(Y.len(), ybar, 0.5, &prior);

        let xs: Vec<f64> = (0..20_000)
            .map(|_| draw_mu(Y.len(), ybar, 0.5, &prior, &mut rng))
            .collect();
        assert_relative_eq!(mean(&xs), post.mu(), epsilon = 0.01);
    }

    #[test]
    fn sig2_conditional_hand_computed() {
        let prior = InvGammaPrior::new(1.0, 1.0);
        let post = sig2_conditional(&[1.0, 3.0], 2.0, &prior);
        assert_relative_eq!(post.shape(), 2.0, epsilon = 1E-14);
        assert_relative_eq!(post.scale(), 2.0, epsilon = 1E-14);
    }

    #[test]
    fn draw_sig2_is_positive() {
        let mut rng = Xoshiro256Plus::seed_from_u64(3);
        let prior = InvGammaPrior::new(1.0, 1.0);
        for mu in [-100.0, -1.0, 0.0, 0.99, 50.0] {
            for _ in 0..500 {
                let sig2 = draw_sig2(&Y, mu, &prior, &mut rng).unwrap();
                assert!(sig2 > 0.0);
            }
        }
    }

    #[test]
    fn draw_sig2_mean_matches_conditional_mean() {
        let mut rng = Xoshiro256Plus::seed_from_u64(17);
        let prior = InvGammaPrior::new(3.0, 2.0);
        let post = sig2_conditional(&Y, 1.0, &prior);

        let xs: Vec<f64> = (0..40_000)
            .map(|_| draw_sig2(&Y, 1.0, &prior, &mut rng).unwrap())
            .collect();
        let post_mean: f64 = post.mean().unwrap();
        assert_relative_eq!(mean(&xs), post_mean, max_relative = 0.03);
    }

    #[test]
    fn draw_sig2_propagates_nan_data() {
        let mut rng = Xoshiro256Plus::seed_from_u64(3);
        let prior = InvGammaPrior::new(1.0, 1.0);
        let sig2 = draw_sig2(&[1.0, f64::NAN], 0.0, &prior, &mut rng).unwrap();
        assert!(sig2.is_nan());
    }

    #[test]
    fn draw_sig2_with_invalid_shape_errors() {
        let mut rng = Xoshiro256Plus::seed_from_u64(3);
        let prior = InvGammaPrior::new(-1.0, 1.0);
        let res = draw_sig2(&[], 0.0, &prior, &mut rng);
        assert!(matches!(
            res,
            Err(ConditionalError::GammaShape { shape, .. }) if shape == -1.0
        ));
    }
}
