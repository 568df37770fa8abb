//! Sufficient statistics of real-valued observations under a normal
//! likelihood.
pub use rv::data::GaussianSuffStat;
use rv::traits::SuffStat;

/// Collect the sufficient statistic of `xs`
pub fn gaussian_suffstat(xs: &[f64]) -> GaussianSuffStat {
    let mut stat = GaussianSuffStat::new();
    xs.iter().for_each(|x| stat.observe(x));
    stat
}

/// Sample mean, ȳ, of the observations behind `stat`.
///
/// The mean of an empty set is `0.0`, not `NaN`, so that `n * ybar` vanishes
/// exactly when there is no data.
#[inline]
pub fn sample_mean(stat: &GaussianSuffStat) -> f64 {
    if stat.n() == 0 {
        0.0
    } else {
        stat.mean()
    }
}

/// Sample mean of `xs`
#[inline]
pub fn ybar(xs: &[f64]) -> f64 {
    sample_mean(&gaussian_suffstat(xs))
}
