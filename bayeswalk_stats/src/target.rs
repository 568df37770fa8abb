/// Unnormalized log posterior of a normal mean with unit-variance likelihood
/// and a standard Cauchy (Student-t, 1 degree of freedom) prior.
///
/// ```text
/// ln g(μ) = n (ȳ μ - μ²/2) - ln(1 + μ²)
/// ```
#[inline]
pub fn ln_normal_cauchy(mu: f64, n: usize, ybar: f64) -> f64 {
    let nf = n as f64;
    nf * ybar.mul_add(mu, -0.5 * mu * mu) - (mu * mu).ln_1p()
}

/// The normal-likelihood / Cauchy-prior target for a scalar mean, holding
/// the data summary fixed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalCauchyTarget {
    pub n: usize,
    pub ybar: f64,
}

impl NormalCauchyTarget {
    pub fn new(n: usize, ybar: f64) -> Self {
        Self { n, ybar }
    }

    /// Log of the unnormalized posterior density at `mu`
    #[inline]
    pub fn ln_f(&self, mu: f64) -> f64 {
        ln_normal_cauchy(mu, self.n, self.ybar)
    }
}
