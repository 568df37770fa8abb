/// The mean of a slice of f64. `NaN` if the slice is empty.
pub fn mean(xs: &[f64]) -> f64 {
    let n: f64 = xs.len() as f64;
    xs.iter().fold(0.0, |acc, x| x + acc) / n
}

/// The (population) variance of a slice of f64
pub fn var(xs: &[f64]) -> f64 {
    let n: f64 = xs.len() as f64;
    let m = mean(xs);
    sum_sq_dev(xs, m) / n
}

/// The standard deviation of a slice of f64
pub fn std(xs: &[f64]) -> f64 {
    let v: f64 = var(xs);
    v.sqrt()
}

/// Sum of squared deviations of `xs` about `about`, Σ(xᵢ - about)²
pub fn sum_sq_dev(xs: &[f64], about: f64) -> f64 {
    xs.iter().fold(0.0, |acc, &x| (x - about).mul_add(x - about, acc))
}

/// Sample quantile with linear interpolation between order statistics.
///
/// Returns `None` if `xs` is empty or `p` is not in [0, 1].
pub fn quantile(xs: &[f64], p: f64) -> Option<f64> {
    if xs.is_empty() || !(0.0..=1.0).contains(&p) {
        return None;
    }

    let mut sorted = xs.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - lo as f64;

    Some(frac.mul_add(sorted[hi] - sorted[lo], sorted[lo]))
}
