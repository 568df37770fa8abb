//! Sampler output traces and posterior summaries
use bayeswalk_utils::stats::{self, mean, quantile};
use serde::{Deserialize, Serialize};

/// An ordered, append-only record of the draws of a Markov chain
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct Trace<T> {
    draws: Vec<T>,
}

impl<T> Default for Trace<T> {
    fn default() -> Self {
        Self { draws: Vec::new() }
    }
}

impl<T> From<Vec<T>> for Trace<T> {
    fn from(draws: Vec<T>) -> Self {
        Self { draws }
    }
}

impl<T> Trace<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            draws: Vec::with_capacity(n),
        }
    }

    #[inline]
    pub fn push(&mut self, draw: T) {
        self.draws.push(draw)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.draws.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.draws.iter()
    }

    pub fn draws(&self) -> &[T] {
        &self.draws
    }

    pub fn last(&self) -> Option<&T> {
        self.draws.last()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.draws
    }
}

impl<T: Clone> Trace<T> {
    /// A copy of the trace with the first `n_burn` draws discarded. Burning
    /// more draws than there are leaves an empty trace.
    pub fn burned(&self, n_burn: usize) -> Self {
        let start = n_burn.min(self.draws.len());
        Self {
            draws: self.draws[start..].to_vec(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Trace<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.draws.iter()
    }
}

/// Posterior mean, standard deviation, and equal-tailed credible interval
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PosteriorSummary {
    pub n: usize,
    pub mean: f64,
    pub std: f64,
    /// Credible mass of [lower, upper]
    pub level: f64,
    pub lower: f64,
    pub upper: f64,
}

impl std::fmt::Display for PosteriorSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n = {}, mean = {:.4}, sd = {:.4}, {:.0}% CI = [{:.4}, {:.4}]",
            self.n,
            self.mean,
            self.std,
            self.level * 100.0,
            self.lower,
            self.upper
        )
    }
}

/// Summarize a set of scalar draws. `None` if there are no draws or `level`
/// is not in (0, 1).
pub fn summarize(xs: &[f64], level: f64) -> Option<PosteriorSummary> {
    if xs.is_empty() || !(level > 0.0 && level < 1.0) {
        return None;
    }
    let tail = (1.0 - level) / 2.0;
    Some(PosteriorSummary {
        n: xs.len(),
        mean: mean(xs),
        std: stats::std(xs),
        level,
        lower: quantile(xs, tail)?,
        upper: quantile(xs, 1.0 - tail)?,
    })
}

impl Trace<f64> {
    pub fn summarize(&self, level: f64) -> Option<PosteriorSummary> {
        summarize(&self.draws, level)
    }

    pub fn mean(&self) -> f64 {
        mean(&self.draws)
    }
}
