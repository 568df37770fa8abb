use serde::Deserialize;
use serde::Serialize;

/// An empirical CDF derived from samples
#[derive(Debug, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct EmpiricalCdf {
    xs: Vec<f64>,
}

impl EmpiricalCdf {
    pub fn new(samples: &[f64]) -> Self {
        let mut xs = Vec::from(samples);
        xs.sort_unstable_by(|a, b| a.total_cmp(b));
        EmpiricalCdf { xs }
    }

    fn cdf(&self, x: f64) -> f64 {
        let n = self.xs.len();
        match (self.xs.first(), self.xs.last()) {
            (Some(&lo), _) if x < lo => 0.0,
            (_, Some(&hi)) if x >= hi => 1.0,
            (None, _) => f64::NAN,
            _ => {
                let ix = self.xs.partition_point(|&s| s <= x);
                ix as f64 / n as f64
            }
        }
    }

    pub fn f(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&value| self.cdf(value)).collect()
    }

    /// P-P plot coordinates over the pooled samples
    pub fn pp(&self, other: &Self) -> (Vec<f64>, Vec<f64>) {
        let mut xys = self.xs.clone();
        xys.extend_from_slice(&other.xs);
        xys.sort_unstable_by(|a, b| a.total_cmp(b));
        (self.f(&xys), other.f(&xys))
    }

    /// Area between the P-P curve and the diagonal
    pub fn auc(&self, other: &Self) -> f64 {
        let (fxs, fys) = self.pp(other);
        let diff: Vec<f64> = fxs
            .iter()
            .zip(fys.iter())
            .map(|(fx, fy)| (fx - fy).abs())
            .collect();

        let q: f64 = (1..fxs.len())
            .map(|i| {
                let step = fxs[i] - fxs[i - 1];
                let trap = diff[i] + diff[i - 1];
                step * trap
            })
            .sum();
        q / 2.0
    }
}
