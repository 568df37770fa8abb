pub mod misc;
pub mod stats;

pub use stats::{mean, quantile, sum_sq_dev, var};
