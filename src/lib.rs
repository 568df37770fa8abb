//! Markov chain Monte Carlo samplers for the posterior of a normal model.
//!
//! Two samplers are provided:
//!
//! - [`mh::run_mh`]: random-walk Metropolis-Hastings for the mean of a normal
//!   likelihood with unit variance under a standard Cauchy prior.
//! - [`gibbs::run_gibbs`]: a Gibbs sampler for the mean and variance of a
//!   normal likelihood under independent normal and inverse-gamma priors.
//!
//! Both take a caller-supplied random number generator, so seeded runs are
//! reproducible and independent chains never share generator state.
//!
//! # Example
//!
//! ```rust
//! use bayeswalk::prelude::*;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256Plus;
//!
//! let ys = [1.2, 1.4, -0.5, 0.3, 0.9, 2.3, 1.0, 0.1, 1.3, 1.9];
//! let mut rng = Xoshiro256Plus::seed_from_u64(1337);
//!
//! let output = run_mh_on_data(&ys, &MhConfig::new(), &mut rng).unwrap();
//! let summary = output.trace.burned(100).summarize(0.95).unwrap();
//!
//! assert!(summary.lower < summary.mean && summary.mean < summary.upper);
//! ```
pub mod config;
pub mod error;
pub mod gibbs;
pub mod io;
pub mod mh;
pub mod prelude;
pub mod trace;

pub use error::Error;

pub use bayeswalk_geweke as geweke;
pub use bayeswalk_stats as stats;
pub use bayeswalk_utils as utils;
