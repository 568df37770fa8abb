#![warn(unused_extern_crates)]
#![warn(
    clippy::all,
    clippy::imprecise_flops,
    clippy::suboptimal_flops,
    clippy::unseparated_literal_suffix,
    clippy::unreadable_literal,
    clippy::option_option,
    clippy::implicit_clone
)]
//! Building blocks for single-chain Bayesian samplers: log target densities,
//! closed-form conjugate updates, the full conditionals of the normal model
//! with unknown mean and variance, and a symmetric random-walk
//! Metropolis-Hastings kernel.
mod cdf;
pub mod conditional;
pub mod conjugate;
pub mod mh;
pub mod suffstat;
pub mod target;

pub use cdf::EmpiricalCdf;
pub use conditional::ConditionalError;
pub use rv;
pub use suffstat::GaussianSuffStat;
pub use target::NormalCauchyTarget;
