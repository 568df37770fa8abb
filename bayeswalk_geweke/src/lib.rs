//! Geweke (joint distribution) test
//!
//! A transition kernel that leaves the posterior invariant, alternated with
//! draws of fresh data from the likelihood, must leave the joint distribution
//! of parameters and data invariant. The tester compares summaries from that
//! "posterior" chain against independent forward draws from the prior.
mod tester;
mod traits;

pub use tester::{GewekeError, GewekeResult, GewekeTester};
pub use traits::{GewekeModel, GewekeResampleData, GewekeSummarize};
