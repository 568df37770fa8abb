//! Common import for general use.

pub use crate::{
    config::{GibbsConfig, GibbsPrior, MhConfig},
    error::Error,
    gibbs::{run_gibbs, GibbsDraw, GibbsState},
    mh::{run_mh, run_mh_on_data, MhOutput},
    trace::{PosteriorSummary, Trace},
};
