use bayeswalk_stats::ConditionalError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The number of iterations must be greater than zero")]
    ZeroIterations,
    #[error("The initial value must be finite, got {0}")]
    NonFiniteInit(f64),
    #[error(
        "The proposal standard deviation must be finite and positive, got {0}"
    )]
    InvalidProposalSd(f64),
    #[error(
        "The data mean must be finite, got {0}; check the data for NaN or \
        infinite values"
    )]
    NonFiniteDataMean(f64),
    #[error("The credible level must be in (0, 1), got {0}")]
    InvalidCredibleLevel(f64),
    #[error("Hyperparameter `{name}` must be {requirement}, got {value}")]
    InvalidHyperparameter {
        name: &'static str,
        requirement: &'static str,
        value: f64,
    },
    #[error("Full conditional draw failed: {0}")]
    Conditional(#[from] ConditionalError),
    #[error(
        "Invalid serialized type `{0}`. Options are `yaml`, `yml`, and `json`."
    )]
    UnknownSerializedType(String),
    #[error("IoError: {0}")]
    Io(#[from] io::Error),
    #[error("YamlError: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JsonError: {0}")]
    Json(#[from] serde_json::Error),
}
