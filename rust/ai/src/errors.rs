use thiserror::Error;

/// Returned by [`crate::create_ai`] for an id no strategy is registered under.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown strategy id: {0} (known: baseline, tight, loose, calling_station, random)")]
pub struct UnknownStrategy(pub String);

/// A flat parameter map could not be turned back into strategy parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamError {
    #[error("Missing parameter: {0}")]
    Missing(String),
    #[error("Parameter {key} = {value} is out of range")]
    OutOfRange { key: String, value: f64 },
    #[error("Strength thresholds must satisfy marginal <= medium <= strong <= premium")]
    UnorderedThresholds,
}
