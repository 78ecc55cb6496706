//! Agent error type.

use thiserror::Error;

use rat_core::{CoreError, Point};
use rat_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Spatial(#[from] SpatialError),

    #[error("start position {0} lies outside the environment")]
    OutsideEnvironment(Point),

    #[error("environment returned no start position")]
    NoStartPosition,
}

pub type AgentResult<T> = Result<T, AgentError>;
