use thiserror::Error;

use rat_agent::AgentError;
use rat_core::CoreError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("agent error in trajectory {trajectory}: {source}")]
    Agent {
        trajectory: u32,
        #[source]
        source: AgentError,
    },
}

impl From<CoreError> for SimError {
    fn from(e: CoreError) -> Self {
        SimError::Config(e.to_string())
    }
}

pub type SimResult<T> = Result<T, SimError>;
