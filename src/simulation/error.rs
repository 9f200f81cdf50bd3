//! Error types for the traffic light simulation

use thiserror::Error;

use super::types::Side;

/// Errors raised while validating input or running simulations
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A parameter is outside its allowed domain
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Queue storage could not grow
    #[error("allocation failed: {0}")]
    AllocationFailure(String),

    /// A queue was still occupied after the allowed number of clearance iterations
    #[error("{side} queue did not clear within {limit} iterations")]
    ClearanceLimitExceeded { side: Side, limit: u64 },

    /// Every attempted run failed, so there is nothing to report
    #[error("none of the {attempts} attempted runs completed")]
    NoSuccessfulRuns { attempts: u32 },
}

impl SimulationError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SimulationError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Whether the error only affects the run it happened in
    pub fn is_run_local(&self) -> bool {
        matches!(self, SimulationError::ClearanceLimitExceeded { .. })
    }
}
