use thiserror::Error;

use crate::math::quadrature::quadratureerror::QuadratureError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("rule failed: {0}")]
    Rule(#[from] QuadratureError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String)
}

impl EvaluationError {
    /// Name of the rule that failed, if the failure came from a rule.
    pub fn rule(&self) -> Option<&str> {
        match self {
            EvaluationError::Rule(error) => Some(error.rule()),
            EvaluationError::InvalidArgument(_) => None
        }
    }
}
