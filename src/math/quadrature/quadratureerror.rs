use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadratureErrorKind {
    InvalidArgument,
    NumericalFailure
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadratureError {
    #[error("{rule}: invalid argument: {reason}")]
    InvalidArgument {
        rule: String,
        reason: String
    },

    #[error("{rule}: integrand is not finite at x = {x} (got {value})")]
    NonFiniteSample {
        rule: String,
        x: f64,
        value: f64
    },

    #[error("{rule}: estimate is not finite (got {value})")]
    NonFiniteEstimate {
        rule: String,
        value: f64
    }
}

impl QuadratureError {
    pub fn invalid_argument(rule: &str, reason: impl Into<String>) -> QuadratureError {
        QuadratureError::InvalidArgument {
            rule: rule.to_owned(),
            reason: reason.into()
        }
    }

    pub fn kind(&self) -> QuadratureErrorKind {
        match self {
            QuadratureError::InvalidArgument { .. } => QuadratureErrorKind::InvalidArgument,
            QuadratureError::NonFiniteSample { .. }
            | QuadratureError::NonFiniteEstimate { .. } => QuadratureErrorKind::NumericalFailure
        }
    }

    /// 發生錯誤的積分法名稱
    pub fn rule(&self) -> &str {
        match self {
            QuadratureError::InvalidArgument { rule, .. }
            | QuadratureError::NonFiniteSample { rule, .. }
            | QuadratureError::NonFiniteEstimate { rule, .. } => rule
        }
    }

    /// Message without the rule prefix.
    pub fn reason(&self) -> String {
        match self {
            QuadratureError::InvalidArgument { reason, .. } => reason.clone(),
            QuadratureError::NonFiniteSample { x, value, .. } => {
                format!("integrand is not finite at x = {} (got {})", x, value)
            },
            QuadratureError::NonFiniteEstimate { value, .. } => {
                format!("estimate is not finite (got {})", value)
            }
        }
    }
}
