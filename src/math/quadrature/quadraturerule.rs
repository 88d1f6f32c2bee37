use serde::{
    Deserialize,
    Serialize
};

use crate::math::integrand::integrand::Integrand;
use crate::math::quadrature::interval::Interval;
use crate::math::quadrature::quadratureerror::QuadratureError;

/// Upper bound on the subinterval count derived from a step size.
pub const MAX_SUBINTERVALS: usize = 1 << 26;

/// A quadrature rule bound to its own parameters (step size, node count, ...).
///
/// Rules are stateless: integrating twice with the same inputs gives
/// bit-identical results.
pub trait QuadratureRule: Send + Sync {
    fn name(&self) -> &str;

    fn integrate(&self, integrand: &dyn Integrand, interval: &Interval) -> Result<f64, QuadratureError>;
}

/// Spacing used to weight the node values of a step-based rule.
///
/// Nodes always span [a, b] exactly. `Effective` weights them with the
/// actual node spacing (b − a)/n; `Nominal` weights them with the requested
/// step h, which only agrees with the node spacing when h divides b − a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StepWeighting {
    #[default]
    Effective,
    Nominal
}

impl StepWeighting {
    pub fn spacing(&self, step: f64, interval: &Interval, n: usize) -> f64 {
        match self {
            StepWeighting::Effective => interval.width() / n as f64,
            StepWeighting::Nominal => step
        }
    }
}

pub fn validate_step(rule: &str, step: f64) -> Result<(), QuadratureError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(QuadratureError::invalid_argument(
            rule,
            format!("step size must be positive and finite, got {}", step)
        ));
    }
    Ok(())
}

/// n = floor((b − a)/h)
pub fn subinterval_count(rule: &str, interval: &Interval, step: f64) -> Result<usize, QuadratureError> {
    interval.validate(rule)?;
    validate_step(rule, step)?;
    let ratio = (interval.width() / step).floor();
    if !ratio.is_finite() || ratio > MAX_SUBINTERVALS as f64 {
        return Err(QuadratureError::invalid_argument(
            rule,
            format!("step size {} gives more than {} subintervals", step, MAX_SUBINTERVALS)
        ));
    }
    Ok(ratio as usize)
}

/// Evaluates the integrand at every node, failing on the first non-finite value.
pub fn sample(rule: &str, integrand: &dyn Integrand, nodes: &[f64]) -> Result<Vec<f64>, QuadratureError> {
    let values = integrand.values(nodes);
    if values.len() != nodes.len() {
        return Err(QuadratureError::invalid_argument(
            rule,
            format!("integrand returned {} values for {} nodes", values.len(), nodes.len())
        ));
    }
    if let Some((&x, &value)) = nodes
        .iter()
        .zip(values.iter())
        .find(|&(_, value)| !value.is_finite()) {
        return Err(QuadratureError::NonFiniteSample {
            rule: rule.to_owned(),
            x,
            value
        });
    }
    Ok(values)
}

pub fn finite_estimate(rule: &str, estimate: f64) -> Result<f64, QuadratureError> {
    if estimate.is_finite() {
        Ok(estimate)
    } else {
        Err(QuadratureError::NonFiniteEstimate {
            rule: rule.to_owned(),
            value: estimate
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::quadrature::quadratureerror::QuadratureErrorKind;

    #[test]
    fn subinterval_count_truncates() {
        let interval = Interval::new(0.0, 1.0);
        assert_eq!(subinterval_count("r", &interval, 0.05).unwrap(), 20);
        assert_eq!(subinterval_count("r", &interval, 0.3).unwrap(), 3);
        assert_eq!(subinterval_count("r", &interval, 1.0).unwrap(), 1);
        assert_eq!(subinterval_count("r", &interval, 2.0).unwrap(), 0);
    }

    #[test]
    fn subinterval_count_rejects_bad_steps() {
        let interval = Interval::new(0.0, 1.0);
        for step in [0.0, -0.1, f64::NAN, f64::INFINITY, 1e-300] {
            let error = subinterval_count("r", &interval, step).unwrap_err();
            assert_eq!(error.kind(), QuadratureErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn sample_reports_first_non_finite_node() {
        let reciprocal = |x: f64| 1.0 / x;
        let error = sample("r", &reciprocal, &[-1.0, 0.0, 1.0]).unwrap_err();
        match error {
            QuadratureError::NonFiniteSample { x, value, .. } => {
                assert_eq!(x, 0.0);
                assert!(value.is_infinite());
            },
            other => panic!("unexpected error {other:?}")
        }
    }

    #[test]
    fn weighting_spacing() {
        let interval = Interval::new(0.0, 1.0);
        assert_eq!(StepWeighting::Effective.spacing(0.3, &interval, 4), 0.25);
        assert_eq!(StepWeighting::Nominal.spacing(0.3, &interval, 4), 0.3);
    }
}
