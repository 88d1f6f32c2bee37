use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::evaluation::evaluationerror::EvaluationError;
use crate::math::integrand::integrand::Integrand;
use crate::math::quadrature::interval::Interval;
use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::quadraturerule::QuadratureRule;

/// One rule's estimate of the integral.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    method: String,
    value: f64
}

impl Estimate {
    pub fn new(method: String, value: f64) -> Estimate {
        Estimate { method, value }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Applies a fixed set of rules to one integrand over one interval.
///
/// Estimates come back in rule order whether or not evaluation is parallel,
/// and the first failing rule (in rule order) aborts the evaluation.
pub struct Evaluator {
    rules: Vec<Arc<dyn QuadratureRule>>,
    parallel: bool
}

impl Evaluator {
    pub fn new(rules: Vec<Arc<dyn QuadratureRule>>) -> Evaluator {
        Evaluator { rules, parallel: false }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Evaluator {
        self.parallel = parallel;
        self
    }

    pub fn evaluate(&self, integrand: &dyn Integrand, interval: &Interval) -> Result<Vec<Estimate>, EvaluationError> {
        if self.rules.is_empty() {
            return Err(EvaluationError::InvalidArgument("no quadrature rules to evaluate".to_owned()));
        }

        let apply = |rule: &Arc<dyn QuadratureRule>| -> Result<Estimate, QuadratureError> {
            let value = rule.integrate(integrand, interval)?;
            debug!(rule = rule.name(), estimate = value, "estimate computed");
            Ok(Estimate::new(rule.name().to_owned(), value))
        };

        let results: Vec<Result<Estimate, QuadratureError>> = if self.parallel {
            self.rules.par_iter().map(apply).collect()
        } else {
            self.rules.iter().map(apply).collect()
        };

        results
            .into_iter()
            .map(|result| result.map_err(EvaluationError::from))
            .collect()
    }
}
