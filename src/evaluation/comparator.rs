use serde::Serialize;
use tracing::info;

use crate::evaluation::evaluationerror::EvaluationError;
use crate::evaluation::evaluator::Estimate;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    method: String,
    estimate: f64,
    absolute_error: f64
}

impl ResultRecord {
    pub fn new(method: String, estimate: f64, absolute_error: f64) -> ResultRecord {
        ResultRecord { method, estimate, absolute_error }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    pub fn absolute_error(&self) -> f64 {
        self.absolute_error
    }
}

/// Records sorted ascending by absolute error; never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    records: Vec<ResultRecord>
}

impl Comparison {
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    pub fn best(&self) -> &ResultRecord {
        &self.records[0]
    }

    pub fn worst(&self) -> &ResultRecord {
        &self.records[self.records.len() - 1]
    }
}

/// Ranks estimates by |estimate − exact|.
///
/// The sort is stable: rules with exactly equal errors keep their input
/// order, so the last of them is reported as worst.
pub fn compare(estimates: &[Estimate], exact: f64) -> Result<Comparison, EvaluationError> {
    if !exact.is_finite() {
        return Err(EvaluationError::InvalidArgument(
            format!("exact value must be finite, got {}", exact)
        ));
    }
    if estimates.is_empty() {
        return Err(EvaluationError::InvalidArgument("no estimates to compare".to_owned()));
    }
    if let Some(failed) = estimates.iter().find(|e| !e.value().is_finite()) {
        return Err(EvaluationError::InvalidArgument(
            format!("estimate of {} is not finite, got {}", failed.method(), failed.value())
        ));
    }

    let mut records: Vec<ResultRecord> = estimates
        .iter()
        .map(|e| ResultRecord::new(e.method().to_owned(), e.value(), (e.value() - exact).abs()))
        .collect();
    records.sort_by(|lhs, rhs| lhs.absolute_error.total_cmp(&rhs.absolute_error));

    let comparison = Comparison { records };
    info!(
        best = comparison.best().method(),
        best_error = comparison.best().absolute_error(),
        worst = comparison.worst().method(),
        worst_error = comparison.worst().absolute_error(),
        "estimates ranked"
    );
    Ok(comparison)
}
