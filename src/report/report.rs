use crate::evaluation::comparator::Comparison;
use crate::evaluation::evaluator::Estimate;
use crate::math::quadrature::interval::Interval;

/// Outcome of running one scenario: estimates in rule order plus the ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    scenario: String,
    interval: Interval,
    exact: f64,
    estimates: Vec<Estimate>,
    comparison: Comparison
}

impl Report {
    pub fn new(scenario: String,
               interval: Interval,
               exact: f64,
               estimates: Vec<Estimate>,
               comparison: Comparison) -> Report {
        Report { scenario, interval, exact, estimates, comparison }
    }

    pub fn scenario(&self) -> &str {
        &self.scenario
    }

    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    pub fn exact(&self) -> f64 {
        self.exact
    }

    pub fn estimates(&self) -> &[Estimate] {
        &self.estimates
    }

    pub fn comparison(&self) -> &Comparison {
        &self.comparison
    }
}
