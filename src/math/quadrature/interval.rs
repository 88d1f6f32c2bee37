use serde::{
    Deserialize,
    Serialize
};

use crate::math::quadrature::quadratureerror::QuadratureError;

/// Closed integration interval [lower, upper].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    lower: f64,
    upper: f64
}

impl Interval {
    pub fn new(lower: f64, upper: f64) -> Interval {
        Interval { lower, upper }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    pub fn half_width(&self) -> f64 {
        (self.upper - self.lower) / 2.0
    }

    /// Both ends finite and lower < upper.
    pub fn validate(&self, rule: &str) -> Result<(), QuadratureError> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(QuadratureError::invalid_argument(
                rule,
                format!("bounds must be finite, got [{}, {}]", self.lower, self.upper)
            ));
        }
        if self.lower >= self.upper {
            return Err(QuadratureError::invalid_argument(
                rule,
                format!("lower bound {} must be below upper bound {}", self.lower, self.upper)
            ));
        }
        Ok(())
    }

    /// n + 1 equally spaced nodes from lower to upper; the last node is `upper` exactly.
    pub fn uniform_nodes(&self, n: usize) -> Vec<f64> {
        let spacing = self.width() / n as f64;
        let mut nodes: Vec<f64> = (0..=n)
            .map(|i| self.lower + i as f64 * spacing)
            .collect();
        if let Some(last) = nodes.last_mut() {
            *last = self.upper;
        }
        nodes
    }

    /// Splits into `panels` equal subintervals.
    pub fn panels(&self, panels: usize) -> Vec<Interval> {
        let nodes = self.uniform_nodes(panels);
        nodes
            .windows(2)
            .map(|pair| Interval::new(pair[0], pair[1]))
            .collect()
    }
}
