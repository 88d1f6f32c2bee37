use tracing::debug;

use crate::math::integrand::integrand::Integrand;
use crate::math::quadrature::interval::Interval;
use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::quadraturerule::{
    QuadratureRule,
    StepWeighting,
    finite_estimate,
    sample,
    subinterval_count
};

pub const TRAPEZOID_RULE_NAME: &str = "Composite Trapezoid Rule";

/// h·(½f(x_0) + f(x_1) + ... + f(x_{n−1}) + ½f(x_n)), n = floor((b − a)/h)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeTrapezoid {
    step: f64,
    weighting: StepWeighting
}

impl CompositeTrapezoid {
    pub fn new(step: f64) -> CompositeTrapezoid {
        CompositeTrapezoid { step, weighting: StepWeighting::default() }
    }

    pub fn with_weighting(step: f64, weighting: StepWeighting) -> CompositeTrapezoid {
        CompositeTrapezoid { step, weighting }
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn weighting(&self) -> StepWeighting {
        self.weighting
    }
}

impl QuadratureRule for CompositeTrapezoid {
    fn name(&self) -> &str {
        TRAPEZOID_RULE_NAME
    }

    fn integrate(&self, integrand: &dyn Integrand, interval: &Interval) -> Result<f64, QuadratureError> {
        let n = subinterval_count(self.name(), interval, self.step)?;
        if n < 1 {
            return Err(QuadratureError::invalid_argument(
                self.name(),
                format!("step size {} exceeds interval width {}; need at least 1 subinterval",
                        self.step, interval.width())
            ));
        }
        let nodes = interval.uniform_nodes(n);
        let y = sample(self.name(), integrand, &nodes)?;
        let h = self.weighting.spacing(self.step, interval, n);
        let interior: f64 = y[1..n].iter().sum();
        let estimate = h * (0.5 * y[0] + 0.5 * y[n] + interior);
        debug!(rule = self.name(), n, h, estimate, "trapezoid evaluated");
        finite_estimate(self.name(), estimate)
    }
}

pub fn composite_trapezoid(integrand: &dyn Integrand, a: f64, b: f64, h: f64) -> Result<f64, QuadratureError> {
    CompositeTrapezoid::new(h).integrate(integrand, &Interval::new(a, b))
}
