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

pub const SIMPSON_RULE_NAME: &str = "Composite Simpson's Rule";

/// Simpson's 1/3 rule on an even number of subintervals.
///
/// n = floor((b − a)/h) is raised by one when odd, so the nodes are
/// re-spaced over [a, b] while h itself is left alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeSimpson {
    step: f64,
    weighting: StepWeighting
}

impl CompositeSimpson {
    pub fn new(step: f64) -> CompositeSimpson {
        CompositeSimpson { step, weighting: StepWeighting::default() }
    }

    pub fn with_weighting(step: f64, weighting: StepWeighting) -> CompositeSimpson {
        CompositeSimpson { step, weighting }
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn weighting(&self) -> StepWeighting {
        self.weighting
    }

    /// Subinterval count after forcing it even.
    pub fn even_subinterval_count(&self, interval: &Interval) -> Result<usize, QuadratureError> {
        let mut n = subinterval_count(self.name(), interval, self.step)?;
        if n % 2 != 0 {
            debug!(rule = self.name(), n, "odd subinterval count raised to even");
            n += 1;
        }
        if n < 2 {
            return Err(QuadratureError::invalid_argument(
                self.name(),
                format!("step size {} exceeds interval width {}; need at least 2 subintervals",
                        self.step, interval.width())
            ));
        }
        Ok(n)
    }
}

impl QuadratureRule for CompositeSimpson {
    fn name(&self) -> &str {
        SIMPSON_RULE_NAME
    }

    fn integrate(&self, integrand: &dyn Integrand, interval: &Interval) -> Result<f64, QuadratureError> {
        let n = self.even_subinterval_count(interval)?;
        let nodes = interval.uniform_nodes(n);
        let y = sample(self.name(), integrand, &nodes)?;
        let h = self.weighting.spacing(self.step, interval, n);
        let odd_sum: f64 = (1..n).step_by(2).map(|i| y[i]).sum();
        let even_sum: f64 = (2..n).step_by(2).map(|i| y[i]).sum();
        let estimate = h / 3.0 * (y[0] + 4.0 * odd_sum + 2.0 * even_sum + y[n]);
        debug!(rule = self.name(), n, h, estimate, "simpson evaluated");
        finite_estimate(self.name(), estimate)
    }
}

pub fn composite_simpson(integrand: &dyn Integrand, a: f64, b: f64, h: f64) -> Result<f64, QuadratureError> {
    CompositeSimpson::new(h).integrate(integrand, &Interval::new(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{
        assert_abs_diff_eq,
        assert_relative_eq
    };
    use crate::math::integrand::polynomial::Polynomial;
    use crate::math::quadrature::quadratureerror::QuadratureErrorKind;

    #[test]
    fn constant_is_integrated_exactly() {
        for (a, b, h) in [(0.0, 1.0, 0.05), (-2.0, 3.0, 0.7), (0.0, 10.0, 0.33), (5.0, 6.0, 1.0)] {
            let estimate = composite_simpson(&|_x: f64| -2.5, a, b, h).unwrap();
            assert_relative_eq!(estimate, -2.5 * (b - a), max_relative = 1e-13);
        }
    }

    #[test]
    fn cubics_are_integrated_exactly() {
        let cubics = [
            Polynomial::new(vec![1.0, -2.0, 0.5, 3.0]),
            Polynomial::new(vec![0.0, 0.0, 0.0, 1.0]),
            Polynomial::new(vec![-4.0, 1.0, 2.0]),
        ];
        for p in cubics.iter() {
            for (a, b, h) in [(0.0, 1.0, 0.05), (-1.0, 2.0, 0.4), (0.5, 1.5, 1.0)] {
                let estimate = composite_simpson(p, a, b, h).unwrap();
                let exact = p.exact_integral(a, b).unwrap();
                assert_abs_diff_eq!(estimate, exact, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn single_subinterval_is_forced_to_two() {
        let rule = CompositeSimpson::new(1.0);
        let interval = Interval::new(0.0, 1.0);
        assert_eq!(rule.even_subinterval_count(&interval).unwrap(), 2);
        // x^2 over [0, 1]
        let estimate = rule.integrate(&|x: f64| x * x, &interval).unwrap();
        assert_abs_diff_eq!(estimate, 1.0 / 3.0, epsilon = 1e-15);
    }

    #[test]
    fn odd_count_is_raised() {
        let rule = CompositeSimpson::new(0.3);
        assert_eq!(rule.even_subinterval_count(&Interval::new(0.0, 1.0)).unwrap(), 4);
    }

    #[test]
    fn nominal_weighting_keeps_requested_step() {
        // n = 3 -> 4, nodes 0.25 apart, weighted with h = 0.3
        let rule = CompositeSimpson::with_weighting(0.3, StepWeighting::Nominal);
        let estimate = rule.integrate(&|_x: f64| 1.0, &Interval::new(0.0, 1.0)).unwrap();
        assert_relative_eq!(estimate, 1.2, epsilon = 1e-14);
    }

    #[test]
    fn rejects_step_wider_than_interval() {
        let error = composite_simpson(&|x: f64| x, 0.0, 1.0, 1.5).unwrap_err();
        assert_eq!(error.kind(), QuadratureErrorKind::InvalidArgument);
        assert_eq!(error.rule(), SIMPSON_RULE_NAME);
    }

    #[test]
    fn infinite_integrand_is_numerical_failure() {
        let error = composite_simpson(&|x: f64| 1.0 / x, 0.0, 1.0, 0.1).unwrap_err();
        match error {
            QuadratureError::NonFiniteSample { x, .. } => assert_eq!(x, 0.0),
            other => panic!("unexpected error {other:?}")
        }
    }
}
