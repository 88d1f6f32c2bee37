use std::sync::Arc;

use serde::{
    Deserialize,
    Serialize
};
use tracing::info;

use crate::evaluation::comparator::compare;
use crate::evaluation::evaluationerror::EvaluationError;
use crate::evaluation::evaluator::Evaluator;
use crate::math::integrand::integrand::Integrand;
use crate::math::integrand::xexpnegx::XExpNegX;
use crate::math::quadrature::compositesimpson::CompositeSimpson;
use crate::math::quadrature::compositetrapezoid::CompositeTrapezoid;
use crate::math::quadrature::gausslegendre::CompositeGaussLegendre;
use crate::math::quadrature::interval::Interval;
use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::quadraturerule::{
    QuadratureRule,
    StepWeighting
};
use crate::report::report::Report;

pub const REFERENCE_SCENARIO_NAME: &str = "reference";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaussSettings {
    #[serde(default = "GaussSettings::default_points")]
    points: usize,
    #[serde(default = "GaussSettings::default_panels")]
    panels: usize
}

impl GaussSettings {
    pub fn new(points: usize, panels: usize) -> GaussSettings {
        GaussSettings { points, panels }
    }

    fn default_points() -> usize {
        2
    }

    fn default_panels() -> usize {
        1
    }

    pub fn points(&self) -> usize {
        self.points
    }

    pub fn panels(&self) -> usize {
        self.panels
    }
}

impl Default for GaussSettings {
    fn default() -> Self {
        GaussSettings::new(Self::default_points(), Self::default_panels())
    }
}

/// Integrand, interval and rule parameters for one comparison run.
#[derive(Clone)]
pub struct Scenario {
    name: String,
    integrand: Arc<dyn Integrand>,
    interval: Interval,
    step: f64,
    exact: Option<f64>,
    gauss: GaussSettings,
    weighting: StepWeighting
}

impl Scenario {
    pub fn new(name: String, integrand: Arc<dyn Integrand>, interval: Interval, step: f64) -> Scenario {
        Scenario {
            name,
            integrand,
            interval,
            step,
            exact: None,
            gauss: GaussSettings::default(),
            weighting: StepWeighting::default()
        }
    }

    /// f(x) = x·e^(−x) on [0, 1], h = 0.05, exact value 1 − 2/e.
    pub fn reference() -> Scenario {
        Scenario::new(
            REFERENCE_SCENARIO_NAME.to_owned(),
            Arc::new(XExpNegX::new()),
            Interval::new(0.0, 1.0),
            0.05
        ).with_exact(1.0 - 2.0 / std::f64::consts::E)
    }

    pub fn with_exact(mut self, exact: f64) -> Scenario {
        self.exact = Some(exact);
        self
    }

    pub fn with_gauss(mut self, gauss: GaussSettings) -> Scenario {
        self.gauss = gauss;
        self
    }

    pub fn with_weighting(mut self, weighting: StepWeighting) -> Scenario {
        self.weighting = weighting;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn integrand(&self) -> &dyn Integrand {
        &*self.integrand
    }

    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn gauss(&self) -> GaussSettings {
        self.gauss
    }

    pub fn weighting(&self) -> StepWeighting {
        self.weighting
    }

    /// The given exact value, else the integrand's closed-form integral.
    pub fn exact_value(&self) -> Result<f64, EvaluationError> {
        self.exact
            .or_else(|| self.integrand.exact_integral(self.interval.lower(), self.interval.upper()))
            .ok_or_else(|| EvaluationError::InvalidArgument(
                format!("scenario '{}' has no exact value and its integrand has no closed form", self.name)
            ))
    }

    /// Trapezoid, Simpson and Gauss-Legendre, in that order.
    pub fn rules(&self) -> Result<Vec<Arc<dyn QuadratureRule>>, QuadratureError> {
        let gauss = CompositeGaussLegendre::new(self.gauss.points(), self.gauss.panels())?;
        Ok(vec![
            Arc::new(CompositeTrapezoid::with_weighting(self.step, self.weighting)),
            Arc::new(CompositeSimpson::with_weighting(self.step, self.weighting)),
            Arc::new(gauss),
        ])
    }

    pub fn run(&self, parallel: bool) -> Result<Report, EvaluationError> {
        let exact = self.exact_value()?;
        let evaluator = Evaluator::new(self.rules()?).with_parallel(parallel);
        let estimates = evaluator.evaluate(self.integrand(), &self.interval)?;
        let comparison = compare(&estimates, exact)?;
        info!(scenario = self.name.as_str(), rules = estimates.len(), "scenario evaluated");
        Ok(Report::new(self.name.clone(), self.interval, exact, estimates, comparison))
    }
}
