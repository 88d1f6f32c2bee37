use crate::math::integrand::integrand::{
    AntiDerivative,
    Integrand
};

/// f(x) = e^x
#[derive(Debug, Clone, Copy, Default)]
pub struct Exp;

impl AntiDerivative for Exp {
    fn antiderivative(&self, x: f64) -> f64 {
        x.exp()
    }
}

impl Integrand for Exp {
    fn value(&self, x: f64) -> f64 {
        x.exp()
    }

    fn exact_integral(&self, a: f64, b: f64) -> Option<f64> {
        Some(self.definite_integral(a, b))
    }
}

/// f(x) = sin x
#[derive(Debug, Clone, Copy, Default)]
pub struct Sin;

impl AntiDerivative for Sin {
    fn antiderivative(&self, x: f64) -> f64 {
        -x.cos()
    }
}

impl Integrand for Sin {
    fn value(&self, x: f64) -> f64 {
        x.sin()
    }

    fn exact_integral(&self, a: f64, b: f64) -> Option<f64> {
        Some(self.definite_integral(a, b))
    }
}
