use crate::math::integrand::integrand::{
    AntiDerivative,
    Integrand
};

/// f(x) = x·e^(−x), F(x) = −(x + 1)·e^(−x).
#[derive(Debug, Clone, Copy, Default)]
pub struct XExpNegX;

impl XExpNegX {
    pub fn new() -> XExpNegX {
        XExpNegX
    }
}

impl AntiDerivative for XExpNegX {
    fn antiderivative(&self, x: f64) -> f64 {
        -(x + 1.0) * (-x).exp()
    }
}

impl Integrand for XExpNegX {
    fn value(&self, x: f64) -> f64 {
        x * (-x).exp()
    }

    fn exact_integral(&self, a: f64, b: f64) -> Option<f64> {
        Some(self.definite_integral(a, b))
    }
}
