use crate::math::integrand::integrand::{
    AntiDerivative,
    Integrand
};

// ─────────────────────────────────────────────────────────────────────────────
// Polynomial - monomial form
// ─────────────────────────────────────────────────────────────────────────────
//
//   p(x) = c_0 + c_1·x + ... + c_k·x^k
//
// 係數以升冪排列，求值使用 Horner 形式

#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefs: Vec<f64>,
    /// 反導函數係數 [0, c_0, c_1/2, ..., c_k/(k+1)]
    antiderivative_coefs: Vec<f64>
}

impl Polynomial {
    /// Empty coefficients give the zero polynomial.
    pub fn new(coefs: Vec<f64>) -> Polynomial {
        let coefs = if coefs.is_empty() { vec![0.0] } else { coefs };
        let antiderivative_coefs = Self::compute_antiderivative_coefs(&coefs);
        Polynomial { coefs, antiderivative_coefs }
    }

    pub fn constant(value: f64) -> Polynomial {
        Polynomial::new(vec![value])
    }

    pub fn coefs(&self) -> &[f64] {
        &self.coefs
    }

    pub fn degree(&self) -> usize {
        self.coefs.len() - 1
    }

    fn compute_antiderivative_coefs(coefs: &[f64]) -> Vec<f64> {
        std::iter::once(0.0)
            .chain(coefs.iter().enumerate().map(|(k, &c)| c / (k + 1) as f64))
            .collect()
    }

    fn horner(coefs: &[f64], x: f64) -> f64 {
        let mut iter = coefs.iter().rev();
        let mut result = *iter.next().unwrap_or(&0.0);
        for &c in iter {
            result = f64::mul_add(result, x, c);
        }
        result
    }
}

impl AntiDerivative for Polynomial {
    fn antiderivative(&self, x: f64) -> f64 {
        Self::horner(&self.antiderivative_coefs, x)
    }
}

impl Integrand for Polynomial {
    fn value(&self, x: f64) -> f64 {
        Self::horner(&self.coefs, x)
    }

    fn exact_integral(&self, a: f64, b: f64) -> Option<f64> {
        Some(self.definite_integral(a, b))
    }
}
