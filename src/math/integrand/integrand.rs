/// A real function of one real variable.
///
/// `values` is the vectorized form; the default maps `value` over the slice,
/// implementors with a cheaper batch evaluation can override it. The result
/// must have the same length as `xs`.
pub trait Integrand: Send + Sync {
    fn value(&self, x: f64) -> f64;

    fn values(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.value(x)).collect()
    }

    /// Closed-form ∫_a^b, when the integrand knows its antiderivative.
    fn exact_integral(&self, _a: f64, _b: f64) -> Option<f64> {
        None
    }
}

/// Integrands with a closed-form antiderivative F, F' = f.
pub trait AntiDerivative {
    fn antiderivative(&self, x: f64) -> f64;

    fn definite_integral(&self, a: f64, b: f64) -> f64 {
        self.antiderivative(b) - self.antiderivative(a)
    }
}

impl<F> Integrand for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}
