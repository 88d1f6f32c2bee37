use std::sync::Arc;

use serde::Deserialize;

use crate::configurationerror::ConfigurationError;
use crate::math::integrand::elementary::{
    Exp,
    Sin
};
use crate::math::integrand::integrand::Integrand;
use crate::math::integrand::polynomial::Polynomial;
use crate::math::integrand::xexpnegx::XExpNegX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum IntegrandType {
    XExpNegX,
    Polynomial,
    Constant,
    Exp,
    Sin
}

#[derive(Deserialize)]
struct IntegrandTypedObject {
    integrand_type: IntegrandType
}

#[derive(Deserialize)]
struct PolynomialJsonProp {
    coefficients: Vec<f64>
}

#[derive(Deserialize)]
struct ConstantJsonProp {
    value: f64
}

/// Builds an integrand from `{"integrand_type": ..., ...}`.
pub fn get_integrand_from_json(json_value: serde_json::Value) -> Result<Arc<dyn Integrand>, ConfigurationError> {
    let typed_object: IntegrandTypedObject = ConfigurationError::from_json_or_json_parse_error(json_value.clone())?;
    let integrand: Arc<dyn Integrand> = match typed_object.integrand_type {
        IntegrandType::XExpNegX => Arc::new(XExpNegX::new()),
        IntegrandType::Polynomial => {
            let json_prop: PolynomialJsonProp = ConfigurationError::from_json_or_json_parse_error(json_value)?;
            Arc::new(Polynomial::new(json_prop.coefficients))
        },
        IntegrandType::Constant => {
            let json_prop: ConstantJsonProp = ConfigurationError::from_json_or_json_parse_error(json_value)?;
            Arc::new(Polynomial::constant(json_prop.value))
        },
        IntegrandType::Exp => Arc::new(Exp),
        IntegrandType::Sin => Arc::new(Sin)
    };
    Ok(integrand)
}
