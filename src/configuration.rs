use std::fs::File;
use std::io::{
    BufReader,
    Read
};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::configurationerror::ConfigurationError;
use crate::math::integrand::integrandmanager::get_integrand_from_json;
use crate::math::quadrature::gausslegendre::CompositeGaussLegendre;
use crate::math::quadrature::interval::Interval;
use crate::math::quadrature::quadraturerule::{
    StepWeighting,
    validate_step
};
use crate::scenario::{
    GaussSettings,
    Scenario
};

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    scenarios: Vec<serde_json::Value>
}

#[derive(Deserialize)]
struct ScenarioJsonProp {
    name: String,
    integrand: serde_json::Value,
    lower: f64,
    upper: f64,
    step: f64,
    #[serde(default)]
    exact: Option<f64>,
    #[serde(default)]
    gauss: GaussSettings,
    #[serde(default)]
    weighting: StepWeighting
}

/// Scenarios loaded from a JSON configuration, in file order.
pub struct Configuration {
    scenarios: Vec<Scenario>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration { scenarios: Vec::new() }
    }

    /// Only the reference scenario.
    pub fn reference() -> Configuration {
        Configuration { scenarios: vec![Scenario::reference()] }
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn from_file(file_path: &Path) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        Configuration::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        let mut configuration = Configuration::new();
        for json_value in json_prop.scenarios {
            configuration.insert_scenario_from_json(json_value)?;
        }
        Ok(configuration)
    }

    pub fn insert_scenario_from_json(&mut self, json_value: serde_json::Value) -> Result<(), ConfigurationError> {
        let json_prop: ScenarioJsonProp = ConfigurationError::from_json_or_json_parse_error(json_value)?;
        let name = json_prop.name;

        let interval = Interval::new(json_prop.lower, json_prop.upper);
        interval.validate(&name)
            .map_err(|error| ConfigurationError::invalid_scenario(&name, error.reason()))?;
        validate_step(&name, json_prop.step)
            .map_err(|error| ConfigurationError::invalid_scenario(&name, error.reason()))?;
        if let Some(exact) = json_prop.exact {
            if !exact.is_finite() {
                return Err(ConfigurationError::invalid_scenario(&name, "exact value must be finite"));
            }
        }
        CompositeGaussLegendre::new(json_prop.gauss.points(), json_prop.gauss.panels())
            .map_err(|error| ConfigurationError::invalid_scenario(&name, error.reason()))?;

        let integrand = get_integrand_from_json(json_prop.integrand)?;
        let mut scenario = Scenario::new(name, integrand, interval, json_prop.step)
            .with_gauss(json_prop.gauss)
            .with_weighting(json_prop.weighting);
        if let Some(exact) = json_prop.exact {
            scenario = scenario.with_exact(exact);
        }
        debug!(scenario = scenario.name(), "scenario loaded");
        self.scenarios.push(scenario);
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
