use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    IOError(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("scenario '{name}' is invalid: {reason}")]
    InvalidScenario {
        name: String,
        reason: String
    }
}

impl ConfigurationError {
    pub fn from_json_or_json_parse_error<T>(json_value: serde_json::Value) -> Result<T, Self>
        where T: for<'a> Deserialize<'a> {
        serde_json::from_value(json_value).map_err(ConfigurationError::JsonParseError)
    }

    pub fn invalid_scenario(name: &str, reason: impl Into<String>) -> ConfigurationError {
        ConfigurationError::InvalidScenario {
            name: name.to_owned(),
            reason: reason.into()
        }
    }
}
