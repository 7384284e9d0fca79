use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::model::biomarkers::Biomarker;
use crate::model::thresholds::{ThresholdError, ThresholdTable, Thresholds};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid thresholds: {0}")]
    Thresholds(#[from] ThresholdError),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    units: UnitsSection,
    #[serde(default)]
    thresholds: ThresholdsSection,
    #[serde(default)]
    access: AccessSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct UnitsSection {
    hscrp: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThresholdsSection {
    hscrp: Option<[f64; 4]>,
    ldl: Option<[f64; 4]>,
    lpa: Option<[f64; 4]>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct AccessSection {
    passphrase: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub thresholds: Thresholds,
    pub hscrp_unit: String,
    pub passphrase: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            hscrp_unit: Biomarker::HsCrp.default_unit().to_string(),
            passphrase: None,
        }
    }
}

impl Config {
    pub fn unit(&self, biomarker: Biomarker) -> &str {
        match biomarker {
            Biomarker::HsCrp => &self.hscrp_unit,
            other => other.default_unit(),
        }
    }
}

pub fn parse_config(text: &str) -> Result<Config, ConfigError> {
    let file: ConfigFile = toml::from_str(text)?;
    let mut config = Config::default();

    let overrides = [
        (Biomarker::HsCrp, file.thresholds.hscrp),
        (Biomarker::Ldl, file.thresholds.ldl),
        (Biomarker::LipoproteinA, file.thresholds.lpa),
    ];
    for (biomarker, breakpoints) in overrides {
        if let Some(breakpoints) = breakpoints {
            *config.thresholds.table_mut(biomarker) = ThresholdTable::new(biomarker, breakpoints)?;
        }
    }
    if let Some(unit) = file.units.hscrp {
        config.hscrp_unit = unit;
    }
    config.passphrase = file.access.passphrase.filter(|p| !p.is_empty());

    Ok(config)
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path)?;
    parse_config(&text)
}

/// Built-in defaults when no path is given.
pub fn load_config_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/config/mod.rs"]
mod tests;
