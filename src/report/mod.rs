pub mod json;
pub mod text;

use serde::Serialize;

/// Outcome of the access gate, decided by the caller before rendering.
/// Denied reports keep the bands and count but withhold hazard ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Granted,
    Denied,
}

impl Access {
    pub fn from_passphrase(expected: Option<&str>, supplied: Option<&str>) -> Self {
        match expected {
            None => Access::Granted,
            Some(expected) if supplied == Some(expected) => Access::Granted,
            Some(_) => Access::Denied,
        }
    }

    pub fn is_granted(self) -> bool {
        self == Access::Granted
    }
}

pub const STUDY_TITLE: &str = "Women's 3 Variable 30 Year Hazard Ratio Estimator";

pub const STUDY_NOTE: &str = "Covariable adjusted HRs (95% CI) of total cardiovascular events, \
coronary heart disease events, and stroke events for individuals with 0, 1, 2, or 3 biomarker \
levels in the 5th quintile with follow-up censored at time of first reported statin prescription.";

pub const ACCESS_NOTICE: &str = "Hazard ratios are withheld: a valid passphrase is required.";

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
