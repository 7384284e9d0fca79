//! Published hazard ratios keyed by the number of biomarkers in the top
//! quintile. Covariable-adjusted HRs (95% CI) of total cardiovascular,
//! coronary heart disease and stroke events, with follow-up censored at the
//! first reported statin prescription.

use serde::Serialize;
use thiserror::Error;

use crate::model::quintile::TopQuintileCount;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RiskError {
    #[error("invalid input: top-quintile count {0} is outside 0..=3")]
    InvalidInput(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Outcome {
    MajorCardiovascularEvent,
    CoronaryHeartDisease,
    Stroke,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::MajorCardiovascularEvent => "mace",
            Outcome::CoronaryHeartDisease => "chd",
            Outcome::Stroke => "stroke",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::MajorCardiovascularEvent => "First Major Cardiovascular Event",
            Outcome::CoronaryHeartDisease => "Coronary Heart Disease Events",
            Outcome::Stroke => "Stroke Events",
        }
    }

    pub fn ordered() -> &'static [Outcome; 3] {
        &[
            Outcome::MajorCardiovascularEvent,
            Outcome::CoronaryHeartDisease,
            Outcome::Stroke,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HazardRatio {
    pub hr: f64,
    /// `None` for the referent group.
    pub ci: Option<ConfidenceInterval>,
}

impl HazardRatio {
    const fn referent() -> Self {
        Self { hr: 1.0, ci: None }
    }

    const fn new(hr: f64, low: f64, high: f64) -> Self {
        Self {
            hr,
            ci: Some(ConfidenceInterval { low, high }),
        }
    }

    pub fn is_referent(&self) -> bool {
        self.ci.is_none()
    }
}

impl std::fmt::Display for HazardRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.ci {
            None => write!(f, "HR={:.1} (referent)", self.hr),
            Some(ci) => write!(
                f,
                "HR={:.2} (95% CI: {:.2}-{:.2})",
                self.hr, ci.low, ci.high
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutcomeRisk {
    pub outcome: Outcome,
    pub hazard: HazardRatio,
    pub statement: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskRecord {
    pub count: u8,
    pub summary: &'static str,
    pub outcomes: [OutcomeRisk; 3],
}

impl RiskRecord {
    pub fn for_count(count: TopQuintileCount) -> &'static RiskRecord {
        &RISK_TABLE[count.get() as usize]
    }

    pub fn outcome(&self, outcome: Outcome) -> &OutcomeRisk {
        &self.outcomes[outcome as usize]
    }
}

pub fn lookup_risk(count: u8) -> Result<&'static RiskRecord, RiskError> {
    TopQuintileCount::new(count)
        .map(RiskRecord::for_count)
        .ok_or(RiskError::InvalidInput(count))
}

pub fn risk_table() -> &'static [RiskRecord; 4] {
    &RISK_TABLE
}

static RISK_TABLE: [RiskRecord; 4] = [
    RiskRecord {
        count: 0,
        summary: "Referent group: No biomarkers in the top quintile.",
        outcomes: [
            OutcomeRisk {
                outcome: Outcome::MajorCardiovascularEvent,
                hazard: HazardRatio::referent(),
                statement: "No increased risk of a first major cardiovascular event relative to the referent group.",
            },
            OutcomeRisk {
                outcome: Outcome::CoronaryHeartDisease,
                hazard: HazardRatio::referent(),
                statement: "No increased risk of coronary heart disease events relative to the referent group.",
            },
            OutcomeRisk {
                outcome: Outcome::Stroke,
                hazard: HazardRatio::referent(),
                statement: "No increased risk of stroke events relative to the referent group.",
            },
        ],
    },
    RiskRecord {
        count: 1,
        summary: "One biomarker in the top quintile.",
        outcomes: [
            OutcomeRisk {
                outcome: Outcome::MajorCardiovascularEvent,
                hazard: HazardRatio::new(1.38, 1.25, 1.51),
                statement: "1.38 times more likely to experience a first major cardiovascular event than the referent group (no biomarkers in the top quintile).",
            },
            OutcomeRisk {
                outcome: Outcome::CoronaryHeartDisease,
                hazard: HazardRatio::new(1.54, 1.35, 1.75),
                statement: "1.54 times more likely to experience a coronary heart disease event than the referent group (no biomarkers in the top quintile).",
            },
            OutcomeRisk {
                outcome: Outcome::Stroke,
                hazard: HazardRatio::new(1.14, 0.96, 1.34),
                statement: "1.14 times more likely to experience a stroke than the referent group (no biomarkers in the top quintile).",
            },
        ],
    },
    RiskRecord {
        count: 2,
        summary: "Two biomarkers in the top quintile.",
        outcomes: [
            OutcomeRisk {
                outcome: Outcome::MajorCardiovascularEvent,
                hazard: HazardRatio::new(1.68, 1.46, 1.93),
                statement: "1.68 times more likely to experience a first major cardiovascular event than the referent group (no biomarkers in the top quintile).",
            },
            OutcomeRisk {
                outcome: Outcome::CoronaryHeartDisease,
                hazard: HazardRatio::new(1.98, 1.65, 2.39),
                statement: "1.98 times more likely to experience a coronary heart disease event than the referent group (no biomarkers in the top quintile).",
            },
            OutcomeRisk {
                outcome: Outcome::Stroke,
                hazard: HazardRatio::new(1.63, 1.28, 2.06),
                statement: "1.63 times more likely to experience a stroke than the referent group (no biomarkers in the top quintile).",
            },
        ],
    },
    RiskRecord {
        count: 3,
        summary: "All three biomarkers in the top quintile.",
        outcomes: [
            OutcomeRisk {
                outcome: Outcome::MajorCardiovascularEvent,
                hazard: HazardRatio::new(3.21, 2.41, 4.27),
                statement: "3.21 times more likely to experience a first major cardiovascular event than the referent group (no biomarkers in the top quintile).",
            },
            OutcomeRisk {
                outcome: Outcome::CoronaryHeartDisease,
                hazard: HazardRatio::new(4.08, 2.88, 5.77),
                statement: "4.08 times more likely to experience a coronary heart disease event than the referent group (no biomarkers in the top quintile).",
            },
            OutcomeRisk {
                outcome: Outcome::Stroke,
                hazard: HazardRatio::new(2.87, 1.71, 4.84),
                statement: "2.87 times more likely to experience a stroke than the referent group (no biomarkers in the top quintile).",
            },
        ],
    },
];

#[cfg(test)]
#[path = "../../tests/src_inline/model/risk.rs"]
mod tests;
