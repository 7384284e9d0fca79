use serde::Serialize;
use thiserror::Error;

use crate::model::biomarkers::Biomarker;
use crate::model::quintile::Band;

#[derive(Debug, Error, PartialEq)]
pub enum ThresholdError {
    #[error("{biomarker}: breakpoint {index} is not finite ({value})")]
    NotFinite {
        biomarker: String,
        index: usize,
        value: f64,
    },
    #[error("{biomarker}: first breakpoint must be positive ({value})")]
    NotPositive { biomarker: String, value: f64 },
    #[error("{biomarker}: breakpoints must be strictly increasing ({prev} >= {next})")]
    NotIncreasing {
        biomarker: String,
        prev: f64,
        next: f64,
    },
}

/// Four ascending breakpoints splitting `[0, inf)` into bands 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ThresholdTable {
    breakpoints: [f64; 4],
}

pub const HSCRP_BREAKPOINTS: ThresholdTable = ThresholdTable {
    breakpoints: [0.65, 1.47, 2.75, 5.18],
};
pub const LDL_BREAKPOINTS: ThresholdTable = ThresholdTable {
    breakpoints: [96.1, 113.5, 129.7, 150.7],
};
pub const LPA_BREAKPOINTS: ThresholdTable = ThresholdTable {
    breakpoints: [3.6, 7.6, 15.5, 44.1],
};

impl ThresholdTable {
    pub fn new(biomarker: Biomarker, breakpoints: [f64; 4]) -> Result<Self, ThresholdError> {
        for (index, value) in breakpoints.iter().enumerate() {
            if !value.is_finite() {
                return Err(ThresholdError::NotFinite {
                    biomarker: biomarker.as_str().to_string(),
                    index,
                    value: *value,
                });
            }
        }
        if breakpoints[0] <= 0.0 {
            return Err(ThresholdError::NotPositive {
                biomarker: biomarker.as_str().to_string(),
                value: breakpoints[0],
            });
        }
        for pair in breakpoints.windows(2) {
            if pair[0] >= pair[1] {
                return Err(ThresholdError::NotIncreasing {
                    biomarker: biomarker.as_str().to_string(),
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }
        Ok(Self { breakpoints })
    }

    pub fn breakpoints(&self) -> &[f64; 4] {
        &self.breakpoints
    }

    /// Caller guarantees `value` is finite and non-negative.
    pub fn band(&self, value: f64) -> Band {
        for (idx, bp) in self.breakpoints.iter().enumerate() {
            if value < *bp {
                return Band::from_index(idx);
            }
        }
        Band::TOP
    }

    /// Half-open `[low, high)` range for `band`; band 1 starts at 0 and
    /// band 5 has no upper bound.
    pub fn range(&self, band: Band) -> (f64, Option<f64>) {
        let idx = band.get() as usize - 1;
        let low = if idx == 0 { 0.0 } else { self.breakpoints[idx - 1] };
        let high = self.breakpoints.get(idx).copied();
        (low, high)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub hscrp: ThresholdTable,
    pub ldl: ThresholdTable,
    pub lpa: ThresholdTable,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            hscrp: HSCRP_BREAKPOINTS,
            ldl: LDL_BREAKPOINTS,
            lpa: LPA_BREAKPOINTS,
        }
    }
}

impl Thresholds {
    pub fn table(&self, biomarker: Biomarker) -> &ThresholdTable {
        match biomarker {
            Biomarker::HsCrp => &self.hscrp,
            Biomarker::Ldl => &self.ldl,
            Biomarker::LipoproteinA => &self.lpa,
        }
    }

    pub fn table_mut(&mut self, biomarker: Biomarker) -> &mut ThresholdTable {
        match biomarker {
            Biomarker::HsCrp => &mut self.hscrp,
            Biomarker::Ldl => &mut self.ldl,
            Biomarker::LipoproteinA => &mut self.lpa,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
