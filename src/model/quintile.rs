use serde::Serialize;
use thiserror::Error;

use crate::model::biomarkers::Biomarker;
use crate::model::thresholds::Thresholds;

#[derive(Debug, Error, PartialEq)]
pub enum ClassifyError {
    #[error("invalid input for {biomarker}: {value} (expected a finite, non-negative number)")]
    InvalidInput { biomarker: Biomarker, value: f64 },
}

/// Quintile band, 1 (lowest) to 5 (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Band(u8);

impl Band {
    pub const BOTTOM: Band = Band(1);
    pub const TOP: Band = Band(5);

    pub fn new(value: u8) -> Option<Self> {
        (1..=5).contains(&value).then_some(Band(value))
    }

    /// Band whose upper breakpoint sits at `idx` in a threshold table.
    pub(crate) fn from_index(idx: usize) -> Self {
        Band(idx as u8 + 1)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_top(self) -> bool {
        self == Band::TOP
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of biomarkers in band 5, 0 to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TopQuintileCount(u8);

impl TopQuintileCount {
    pub const MAX: u8 = 3;

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(TopQuintileCount(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for TopQuintileCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Thresholds {
    pub fn classify(&self, biomarker: Biomarker, value: f64) -> Result<Band, ClassifyError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ClassifyError::InvalidInput { biomarker, value });
        }
        Ok(self.table(biomarker).band(value))
    }
}

/// Classifies against the published threshold tables.
pub fn classify(biomarker: Biomarker, value: f64) -> Result<Band, ClassifyError> {
    Thresholds::default().classify(biomarker, value)
}

pub fn top_quintile_count(bands: &[Band; 3]) -> TopQuintileCount {
    TopQuintileCount(bands.iter().filter(|b| b.is_top()).count() as u8)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/quintile.rs"]
mod tests;
