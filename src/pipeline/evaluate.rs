use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::model::biomarkers::{Biomarker, Readings};
use crate::model::quintile::{Band, ClassifyError, TopQuintileCount, top_quintile_count};
use crate::model::risk::RiskRecord;
use crate::model::thresholds::Thresholds;

#[derive(Debug, Error, PartialEq)]
pub enum EvaluateError {
    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandedReading {
    pub biomarker: Biomarker,
    pub value: f64,
    pub band: Band,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub readings: [BandedReading; 3],
    pub top_quintile_count: TopQuintileCount,
    pub risk: &'static RiskRecord,
}

impl Evaluation {
    pub fn bands(&self) -> [Band; 3] {
        [
            self.readings[0].band,
            self.readings[1].band,
            self.readings[2].band,
        ]
    }

    pub fn band(&self, biomarker: Biomarker) -> Band {
        self.readings[biomarker as usize].band
    }
}

pub fn evaluate(readings: &Readings, thresholds: &Thresholds) -> Result<Evaluation, EvaluateError> {
    let banded = |biomarker: Biomarker| -> Result<BandedReading, ClassifyError> {
        let value = readings.get(biomarker);
        let band = thresholds.classify(biomarker, value)?;
        debug!(biomarker = biomarker.as_str(), value, band = band.get(), "classified");
        Ok(BandedReading {
            biomarker,
            value,
            band,
        })
    };
    let readings = [
        banded(Biomarker::HsCrp)?,
        banded(Biomarker::Ldl)?,
        banded(Biomarker::LipoproteinA)?,
    ];
    let bands = [readings[0].band, readings[1].band, readings[2].band];

    let count = top_quintile_count(&bands);
    let risk = RiskRecord::for_count(count);
    info!(
        hscrp_band = bands[0].get(),
        ldl_band = bands[1].get(),
        lpa_band = bands[2].get(),
        top_quintile_count = count.get(),
        "evaluation finished"
    );

    Ok(Evaluation {
        readings,
        top_quintile_count: count,
        risk,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/evaluate.rs"]
mod tests;
