pub mod biomarkers;
pub mod quintile;
pub mod risk;
pub mod thresholds;
