pub mod cli;
pub mod config;
pub mod model;
pub mod pipeline;
pub mod report;

pub mod prelude {
    pub use crate::model::biomarkers::{Biomarker, Readings};
    pub use crate::model::quintile::{Band, TopQuintileCount, classify, top_quintile_count};
    pub use crate::model::risk::{RiskRecord, lookup_risk};
    pub use crate::pipeline::evaluate::{Evaluation, evaluate};
}
