use serde::Serialize;

use crate::config::Config;
use crate::model::biomarkers::Biomarker;
use crate::model::quintile::{Band, TopQuintileCount};
use crate::model::risk::{RiskRecord, risk_table};
use crate::pipeline::evaluate::Evaluation;
use crate::report::{ACCESS_NOTICE, Access, STUDY_NOTE, STUDY_TITLE};

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a> {
    pub tool: ToolSummary,
    pub title: &'static str,
    pub access: Access,
    pub readings: Vec<ReadingSummary<'a>>,
    pub top_quintile_count: TopQuintileCount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<&'static RiskRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadingSummary<'a> {
    pub biomarker: Biomarker,
    pub value: f64,
    pub unit: &'a str,
    pub band: Band,
}

impl ToolSummary {
    fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

pub fn build_report<'a>(
    evaluation: &Evaluation,
    access: Access,
    config: &'a Config,
) -> JsonReport<'a> {
    let readings = evaluation
        .readings
        .iter()
        .map(|r| ReadingSummary {
            biomarker: r.biomarker,
            value: r.value,
            unit: config.unit(r.biomarker),
            band: r.band,
        })
        .collect();
    let (note, risk) = if access.is_granted() {
        (STUDY_NOTE, Some(evaluation.risk))
    } else {
        (ACCESS_NOTICE, None)
    };

    JsonReport {
        tool: ToolSummary::current(),
        title: STUDY_TITLE,
        access,
        readings,
        top_quintile_count: evaluation.top_quintile_count,
        note: Some(note),
        risk,
    }
}

pub fn to_json(
    evaluation: &Evaluation,
    access: Access,
    config: &Config,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&build_report(evaluation, access, config))
}

pub fn write_risk_table(out_dir: &std::path::Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(risk_table())?;
    let path = out_dir.join("risk_table.json");
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
