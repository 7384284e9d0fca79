use crate::config::Config;
use crate::model::biomarkers::Biomarker;
use crate::model::quintile::Band;
use crate::model::risk::risk_table;
use crate::pipeline::evaluate::Evaluation;
use crate::report::{ACCESS_NOTICE, Access, STUDY_NOTE, STUDY_TITLE};

pub fn render_report(evaluation: &Evaluation, access: Access, config: &Config) -> String {
    let mut out = String::new();
    out.push_str(STUDY_TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(STUDY_TITLE.len()));
    out.push_str("\n\n");

    out.push_str("Quintiles:\n");
    for reading in &evaluation.readings {
        out.push_str(&format!(
            "- {} ({} {}): quintile {}\n",
            reading.biomarker.label(),
            reading.value,
            config.unit(reading.biomarker),
            reading.band
        ));
    }
    out.push('\n');

    out.push_str(&format!(
        "Number of biomarkers in the top quintile: {}\n\n",
        evaluation.top_quintile_count
    ));

    if !access.is_granted() {
        out.push_str(ACCESS_NOTICE);
        out.push('\n');
        return out;
    }

    out.push_str(STUDY_NOTE);
    out.push_str("\n\n");

    let risk = evaluation.risk;
    out.push_str(risk.summary);
    out.push('\n');
    for entry in &risk.outcomes {
        out.push_str(&format!("- {}: {}\n", entry.outcome.label(), entry.hazard));
    }
    out.push('\n');

    out.push_str("Interpretation:\n");
    for entry in &risk.outcomes {
        out.push_str(&format!("- {}\n", entry.statement));
    }

    out
}

/// One line per band range, tab separated, for the `thresholds` command.
pub fn render_thresholds(config: &Config) -> String {
    let mut out = String::new();
    out.push_str("biomarker\tunit\tband\tlow\thigh\n");
    for biomarker in Biomarker::ordered() {
        let table = config.thresholds.table(*biomarker);
        for band in (1..=5).filter_map(Band::new) {
            let (low, high) = table.range(band);
            let high = high.map_or_else(|| ".".to_string(), |h| h.to_string());
            out.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\n",
                biomarker.as_str(),
                config.unit(*biomarker),
                band,
                low,
                high
            ));
        }
    }
    out
}

pub fn render_risk_table() -> String {
    let mut out = String::new();
    out.push_str("count\toutcome\thr\tci_low\tci_high\n");
    for record in risk_table() {
        for entry in &record.outcomes {
            let (low, high) = match entry.hazard.ci {
                Some(ci) => (format!("{:.2}", ci.low), format!("{:.2}", ci.high)),
                None => (".".to_string(), ".".to_string()),
            };
            out.push_str(&format!(
                "{}\t{}\t{:.2}\t{}\t{}\n",
                record.count,
                entry.outcome.as_str(),
                entry.hazard.hr,
                low,
                high
            ));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
