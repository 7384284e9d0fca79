use super::*;
use crate::model::biomarkers::Readings;
use crate::model::thresholds::Thresholds;
use crate::pipeline::evaluate::evaluate;

fn evaluation(hscrp: f64, ldl: f64, lpa: f64) -> Evaluation {
    evaluate(&Readings::new(hscrp, ldl, lpa), &Thresholds::default()).expect("evaluate")
}

#[test]
fn granted_report_lists_bands_and_hazard_ratios() {
    let config = Config::default();
    let report = render_report(&evaluation(6.0, 90.0, 2.0), Access::Granted, &config);
    assert!(report.starts_with(STUDY_TITLE));
    assert!(report.contains("- hsCRP (6 mg/L): quintile 5\n"));
    assert!(report.contains("- LDL cholesterol (90 mg/dL): quintile 1\n"));
    assert!(report.contains("Number of biomarkers in the top quintile: 1\n"));
    assert!(report.contains("- First Major Cardiovascular Event: HR=1.38 (95% CI: 1.25-1.51)\n"));
    assert!(report.contains("- Stroke Events: HR=1.14 (95% CI: 0.96-1.34)\n"));
    assert!(report.contains("1.54 times more likely"));
    assert!(report.contains(STUDY_NOTE));
}

#[test]
fn referent_report() {
    let report = render_report(&evaluation(0.5, 90.0, 2.0), Access::Granted, &Config::default());
    assert!(report.contains("Referent group: No biomarkers in the top quintile.\n"));
    assert!(report.contains("- Coronary Heart Disease Events: HR=1.0 (referent)\n"));
}

#[test]
fn denied_report_withholds_hazard_ratios() {
    let report = render_report(&evaluation(6.0, 160.0, 50.0), Access::Denied, &Config::default());
    assert!(report.contains("Number of biomarkers in the top quintile: 3\n"));
    assert!(report.contains(ACCESS_NOTICE));
    assert!(!report.contains("HR="));
    assert!(!report.contains("times more likely"));
}

#[test]
fn report_is_deterministic() {
    let e = evaluation(2.0, 130.0, 16.0);
    let config = Config::default();
    assert_eq!(
        render_report(&e, Access::Granted, &config),
        render_report(&e, Access::Granted, &config)
    );
}

#[test]
fn thresholds_tsv_has_five_rows_per_biomarker() {
    let tsv = render_thresholds(&Config::default());
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines[0], "biomarker\tunit\tband\tlow\thigh");
    assert_eq!(lines.len(), 1 + 15);
    assert_eq!(lines[1], "hscrp\tmg/L\t1\t0\t0.65");
    assert_eq!(lines[5], "hscrp\tmg/L\t5\t5.18\t.");
    assert_eq!(lines[6], "ldl\tmg/dL\t1\t0\t96.1");
}

#[test]
fn risk_table_tsv() {
    let tsv = render_risk_table();
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines.len(), 1 + 12);
    assert_eq!(lines[1], "0\tmace\t1.00\t.\t.");
    assert_eq!(lines[12], "3\tstroke\t2.87\t1.71\t4.84");
}
