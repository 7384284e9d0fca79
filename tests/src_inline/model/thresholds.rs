use super::*;

#[test]
fn default_tables_match_published_breakpoints() {
    let t = Thresholds::default();
    assert_eq!(t.hscrp.breakpoints(), &[0.65, 1.47, 2.75, 5.18]);
    assert_eq!(t.ldl.breakpoints(), &[96.1, 113.5, 129.7, 150.7]);
    assert_eq!(t.lpa.breakpoints(), &[3.6, 7.6, 15.5, 44.1]);
}

#[test]
fn default_tables_pass_validation() {
    for biomarker in Biomarker::ordered() {
        let table = *Thresholds::default().table(*biomarker);
        let rebuilt = ThresholdTable::new(*biomarker, *table.breakpoints()).expect("valid");
        assert_eq!(rebuilt, table);
    }
}

#[test]
fn rejects_non_increasing_breakpoints() {
    let err = ThresholdTable::new(Biomarker::Ldl, [96.1, 96.1, 129.7, 150.7]).unwrap_err();
    assert_eq!(
        err,
        ThresholdError::NotIncreasing {
            biomarker: "ldl".to_string(),
            prev: 96.1,
            next: 96.1,
        }
    );
    assert!(ThresholdTable::new(Biomarker::Ldl, [4.0, 3.0, 2.0, 1.0]).is_err());
}

#[test]
fn rejects_non_finite_breakpoints() {
    let err = ThresholdTable::new(Biomarker::HsCrp, [0.65, f64::INFINITY, 2.75, 5.18]).unwrap_err();
    assert!(matches!(err, ThresholdError::NotFinite { index: 1, .. }));
    assert!(ThresholdTable::new(Biomarker::HsCrp, [f64::NAN, 1.0, 2.0, 3.0]).is_err());
}

#[test]
fn rejects_non_positive_first_breakpoint() {
    let err = ThresholdTable::new(Biomarker::Ldl, [-10.0, 0.0, 5.0, 10.0]).unwrap_err();
    assert_eq!(
        err,
        ThresholdError::NotPositive {
            biomarker: "ldl".to_string(),
            value: -10.0,
        }
    );
    assert!(matches!(
        ThresholdTable::new(Biomarker::Ldl, [0.0, 1.0, 2.0, 3.0]).unwrap_err(),
        ThresholdError::NotPositive { .. }
    ));
}

#[test]
fn zero_lands_in_band_one_for_any_accepted_table() {
    for breakpoints in [[1e-9, 1.0, 2.0, 3.0], [0.5, 0.6, 0.7, 0.8], [10.0, 20.0, 30.0, 40.0]] {
        let table = ThresholdTable::new(Biomarker::Ldl, breakpoints).expect("valid");
        assert_eq!(table.band(0.0), Band::BOTTOM);
        let (low, high) = table.range(Band::BOTTOM);
        assert!(high.is_some_and(|h| h > low));
    }
}

#[test]
fn band_ranges_are_contiguous() {
    let table = LPA_BREAKPOINTS;
    assert_eq!(table.range(Band::BOTTOM), (0.0, Some(3.6)));
    assert_eq!(table.range(Band::new(3).unwrap()), (7.6, Some(15.5)));
    assert_eq!(table.range(Band::TOP), (44.1, None));
    for b in 1..5u8 {
        let (_, high) = table.range(Band::new(b).unwrap());
        let (low, _) = table.range(Band::new(b + 1).unwrap());
        assert_eq!(high, Some(low));
    }
}
