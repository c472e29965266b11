//! 다중 검사 추세 분석 테스트.
mod common;

use common::{assert_close, date};
use vessel_integrity_toolbox::outcome::CalcError;
use vessel_integrity_toolbox::thickness::{DatedThickness, StatusTier, ThicknessReading};
use vessel_integrity_toolbox::trend::*;

fn tml(location: &str, thickness: f64) -> ThicknessReading {
    ThicknessReading {
        component_name: "Shell".into(),
        location_id: location.into(),
        nominal_in: Some(0.5),
        initial: None,
        previous: None,
        current: Some(DatedThickness::undated(thickness)),
    }
}

fn finding(section: &str, text: &str) -> Finding {
    Finding {
        section: section.into(),
        finding_type: "Corrosion".into(),
        description: text.into(),
    }
}

fn component(name: &str, life: f64) -> ComponentRecord {
    ComponentRecord {
        component_name: name.into(),
        remaining_life_years: Some(life),
    }
}

fn snapshots() -> Vec<InspectionSnapshot> {
    vec![
        InspectionSnapshot {
            inspection_id: "2022".into(),
            inspection_date: date(2022, 1, 1),
            readings: vec![tml("TML-1", 0.500), tml("TML-2", 0.500)],
            components: vec![component("Shell", 20.0)],
            findings: vec![finding("Shell", "Pitting near N2 nozzle")],
        },
        InspectionSnapshot {
            inspection_id: "2023".into(),
            inspection_date: date(2023, 1, 1),
            readings: vec![tml("TML-1", 0.470), tml("TML-2", 0.499)],
            components: vec![component("Shell", 18.5)],
            findings: vec![
                finding("Shell", "Pitting near N2 nozzle"),
                finding("Head", "Coating breakdown at knuckle"),
            ],
        },
        InspectionSnapshot {
            inspection_id: "2024".into(),
            inspection_date: date(2024, 1, 1),
            readings: vec![tml("TML-1", 0.430), tml("TML-2", 0.498)],
            components: vec![component(" shell ", 15.0)],
            findings: vec![
                finding("Shell", "Pitting near N2 nozzle, deepest 0.040 in"),
                finding("Bottom", "Sludge deposit"),
            ],
        },
    ]
}

#[test]
fn thickness_trend_over_two_years_is_critical() {
    let trends = thickness_trends(&snapshots()).unwrap();
    assert_eq!(trends.len(), 2);
    let worst = &trends[0];
    assert_eq!(worst.location.location_id, "TML-1");
    assert_eq!(worst.observations, 3);
    assert_close(worst.years, 2.0, 1e-12);
    assert_close(worst.rate_in_per_year, 0.035, 1e-12);
    assert_eq!(worst.status, StatusTier::Critical);
    assert_eq!(trends[1].status, StatusTier::Good);
}

#[test]
fn findings_are_classified_against_latest() {
    let report = compare_findings(&snapshots(), &PrefixSimilarityMatcher::default()).unwrap();
    assert_eq!(report.len(), 3);

    let pitting = &report[0];
    assert_eq!(pitting.status, FindingStatus::Recurring);
    assert_eq!(pitting.occurrences, 3);
    assert_eq!(pitting.first_seen, date(2022, 1, 1));

    assert_eq!(report[1].status, FindingStatus::New);
    assert_eq!(report[1].finding.section, "Bottom");

    let coating = &report[2];
    assert_eq!(coating.status, FindingStatus::Resolved);
    assert_eq!(coating.first_seen, date(2023, 1, 1));
}

struct ExactText;

impl FindingMatcher for ExactText {
    fn is_same(&self, a: &Finding, b: &Finding) -> bool {
        a == b
    }
}

#[test]
fn matcher_strategy_is_swappable() {
    let report = compare_findings(&snapshots(), &ExactText).unwrap();
    // 설명이 바뀐 피팅 지적은 정확 일치로는 신규 + 해소로 갈린다.
    let first = &report[0];
    assert_eq!(first.status, FindingStatus::New);
    assert!(report
        .iter()
        .any(|f| f.status == FindingStatus::Resolved && f.occurrences == 2));
}

#[test]
fn component_degradation_flags_acceleration() {
    let rows = component_degradation(&snapshots()).unwrap();
    assert_eq!(rows.len(), 2);
    assert_close(rows[0].acceleration_factor, 1.5, 1e-12);
    assert_eq!(rows[0].trend, DegradationTrend::Normal);
    assert_close(rows[1].acceleration_factor, 3.5, 1e-12);
    assert_eq!(rows[1].trend, DegradationTrend::Accelerating);
    assert_eq!(classify_acceleration(0.5), DegradationTrend::Improving);
}

#[test]
fn sequence_must_be_two_to_five_ascending() {
    let all = snapshots();
    assert!(matches!(
        analyze_trends(&all[..1], &PrefixSimilarityMatcher::default()),
        Err(CalcError::InvalidInput {
            field: "snapshots",
            ..
        })
    ));

    let mut reversed = all.clone();
    reversed.reverse();
    assert!(validate_sequence(&reversed).is_err());

    let mut six = all.clone();
    for year in 2025..2028 {
        let mut s = all[2].clone();
        s.inspection_date = date(year, 1, 1);
        six.push(s);
    }
    assert_eq!(six.len(), 6);
    assert!(validate_sequence(&six).is_err());
}

#[test]
fn full_report_is_repeatable() {
    let snaps = snapshots();
    let matcher = PrefixSimilarityMatcher::default();
    let a = analyze_trends(&snaps, &matcher).unwrap();
    let b = analyze_trends(&snaps, &matcher).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.thickness.len(), 2);
    assert_eq!(a.degradation.len(), 2);
}

#[test]
fn snapshots_load_from_json() {
    let json = r#"{
        "inspection_date": "2024-05-01",
        "readings": [
            {"component_name": "Shell", "location_id": "TML-1",
             "current": {"thickness_in": 0.43}}
        ]
    }"#;
    let snap: InspectionSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(snap.inspection_id, "");
    assert!(snap.findings.is_empty());
    assert_eq!(snap.readings[0].current_thickness(), Ok(0.43));
}
