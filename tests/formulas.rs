//! 설계 공식 회귀 테스트.
mod common;

use common::assert_close;
use vessel_integrity_toolbox::formulas::*;
use vessel_integrity_toolbox::outcome::CalcError;

#[test]
fn shell_thickness_round_trips_through_mawp() {
    for &(p, r, s, e) in &[
        (150.0, 24.0, 20_000.0, 0.85),
        (600.0, 36.0, 17_100.0, 1.0),
        (50.0, 6.0, 15_700.0, 0.70),
    ] {
        let t = shell_min_thickness(p, r, s, e).unwrap();
        let back = shell_mawp(t, r, s, e).unwrap();
        assert!((back - p).abs() / p < 1e-3, "p={p} back={back}");
    }
}

#[test]
fn pipe_thickness_round_trips_through_pressure() {
    let (p, d, s, e, y) = (740.0, 8.625, 20_000.0, 1.0, 0.4);
    let t = pipe_min_thickness(p, d, s, e, y).unwrap();
    assert_close(pipe_max_pressure(t, d, s, e, y).unwrap(), p, p * 1e-3);
}

#[test]
fn ellipsoidal_head_matches_hand_calc() {
    // 150·24 / (2·20000·0.85 − 30)
    let t = ellipsoidal_head_min_thickness(150.0, 24.0, 20_000.0, 0.85).unwrap();
    assert_close(t, 3600.0 / 33_970.0, 1e-9);
    // 2·20000·0.85·0.25 / (48 + 0.05)
    let p = head_mawp(0.25, 48.0, 20_000.0, 0.85).unwrap();
    assert_close(p, 8500.0 / 48.05, 1e-9);
}

#[test]
fn pipeline_design_pressure_b31_8() {
    // X52, 16" × 0.375", class 1 div 2 (F=0.72)
    let p = pipeline_design_pressure(52_000.0, 0.375, 16.0, 0.72, 1.0, 1.0).unwrap();
    assert_close(p, 1755.0, 1e-6);
}

#[test]
fn non_positive_denominator_is_degenerate() {
    let err = shell_min_thickness(2_000.0, 24.0, 1_000.0, 1.0).unwrap_err();
    assert_eq!(
        err,
        CalcError::DegenerateFormula {
            formula: "shell_min_thickness"
        }
    );
    assert!(matches!(
        pipe_max_pressure(12.0, 8.0, 20_000.0, 1.0, 0.4),
        Err(CalcError::DegenerateFormula { .. })
    ));
}

#[test]
fn rejects_missing_or_zero_inputs() {
    assert!(matches!(
        shell_mawp(0.5, 24.0, 20_000.0, 0.0),
        Err(CalcError::InvalidInput {
            field: "joint_efficiency",
            ..
        })
    ));
    assert!(matches!(
        pipe_min_thickness(f64::NAN, 8.625, 20_000.0, 1.0, 0.4),
        Err(CalcError::InvalidInput { .. })
    ));
}

#[test]
fn same_inputs_give_identical_bits() {
    let a = shell_min_thickness(150.0, 24.0, 20_000.0, 0.85).unwrap();
    let b = shell_min_thickness(150.0, 24.0, 20_000.0, 0.85).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}
