//! TML 부식률/잔여수명/상태 등급 테스트.
mod common;

use common::{assert_close, date};
use vessel_integrity_toolbox::design::{JointEfficiency, VesselDesignParameters};
use vessel_integrity_toolbox::outcome::CalcError;
use vessel_integrity_toolbox::thickness::remaining_life::MAX_INSPECTION_INTERVAL_YEARS;
use vessel_integrity_toolbox::thickness::*;

fn reading(
    previous: Option<DatedThickness>,
    current: Option<DatedThickness>,
    nominal: Option<f64>,
) -> ThicknessReading {
    ThicknessReading {
        component_name: "Shell".into(),
        location_id: "TML-1".into(),
        nominal_in: nominal,
        initial: None,
        previous,
        current,
    }
}

#[test]
fn one_year_short_term_rate() {
    let r = reading(
        Some(DatedThickness::new(0.500, date(2023, 1, 1))),
        Some(DatedThickness::new(0.480, date(2024, 1, 1))),
        None,
    );
    assert_close(short_term_rate(&r).unwrap(), 0.020, 1e-12);
    let mpy = corrosion_rate_mpy(&r).unwrap();
    assert_close(mpy.mils_per_year, 20.0, 1e-9);
    assert!(!mpy.assumed_time_span);
    assert_eq!(effective_rate(&r).unwrap().basis, RateBasis::ShortTerm);
}

#[test]
fn undated_rate_is_flagged_as_assumed() {
    let r = reading(
        Some(DatedThickness::undated(0.500)),
        Some(DatedThickness::undated(0.480)),
        None,
    );
    let mpy = corrosion_rate_mpy(&r).unwrap();
    assert_close(mpy.mils_per_year, 20.0, 1e-9);
    assert_eq!(mpy.time_span_years, DEFAULT_TIME_SPAN_YEARS);
    assert!(mpy.assumed_time_span);
    assert!(matches!(
        short_term_rate(&r),
        Err(CalcError::InsufficientHistory { .. })
    ));
}

#[test]
fn long_term_rate_is_used_when_previous_missing() {
    let mut r = reading(None, Some(DatedThickness::new(0.440, date(2024, 6, 1))), None);
    r.initial = Some(DatedThickness::new(0.500, date(2020, 6, 1)));
    let rate = effective_rate(&r).unwrap();
    assert_eq!(rate.basis, RateBasis::LongTerm);
    assert_close(rate.in_per_year, 0.015, 1e-12);
}

#[test]
fn zero_previous_reading_falls_back_to_long_term() {
    let mut r = reading(
        Some(DatedThickness::new(0.0, date(2023, 1, 1))),
        Some(DatedThickness::new(0.460, date(2024, 1, 1))),
        Some(0.500),
    );
    r.initial = Some(DatedThickness::new(0.500, date(2020, 1, 1)));

    assert_close(long_term_rate(&r).unwrap(), 0.010, 1e-12);
    assert!(matches!(
        short_term_rate(&r),
        Err(CalcError::InsufficientHistory { .. })
    ));
    let rate = effective_rate(&r).unwrap();
    assert_eq!(rate.basis, RateBasis::LongTerm);
    assert_close(rate.in_per_year, 0.010, 1e-12);

    let res = analyze_reading(&r, 0.300).unwrap();
    assert_eq!(res.short_term_rate, None);
    assert_eq!(res.corrosion_rate_mpy, None);
    assert_close(res.long_term_rate.unwrap(), 0.010, 1e-12);
    assert_close(res.remaining_life.years().unwrap(), 16.0, 1e-9);
}

#[test]
fn thickness_gain_gives_negative_loss_without_error() {
    let loss = loss_percentage(0.450, 0.485).unwrap();
    assert_close(loss, -7.78, 0.005);

    let r = reading(
        Some(DatedThickness::new(0.450, date(2023, 1, 1))),
        Some(DatedThickness::new(0.485, date(2024, 1, 1))),
        Some(0.450),
    );
    let res = analyze_reading(&r, 0.300).unwrap();
    assert!(res.thickness_gain);
    assert_eq!(res.remaining_life, RemainingLife::NotApplicable);
    assert_eq!(res.next_inspection_years, Some(MAX_INSPECTION_INTERVAL_YEARS));
    assert!(res.loss_percent.unwrap() < 0.0);
}

#[test]
fn analysis_combines_rate_and_life_tiers() {
    let r = reading(
        Some(DatedThickness::new(0.500, date(2023, 1, 1))),
        Some(DatedThickness::new(0.480, date(2024, 1, 1))),
        Some(0.500),
    );
    let res = analyze_reading(&r, 0.300).unwrap();
    let years = res.remaining_life.years().unwrap();
    assert_close(years, 9.0, 1e-9);
    assert_close(res.next_inspection_years.unwrap(), 4.5, 1e-9);
    assert_close(res.loss_percent.unwrap(), 4.0, 1e-9);
    // 20 mpy → critical, 9년 → good: 더 심각한 쪽
    assert_eq!(res.status, Some(StatusTier::Critical));
    assert!(!res.thickness_gain);
}

#[test]
fn no_history_is_indeterminate_not_zero() {
    let r = reading(None, Some(DatedThickness::new(0.480, date(2024, 1, 1))), None);
    let res = analyze_reading(&r, 0.300).unwrap();
    assert_eq!(res.effective_rate, None);
    assert_eq!(res.remaining_life, RemainingLife::Indeterminate);
    assert_eq!(res.next_inspection_years, None);
    assert_eq!(res.status, None);
    assert_eq!(res.loss_percent, None);
}

#[test]
fn missing_current_thickness_is_invalid() {
    let r = reading(Some(DatedThickness::undated(0.5)), None, None);
    assert!(matches!(
        analyze_reading(&r, 0.3),
        Err(CalcError::InvalidInput { .. })
    ));
}

#[test]
fn inspection_interval_is_half_life_capped() {
    assert_eq!(next_inspection_interval(RemainingLife::Years(30.0)), Some(10.0));
    assert_eq!(next_inspection_interval(RemainingLife::Years(8.0)), Some(4.0));
    assert_eq!(next_inspection_interval(RemainingLife::Years(-1.0)), Some(0.0));
    assert_eq!(next_inspection_interval(RemainingLife::Indeterminate), None);
}

#[test]
fn summary_skips_bad_locations_and_keeps_going() {
    let good = reading(
        Some(DatedThickness::new(0.500, date(2023, 1, 1))),
        Some(DatedThickness::new(0.480, date(2024, 1, 1))),
        None,
    );
    let mut slow = good.clone();
    slow.location_id = "TML-2".into();
    slow.current = Some(DatedThickness::new(0.495, date(2024, 1, 1)));
    let mut no_min = good.clone();
    no_min.location_id = "TML-3".into();

    let readings = vec![good, slow, no_min];
    let summary = summarize_inspection(&readings, |_, r| {
        (r.location_id != "TML-3").then_some(0.300)
    });
    assert_eq!(summary.results.len(), 2);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].location.location_id, "TML-3");
    assert_close(summary.max_corrosion_rate_mpy.unwrap(), 20.0, 1e-9);
    assert_eq!(
        summary.max_rate_location.as_ref().map(|l| l.location_id.as_str()),
        Some("TML-1")
    );
    let worst = summary.min_remaining_life.unwrap();
    assert_eq!(worst.location.location_id, "TML-1");
    assert_close(worst.years, 9.0, 1e-9);
}

#[test]
fn summary_keeps_per_row_minimums_for_repeated_locations() {
    let first = reading(
        Some(DatedThickness::new(0.500, date(2023, 1, 1))),
        Some(DatedThickness::new(0.480, date(2024, 1, 1))),
        None,
    );
    let second = first.clone();
    let minimums = [0.300, 0.400];

    let summary = summarize_inspection(&[first, second], |i, _| minimums.get(i).copied());
    assert_eq!(summary.results.len(), 2);
    assert_eq!(summary.results[0].location, summary.results[1].location);
    assert_eq!(summary.results[0].minimum_thickness_in, 0.300);
    assert_eq!(summary.results[1].minimum_thickness_in, 0.400);
    assert_close(summary.min_remaining_life.unwrap().years, 4.0, 1e-9);
}

fn shell_params() -> VesselDesignParameters {
    VesselDesignParameters {
        design_pressure_psi: 150.0,
        design_temperature_f: 500.0,
        inside_diameter_in: 48.0,
        joint_efficiency: JointEfficiency::Spot,
        corrosion_allowance_in: 0.125,
        allowable_stress_psi: 20_000.0,
    }
}

#[test]
fn component_mawp_uses_corroded_thickness() {
    let calc =
        evaluate_component("Shell", ComponentKind::Shell, &shell_params(), 0.500, Some(0.010))
            .unwrap();
    assert_close(calc.required_thickness_in, 3600.0 / 16_910.0, 1e-12);
    assert_close(calc.mawp_psi, 6375.0 / 24.225, 1e-9);
    let life = calc.remaining_life.years().unwrap();
    assert_close(life, (0.500 - 3600.0 / 16_910.0) / 0.010, 1e-9);
    assert_eq!(calc.next_inspection_years, Some(10.0));
}

#[test]
fn component_fully_corroded_is_invalid() {
    let err = evaluate_component(
        "Head",
        ComponentKind::EllipsoidalHead,
        &shell_params(),
        0.100,
        None,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CalcError::InvalidInput {
            field: "corroded_thickness_in",
            ..
        }
    ));
}

#[test]
fn analysis_is_repeatable() {
    let r = reading(
        Some(DatedThickness::new(0.500, date(2022, 3, 15))),
        Some(DatedThickness::new(0.471, date(2024, 9, 30))),
        Some(0.500),
    );
    assert_eq!(analyze_reading(&r, 0.25), analyze_reading(&r, 0.25));
}
