//! RBI 점수 테스트.
mod common;

use common::assert_close;
use vessel_integrity_toolbox::outcome::CalcError;
use vessel_integrity_toolbox::rbi::*;

fn input(
    pressure: f64,
    temperature: f64,
    fluid: &str,
    rate: f64,
    mechanism: &str,
    eff: f64,
) -> RbiInput {
    RbiInput {
        operating_pressure_psi: pressure,
        operating_temperature_f: temperature,
        fluid: FluidHazard::classify(fluid),
        corrosion_rate_in_per_year: rate,
        mechanism: DamageMechanism::classify(mechanism),
        inspection_effectiveness: eff,
    }
}

#[test]
fn hydrogen_service_with_good_inspection_is_low() {
    let score = score_risk(&input(700.0, 850.0, "Hydrogen", 0.012, "general", 0.9)).unwrap();
    assert_eq!(score.consequence_score, 7);
    assert_close(score.probability_score, 0.4, 1e-12);
    assert_close(score.risk, 2.8, 1e-12);
    assert_eq!(score.risk_level, RiskLevel::Low);
    assert_eq!(score.recommended_interval_years, 10.0);
}

#[test]
fn cracking_hydrocarbon_is_high() {
    let score = score_risk(&input(200.0, 500.0, "crude oil", 0.006, "chloride SCC", 0.5)).unwrap();
    assert_eq!(score.consequence_score, 4);
    assert_close(score.probability_score, 2.5, 1e-12);
    assert_eq!(score.risk_level, RiskLevel::High);
    assert_eq!(score.recommended_interval_years, 2.0);
}

#[test]
fn medium_band_between_three_and_six() {
    // 결과 1+1+0+0=2, 확률 (1+1+0)·1.0=2 → 4
    let score = score_risk(&input(300.0, 100.0, "water", 0.003, "general", 0.0)).unwrap();
    assert_close(score.risk, 4.0, 1e-12);
    assert_eq!(score.risk_level, RiskLevel::Medium);
    assert_eq!(score.recommended_interval_years, 5.0);
}

#[test]
fn effectiveness_outside_unit_range_is_rejected() {
    assert!(matches!(
        score_risk(&input(100.0, 100.0, "water", 0.0, "general", 1.5)),
        Err(CalcError::InvalidInput {
            field: "inspection_effectiveness",
            ..
        })
    ));
}

#[test]
fn inert_services_add_no_fluid_consequence() {
    let water = score_risk(&input(300.0, 100.0, "water", 0.003, "general", 0.0)).unwrap();
    for fluid in ["boiler feed water", "nitrogen gas", "degassed water"] {
        let score = score_risk(&input(300.0, 100.0, fluid, 0.003, "general", 0.0)).unwrap();
        assert_eq!(score.consequence_score, water.consequence_score, "{fluid}");
    }
}
