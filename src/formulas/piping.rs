use crate::outcome::{divide, require_non_negative, require_positive, CalcResult};

/// 배관 최소 요구두께 (B31.3 304.1.2).
///
/// t = P·D / (2·(S·E + P·Y)), D는 외경, Y는 온도 계수(보통 0.4)
pub fn pipe_min_thickness(
    pressure_psi: f64,
    outside_diameter_in: f64,
    allowable_stress_psi: f64,
    joint_efficiency: f64,
    y_coefficient: f64,
) -> CalcResult<f64> {
    let p = require_positive("pressure_psi", pressure_psi)?;
    let d = require_positive("outside_diameter_in", outside_diameter_in)?;
    let s = require_positive("allowable_stress_psi", allowable_stress_psi)?;
    let e = require_positive("joint_efficiency", joint_efficiency)?;
    let y = require_non_negative("y_coefficient", y_coefficient)?;
    divide("pipe_min_thickness", p * d, 2.0 * (s * e + p * y))
}

/// 주어진 두께에서 배관 최대 허용압력.
///
/// P = 2·S·E·t / (D − 2·t·Y)
pub fn pipe_max_pressure(
    thickness_in: f64,
    outside_diameter_in: f64,
    allowable_stress_psi: f64,
    joint_efficiency: f64,
    y_coefficient: f64,
) -> CalcResult<f64> {
    let t = require_positive("thickness_in", thickness_in)?;
    let d = require_positive("outside_diameter_in", outside_diameter_in)?;
    let s = require_positive("allowable_stress_psi", allowable_stress_psi)?;
    let e = require_positive("joint_efficiency", joint_efficiency)?;
    let y = require_non_negative("y_coefficient", y_coefficient)?;
    divide("pipe_max_pressure", 2.0 * s * e * t, d - 2.0 * t * y)
}

/// 파이프라인 설계압력 (B31.8 841.11).
///
/// P = (2·S·t / D) · F · E · T
/// - S: 규정 최소 항복강도(SMYS), F: 설계계수, T: 온도 감소계수
pub fn pipeline_design_pressure(
    smys_psi: f64,
    thickness_in: f64,
    outside_diameter_in: f64,
    design_factor: f64,
    joint_factor: f64,
    temperature_factor: f64,
) -> CalcResult<f64> {
    let s = require_positive("smys_psi", smys_psi)?;
    let t = require_positive("thickness_in", thickness_in)?;
    let d = require_positive("outside_diameter_in", outside_diameter_in)?;
    let f = require_positive("design_factor", design_factor)?;
    let e = require_positive("joint_factor", joint_factor)?;
    let tf = require_positive("temperature_factor", temperature_factor)?;
    Ok(2.0 * s * t / d * f * e * tf)
}
