use crate::outcome::{divide, require_positive, CalcResult};

/// 2:1 반타원형 경판 최소 요구두께 (반경 기준 형태).
///
/// t = P·R / (2·S·E − 0.2·P)
pub fn ellipsoidal_head_min_thickness(
    pressure_psi: f64,
    inside_radius_in: f64,
    allowable_stress_psi: f64,
    joint_efficiency: f64,
) -> CalcResult<f64> {
    let p = require_positive("pressure_psi", pressure_psi)?;
    let r = require_positive("inside_radius_in", inside_radius_in)?;
    let s = require_positive("allowable_stress_psi", allowable_stress_psi)?;
    let e = require_positive("joint_efficiency", joint_efficiency)?;
    divide(
        "ellipsoidal_head_min_thickness",
        p * r,
        2.0 * s * e - 0.2 * p,
    )
}

/// 경판 MAWP (내경 기준 형태). 검사 보고서에서 타원형/토리구형 경판에 쓰던 식.
///
/// P = 2·S·E·t / (D + 0.2·t)
pub fn head_mawp(
    thickness_in: f64,
    inside_diameter_in: f64,
    allowable_stress_psi: f64,
    joint_efficiency: f64,
) -> CalcResult<f64> {
    let t = require_positive("thickness_in", thickness_in)?;
    let d = require_positive("inside_diameter_in", inside_diameter_in)?;
    let s = require_positive("allowable_stress_psi", allowable_stress_psi)?;
    let e = require_positive("joint_efficiency", joint_efficiency)?;
    divide("head_mawp", 2.0 * s * e * t, d + 0.2 * t)
}
