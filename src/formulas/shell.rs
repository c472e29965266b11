use crate::outcome::{divide, require_positive, CalcResult};

/// 원통 동체 최소 요구두께 (원주 응력 기준, UG-27(c)(1)).
///
/// t = P·R / (S·E − 0.6·P)
pub fn shell_min_thickness(
    pressure_psi: f64,
    inside_radius_in: f64,
    allowable_stress_psi: f64,
    joint_efficiency: f64,
) -> CalcResult<f64> {
    let p = require_positive("pressure_psi", pressure_psi)?;
    let r = require_positive("inside_radius_in", inside_radius_in)?;
    let s = require_positive("allowable_stress_psi", allowable_stress_psi)?;
    let e = require_positive("joint_efficiency", joint_efficiency)?;
    divide("shell_min_thickness", p * r, s * e - 0.6 * p)
}

/// 원통 동체 MAWP.
///
/// P = S·E·t / (R + 0.6·t)
pub fn shell_mawp(
    thickness_in: f64,
    inside_radius_in: f64,
    allowable_stress_psi: f64,
    joint_efficiency: f64,
) -> CalcResult<f64> {
    let t = require_positive("thickness_in", thickness_in)?;
    let r = require_positive("inside_radius_in", inside_radius_in)?;
    let s = require_positive("allowable_stress_psi", allowable_stress_psi)?;
    let e = require_positive("joint_efficiency", joint_efficiency)?;
    divide("shell_mawp", s * e * t, r + 0.6 * t)
}
