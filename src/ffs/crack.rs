use std::f64::consts::PI;

use serde::Deserialize;

use crate::outcome::{divide, require_positive, CalcResult};

use super::verdict::CRACK_BANDS;
use super::{AssessmentDetails, AssessmentKind, FfsAssessmentResult};

/// 균열형 결함 Level 1 입력. 응력 psi, 파괴인성 psi·√in.
#[derive(Debug, Clone, Deserialize)]
pub struct CrackInput {
    pub crack_depth_in: f64,
    pub applied_stress_psi: f64,
    pub fracture_toughness_psi_sqrt_in: f64,
    /// 응력확대계수 형상계수 Y
    pub geometry_factor: f64,
}

/// K_I = Y·σ·sqrt(π·a), SF = K_IC / K_I
pub fn assess_crack(input: &CrackInput) -> CalcResult<FfsAssessmentResult> {
    let a = require_positive("crack_depth_in", input.crack_depth_in)?;
    let sigma = require_positive("applied_stress_psi", input.applied_stress_psi)?;
    let k_ic = require_positive(
        "fracture_toughness_psi_sqrt_in",
        input.fracture_toughness_psi_sqrt_in,
    )?;
    let y = require_positive("geometry_factor", input.geometry_factor)?;

    let k_applied = y * sigma * (PI * a).sqrt();
    let safety_factor = divide("crack_safety_factor", k_ic, k_applied)?;

    Ok(FfsAssessmentResult {
        kind: AssessmentKind::Crack,
        safety_factor,
        verdict: CRACK_BANDS.classify(safety_factor),
        details: AssessmentDetails::Crack {
            applied_stress_intensity: k_applied,
        },
    })
}
