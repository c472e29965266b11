use serde::Deserialize;

use crate::outcome::{divide, require_positive, CalcError, CalcResult};

use super::verdict::METAL_LOSS_BANDS;
use super::{AssessmentDetails, AssessmentKind, FfsAssessmentResult};

/// 국부 감육(LTA) Level 1 입력.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalMetalLossInput {
    /// 결함 길이 L [in]
    pub flaw_length_in: f64,
    /// 결함 폭 c [in]
    pub flaw_width_in: f64,
    /// 결함 깊이 d [in]
    pub flaw_depth_in: f64,
    /// 결함부 잔여 두께 [in]
    pub remaining_thickness_in: f64,
    pub design_pressure_psi: f64,
    pub allowable_stress_psi: f64,
    pub yield_strength_psi: f64,
}

/// Folias 계수 Mt = sqrt(1 + 0.6275·λ − 0.003375·λ²), λ = L/c.
///
/// λ가 커서 근호 안이 0 이하가 되면 `DegenerateFormula`.
pub fn folias_factor(flaw_length_in: f64, flaw_width_in: f64) -> CalcResult<f64> {
    let l = require_positive("flaw_length_in", flaw_length_in)?;
    let c = require_positive("flaw_width_in", flaw_width_in)?;
    let lambda = l / c;
    let radicand = 1.0 + 0.6275 * lambda - 0.003375 * lambda * lambda;
    if radicand <= 0.0 {
        return Err(CalcError::DegenerateFormula {
            formula: "folias_factor",
        });
    }
    Ok(radicand.sqrt())
}

/// SF = min(S, 0.9·Sy) / (P·Mt / (1 − d/(d + t_rem)))
pub fn assess_local_metal_loss(input: &LocalMetalLossInput) -> CalcResult<FfsAssessmentResult> {
    let mt = folias_factor(input.flaw_length_in, input.flaw_width_in)?;
    let d = require_positive("flaw_depth_in", input.flaw_depth_in)?;
    let t_rem = require_positive("remaining_thickness_in", input.remaining_thickness_in)?;
    let p = require_positive("design_pressure_psi", input.design_pressure_psi)?;
    let s = require_positive("allowable_stress_psi", input.allowable_stress_psi)?;
    let sy = require_positive("yield_strength_psi", input.yield_strength_psi)?;

    let depth_ratio = d / (d + t_rem);
    let applied_stress = divide("local_metal_loss_applied_stress", p * mt, 1.0 - depth_ratio)?;
    let allowable_stress = s.min(0.9 * sy);
    let safety_factor = divide("local_metal_loss_safety_factor", allowable_stress, applied_stress)?;

    Ok(FfsAssessmentResult {
        kind: AssessmentKind::LocalMetalLoss,
        safety_factor,
        verdict: METAL_LOSS_BANDS.classify(safety_factor),
        details: AssessmentDetails::LocalMetalLoss {
            folias_factor: mt,
            depth_ratio,
            applied_stress_psi: applied_stress,
            allowable_stress_psi: allowable_stress,
        },
    })
}
