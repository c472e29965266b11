use serde::Deserialize;

use crate::outcome::{require_positive, CalcResult};

use super::verdict::METAL_LOSS_BANDS;
use super::{AssessmentDetails, AssessmentKind, FfsAssessmentResult};

/// 전면 감육 Level 1 입력.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralMetalLossInput {
    pub current_thickness_in: f64,
    pub minimum_thickness_in: f64,
    pub design_pressure_psi: f64,
    pub operating_pressure_psi: f64,
}

/// SF = (t_cur / t_min) / (P_op / P_design)
pub fn assess_general_metal_loss(input: &GeneralMetalLossInput) -> CalcResult<FfsAssessmentResult> {
    let t_cur = require_positive("current_thickness_in", input.current_thickness_in)?;
    let t_min = require_positive("minimum_thickness_in", input.minimum_thickness_in)?;
    let p_design = require_positive("design_pressure_psi", input.design_pressure_psi)?;
    let p_op = require_positive("operating_pressure_psi", input.operating_pressure_psi)?;

    let thickness_ratio = t_cur / t_min;
    let pressure_ratio = p_op / p_design;
    let safety_factor = thickness_ratio / pressure_ratio;

    Ok(FfsAssessmentResult {
        kind: AssessmentKind::GeneralMetalLoss,
        safety_factor,
        verdict: METAL_LOSS_BANDS.classify(safety_factor),
        details: AssessmentDetails::GeneralMetalLoss {
            thickness_ratio,
            pressure_ratio,
        },
    })
}
