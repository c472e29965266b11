use serde::{Deserialize, Serialize};

use crate::design::VesselDesignParameters;
use crate::formulas::{ellipsoidal_head_min_thickness, head_mawp, shell_mawp, shell_min_thickness};
use crate::outcome::{require_positive, CalcResult};

use super::remaining_life::{next_inspection_interval, remaining_life, RemainingLife};

/// 계산 대상 부재 형상.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Shell,
    EllipsoidalHead,
}

/// 부재 단위 계산 결과 (요구두께, 현재 두께 기준 MAWP, 잔여수명).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentCalculation {
    pub component_name: String,
    pub kind: ComponentKind,
    pub required_thickness_in: f64,
    pub current_thickness_in: f64,
    /// (현재 두께 − 부식여유)에서의 MAWP
    pub mawp_psi: f64,
    pub remaining_life: RemainingLife,
    pub next_inspection_years: Option<f64>,
}

/// 설계 조건과 현재 두께로 부재 계산을 수행한다.
pub fn evaluate_component(
    component_name: &str,
    kind: ComponentKind,
    params: &VesselDesignParameters,
    current_thickness_in: f64,
    corrosion_rate_in_per_year: Option<f64>,
) -> CalcResult<ComponentCalculation> {
    params.validate()?;
    let current = require_positive("current_thickness_in", current_thickness_in)?;
    let corroded = require_positive(
        "corroded_thickness_in",
        current - params.corrosion_allowance_in,
    )?;
    let s = params.allowable_stress_psi;
    let e = params.joint_efficiency.value();
    let p = params.design_pressure_psi;

    let (required, mawp) = match kind {
        ComponentKind::Shell => (
            shell_min_thickness(p, params.inside_radius_in(), s, e)?,
            shell_mawp(corroded, params.inside_radius_in(), s, e)?,
        ),
        ComponentKind::EllipsoidalHead => (
            ellipsoidal_head_min_thickness(p, params.inside_radius_in(), s, e)?,
            head_mawp(corroded, params.inside_diameter_in, s, e)?,
        ),
    };

    let life = remaining_life(current, required, corrosion_rate_in_per_year)?;

    Ok(ComponentCalculation {
        component_name: component_name.to_string(),
        kind,
        required_thickness_in: required,
        current_thickness_in: current,
        mawp_psi: mawp,
        remaining_life: life,
        next_inspection_years: next_inspection_interval(life),
    })
}
