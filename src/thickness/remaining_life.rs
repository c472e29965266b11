use serde::Serialize;

use crate::outcome::{require_positive, CalcResult};

/// API 510 내부검사 최대 주기 [yr].
pub const MAX_INSPECTION_INTERVAL_YEARS: f64 = 10.0;

/// 잔여수명. 무한대나 0으로 대신하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "years", rename_all = "snake_case")]
pub enum RemainingLife {
    /// 최소 요구두께 도달까지 남은 연수. 이미 미달이면 음수.
    Years(f64),
    /// 부식률이 0 이하라 감육 진행이 측정되지 않음
    NotApplicable,
    /// 부식률을 산정할 이력이 없음
    Indeterminate,
}

impl RemainingLife {
    pub fn years(&self) -> Option<f64> {
        match self {
            RemainingLife::Years(y) => Some(*y),
            _ => None,
        }
    }
}

/// 잔여수명 = (현재 − 최소 요구두께) / 부식률.
pub fn remaining_life(
    current_thickness_in: f64,
    minimum_thickness_in: f64,
    rate_in_per_year: Option<f64>,
) -> CalcResult<RemainingLife> {
    let current = require_positive("current.thickness_in", current_thickness_in)?;
    let t_min = require_positive("minimum_thickness_in", minimum_thickness_in)?;
    let life = match rate_in_per_year {
        None => RemainingLife::Indeterminate,
        Some(rate) if !rate.is_finite() || rate <= 0.0 => RemainingLife::NotApplicable,
        Some(rate) => RemainingLife::Years((current - t_min) / rate),
    };
    Ok(life)
}

/// 다음 내부검사까지의 주기: min(잔여수명/2, 10년).
///
/// 감육이 측정되지 않으면 최대 주기, 이력이 없으면 `None`.
pub fn next_inspection_interval(life: RemainingLife) -> Option<f64> {
    match life {
        RemainingLife::Years(y) => Some((y / 2.0).clamp(0.0, MAX_INSPECTION_INTERVAL_YEARS)),
        RemainingLife::NotApplicable => Some(MAX_INSPECTION_INTERVAL_YEARS),
        RemainingLife::Indeterminate => None,
    }
}
