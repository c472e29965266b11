//! TML 두께 이력으로부터 부식률·잔여수명·상태 등급을 계산한다.
//! 입력이 바뀔 수 있으므로 결과는 호출마다 새로 계산하며 캐시하지 않는다.

pub mod component;
pub mod rates;
pub mod reading;
pub mod remaining_life;
pub mod status;
pub mod summary;

use serde::Serialize;

use crate::outcome::{require_positive, CalcError, CalcResult};

pub use component::{evaluate_component, ComponentCalculation, ComponentKind};
pub use rates::{
    corrosion_rate_mpy, effective_rate, loss_percentage, long_term_rate, short_term_rate,
    EffectiveRate, MilsPerYear, RateBasis, DEFAULT_TIME_SPAN_YEARS,
};
pub use reading::{DatedThickness, LocationKey, ThicknessReading};
pub use remaining_life::{next_inspection_interval, remaining_life, RemainingLife};
pub use status::{combined_tier, StatusTier};
pub use summary::{summarize_inspection, InspectionSummary, SkippedLocation, WorstLife};

/// 한 위치의 부식 분석 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrosionAnalysisResult {
    pub location: LocationKey,
    pub current_thickness_in: f64,
    pub minimum_thickness_in: f64,
    pub short_term_rate: Option<f64>,
    pub long_term_rate: Option<f64>,
    pub effective_rate: Option<EffectiveRate>,
    pub corrosion_rate_mpy: Option<MilsPerYear>,
    pub remaining_life: RemainingLife,
    pub next_inspection_years: Option<f64>,
    pub loss_percent: Option<f64>,
    /// 측정 두께가 증가한 구간이 있음 (측정 편차 신호)
    pub thickness_gain: bool,
    pub status: Option<StatusTier>,
}

/// 한 TML을 분석한다.
///
/// 현재 두께나 최소 요구두께가 잘못되면 `Err`. 이력 부족은 각 필드의 `None`/`Indeterminate`로
/// 표현하고 오류로 보지 않는다.
pub fn analyze_reading(
    reading: &ThicknessReading,
    minimum_thickness_in: f64,
) -> CalcResult<CorrosionAnalysisResult> {
    let current = reading.current_thickness()?;
    let t_min = require_positive("minimum_thickness_in", minimum_thickness_in)?;

    let short = CalcError::indeterminate_as_none(short_term_rate(reading))?;
    let long = CalcError::indeterminate_as_none(long_term_rate(reading))?;
    let effective = CalcError::indeterminate_as_none(effective_rate(reading))?;
    let mpy = CalcError::indeterminate_as_none(corrosion_rate_mpy(reading))?;

    let life = remaining_life(current, t_min, effective.map(|r| r.in_per_year))?;

    let loss = match reading.nominal_in {
        Some(nominal) if nominal.is_finite() && nominal > 0.0 => {
            Some(loss_percentage(nominal, current)?)
        }
        _ => None,
    };

    let thickness_gain = [short, long, mpy.map(|m| m.mils_per_year)]
        .into_iter()
        .flatten()
        .any(|r| r < 0.0);

    let rate_for_status = effective
        .map(|r| r.in_per_year * 1000.0)
        .or(mpy.map(|m| m.mils_per_year));
    let status = combined_tier(rate_for_status, life.years());

    Ok(CorrosionAnalysisResult {
        location: reading.key(),
        current_thickness_in: current,
        minimum_thickness_in: t_min,
        short_term_rate: short,
        long_term_rate: long,
        effective_rate: effective,
        corrosion_rate_mpy: mpy,
        remaining_life: life,
        next_inspection_years: next_inspection_interval(life),
        loss_percent: loss,
        thickness_gain,
        status,
    })
}
