use chrono::NaiveDate;
use serde::Serialize;

use crate::dates::years_between;
use crate::outcome::CalcResult;

use super::snapshot::{validate_sequence, InspectionSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DegradationTrend {
    Accelerating,
    Normal,
    Improving,
}

/// 가속 계수로 추세를 분류한다: >1.5 가속, <0.8 개선.
pub fn classify_acceleration(factor: f64) -> DegradationTrend {
    if factor > 1.5 {
        DegradationTrend::Accelerating
    } else if factor < 0.8 {
        DegradationTrend::Improving
    } else {
        DegradationTrend::Normal
    }
}

/// 연속한 두 검사 사이 부재 잔여수명 변화.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentDegradation {
    pub component_name: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub previous_remaining_life: f64,
    pub current_remaining_life: f64,
    pub elapsed_years: f64,
    /// (이전 잔여수명 − 현재 잔여수명) / 경과 연수. 정상 소모면 1.0
    pub acceleration_factor: f64,
    pub trend: DegradationTrend,
}

/// 연속 검사 쌍마다 두 검사에 모두 있는 부재의 가속 계수를 계산한다.
pub fn component_degradation(
    snapshots: &[InspectionSnapshot],
) -> CalcResult<Vec<ComponentDegradation>> {
    validate_sequence(snapshots)?;

    let mut out = Vec::new();
    for pair in snapshots.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let elapsed = years_between(prev.inspection_date, next.inspection_date);
        if elapsed <= 0.0 {
            continue;
        }
        for before in &prev.components {
            let Some(prev_life) = before.remaining_life_years.filter(|v| v.is_finite()) else {
                continue;
            };
            let after = next.components.iter().find(|c| {
                c.component_name
                    .trim()
                    .eq_ignore_ascii_case(before.component_name.trim())
            });
            let Some(cur_life) = after
                .and_then(|c| c.remaining_life_years)
                .filter(|v| v.is_finite())
            else {
                continue;
            };
            let factor = (prev_life - cur_life) / elapsed;
            out.push(ComponentDegradation {
                component_name: before.component_name.clone(),
                from_date: prev.inspection_date,
                to_date: next.inspection_date,
                previous_remaining_life: prev_life,
                current_remaining_life: cur_life,
                elapsed_years: elapsed,
                acceleration_factor: factor,
                trend: classify_acceleration(factor),
            });
        }
    }
    Ok(out)
}
