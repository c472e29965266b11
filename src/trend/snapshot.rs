use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::outcome::{CalcError, CalcResult};
use crate::thickness::ThicknessReading;

pub const MIN_SNAPSHOTS: usize = 2;
pub const MAX_SNAPSHOTS: usize = 5;

/// 검사 보고서의 지적 사항.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub section: String,
    pub finding_type: String,
    pub description: String,
}

/// 한 검사 시점의 부재 계산 요약.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub component_name: String,
    #[serde(default)]
    pub remaining_life_years: Option<f64>,
}

/// 한 시점의 검사 기록.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionSnapshot {
    #[serde(default)]
    pub inspection_id: String,
    pub inspection_date: NaiveDate,
    #[serde(default)]
    pub readings: Vec<ThicknessReading>,
    #[serde(default)]
    pub components: Vec<ComponentRecord>,
    #[serde(default)]
    pub findings: Vec<Finding>,
}

/// 2~5개, 검사일 엄격 오름차순인지 확인한다.
pub fn validate_sequence(snapshots: &[InspectionSnapshot]) -> CalcResult<()> {
    if !(MIN_SNAPSHOTS..=MAX_SNAPSHOTS).contains(&snapshots.len()) {
        return Err(CalcError::InvalidInput {
            field: "snapshots",
            reason: "검사 기록은 2~5개여야 합니다",
        });
    }
    if snapshots
        .windows(2)
        .any(|w| w[1].inspection_date <= w[0].inspection_date)
    {
        return Err(CalcError::InvalidInput {
            field: "snapshots",
            reason: "검사일은 엄격한 오름차순이어야 합니다",
        });
    }
    Ok(())
}
