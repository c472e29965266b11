use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::outcome::{require_present, CalcResult};

/// 날짜가 붙은 두께 측정값 [in]. 날짜가 없는 기록도 받아들인다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedThickness {
    pub thickness_in: f64,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl DatedThickness {
    pub fn new(thickness_in: f64, date: NaiveDate) -> Self {
        Self {
            thickness_in,
            date: Some(date),
        }
    }

    pub fn undated(thickness_in: f64) -> Self {
        Self {
            thickness_in,
            date: None,
        }
    }
}

/// TML(두께 측정 위치) 식별자.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocationKey {
    pub component_name: String,
    pub location_id: String,
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.component_name, self.location_id)
    }
}

/// 한 TML의 두께 이력. current ≤ previous ≤ initial을 기대하지만 강제하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThicknessReading {
    pub component_name: String,
    pub location_id: String,
    /// 공칭(설계) 두께, 날짜 없음
    #[serde(default)]
    pub nominal_in: Option<f64>,
    #[serde(default)]
    pub initial: Option<DatedThickness>,
    #[serde(default)]
    pub previous: Option<DatedThickness>,
    #[serde(default)]
    pub current: Option<DatedThickness>,
}

impl ThicknessReading {
    pub fn key(&self) -> LocationKey {
        LocationKey {
            component_name: self.component_name.clone(),
            location_id: self.location_id.clone(),
        }
    }

    /// 현재 두께. 없거나 0 이하이면 계산 대상이 아니다.
    pub fn current_thickness(&self) -> CalcResult<f64> {
        require_present(
            "current.thickness_in",
            self.current.as_ref().map(|c| c.thickness_in),
        )
    }
}
