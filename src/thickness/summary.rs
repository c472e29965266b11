use serde::Serialize;

use crate::outcome::CalcError;

use super::reading::{LocationKey, ThicknessReading};
use super::{analyze_reading, CorrosionAnalysisResult};

/// 분석하지 못한 위치와 그 사유.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedLocation {
    pub location: LocationKey,
    pub error: CalcError,
}

/// 최소 잔여수명 위치.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorstLife {
    pub location: LocationKey,
    pub years: f64,
}

/// 한 번의 검사 전체에 대한 최악값 집계.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectionSummary {
    pub results: Vec<CorrosionAnalysisResult>,
    pub skipped: Vec<SkippedLocation>,
    pub max_corrosion_rate_mpy: Option<f64>,
    pub max_rate_location: Option<LocationKey>,
    pub min_remaining_life: Option<WorstLife>,
}

/// 모든 TML을 분석하고 최대 부식률과 최소 잔여수명을 집계한다.
///
/// `minimum_thickness_for`는 행 순번과 측정값을 받는다. 같은 위치 키가 여러 행에 있어도
/// 행마다 다른 최소 두께를 줄 수 있다. `None`을 주는 위치나 입력이 잘못된 위치는
/// `skipped`로 모으고 나머지 계산을 계속한다.
pub fn summarize_inspection<F>(readings: &[ThicknessReading], minimum_thickness_for: F) -> InspectionSummary
where
    F: Fn(usize, &ThicknessReading) -> Option<f64>,
{
    let mut results = Vec::with_capacity(readings.len());
    let mut skipped = Vec::new();

    for (index, reading) in readings.iter().enumerate() {
        let outcome = match minimum_thickness_for(index, reading) {
            Some(t_min) => analyze_reading(reading, t_min),
            None => Err(CalcError::InvalidInput {
                field: "minimum_thickness_in",
                reason: "값이 없습니다",
            }),
        };
        match outcome {
            Ok(result) => results.push(result),
            Err(error) => skipped.push(SkippedLocation {
                location: reading.key(),
                error,
            }),
        }
    }

    let mut max_rate: Option<(f64, &LocationKey)> = None;
    let mut min_life: Option<(f64, &LocationKey)> = None;
    for r in &results {
        let rate = r
            .effective_rate
            .map(|e| e.in_per_year * 1000.0)
            .or(r.corrosion_rate_mpy.map(|m| m.mils_per_year));
        if let Some(rate) = rate {
            if max_rate.map_or(true, |(best, _)| rate > best) {
                max_rate = Some((rate, &r.location));
            }
        }
        if let Some(years) = r.remaining_life.years() {
            if min_life.map_or(true, |(best, _)| years < best) {
                min_life = Some((years, &r.location));
            }
        }
    }

    let max_corrosion_rate_mpy = max_rate.map(|(rate, _)| rate);
    let max_rate_location = max_rate.map(|(_, loc)| loc.clone());
    let min_remaining_life = min_life.map(|(years, loc)| WorstLife {
        location: loc.clone(),
        years,
    });

    InspectionSummary {
        results,
        skipped,
        max_corrosion_rate_mpy,
        max_rate_location,
        min_remaining_life,
    }
}
