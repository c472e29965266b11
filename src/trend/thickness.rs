use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::dates::years_between;
use crate::outcome::CalcResult;
use crate::thickness::status::tier_from_rate_mpy;
use crate::thickness::{LocationKey, StatusTier};

use super::snapshot::{validate_sequence, InspectionSnapshot};

/// 위치별 다중 검사 두께 추세.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThicknessTrend {
    pub location: LocationKey,
    pub observations: usize,
    pub first_thickness_in: f64,
    pub last_thickness_in: f64,
    pub years: f64,
    pub rate_in_per_year: f64,
    pub status: StatusTier,
}

/// 모든 검사의 TML을 (부재, 위치)로 묶어 첫/마지막 측정 사이 부식률을 계산한다.
///
/// 관측이 2개 미만인 위치는 제외한다. 결과는 부식률 내림차순이다.
pub fn thickness_trends(snapshots: &[InspectionSnapshot]) -> CalcResult<Vec<ThicknessTrend>> {
    validate_sequence(snapshots)?;

    let mut groups: BTreeMap<LocationKey, Vec<(NaiveDate, f64)>> = BTreeMap::new();
    for snapshot in snapshots {
        for reading in &snapshot.readings {
            let Some(current) = reading.current.as_ref() else {
                continue;
            };
            if !current.thickness_in.is_finite() || current.thickness_in <= 0.0 {
                continue;
            }
            let date = current.date.unwrap_or(snapshot.inspection_date);
            groups
                .entry(reading.key())
                .or_default()
                .push((date, current.thickness_in));
        }
    }

    let mut trends: Vec<ThicknessTrend> = groups
        .into_iter()
        .filter_map(|(location, mut obs)| {
            if obs.len() < 2 {
                return None;
            }
            obs.sort_by_key(|(date, _)| *date);
            let (first_date, first_t) = obs[0];
            let (last_date, last_t) = obs[obs.len() - 1];
            let years = years_between(first_date, last_date);
            if years <= 0.0 {
                return None;
            }
            let rate = (first_t - last_t) / years;
            Some(ThicknessTrend {
                location,
                observations: obs.len(),
                first_thickness_in: first_t,
                last_thickness_in: last_t,
                years,
                rate_in_per_year: rate,
                status: tier_from_rate_mpy(rate * 1000.0),
            })
        })
        .collect();

    trends.sort_by(|a, b| b.rate_in_per_year.total_cmp(&a.rate_in_per_year));
    Ok(trends)
}
