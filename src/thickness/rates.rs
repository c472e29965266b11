use serde::Serialize;

use crate::dates::years_between;
use crate::outcome::{require_positive, CalcError, CalcResult};

use super::reading::{DatedThickness, ThicknessReading};

/// 검사일이 없을 때 가정하는 검사 주기 [yr].
pub const DEFAULT_TIME_SPAN_YEARS: f64 = 1.0;

/// 유효 부식률이 어느 구간에서 나왔는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBasis {
    ShortTerm,
    LongTerm,
}

/// 유효 부식률 [in/yr].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EffectiveRate {
    pub in_per_year: f64,
    pub basis: RateBasis,
}

/// mils/yr 단위 부식률. `assumed_time_span`이면 날짜 없이 1년 주기를 가정한 값이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MilsPerYear {
    pub mils_per_year: f64,
    pub time_span_years: f64,
    pub assumed_time_span: bool,
}

/// 단기 부식률 = (이전 − 현재) / 경과 연수.
pub fn short_term_rate(reading: &ThicknessReading) -> CalcResult<f64> {
    dated_rate(reading.previous.as_ref(), reading, "previous 측정값 또는 날짜 없음")
}

/// 장기 부식률 = (최초 − 현재) / 경과 연수.
pub fn long_term_rate(reading: &ThicknessReading) -> CalcResult<f64> {
    dated_rate(reading.initial.as_ref(), reading, "initial 측정값 또는 날짜 없음")
}

/// 단기 부식률을 우선하고, 없으면 장기 부식률을 쓴다. 둘 다 없으면 이력 부족이다(0이 아님).
pub fn effective_rate(reading: &ThicknessReading) -> CalcResult<EffectiveRate> {
    if let Some(rate) = CalcError::indeterminate_as_none(short_term_rate(reading))? {
        return Ok(EffectiveRate {
            in_per_year: rate,
            basis: RateBasis::ShortTerm,
        });
    }
    let rate = long_term_rate(reading)?;
    Ok(EffectiveRate {
        in_per_year: rate,
        basis: RateBasis::LongTerm,
    })
}

/// mils/yr 부식률 = (이전 − 현재) × 1000 / 경과 연수.
///
/// 이전·현재 날짜가 모두 있으면 실제 경과 연수를 쓰고, 하나라도 없으면
/// `DEFAULT_TIME_SPAN_YEARS`를 가정하고 `assumed_time_span`을 표시한다.
pub fn corrosion_rate_mpy(reading: &ThicknessReading) -> CalcResult<MilsPerYear> {
    let current = reading.current_thickness()?;
    let previous = reading
        .previous
        .as_ref()
        .ok_or(CalcError::InsufficientHistory {
            what: "previous 측정값 없음",
        })?;
    let previous_t = earlier_thickness(previous, "previous 두께가 0 이하")?;
    let current_date = reading.current.as_ref().and_then(|c| c.date);

    let (span, assumed) = match (previous.date, current_date) {
        (Some(from), Some(to)) => {
            let years = years_between(from, to);
            if years <= 0.0 {
                return Err(CalcError::InsufficientHistory {
                    what: "이전 검사일이 현재 검사일보다 늦거나 같음",
                });
            }
            (years, false)
        }
        _ => (DEFAULT_TIME_SPAN_YEARS, true),
    };

    Ok(MilsPerYear {
        mils_per_year: (previous_t - current) * 1000.0 / span,
        time_span_years: span,
        assumed_time_span: assumed,
    })
}

/// 공칭 대비 감육률 [%]. 두께가 늘었으면 음수이며 오류가 아니다.
pub fn loss_percentage(nominal_in: f64, current_in: f64) -> CalcResult<f64> {
    let nominal = require_positive("nominal_in", nominal_in)?;
    let current = require_positive("current.thickness_in", current_in)?;
    Ok((nominal - current) / nominal * 100.0)
}

fn dated_rate(
    earlier: Option<&DatedThickness>,
    reading: &ThicknessReading,
    missing: &'static str,
) -> CalcResult<f64> {
    let earlier = earlier.ok_or(CalcError::InsufficientHistory { what: missing })?;
    let current = reading.current_thickness()?;
    let (Some(from), Some(to)) = (earlier.date, reading.current.as_ref().and_then(|c| c.date))
    else {
        return Err(CalcError::InsufficientHistory { what: missing });
    };
    let earlier_t = earlier_thickness(earlier, "이전 두께가 0 이하")?;
    let years = years_between(from, to);
    if years <= 0.0 {
        return Err(CalcError::InsufficientHistory {
            what: "측정 간격이 0 이하",
        });
    }
    Ok((earlier_t - current) / years)
}

// 과거 측정값이 0 이하면 그 구간의 부식률만 계산하지 않는다. 현재 두께 검증과는 별개다.
fn earlier_thickness(earlier: &DatedThickness, what: &'static str) -> CalcResult<f64> {
    match earlier.thickness_in {
        t if t.is_finite() && t > 0.0 => Ok(t),
        _ => Err(CalcError::InsufficientHistory { what }),
    }
}
