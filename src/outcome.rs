//! 계산 엔진 공통 결과 타입.
//!
//! 엔진 함수는 예외를 던지지 않고 `CalcResult`로 "계산 불가" 사유를 돌려준다.
//! 배치 계산(여러 TML 위치)은 한 위치의 오류로 중단되지 않는다.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// 엔진 계산이 값을 내지 못한 사유.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// 필수 입력이 없거나 0/음수/비유한 값
    #[error("입력 오류: {field} ({reason})")]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },
    /// 입력은 각각 유효하지만 분모가 0 이하라 식이 성립하지 않음
    #[error("계산 불가: {formula} 분모가 0 이하입니다. 입력값을 확인하세요.")]
    DegenerateFormula { formula: &'static str },
    /// 부식률 산정에 필요한 날짜/측정 이력이 부족함
    #[error("이력 부족: {what}")]
    InsufficientHistory { what: &'static str },
    /// 허용응력 테이블에 해당 재질이 없음
    #[error("재질 없음: {material}")]
    LookupMiss { material: String },
}

pub type CalcResult<T> = Result<T, CalcError>;

// 보고서/JSON 출력에서는 사유 문장만 필요하다.
impl Serialize for CalcError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl CalcError {
    /// 이력 부족은 "미정"으로 다루고, 나머지 오류만 전파한다.
    pub fn indeterminate_as_none<T>(result: CalcResult<T>) -> CalcResult<Option<T>> {
        match result {
            Ok(v) => Ok(Some(v)),
            Err(CalcError::InsufficientHistory { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// 양의 유한값인지 검사한다.
pub fn require_positive(field: &'static str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::InvalidInput {
            field,
            reason: "유한한 값이어야 합니다",
        });
    }
    if value <= 0.0 {
        return Err(CalcError::InvalidInput {
            field,
            reason: "0보다 커야 합니다",
        });
    }
    Ok(value)
}

/// 0 이상 유한값인지 검사한다. 부식여유처럼 0이 허용되는 값에 쓴다.
pub fn require_non_negative(field: &'static str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::InvalidInput {
            field,
            reason: "0 이상의 유한한 값이어야 합니다",
        });
    }
    Ok(value)
}

/// `Option` 입력을 풀고 양수 검사까지 수행한다.
pub fn require_present(field: &'static str, value: Option<f64>) -> CalcResult<f64> {
    match value {
        Some(v) => require_positive(field, v),
        None => Err(CalcError::InvalidInput {
            field,
            reason: "값이 없습니다",
        }),
    }
}

/// 분모가 양수일 때만 나눗셈을 수행한다.
pub(crate) fn divide(formula: &'static str, numerator: f64, denominator: f64) -> CalcResult<f64> {
    if !denominator.is_finite() || denominator <= 0.0 {
        return Err(CalcError::DegenerateFormula { formula });
    }
    Ok(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_nan_and_zero() {
        assert!(require_positive("t", f64::NAN).is_err());
        assert!(require_positive("t", 0.0).is_err());
        assert_eq!(require_positive("t", 0.5), Ok(0.5));
    }

    #[test]
    fn divide_guards_denominator() {
        assert_eq!(
            divide("x", 1.0, 0.0),
            Err(CalcError::DegenerateFormula { formula: "x" })
        );
        assert_eq!(divide("x", 1.0, 4.0), Ok(0.25));
    }
}
