use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `psi`, `ksi`, `MPa`, `bar`, `in`, `mm`, `F`, `C` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::Stress => {
            let from = parse_stress_unit(from_unit_str)?;
            let to = parse_stress_unit(to_unit_str)?;
            Ok(convert_stress(value, from, to))
        }
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
    }
}

pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "psi" | "psig" => Ok(PressureUnit::Psi),
        "bar" | "barg" => Ok(PressureUnit::Bar),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "mpa" | "megapascal" => Ok(PressureUnit::MegaPascal),
        "kg/cm2" | "kgf/cm2" => Ok(PressureUnit::KgPerCm2),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_stress_unit(s: &str) -> Result<StressUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "psi" => Ok(StressUnit::Psi),
        "ksi" => Ok(StressUnit::Ksi),
        "mpa" | "n/mm2" => Ok(StressUnit::MegaPascal),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "in" | "inch" | "\"" => Ok(LengthUnit::Inch),
        "mil" | "mils" => Ok(LengthUnit::Mil),
        "mm" => Ok(LengthUnit::Millimeter),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
