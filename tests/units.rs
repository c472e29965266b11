//! 단위 변환 회귀 테스트.
mod common;

use common::assert_close;
use vessel_integrity_toolbox::conversion::{convert, ConversionError};
use vessel_integrity_toolbox::quantity::QuantityKind;
use vessel_integrity_toolbox::units::*;

#[test]
fn ksi_to_psi_only_scales() {
    assert_eq!(convert_stress(20.0, StressUnit::Ksi, StressUnit::Psi), 20_000.0);
    assert_close(
        convert(QuantityKind::Stress, 137.9, "MPa", "ksi").unwrap(),
        20.0,
        1e-3,
    );
}

#[test]
fn pressure_and_length_conversions() {
    assert_close(
        convert_pressure(1.0, PressureUnit::Bar, PressureUnit::Psi),
        14.5038,
        1e-4,
    );
    assert_close(convert(QuantityKind::Length, 25.4, "mm", "in").unwrap(), 1.0, 1e-12);
    assert_close(convert_length(20.0, LengthUnit::Mil, LengthUnit::Inch), 0.020, 1e-15);
}

#[test]
fn temperature_conversion() {
    assert_close(
        convert(QuantityKind::Temperature, 212.0, "F", "C").unwrap(),
        100.0,
        1e-9,
    );
    assert_close(
        convert_temperature(0.0, TemperatureUnit::Celsius, TemperatureUnit::Kelvin),
        273.15,
        1e-9,
    );
}

#[test]
fn unknown_unit_is_reported() {
    assert!(matches!(
        convert(QuantityKind::Pressure, 1.0, "atmz", "psi"),
        Err(ConversionError::UnknownUnit(u)) if u == "atmz"
    ));
}
