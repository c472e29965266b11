use serde::{Deserialize, Serialize};

/// 온도 단위. 허용응력 테이블과 RBI 온도 구간은 °F 기준이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[serde(rename = "f", alias = "F", alias = "fahrenheit", alias = "Fahrenheit")]
    Fahrenheit,
    #[serde(rename = "c", alias = "C", alias = "celsius", alias = "Celsius")]
    Celsius,
    #[serde(rename = "k", alias = "K", alias = "kelvin", alias = "Kelvin")]
    Kelvin,
}

/// 주어진 값을 °F로 변환한다.
pub fn to_fahrenheit(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Fahrenheit => value,
        TemperatureUnit::Celsius => value * 9.0 / 5.0 + 32.0,
        TemperatureUnit::Kelvin => (value - 273.15) * 9.0 / 5.0 + 32.0,
    }
}

/// °F 값을 원하는 단위로 변환한다.
pub fn from_fahrenheit(value_f: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Fahrenheit => value_f,
        TemperatureUnit::Celsius => (value_f - 32.0) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => (value_f - 32.0) * 5.0 / 9.0 + 273.15,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    let f = to_fahrenheit(value, from);
    from_fahrenheit(f, to)
}
