//! 단위 정의 및 변환 모듈 모음.
//! 엔진 내부 단위: 압력/응력 psi, 길이 in, 온도 °F.

pub mod length;
pub mod pressure;
pub mod stress;
pub mod temperature;

pub use length::{convert_length, LengthUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use stress::{convert_stress, StressUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
