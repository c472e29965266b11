use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 항상 psi(게이지)이다.
///
/// 설정 파일에서는 CLI 단위 플래그와 같은 소문자 이름을 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    #[serde(rename = "psi", alias = "psig", alias = "Psi")]
    Psi,
    #[serde(rename = "bar", alias = "barg", alias = "Bar")]
    Bar,
    #[serde(rename = "kpa", alias = "kPa", alias = "KiloPascal")]
    KiloPascal,
    #[serde(rename = "mpa", alias = "MPa", alias = "MegaPascal")]
    MegaPascal,
    #[serde(rename = "kg/cm2", alias = "kgf/cm2", alias = "KgPerCm2")]
    KgPerCm2,
}

const PSI_PER_BAR: f64 = 14.503_773_773;
const PSI_PER_KPA: f64 = 0.145_037_737_73;
const PSI_PER_KGCM2: f64 = 14.223_343_307;

/// 주어진 압력을 psi로 변환한다.
pub fn to_psi(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => value,
        PressureUnit::Bar => value * PSI_PER_BAR,
        PressureUnit::KiloPascal => value * PSI_PER_KPA,
        PressureUnit::MegaPascal => value * PSI_PER_KPA * 1000.0,
        PressureUnit::KgPerCm2 => value * PSI_PER_KGCM2,
    }
}

/// psi 값을 원하는 단위로 변환한다.
pub fn from_psi(value_psi: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => value_psi,
        PressureUnit::Bar => value_psi / PSI_PER_BAR,
        PressureUnit::KiloPascal => value_psi / PSI_PER_KPA,
        PressureUnit::MegaPascal => value_psi / (PSI_PER_KPA * 1000.0),
        PressureUnit::KgPerCm2 => value_psi / PSI_PER_KGCM2,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let psi = to_psi(value, from);
    from_psi(psi, to)
}
