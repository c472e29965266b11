use serde::{Deserialize, Serialize};

/// 응력 단위. 엔진 내부는 psi만 사용하고, ksi/MPa 입력은 경계에서 환산한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressUnit {
    #[serde(rename = "psi", alias = "Psi")]
    Psi,
    #[serde(rename = "ksi", alias = "Ksi")]
    Ksi,
    #[serde(rename = "mpa", alias = "MPa", alias = "n/mm2", alias = "MegaPascal")]
    MegaPascal,
}

const PSI_PER_MPA: f64 = 145.037_737_73;

pub fn to_psi(value: f64, unit: StressUnit) -> f64 {
    match unit {
        StressUnit::Psi => value,
        StressUnit::Ksi => value * 1000.0,
        StressUnit::MegaPascal => value * PSI_PER_MPA,
    }
}

pub fn from_psi(value_psi: f64, unit: StressUnit) -> f64 {
    match unit {
        StressUnit::Psi => value_psi,
        StressUnit::Ksi => value_psi / 1000.0,
        StressUnit::MegaPascal => value_psi / PSI_PER_MPA,
    }
}

/// 응력을 다른 단위로 변환한다.
pub fn convert_stress(value: f64, from: StressUnit, to: StressUnit) -> f64 {
    from_psi(to_psi(value, from), to)
}
