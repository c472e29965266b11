use serde::{Deserialize, Serialize};

/// 길이(두께) 단위. 내부 기준은 인치이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "in", alias = "inch", alias = "Inch")]
    Inch,
    /// 1/1000 인치
    #[serde(rename = "mil", alias = "mils", alias = "Mil")]
    Mil,
    #[serde(rename = "mm", alias = "Millimeter")]
    Millimeter,
    #[serde(rename = "ft", alias = "foot", alias = "Foot")]
    Foot,
}

fn to_inch(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Inch => value,
        LengthUnit::Mil => value / 1000.0,
        LengthUnit::Millimeter => value / 25.4,
        LengthUnit::Foot => value * 12.0,
    }
}

fn from_inch(value_in: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Inch => value_in,
        LengthUnit::Mil => value_in * 1000.0,
        LengthUnit::Millimeter => value_in * 25.4,
        LengthUnit::Foot => value_in / 12.0,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let inch = to_inch(value, from);
    from_inch(inch, to)
}
