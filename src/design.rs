use serde::{Deserialize, Serialize};

use crate::outcome::{require_non_negative, require_positive, CalcError, CalcResult};

/// 용접 이음효율. 방사선투과검사 범위에 따라 세 값만 허용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum JointEfficiency {
    /// 전체 RT (1.0)
    Full,
    /// 부분 RT (0.85)
    Spot,
    /// RT 없음 (0.70)
    NoRadiography,
}

impl JointEfficiency {
    pub fn value(self) -> f64 {
        match self {
            JointEfficiency::Full => 1.0,
            JointEfficiency::Spot => 0.85,
            JointEfficiency::NoRadiography => 0.70,
        }
    }
}

impl TryFrom<f64> for JointEfficiency {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        const EPS: f64 = 1e-9;
        if (value - 1.0).abs() < EPS {
            Ok(JointEfficiency::Full)
        } else if (value - 0.85).abs() < EPS {
            Ok(JointEfficiency::Spot)
        } else if (value - 0.70).abs() < EPS {
            Ok(JointEfficiency::NoRadiography)
        } else {
            Err(format!("이음효율은 1.0, 0.85, 0.70 중 하나여야 합니다: {value}"))
        }
    }
}

impl From<JointEfficiency> for f64 {
    fn from(value: JointEfficiency) -> Self {
        value.value()
    }
}

/// 압력용기 설계 조건. 한 번의 계산 호출 동안 변경되지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselDesignParameters {
    /// 설계압력 [psig]
    pub design_pressure_psi: f64,
    /// 설계온도 [°F]
    pub design_temperature_f: f64,
    /// 내경 [in]
    pub inside_diameter_in: f64,
    pub joint_efficiency: JointEfficiency,
    /// 부식여유 [in]
    #[serde(default)]
    pub corrosion_allowance_in: f64,
    /// 설계온도에서의 허용응력 [psi]
    pub allowable_stress_psi: f64,
}

impl VesselDesignParameters {
    pub fn inside_radius_in(&self) -> f64 {
        self.inside_diameter_in / 2.0
    }

    /// 경계에서 한 번만 검증한다. 이후 식들은 개별 인자만 다시 확인한다.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("design_pressure_psi", self.design_pressure_psi)?;
        require_positive("inside_diameter_in", self.inside_diameter_in)?;
        require_positive("allowable_stress_psi", self.allowable_stress_psi)?;
        require_non_negative("corrosion_allowance_in", self.corrosion_allowance_in)?;
        if !self.design_temperature_f.is_finite() {
            return Err(CalcError::InvalidInput {
                field: "design_temperature_f",
                reason: "유한한 값이어야 합니다",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joint_efficiency_accepts_only_code_values() {
        assert_eq!(JointEfficiency::try_from(0.85), Ok(JointEfficiency::Spot));
        assert!(JointEfficiency::try_from(0.9).is_err());
        let e: f64 = JointEfficiency::NoRadiography.into();
        assert_eq!(e, 0.70);
    }
}
