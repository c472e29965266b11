//! RBI(위험기반검사) 점수.
//!
//! 고정 가산점으로 만든 서열 척도다. 보정된 확률 모델이 아니므로 위험도 값끼리의 비율에는
//! 의미가 없고, 등급과 권장 주기만 사용해야 한다.

use serde::{Deserialize, Serialize};

use crate::outcome::{CalcError, CalcResult};

/// 유체 위험 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FluidHazard {
    Hydrogen,
    Toxic,
    Hydrocarbon,
    Other,
}

impl FluidHazard {
    /// 자유 기재 유체명을 등급으로 분류한다.
    ///
    /// 영숫자 단어 단위로 비교하므로 "boiler", "degassed" 같은 단어는 걸리지 않는다.
    /// 단독 "gas"는 불활성 유체 단어와 함께 쓰이지 않을 때만 탄화수소로 본다.
    pub fn classify(name: &str) -> Self {
        let lower = name.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        let has = |list: &[&str]| contains_word(&words, list);

        if has(TOXIC_WORDS) {
            FluidHazard::Toxic
        } else if has(HYDROGEN_WORDS) {
            FluidHazard::Hydrogen
        } else if has(HYDROCARBON_WORDS) || (has(&["gas"]) && !has(INERT_WORDS)) {
            FluidHazard::Hydrocarbon
        } else {
            FluidHazard::Other
        }
    }

    fn consequence_increment(self) -> u32 {
        match self {
            FluidHazard::Hydrogen | FluidHazard::Toxic => 2,
            FluidHazard::Hydrocarbon => 1,
            FluidHazard::Other => 0,
        }
    }
}

const TOXIC_WORDS: &[&str] = &["toxic", "h2s", "chlorine", "ammonia"];
const HYDROGEN_WORDS: &[&str] = &["hydrogen", "h2"];
const HYDROCARBON_WORDS: &[&str] = &[
    "hydrocarbon",
    "hydrocarbons",
    "oil",
    "crude",
    "naphtha",
    "propane",
    "butane",
    "methane",
    "lpg",
    "lng",
    "gasoline",
    "diesel",
    "kerosene",
];
const INERT_WORDS: &[&str] = &[
    "nitrogen", "n2", "air", "steam", "water", "inert", "argon", "co2", "oxygen", "helium",
];

fn contains_word(words: &[&str], list: &[&str]) -> bool {
    words.iter().any(|w| list.iter().any(|l| l == w))
}

/// 손상 기구 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageMechanism {
    Cracking,
    HydrogenDamage,
    General,
}

impl DamageMechanism {
    pub fn classify(name: &str) -> Self {
        let n = name.trim().to_lowercase();
        if n.contains("crack") || n.contains("scc") {
            DamageMechanism::Cracking
        } else if n.contains("hydrogen") || n.contains("hic") || n.contains("htha") {
            DamageMechanism::HydrogenDamage
        } else {
            DamageMechanism::General
        }
    }

    fn probability_increment(self) -> u32 {
        match self {
            DamageMechanism::Cracking => 2,
            DamageMechanism::HydrogenDamage => 1,
            DamageMechanism::General => 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RbiInput {
    pub operating_pressure_psi: f64,
    pub operating_temperature_f: f64,
    pub fluid: FluidHazard,
    /// 부식률 [in/yr]
    pub corrosion_rate_in_per_year: f64,
    pub mechanism: DamageMechanism,
    /// 검사 유효도 0..=1. 높을수록 파손 확률 점수를 낮춘다.
    pub inspection_effectiveness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// 권장 검사 주기 [yr]
    pub fn interval_years(self) -> f64 {
        match self {
            RiskLevel::High => 2.0,
            RiskLevel::Medium => 5.0,
            RiskLevel::Low => 10.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// RBI 점수 결과. 서열 척도이며 확률 값이 아니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskScore {
    pub consequence_score: u32,
    pub probability_score: f64,
    pub risk: f64,
    pub risk_level: RiskLevel,
    pub recommended_interval_years: f64,
}

/// 결과(consequence) 점수: 1 + 압력 구간 + 온도 구간 + 유체 위험.
pub fn consequence_score(pressure_psi: f64, temperature_f: f64, fluid: FluidHazard) -> u32 {
    let mut score = 1;
    if pressure_psi > 600.0 {
        score += 2;
    } else if pressure_psi > 150.0 {
        score += 1;
    }
    if temperature_f > 800.0 {
        score += 2;
    } else if temperature_f > 400.0 {
        score += 1;
    }
    score + fluid.consequence_increment()
}

/// 파손 확률(probability) 점수: (1 + 부식률 구간 + 손상 기구) × (1 − 검사 유효도).
pub fn probability_score(
    corrosion_rate_in_per_year: f64,
    mechanism: DamageMechanism,
    inspection_effectiveness: f64,
) -> f64 {
    let mut base = 1;
    if corrosion_rate_in_per_year > 0.010 {
        base += 3;
    } else if corrosion_rate_in_per_year > 0.005 {
        base += 2;
    } else if corrosion_rate_in_per_year > 0.002 {
        base += 1;
    }
    base += mechanism.probability_increment();
    base as f64 * (1.0 - inspection_effectiveness)
}

/// 위험도 = 결과 × 확률. >6 High(2년), >3 Medium(5년), 그 외 Low(10년).
pub fn score_risk(input: &RbiInput) -> CalcResult<RiskScore> {
    for (field, value) in [
        ("operating_pressure_psi", input.operating_pressure_psi),
        ("operating_temperature_f", input.operating_temperature_f),
        ("corrosion_rate_in_per_year", input.corrosion_rate_in_per_year),
    ] {
        if !value.is_finite() {
            return Err(CalcError::InvalidInput {
                field,
                reason: "유한한 값이어야 합니다",
            });
        }
    }
    let effectiveness = input.inspection_effectiveness;
    if !(0.0..=1.0).contains(&effectiveness) {
        return Err(CalcError::InvalidInput {
            field: "inspection_effectiveness",
            reason: "0과 1 사이여야 합니다",
        });
    }

    let consequence = consequence_score(
        input.operating_pressure_psi,
        input.operating_temperature_f,
        input.fluid,
    );
    let probability = probability_score(
        input.corrosion_rate_in_per_year,
        input.mechanism,
        effectiveness,
    );
    let risk = consequence as f64 * probability;
    let risk_level = if risk > 6.0 {
        RiskLevel::High
    } else if risk > 3.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    Ok(RiskScore {
        consequence_score: consequence,
        probability_score: probability,
        risk,
        risk_level,
        recommended_interval_years: risk_level.interval_years(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_free_text() {
        assert_eq!(FluidHazard::classify("Hydrogen"), FluidHazard::Hydrogen);
        assert_eq!(FluidHazard::classify("sour gas H2S"), FluidHazard::Toxic);
        assert_eq!(FluidHazard::classify("Crude Oil"), FluidHazard::Hydrocarbon);
        assert_eq!(FluidHazard::classify("water"), FluidHazard::Other);
        assert_eq!(FluidHazard::classify("natural gas"), FluidHazard::Hydrocarbon);
        assert_eq!(DamageMechanism::classify("Chloride SCC"), DamageMechanism::Cracking);
        assert_eq!(DamageMechanism::classify("HTHA"), DamageMechanism::HydrogenDamage);
    }

    #[test]
    fn fluid_words_are_matched_whole() {
        for name in ["boiler feed water", "nitrogen gas", "soil water", "degassed water"] {
            assert_eq!(FluidHazard::classify(name), FluidHazard::Other, "{name}");
        }
    }
}
