//! 온도별 허용응력 테이블과 선형 보간을 제공한다.
//! 내장 값은 ASME Sec. II-D Table 1A 근사치로, 참고용이며 설계 시 최신 코드로 검증해야 한다.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::outcome::{CalcError, CalcResult};

/// 재질·온도별 허용응력 기준점. 엔진은 조회만 하고 수정하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialStressPoint {
    pub spec: String,
    #[serde(default)]
    pub grade: String,
    pub temperature_f: f64,
    pub allowable_stress_psi: f64,
}

/// 보간 구간 경계점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StressBound {
    pub temperature_f: f64,
    pub allowable_stress_psi: f64,
}

/// 테이블 범위 밖 요청일 때 어느 쪽 가장자리 값을 썼는지 표시한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableEdge {
    /// 요청 온도가 테이블 최저 온도보다 낮음
    BelowRange,
    /// 요청 온도가 테이블 최고 온도보다 높음
    AboveRange,
}

/// 허용응력 조회 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StressLookup {
    pub allowable_stress_psi: f64,
    /// true면 두 기준점 사이를 선형 보간한 값이다.
    pub interpolated: bool,
    /// 보간에 사용한 (하한, 상한) 기준점
    pub bounds: Option<(StressBound, StressBound)>,
    /// 가장자리 값을 그대로 쓴 경우 (보간이 아니라 외삽 대용)
    pub edge: Option<TableEdge>,
}

/// 테이블 파일 로드 오류.
#[derive(Debug, Error)]
pub enum MaterialTableError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("재질 테이블 파싱 오류: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("잘못된 기준점: {spec} {grade} @ {temperature_f}°F")]
    InvalidPoint {
        spec: String,
        grade: String,
        temperature_f: f64,
    },
}

#[derive(Debug, Deserialize)]
struct TableFile {
    points: Vec<MaterialStressPoint>,
}

/// 허용응력 참조 테이블. 생성 후에는 읽기 전용이라 스레드 간 공유해도 안전하다.
#[derive(Debug, Clone, Default)]
pub struct MaterialStressTable {
    points: Vec<MaterialStressPoint>,
}

impl MaterialStressTable {
    pub fn new(points: Vec<MaterialStressPoint>) -> Result<Self, MaterialTableError> {
        for p in &points {
            if !p.temperature_f.is_finite()
                || !p.allowable_stress_psi.is_finite()
                || p.allowable_stress_psi <= 0.0
            {
                return Err(MaterialTableError::InvalidPoint {
                    spec: p.spec.clone(),
                    grade: p.grade.clone(),
                    temperature_f: p.temperature_f,
                });
            }
        }
        Ok(Self { points })
    }

    /// 내장 참고 테이블.
    pub fn builtin() -> Self {
        let points = BUILTIN
            .iter()
            .flat_map(|(spec, grade, rows)| {
                rows.iter().map(move |&(t, s)| MaterialStressPoint {
                    spec: (*spec).to_string(),
                    grade: (*grade).to_string(),
                    temperature_f: t,
                    allowable_stress_psi: s,
                })
            })
            .collect();
        Self { points }
    }

    /// `[[points]]` 배열 형식의 TOML 문자열에서 테이블을 만든다.
    pub fn from_toml_str(src: &str) -> Result<Self, MaterialTableError> {
        let file: TableFile = toml::from_str(src)?;
        Self::new(file.points)
    }

    pub fn load(path: &Path) -> Result<Self, MaterialTableError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn points(&self) -> &[MaterialStressPoint] {
        &self.points
    }

    /// 테이블에 있는 재질 키 목록 (`spec-grade`), 중복 제거.
    pub fn materials(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.points.iter().map(display_key).collect();
        keys.sort();
        keys.dedup();
        keys
    }

    /// 재질과 온도(°F)로 허용응력(psi)을 조회한다.
    ///
    /// - 정수로 반올림한 온도가 기준점과 일치하면 그 값을 그대로 쓴다.
    /// - 아니면 하한/상한 기준점 사이를 선형 보간하고 정수 psi로 반올림한다.
    /// - 한쪽 경계만 있으면 그 값을 그대로 쓰고 `edge`로 표시한다.
    /// - 재질이 없으면 `LookupMiss`.
    pub fn lookup_allowable_stress(
        &self,
        material: &str,
        temperature_f: f64,
    ) -> CalcResult<StressLookup> {
        if !temperature_f.is_finite() {
            return Err(CalcError::InvalidInput {
                field: "temperature_f",
                reason: "유한한 값이어야 합니다",
            });
        }
        let rows = self.rows_for(&normalize_key(material));
        if rows.is_empty() {
            return Err(CalcError::LookupMiss {
                material: material.to_string(),
            });
        }

        let rounded = temperature_f.round();
        if let Some(p) = rows.iter().find(|p| p.temperature_f.round() == rounded) {
            return Ok(StressLookup {
                allowable_stress_psi: p.allowable_stress_psi,
                interpolated: false,
                bounds: None,
                edge: None,
            });
        }

        let lower = rows
            .iter()
            .filter(|p| p.temperature_f <= temperature_f)
            .max_by(|a, b| a.temperature_f.total_cmp(&b.temperature_f));
        let upper = rows
            .iter()
            .filter(|p| p.temperature_f >= temperature_f)
            .min_by(|a, b| a.temperature_f.total_cmp(&b.temperature_f));

        let result = match (lower, upper) {
            (Some(lo), Some(hi)) if lo.temperature_f != hi.temperature_f => {
                let frac =
                    (temperature_f - lo.temperature_f) / (hi.temperature_f - lo.temperature_f);
                let value = lo.allowable_stress_psi
                    + (hi.allowable_stress_psi - lo.allowable_stress_psi) * frac;
                StressLookup {
                    allowable_stress_psi: value.round(),
                    interpolated: true,
                    bounds: Some((bound(lo), bound(hi))),
                    edge: None,
                }
            }
            (Some(p), Some(_)) => StressLookup {
                allowable_stress_psi: p.allowable_stress_psi,
                interpolated: false,
                bounds: None,
                edge: None,
            },
            (Some(p), None) => StressLookup {
                allowable_stress_psi: p.allowable_stress_psi,
                interpolated: false,
                bounds: None,
                edge: Some(TableEdge::AboveRange),
            },
            (None, Some(p)) => StressLookup {
                allowable_stress_psi: p.allowable_stress_psi,
                interpolated: false,
                bounds: None,
                edge: Some(TableEdge::BelowRange),
            },
            (None, None) => {
                return Err(CalcError::LookupMiss {
                    material: material.to_string(),
                })
            }
        };
        Ok(result)
    }

    // spec+grade 결합 키가 우선이다. spec만 주어지면 그 spec의 등급이 하나뿐일 때만 받아준다.
    fn rows_for(&self, wanted: &str) -> Vec<&MaterialStressPoint> {
        let combined: Vec<&MaterialStressPoint> = self
            .points
            .iter()
            .filter(|p| normalize_key(&format!("{}{}", p.spec, p.grade)) == wanted)
            .collect();
        if !combined.is_empty() {
            return combined;
        }
        let by_spec: Vec<&MaterialStressPoint> = self
            .points
            .iter()
            .filter(|p| normalize_key(&p.spec) == wanted)
            .collect();
        let single_grade = by_spec.windows(2).all(|w| w[0].grade == w[1].grade);
        if single_grade {
            by_spec
        } else {
            Vec::new()
        }
    }
}

fn bound(p: &MaterialStressPoint) -> StressBound {
    StressBound {
        temperature_f: p.temperature_f,
        allowable_stress_psi: p.allowable_stress_psi,
    }
}

fn display_key(p: &MaterialStressPoint) -> String {
    if p.grade.is_empty() {
        p.spec.clone()
    } else {
        format!("{}-{}", p.spec, p.grade)
    }
}

// "SA-516 Gr.70", "SA-516 Grade 70", "sa516-70", "SA-516-70" 모두 같은 키가 된다.
fn normalize_key(s: &str) -> String {
    s.to_uppercase()
        .replace("GRADE", "")
        .replace("GR", "")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

type Rows = &'static [(f64, f64)];

const BUILTIN: &[(&str, &str, Rows)] = &[
    (
        "SA-516",
        "70",
        &[
            (100.0, 20_000.0),
            (200.0, 20_000.0),
            (300.0, 20_000.0),
            (400.0, 20_000.0),
            (500.0, 20_000.0),
            (600.0, 19_400.0),
            (650.0, 18_800.0),
            (700.0, 18_100.0),
            (750.0, 14_800.0),
            (800.0, 12_000.0),
            (850.0, 9_300.0),
            (900.0, 6_700.0),
        ],
    ),
    (
        "SA-515",
        "70",
        &[
            (100.0, 20_000.0),
            (200.0, 20_000.0),
            (300.0, 20_000.0),
            (400.0, 20_000.0),
            (500.0, 20_000.0),
            (600.0, 19_400.0),
            (650.0, 18_800.0),
            (700.0, 18_100.0),
            (750.0, 14_800.0),
            (800.0, 12_000.0),
            (850.0, 9_300.0),
            (900.0, 6_700.0),
        ],
    ),
    (
        "SA-285",
        "C",
        &[
            (100.0, 15_700.0),
            (200.0, 15_700.0),
            (300.0, 15_700.0),
            (400.0, 15_700.0),
            (500.0, 15_700.0),
            (600.0, 15_300.0),
            (650.0, 14_800.0),
            (700.0, 14_300.0),
            (750.0, 13_000.0),
            (800.0, 10_800.0),
            (850.0, 8_700.0),
            (900.0, 5_900.0),
        ],
    ),
    (
        "SA-106",
        "B",
        &[
            (100.0, 17_100.0),
            (200.0, 17_100.0),
            (300.0, 17_100.0),
            (400.0, 17_100.0),
            (500.0, 17_100.0),
            (600.0, 16_400.0),
            (650.0, 15_800.0),
            (700.0, 15_500.0),
            (750.0, 13_000.0),
            (800.0, 10_800.0),
            (850.0, 8_700.0),
            (900.0, 5_900.0),
        ],
    ),
    (
        "SA-240",
        "304",
        &[
            (100.0, 20_000.0),
            (200.0, 16_700.0),
            (300.0, 15_000.0),
            (400.0, 13_800.0),
            (500.0, 12_900.0),
            (600.0, 12_300.0),
            (650.0, 12_000.0),
            (700.0, 11_700.0),
            (750.0, 11_500.0),
            (800.0, 11_200.0),
        ],
    ),
    (
        "SA-240",
        "316L",
        &[
            (100.0, 16_700.0),
            (200.0, 14_200.0),
            (300.0, 12_700.0),
            (400.0, 11_700.0),
            (500.0, 10_900.0),
            (600.0, 10_400.0),
            (650.0, 10_200.0),
            (700.0, 10_000.0),
            (750.0, 9_800.0),
            (800.0, 9_600.0),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_keys_normalize() {
        assert_eq!(normalize_key("SA-516 Gr.70"), "SA51670");
        assert_eq!(normalize_key("sa516-70"), "SA51670");
        assert_eq!(normalize_key("SA-516 Grade 70"), "SA51670");
    }

    #[test]
    fn builtin_lists_distinct_materials() {
        let table = MaterialStressTable::builtin();
        let mats = table.materials();
        assert!(mats.contains(&"SA-516-70".to_string()));
        assert!(mats.contains(&"SA-240-316L".to_string()));
        assert_eq!(mats.len(), 6);
    }
}
