use std::collections::HashMap;
use std::fs;
use std::path::Path;

use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const NOT_AVAILABLE: &str = "general.not_available";
    pub const INDETERMINATE: &str = "general.indeterminate";
    pub const NOT_APPLICABLE: &str = "general.not_applicable";
    pub const YEARS: &str = "general.years";

    pub const STRESS_VALUE: &str = "stress.value";
    pub const STRESS_EXACT: &str = "stress.exact";
    pub const STRESS_INTERPOLATED: &str = "stress.interpolated";
    pub const STRESS_EDGE_BELOW: &str = "stress.edge_below";
    pub const STRESS_EDGE_ABOVE: &str = "stress.edge_above";
    pub const STRESS_MATERIALS: &str = "stress.materials";

    pub const FORMULA_SHELL_THICKNESS: &str = "formula.shell_thickness";
    pub const FORMULA_SHELL_MAWP: &str = "formula.shell_mawp";
    pub const FORMULA_HEAD_THICKNESS: &str = "formula.head_thickness";
    pub const FORMULA_HEAD_MAWP: &str = "formula.head_mawp";
    pub const FORMULA_PIPE_THICKNESS: &str = "formula.pipe_thickness";
    pub const FORMULA_PIPE_PRESSURE: &str = "formula.pipe_pressure";
    pub const FORMULA_PIPELINE_PRESSURE: &str = "formula.pipeline_pressure";

    pub const THICKNESS_HEADING: &str = "thickness.heading";
    pub const THICKNESS_HEADER: &str = "thickness.header";
    pub const THICKNESS_ASSUMED_SPAN: &str = "thickness.assumed_span";
    pub const THICKNESS_GAIN: &str = "thickness.gain";
    pub const THICKNESS_MAX_RATE: &str = "thickness.max_rate";
    pub const THICKNESS_MIN_LIFE: &str = "thickness.min_life";
    pub const THICKNESS_SKIPPED: &str = "thickness.skipped";

    pub const COMPONENT_REQUIRED: &str = "component.required";
    pub const COMPONENT_MAWP: &str = "component.mawp";
    pub const COMPONENT_REMAINING_LIFE: &str = "component.remaining_life";
    pub const COMPONENT_NEXT_INSPECTION: &str = "component.next_inspection";

    pub const FFS_KIND: &str = "ffs.kind";
    pub const FFS_SAFETY_FACTOR: &str = "ffs.safety_factor";
    pub const FFS_VERDICT: &str = "ffs.verdict";
    pub const FFS_KIND_GENERAL: &str = "ffs.kind_general";
    pub const FFS_KIND_LOCAL: &str = "ffs.kind_local";
    pub const FFS_KIND_CRACK: &str = "ffs.kind_crack";

    pub const RBI_CONSEQUENCE: &str = "rbi.consequence";
    pub const RBI_PROBABILITY: &str = "rbi.probability";
    pub const RBI_RISK: &str = "rbi.risk";
    pub const RBI_LEVEL: &str = "rbi.level";
    pub const RBI_INTERVAL: &str = "rbi.interval";
    pub const RBI_DISCLAIMER: &str = "rbi.disclaimer";

    pub const TREND_THICKNESS_HEADING: &str = "trend.thickness_heading";
    pub const TREND_FINDINGS_HEADING: &str = "trend.findings_heading";
    pub const TREND_DEGRADATION_HEADING: &str = "trend.degradation_heading";
    pub const TREND_NONE: &str = "trend.none";
    pub const TREND_STATUS_NEW: &str = "trend.status_new";
    pub const TREND_STATUS_RESOLVED: &str = "trend.status_resolved";
    pub const TREND_STATUS_RECURRING: &str = "trend.status_recurring";
    pub const TREND_ACCELERATING: &str = "trend.accelerating";
    pub const TREND_NORMAL: &str = "trend.normal";
    pub const TREND_IMPROVING: &str = "trend.improving";

    pub const CONVERT_RESULT: &str = "convert.result";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 내장 영어/한국어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LC_ALL", "LANG"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: `[section] key = "value"`.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        NOT_AVAILABLE => "-",
        INDETERMINATE => "미정(이력 부족)",
        NOT_APPLICABLE => "해당 없음(감육 없음)",
        YEARS => "년",
        STRESS_VALUE => "허용응력:",
        STRESS_EXACT => "테이블 값",
        STRESS_INTERPOLATED => "선형 보간",
        STRESS_EDGE_BELOW => "테이블 최저 온도 값 사용(외삽 아님)",
        STRESS_EDGE_ABOVE => "테이블 최고 온도 값 사용(외삽 아님)",
        STRESS_MATERIALS => "등록 재질:",
        FORMULA_SHELL_THICKNESS => "동체 최소 요구두께:",
        FORMULA_SHELL_MAWP => "동체 MAWP:",
        FORMULA_HEAD_THICKNESS => "2:1 타원형 경판 최소 요구두께:",
        FORMULA_HEAD_MAWP => "경판 MAWP:",
        FORMULA_PIPE_THICKNESS => "배관 최소 요구두께:",
        FORMULA_PIPE_PRESSURE => "배관 최대 허용압력:",
        FORMULA_PIPELINE_PRESSURE => "파이프라인 설계압력:",
        THICKNESS_HEADING => "\n-- TML 두께 분석 --",
        THICKNESS_HEADER => "위치 | 현재[in] | 단기[in/yr] | 장기[in/yr] | mpy | 잔여수명 | 감육[%] | 상태",
        THICKNESS_ASSUMED_SPAN => "(*) 검사일이 없어 1년 주기를 가정한 값",
        THICKNESS_GAIN => "(+) 두께 증가 측정: 측정 편차 확인 필요",
        THICKNESS_MAX_RATE => "최대 부식률:",
        THICKNESS_MIN_LIFE => "최소 잔여수명:",
        THICKNESS_SKIPPED => "분석 제외:",
        COMPONENT_REQUIRED => "요구두께:",
        COMPONENT_MAWP => "MAWP(현재 두께 − 부식여유):",
        COMPONENT_REMAINING_LIFE => "잔여수명:",
        COMPONENT_NEXT_INSPECTION => "다음 내부검사 주기:",
        FFS_KIND => "평가 종류:",
        FFS_SAFETY_FACTOR => "안전계수:",
        FFS_VERDICT => "판정:",
        FFS_KIND_GENERAL => "전면 감육",
        FFS_KIND_LOCAL => "국부 감육",
        FFS_KIND_CRACK => "균열성 결함",
        RBI_CONSEQUENCE => "결과 점수:",
        RBI_PROBABILITY => "확률 점수:",
        RBI_RISK => "위험도:",
        RBI_LEVEL => "위험 등급:",
        RBI_INTERVAL => "권장 검사 주기:",
        RBI_DISCLAIMER => "참고: 서열 척도 점수이며 보정된 확률 모델이 아닙니다.",
        TREND_THICKNESS_HEADING => "\n-- 두께 추세 (부식률 내림차순) --",
        TREND_FINDINGS_HEADING => "\n-- 지적 사항 비교 --",
        TREND_DEGRADATION_HEADING => "\n-- 부재 열화 가속도 --",
        TREND_NONE => "(없음)",
        TREND_STATUS_NEW => "신규",
        TREND_STATUS_RESOLVED => "해소",
        TREND_STATUS_RECURRING => "반복",
        TREND_ACCELERATING => "가속",
        TREND_NORMAL => "정상",
        TREND_IMPROVING => "개선",
        CONVERT_RESULT => "변환 결과:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        NOT_AVAILABLE => "-",
        INDETERMINATE => "indeterminate (insufficient history)",
        NOT_APPLICABLE => "n/a (no measurable loss)",
        YEARS => "yr",
        STRESS_VALUE => "Allowable stress:",
        STRESS_EXACT => "table value",
        STRESS_INTERPOLATED => "linear interpolation",
        STRESS_EDGE_BELOW => "lowest table temperature used (not extrapolated)",
        STRESS_EDGE_ABOVE => "highest table temperature used (not extrapolated)",
        STRESS_MATERIALS => "Materials:",
        FORMULA_SHELL_THICKNESS => "Shell minimum thickness:",
        FORMULA_SHELL_MAWP => "Shell MAWP:",
        FORMULA_HEAD_THICKNESS => "2:1 ellipsoidal head minimum thickness:",
        FORMULA_HEAD_MAWP => "Head MAWP:",
        FORMULA_PIPE_THICKNESS => "Pipe minimum thickness:",
        FORMULA_PIPE_PRESSURE => "Pipe maximum pressure:",
        FORMULA_PIPELINE_PRESSURE => "Pipeline design pressure:",
        THICKNESS_HEADING => "\n-- TML Thickness Analysis --",
        THICKNESS_HEADER => "Location | Current[in] | ST[in/yr] | LT[in/yr] | mpy | Remaining life | Loss[%] | Status",
        THICKNESS_ASSUMED_SPAN => "(*) no inspection dates; 1-year span assumed",
        THICKNESS_GAIN => "(+) thickness gain measured: check measurement variance",
        THICKNESS_MAX_RATE => "Maximum corrosion rate:",
        THICKNESS_MIN_LIFE => "Minimum remaining life:",
        THICKNESS_SKIPPED => "Skipped:",
        COMPONENT_REQUIRED => "Required thickness:",
        COMPONENT_MAWP => "MAWP (current − corrosion allowance):",
        COMPONENT_REMAINING_LIFE => "Remaining life:",
        COMPONENT_NEXT_INSPECTION => "Next internal inspection interval:",
        FFS_KIND => "Assessment:",
        FFS_SAFETY_FACTOR => "Safety factor:",
        FFS_VERDICT => "Verdict:",
        FFS_KIND_GENERAL => "general metal loss",
        FFS_KIND_LOCAL => "local metal loss",
        FFS_KIND_CRACK => "crack-like flaw",
        RBI_CONSEQUENCE => "Consequence score:",
        RBI_PROBABILITY => "Probability score:",
        RBI_RISK => "Risk:",
        RBI_LEVEL => "Risk level:",
        RBI_INTERVAL => "Recommended interval:",
        RBI_DISCLAIMER => "Note: ordinal scoring, not a calibrated probabilistic model.",
        TREND_THICKNESS_HEADING => "\n-- Thickness trends (most severe first) --",
        TREND_FINDINGS_HEADING => "\n-- Findings comparison --",
        TREND_DEGRADATION_HEADING => "\n-- Component degradation --",
        TREND_NONE => "(none)",
        TREND_STATUS_NEW => "new",
        TREND_STATUS_RESOLVED => "resolved",
        TREND_STATUS_RECURRING => "recurring",
        TREND_ACCELERATING => "accelerating",
        TREND_NORMAL => "normal",
        TREND_IMPROVING => "improving",
        CONVERT_RESULT => "Result:",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_falls_back_to_builtin() {
        let tr = Translator::new("en-us");
        assert_eq!(tr.language(), Language::En);
        assert_eq!(tr.t(keys::ERROR_PREFIX), "Error");
        assert_eq!(Translator::new("xx").t(keys::ERROR_PREFIX), "오류");
    }

    #[test]
    fn nested_toml_pack_flattens() {
        let map = parse_toml_to_map("[general]\nerror_prefix = \"Fehler\"\n").unwrap();
        assert_eq!(map.get("general.error_prefix").map(String::as_str), Some("Fehler"));
    }

    #[test]
    fn assessment_labels_are_translated() {
        let labels = [
            keys::FFS_KIND_GENERAL,
            keys::FFS_KIND_LOCAL,
            keys::FFS_KIND_CRACK,
            keys::TREND_STATUS_NEW,
            keys::TREND_STATUS_RESOLVED,
            keys::TREND_STATUS_RECURRING,
            keys::TREND_ACCELERATING,
            keys::TREND_NORMAL,
            keys::TREND_IMPROVING,
        ];
        for key in labels {
            assert_ne!(ko(key), "[missing translation]", "{key}");
            assert!(en(key).is_some(), "{key}");
        }
        assert_eq!(Translator::new("ko").t(keys::TREND_STATUS_NEW), "신규");
    }

    #[test]
    fn explicit_flag_beats_config() {
        assert_eq!(resolve_language("en", Some("ko")), "en");
        assert_eq!(resolve_language("auto", Some("ko-KR")), "ko");
    }
}
