use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::material_stress::{MaterialStressTable, MaterialTableError};
use crate::units::*;

pub const CONFIG_FILE: &str = "config.toml";

/// CLI 경계에서 입력값을 해석할 기본 단위. 엔진 내부 단위와는 별개다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub pressure: PressureUnit,
    /// 허용응력/항복강도 입력 단위 (ksi 입력은 여기서만 psi로 환산)
    pub stress: StressUnit,
    pub length: LengthUnit,
    pub temperature: TemperatureUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            pressure: PressureUnit::Psi,
            stress: StressUnit::Psi,
            length: LengthUnit::Inch,
            temperature: TemperatureUnit::Fahrenheit,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ko / en / auto
    pub language: String,
    /// 외부 언어팩(`ko.toml`, `en.toml`) 디렉터리
    pub language_pack_dir: Option<PathBuf>,
    /// `RUST_LOG`가 없을 때 쓸 로그 필터
    pub log_filter: Option<String>,
    /// 내장 테이블 대신 사용할 허용응력 테이블(TOML)
    pub material_table: Option<PathBuf>,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            log_filter: None,
            material_table: None,
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(Path::new(CONFIG_FILE))
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값으로 만들어 저장한다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "설정 로드");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        tracing::info!(path = %path.display(), "기본 설정 파일 생성");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 설정된 테이블 파일이 있으면 로드하고, 없으면 내장 테이블을 쓴다.
    pub fn material_stress_table(&self) -> Result<MaterialStressTable, MaterialTableError> {
        match &self.material_table {
            Some(path) => {
                let table = MaterialStressTable::load(path)?;
                tracing::info!(
                    path = %path.display(),
                    points = table.points().len(),
                    "허용응력 테이블 로드"
                );
                Ok(table)
            }
            None => Ok(MaterialStressTable::builtin()),
        }
    }
}
