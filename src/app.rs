use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::i18n::Translator;
use crate::material_stress::MaterialTableError;
use crate::outcome::CalcError;
use crate::ui_cli::{self, Cli, Command, InputUnits};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 허용응력 테이블 로드 오류
    #[error("재질 테이블 오류: {0}")]
    MaterialTable(#[from] MaterialTableError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 엔진이 값을 내지 못함
    #[error("{0}")]
    Calc(#[from] CalcError),
    /// 입력/출력 JSON 오류
    #[error("JSON 오류: {0}")]
    Json(#[from] serde_json::Error),
    /// 명령행 인자 조합 오류
    #[error("입력 오류: {0}")]
    Input(String),
}

/// 파싱된 명령 하나를 실행한다.
pub fn run(cli: &Cli, config: &Config, tr: &Translator) -> Result<(), AppError> {
    let units = InputUnits::resolve(&cli.units, &config.default_units)?;
    tracing::debug!(?units, lang = tr.language().as_code(), "명령 실행");
    let json = cli.json;
    match &cli.command {
        Command::Stress {
            material,
            temp,
            table,
        } => ui_cli::handle_stress(
            tr,
            config,
            &units,
            json,
            material.as_deref(),
            *temp,
            table.as_deref(),
        ),
        Command::Formula(cmd) => ui_cli::handle_formula(tr, &units, json, cmd),
        Command::Thickness { input, minimum } => {
            ui_cli::handle_thickness(tr, &units, json, input, *minimum)
        }
        Command::Component(args) => ui_cli::handle_component(tr, config, &units, json, args),
        Command::Ffs(cmd) => ui_cli::handle_ffs(tr, &units, json, cmd),
        Command::Rbi(args) => ui_cli::handle_rbi(tr, &units, json, args),
        Command::Trend {
            input,
            prefix_chars,
        } => ui_cli::handle_trend(tr, json, input, *prefix_chars),
        Command::Convert {
            kind,
            value,
            from,
            to,
        } => ui_cli::handle_convert(tr, json, *kind, *value, from, to),
    }
}
