use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::app::AppError;
use crate::config::{Config, DefaultUnits};
use crate::conversion::{self, ConversionError};
use crate::design::{JointEfficiency, VesselDesignParameters};
use crate::ffs::{
    self, CrackInput, FfsAssessmentResult, GeneralMetalLossInput, LocalMetalLossInput,
};
use crate::formulas;
use crate::i18n::{keys, Translator};
use crate::material_stress::{MaterialStressTable, StressLookup, TableEdge};
use crate::quantity::QuantityKind;
use crate::rbi::{self, DamageMechanism, FluidHazard, RbiInput, RiskScore};
use crate::thickness::{
    self, ComponentCalculation, ComponentKind, InspectionSummary, RemainingLife,
    ThicknessReading,
};
use crate::trend::{self, InspectionSnapshot, PrefixSimilarityMatcher, TrendReport};
use crate::units::*;

/// 압력용기·배관 건전성 평가 CLI.
#[derive(Debug, Parser)]
#[command(name = "vessel_integrity_toolbox", version, about)]
pub struct Cli {
    /// 표시 언어 (ko | en | auto)
    #[arg(long, global = true, default_value = "auto")]
    pub lang: String,
    /// 설정 파일 경로 (기본: ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// 보고서 대신 JSON 출력
    #[arg(long, global = true)]
    pub json: bool,
    #[command(flatten)]
    pub units: UnitArgs,
    #[command(subcommand)]
    pub command: Command,
}

/// 명령행 입력값의 단위. 생략하면 설정의 `default_units`를 쓴다.
#[derive(Debug, Default, Args)]
pub struct UnitArgs {
    /// 압력 입력 단위 (psi, bar, kPa, MPa, kg/cm2)
    #[arg(long, global = true)]
    pub pressure_unit: Option<String>,
    /// 응력 입력 단위 (psi, ksi, MPa)
    #[arg(long, global = true)]
    pub stress_unit: Option<String>,
    /// 길이/두께 입력 단위 (in, mil, mm, ft)
    #[arg(long, global = true)]
    pub length_unit: Option<String>,
    /// 온도 입력 단위 (F, C, K)
    #[arg(long, global = true)]
    pub temp_unit: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 재질·온도별 허용응력 조회 (재질 생략 시 목록 출력)
    Stress {
        #[arg(long)]
        material: Option<String>,
        #[arg(long)]
        temp: Option<f64>,
        /// 설정과 내장 테이블 대신 사용할 TOML 테이블
        #[arg(long)]
        table: Option<PathBuf>,
    },
    /// 설계 공식 단일 계산
    #[command(subcommand)]
    Formula(FormulaCommand),
    /// TML 두께 이력 JSON 분석
    Thickness {
        #[arg(long)]
        input: PathBuf,
        /// 파일에 최소 요구두께가 없을 때 쓸 값 (길이 단위)
        #[arg(long)]
        minimum: Option<f64>,
    },
    /// 부재(동체/경판) 요구두께, MAWP, 잔여수명
    Component(ComponentArgs),
    /// FFS Level 1 선별 평가
    #[command(subcommand)]
    Ffs(FfsCommand),
    /// RBI 위험도 점수
    Rbi(RbiArgs),
    /// 2~5회 검사 기록 추세 분석
    Trend {
        #[arg(long)]
        input: PathBuf,
        /// 지적 사항 비교에 쓸 설명 앞부분 글자 수
        #[arg(long, default_value_t = 50)]
        prefix_chars: usize,
    },
    /// 단위 변환
    Convert {
        #[arg(long, value_enum)]
        kind: QuantityArg,
        #[arg(long)]
        value: f64,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum FormulaCommand {
    /// 원통 동체 최소 요구두께 t = PR/(SE − 0.6P)
    ShellThickness {
        #[arg(long)]
        pressure: f64,
        #[arg(long)]
        radius: f64,
        #[arg(long)]
        stress: f64,
        #[arg(long)]
        efficiency: f64,
    },
    /// 원통 동체 MAWP = SEt/(R + 0.6t)
    ShellMawp {
        #[arg(long)]
        thickness: f64,
        #[arg(long)]
        radius: f64,
        #[arg(long)]
        stress: f64,
        #[arg(long)]
        efficiency: f64,
    },
    /// 2:1 타원형 경판 최소 요구두께 t = PR/(2SE − 0.2P)
    HeadThickness {
        #[arg(long)]
        pressure: f64,
        #[arg(long)]
        radius: f64,
        #[arg(long)]
        stress: f64,
        #[arg(long)]
        efficiency: f64,
    },
    /// 경판 MAWP = 2SEt/(D + 0.2t)
    HeadMawp {
        #[arg(long)]
        thickness: f64,
        #[arg(long)]
        diameter: f64,
        #[arg(long)]
        stress: f64,
        #[arg(long)]
        efficiency: f64,
    },
    /// 배관 최소 요구두께 t = PD/(2(SE + PY))
    PipeThickness {
        #[arg(long)]
        pressure: f64,
        #[arg(long)]
        diameter: f64,
        #[arg(long)]
        stress: f64,
        #[arg(long)]
        efficiency: f64,
        #[arg(long, default_value_t = 0.4)]
        y: f64,
    },
    /// 배관 최대 허용압력 P = 2SEt/(D − 2Yt)
    PipePressure {
        #[arg(long)]
        thickness: f64,
        #[arg(long)]
        diameter: f64,
        #[arg(long)]
        stress: f64,
        #[arg(long)]
        efficiency: f64,
        #[arg(long, default_value_t = 0.4)]
        y: f64,
    },
    /// 파이프라인 설계압력 P = (2St/D)·F·E·T
    PipelinePressure {
        #[arg(long)]
        smys: f64,
        #[arg(long)]
        thickness: f64,
        #[arg(long)]
        diameter: f64,
        #[arg(long)]
        design_factor: f64,
        #[arg(long, default_value_t = 1.0)]
        joint_factor: f64,
        #[arg(long, default_value_t = 1.0)]
        temperature_factor: f64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ComponentKindArg {
    Shell,
    Head,
}

impl From<ComponentKindArg> for ComponentKind {
    fn from(value: ComponentKindArg) -> Self {
        match value {
            ComponentKindArg::Shell => ComponentKind::Shell,
            ComponentKindArg::Head => ComponentKind::EllipsoidalHead,
        }
    }
}

#[derive(Debug, Args)]
pub struct ComponentArgs {
    #[arg(long, default_value = "component")]
    pub name: String,
    #[arg(long, value_enum)]
    pub kind: ComponentKindArg,
    /// 설계압력
    #[arg(long)]
    pub pressure: f64,
    /// 설계온도
    #[arg(long)]
    pub temperature: f64,
    /// 내경
    #[arg(long)]
    pub diameter: f64,
    /// 이음효율 (1.0, 0.85, 0.70)
    #[arg(long)]
    pub efficiency: f64,
    #[arg(long, default_value_t = 0.0)]
    pub corrosion_allowance: f64,
    /// 허용응력. 생략하면 --material로 테이블에서 조회한다.
    #[arg(long)]
    pub stress: Option<f64>,
    #[arg(long)]
    pub material: Option<String>,
    /// 현재 두께
    #[arg(long)]
    pub current: f64,
    /// 부식률 [길이 단위/yr]
    #[arg(long)]
    pub rate: Option<f64>,
}

#[derive(Debug, Subcommand)]
pub enum FfsCommand {
    /// 전면 감육
    General {
        #[arg(long)]
        current: f64,
        #[arg(long)]
        minimum: f64,
        #[arg(long)]
        design_pressure: f64,
        #[arg(long)]
        operating_pressure: f64,
    },
    /// 국부 감육 (LTA)
    Local {
        #[arg(long)]
        length: f64,
        #[arg(long)]
        width: f64,
        #[arg(long)]
        depth: f64,
        #[arg(long)]
        remaining: f64,
        #[arg(long)]
        design_pressure: f64,
        #[arg(long)]
        allowable: f64,
        #[arg(long = "yield")]
        yield_strength: f64,
    },
    /// 균열형 결함
    Crack {
        #[arg(long)]
        depth: f64,
        #[arg(long)]
        stress: f64,
        /// 파괴인성 K_IC [응력 단위·√in]
        #[arg(long)]
        toughness: f64,
        #[arg(long, default_value_t = 1.12)]
        geometry_factor: f64,
    },
}

#[derive(Debug, Args)]
pub struct RbiArgs {
    #[arg(long)]
    pub pressure: f64,
    #[arg(long)]
    pub temperature: f64,
    /// 유체명 (예: hydrogen, H2S, crude oil, water)
    #[arg(long)]
    pub fluid: String,
    /// 부식률 [길이 단위/yr]
    #[arg(long)]
    pub rate: f64,
    /// 손상 기구 (예: SCC, HTHA, general)
    #[arg(long, default_value = "general")]
    pub mechanism: String,
    /// 검사 유효도 0~1
    #[arg(long)]
    pub effectiveness: f64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum QuantityArg {
    Pressure,
    Stress,
    Length,
    Temperature,
}

impl From<QuantityArg> for QuantityKind {
    fn from(value: QuantityArg) -> Self {
        match value {
            QuantityArg::Pressure => QuantityKind::Pressure,
            QuantityArg::Stress => QuantityKind::Stress,
            QuantityArg::Length => QuantityKind::Length,
            QuantityArg::Temperature => QuantityKind::Temperature,
        }
    }
}

/// 명령행 수치를 엔진 단위(psi, in, °F)로 바꾸는 경계 변환기.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputUnits {
    pub pressure: PressureUnit,
    pub stress: StressUnit,
    pub length: LengthUnit,
    pub temperature: TemperatureUnit,
}

impl InputUnits {
    /// 명령행 단위가 있으면 우선하고, 없으면 설정 기본값을 쓴다.
    pub fn resolve(args: &UnitArgs, defaults: &DefaultUnits) -> Result<Self, ConversionError> {
        Ok(Self {
            pressure: match &args.pressure_unit {
                Some(s) => conversion::parse_pressure_unit(s)?,
                None => defaults.pressure,
            },
            stress: match &args.stress_unit {
                Some(s) => conversion::parse_stress_unit(s)?,
                None => defaults.stress,
            },
            length: match &args.length_unit {
                Some(s) => conversion::parse_length_unit(s)?,
                None => defaults.length,
            },
            temperature: match &args.temp_unit {
                Some(s) => conversion::parse_temperature_unit(s)?,
                None => defaults.temperature,
            },
        })
    }

    pub fn psi(&self, value: f64) -> f64 {
        convert_pressure(value, self.pressure, PressureUnit::Psi)
    }

    pub fn stress_psi(&self, value: f64) -> f64 {
        convert_stress(value, self.stress, StressUnit::Psi)
    }

    pub fn inch(&self, value: f64) -> f64 {
        convert_length(value, self.length, LengthUnit::Inch)
    }

    pub fn fahrenheit(&self, value: f64) -> f64 {
        convert_temperature(value, self.temperature, TemperatureUnit::Fahrenheit)
    }
}

/// `thickness --input`에 쓰는 JSON 파일. 값은 모두 in 단위다.
#[derive(Debug, Clone, Deserialize)]
pub struct ThicknessFile {
    #[serde(default)]
    pub default_minimum_thickness_in: Option<f64>,
    pub readings: Vec<TmlRow>,
}

/// 측정 이력 + 위치별 최소 요구두께.
#[derive(Debug, Clone, Deserialize)]
pub struct TmlRow {
    #[serde(flatten)]
    pub reading: ThicknessReading,
    #[serde(default)]
    pub minimum_thickness_in: Option<f64>,
}

/// `trend --input`에 쓰는 JSON 파일.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendFile {
    pub snapshots: Vec<InspectionSnapshot>,
}

#[derive(Debug, Serialize)]
struct FormulaOutput {
    formula: &'static str,
    value: f64,
    unit: &'static str,
}

#[derive(Debug, Serialize)]
struct ConversionOutput<'a> {
    value: f64,
    unit: &'a str,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, AppError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn fmt_opt(value: Option<f64>, precision: usize, tr: &Translator) -> String {
    match value {
        Some(v) => format!("{v:.precision$}"),
        None => tr.t(keys::NOT_AVAILABLE).to_string(),
    }
}

fn fmt_life(life: RemainingLife, tr: &Translator) -> String {
    match life {
        RemainingLife::Years(y) => format!("{y:.1} {}", tr.t(keys::YEARS)),
        RemainingLife::NotApplicable => tr.t(keys::NOT_APPLICABLE).to_string(),
        RemainingLife::Indeterminate => tr.t(keys::INDETERMINATE).to_string(),
    }
}

/// 허용응력 조회 또는 재질 목록 출력.
pub fn handle_stress(
    tr: &Translator,
    cfg: &Config,
    units: &InputUnits,
    json: bool,
    material: Option<&str>,
    temp: Option<f64>,
    table_path: Option<&Path>,
) -> Result<(), AppError> {
    let table = match table_path {
        Some(path) => MaterialStressTable::load(path)?,
        None => cfg.material_stress_table()?,
    };
    let (Some(material), Some(temp)) = (material, temp) else {
        let materials = table.materials();
        if json {
            return print_json(&materials);
        }
        println!("{}", tr.t(keys::STRESS_MATERIALS));
        for m in materials {
            println!("  {m}");
        }
        return Ok(());
    };
    let lookup = table.lookup_allowable_stress(material, units.fahrenheit(temp))?;
    if json {
        return print_json(&lookup);
    }
    print_stress_lookup(tr, &lookup);
    Ok(())
}

fn print_stress_lookup(tr: &Translator, lookup: &StressLookup) {
    let note = match lookup.edge {
        Some(TableEdge::BelowRange) => tr.t(keys::STRESS_EDGE_BELOW),
        Some(TableEdge::AboveRange) => tr.t(keys::STRESS_EDGE_ABOVE),
        None if lookup.interpolated => tr.t(keys::STRESS_INTERPOLATED),
        None => tr.t(keys::STRESS_EXACT),
    };
    println!(
        "{} {:.0} psi ({note})",
        tr.t(keys::STRESS_VALUE),
        lookup.allowable_stress_psi
    );
    if let Some((lo, hi)) = lookup.bounds {
        println!(
            "  {:.0}°F: {:.0} psi / {:.0}°F: {:.0} psi",
            lo.temperature_f, lo.allowable_stress_psi, hi.temperature_f, hi.allowable_stress_psi
        );
    }
}

/// 설계 공식 하나를 계산한다.
pub fn handle_formula(
    tr: &Translator,
    units: &InputUnits,
    json: bool,
    cmd: &FormulaCommand,
) -> Result<(), AppError> {
    let u = units;
    let (formula, key, value, unit) = match *cmd {
        FormulaCommand::ShellThickness {
            pressure,
            radius,
            stress,
            efficiency,
        } => (
            "shell_min_thickness",
            keys::FORMULA_SHELL_THICKNESS,
            formulas::shell_min_thickness(
                u.psi(pressure),
                u.inch(radius),
                u.stress_psi(stress),
                efficiency,
            )?,
            "in",
        ),
        FormulaCommand::ShellMawp {
            thickness,
            radius,
            stress,
            efficiency,
        } => (
            "shell_mawp",
            keys::FORMULA_SHELL_MAWP,
            formulas::shell_mawp(
                u.inch(thickness),
                u.inch(radius),
                u.stress_psi(stress),
                efficiency,
            )?,
            "psi",
        ),
        FormulaCommand::HeadThickness {
            pressure,
            radius,
            stress,
            efficiency,
        } => (
            "ellipsoidal_head_min_thickness",
            keys::FORMULA_HEAD_THICKNESS,
            formulas::ellipsoidal_head_min_thickness(
                u.psi(pressure),
                u.inch(radius),
                u.stress_psi(stress),
                efficiency,
            )?,
            "in",
        ),
        FormulaCommand::HeadMawp {
            thickness,
            diameter,
            stress,
            efficiency,
        } => (
            "head_mawp",
            keys::FORMULA_HEAD_MAWP,
            formulas::head_mawp(
                u.inch(thickness),
                u.inch(diameter),
                u.stress_psi(stress),
                efficiency,
            )?,
            "psi",
        ),
        FormulaCommand::PipeThickness {
            pressure,
            diameter,
            stress,
            efficiency,
            y,
        } => (
            "pipe_min_thickness",
            keys::FORMULA_PIPE_THICKNESS,
            formulas::pipe_min_thickness(
                u.psi(pressure),
                u.inch(diameter),
                u.stress_psi(stress),
                efficiency,
                y,
            )?,
            "in",
        ),
        FormulaCommand::PipePressure {
            thickness,
            diameter,
            stress,
            efficiency,
            y,
        } => (
            "pipe_max_pressure",
            keys::FORMULA_PIPE_PRESSURE,
            formulas::pipe_max_pressure(
                u.inch(thickness),
                u.inch(diameter),
                u.stress_psi(stress),
                efficiency,
                y,
            )?,
            "psi",
        ),
        FormulaCommand::PipelinePressure {
            smys,
            thickness,
            diameter,
            design_factor,
            joint_factor,
            temperature_factor,
        } => (
            "pipeline_design_pressure",
            keys::FORMULA_PIPELINE_PRESSURE,
            formulas::pipeline_design_pressure(
                u.stress_psi(smys),
                u.inch(thickness),
                u.inch(diameter),
                design_factor,
                joint_factor,
                temperature_factor,
            )?,
            "psi",
        ),
    };
    if json {
        return print_json(&FormulaOutput {
            formula,
            value,
            unit,
        });
    }
    let precision = if unit == "in" { 4 } else { 1 };
    println!("{} {value:.precision$} {unit}", tr.t(key));
    Ok(())
}

/// TML 파일 전체를 분석하고 최악값을 요약한다.
///
/// `--minimum`은 명령줄 길이 단위를 따르고, 파일 안의 최소 두께는 인치이다.
pub fn handle_thickness(
    tr: &Translator,
    units: &InputUnits,
    json: bool,
    input: &Path,
    minimum_override: Option<f64>,
) -> Result<(), AppError> {
    let file: ThicknessFile = read_json(input)?;
    let minimums = row_minimums(&file, minimum_override.map(|m| units.inch(m)));
    let readings: Vec<ThicknessReading> = file.readings.into_iter().map(|r| r.reading).collect();

    let summary =
        thickness::summarize_inspection(&readings, |i, _| minimums.get(i).copied().flatten());
    tracing::info!(
        analyzed = summary.results.len(),
        skipped = summary.skipped.len(),
        "TML 분석 완료"
    );
    if json {
        return print_json(&summary);
    }
    print_inspection_summary(tr, &summary);
    Ok(())
}

// 행별 최소 두께 [in]: 행 값 > 명령줄 값 > 파일 기본값 순.
fn row_minimums(file: &ThicknessFile, override_in: Option<f64>) -> Vec<Option<f64>> {
    let fallback = override_in.or(file.default_minimum_thickness_in);
    file.readings
        .iter()
        .map(|row| row.minimum_thickness_in.or(fallback))
        .collect()
}

fn print_inspection_summary(tr: &Translator, summary: &InspectionSummary) {
    println!("{}", tr.t(keys::THICKNESS_HEADING));
    println!("{}", tr.t(keys::THICKNESS_HEADER));
    let mut any_assumed = false;
    let mut any_gain = false;
    for r in &summary.results {
        let mpy = r.corrosion_rate_mpy.map(|m| {
            any_assumed |= m.assumed_time_span;
            let mark = if m.assumed_time_span { "*" } else { "" };
            format!("{:.1}{mark}", m.mils_per_year)
        });
        any_gain |= r.thickness_gain;
        let status = match r.status {
            Some(s) => s.as_str(),
            None => tr.t(keys::NOT_AVAILABLE),
        };
        println!(
            "{}{} | {:.3} | {} | {} | {} | {} | {} | {}",
            r.location,
            if r.thickness_gain { " (+)" } else { "" },
            r.current_thickness_in,
            fmt_opt(r.short_term_rate, 4, tr),
            fmt_opt(r.long_term_rate, 4, tr),
            mpy.unwrap_or_else(|| tr.t(keys::NOT_AVAILABLE).to_string()),
            fmt_life(r.remaining_life, tr),
            fmt_opt(r.loss_percent, 2, tr),
            status,
        );
    }
    if any_assumed {
        println!("{}", tr.t(keys::THICKNESS_ASSUMED_SPAN));
    }
    if any_gain {
        println!("{}", tr.t(keys::THICKNESS_GAIN));
    }
    if let (Some(rate), Some(loc)) = (summary.max_corrosion_rate_mpy, &summary.max_rate_location) {
        println!("{} {rate:.1} mpy ({loc})", tr.t(keys::THICKNESS_MAX_RATE));
    }
    if let Some(worst) = &summary.min_remaining_life {
        println!(
            "{} {:.1} {} ({})",
            tr.t(keys::THICKNESS_MIN_LIFE),
            worst.years,
            tr.t(keys::YEARS),
            worst.location
        );
    }
    for s in &summary.skipped {
        println!("{} {}: {}", tr.t(keys::THICKNESS_SKIPPED), s.location, s.error);
    }
}

/// 부재 요구두께/MAWP/잔여수명.
pub fn handle_component(
    tr: &Translator,
    cfg: &Config,
    units: &InputUnits,
    json: bool,
    args: &ComponentArgs,
) -> Result<(), AppError> {
    let joint_efficiency = JointEfficiency::try_from(args.efficiency).map_err(AppError::Input)?;
    let design_temperature_f = units.fahrenheit(args.temperature);
    let allowable_stress_psi = match (args.stress, &args.material) {
        (Some(s), _) => units.stress_psi(s),
        (None, Some(material)) => {
            let table = cfg.material_stress_table()?;
            table
                .lookup_allowable_stress(material, design_temperature_f)?
                .allowable_stress_psi
        }
        (None, None) => {
            return Err(AppError::Input(
                "--stress 또는 --material 중 하나가 필요합니다".to_string(),
            ))
        }
    };
    let params = VesselDesignParameters {
        design_pressure_psi: units.psi(args.pressure),
        design_temperature_f,
        inside_diameter_in: units.inch(args.diameter),
        joint_efficiency,
        corrosion_allowance_in: units.inch(args.corrosion_allowance),
        allowable_stress_psi,
    };
    let calc = thickness::evaluate_component(
        &args.name,
        args.kind.into(),
        &params,
        units.inch(args.current),
        args.rate.map(|r| units.inch(r)),
    )?;
    if json {
        return print_json(&calc);
    }
    print_component(tr, &calc);
    Ok(())
}

fn print_component(tr: &Translator, calc: &ComponentCalculation) {
    println!("\n-- {} --", calc.component_name);
    println!(
        "{} {:.4} in",
        tr.t(keys::COMPONENT_REQUIRED),
        calc.required_thickness_in
    );
    println!("{} {:.1} psi", tr.t(keys::COMPONENT_MAWP), calc.mawp_psi);
    println!(
        "{} {}",
        tr.t(keys::COMPONENT_REMAINING_LIFE),
        fmt_life(calc.remaining_life, tr)
    );
    println!(
        "{} {} {}",
        tr.t(keys::COMPONENT_NEXT_INSPECTION),
        fmt_opt(calc.next_inspection_years, 1, tr),
        tr.t(keys::YEARS)
    );
}

/// FFS Level 1 평가.
pub fn handle_ffs(
    tr: &Translator,
    units: &InputUnits,
    json: bool,
    cmd: &FfsCommand,
) -> Result<(), AppError> {
    let u = units;
    let result = match *cmd {
        FfsCommand::General {
            current,
            minimum,
            design_pressure,
            operating_pressure,
        } => ffs::assess_general_metal_loss(&GeneralMetalLossInput {
            current_thickness_in: u.inch(current),
            minimum_thickness_in: u.inch(minimum),
            design_pressure_psi: u.psi(design_pressure),
            operating_pressure_psi: u.psi(operating_pressure),
        })?,
        FfsCommand::Local {
            length,
            width,
            depth,
            remaining,
            design_pressure,
            allowable,
            yield_strength,
        } => ffs::assess_local_metal_loss(&LocalMetalLossInput {
            flaw_length_in: u.inch(length),
            flaw_width_in: u.inch(width),
            flaw_depth_in: u.inch(depth),
            remaining_thickness_in: u.inch(remaining),
            design_pressure_psi: u.psi(design_pressure),
            allowable_stress_psi: u.stress_psi(allowable),
            yield_strength_psi: u.stress_psi(yield_strength),
        })?,
        // K_IC는 응력 단위·√in으로 받으므로 응력 환산만 적용한다.
        FfsCommand::Crack {
            depth,
            stress,
            toughness,
            geometry_factor,
        } => ffs::assess_crack(&CrackInput {
            crack_depth_in: u.inch(depth),
            applied_stress_psi: u.stress_psi(stress),
            fracture_toughness_psi_sqrt_in: u.stress_psi(toughness),
            geometry_factor,
        })?,
    };
    if json {
        return print_json(&result);
    }
    print_ffs(tr, &result);
    Ok(())
}

fn print_ffs(tr: &Translator, result: &FfsAssessmentResult) {
    let kind = match result.kind {
        ffs::AssessmentKind::GeneralMetalLoss => tr.t(keys::FFS_KIND_GENERAL),
        ffs::AssessmentKind::LocalMetalLoss => tr.t(keys::FFS_KIND_LOCAL),
        ffs::AssessmentKind::Crack => tr.t(keys::FFS_KIND_CRACK),
    };
    println!("{} {kind}", tr.t(keys::FFS_KIND));
    println!("{} {:.2}", tr.t(keys::FFS_SAFETY_FACTOR), result.safety_factor);
    println!("{} {}", tr.t(keys::FFS_VERDICT), result.verdict.as_str());
}

/// RBI 점수. 유체/손상 기구 자유 기재를 분류한 뒤 계산한다.
pub fn handle_rbi(
    tr: &Translator,
    units: &InputUnits,
    json: bool,
    args: &RbiArgs,
) -> Result<(), AppError> {
    let input = RbiInput {
        operating_pressure_psi: units.psi(args.pressure),
        operating_temperature_f: units.fahrenheit(args.temperature),
        fluid: FluidHazard::classify(&args.fluid),
        corrosion_rate_in_per_year: units.inch(args.rate),
        mechanism: DamageMechanism::classify(&args.mechanism),
        inspection_effectiveness: args.effectiveness,
    };
    tracing::debug!(fluid = ?input.fluid, mechanism = ?input.mechanism, "RBI 입력 분류");
    let score = rbi::score_risk(&input)?;
    if json {
        return print_json(&score);
    }
    print_rbi(tr, &score);
    Ok(())
}

fn print_rbi(tr: &Translator, score: &RiskScore) {
    println!("{} {}", tr.t(keys::RBI_CONSEQUENCE), score.consequence_score);
    println!("{} {:.2}", tr.t(keys::RBI_PROBABILITY), score.probability_score);
    println!("{} {:.2}", tr.t(keys::RBI_RISK), score.risk);
    println!("{} {}", tr.t(keys::RBI_LEVEL), score.risk_level.as_str());
    println!(
        "{} {:.0} {}",
        tr.t(keys::RBI_INTERVAL),
        score.recommended_interval_years,
        tr.t(keys::YEARS)
    );
    println!("{}", tr.t(keys::RBI_DISCLAIMER));
}

/// 다중 검사 추세 분석.
pub fn handle_trend(
    tr: &Translator,
    json: bool,
    input: &Path,
    prefix_chars: usize,
) -> Result<(), AppError> {
    let file: TrendFile = read_json(input)?;
    let matcher = PrefixSimilarityMatcher { prefix_chars };
    let report = trend::analyze_trends(&file.snapshots, &matcher)?;
    tracing::info!(
        snapshots = file.snapshots.len(),
        locations = report.thickness.len(),
        findings = report.findings.len(),
        "추세 분석 완료"
    );
    if json {
        return print_json(&report);
    }
    print_trend(tr, &report);
    Ok(())
}

fn print_trend(tr: &Translator, report: &TrendReport) {
    println!("{}", tr.t(keys::TREND_THICKNESS_HEADING));
    if report.thickness.is_empty() {
        println!("{}", tr.t(keys::TREND_NONE));
    }
    for t in &report.thickness {
        println!(
            "{} | {:.3} → {:.3} in | {:.2} {} | {:.4} in/yr | {}",
            t.location,
            t.first_thickness_in,
            t.last_thickness_in,
            t.years,
            tr.t(keys::YEARS),
            t.rate_in_per_year,
            t.status.as_str()
        );
    }

    println!("{}", tr.t(keys::TREND_FINDINGS_HEADING));
    if report.findings.is_empty() {
        println!("{}", tr.t(keys::TREND_NONE));
    }
    for f in &report.findings {
        let status = match f.status {
            trend::FindingStatus::New => tr.t(keys::TREND_STATUS_NEW),
            trend::FindingStatus::Resolved => tr.t(keys::TREND_STATUS_RESOLVED),
            trend::FindingStatus::Recurring => tr.t(keys::TREND_STATUS_RECURRING),
        };
        println!(
            "[{status}] {} / {}: {} (x{}, {})",
            f.finding.section, f.finding.finding_type, f.finding.description, f.occurrences, f.first_seen
        );
    }

    println!("{}", tr.t(keys::TREND_DEGRADATION_HEADING));
    if report.degradation.is_empty() {
        println!("{}", tr.t(keys::TREND_NONE));
    }
    for d in &report.degradation {
        let trend = match d.trend {
            trend::DegradationTrend::Accelerating => tr.t(keys::TREND_ACCELERATING),
            trend::DegradationTrend::Normal => tr.t(keys::TREND_NORMAL),
            trend::DegradationTrend::Improving => tr.t(keys::TREND_IMPROVING),
        };
        println!(
            "{} | {} → {} | {:.1} → {:.1} {} | x{:.2} {trend}",
            d.component_name,
            d.from_date,
            d.to_date,
            d.previous_remaining_life,
            d.current_remaining_life,
            tr.t(keys::YEARS),
            d.acceleration_factor
        );
    }
}

/// 단위 변환을 처리한다.
pub fn handle_convert(
    tr: &Translator,
    json: bool,
    kind: QuantityArg,
    value: f64,
    from: &str,
    to: &str,
) -> Result<(), AppError> {
    let result = conversion::convert(kind.into(), value, from, to)?;
    if json {
        return print_json(&ConversionOutput {
            value: result,
            unit: to,
        });
    }
    println!("{} {result} {}", tr.t(keys::CONVERT_RESULT), to.trim());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ksi_input_becomes_psi() {
        let args = UnitArgs {
            stress_unit: Some("ksi".into()),
            ..UnitArgs::default()
        };
        let units = InputUnits::resolve(&args, &DefaultUnits::default()).unwrap();
        assert_eq!(units.stress_psi(20.0), 20_000.0);
        assert_eq!(units.psi(100.0), 100.0);
    }

    #[test]
    fn rejects_unknown_unit_flag() {
        let args = UnitArgs {
            length_unit: Some("furlong".into()),
            ..UnitArgs::default()
        };
        assert!(InputUnits::resolve(&args, &DefaultUnits::default()).is_err());
    }

    #[test]
    fn parses_formula_subcommand() {
        let cli = Cli::try_parse_from([
            "vessel_integrity_toolbox",
            "--lang",
            "en",
            "formula",
            "shell-thickness",
            "--pressure",
            "150",
            "--radius",
            "24",
            "--stress",
            "20000",
            "--efficiency",
            "0.85",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Formula(FormulaCommand::ShellThickness { .. })
        ));
    }

    #[test]
    fn tml_row_flattens_reading() {
        let row: TmlRow = serde_json::from_str(
            r#"{"component_name":"Shell","location_id":"TML-1",
                "current":{"thickness_in":0.48,"date":"2024-01-01"},
                "minimum_thickness_in":0.3}"#,
        )
        .unwrap();
        assert_eq!(row.minimum_thickness_in, Some(0.3));
        assert_eq!(row.reading.current_thickness(), Ok(0.48));
    }

    const TWO_ROWS: &str = r#"{
        "readings": [
            {"component_name":"Shell","location_id":"TML-1",
             "current":{"thickness_in":0.48},"minimum_thickness_in":0.3},
            {"component_name":"Shell","location_id":"TML-1",
             "current":{"thickness_in":0.47}}
        ]
    }"#;

    #[test]
    fn minimum_flag_follows_length_unit() {
        let args = UnitArgs {
            length_unit: Some("mm".into()),
            ..UnitArgs::default()
        };
        let units = InputUnits::resolve(&args, &DefaultUnits::default()).unwrap();
        let file: ThicknessFile = serde_json::from_str(TWO_ROWS).unwrap();
        let minimums = row_minimums(&file, Some(units.inch(3.0)));
        assert_eq!(minimums[0], Some(0.3));
        let converted = minimums[1].unwrap();
        assert!((converted - 3.0 / 25.4).abs() < 1e-9, "{converted}");
    }

    #[test]
    fn repeated_location_keeps_each_row_minimum() {
        let file: ThicknessFile = serde_json::from_str(TWO_ROWS).unwrap();
        assert_eq!(file.readings[0].reading.key(), file.readings[1].reading.key());
        assert_eq!(row_minimums(&file, None), vec![Some(0.3), None]);
        assert_eq!(row_minimums(&file, Some(0.25)), vec![Some(0.3), Some(0.25)]);
    }
}
