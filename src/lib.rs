//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 외의 호출자(보고서 생성기 등)도 같은 엔진을 쓴다.
//!
//! 엔진 모듈(`formulas`, `thickness`, `ffs`, `rbi`, `trend`, `material_stress`)은 순수 계산만 하고
//! 로그를 남기지 않는다. 설정/로그/출력은 `app`, `ui_cli`가 맡는다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod dates;
pub mod design;
pub mod ffs;
pub mod formulas;
pub mod i18n;
pub mod logging;
pub mod material_stress;
pub mod outcome;
pub mod quantity;
pub mod rbi;
pub mod thickness;
pub mod trend;
pub mod ui_cli;
pub mod units;
