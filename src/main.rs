use std::process::ExitCode;

use clap::Parser;
use vessel_integrity_toolbox::i18n::{self, Translator};
use vessel_integrity_toolbox::ui_cli::Cli;
use vessel_integrity_toolbox::{app, config, logging};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령 하나를 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => config::load_from(path),
        None => config::load_or_default(),
    };
    let cfg = match loaded {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("오류 / Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(cfg.log_filter.as_deref());

    let lang = i18n::resolve_language(&cli.lang, Some(&cfg.language));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    match app::run(&cli, &cfg, &tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "명령 실패");
            eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}
