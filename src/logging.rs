//! 로그 초기화. tracing + tracing-subscriber를 쓴다.
//! 계산 엔진은 로그를 남기지 않고, 설정 로드와 CLI 명령 처리만 기록한다.

use tracing_subscriber::{fmt, EnvFilter};

/// 로그를 초기화한다.
///
/// 필터 우선순위: `RUST_LOG` → 설정의 `log_filter` → `warn`.
/// 표준 출력은 보고서/JSON 용이므로 로그는 stderr로 보낸다.
pub fn init(config_filter: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_filter.unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .try_init();
}

/// 테스트용 로그 초기화. 여러 번 호출해도 된다.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
