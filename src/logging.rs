//! ログ設定（tracing）
//!
//! stderr へ出力。レベルは `HAIR_REPORT_LOG` で上書きできる。
//!
//! ```bash
//! HAIR_REPORT_LOG=debug hair-report analyze input.json
//! ```

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "HAIR_REPORT_LOG";

/// `--verbose` 指定時は debug、それ以外は warn
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "hair_report_rust=debug,info"
    } else {
        "warn"
    }
}

pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // 二重初期化（テスト等）は無視
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .without_time(),
        )
        .try_init();
}
