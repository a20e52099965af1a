//! エラー型定義

use thiserror::Error;

/// 接続失敗時のフォールバック文言
pub const CONNECTION_FAILED_MESSAGE: &str = "서버와의 연결에 실패했습니다.";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("timeout of {0}ms exceeded")]
    Timeout(u32),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {}", detail.as_deref().unwrap_or("no detail"))]
    Http { status: u16, detail: Option<String> },

    #[error("PDF로 변환할 요소를 찾을 수 없습니다. (#{0})")]
    ElementNotFound(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Platform error: {0}")]
    Platform(String),
}

impl Error {
    /// 画面に出す最も具体的なメッセージ
    ///
    /// バックエンドの `detail` → エラー本文 → 固定文言 の順で選ぶ。
    pub fn user_message(&self) -> String {
        let specific = match self {
            Error::Http { detail: Some(detail), .. } => detail.clone(),
            Error::Http { status, detail: None } => format!("Request failed with status code {}", status),
            Error::Transport(msg) => msg.clone(),
            other => other.to_string(),
        };

        if specific.trim().is_empty() {
            CONNECTION_FAILED_MESSAGE.to_string()
        } else {
            specific
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
