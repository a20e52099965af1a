use hair_report_common::form::FieldErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HairReportError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("入力ファイルが不正: {0}")]
    InvalidInput(String),

    #[error("입력값을 확인해주세요: {0}")]
    Validation(FieldErrors),

    #[error("{0}")]
    Api(String),

    #[error("PDF用フォントが設定されていません。`hair-report config --set-font PATH` または `--font` で指定してください")]
    MissingFont,

    #[error("PDF生成エラー: {0}")]
    PdfGeneration(String),

    #[error("対話入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] hair_report_common::Error),
}

impl HairReportError {
    /// バックエンド呼び出しの失敗を画面表示用メッセージに変換
    pub fn from_api(err: hair_report_common::Error) -> Self {
        HairReportError::Api(err.user_message())
    }
}

pub type Result<T> = std::result::Result<T, HairReportError>;
