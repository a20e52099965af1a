//! フォーム送信フロー
//!
//! 検証 → ローディング開始 → モード別API呼び出し → タグ付きレポート。
//! ローディングは `BusyGuard` で全経路解除される。

use crate::api::AnalysisApi;
use crate::busy::BusyGuard;
use crate::form::{FieldErrors, FormDraft};
use crate::report::{AnalysisReport, ReportMode};
use crate::types::{ApiEnvelope, HairAnalysisInput};

pub const MSG_ANALYSIS_FAILED: &str = "분석 중 오류가 발생했습니다.";
pub const MSG_TEST_DATA_FAILED: &str = "테스트 데이터를 불러오는데 실패했습니다.";

/// 送信失敗
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// 検証エラー（リクエストは送っていない）
    Invalid(FieldErrors),
    /// フォーム上部のバナーに出すメッセージ
    Failed(String),
}

impl SubmitError {
    pub fn banner(&self) -> Option<&str> {
        match self {
            SubmitError::Invalid(_) => None,
            SubmitError::Failed(msg) => Some(msg),
        }
    }
}

/// `success=false` 時の表示メッセージ
///
/// errors があれば ", " 連結、なければ message、それも空なら固定文言。
pub fn backend_failure_message<T>(envelope: &ApiEnvelope<T>) -> String {
    match &envelope.errors {
        Some(errors) if !errors.is_empty() => errors.join(", "),
        _ if !envelope.message.trim().is_empty() => envelope.message.clone(),
        _ => MSG_ANALYSIS_FAILED.to_string(),
    }
}

/// モードに応じたエンドポイントを呼び、タグ付きレポートを返す
pub async fn request_report<A: AnalysisApi>(
    api: &A,
    input: &HairAnalysisInput,
    mode: ReportMode,
) -> Result<AnalysisReport, String> {
    match mode {
        ReportMode::Standard => api
            .analyze_full(input)
            .await
            .map(AnalysisReport::Standard)
            .map_err(|e| e.user_message()),
        ReportMode::Legacy => {
            let envelope = api.analyze(input).await.map_err(|e| e.user_message())?;
            let message = backend_failure_message(&envelope);
            match envelope {
                ApiEnvelope { success: true, data: Some(data), .. } => Ok(AnalysisReport::Legacy(data)),
                _ => Err(message),
            }
        }
    }
}

/// フォームを検証して送信する
///
/// `set_loading` は検証通過後に `true`、終了時に必ず `false` になる。
pub async fn submit<A, F>(api: &A, draft: &FormDraft, set_loading: F) -> Result<AnalysisReport, SubmitError>
where
    A: AnalysisApi,
    F: Fn(bool),
{
    let input = draft.validate().map_err(SubmitError::Invalid)?;
    let _busy = BusyGuard::engage(set_loading);
    request_report(api, &input, draft.mode)
        .await
        .map_err(SubmitError::Failed)
}

/// テストデータを取得
///
/// フォームへの反映（`FormDraft::load`）は取得後の最新状態に対して行う。
pub async fn fetch_test_data<A: AnalysisApi>(api: &A) -> Result<HairAnalysisInput, String> {
    api.get_test_data()
        .await
        .map_err(|_| MSG_TEST_DATA_FAILED.to_string())
}
