//! 解析バックエンドのAPI契約
//!
//! ブラウザ（fetch）とCLI（reqwest）の両クライアントが実装する。
//! リトライ・キャッシュは行わない。

use crate::error::Result;
use crate::types::{
    ApiEnvelope, FullAnalysisResponse, HairAnalysisInput, HairAnalysisResult, HealthStatus,
    TextAnalysisResponse,
};
use serde::Deserialize;

/// リクエストのタイムアウト（ミリ秒）
pub const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// ベースURLを指定する環境変数
pub const API_URL_ENV: &str = "HAIR_API_URL";

/// 開発ビルドのフォールバック
pub const DEV_API_URL: &str = "http://localhost:8000";

/// リリースビルドのフォールバック
pub const PROD_API_URL: &str = "https://backend-7lac8qjfv-ccomaengs-projects.vercel.app";

/// エンドポイント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Health,
    TestData,
    SimpleAnalyze,
    FullAnalysis,
    SimpleText,
    PromptBased,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Health => "/health",
            Endpoint::TestData => "/test-data",
            Endpoint::SimpleAnalyze => "/simple/analyze",
            Endpoint::FullAnalysis => "/api/hair-analysis/full",
            Endpoint::SimpleText => "/api/hair-analysis/simple",
            Endpoint::PromptBased => "/api/hair-analysis/prompt-based",
        }
    }

    pub fn method(self) -> &'static str {
        match self {
            Endpoint::Health | Endpoint::TestData => "GET",
            _ => "POST",
        }
    }

    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// ベースURLの決定: 環境変数 → ビルドプロファイル別の既定値
pub fn resolve_base_url(env_value: Option<&str>, release: bool) -> String {
    match env_value.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
        _ if release => PROD_API_URL.to_string(),
        _ => DEV_API_URL.to_string(),
    }
}

/// 解析API
///
/// WASM側のFutureは `Send` でないため、Send境界は付けない。
#[allow(async_fn_in_trait)]
pub trait AnalysisApi {
    /// GET /health
    async fn health_check(&self) -> Result<HealthStatus>;

    /// GET /test-data
    async fn get_test_data(&self) -> Result<HairAnalysisInput>;

    /// POST /simple/analyze
    async fn analyze(&self, input: &HairAnalysisInput) -> Result<ApiEnvelope<HairAnalysisResult>>;

    /// POST /api/hair-analysis/full
    async fn analyze_full(&self, input: &HairAnalysisInput) -> Result<FullAnalysisResponse>;

    /// POST /api/hair-analysis/simple
    async fn analyze_simple(&self, input: &HairAnalysisInput) -> Result<TextAnalysisResponse>;

    /// POST /api/hair-analysis/prompt-based
    async fn analyze_prompt_based(&self, input: &HairAnalysisInput) -> Result<TextAnalysisResponse>;
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// エラーレスポンス本文から `detail` を取り出す
///
/// FastAPIの形式: 文字列、または `{"msg": ...}` の配列。
pub fn extract_error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(text) if !text.trim().is_empty() => Some(text),
        serde_json::Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(text) => Some(text.clone()),
                    other => other.get("msg").and_then(|m| m.as_str()).map(str::to_string),
                })
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join(", "))
            }
        }
        _ => None,
    }
}
