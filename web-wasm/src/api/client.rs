//! fetch ベースの解析APIクライアント
//!
//! 30秒でタイムアウト。リトライはしない。

use futures::future::{select, Either};
use gloo::timers::future::TimeoutFuture;
use hair_report_common::api::{
    extract_error_detail, resolve_base_url, AnalysisApi, Endpoint, REQUEST_TIMEOUT_MS,
};
use hair_report_common::types::{
    ApiEnvelope, FullAnalysisResponse, HairAnalysisInput, HairAnalysisResult, HealthStatus,
    TextAnalysisResponse,
};
use hair_report_common::{Error, Result};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

#[derive(Debug, Clone)]
pub struct FetchClient {
    base_url: String,
    timeout_ms: u32,
}

impl FetchClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: REQUEST_TIMEOUT_MS,
        }
    }

    /// ビルド時の `HAIR_API_URL`、なければプロファイル別の既定値
    pub fn from_build_env() -> Self {
        Self::new(resolve_base_url(
            option_env!("HAIR_API_URL"),
            !cfg!(debug_assertions),
        ))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send<T: DeserializeOwned>(&self, endpoint: Endpoint, body: Option<String>) -> Result<T> {
        let request = Box::pin(self.fetch_json::<T>(endpoint, body));
        let timeout = Box::pin(TimeoutFuture::new(self.timeout_ms));

        match select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => {
                gloo::console::error!(format!("{} {} timed out", endpoint.method(), endpoint.path()));
                Err(Error::Timeout(self.timeout_ms))
            }
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, endpoint: Endpoint, body: Option<String>) -> Result<T> {
        let url = endpoint.url(&self.base_url);
        gloo::console::debug!(format!("API Request: {} {}", endpoint.method(), url));

        let opts = RequestInit::new();
        opts.set_method(endpoint.method());
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = &body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&url, &opts).map_err(transport_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(transport_error)?;

        let window = web_sys::window().ok_or_else(|| Error::Platform("window unavailable".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport_error)?;
        let resp: Response = resp_value.dyn_into().map_err(transport_error)?;

        let text = JsFuture::from(resp.text().map_err(transport_error)?)
            .await
            .map_err(transport_error)?
            .as_string()
            .unwrap_or_default();

        gloo::console::debug!(format!("API Response: {} {}", resp.status(), url));

        if !resp.ok() {
            return Err(Error::Http {
                status: resp.status(),
                detail: extract_error_detail(&text),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// JS例外からメッセージを取り出す（空ならユーザー向け固定文言に落ちる）
fn transport_error(value: JsValue) -> Error {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_default();
    Error::Transport(message)
}

fn to_body(input: &HairAnalysisInput) -> Result<Option<String>> {
    Ok(Some(serde_json::to_string(input)?))
}

impl AnalysisApi for FetchClient {
    async fn health_check(&self) -> Result<HealthStatus> {
        self.send(Endpoint::Health, None).await
    }

    async fn get_test_data(&self) -> Result<HairAnalysisInput> {
        self.send(Endpoint::TestData, None).await
    }

    async fn analyze(&self, input: &HairAnalysisInput) -> Result<ApiEnvelope<HairAnalysisResult>> {
        self.send(Endpoint::SimpleAnalyze, to_body(input)?).await
    }

    async fn analyze_full(&self, input: &HairAnalysisInput) -> Result<FullAnalysisResponse> {
        self.send(Endpoint::FullAnalysis, to_body(input)?).await
    }

    async fn analyze_simple(&self, input: &HairAnalysisInput) -> Result<TextAnalysisResponse> {
        self.send(Endpoint::SimpleText, to_body(input)?).await
    }

    async fn analyze_prompt_based(&self, input: &HairAnalysisInput) -> Result<TextAnalysisResponse> {
        self.send(Endpoint::PromptBased, to_body(input)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hair_report_common::api::DEV_API_URL;

    #[test]
    fn test_new_uses_default_timeout() {
        let client = FetchClient::new("http://localhost:8000");
        assert_eq!(client.timeout_ms, 30_000);
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_debug_build_falls_back_to_local() {
        if option_env!("HAIR_API_URL").is_none() && cfg!(debug_assertions) {
            assert_eq!(FetchClient::from_build_env().base_url(), DEV_API_URL);
        }
    }
}
