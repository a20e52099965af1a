//! reqwest ベースの解析APIクライアント

use hair_report_common::api::{extract_error_detail, AnalysisApi, Endpoint};
use hair_report_common::types::{
    ApiEnvelope, FullAnalysisResponse, HairAnalysisInput, HairAnalysisResult, HealthStatus,
    TextAnalysisResponse,
};
use hair_report_common::{Error, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    timeout_ms: u32,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        let timeout = Duration::from_secs(timeout_seconds.max(1));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_ms: u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout(self.timeout_ms)
        } else if err.is_connect() {
            Error::Transport(String::new())
        } else {
            Error::Transport(err.to_string())
        }
    }

    async fn send<T: DeserializeOwned>(&self, endpoint: Endpoint, body: Option<&HairAnalysisInput>) -> Result<T> {
        let url = endpoint.url(&self.base_url);
        let method = if endpoint.method() == "GET" { Method::GET } else { Method::POST };
        debug!(method = %method, url = %url, "API Request");

        let mut request = self.client.request(method, &url);
        if let Some(input) = body {
            request = request.json(input);
        }

        let resp = request.send().await.map_err(|e| self.transport_error(e))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| self.transport_error(e))?;
        debug!(status = status.as_u16(), url = %url, bytes = text.len(), "API Response");

        if !status.is_success() {
            let detail = extract_error_detail(&text);
            warn!(status = status.as_u16(), detail = ?detail, "API error");
            return Err(Error::Http {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

impl AnalysisApi for HttpClient {
    async fn health_check(&self) -> Result<HealthStatus> {
        self.send(Endpoint::Health, None).await
    }

    async fn get_test_data(&self) -> Result<HairAnalysisInput> {
        self.send(Endpoint::TestData, None).await
    }

    async fn analyze(&self, input: &HairAnalysisInput) -> Result<ApiEnvelope<HairAnalysisResult>> {
        self.send(Endpoint::SimpleAnalyze, Some(input)).await
    }

    async fn analyze_full(&self, input: &HairAnalysisInput) -> Result<FullAnalysisResponse> {
        self.send(Endpoint::FullAnalysis, Some(input)).await
    }

    async fn analyze_simple(&self, input: &HairAnalysisInput) -> Result<TextAnalysisResponse> {
        self.send(Endpoint::SimpleText, Some(input)).await
    }

    async fn analyze_prompt_based(&self, input: &HairAnalysisInput) -> Result<TextAnalysisResponse> {
        self.send(Endpoint::PromptBased, Some(input)).await
    }
}
