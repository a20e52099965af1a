//! CLI向けのレポート整形
//!
//! 画面表示・テキスト保存・PDFで同じブロック列を使う。

use crate::cli::AnalyzeMode;
use crate::error::{HairReportError, Result};
use hair_report_common::api::AnalysisApi;
use hair_report_common::report::legacy::{self, PDF_FILE_PREFIX};
use hair_report_common::report::standard::SectionId;
use hair_report_common::report::AnalysisReport;
use hair_report_common::submission::request_report;
use hair_report_common::HairAnalysisInput;
use regex::Regex;

lazy_static::lazy_static! {
    static ref BR_RE: Regex = Regex::new(r"(?i)<br\s*/?>").unwrap();
    static ref BLOCK_END_RE: Regex = Regex::new(r"(?i)</(p|div|h[1-6]|li)>").unwrap();
    static ref TAG_RE: Regex = Regex::new(r"<[^>]+>").unwrap();
    static ref BLANK_LINES_RE: Regex = Regex::new(r"\n{3,}").unwrap();
}

/// CLIで扱う解析結果
#[derive(Debug, Clone, PartialEq)]
pub enum CliReport {
    /// 旧形式・標準（Webと同じタグ付きレポート）
    Tagged(AnalysisReport),
    /// 簡易・プロンプト方式（本文のみ）
    Text { mode: AnalyzeMode, body: String },
}

/// 見出し付きの本文ブロック
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub heading: String,
    pub body: String,
}

impl TextBlock {
    fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
        }
    }
}

impl CliReport {
    pub fn title(&self) -> &'static str {
        match self {
            CliReport::Tagged(AnalysisReport::Standard(_)) => "큐모발검사 종합멘트 결과 (7단계 분석)",
            _ => "큐모발검사 종합멘트 결과",
        }
    }

    /// 旧形式は印刷スケールをそのまま文字サイズに掛ける
    pub fn font_scale(&self) -> f32 {
        match self {
            CliReport::Tagged(AnalysisReport::Legacy(result)) => legacy::print_scale(result).factor(),
            _ => 1.0,
        }
    }

    pub fn blocks(&self) -> Vec<TextBlock> {
        match self {
            CliReport::Tagged(AnalysisReport::Legacy(result)) => vec![
                TextBlock::new(
                    "📋 개인정보",
                    html_to_text(&legacy::personal_info_html(&result.personal_info_section)),
                ),
                TextBlock::new("📋 요약 정보", result.summary_section.clone()),
                TextBlock::new("📊 종합 분석 결과", result.comprehensive_analysis.clone()),
            ],
            CliReport::Tagged(AnalysisReport::Standard(response)) => SectionId::ALL
                .iter()
                .map(|id| {
                    TextBlock::new(
                        format!("{} {}", id.icon(), id.title()),
                        id.content(response).to_string(),
                    )
                })
                .collect(),
            CliReport::Text { mode, body } => {
                vec![TextBlock::new(format!("분석 결과 ({})", mode), body.clone())]
            }
        }
    }
}

/// モード別のエンドポイントを呼ぶ
pub async fn fetch_report<A: AnalysisApi>(api: &A, input: &HairAnalysisInput, mode: AnalyzeMode) -> Result<CliReport> {
    if let Some(report_mode) = mode.report_mode() {
        return request_report(api, input, report_mode)
            .await
            .map(CliReport::Tagged)
            .map_err(HairReportError::Api);
    }

    let response = match mode {
        AnalyzeMode::PromptBased => api.analyze_prompt_based(input).await,
        _ => api.analyze_simple(input).await,
    };
    let response = response.map_err(HairReportError::from_api)?;
    Ok(CliReport::Text {
        mode,
        body: response.analysis_result,
    })
}

/// 表示用HTML → プレーンテキスト
pub fn html_to_text(html: &str) -> String {
    let text = BR_RE.replace_all(html, "\n");
    let text = BLOCK_END_RE.replace_all(&text, "\n");
    let text = TAG_RE.replace_all(&text, "");
    let text = text
        .replace("**", "")
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");
    BLANK_LINES_RE.replace_all(text.trim(), "\n\n").into_owned()
}

/// 端末・テキストファイル用
pub fn render_text(report: &CliReport) -> String {
    let mut out = String::new();
    out.push_str(report.title());
    out.push('\n');
    for block in report.blocks() {
        out.push('\n');
        out.push_str(&block.heading);
        out.push('\n');
        out.push_str(&"─".repeat(block.heading.chars().count().max(8)));
        out.push('\n');
        out.push_str(block.body.trim_end());
        out.push('\n');
    }
    out
}

/// `큐모발검사_종합멘트_<YYYY-MM-DD>`
pub fn file_stem(iso_date: &str) -> String {
    format!("{}_{}", PDF_FILE_PREFIX, iso_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hair_report_common::types::{
        ApiEnvelope, FullAnalysisResponse, HairAnalysisResult, HealthStatus, TextAnalysisResponse,
    };
    use hair_report_common::Error;

    /// 成功/失敗を切り替えられる偽API
    struct FakeApi {
        fail: bool,
    }

    impl AnalysisApi for FakeApi {
        async fn health_check(&self) -> hair_report_common::Result<HealthStatus> {
            Ok(HealthStatus::default())
        }

        async fn get_test_data(&self) -> hair_report_common::Result<HairAnalysisInput> {
            Ok(HairAnalysisInput::default())
        }

        async fn analyze(&self, _input: &HairAnalysisInput) -> hair_report_common::Result<ApiEnvelope<HairAnalysisResult>> {
            Ok(ApiEnvelope {
                success: !self.fail,
                message: String::new(),
                data: (!self.fail).then(HairAnalysisResult::default),
                errors: self.fail.then(|| vec!["나이 오류".to_string()]),
            })
        }

        async fn analyze_full(&self, _input: &HairAnalysisInput) -> hair_report_common::Result<FullAnalysisResponse> {
            Ok(FullAnalysisResponse::default())
        }

        async fn analyze_simple(&self, _input: &HairAnalysisInput) -> hair_report_common::Result<TextAnalysisResponse> {
            Ok(TextAnalysisResponse { analysis_result: "simple".into() })
        }

        async fn analyze_prompt_based(&self, _input: &HairAnalysisInput) -> hair_report_common::Result<TextAnalysisResponse> {
            if self.fail {
                return Err(Error::Http { status: 500, detail: Some("프롬프트 오류".into()) });
            }
            Ok(TextAnalysisResponse { analysis_result: "prompt".into() })
        }
    }

    #[tokio::test]
    async fn test_fetch_report_by_mode() {
        let api = FakeApi { fail: false };
        let input = HairAnalysisInput::default();

        let legacy = fetch_report(&api, &input, AnalyzeMode::Legacy).await.unwrap();
        assert!(matches!(legacy, CliReport::Tagged(AnalysisReport::Legacy(_))));

        let standard = fetch_report(&api, &input, AnalyzeMode::Standard).await.unwrap();
        assert!(matches!(standard, CliReport::Tagged(AnalysisReport::Standard(_))));

        let prompt = fetch_report(&api, &input, AnalyzeMode::PromptBased).await.unwrap();
        assert_eq!(
            prompt,
            CliReport::Text { mode: AnalyzeMode::PromptBased, body: "prompt".into() }
        );
    }

    #[tokio::test]
    async fn test_fetch_report_failures() {
        let api = FakeApi { fail: true };
        let input = HairAnalysisInput::default();

        let err = fetch_report(&api, &input, AnalyzeMode::Legacy).await.unwrap_err();
        assert_eq!(err.to_string(), "나이 오류");

        let err = fetch_report(&api, &input, AnalyzeMode::PromptBased).await.unwrap_err();
        assert_eq!(err.to_string(), "프롬프트 오류");
    }

    #[test]
    fn test_html_to_text() {
        let html = r#"<h1 class="result-title">결과</h1><div class="letter-section">안녕하세요.<br>**응원합니다!**</div>"#;
        assert_eq!(html_to_text(html), "결과\n안녕하세요.\n응원합니다!");
    }

    #[test]
    fn test_legacy_blocks_and_scale() {
        let report = CliReport::Tagged(AnalysisReport::Legacy(HairAnalysisResult {
            personal_info_section: "<h1>홍길동님</h1>".into(),
            summary_section: "요약".into(),
            comprehensive_analysis: "종합".into(),
            ..Default::default()
        }));

        let blocks = report.blocks();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].body, "홍길동님");
        assert_eq!(blocks[2].body, "종합");
        // 1000字未満 → small
        assert_eq!(report.font_scale(), 1.15);
    }

    #[test]
    fn test_standard_blocks_follow_section_order() {
        let report = CliReport::Tagged(AnalysisReport::Standard(FullAnalysisResponse {
            compressed_version: "압축".into(),
            ..Default::default()
        }));
        let blocks = report.blocks();
        assert_eq!(blocks.len(), 6);
        assert!(blocks[0].heading.contains("1. 개인정보 섹션"));
        assert_eq!(blocks[5].body, "압축");
        assert_eq!(report.font_scale(), 1.0);
    }

    #[test]
    fn test_render_text() {
        let report = CliReport::Text {
            mode: AnalyzeMode::Simple,
            body: "본문\n".into(),
        };
        let text = render_text(&report);
        assert!(text.starts_with("큐모발검사 종합멘트 결과\n"));
        assert!(text.contains("분석 결과 (simple)\n"));
        assert!(text.ends_with("본문\n"));
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("2025-06-01"), "큐모발검사_종합멘트_2025-06-01");
    }
}
