//! 旧形式レポートの表示用変換
//!
//! - 内容量に応じた印刷スケール
//! - `**太字**` → `<strong>`
//! - 挨拶文まわりの改行・ラップ（見た目のみ。元データは変更しない）

use crate::types::HairAnalysisResult;
use regex::Regex;

/// PDF出力対象の要素ID
pub const PDF_TARGET_ID: &str = "pdf-content";

/// PDFファイル名の接頭辞
pub const PDF_FILE_PREFIX: &str = "큐모발검사_종합멘트";

lazy_static::lazy_static! {
    static ref BOLD_RE: Regex = Regex::new(r"\*\*(.*?)\*\*").unwrap();
    static ref EXPERT_INTRO_RE: Regex = Regex::new(r"(큐모발검사 영양전문가입니다\.)\s*").unwrap();
    static ref CONSULT_RE: Regex = Regex::new(r"(맞춤 영양상담지를 작성하였으니,)\s*").unwrap();
    static ref H1_RE: Regex = Regex::new(r"<h1>").unwrap();
    static ref LETTER_RE: Regex = Regex::new(r"(안녕하세요[\s\S]*?응원합니다!)").unwrap();
    static ref CHEER_RE: Regex = Regex::new(r"(더 건강해질.*?님을 응원합니다!)").unwrap();
}

/// 印刷スケール
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintScale {
    Small,
    Normal,
    Medium,
    Large,
}

impl PrintScale {
    /// 合計文字数からスケールを決める
    pub fn for_length(total_chars: usize) -> Self {
        if total_chars > 2500 {
            PrintScale::Large
        } else if total_chars > 2000 {
            PrintScale::Medium
        } else if total_chars < 1000 {
            PrintScale::Small
        } else {
            PrintScale::Normal
        }
    }

    pub fn factor(self) -> f32 {
        match self {
            PrintScale::Small => 1.15,
            PrintScale::Normal => 1.0,
            PrintScale::Medium => 0.92,
            PrintScale::Large => 0.85,
        }
    }

    /// `data-content-scale` 属性値
    pub fn class(self) -> &'static str {
        match self {
            PrintScale::Small => "small",
            PrintScale::Normal => "normal",
            PrintScale::Medium => "medium",
            PrintScale::Large => "large",
        }
    }

    pub fn css_transform(self) -> String {
        format!("transform: scale({}); transform-origin: top center;", self.factor())
    }
}

/// 印刷スケール算出に使う3ブロックの合計文字数
pub fn printable_length(result: &HairAnalysisResult) -> usize {
    [
        &result.personal_info_section,
        &result.summary_section,
        &result.comprehensive_analysis,
    ]
    .iter()
    .map(|text| text.chars().count())
    .sum()
}

pub fn print_scale(result: &HairAnalysisResult) -> PrintScale {
    PrintScale::for_length(printable_length(result))
}

/// `**text**` を `<strong>text</strong>` に変換
pub fn bold_markup_to_html(text: &str) -> String {
    BOLD_RE.replace_all(text, "<strong>$1</strong>").into_owned()
}

/// 個人情報セクションの挨拶文レイアウト
pub fn format_personal_info(html: &str) -> String {
    let formatted = EXPERT_INTRO_RE.replace_all(html, "$1<br>");
    let formatted = CONSULT_RE.replace_all(&formatted, "$1 ");
    let formatted = H1_RE.replace_all(&formatted, r#"<h1 class="result-title">"#);
    let formatted = LETTER_RE.replace(&formatted, r#"<div class="letter-section">$1</div>"#);
    let formatted = CHEER_RE.replace(&formatted, "<strong>$1</strong>");
    formatted.into_owned()
}

/// 個人情報セクションの表示用HTML
pub fn personal_info_html(section: &str) -> String {
    format_personal_info(&bold_markup_to_html(section))
}

/// コピー用の総合分析テキスト
pub fn clipboard_text(result: &HairAnalysisResult) -> &str {
    &result.comprehensive_analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_total(chars: usize) -> HairAnalysisResult {
        let third = chars / 3;
        HairAnalysisResult {
            personal_info_section: "가".repeat(third),
            summary_section: "나".repeat(third),
            comprehensive_analysis: "다".repeat(chars - third * 2),
            ..Default::default()
        }
    }

    #[test]
    fn test_scale_thresholds() {
        assert_eq!(PrintScale::for_length(2600).factor(), 0.85);
        assert_eq!(PrintScale::for_length(1500).factor(), 1.0);
        assert_eq!(PrintScale::for_length(800).factor(), 1.15);
        assert_eq!(PrintScale::for_length(2200).factor(), 0.92);
    }

    #[test]
    fn test_scale_boundaries() {
        assert_eq!(PrintScale::for_length(2500), PrintScale::Medium);
        assert_eq!(PrintScale::for_length(2000), PrintScale::Normal);
        assert_eq!(PrintScale::for_length(1000), PrintScale::Normal);
        assert_eq!(PrintScale::for_length(999), PrintScale::Small);
    }

    #[test]
    fn test_scale_counts_characters_not_bytes() {
        let result = result_with_total(2600);
        assert_eq!(printable_length(&result), 2600);
        assert_eq!(print_scale(&result), PrintScale::Large);

        let result = result_with_total(800);
        assert_eq!(print_scale(&result).class(), "small");
    }

    #[test]
    fn test_scale_ignores_other_sections() {
        let mut result = result_with_total(1500);
        result.closing_remarks = "라".repeat(5000);
        assert_eq!(print_scale(&result), PrintScale::Normal);
    }

    #[test]
    fn test_bold_markup() {
        assert_eq!(
            bold_markup_to_html("수은 **높음** 및 **주의**"),
            "수은 <strong>높음</strong> 및 <strong>주의</strong>"
        );
        assert_eq!(bold_markup_to_html("별표 없음"), "별표 없음");
    }

    #[test]
    fn test_format_personal_info_layout() {
        let html = "<h1>홍길동님 결과</h1>안녕하세요. 큐모발검사 영양전문가입니다.   \
                    맞춤 영양상담지를 작성하였으니,\n꼼꼼히 읽어보시길 바랍니다. \
                    더 건강해질 홍길동님을 응원합니다!";
        let formatted = format_personal_info(html);

        assert!(formatted.contains(r#"<h1 class="result-title">"#));
        assert!(formatted.contains("영양전문가입니다.<br>"));
        assert!(formatted.contains("작성하였으니, 꼼꼼히"));
        assert!(formatted.contains(r#"<div class="letter-section">안녕하세요"#));
        assert!(formatted.contains("<strong>더 건강해질 홍길동님을 응원합니다!</strong></div>"));
    }

    #[test]
    fn test_formatting_leaves_source_untouched() {
        let result = HairAnalysisResult {
            personal_info_section: "**중요** 안녕하세요 응원합니다!".to_string(),
            ..Default::default()
        };
        let html = personal_info_html(&result.personal_info_section);
        assert!(html.contains("<strong>중요</strong>"));
        assert_eq!(result.personal_info_section, "**중요** 안녕하세요 응원합니다!");
    }
}
