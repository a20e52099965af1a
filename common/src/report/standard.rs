//! 標準（7段階分析）レポートのセクション定義

use crate::types::FullAnalysisResponse;

/// 要約セクションに添える生成ルール
pub const SUMMARY_RULE_HEADER: &str = "🎯 이 섹션은 Note 5 규칙에 따라 생성되었습니다:";
pub const SUMMARY_RULE_ITEMS: [&str; 3] = [
    "정확히 5개 음식 추천",
    "종합 분석에서 언급된 영양제만 추천",
    "개인별 맞춤 재검사 기간 제시",
];

/// 圧縮版セクションの説明
pub const COMPRESSED_NOTE: &str =
    "💡 이 버전은 950-1000자로 압축된 요약 버전입니다. 간단한 설명이나 SMS 발송 시 활용하실 수 있습니다.";

/// セクション（宣言順 = 表示順 = 全体コピー順）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    PersonalInfo,
    Comprehensive,
    Statistics,
    Summary,
    Nutritionist,
    Compressed,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::PersonalInfo,
        SectionId::Comprehensive,
        SectionId::Statistics,
        SectionId::Summary,
        SectionId::Nutritionist,
        SectionId::Compressed,
    ];

    fn index(self) -> usize {
        match self {
            SectionId::PersonalInfo => 0,
            SectionId::Comprehensive => 1,
            SectionId::Statistics => 2,
            SectionId::Summary => 3,
            SectionId::Nutritionist => 4,
            SectionId::Compressed => 5,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SectionId::PersonalInfo => "personal_info",
            SectionId::Comprehensive => "comprehensive",
            SectionId::Statistics => "statistics",
            SectionId::Summary => "summary",
            SectionId::Nutritionist => "nutritionist",
            SectionId::Compressed => "compressed",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionId::PersonalInfo => "1. 개인정보 섹션",
            SectionId::Comprehensive => "2. 종합 분석",
            SectionId::Statistics => "3. 통계 분석",
            SectionId::Summary => "4. 종합 요약",
            SectionId::Nutritionist => "5. 영양사 요약",
            SectionId::Compressed => "6. 압축 버전 (950-1000자)",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SectionId::PersonalInfo => "📋",
            SectionId::Comprehensive => "🔬",
            SectionId::Statistics => "📊",
            SectionId::Summary => "📝",
            SectionId::Nutritionist => "👩‍⚕️",
            SectionId::Compressed => "📄",
        }
    }

    pub fn expanded_by_default(self) -> bool {
        matches!(
            self,
            SectionId::PersonalInfo | SectionId::Comprehensive | SectionId::Summary
        )
    }

    pub fn content(self, response: &FullAnalysisResponse) -> &str {
        match self {
            SectionId::PersonalInfo => &response.personal_info_section,
            SectionId::Comprehensive => &response.comprehensive_analysis,
            SectionId::Statistics => &response.statistics_analysis,
            SectionId::Summary => &response.summary_analysis,
            SectionId::Nutritionist => &response.nutritionist_summary,
            SectionId::Compressed => &response.compressed_version,
        }
    }
}

/// 各セクションの開閉状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionToggles {
    expanded: [bool; 6],
}

impl Default for SectionToggles {
    fn default() -> Self {
        Self {
            expanded: SectionId::ALL.map(SectionId::expanded_by_default),
        }
    }
}

impl SectionToggles {
    pub fn is_expanded(&self, id: SectionId) -> bool {
        self.expanded[id.index()]
    }

    pub fn toggle(&mut self, id: SectionId) {
        let slot = &mut self.expanded[id.index()];
        *slot = !*slot;
    }
}

/// 全セクションを宣言順に空行区切りで連結
pub fn copy_all_text(response: &FullAnalysisResponse) -> String {
    SectionId::ALL
        .iter()
        .map(|id| id.content(response))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// 表示用の文字数
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

pub fn char_count_label(text: &str) -> String {
    format!("현재 글자 수: {}자", char_count(text))
}
