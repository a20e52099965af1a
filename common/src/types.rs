//! 検査データとレスポンスの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - HairAnalysisInput: 送信ペイロード（4グループ）
//! - FullAnalysisResponse: 標準（6セクション）レスポンス
//! - HairAnalysisResult: 旧形式レスポンス
//! - ApiEnvelope: `/simple/analyze` の包み

use serde::{Deserialize, Serialize};
use std::fmt;

/// 特記事項が空のときの値
pub const NO_SPECIAL_NOTES: &str = "없음";

fn default_special_notes() -> String {
    NO_SPECIAL_NOTES.to_string()
}

// ============================================
// 判定値
// ============================================

/// 判定値（列挙値）の共通インターフェース
pub trait Level: Copy + Eq + Default + fmt::Debug + Send + Sync + 'static {
    /// 画面に並べる順序
    const ALL: &'static [Self];

    /// ワイヤ上の値（"정상" など）
    fn as_str(self) -> &'static str;

    /// 表示色クラス
    fn tone(self) -> &'static str;
}

/// 重金属の判定（정상/높음）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MetalLevel {
    #[default]
    #[serde(rename = "정상")]
    Normal,
    #[serde(rename = "높음")]
    High,
}

impl Level for MetalLevel {
    const ALL: &'static [Self] = &[MetalLevel::Normal, MetalLevel::High];

    fn as_str(self) -> &'static str {
        match self {
            MetalLevel::Normal => "정상",
            MetalLevel::High => "높음",
        }
    }

    fn tone(self) -> &'static str {
        match self {
            MetalLevel::Normal => "tone-normal",
            MetalLevel::High => "tone-high",
        }
    }
}

/// ミネラル・健康指標の判定（낮음/정상/높음）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TestLevel {
    #[serde(rename = "낮음")]
    Low,
    #[default]
    #[serde(rename = "정상")]
    Normal,
    #[serde(rename = "높음")]
    High,
}

impl Level for TestLevel {
    const ALL: &'static [Self] = &[TestLevel::Low, TestLevel::Normal, TestLevel::High];

    fn as_str(self) -> &'static str {
        match self {
            TestLevel::Low => "낮음",
            TestLevel::Normal => "정상",
            TestLevel::High => "높음",
        }
    }

    fn tone(self) -> &'static str {
        match self {
            TestLevel::Low => "tone-low",
            TestLevel::Normal => "tone-normal",
            TestLevel::High => "tone-high",
        }
    }
}

// ============================================
// 検査項目
// ============================================

/// 検査項目（重金属・ミネラル・健康指標）の共通インターフェース
pub trait Analyte: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    type Level: Level;

    /// フォームの表示順
    const ALL: &'static [Self];

    /// グループ見出し
    const GROUP_TITLE: &'static str;

    /// JSONキー
    fn key(self) -> &'static str;

    /// 韓国語ラベル
    fn label(self) -> &'static str;

    fn get(self, input: &HairAnalysisInput) -> Self::Level;

    fn set(self, input: &mut HairAnalysisInput, level: Self::Level);
}

/// グループ構造体・項目列挙・Analyte実装をまとめて生成
macro_rules! analyte_group {
    (
        $(#[$meta:meta])*
        $group:ident, $analyte:ident, $level:ty, $field:ident, $title:literal {
            $( $variant:ident => $name:ident : $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $group {
            $( pub $name: $level, )+
        }

        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $analyte {
            $( $variant, )+
        }

        impl Analyte for $analyte {
            type Level = $level;

            const ALL: &'static [Self] = &[ $( $analyte::$variant, )+ ];

            const GROUP_TITLE: &'static str = $title;

            fn key(self) -> &'static str {
                match self {
                    $( $analyte::$variant => stringify!($name), )+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $( $analyte::$variant => $label, )+
                }
            }

            fn get(self, input: &HairAnalysisInput) -> $level {
                match self {
                    $( $analyte::$variant => input.$field.$name, )+
                }
            }

            fn set(self, input: &mut HairAnalysisInput, level: $level) {
                match self {
                    $( $analyte::$variant => input.$field.$name = level, )+
                }
            }
        }
    };
}

analyte_group! {
    /// 重金属（9種）
    HeavyMetals, HeavyMetal, MetalLevel, heavy_metals, "중금속 검사 결과 (9종)" {
        Mercury => mercury: "수은",
        Arsenic => arsenic: "비소",
        Cadmium => cadmium: "카드뮴",
        Lead => lead: "납",
        Aluminum => aluminum: "알루미늄",
        Barium => barium: "바륨",
        Nickel => nickel: "니켈",
        Uranium => uranium: "우라늄",
        Bismuth => bismuth: "비스무트",
    }
}

analyte_group! {
    /// 栄養ミネラル（11種）
    NutritionalMinerals, Mineral, TestLevel, nutritional_minerals, "영양 미네랄 검사 결과 (11종)" {
        Calcium => calcium: "칼슘",
        Magnesium => magnesium: "마그네슘",
        Sodium => sodium: "나트륨",
        Potassium => potassium: "칼륨",
        Copper => copper: "구리",
        Zinc => zinc: "아연",
        Phosphorus => phosphorus: "인",
        Iron => iron: "철",
        Manganese => manganese: "망간",
        Chromium => chromium: "크롬",
        Selenium => selenium: "셀레늄",
    }
}

analyte_group! {
    /// 健康状態指標（6種）
    HealthIndicators, HealthIndicator, TestLevel, health_indicators, "건강 상태 지표 (6종)" {
        InsulinSensitivity => insulin_sensitivity: "인슐린 민감도",
        AutonomicNervousSystem => autonomic_nervous_system: "자율신경계",
        StressState => stress_state: "스트레스 상태",
        ImmuneSkinHealth => immune_skin_health: "면역 및 피부 건강",
        AdrenalActivity => adrenal_activity: "부신 활성도",
        ThyroidActivity => thyroid_activity: "갑상선 활성도",
    }
}

// ============================================
// 入力
// ============================================

/// 個人情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub age: u32,
    #[serde(default = "default_special_notes")]
    pub special_notes: String,
}

impl Default for PersonalInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 0,
            special_notes: default_special_notes(),
        }
    }
}

/// 送信ペイロード
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HairAnalysisInput {
    pub personal_info: PersonalInfo,
    pub heavy_metals: HeavyMetals,
    pub nutritional_minerals: NutritionalMinerals,
    pub health_indicators: HealthIndicators,
}

// ============================================
// レスポンス
// ============================================

/// 標準（7段階）解析レスポンス
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullAnalysisResponse {
    pub personal_info_section: String,
    pub comprehensive_analysis: String,
    pub statistics_analysis: String,
    pub summary_analysis: String,
    pub nutritionist_summary: String,
    pub compressed_version: String,
}

/// 旧形式の解析結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HairAnalysisResult {
    pub personal_info_section: String,
    pub summary_section: String,
    pub comprehensive_analysis: String,
    pub nutritional_recommendations: String,
    pub lifestyle_recommendations: String,
    pub additional_test_recommendations: String,
    pub precautions: String,
    pub closing_remarks: String,
}

/// `/simple/analyze` のレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

/// `/health` のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

/// 簡易・プロンプト方式解析のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnalysisResponse {
    pub analysis_result: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_default_is_all_normal() {
        let input = HairAnalysisInput::default();
        assert_eq!(input.personal_info.special_notes, "없음");
        assert!(HeavyMetal::ALL.iter().all(|m| m.get(&input) == MetalLevel::Normal));
        assert!(Mineral::ALL.iter().all(|m| m.get(&input) == TestLevel::Normal));
        assert!(HealthIndicator::ALL.iter().all(|h| h.get(&input) == TestLevel::Normal));
    }

    #[test]
    fn test_group_sizes() {
        assert_eq!(HeavyMetal::ALL.len(), 9);
        assert_eq!(Mineral::ALL.len(), 11);
        assert_eq!(HealthIndicator::ALL.len(), 6);
    }

    #[test]
    fn test_input_serialize_uses_korean_values() {
        let mut input = HairAnalysisInput::default();
        HeavyMetal::Mercury.set(&mut input, MetalLevel::High);
        Mineral::Zinc.set(&mut input, TestLevel::Low);

        let json = serde_json::to_string(&input).expect("직렬화 실패");
        assert!(json.contains("\"mercury\":\"높음\""));
        assert!(json.contains("\"zinc\":\"낮음\""));
        assert!(json.contains("\"thyroid_activity\":\"정상\""));
    }

    #[test]
    fn test_input_rejects_unknown_level() {
        let mut value = serde_json::to_value(HairAnalysisInput::default()).unwrap();
        value["heavy_metals"]["lead"] = serde_json::json!("낮음");
        let parsed = serde_json::from_value::<HairAnalysisInput>(value);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_input_rejects_missing_field() {
        let mut value = serde_json::to_value(HairAnalysisInput::default()).unwrap();
        value["nutritional_minerals"]
            .as_object_mut()
            .unwrap()
            .remove("selenium");
        assert!(serde_json::from_value::<HairAnalysisInput>(value).is_err());
    }

    #[test]
    fn test_special_notes_default_on_deserialize() {
        let json = r#"{"name": "홍길동", "age": 30}"#;
        let info: PersonalInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.special_notes, "없음");
    }

    #[test]
    fn test_analyte_keys_match_serialized_fields() {
        let value = serde_json::to_value(HairAnalysisInput::default()).unwrap();
        for metal in HeavyMetal::ALL {
            assert!(value["heavy_metals"].get(metal.key()).is_some(), "{:?}", metal);
        }
        for mineral in Mineral::ALL {
            assert!(value["nutritional_minerals"].get(mineral.key()).is_some(), "{:?}", mineral);
        }
        for indicator in HealthIndicator::ALL {
            assert!(value["health_indicators"].get(indicator.key()).is_some(), "{:?}", indicator);
        }
    }

    #[test]
    fn test_envelope_deserialize_failure() {
        let json = r#"{"success": false, "message": "실패", "errors": ["A", "B"]}"#;
        let envelope: ApiEnvelope<HairAnalysisResult> = serde_json::from_str(json).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.errors, Some(vec!["A".to_string(), "B".to_string()]));
    }

    #[test]
    fn test_full_response_missing_fields_default_to_empty() {
        let json = r#"{"personal_info_section": "안녕하세요"}"#;
        let response: FullAnalysisResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.personal_info_section, "안녕하세요");
        assert!(response.compressed_version.is_empty());
    }
}
