//! 入力フォームの状態モデル
//!
//! - FormDraft: 画面が保持する1件の入力（HairAnalysisInput + 年齢の生文字列 + 特記事項の選択状態）
//! - 検証ルール（氏名・年齢）
//! - 特記事項の導出（チェックボックス + 自由記述 → 文字列）

use crate::report::ReportMode;
use crate::types::{Analyte, HairAnalysisInput, NO_SPECIAL_NOTES};
use std::collections::BTreeMap;
use std::fmt;
use std::num::IntErrorKind;

pub const MSG_NAME_REQUIRED: &str = "이름은 필수 입력 항목입니다.";
pub const MSG_NAME_TOO_SHORT: &str = "이름은 최소 2글자 이상이어야 합니다.";
pub const MSG_AGE_REQUIRED: &str = "나이는 필수 입력 항목입니다.";
pub const MSG_AGE_NOT_INTEGER: &str = "나이는 정수로 입력해주세요.";
pub const MSG_AGE_TOO_SMALL: &str = "나이는 1세 이상이어야 합니다.";
pub const MSG_AGE_TOO_LARGE: &str = "나이는 120세 이하여야 합니다.";

pub const NAME_MIN_CHARS: usize = 2;
pub const AGE_MIN: u32 = 1;
pub const AGE_MAX: u32 = 120;

// ============================================
// 検証エラー
// ============================================

/// 検証対象フィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Age,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "이름",
            FormField::Age => "나이",
        }
    }
}

/// フィールド単位のエラーメッセージ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|(_, msg)| msg)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", joined)
    }
}

/// 氏名の検証
pub fn validate_name(name: &str) -> Option<&'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Some(MSG_NAME_REQUIRED)
    } else if trimmed.chars().count() < NAME_MIN_CHARS {
        Some(MSG_NAME_TOO_SHORT)
    } else {
        None
    }
}

/// 年齢（入力欄の文字列）の検証
///
/// 成功時は数値を返す。
pub fn parse_age(text: &str) -> Result<u32, &'static str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(MSG_AGE_REQUIRED);
    }

    match trimmed.parse::<i64>() {
        Ok(value) => check_age_range(value),
        // 桁あふれは整数として範囲外扱い
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Err(MSG_AGE_TOO_LARGE),
            IntErrorKind::NegOverflow => Err(MSG_AGE_TOO_SMALL),
            _ => Err(MSG_AGE_NOT_INTEGER),
        },
    }
}

fn check_age_range(value: i64) -> Result<u32, &'static str> {
    if value < AGE_MIN as i64 {
        Err(MSG_AGE_TOO_SMALL)
    } else if value > AGE_MAX as i64 {
        Err(MSG_AGE_TOO_LARGE)
    } else {
        Ok(value as u32)
    }
}

/// ファイル等から読んだ入力をフォームと同じ形に揃える
///
/// 氏名は前後空白を除き、空の特記事項は "없음" にする。
pub fn normalize_input(mut input: HairAnalysisInput) -> HairAnalysisInput {
    let info = &mut input.personal_info;
    info.name = info.name.trim().to_string();
    let notes = info.special_notes.trim();
    info.special_notes = if notes.is_empty() {
        NO_SPECIAL_NOTES.to_string()
    } else {
        notes.to_string()
    };
    input
}

/// 完成済みの入力（JSONファイル等）を検証
pub fn validate_input(input: &HairAnalysisInput) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if let Some(msg) = validate_name(&input.personal_info.name) {
        errors.insert(FormField::Name, msg);
    }
    if let Err(msg) = check_age_range(input.personal_info.age as i64) {
        errors.insert(FormField::Age, msg);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// ============================================
// 特記事項
// ============================================

/// 特記事項のチェックボックス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialOption {
    Dye,
    Perm,
    Bleach,
}

impl SpecialOption {
    pub const ALL: [SpecialOption; 3] = [SpecialOption::Dye, SpecialOption::Perm, SpecialOption::Bleach];

    pub fn label(self) -> &'static str {
        match self {
            SpecialOption::Dye => "염색",
            SpecialOption::Perm => "파마",
            SpecialOption::Bleach => "탈색",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|opt| opt.label() == label)
    }
}

/// 選択済みオプションと自由記述から特記事項を組み立てる
///
/// 両方空なら "없음"。
pub fn derive_special_notes(selected: &[SpecialOption], custom: &str) -> String {
    let custom = custom.trim();
    let mut parts: Vec<&str> = selected.iter().map(|opt| opt.label()).collect();
    if !custom.is_empty() {
        parts.push(custom);
    }

    if parts.is_empty() {
        NO_SPECIAL_NOTES.to_string()
    } else {
        parts.join(", ")
    }
}

/// 特記事項の入力状態（選択順を保持）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialNotesDraft {
    pub selected: Vec<SpecialOption>,
    pub custom: String,
}

impl SpecialNotesDraft {
    pub fn is_selected(&self, option: SpecialOption) -> bool {
        self.selected.contains(&option)
    }

    pub fn toggle(&mut self, option: SpecialOption) {
        if let Some(pos) = self.selected.iter().position(|o| *o == option) {
            self.selected.remove(pos);
        } else {
            self.selected.push(option);
        }
    }

    pub fn derive(&self) -> String {
        derive_special_notes(&self.selected, &self.custom)
    }

    /// 保存済みの特記事項文字列を選択状態へ戻す
    ///
    /// 既知ラベルはチェックボックスに、それ以外は自由記述にまとめる。
    pub fn from_notes(notes: &str) -> Self {
        let mut draft = Self::default();
        let trimmed = notes.trim();
        if trimmed.is_empty() || trimmed == NO_SPECIAL_NOTES {
            return draft;
        }

        let mut rest = Vec::new();
        for part in trimmed.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match SpecialOption::from_label(part) {
                Some(opt) if !draft.is_selected(opt) => draft.selected.push(opt),
                _ => rest.push(part),
            }
        }
        draft.custom = rest.join(", ");
        draft
    }
}

// ============================================
// フォーム
// ============================================

/// フォームが保持する入力状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub input: HairAnalysisInput,
    /// 年齢欄の生文字列（初期値は空欄）
    pub age_text: String,
    pub notes: SpecialNotesDraft,
    pub mode: ReportMode,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.input.personal_info.name
    }

    pub fn special_notes(&self) -> &str {
        &self.input.personal_info.special_notes
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.input.personal_info.name = name.into();
    }

    pub fn set_age_text(&mut self, text: impl Into<String>) {
        self.age_text = text.into();
    }

    pub fn toggle_special(&mut self, option: SpecialOption) {
        self.notes.toggle(option);
        self.sync_special_notes();
    }

    pub fn set_custom_note(&mut self, text: impl Into<String>) {
        self.notes.custom = text.into();
        self.sync_special_notes();
    }

    fn sync_special_notes(&mut self) {
        self.input.personal_info.special_notes = self.notes.derive();
    }

    pub fn level<A: Analyte>(&self, analyte: A) -> A::Level {
        analyte.get(&self.input)
    }

    pub fn set_level<A: Analyte>(&mut self, analyte: A, level: A::Level) {
        analyte.set(&mut self.input, level);
    }

    /// テストデータ等で全項目を上書き（モードは維持）
    pub fn load(&mut self, input: HairAnalysisInput) {
        self.age_text = if input.personal_info.age == 0 {
            String::new()
        } else {
            input.personal_info.age.to_string()
        };
        self.notes = SpecialNotesDraft::from_notes(&input.personal_info.special_notes);
        self.input = input;
        self.sync_special_notes();
    }

    /// 初期値へ戻す（モードは維持）
    pub fn reset(&mut self) {
        let mode = self.mode;
        *self = Self { mode, ..Self::default() };
    }

    /// 送信前検証。成功時は送信用の入力を返す
    pub fn validate(&self) -> Result<HairAnalysisInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        if let Some(msg) = validate_name(self.name()) {
            errors.insert(FormField::Name, msg);
        }

        let age = match parse_age(&self.age_text) {
            Ok(age) => Some(age),
            Err(msg) => {
                errors.insert(FormField::Age, msg);
                None
            }
        };

        match age {
            Some(age) if errors.is_empty() => {
                let mut input = self.input.clone();
                input.personal_info.name = input.personal_info.name.trim().to_string();
                input.personal_info.age = age;
                input.personal_info.special_notes = self.notes.derive();
                Ok(input)
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HeavyMetal, MetalLevel, Mineral, TestLevel};

    fn filled_draft(name: &str, age: &str) -> FormDraft {
        let mut draft = FormDraft::new();
        draft.set_name(name);
        draft.set_age_text(age);
        draft
    }

    #[test]
    fn test_special_notes_option_and_text() {
        assert_eq!(derive_special_notes(&[SpecialOption::Dye], "비염"), "염색, 비염");
    }

    #[test]
    fn test_special_notes_empty() {
        assert_eq!(derive_special_notes(&[], ""), "없음");
        assert_eq!(derive_special_notes(&[], "   "), "없음");
    }

    #[test]
    fn test_special_notes_keeps_selection_order() {
        let notes = derive_special_notes(&[SpecialOption::Bleach, SpecialOption::Dye], "");
        assert_eq!(notes, "탈색, 염색");
    }

    #[test]
    fn test_draft_syncs_special_notes_on_every_change() {
        let mut draft = FormDraft::new();
        assert_eq!(draft.special_notes(), "없음");

        draft.toggle_special(SpecialOption::Perm);
        assert_eq!(draft.special_notes(), "파마");

        draft.set_custom_note("교사");
        assert_eq!(draft.special_notes(), "파마, 교사");

        draft.toggle_special(SpecialOption::Perm);
        assert_eq!(draft.special_notes(), "교사");

        draft.set_custom_note("");
        assert_eq!(draft.special_notes(), "없음");
    }

    #[test]
    fn test_valid_input_is_not_blocked() {
        for age in ["1", "45", "120"] {
            let draft = filled_draft("홍길동", age);
            let input = draft.validate().expect("검증 실패");
            assert_eq!(input.personal_info.age.to_string(), age);
            assert_eq!(input.personal_info.special_notes, "없음");
        }
    }

    #[test]
    fn test_two_char_name_is_valid() {
        assert!(filled_draft("이순", "30").validate().is_ok());
    }

    #[test]
    fn test_short_name_blocked() {
        let errors = filled_draft("홍", "30").validate().unwrap_err();
        assert_eq!(errors.get(FormField::Name), Some(MSG_NAME_TOO_SHORT));
        assert!(errors.get(FormField::Age).is_none());
    }

    #[test]
    fn test_blank_name_blocked() {
        let errors = filled_draft("   ", "30").validate().unwrap_err();
        assert_eq!(errors.get(FormField::Name), Some(MSG_NAME_REQUIRED));
    }

    #[test]
    fn test_age_out_of_range_blocked() {
        let cases = [
            ("0", MSG_AGE_TOO_SMALL),
            ("-5", MSG_AGE_TOO_SMALL),
            ("121", MSG_AGE_TOO_LARGE),
            ("", MSG_AGE_REQUIRED),
            ("30.5", MSG_AGE_NOT_INTEGER),
            ("서른", MSG_AGE_NOT_INTEGER),
        ];

        for (age, expected) in cases {
            let errors = filled_draft("홍길동", age).validate().unwrap_err();
            assert_eq!(errors.get(FormField::Age), Some(expected), "age={:?}", age);
        }
    }

    #[test]
    fn test_huge_age_is_out_of_range() {
        assert_eq!(parse_age("99999999999999999999"), Err(MSG_AGE_TOO_LARGE));
        assert_eq!(parse_age("-99999999999999999999"), Err(MSG_AGE_TOO_SMALL));
        assert_eq!(parse_age("9999999999999999999x"), Err(MSG_AGE_NOT_INTEGER));
    }

    #[test]
    fn test_normalize_blank_special_notes() {
        for notes in ["", "   "] {
            let mut input = HairAnalysisInput::default();
            input.personal_info.name = " 홍길동 ".to_string();
            input.personal_info.age = 30;
            input.personal_info.special_notes = notes.to_string();

            let input = normalize_input(input);
            assert_eq!(input.personal_info.special_notes, "없음");
            assert_eq!(input.personal_info.name, "홍길동");
            assert!(validate_input(&input).is_ok());
        }
    }

    #[test]
    fn test_normalize_keeps_notes() {
        let mut input = HairAnalysisInput::default();
        input.personal_info.special_notes = " 염색, 비염 ".to_string();
        assert_eq!(normalize_input(input).personal_info.special_notes, "염색, 비염");
    }

    #[test]
    fn test_both_fields_reported() {
        let errors = filled_draft("", "200").validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_levels_round_trip_through_draft() {
        let mut draft = filled_draft("홍길동", "40");
        draft.set_level(HeavyMetal::Lead, MetalLevel::High);
        draft.set_level(Mineral::Iron, TestLevel::Low);

        let input = draft.validate().unwrap();
        assert_eq!(input.heavy_metals.lead, MetalLevel::High);
        assert_eq!(input.nutritional_minerals.iron, TestLevel::Low);
        assert_eq!(draft.level(HeavyMetal::Mercury), MetalLevel::Normal);
    }

    #[test]
    fn test_load_overwrites_and_splits_notes() {
        let mut loaded = HairAnalysisInput::default();
        loaded.personal_info.name = "김영희".to_string();
        loaded.personal_info.age = 52;
        loaded.personal_info.special_notes = "염색, 탈색, 고혈압".to_string();
        loaded.heavy_metals.mercury = MetalLevel::High;

        let mut draft = filled_draft("홍길동", "30");
        draft.mode = ReportMode::Standard;
        draft.load(loaded);

        assert_eq!(draft.name(), "김영희");
        assert_eq!(draft.age_text, "52");
        assert_eq!(draft.notes.selected, vec![SpecialOption::Dye, SpecialOption::Bleach]);
        assert_eq!(draft.notes.custom, "고혈압");
        assert_eq!(draft.special_notes(), "염색, 탈색, 고혈압");
        assert_eq!(draft.level(HeavyMetal::Mercury), MetalLevel::High);
        assert_eq!(draft.mode, ReportMode::Standard);
    }

    #[test]
    fn test_reset_restores_defaults_but_keeps_mode() {
        let mut draft = filled_draft("홍길동", "30");
        draft.toggle_special(SpecialOption::Dye);
        draft.set_level(Mineral::Zinc, TestLevel::High);
        draft.mode = ReportMode::Standard;

        draft.reset();

        assert_eq!(draft.name(), "");
        assert_eq!(draft.age_text, "");
        assert_eq!(draft.special_notes(), "없음");
        assert_eq!(draft.level(Mineral::Zinc), TestLevel::Normal);
        assert_eq!(draft.mode, ReportMode::Standard);
    }

    #[test]
    fn test_validate_input_for_files() {
        let mut input = HairAnalysisInput::default();
        input.personal_info.name = "홍길동".to_string();
        input.personal_info.age = 0;

        let errors = validate_input(&input).unwrap_err();
        assert_eq!(errors.get(FormField::Age), Some(MSG_AGE_TOO_SMALL));

        input.personal_info.age = 33;
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn test_from_notes_none_value() {
        let draft = SpecialNotesDraft::from_notes("없음");
        assert!(draft.selected.is_empty());
        assert!(draft.custom.is_empty());
    }
}
