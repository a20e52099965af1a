//! 対話式の検査結果入力
//!
//! Webフォームと同じ `FormDraft` を埋めて検証し、JSONとして保存する。

use crate::error::{HairReportError, Result};
use dialoguer::{Input, MultiSelect, Select};
use hair_report_common::form::{normalize_input, parse_age, validate_name, FormDraft, SpecialOption};
use hair_report_common::types::{Analyte, HealthIndicator, HeavyMetal, Level, Mineral};
use hair_report_common::HairAnalysisInput;
use std::path::Path;

fn prompt_error(e: dialoguer::Error) -> HairReportError {
    HairReportError::Prompt(e.to_string())
}

/// 対話入力してJSONを保存
pub fn run_interactive_input(output: &Path) -> Result<HairAnalysisInput> {
    let mut draft = FormDraft::new();

    println!("👤 개인정보");
    prompt_personal_info(&mut draft)?;
    prompt_special_notes(&mut draft)?;

    println!("\n🧪 검사 결과 (Enter: 정상)");
    prompt_group::<HeavyMetal>(&mut draft)?;
    prompt_group::<Mineral>(&mut draft)?;
    prompt_group::<HealthIndicator>(&mut draft)?;

    let input = draft.validate().map_err(HairReportError::Validation)?;
    save_input(&input, output)?;

    println!("\n✓ 保存しました: {}", output.display());
    Ok(input)
}

fn prompt_personal_info(draft: &mut FormDraft) -> Result<()> {
    let name: String = Input::new()
        .with_prompt("이름")
        .validate_with(|text: &String| match validate_name(text) {
            Some(msg) => Err(msg),
            None => Ok(()),
        })
        .interact_text()
        .map_err(prompt_error)?;
    draft.set_name(name.trim());

    let age: String = Input::new()
        .with_prompt("나이")
        .validate_with(|text: &String| parse_age(text).map(|_| ()))
        .interact_text()
        .map_err(prompt_error)?;
    draft.set_age_text(age);

    Ok(())
}

fn prompt_special_notes(draft: &mut FormDraft) -> Result<()> {
    let labels: Vec<&str> = SpecialOption::ALL.iter().map(|opt| opt.label()).collect();
    let picked = MultiSelect::new()
        .with_prompt("특이사항 (Space: 선택, Enter: 확정)")
        .items(&labels)
        .interact()
        .map_err(prompt_error)?;

    for index in picked {
        if let Some(option) = SpecialOption::ALL.get(index) {
            draft.toggle_special(*option);
        }
    }

    let custom: String = Input::new()
        .with_prompt("기타 특이사항")
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;
    draft.set_custom_note(custom);

    Ok(())
}

/// 1グループ分の判定値を選ばせる
fn prompt_group<A: Analyte>(draft: &mut FormDraft) -> Result<()> {
    println!("\n{}", A::GROUP_TITLE);
    let labels: Vec<&str> = A::Level::ALL.iter().map(|level| level.as_str()).collect();

    for &analyte in A::ALL {
        let current = draft.level(analyte);
        let selected = Select::new()
            .with_prompt(analyte.label())
            .items(&labels)
            .default(default_index(current))
            .interact()
            .map_err(prompt_error)?;

        if let Some(level) = A::Level::ALL.get(selected) {
            draft.set_level(analyte, *level);
        }
    }

    Ok(())
}

fn default_index<L: Level>(level: L) -> usize {
    L::ALL.iter().position(|l| *l == level).unwrap_or(0)
}

/// 入力JSONを保存
pub fn save_input(input: &HairAnalysisInput, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(input)?;
    std::fs::write(output, json)?;
    Ok(())
}

/// 入力JSONを読み込む（空の特記事項は "없음" に揃える）
pub fn load_input(path: &Path) -> Result<HairAnalysisInput> {
    if !path.exists() {
        return Err(HairReportError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let input: HairAnalysisInput =
        serde_json::from_str(&content).map_err(|e| HairReportError::InvalidInput(e.to_string()))?;
    Ok(normalize_input(input))
}
