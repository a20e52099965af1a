//! エラーケーステスト
//!
//! 入力ファイル・設定・エラー表示の異常系を検証

use hair_report_common::form::{FieldErrors, FormField, MSG_NAME_REQUIRED};
use hair_report_common::Error;
use hair_report_rust::config::Config;
use hair_report_rust::error::HairReportError;
use hair_report_rust::input;
use std::path::Path;
use tempfile::tempdir;

/// 存在しない入力ファイル
#[test]
fn test_load_nonexistent_input() {
    let result = input::load_input(Path::new("/nonexistent/path/12345.json"));
    assert!(matches!(result.unwrap_err(), HairReportError::FileNotFound(_)));
}

/// 判定値が不正なJSON
#[test]
fn test_load_input_with_unknown_level() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("input.json");
    std::fs::write(
        &path,
        r#"{"personal_info":{"name":"홍길동","age":30},
            "heavy_metals":{"mercury":"매우높음"},
            "nutritional_minerals":{},
            "health_indicators":{}}"#,
    )
    .unwrap();

    assert!(matches!(
        input::load_input(&path).unwrap_err(),
        HairReportError::InvalidInput(_)
    ));
}

/// HairReportErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        HairReportError::Config("テスト設定エラー".to_string()),
        HairReportError::FileNotFound("input.json".to_string()),
        HairReportError::InvalidInput("broken".to_string()),
        HairReportError::Api("서버 오류".to_string()),
        HairReportError::MissingFont,
        HairReportError::PdfGeneration("PDF生成失敗".to_string()),
        HairReportError::Prompt("interrupted".to_string()),
    ];

    for err in errors {
        assert!(!err.to_string().is_empty());
    }
}

/// 検証エラーはフィールドのメッセージを含む
#[test]
fn test_validation_error_display() {
    let mut errors = FieldErrors::new();
    errors.insert(FormField::Name, MSG_NAME_REQUIRED);
    let err = HairReportError::Validation(errors);
    assert!(err.to_string().contains(MSG_NAME_REQUIRED));
}

/// API失敗は最も具体的なメッセージになる
#[test]
fn test_api_error_messages() {
    let err = HairReportError::from_api(Error::Http {
        status: 422,
        detail: Some("나이는 1세 이상이어야 합니다.".into()),
    });
    assert_eq!(err.to_string(), "나이는 1세 이상이어야 합니다.");

    let err = HairReportError::from_api(Error::Transport(String::new()));
    assert_eq!(err.to_string(), "서버와의 연결에 실패했습니다.");

    let err = HairReportError::from_api(Error::Http { status: 502, detail: None });
    assert_eq!(err.to_string(), "Request failed with status code 502");
}

/// 壊れた設定ファイル
#[test]
fn test_broken_config_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        Config::load_from(&path).unwrap_err(),
        HairReportError::JsonParse(_)
    ));
}

/// フォント未設定
#[test]
fn test_font_not_configured() {
    let config = Config::default();
    assert!(matches!(
        config.font_for_pdf(None).unwrap_err(),
        HairReportError::MissingFont
    ));
}
