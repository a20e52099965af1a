use clap::Parser;
use hair_report_common::api::AnalysisApi;
use hair_report_common::form::validate_input;
use hair_report_rust::{cli, client, config, error, export, input, logging, report};
use cli::{Cli, Commands};
use config::Config;
use error::{HairReportError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::info;

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    let base_url = config.resolve_base_url(cli.base_url.as_deref());
    info!(base_url = %base_url, "resolved API base URL");

    match cli.command {
        Commands::Health => {
            let client = client::HttpClient::new(base_url, config.timeout_seconds)?;
            let status = client.health_check().await.map_err(HairReportError::from_api)?;
            println!("✔ {} ({})", status.status, client.base_url());
            if !status.message.is_empty() {
                println!("  {}", status.message);
            }
        }

        Commands::TestData { output } => {
            let client = client::HttpClient::new(base_url, config.timeout_seconds)?;
            let data = client.get_test_data().await.map_err(HairReportError::from_api)?;
            match output {
                Some(path) => {
                    input::save_input(&data, &path)?;
                    println!("✔ テストデータを保存: {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&data)?),
            }
        }

        Commands::Input { output } => {
            println!("🧾 hair-report - 검사 결과 입력\n");
            input::run_interactive_input(&output)?;
        }

        Commands::Validate { input: path } => {
            let data = input::load_input(&path)?;
            match validate_input(&data) {
                Ok(()) => println!("✔ 입력값이 올바릅니다: {}", path.display()),
                Err(errors) => {
                    for (field, message) in errors.iter() {
                        println!("✘ {}: {}", field.label(), message);
                    }
                    return Err(HairReportError::Validation(errors));
                }
            }
        }

        Commands::Analyze { input: path, mode, output, format, font } => {
            println!("🧪 hair-report - 종합멘트 생성 ({})\n", mode);

            let data = input::load_input(&path)?;
            validate_input(&data).map_err(HairReportError::Validation)?;

            // PDFが必要ならAPI呼び出し前にフォントを確認
            let font_path = match output {
                Some(_) if format.wants_pdf() => Some(config.font_for_pdf(font.as_deref())?),
                _ => None,
            };

            let client = client::HttpClient::new(base_url, config.timeout_seconds)?;
            let pb = spinner("분석 중...");
            let result = report::fetch_report(&client, &data, mode).await;
            pb.finish_and_clear();
            let rendered = result?;

            println!("{}", report::render_text(&rendered));

            if let Some(output) = output {
                let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
                let stem = report::file_stem(&today);
                info!(format = ?format, scale = rendered.font_scale(), "exporting report");
                export::export_report(&rendered, format, &output, &stem, font_path.as_deref())?;
            }

            println!("\n✅ 完了");
        }

        Commands::Config { set_base_url, set_font, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ ベースURLを設定しました");
            }

            if let Some(path) = set_font {
                config.set_font(path)?;
                println!("✔ PDFフォントを設定しました");
            }

            if show {
                println!("設定:");
                println!("  ベースURL: {}", base_url);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!(
                    "  PDFフォント: {}",
                    config
                        .font_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".to_string())
                );
            }
        }
    }

    Ok(())
}
