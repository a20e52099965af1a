pub mod pdf;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::report::{render_text, CliReport};
use std::path::{Path, PathBuf};

fn output_path_for_format(output: &Path, stem: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", stem, extension))
    } else {
        output.to_path_buf()
    }
}

/// `both` 時は同じ名前で拡張子違い
fn output_paths_for_both(output: &Path, stem: &str) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        (
            output.join(format!("{}.txt", stem)),
            output.join(format!("{}.pdf", stem)),
        )
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output.file_stem().and_then(|s| s.to_str()).unwrap_or(stem);
        (
            parent.join(format!("{}.txt", stem)),
            parent.join(format!("{}.pdf", stem)),
        )
    }
}

/// 出力先の決定
pub fn resolve_output_paths(output: &Path, stem: &str, format: OutputFormat) -> (Option<PathBuf>, Option<PathBuf>) {
    match format {
        OutputFormat::Text => (Some(output_path_for_format(output, stem, "txt")), None),
        OutputFormat::Pdf => (None, Some(output_path_for_format(output, stem, "pdf"))),
        OutputFormat::Both => {
            let (text, pdf) = output_paths_for_both(output, stem);
            (Some(text), Some(pdf))
        }
    }
}

pub fn write_text(report: &CliReport, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, render_text(report))?;
    Ok(())
}

/// レポートをファイルへ書き出す
///
/// PDFはフォントが必要。テキストを先に書くので、フォント不足でもテキストは残る。
pub fn export_report(
    report: &CliReport,
    format: OutputFormat,
    output: &Path,
    stem: &str,
    font: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    let (text_path, pdf_path) = resolve_output_paths(output, stem, format);
    let mut written = Vec::new();

    if let Some(path) = text_path {
        write_text(report, &path)?;
        println!("✔ テキスト出力: {}", path.display());
        written.push(path);
    }

    if let Some(path) = pdf_path {
        let font = font.ok_or(crate::error::HairReportError::MissingFont)?;
        println!("- PDFを生成中...");
        let pages = pdf::generate_pdf(report.title(), &report.blocks(), font, report.font_scale(), &path)?;
        println!("✔ PDF出力: {} ({}ページ)", path.display(), pages);
        written.push(path);
    }

    Ok(written)
}
