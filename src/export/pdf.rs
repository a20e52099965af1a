//! テキストレポートのPDF出力（printpdf）
//!
//! ハングルを含むため外部TTFフォントを埋め込む。行送りは一定で、
//! ページ分割は共有ライブラリの行単位ページングを使う。

use crate::error::{HairReportError, Result};
use crate::report::TextBlock;
use hair_report_common::export::pdf_core::{lines_per_page, paginate_lines, PageGeometry};
use printpdf::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// 本文の基準フォントサイズ（pt）
const BASE_FONT_SIZE_PT: f32 = 10.5;
const PT_TO_MM: f32 = 0.3528;
const LINE_SPACING: f32 = 1.5;

/// 1行分の出力
#[derive(Debug, Clone, PartialEq)]
pub struct PdfLine {
    pub text: String,
    pub size_pt: f32,
}

/// 行レイアウトの寸法
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLayout {
    pub font_size_pt: f32,
    pub geometry: PageGeometry,
}

impl TextLayout {
    pub fn new(scale: f32) -> Self {
        Self {
            font_size_pt: BASE_FONT_SIZE_PT * scale,
            geometry: PageGeometry::A4,
        }
    }

    pub fn line_height_mm(&self) -> f32 {
        self.heading_size_pt() * PT_TO_MM * LINE_SPACING
    }

    pub fn heading_size_pt(&self) -> f32 {
        self.font_size_pt * 1.2
    }

    pub fn lines_per_page(&self) -> usize {
        lines_per_page(&self.geometry, self.line_height_mm())
    }
}

/// 文字幅の概算（mm）。全角は1em、半角は0.5em
fn char_width_mm(c: char, size_pt: f32) -> f32 {
    let em = size_pt * PT_TO_MM;
    if c.is_ascii() {
        em * 0.5
    } else {
        em
    }
}

/// 1段落を幅に収まるよう折り返す
pub fn wrap_line(text: &str, max_width_mm: f32, size_pt: f32) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut width = 0.0;
    for c in text.chars() {
        let w = char_width_mm(c, size_pt);
        if width + w > max_width_mm && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            width = 0.0;
        }
        current.push(c);
        width += w;
    }
    lines.push(current);
    lines
}

/// タイトルとブロックを出力行へ展開
pub fn layout_lines(title: &str, blocks: &[TextBlock], layout: &TextLayout) -> Vec<PdfLine> {
    let width = layout.geometry.content_width_mm();
    let heading = layout.heading_size_pt();
    let body = layout.font_size_pt;

    let mut lines: Vec<PdfLine> = wrap_line(title, width, heading)
        .into_iter()
        .map(|text| PdfLine { text, size_pt: heading })
        .collect();

    for block in blocks {
        lines.push(PdfLine { text: String::new(), size_pt: body });
        lines.extend(
            wrap_line(&block.heading, width, heading)
                .into_iter()
                .map(|text| PdfLine { text, size_pt: heading }),
        );
        for paragraph in block.body.lines() {
            lines.extend(
                wrap_line(paragraph.trim_end(), width, body)
                    .into_iter()
                    .map(|text| PdfLine { text, size_pt: body }),
            );
        }
    }
    lines
}

/// PDFを生成してページ数を返す
pub fn generate_pdf(
    title: &str,
    blocks: &[TextBlock],
    font_path: &Path,
    scale: f32,
    output_path: &Path,
) -> Result<usize> {
    if !font_path.exists() {
        return Err(HairReportError::FileNotFound(font_path.display().to_string()));
    }

    let layout = TextLayout::new(scale);
    let geometry = layout.geometry;
    let pages = paginate_lines(&layout_lines(title, blocks, &layout), layout.lines_per_page());

    let (doc, page1, layer1) = PdfDocument::new(
        title,
        Mm(geometry.page_width_mm),
        Mm(geometry.page_height_mm),
        "Layer 1",
    );

    let font = doc
        .add_external_font(File::open(font_path)?)
        .map_err(|e| HairReportError::PdfGeneration(format!("フォント追加エラー: {:?}", e)))?;

    let line_height = layout.line_height_mm();
    for (index, page_lines) in pages.iter().enumerate() {
        let (page, layer) = if index == 0 {
            (page1, layer1)
        } else {
            doc.add_page(
                Mm(geometry.page_width_mm),
                Mm(geometry.page_height_mm),
                format!("Page {}", index + 1),
            )
        };
        let current_layer = doc.get_page(page).get_layer(layer);

        // PDF座標は下から上
        for (row, line) in page_lines.iter().enumerate() {
            if line.text.is_empty() {
                continue;
            }
            let y = geometry.page_height_mm - geometry.margin_mm - (row as f32 + 1.0) * line_height;
            current_layer.use_text(line.text.clone(), line.size_pt, Mm(geometry.margin_mm), Mm(y), &font);
        }
    }

    let file = File::create(output_path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| HairReportError::PdfGeneration(format!("PDF保存エラー: {:?}", e)))?;

    Ok(pages.len())
}
