//! PDF export core utilities shared by CLI/WASM.
//!
//! 座標はすべてmm。Y軸は上から下（jsPDF準拠）。

use crate::error::{Error, Result};
use serde::Serialize;

/// A4縦
pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;
pub const PAGE_MARGIN_MM: f32 = 10.0;

/// ページ寸法
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,
}

impl PageGeometry {
    pub const A4: PageGeometry = PageGeometry {
        page_width_mm: A4_WIDTH_MM,
        page_height_mm: A4_HEIGHT_MM,
        margin_mm: PAGE_MARGIN_MM,
    };

    /// 左右マージンを除いた幅
    pub fn content_width_mm(&self) -> f32 {
        self.page_width_mm - self.margin_mm * 2.0
    }

    /// 1ページに収まる高さ
    pub fn page_capacity_mm(&self) -> f32 {
        self.page_height_mm - self.margin_mm * 2.0
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::A4
    }
}

/// ラスタライズ設定（JSブリッジへそのまま渡す）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RasterOptions {
    pub scale: u32,
    pub background_color: String,
    pub ignore_class: String,
    pub reset_transform: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 3,
            background_color: "#ffffff".to_string(),
            ignore_class: "no-print".to_string(),
            reset_transform: true,
        }
    }
}

/// 画像1枚の配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub page: usize,
    pub x_mm: f32,
    pub y_mm: f32,
}

/// ページ分割計画
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfPlan {
    pub content_width_mm: f32,
    pub content_height_mm: f32,
    pub placements: Vec<Placement>,
}

impl PdfPlan {
    pub fn page_count(&self) -> usize {
        self.placements.len()
    }
}

/// ラスタ画像を幅いっぱいに拡大し、ページ単位の配置を計算
///
/// 2ページ目以降は同じ画像を上にずらして貼る（y = margin − k·capacity）。
pub fn plan_pages(geometry: &PageGeometry, image_width_px: u32, image_height_px: u32) -> Result<PdfPlan> {
    if image_width_px == 0 || image_height_px == 0 {
        return Err(Error::Export(format!(
            "invalid raster size {}x{}",
            image_width_px, image_height_px
        )));
    }

    let content_width_mm = geometry.content_width_mm();
    let content_height_mm = image_height_px as f32 * content_width_mm / image_width_px as f32;
    let capacity = geometry.page_capacity_mm();

    let mut placements = Vec::new();
    let mut height_left = content_height_mm;
    let mut page = 0;
    loop {
        placements.push(Placement {
            page,
            x_mm: geometry.margin_mm,
            y_mm: geometry.margin_mm - page as f32 * capacity,
        });
        height_left -= capacity;
        page += 1;
        if height_left <= 0.0 {
            break;
        }
    }

    Ok(PdfPlan {
        content_width_mm,
        content_height_mm,
        placements,
    })
}

/// テキスト行を1ページあたりの行数で分割（CLIのテキストPDF用）
pub fn lines_per_page(geometry: &PageGeometry, line_height_mm: f32) -> usize {
    if line_height_mm <= 0.0 {
        return 1;
    }
    ((geometry.page_capacity_mm() / line_height_mm).floor() as usize).max(1)
}

pub fn paginate_lines<T: Clone>(lines: &[T], per_page: usize) -> Vec<Vec<T>> {
    if lines.is_empty() {
        return vec![Vec::new()];
    }
    lines.chunks(per_page.max(1)).map(|chunk| chunk.to_vec()).collect()
}
