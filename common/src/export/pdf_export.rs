//! DOM要素 → PDF の出力フロー
//!
//! DOM操作・画像化・保存は `PdfBackend` に任せ、ここでは手順と後始末だけを持つ。

use super::pdf_core::{plan_pages, PageGeometry, PdfPlan, RasterOptions};
use crate::busy::BusyGuard;
use crate::error::{Error, Result};
use crate::report::legacy::PDF_FILE_PREFIX;
use serde::Deserialize;

pub const MSG_PDF_GENERATING: &str = "PDF 생성 중...";
pub const MSG_PDF_FAILED: &str = "PDF 생성 중 오류가 발생했습니다. 다시 시도해주세요.";

/// ラスタライズ結果
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RasterImage {
    pub width_px: u32,
    pub height_px: u32,
    /// `data:image/png;base64,...`
    pub data_url: String,
}

#[allow(async_fn_in_trait)]
pub trait PdfBackend {
    fn element_exists(&self, element_id: &str) -> bool;
    fn show_indicator(&self, message: &str);
    fn hide_indicator(&self);
    async fn rasterize(&self, element_id: &str, options: &RasterOptions) -> Result<RasterImage>;
    async fn save_pdf(&self, image: &RasterImage, plan: &PdfPlan, file_name: &str) -> Result<()>;
}

/// `큐모발검사_종합멘트_<YYYY-MM-DD>.pdf`
pub fn pdf_file_name(iso_date: &str) -> String {
    format!("{}_{}.pdf", PDF_FILE_PREFIX, iso_date)
}

struct IndicatorGuard<'a, B: PdfBackend>(&'a B);

impl<B: PdfBackend> Drop for IndicatorGuard<'_, B> {
    fn drop(&mut self) {
        self.0.hide_indicator();
    }
}

/// 要素をPDFにして保存
///
/// 要素が無ければ画像化せずに失敗する。インジケータはどの経路でも消す。
pub async fn generate_pdf<B: PdfBackend>(backend: &B, element_id: &str, file_name: &str) -> Result<PdfPlan> {
    if !backend.element_exists(element_id) {
        return Err(Error::ElementNotFound(element_id.to_string()));
    }

    backend.show_indicator(MSG_PDF_GENERATING);
    let _indicator = IndicatorGuard(backend);

    let image = backend.rasterize(element_id, &RasterOptions::default()).await?;
    let plan = plan_pages(&PageGeometry::A4, image.width_px, image.height_px)?;
    backend.save_pdf(&image, &plan, file_name).await?;
    Ok(plan)
}

/// 生成中フラグ付きで出力。失敗時はユーザー向け文言を返す
pub async fn export_pdf_with_flag<B, F>(
    backend: &B,
    element_id: &str,
    file_name: &str,
    set_generating: F,
) -> std::result::Result<PdfPlan, String>
where
    B: PdfBackend,
    F: Fn(bool),
{
    let _busy = BusyGuard::engage(set_generating);
    generate_pdf(backend, element_id, file_name)
        .await
        .map_err(|_| MSG_PDF_FAILED.to_string())
}
