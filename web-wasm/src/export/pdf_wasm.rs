//! PDF生成（WASM版）
//!
//! DOM確認と画像化・保存を JS Bridge 経由で行う `PdfBackend` 実装。

use crate::export::js_bindings::{
    hide_indicator_js, js_error_text, options_to_json, plan_to_json, rasterize_element_js,
    save_pdf_js, show_indicator_js,
};
use hair_report_common::export::{PdfBackend, PdfPlan, RasterImage, RasterOptions};
use hair_report_common::{Error, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPdfBackend;

impl PdfBackend for BrowserPdfBackend {
    fn element_exists(&self, element_id: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
            .is_some()
    }

    fn show_indicator(&self, message: &str) {
        show_indicator_js(message);
    }

    fn hide_indicator(&self) {
        hide_indicator_js();
    }

    async fn rasterize(&self, element_id: &str, options: &RasterOptions) -> Result<RasterImage> {
        let options_json = options_to_json(options).map_err(Error::Export)?;
        let value = rasterize_element_js(element_id, &options_json)
            .await
            .map_err(|e| Error::Export(js_error_text(&e)))?;
        serde_wasm_bindgen::from_value(value).map_err(|e| Error::Export(e.to_string()))
    }

    async fn save_pdf(&self, image: &RasterImage, plan: &PdfPlan, file_name: &str) -> Result<()> {
        let plan_json = plan_to_json(plan).map_err(Error::Export)?;
        save_pdf_js(&image.data_url, &plan_json, file_name)
            .await
            .map(|_| ())
            .map_err(|e| {
                gloo::console::error!(format!("PDF 생성 중 오류 발생: {}", js_error_text(&e)));
                Error::Export(js_error_text(&e))
            })
    }
}

/// 今日の日付（YYYY-MM-DD, UTC）
pub fn today_iso() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    iso.split('T').next().unwrap_or_default().to_string()
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_missing_element_is_detected() {
        assert!(!BrowserPdfBackend.element_exists("no-such-element"));
    }

    #[wasm_bindgen_test]
    fn wasm_today_iso_format() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert_eq!(today.as_bytes()[4], b'-');
        assert_eq!(today.as_bytes()[7], b'-');
    }
}
