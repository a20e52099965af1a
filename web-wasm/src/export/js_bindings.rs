//! JavaScript Bridge バインディング
//!
//! html2canvas / jsPDF / クリップボードは JS 側に委譲する。

use hair_report_common::export::{PdfPlan, RasterOptions};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/report-bridge.js")]
extern "C" {
    /// 要素を画像化して `{ widthPx, heightPx, dataUrl }` を返す
    #[wasm_bindgen(js_name = "rasterizeElement", catch)]
    pub async fn rasterize_element_js(element_id: &str, options_json: &str) -> Result<JsValue, JsValue>;

    /// 計画どおりに画像を配置してPDFを保存
    #[wasm_bindgen(js_name = "savePdf", catch)]
    pub async fn save_pdf_js(data_url: &str, plan_json: &str, file_name: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = "copyText", catch)]
    pub async fn copy_text_js(text: &str) -> Result<JsValue, JsValue>;

    /// 画面中央の「PDF 생성 중...」表示
    #[wasm_bindgen(js_name = "showIndicator")]
    pub fn show_indicator_js(message: &str);

    #[wasm_bindgen(js_name = "hideIndicator")]
    pub fn hide_indicator_js();
}

pub fn options_to_json(options: &RasterOptions) -> Result<String, String> {
    serde_json::to_string(options).map_err(|e| format!("JSON serialization failed: {}", e))
}

pub fn plan_to_json(plan: &PdfPlan) -> Result<String, String> {
    serde_json::to_string(plan).map_err(|e| format!("JSON serialization failed: {}", e))
}

/// JS例外を文字列化
pub fn js_error_text(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
