//! ブラウザ向けエクスポート

pub mod js_bindings;
pub mod pdf_wasm;

pub use pdf_wasm::{today_iso, BrowserPdfBackend};
