//! ブラウザのプラットフォームサービス

use crate::export::js_bindings::{copy_text_js, js_error_text};
use hair_report_common::platform::{Clipboard, Notifier, Printer};
use hair_report_common::{Error, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPlatform;

impl Clipboard for BrowserPlatform {
    async fn write_text(&self, text: &str) -> Result<()> {
        copy_text_js(text)
            .await
            .map(|_| ())
            .map_err(|e| Error::Platform(js_error_text(&e)))
    }
}

impl Printer for BrowserPlatform {
    fn print(&self) -> Result<()> {
        let window = web_sys::window().ok_or_else(|| Error::Platform("window unavailable".into()))?;
        window
            .print()
            .map_err(|e| Error::Platform(js_error_text(&e)))
    }
}

impl Notifier for BrowserPlatform {
    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                gloo::console::warn!(message.to_string());
            }
        }
    }
}
