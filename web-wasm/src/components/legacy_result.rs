//! 旧形式の結果表示
//!
//! 1枚の文書（個人情報・要約・総合分析）を印刷・PDF・コピーできる。

use crate::export::{today_iso, BrowserPdfBackend};
use crate::platform::BrowserPlatform;
use hair_report_common::export::{export_pdf_with_flag, pdf_file_name};
use hair_report_common::platform::{copy_with_notice, Notifier, Printer};
use hair_report_common::report::legacy::{self, PDF_TARGET_ID};
use hair_report_common::types::HairAnalysisResult;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn LegacyResult<FR>(result: HairAnalysisResult, on_reset: FR) -> impl IntoView
where
    FR: Fn(()) + 'static + Clone + Send,
{
    let (is_generating, set_generating) = signal(false);

    // 描画時にスケールを決める（元データは変更しない）
    let scale = legacy::print_scale(&result);
    let personal_html = legacy::personal_info_html(&result.personal_info_section);
    let comprehensive = StoredValue::new(legacy::clipboard_text(&result).to_string());

    let on_print = move |_| {
        if let Err(e) = BrowserPlatform.print() {
            gloo::console::error!(e.to_string());
        }
    };

    let on_download_pdf = move |_| {
        if is_generating.get_untracked() {
            return;
        }
        spawn_local(async move {
            let file_name = pdf_file_name(&today_iso());
            let result = export_pdf_with_flag(&BrowserPdfBackend, PDF_TARGET_ID, &file_name, move |v| {
                set_generating.set(v)
            })
            .await;
            if let Err(message) = result {
                BrowserPlatform.notify(&message);
            }
        });
    };

    let on_copy = move |_| {
        let text = comprehensive.get_value();
        spawn_local(async move {
            copy_with_notice(&BrowserPlatform, &BrowserPlatform, &text).await;
        });
    };

    view! {
        <div class="result legacy-result">
            <div class="result-toolbar no-print">
                <h1>"큐모발검사 종합멘트 결과"</h1>
                <div class="btn-row">
                    <button class="btn btn-primary no-print" on:click=on_print>"인쇄하기"</button>
                    <button
                        class="btn btn-purple no-print"
                        disabled=move || is_generating.get()
                        on:click=on_download_pdf
                    >
                        {move || if is_generating.get() { "PDF 생성 중..." } else { "PDF 다운로드" }}
                    </button>
                    <button class="btn btn-green no-print" on:click=on_copy>"결과 복사"</button>
                    <button
                        class="btn btn-gray no-print"
                        on:click={
                            let on_reset = on_reset.clone();
                            move |_| on_reset(())
                        }
                    >
                        "새로운 분석"
                    </button>
                </div>
            </div>

            <div
                id=PDF_TARGET_ID
                class="print-container"
                data-content-scale=scale.class()
                style=scale.css_transform()
            >
                <div class="personal-info-section" inner_html=personal_html />

                <div class="block">
                    <h2>"📋 요약 정보"</h2>
                    <div class="block-body summary">{result.summary_section.clone()}</div>
                </div>

                <div class="block">
                    <h2>"📊 종합 분석 결과"</h2>
                    <div class="block-body comprehensive">{result.comprehensive_analysis.clone()}</div>
                </div>

                <div class="footer-section">
                    <img
                        src="/images/kakao-channel-footer.png"
                        alt="카카오톡 채널 바로가기"
                        class="footer-image"
                    />
                </div>
            </div>
        </div>
    }
}
