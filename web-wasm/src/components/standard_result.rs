//! 標準（7段階分析）の結果表示

use crate::platform::BrowserPlatform;
use hair_report_common::platform::{copy_with_notice, Printer};
use hair_report_common::report::standard::{
    char_count_label, copy_all_text, SectionId, SectionToggles, COMPRESSED_NOTE,
    SUMMARY_RULE_HEADER, SUMMARY_RULE_ITEMS,
};
use hair_report_common::types::FullAnalysisResponse;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn copy_text(text: String) {
    spawn_local(async move {
        copy_with_notice(&BrowserPlatform, &BrowserPlatform, &text).await;
    });
}

#[component]
pub fn StandardResult<FR>(result: FullAnalysisResponse, on_reset: FR) -> impl IntoView
where
    FR: Fn(()) + 'static + Clone + Send,
{
    let (toggles, set_toggles) = signal(SectionToggles::default());
    let all_text = StoredValue::new(copy_all_text(&result));

    let toc = SectionId::ALL
        .iter()
        .map(|&id| {
            view! {
                <button
                    class=move || if toggles.with(|t| t.is_expanded(id)) { "toc-item active" } else { "toc-item" }
                    on:click=move |_| set_toggles.update(|t| t.toggle(id))
                >
                    {format!("{} {}", id.icon(), id.title())}
                </button>
            }
        })
        .collect_view();

    let sections = SectionId::ALL
        .iter()
        .map(|&id| {
            let content = StoredValue::new(id.content(&result).to_string());
            view! {
                <div class="section-card">
                    <div class="section-header no-print" on:click=move |_| set_toggles.update(|t| t.toggle(id))>
                        <h2>{format!("{} {}", id.icon(), id.title())}</h2>
                        <div class="section-actions">
                            <button
                                class="btn-small"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    copy_text(content.get_value());
                                }
                            >
                                "복사"
                            </button>
                            <span class="chevron">
                                {move || if toggles.with(|t| t.is_expanded(id)) { "▲" } else { "▼" }}
                            </span>
                        </div>
                    </div>
                    <Show when=move || toggles.with(|t| t.is_expanded(id))>
                        <div class="section-body">
                            <div class="pre-wrap">{content.get_value()}</div>
                            {section_note(id, content.get_value())}
                        </div>
                    </Show>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="result standard-result">
            <div class="result-toolbar no-print">
                <h1>"큐모발검사 종합멘트 결과 (7단계 분석)"</h1>
                <div class="btn-row">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| {
                            if let Err(e) = BrowserPlatform.print() {
                                gloo::console::error!(e.to_string());
                            }
                        }
                    >
                        "📄 인쇄하기"
                    </button>
                    <button class="btn btn-green" on:click=move |_| copy_text(all_text.get_value())>
                        "📋 전체 복사"
                    </button>
                    <button
                        class="btn btn-gray"
                        on:click={
                            let on_reset = on_reset.clone();
                            move |_| on_reset(())
                        }
                    >
                        "🔄 새로운 분석"
                    </button>
                </div>

                <nav class="toc">
                    <h2>"📑 목차"</h2>
                    <div class="toc-grid">{toc}</div>
                </nav>
            </div>

            <div class="sections">{sections}</div>
        </div>
    }
}

/// 要約・圧縮版に添える補足
fn section_note(id: SectionId, content: String) -> Option<AnyView> {
    match id {
        SectionId::Compressed => Some(
            view! {
                <div class="note note-yellow">
                    <p>{COMPRESSED_NOTE}</p>
                    <p class="note-small">{char_count_label(&content)}</p>
                </div>
            }
            .into_any(),
        ),
        SectionId::Summary => Some(
            view! {
                <div class="note note-blue">
                    <p>{SUMMARY_RULE_HEADER}</p>
                    <ul>
                        {SUMMARY_RULE_ITEMS.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                    </ul>
                </div>
            }
            .into_any(),
        ),
        _ => None,
    }
}
