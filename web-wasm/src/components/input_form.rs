//! 入力フォーム
//!
//! 送信・テストデータ読込・初期化・結果形式の選択。

use crate::api::FetchClient;
use crate::components::grade_group::grade_group;
use crate::components::personal_info::PersonalInfo;
use hair_report_common::form::{FieldErrors, FormDraft};
use hair_report_common::report::{AnalysisReport, ReportMode};
use hair_report_common::submission::{fetch_test_data, submit, SubmitError};
use hair_report_common::types::{HealthIndicator, HeavyMetal, Mineral};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn InputForm<FR>(
    is_loading: ReadSignal<bool>,
    set_loading: WriteSignal<bool>,
    on_result: FR,
) -> impl IntoView
where
    FR: Fn(AnalysisReport) + 'static + Clone + Send,
{
    let (draft, set_draft) = signal(FormDraft::new());
    let (errors, set_errors) = signal(FieldErrors::new());
    let (banner, set_banner) = signal(None::<String>);
    let (submitted, set_submitted) = signal(false);

    // 一度送信を試みた後は入力のたびに再検証
    Effect::new(move |_| {
        let current = draft.get();
        if submitted.get_untracked() {
            set_errors.set(current.validate().err().unwrap_or_default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        set_submitted.set(true);
        set_banner.set(None);

        let snapshot = draft.get_untracked();
        let on_result = on_result.clone();
        spawn_local(async move {
            let api = FetchClient::from_build_env();
            gloo::console::log!(format!("결과 타입: {}", snapshot.mode));
            match submit(&api, &snapshot, move |v| set_loading.set(v)).await {
                Ok(report) => {
                    set_errors.set(FieldErrors::new());
                    on_result(report);
                }
                Err(SubmitError::Invalid(field_errors)) => set_errors.set(field_errors),
                Err(SubmitError::Failed(message)) => {
                    gloo::console::error!(format!("분석 오류: {}", message));
                    set_banner.set(Some(message));
                }
            }
        });
    };

    let on_load_test_data = move |_| {
        spawn_local(async move {
            let api = FetchClient::from_build_env();
            match fetch_test_data(&api).await {
                // 取得中の編集（モード切替など）を上書きしないよう、最新の状態へ反映
                Ok(fixture) => {
                    set_draft.update(|d| d.load(fixture));
                    set_banner.set(None);
                }
                Err(message) => set_banner.set(Some(message)),
            }
        });
    };

    let on_reset = move |_| {
        set_draft.update(FormDraft::reset);
        set_errors.set(FieldErrors::new());
        set_banner.set(None);
        set_submitted.set(false);
    };

    let mode_option = move |mode: ReportMode, title: &'static str, description: &'static str| {
        view! {
            <label class="mode-option">
                <input
                    type="radio"
                    name="resultType"
                    prop:checked=move || draft.with(|d| d.mode == mode)
                    on:change=move |_| set_draft.update(|d| d.mode = mode)
                />
                <div>
                    <div class="mode-title">{title}</div>
                    <div class="text-muted">{description}</div>
                </div>
            </label>
        }
    };

    view! {
        <div class="input-form">
            {move || banner.get().map(|message| view! {
                <div class="error-banner"><p>{message}</p></div>
            })}

            <form on:submit=on_submit>
                <PersonalInfo draft=draft set_draft=set_draft errors=errors />
                {grade_group::<HeavyMetal>(draft, set_draft)}
                {grade_group::<Mineral>(draft, set_draft)}
                {grade_group::<HealthIndicator>(draft, set_draft)}

                <section class="card">
                    <h3>"결과 페이지 타입 선택"</h3>
                    <div class="mode-row">
                        {mode_option(
                            ReportMode::Standard,
                            "🔬 표준 7단계 분석",
                            "백엔드 API 표준 형식 (개인정보, 종합분석, 통계, 요약, 영양사요약, 압축버전)",
                        )}
                        {mode_option(
                            ReportMode::Legacy,
                            "📋 기존 형식",
                            "기존 결과 페이지 형식 (영양권장, 생활개선, 추가검사, 주의사항, 맺음말)",
                        )}
                    </div>
                </section>

                <div class="form-actions">
                    <button type="button" class="btn btn-secondary" on:click=on_load_test_data>
                        "테스트 데이터 불러오기"
                    </button>
                    <button type="button" class="btn btn-secondary" on:click=on_reset>
                        "초기화"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "분석 중..." } else { "종합멘트 생성" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
