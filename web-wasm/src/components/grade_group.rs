//! 検査結果グループ（重金属・ミネラル・健康指標）の入力
//!
//! 項目ごとに判定値をラジオボタンで選ぶ。

use hair_report_common::form::FormDraft;
use hair_report_common::types::{Analyte, Level};
use leptos::prelude::*;

/// `A::ALL` の各項目 × `A::Level::ALL` のラジオボタン
pub fn grade_group<A: Analyte>(draft: ReadSignal<FormDraft>, set_draft: WriteSignal<FormDraft>) -> impl IntoView {
    let rows = A::ALL
        .iter()
        .map(|&analyte| {
            let name = format!("grade-{}", analyte.key());
            let options = <A::Level as Level>::ALL
                .iter()
                .map(|&level| {
                    view! {
                        <label class="radio">
                            <input
                                type="radio"
                                name=name.clone()
                                prop:checked=move || draft.with(|d| d.level(analyte) == level)
                                on:change=move |_| set_draft.update(|d| d.set_level(analyte, level))
                            />
                            <span class=level.tone()>{level.as_str()}</span>
                        </label>
                    }
                })
                .collect_view();

            view! {
                <div class="form-group">
                    <label>{analyte.label()}</label>
                    <div class="radio-row">{options}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="card">
            <h3>{A::GROUP_TITLE}</h3>
            <div class="grid-3">{rows}</div>
        </section>
    }
}
