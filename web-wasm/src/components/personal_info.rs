//! 個人情報入力コンポーネント

use hair_report_common::form::{FieldErrors, FormDraft, FormField, SpecialOption};
use leptos::prelude::*;

#[component]
pub fn PersonalInfo(
    draft: ReadSignal<FormDraft>,
    set_draft: WriteSignal<FormDraft>,
    errors: ReadSignal<FieldErrors>,
) -> impl IntoView {
    let field_error = move |field: FormField| {
        move || {
            errors.with(|e| e.get(field).map(str::to_string)).map(|msg| {
                view! { <p class="field-error">{msg}</p> }
            })
        }
    };

    // チェック順 = 連結順
    let specials = SpecialOption::ALL
        .iter()
        .map(|&option| {
            view! {
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.notes.is_selected(option))
                        on:change=move |_| set_draft.update(|d| d.toggle_special(option))
                    />
                    <span>{option.label()}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <section class="card">
            <h3>"📋 개인 정보"</h3>
            <div class="grid-3">
                <div class="form-group">
                    <label for="name">"이름 " <span class="required">"*"</span></label>
                    <input
                        type="text"
                        id="name"
                        placeholder="홍길동"
                        prop:value=move || draft.with(|d| d.name().to_string())
                        on:input=move |ev| set_draft.update(|d| d.set_name(event_target_value(&ev)))
                    />
                    {field_error(FormField::Name)}
                </div>

                <div class="form-group">
                    <label for="age">"나이 " <span class="required">"*"</span></label>
                    <input
                        type="number"
                        id="age"
                        min="1"
                        max="120"
                        prop:value=move || draft.with(|d| d.age_text.clone())
                        on:input=move |ev| set_draft.update(|d| d.set_age_text(event_target_value(&ev)))
                    />
                    {field_error(FormField::Age)}
                </div>

                <div class="form-group">
                    <label>"특이사항"</label>
                    <div class="checkbox-row">{specials}</div>
                    <input
                        type="text"
                        class="input-small"
                        placeholder="기타 (질환/직업 등)"
                        prop:value=move || draft.with(|d| d.notes.custom.clone())
                        on:input=move |ev| set_draft.update(|d| d.set_custom_note(event_target_value(&ev)))
                    />
                </div>
            </div>
        </section>
    }
}
