//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"큐모발검사 종합멘트 자동 생성 시스템"</h1>
            <p class="text-muted">
                "모발검사 결과를 입력하시면 개인 맞춤형 종합멘트를 자동으로 생성해드립니다."
            </p>
        </header>
    }
}
