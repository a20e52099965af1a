//! メインアプリケーションコンポーネント
//!
//! 左: 入力フォーム / 右: 結果（送信時のモードで表示を切り替える）

use crate::components::{
    header::Header,
    input_form::InputForm,
    legacy_result::LegacyResult,
    standard_result::StandardResult,
};
use hair_report_common::report::AnalysisReport;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let (report, set_report) = signal(None::<AnalysisReport>);
    let (is_loading, set_loading) = signal(false);

    let on_result = move |next: AnalysisReport| set_report.set(Some(next));
    let on_reset = move |_: ()| set_report.set(None);

    view! {
        <div class="layout">
            <div class="pane pane-input">
                <Header />
                <InputForm is_loading=is_loading set_loading=set_loading on_result=on_result />
            </div>

            <div class="pane pane-result">
                {move || match report.get() {
                    None => view! {
                        <div class="placeholder">
                            <h3>"결과가 여기에 표시됩니다"</h3>
                            <p class="text-muted">
                                "왼쪽 폼에 정보를 입력하고 '종합멘트 생성' 버튼을 클릭하세요."
                            </p>
                        </div>
                    }
                    .into_any(),
                    Some(AnalysisReport::Legacy(result)) => {
                        view! { <LegacyResult result=result on_reset=on_reset /> }.into_any()
                    }
                    Some(AnalysisReport::Standard(result)) => {
                        view! { <StandardResult result=result on_reset=on_reset /> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
