//! Loading indicator and analysis result area.

use leptos::*;

use crate::state::Surface;
use crate::types::ResultContent;
use crate::AppController;

#[component]
pub fn ResultPanel(surface: Memo<Surface>, ctrl: AppController) -> impl IntoView {
    let has_result = move || surface.with(|s| s.result.is_some());

    view! {
        <Show
            when=move || surface.with(|s| s.loading_visible)
            fallback=|| view! { }
        >
            <div class="loading" id="loadingSpinner">
                <div class="spinner"></div>
                <div class="loading-text">"⏳ Analyzing, this can take a minute..."</div>
            </div>
        </Show>

        <div class="analysis-result" id="analysisResult">
            {move || match surface.with(|s| s.result.clone()) {
                // Backend markup is inserted as-is.
                Some(ResultContent::Markup(html)) => view! {
                    <div class="analysis" inner_html=html></div>
                }.into_view(),
                Some(ResultContent::Notice(text)) => view! {
                    <p class="error-message">{text}</p>
                }.into_view(),
                None => ().into_view(),
            }}
        </div>

        <Show
            when=has_result
            fallback=|| view! { }
        >
            {
                let ctrl = ctrl.clone();
                view! {
                    <button class="btn btn-secondary" id="newAnalysis" on:click=move |_| ctrl.new_analysis()>
                        "New analysis"
                    </button>
                }
            }
        </Show>
    }
}
