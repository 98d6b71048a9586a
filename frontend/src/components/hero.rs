//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Recap - Speaking Analysis"</h1>
            <p class="subtitle">
                "Upload a recording of your answer (MP4 video or MP3 audio). "
                "You get a transcript and detailed feedback; past analyses stay in the sidebar."
            </p>
        </div>
    }
}
