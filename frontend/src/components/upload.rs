//! Drop surface with drag & drop and a file picker.
//!
//! Both acquisition paths hand their `FileList` to
//! [`Controller::ingest`](crate::Controller::ingest).

use leptos::*;
use web_sys::{DragEvent, Event, HtmlInputElement};

use crate::config::FILE_PICKER_ACCEPT;
use crate::ingest::{files_from_list, DragPhase};
use crate::AppController;

#[component]
pub fn DropSurface(ctrl: AppController) -> impl IntoView {
    let (armed, set_armed) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    // Keep the browser from navigating to the dropped file.
    let on_drag = move |ev: &DragEvent, phase: DragPhase| {
        ev.prevent_default();
        ev.stop_propagation();
        set_armed.set(phase.armed());
    };

    let drop_ctrl = ctrl.clone();
    let on_drop = move |ev: DragEvent| {
        on_drag(&ev, DragPhase::Drop);
        let files = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .map(|list| files_from_list(&list))
            .unwrap_or_default();

        let ctrl = drop_ctrl.clone();
        spawn_local(async move { ctrl.ingest(files).await });
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = input.files().map(|list| files_from_list(&list)).unwrap_or_default();
        // Allow picking the same file again.
        input.set_value("");

        let ctrl = ctrl.clone();
        spawn_local(async move { ctrl.ingest(files).await });
    };

    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    view! {
        <div
            class="drop-area"
            id="dropArea"
            class:dragover=move || armed.get()
            on:dragenter=move |ev: DragEvent| on_drag(&ev, DragPhase::Enter)
            on:dragover=move |ev: DragEvent| on_drag(&ev, DragPhase::Over)
            on:dragleave=move |ev: DragEvent| on_drag(&ev, DragPhase::Leave)
            on:drop=on_drop
        >
            <div class="upload-icon">"🎙️"</div>
            <div class="upload-text">"Drop an MP4 or MP3 file here"</div>
            <div class="upload-hint">"or"</div>
            <button class="upload-button" id="uploadButton" on:click=open_picker>
                "Choose a file"
            </button>
            <input
                type="file"
                id="fileInput"
                accept=FILE_PICKER_ACCEPT
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />
        </div>
    }
}
