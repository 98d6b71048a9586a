//! Recent entries sidebar.
//!
//! Every refresh re-renders the whole list from [`RecentList::items`].
//! Opening and deleting are bound to two sibling elements, so a click on
//! the delete button never reaches the open handler.

use leptos::*;

use crate::config::{BACKEND_URL, FILE_ICON_SRC};
use crate::services::analysis_url;
use crate::state::{ListItem, RecentList};
use crate::types::RecentEntry;
use crate::AppController;

#[component]
pub fn RecentEntries(ctrl: AppController) -> impl IntoView {
    let recent: ReadSignal<RecentList> = ctrl.recent();

    view! {
        <aside class="recent-entries">
            <h2>"Recent analyses"</h2>
            <ul id="recentEntriesList">
                {move || {
                    let ctrl = ctrl.clone();
                    recent
                        .get()
                        .items()
                        .into_iter()
                        .map(move |item| match item {
                            ListItem::Entry(entry) => view! {
                                <EntryRow entry=entry ctrl=ctrl.clone()/>
                            }.into_view(),
                            ListItem::Placeholder(text) => view! {
                                <li class="placeholder">{text}</li>
                            }.into_view(),
                        })
                        .collect_view()
                }}
            </ul>
        </aside>
    }
}

#[component]
fn EntryRow(entry: RecentEntry, ctrl: AppController) -> impl IntoView {
    let RecentEntry { filename, analysis_html, date, analysis_txt } = entry;

    let open_ctrl = ctrl.clone();
    let on_open = move |_| {
        let ctrl = open_ctrl.clone();
        let id = analysis_html.clone();
        spawn_local(async move { ctrl.open(&id).await });
    };

    let name = filename.clone();
    let on_delete = move |_| {
        let ctrl = ctrl.clone();
        let name = name.clone();
        spawn_local(async move { ctrl.delete(&name).await });
    };

    let transcript = analysis_txt.map(|txt| {
        let href = analysis_url(BACKEND_URL, &txt);
        view! {
            <a class="download-link" href=href download=txt title="Download transcript">"TXT"</a>
        }
    });

    view! {
        <li class="recent-entry" title=date>
            <div class="entry-open" on:click=on_open>
                <img src=FILE_ICON_SRC alt="File" class="file-icon"/>
                <span class="entry-name">{filename}</span>
            </div>
            {transcript}
            <button class="delete-button" on:click=on_delete>"X"</button>
        </li>
    }
}
