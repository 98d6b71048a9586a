//! The interaction controller.
//!
//! Owns the two pieces of UI state ([`ViewState`] and [`RecentList`]) as
//! signals and sequences every backend call that changes them. Each
//! operation is an `async fn` that awaits its request and then applies the
//! outcome; dependent steps (upload then refresh, delete then refresh) are
//! plain `.await`s so they can never run out of order.
//!
//! Every failure ends here: it is logged and turned into text in the
//! result area, a list placeholder, or an alert.

use std::rc::Rc;

use leptos::*;

use crate::config::{
    delete_refused_message, MSG_CONFIRM_DELETE, MSG_DELETE_RETRY, MSG_OPEN_FAILED, MSG_UPLOAD_FAILED,
};
use crate::ingest::{select_media, CandidateFile, MediaFile};
use crate::services::{AnalysisApi, Dialogs};
use crate::state::{RecentList, RefreshTickets, ViewEpoch, ViewState};
use crate::types::{AppError, DeleteResponse, ResultContent};

pub struct Controller<A, D> {
    api: Rc<A>,
    dialogs: Rc<D>,
    view: RwSignal<ViewState>,
    recent: RwSignal<RecentList>,
    tickets: Rc<RefreshTickets>,
    epoch: Rc<ViewEpoch>,
}

impl<A, D> Clone for Controller<A, D> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            dialogs: Rc::clone(&self.dialogs),
            view: self.view,
            recent: self.recent,
            tickets: Rc::clone(&self.tickets),
            epoch: Rc::clone(&self.epoch),
        }
    }
}

impl<A, D> Controller<A, D>
where
    A: AnalysisApi + 'static,
    D: Dialogs + 'static,
{
    pub fn new(api: A, dialogs: D) -> Self {
        Self {
            api: Rc::new(api),
            dialogs: Rc::new(dialogs),
            view: create_rw_signal(ViewState::default()),
            recent: create_rw_signal(RecentList::default()),
            tickets: Rc::new(RefreshTickets::default()),
            epoch: Rc::new(ViewEpoch::default()),
        }
    }

    /// Apply a view transition; a successful one retires every response
    /// still pending against the previous view.
    fn transition(&self, f: impl FnOnce(&mut ViewState) -> bool) -> bool {
        let changed = self.view.try_update(f).unwrap_or(false);
        if changed {
            self.epoch.advance();
        }
        changed
    }

    pub fn view(&self) -> ReadSignal<ViewState> {
        self.view.read_only()
    }

    pub fn recent(&self) -> ReadSignal<RecentList> {
        self.recent.read_only()
    }

    /// Initial list fetch, run once when the page mounts.
    pub fn start(&self) {
        let this = self.clone();
        spawn_local(async move { this.refresh().await });
    }

    /// Entry point for dropped and picked files.
    pub async fn ingest<I>(&self, candidates: I)
    where
        I: IntoIterator<Item = A::Payload>,
        A::Payload: CandidateFile,
    {
        match select_media(candidates) {
            Ok(file) => self.upload(file).await,
            Err(AppError::Validation(reason)) => self.dialogs.alert(&reason),
            Err(e) => {
                log::error!("❌ Could not read selection: {}", e);
                self.dialogs.alert(&e.to_string());
            }
        }
    }

    /// Send an accepted file and show what comes back.
    pub async fn upload(&self, file: MediaFile<A::Payload>) {
        // Hidden drop surface and spinner are applied before the request
        // is issued, so a second drop cannot start another upload.
        if !self.transition(ViewState::begin_upload) {
            log::warn!("⚠️ Not ready for a new upload, ignoring {}", file.name);
            return;
        }

        log::info!("📤 Uploading {} ({})", file.name, file.media_type);

        match self.api.upload(file).await {
            Ok(response) => {
                if let Some(entry) = &response.entry {
                    log::info!("✅ Analysis ready for {}", entry.filename);
                } else {
                    log::info!("✅ Analysis ready");
                }
                self.transition(|v| v.finish_upload(ResultContent::Markup(response.analysis)));
                self.refresh().await;
            }
            Err(e) => {
                log::error!("❌ Upload failed: {}", e);
                self.transition(|v| v.finish_upload(ResultContent::Notice(MSG_UPLOAD_FAILED.to_string())));
            }
        }
    }

    /// Re-fetch the recent entries and replace the rendered list.
    pub async fn refresh(&self) {
        let ticket = self.tickets.issue();
        let result = self.api.recent_entries().await;

        if !self.tickets.accept(ticket) {
            log::debug!("Discarding stale recent entries response #{}", ticket);
            return;
        }

        match result {
            Ok(entries) => {
                log::info!("📋 {} recent entries", entries.len());
                self.recent.set(RecentList::Loaded(entries));
            }
            Err(e) => {
                log::error!("❌ Error fetching recent entries: {}", e);
                self.recent.set(RecentList::Failed);
            }
        }
    }

    /// Show the stored analysis of a recent entry.
    ///
    /// Ignored while an upload is pending. The response is dropped if the
    /// view changed in the meantime (another open, a reset, a delete).
    pub async fn open(&self, analysis_html: &str) {
        if self.view.with_untracked(ViewState::is_uploading) {
            log::warn!("⚠️ Upload in progress, not opening {}", analysis_html);
            return;
        }

        let epoch = self.epoch.advance();
        let result = self.api.analysis(analysis_html).await;

        if !self.epoch.is_current(epoch) {
            log::debug!("Discarding stale analysis {}", analysis_html);
            return;
        }

        let content = match result {
            Ok(markup) => {
                log::info!("📄 Loaded {}", analysis_html);
                ResultContent::Markup(markup)
            }
            Err(e) => {
                log::error!("❌ Error loading analysis {}: {}", analysis_html, e);
                ResultContent::Notice(MSG_OPEN_FAILED.to_string())
            }
        };
        self.transition(|v| v.show(content));
    }

    /// Delete a recent entry after confirmation.
    pub async fn delete(&self, filename: &str) {
        if !self.dialogs.confirm(MSG_CONFIRM_DELETE) {
            log::debug!("Delete of {} cancelled", filename);
            return;
        }

        match self.api.delete_entry(filename).await {
            Ok(DeleteResponse { success: true, .. }) => {
                log::info!("🗑️ Deleted {}", filename);
                // The open result may be the entry that just went away.
                if !self.transition(ViewState::reset) {
                    log::debug!("Upload in progress, keeping the view");
                }
                self.refresh().await;
            }
            Ok(DeleteResponse { success: false, message }) => {
                log::warn!("⚠️ Backend refused to delete {}: {:?}", filename, message);
                self.dialogs.alert(&delete_refused_message(message.as_deref()));
            }
            Err(e) => {
                log::error!("❌ Error deleting {}: {}", filename, e);
                self.dialogs.alert(MSG_DELETE_RETRY);
            }
        }
    }

    /// "New analysis": back to the drop surface.
    pub fn new_analysis(&self) {
        self.transition(ViewState::reset);
    }
}
