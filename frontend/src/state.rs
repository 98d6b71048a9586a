//! UI state: the view state machine and the recent-entries list.
//!
//! Both are plain values. Components read them through signals and render
//! them; nothing here touches the DOM, so every transition is unit tested.
//!
//! ```text
//!              begin_upload           finish_upload
//!  DropReady ───────────────► Uploading ───────────► ShowingResult
//!      ▲  │                                              │
//!      │  └──────────────── show (open entry) ───────────┤
//!      └──────────── reset (new analysis / delete) ──────┘
//! ```
//!
//! `Uploading` is only ever left through `finish_upload`.

use std::cell::Cell;

use crate::config::{MSG_ENTRIES_FAILED, MSG_NO_ENTRIES};
use crate::types::{RecentEntry, ResultContent};

// =============================================================================
// View state machine
// =============================================================================

/// What the main area is doing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Drop surface visible, result area empty.
    #[default]
    DropReady,
    /// Upload in flight: drop surface hidden, loading indicator shown.
    Uploading,
    /// A result (or a failure notice standing in for one) is displayed.
    ShowingResult(ResultContent),
}

/// Visibility snapshot derived from a [`ViewState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    pub drop_visible: bool,
    pub loading_visible: bool,
    pub result: Option<ResultContent>,
}

impl ViewState {
    /// Enter `Uploading`. Only allowed from `DropReady`; returns `false`
    /// (and leaves the state alone) otherwise, which is what swallows a
    /// duplicate drop or change event while an upload is pending.
    pub fn begin_upload(&mut self) -> bool {
        if *self != ViewState::DropReady {
            return false;
        }
        *self = ViewState::Uploading;
        true
    }

    /// Apply the outcome of the pending upload. Only allowed from
    /// `Uploading`.
    pub fn finish_upload(&mut self, content: ResultContent) -> bool {
        if !self.is_uploading() {
            return false;
        }
        *self = ViewState::ShowingResult(content);
        true
    }

    /// Display `content` (an opened entry). Refused while uploading.
    pub fn show(&mut self, content: ResultContent) -> bool {
        if self.is_uploading() {
            return false;
        }
        *self = ViewState::ShowingResult(content);
        true
    }

    /// Back to the initial state, clearing any displayed result. Refused
    /// while uploading, so the drop surface cannot come back mid-upload.
    pub fn reset(&mut self) -> bool {
        if self.is_uploading() {
            return false;
        }
        *self = ViewState::DropReady;
        true
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self, ViewState::Uploading)
    }

    pub fn surface(&self) -> Surface {
        match self {
            ViewState::DropReady => Surface {
                drop_visible: true,
                loading_visible: false,
                result: None,
            },
            ViewState::Uploading => Surface {
                drop_visible: false,
                loading_visible: true,
                result: None,
            },
            ViewState::ShowingResult(content) => Surface {
                drop_visible: false,
                loading_visible: false,
                result: Some(content.clone()),
            },
        }
    }
}

// =============================================================================
// Recent entries
// =============================================================================

/// Last rendered state of the recent-entries list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RecentList {
    /// No refresh has completed yet.
    #[default]
    Pending,
    /// Entries in backend order.
    Loaded(Vec<RecentEntry>),
    /// The last refresh failed.
    Failed,
}

/// One rendered `<li>` of the recent list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListItem {
    Entry(RecentEntry),
    Placeholder(&'static str),
}

impl RecentList {
    /// Items to render. A loaded-but-empty list and a failed refresh each
    /// render exactly one placeholder.
    pub fn items(&self) -> Vec<ListItem> {
        match self {
            RecentList::Pending => Vec::new(),
            RecentList::Loaded(entries) if entries.is_empty() => {
                vec![ListItem::Placeholder(MSG_NO_ENTRIES)]
            }
            RecentList::Loaded(entries) => entries.iter().cloned().map(ListItem::Entry).collect(),
            RecentList::Failed => vec![ListItem::Placeholder(MSG_ENTRIES_FAILED)],
        }
    }

    pub fn contains(&self, filename: &str) -> bool {
        match self {
            RecentList::Loaded(entries) => entries.iter().any(|e| e.filename == filename),
            _ => false,
        }
    }
}

/// Orders list refreshes so a slow, older response cannot overwrite a
/// newer render.
#[derive(Debug, Default)]
pub struct RefreshTickets {
    issued: Cell<u64>,
    applied: Cell<u64>,
}

impl RefreshTickets {
    pub fn issue(&self) -> u64 {
        let ticket = self.issued.get() + 1;
        self.issued.set(ticket);
        ticket
    }

    /// Whether the response for `ticket` may be rendered. Accepting a
    /// ticket retires every older one.
    pub fn accept(&self, ticket: u64) -> bool {
        if ticket < self.applied.get() {
            return false;
        }
        self.applied.set(ticket);
        true
    }
}

/// Counts view changes. A response is only applied if no view change
/// happened since its request was issued.
#[derive(Debug, Default)]
pub struct ViewEpoch(Cell<u64>);

impl ViewEpoch {
    pub fn advance(&self) -> u64 {
        let epoch = self.0.get() + 1;
        self.0.set(epoch);
        epoch
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        self.0.get() == epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markup(s: &str) -> ResultContent {
        ResultContent::Markup(s.to_string())
    }

    #[test]
    fn test_initial_state_is_drop_ready() {
        let surface = ViewState::default().surface();
        assert!(surface.drop_visible);
        assert!(!surface.loading_visible);
        assert_eq!(surface.result, None);
    }

    #[test]
    fn test_upload_cycle() {
        let mut state = ViewState::default();
        assert!(state.begin_upload());
        assert_eq!(
            state.surface(),
            Surface { drop_visible: false, loading_visible: true, result: None }
        );

        assert!(state.finish_upload(markup("<p>done</p>")));
        assert_eq!(
            state.surface(),
            Surface { drop_visible: false, loading_visible: false, result: Some(markup("<p>done</p>")) }
        );

        assert!(state.reset());
        assert_eq!(state, ViewState::DropReady);
    }

    #[test]
    fn test_second_upload_rejected_while_pending() {
        let mut state = ViewState::default();
        assert!(state.begin_upload());
        assert!(!state.begin_upload());
        assert!(state.is_uploading());
    }

    #[test]
    fn test_upload_rejected_while_showing_result() {
        let mut state = ViewState::ShowingResult(markup("x"));
        assert!(!state.begin_upload());
        assert_eq!(state, ViewState::ShowingResult(markup("x")));
    }

    #[test]
    fn test_open_skips_uploading() {
        let mut state = ViewState::default();
        assert!(state.show(markup("<h1>old</h1>")));
        assert!(!state.surface().drop_visible);
        assert!(!state.surface().loading_visible);
    }

    #[test]
    fn test_uploading_only_left_by_finish_upload() {
        let mut state = ViewState::default();
        state.begin_upload();

        assert!(!state.reset());
        assert!(!state.show(markup("<h1>other</h1>")));
        assert!(state.surface().loading_visible);

        assert!(state.finish_upload(markup("<p>mine</p>")));
        assert_eq!(state, ViewState::ShowingResult(markup("<p>mine</p>")));
    }

    #[test]
    fn test_finish_upload_needs_pending_upload() {
        let mut state = ViewState::default();
        assert!(!state.finish_upload(markup("<p>late</p>")));
        assert_eq!(state, ViewState::DropReady);
    }

    #[test]
    fn test_epoch_invalidated_by_later_change() {
        let epoch = ViewEpoch::default();
        let issued = epoch.advance();
        assert!(epoch.is_current(issued));
        epoch.advance();
        assert!(!epoch.is_current(issued));
    }

    #[test]
    fn test_reachable_surfaces_are_the_three_combinations() {
        let states = [
            ViewState::DropReady,
            ViewState::Uploading,
            ViewState::ShowingResult(ResultContent::Notice("failed".into())),
        ];
        for state in states {
            let s = state.surface();
            // drop surface and result are never visible together
            assert!(!(s.drop_visible && s.result.is_some()));
            // loading only ever appears alone
            if s.loading_visible {
                assert!(!s.drop_visible && s.result.is_none());
            }
        }
    }

    #[test]
    fn test_empty_list_renders_single_placeholder() {
        let items = RecentList::Loaded(vec![]).items();
        assert_eq!(items, vec![ListItem::Placeholder(MSG_NO_ENTRIES)]);
    }

    #[test]
    fn test_failed_list_renders_single_placeholder() {
        assert_eq!(RecentList::Failed.items(), vec![ListItem::Placeholder(MSG_ENTRIES_FAILED)]);
    }

    #[test]
    fn test_entries_keep_backend_order() {
        let list = RecentList::Loaded(vec![
            RecentEntry::new("b.mp3", "b.html"),
            RecentEntry::new("a.mp4", "a.html"),
        ]);
        let names: Vec<_> = list
            .items()
            .into_iter()
            .map(|item| match item {
                ListItem::Entry(e) => e.filename,
                ListItem::Placeholder(p) => p.to_string(),
            })
            .collect();
        assert_eq!(names, ["b.mp3", "a.mp4"]);
        assert!(list.contains("a.mp4"));
        assert!(!list.contains("c.mp4"));
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let tickets = RefreshTickets::default();
        let first = tickets.issue();
        let second = tickets.issue();
        assert!(tickets.accept(second));
        assert!(!tickets.accept(first));
    }

    #[test]
    fn test_in_order_tickets_all_accepted() {
        let tickets = RefreshTickets::default();
        let first = tickets.issue();
        assert!(tickets.accept(first));
        let second = tickets.issue();
        assert!(tickets.accept(second));
    }
}
