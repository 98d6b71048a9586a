//! Blocking browser dialogs (alert / confirm).

/// User prompts the controller needs.
pub trait Dialogs {
    fn alert(&self, message: &str);
    /// `true` when the user accepted.
    fn confirm(&self, message: &str) -> bool;
}

/// [`Dialogs`] backed by `window.alert` / `window.confirm`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        if let Err(e) = gloo_utils::window().alert_with_message(message) {
            log::error!("alert() failed: {:?}", e);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        gloo_utils::window()
            .confirm_with_message(message)
            .unwrap_or_else(|e| {
                log::error!("confirm() failed: {:?}", e);
                false
            })
    }
}
