//! One-way navigation side effects.
//!
//! Fire-and-forget by design: a blocked popup or an empty history produces
//! no visible effect and is not reported.

/// Open an external link in a new tab.
pub fn open_external(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

/// Go back one entry in the browser history.
pub fn history_back() {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.back();
        }
    }
}
