use log::info;
use web_sys::window;

/// Launcher download entry point shared by both call-to-action buttons.
///
/// There is no launcher hosting yet, so the visitor only gets a notice.
pub fn start_download(notice: &str) {
    info!("Launcher download requested");
    if let Some(window) = window() {
        let _ = window.alert_with_message(notice);
    }
}
