use shared::Notice;
use web_sys::window;

/// Shows a notice as a blocking browser alert.
pub fn notify(notice: &Notice) {
    let message = notice.message();
    match window() {
        Some(w) => {
            if let Err(err) = w.alert_with_message(&message) {
                log::warn!("Failed to show alert {:?}: {:?}", message, err);
            }
        }
        None => log::warn!("No window available for notice: {}", message),
    }
}
