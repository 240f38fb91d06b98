use gpui::{App, Window};
use gpui_component::{WindowExt, notification::Notification as Toast};
use ride_core::{DriverId, Notification, driver_catalog};

/// Maps a driver picker label back to the catalog id.
pub fn driver_id_from_label(label: &str) -> Option<DriverId> {
    driver_catalog()
        .into_iter()
        .find(|d| d.label() == label)
        .map(|d| d.id)
}

/// Formats an optional value for display, using "—" when `None`.
pub fn opt_display(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "—".to_string())
}

/// Shows a workflow notification as a toast in `window`.
pub fn push_toast(
    note: &Notification,
    window: &mut Window,
    cx: &mut App,
) {
    let toast = if note.is_error() {
        Toast::error(note.message.clone())
    } else {
        Toast::success(note.message.clone())
    };
    window.push_notification(toast.title(note.title.clone()), cx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn driver_labels_round_trip_to_ids() {
        for driver in driver_catalog() {
            assert_eq!(driver_id_from_label(&driver.label()), Some(driver.id));
        }
    }

    #[test]
    fn bare_name_is_not_a_label() {
        assert_eq!(driver_id_from_label("Jane Smith"), None);
    }

    #[test]
    fn opt_display_falls_back_to_dash() {
        assert_eq!(opt_display(&None), "—");
        assert_eq!(opt_display(&Some("x".into())), "x");
    }
}
