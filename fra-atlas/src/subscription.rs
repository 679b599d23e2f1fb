use iced::Subscription;

use crate::app::{App, AppEvent};

/// Build the active subscription set.
pub(super) fn subscription(_app: &App) -> Subscription<AppEvent> {
    iced::keyboard::listen().map(AppEvent::Keyboard)
}
