//! UI rendering module

mod menu_screen;
mod overlays;
mod widgets;

use crate::app::App;
use ratatui::Frame;

/// Main render function - draws the screen, then the dialog on top.
///
/// Hit targets are rebuilt from scratch on every frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_targets.clear();
    app.dialog_area = None;

    menu_screen::render(frame, app);

    if let Some(index) = app.open_dialog() {
        overlays::dialog::render(frame, app, index);
    }
}
