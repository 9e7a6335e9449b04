//! Footer widget with context-aware keybinding hints

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render footer; the dialog narrows the hints to what it accepts.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if app.open_dialog().is_some() {
        render_hints(frame, area, &[("Enter", "Close"), ("Click", "Close"), ("^C", "Quit")]);
        return;
    }

    let mut hints = vec![("↑↓", "Select"), ("+", "Order"), ("-", "Remove")];
    hints.push(if app.show_log {
        ("L", "Hide Log")
    } else {
        ("L", "Log")
    });
    hints.push(("q", "Quit"));

    render_hints(frame, area, &hints);
}

fn render_hints(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(18)]).areas(area);

    let mut hint_spans = vec![Span::raw(" ")];
    let mut current_width = 1;
    let max_width = usize::from(left.width);

    for (i, (key, action)) in hints.iter().enumerate() {
        // " │ " separator before every hint but the first
        let sep_width = if i > 0 { 3 } else { 0 };
        let item_width = key.chars().count() + 1 + action.len() + sep_width;

        if current_width + item_width > max_width {
            break;
        }

        if i > 0 {
            hint_spans.push(Span::styled(
                " │ ",
                Style::default().fg(Color::Rgb(50, 50, 50)),
            ));
        }
        hint_spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        hint_spans.push(Span::raw(" "));
        hint_spans.push(Span::styled(*action, Style::default().fg(Color::DarkGray)));

        current_width += item_width;
    }
    frame.render_widget(Paragraph::new(Line::from(hint_spans)), left);

    let branding = Line::from(Span::styled(
        format!(
            "{} v{} ",
            crate::constants::APP_NAME,
            crate::constants::APP_VERSION
        ),
        Style::default().fg(crate::theme::NORD_POLAR_NIGHT_4),
    ));
    frame.render_widget(Paragraph::new(branding).alignment(Alignment::Right), right);
}
