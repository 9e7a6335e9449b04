//! Order confirmation dialog.
//!
//! Stateless: it only needs the dish name and the row that owns it, whose
//! `DismissDialog` message plays the part of the dismiss callback.

use crate::app::App;
use crate::constants::{DIALOG_BODY, DIALOG_CONFIRM, DIALOG_TITLE_PREFIX, DIALOG_TITLE_SUFFIX};
use crate::message::{HitTarget, Message};
use crate::theme;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Padding, Paragraph},
    Frame,
};

const DIALOG_HEIGHT: u16 = 7;
const DIALOG_MIN_WIDTH: u16 = 30;

/// Render the dialog for row `index` and register its button.
pub fn render(frame: &mut Frame, app: &mut App, index: usize) {
    let name = app.menu[index].name;
    let title = Line::from(Span::styled(
        format!("{DIALOG_TITLE_PREFIX}{name}{DIALOG_TITLE_SUFFIX}"),
        Style::default()
            .fg(theme::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    ));
    let body = Line::from(Span::styled(
        DIALOG_BODY,
        Style::default().fg(theme::TEXT_PRIMARY),
    ));

    // borders + horizontal padding
    let content_width = title.width().max(body.width()) + 6;
    let width = u16::try_from(content_width)
        .unwrap_or(u16::MAX)
        .max(DIALOG_MIN_WIDTH);
    let area = centered_rect(width, DIALOG_HEIGHT, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER_FOCUSED))
        .style(Style::default().bg(theme::DIALOG_BG))
        .padding(Padding::horizontal(2));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, _, body_area, _, button_row] =
        Layout::vertical([Constraint::Length(1); 5]).areas(inner);

    frame.render_widget(Paragraph::new(title), title_area);
    frame.render_widget(Paragraph::new(body), body_area);

    let label = Line::from(Span::styled(
        format!("[ {DIALOG_CONFIRM} ]"),
        Style::default()
            .fg(theme::ACCENT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    ));
    let label_width = u16::try_from(label.width())
        .unwrap_or(u16::MAX)
        .min(button_row.width);
    let button = Rect {
        x: button_row.right().saturating_sub(label_width),
        width: label_width,
        ..button_row
    };
    frame.render_widget(Paragraph::new(label), button);

    app.hit_targets.push(HitTarget {
        area: button,
        message: Message::DismissDialog(index),
    });
    app.dialog_area = Some(area);
}

/// Create a centered rectangle with fixed dimensions
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside() {
        let outer = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(30, 7, outer);
        assert_eq!(rect.width, 30);
        assert_eq!(rect.height, 7);
        assert_eq!(rect.x, 25);
        assert_eq!(outer.intersection(rect), rect);
    }
}
