//! One dish card: picture, name, quantity and the two counter buttons.

use crate::app::App;
use crate::constants::{BUTTON_DECREMENT, BUTTON_INCREMENT, LABEL_QUANTITY};
use crate::message::{HitTarget, Message};
use crate::state::RowState;
use crate::theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

/// Render the card for `index` into `area` and register its click targets.
pub fn render(frame: &mut Frame, app: &mut App, index: usize, area: Rect) {
    let dish = app.menu[index];
    let count = app.row(index).map_or(0, RowState::count);

    let border = if app.selected == index {
        theme::BORDER_FOCUSED
    } else {
        theme::BORDER_DEFAULT
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.hit_targets.push(HitTarget {
        area,
        message: Message::Select(index),
    });

    let [image, details, minus, plus] = Layout::horizontal([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Length(5),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(dish.image.glyph()).alignment(Alignment::Center),
        middle_line(image),
    );

    let details_text = vec![
        Line::from(Span::styled(
            dish.name,
            Style::default()
                .fg(theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{LABEL_QUANTITY}{count}"),
            Style::default().fg(theme::TEXT_SECONDARY),
        )),
    ];
    frame.render_widget(Paragraph::new(details_text), details);

    render_button(
        frame,
        app,
        middle_line(minus),
        BUTTON_DECREMENT,
        theme::BUTTON_DECREMENT,
        Message::Decrement(index),
    );
    render_button(
        frame,
        app,
        middle_line(plus),
        BUTTON_INCREMENT,
        theme::BUTTON_INCREMENT,
        Message::Increment(index),
    );
}

fn render_button(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    label: &'static str,
    color: Color,
    message: Message,
) {
    if area.is_empty() {
        return;
    }
    let button = Paragraph::new(Span::styled(
        label,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(button, area);
    app.hit_targets.push(HitTarget { area, message });
}

/// Single-line strip through the vertical middle of `area`.
fn middle_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    }
}
