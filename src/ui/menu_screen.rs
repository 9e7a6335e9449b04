//! The menu screen: top app bar, lazily mounted dish list, footer.

use super::widgets;
use crate::app::App;
use crate::constants::{
    LIST_PADDING, LIST_SPACING, LOG_PANEL_HEIGHT, ROW_HEIGHT, TITLE_MENU, TOP_BAR_HEIGHT,
};
use crate::theme;
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    let log_height = if app.show_log { LOG_PANEL_HEIGHT } else { 0 };

    let [top_bar, _spacing, body, log, footer] = Layout::vertical([
        Constraint::Length(TOP_BAR_HEIGHT),
        Constraint::Length(LIST_SPACING),
        Constraint::Min(0),
        Constraint::Length(log_height),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_top_bar(frame, top_bar);
    render_list(frame, app, body);

    if app.show_log {
        widgets::activity_log::render(frame, app, log);
    }
    widgets::footer::render(frame, app, footer);
}

fn render_top_bar(frame: &mut Frame, area: Rect) {
    let block = Block::new()
        .style(Style::default().bg(theme::TOP_BAR_BG))
        .padding(Padding::new(2, 2, 1, 0));

    let title = Line::from(Span::styled(
        TITLE_MENU,
        Style::default()
            .fg(theme::TOP_BAR_FG)
            .add_modifier(Modifier::BOLD),
    ));

    frame.render_widget(Paragraph::new(title).block(block), area);
}

/// Lay out as many cards as fit, starting at the list's first visible item.
fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let list_area = area.inner(Margin::new(LIST_PADDING, 0));
    let visible_rows = usize::from(list_area.height / ROW_HEIGHT).max(1);
    app.layout_list(visible_rows);

    let range = app.list.visible_range();
    let first = range.start;
    for index in range {
        let offset = u16::try_from(index - first)
            .unwrap_or(u16::MAX)
            .saturating_mul(ROW_HEIGHT);
        let card = Rect {
            x: list_area.x,
            y: list_area.y.saturating_add(offset),
            width: list_area.width,
            height: ROW_HEIGHT,
        }
        .intersection(list_area);

        if !card.is_empty() {
            widgets::dish_row::render(frame, app, index, card);
        }
    }

    if app.list.can_scroll() && area.width > 0 && area.height >= 3 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .style(Style::default().fg(theme::NORD_POLAR_NIGHT_4))
            .thumb_style(Style::default().fg(theme::ACCENT_PRIMARY));

        let mut scrollbar_state =
            ScrollbarState::new(app.menu.len().saturating_sub(app.list.visible_count()))
                .position(app.list.first_visible_item_index());

        let scroll_area = Rect {
            x: area.right().saturating_sub(1),
            y: area.y,
            width: 1,
            height: area.height,
        };
        frame.render_stateful_widget(scrollbar, scroll_area, &mut scrollbar_state);
    }
}
