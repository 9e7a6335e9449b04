//! Activity log panel.

use crate::app::App;
use crate::constants::{self, TITLE_ACTIVITY};
use crate::theme;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Render the newest log lines that fit into `area`.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::bordered()
        .title(TITLE_ACTIVITY)
        .border_style(Style::default().fg(theme::BORDER_DEFAULT));
    let capacity = usize::from(block.inner(area).height);

    let lines: Vec<Line> = app
        .logs
        .iter()
        .skip(app.logs.len().saturating_sub(capacity))
        .map(|line| styled_line(line))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Color the `PREFIX: ` part of a log line by kind.
fn styled_line(line: &str) -> Line<'_> {
    let Some(split) = line.find(": ").map(|pos| pos + 2) else {
        return Line::from(Span::styled(line, Style::default().fg(theme::TEXT_PRIMARY)));
    };
    let (prefix, rest) = line.split_at(split);

    Line::from(vec![
        Span::styled(prefix, Style::default().fg(prefix_color(prefix))),
        Span::styled(rest, Style::default().fg(theme::TEXT_PRIMARY)),
    ])
}

fn prefix_color(prefix: &str) -> Color {
    match prefix {
        constants::LOG_ORDER => theme::NORD_GREEN,
        constants::LOG_REMOVE => theme::NORD_ORANGE,
        constants::LOG_DIALOG => theme::NORD_YELLOW,
        constants::LOG_UNMOUNT => theme::NORD_RED,
        _ => theme::ACCENT_PRIMARY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_line_splits_prefix() {
        let line = styled_line("ORDER: Pizza (count 1)");
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content, "ORDER: ");
        assert_eq!(line.spans[0].style.fg, Some(theme::NORD_GREEN));
        assert_eq!(line.spans[1].content, "Pizza (count 1)");
    }

    #[test]
    fn test_styled_line_without_prefix() {
        let line = styled_line("plain text");
        assert_eq!(line.spans.len(), 1);
    }

    #[test]
    fn test_unknown_prefix_uses_accent() {
        assert_eq!(prefix_color("INIT: "), theme::ACCENT_PRIMARY);
        assert_eq!(prefix_color("UNMOUNT: "), theme::NORD_RED);
    }
}
