//! Application state and message handling.
//!
//! [`App`] is the screen root: it owns the fixed menu, the lazy list window,
//! the state of every mounted row and the activity log. All mutation goes
//! through [`App::update`].

use crate::config::Config;
use crate::constants;
use crate::message::{self, HitTarget, Message};
use crate::state::{menu, Dish, LazyListState, RowState, RowStore};
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::collections::VecDeque;

/// Screen root state.
pub struct App {
    /// The fixed menu.
    pub menu: &'static [Dish],
    /// Index of the highlighted row.
    pub selected: usize,
    /// Scroll window of the list.
    pub list: LazyListState,
    /// State of the mounted rows.
    pub rows: RowStore,
    /// Activity log, oldest first.
    pub logs: VecDeque<String>,
    /// Whether the activity log panel is open.
    pub show_log: bool,
    /// Keep row state when rows scroll out of view.
    pub retain_offscreen_rows: bool,
    /// Set once the user asks to leave.
    pub should_quit: bool,
    /// Clickable regions from the last render, back to front.
    pub hit_targets: Vec<HitTarget>,
    /// Area of the dialog from the last render.
    pub dialog_area: Option<Rect>,
}

impl App {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let mut app = Self {
            menu: menu(),
            selected: 0,
            list: LazyListState::default(),
            rows: RowStore::default(),
            logs: VecDeque::with_capacity(constants::MAX_LOG_LINES),
            show_log: config.show_log,
            retain_offscreen_rows: config.retain_offscreen_rows,
            should_quit: false,
            hit_targets: Vec::new(),
            dialog_area: None,
        };
        app.log(format!(
            "{}{} v{} starting...",
            constants::LOG_INIT,
            constants::APP_NAME,
            constants::APP_VERSION
        ));
        app
    }

    /// Appends a line to the activity log, dropping the oldest past the cap.
    pub fn log(&mut self, line: impl Into<String>) {
        if self.logs.len() == constants::MAX_LOG_LINES {
            self.logs.pop_front();
        }
        self.logs.push_back(line.into());
    }

    /// Row whose dialog is showing.
    #[must_use]
    pub fn open_dialog(&self) -> Option<usize> {
        self.rows.open_dialog()
    }

    /// State of a row, if mounted.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&RowState> {
        self.rows.get(index)
    }

    /// Layout pass for the list: records how many rows fit, keeps the
    /// selection on screen, mounts visible rows and unmounts the rest.
    pub fn layout_list(&mut self, visible_rows: usize) {
        self.list.update_viewport(visible_rows, self.menu.len());
        self.list.ensure_visible(self.selected);

        let range = self.list.visible_range();
        for index in range.clone() {
            self.rows.mount(index);
        }

        if self.retain_offscreen_rows {
            return;
        }
        for (index, state) in self.rows.unmount_outside(&range) {
            if state.count() > 0 {
                let name = self.menu[index].name;
                self.log(format!(
                    "{}{name} scrolled away, count {} discarded",
                    constants::LOG_UNMOUNT,
                    state.count()
                ));
            }
        }
    }

    /// Applies one message.
    pub fn update(&mut self, msg: Message) {
        if self.open_dialog().is_some() && !msg.allowed_while_modal() {
            return;
        }

        match msg {
            Message::SelectPrevious => self.select(self.selected.saturating_sub(1)),
            Message::SelectNext => self.select(self.selected + 1),
            Message::SelectFirst => self.select(0),
            Message::SelectLast => self.select(self.menu.len().saturating_sub(1)),
            Message::Select(index) => self.select(index),
            Message::Increment(index) => self.increment(index),
            Message::Decrement(index) => self.decrement(index),
            Message::IncrementSelected => self.increment(self.selected),
            Message::DecrementSelected => self.decrement(self.selected),
            Message::DismissDialog(index) => self.dismiss_dialog(index),
            Message::ToggleLog => self.show_log = !self.show_log,
            Message::Quit => self.should_quit = true,
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(msg) = message::from_key(key, self.open_dialog()) {
            self.update(msg);
        }
    }

    /// Handles a mouse event against the hit targets of the last render.
    ///
    /// With a dialog open, a click on its button or anywhere outside it
    /// dismisses it; clicks inside the dialog body do nothing.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.open_dialog() {
                    let inside = self
                        .dialog_area
                        .is_some_and(|area| area.contains(position));
                    match self.target_at(position) {
                        Some(msg @ Message::DismissDialog(_)) => self.update(msg),
                        _ if !inside => self.update(Message::DismissDialog(index)),
                        _ => {}
                    }
                    return;
                }
                if let Some(msg) = self.target_at(position) {
                    self.update(msg);
                }
            }
            MouseEventKind::ScrollUp => self.update(Message::SelectPrevious),
            MouseEventKind::ScrollDown => self.update(Message::SelectNext),
            _ => {}
        }
    }

    /// Topmost hit target under `position`.
    fn target_at(&self, position: Position) -> Option<Message> {
        self.hit_targets
            .iter()
            .rev()
            .find(|target| target.area.contains(position))
            .map(|target| target.message)
    }

    fn select(&mut self, index: usize) {
        if self.menu.is_empty() {
            return;
        }
        self.selected = index.min(self.menu.len() - 1);
        self.list.ensure_visible(self.selected);
    }

    fn increment(&mut self, index: usize) {
        let Some(name) = self.menu.get(index).map(|dish| dish.name) else {
            return;
        };
        let row = self.rows.mount(index);
        row.increment();
        let count = row.count();
        self.log(format!("{}{name} (count {count})", constants::LOG_ORDER));
    }

    fn decrement(&mut self, index: usize) {
        let Some(name) = self.menu.get(index).map(|dish| dish.name) else {
            return;
        };
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        if row.decrement() {
            let count = row.count();
            self.log(format!("{}{name} (count {count})", constants::LOG_REMOVE));
        }
    }

    fn dismiss_dialog(&mut self, index: usize) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        if row.is_dialog_visible() {
            row.dismiss_dialog();
            let name = self.menu[index].name;
            self.log(format!("{}{name} dismissed", constants::LOG_DIALOG));
        }
    }
}
