// Filterable single-select list: filter text, selection cursor and scroll window.
// Pure state machine; drawing goes through the View it renders.

use std::borrow::Cow;

use ratatui::layout::Size;
use tracing::debug;

use crate::{
    event::Key,
    model::item::{Completion, Item},
    ui::{
        component::Component,
        surface::TextStyle,
        view::{View, ViewLine},
    },
};

/// Prompt, instructions, blank separator, filter echo, status.
pub const OVERHEAD_LINES: u16 = 5;
pub const MIN_VIEWPORT: usize = 5;
pub const MAX_VIEWPORT: usize = 20;

const INSTRUCTIONS: &str = "↑/↓ navigate  ·  type to filter  ·  Enter confirm  ·  Esc cancel";
const NO_MATCHES: &str = "No matching options found.";
const MARKER: &str = "► ";
const UNMARKED: &str = "  ";
const FOCUS_INDICATOR: &str = "  [active]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Pending,
    /// Index into `items`.
    Confirmed(usize),
    Cancelled,
}

pub struct Selector<T> {
    prompt: String,
    items: Vec<Item<T>>,
    case_sensitive: bool,
    filter: String,
    /// Indices into `items`, in original order.
    filtered: Vec<usize>,
    selected: usize,
    scroll: usize,
    capacity: usize,
    origin_y: u16,
    focused: bool,
    outcome: Outcome,
}

impl<T> Selector<T> {
    pub fn new(items: Vec<Item<T>>, prompt: impl Into<String>) -> Self {
        let filtered = (0..items.len()).collect();
        Self {
            prompt: prompt.into(),
            items,
            case_sensitive: false,
            filter: String::new(),
            filtered,
            selected: 0,
            scroll: 0,
            capacity: MIN_VIEWPORT,
            origin_y: 0,
            focused: false,
            outcome: Outcome::Pending,
        }
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn filter_text(&self) -> &str {
        &self.filter
    }

    pub fn filtered_items(&self) -> impl Iterator<Item = &Item<T>> + '_ {
        self.filtered.iter().map(|&i| &self.items[i])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    pub fn viewport_capacity(&self) -> usize {
        self.capacity
    }

    /// Rows the selector occupies on screen.
    pub fn height(&self) -> u16 {
        OVERHEAD_LINES.saturating_add(u16::try_from(self.capacity).unwrap_or(u16::MAX))
    }

    pub fn completion(&self) -> Completion<&Item<T>> {
        match self.outcome {
            Outcome::Pending => Completion::Pending,
            Outcome::Confirmed(i) => Completion::Confirmed(&self.items[i]),
            Outcome::Cancelled => Completion::Cancelled,
        }
    }

    /// The confirmed item; `None` while pending or after cancel.
    pub fn selected(&self) -> Option<&Item<T>> {
        self.completion().confirmed()
    }

    pub fn into_completion(mut self) -> Completion<Item<T>> {
        match self.outcome {
            Outcome::Pending => Completion::Pending,
            Outcome::Confirmed(i) => Completion::Confirmed(self.items.swap_remove(i)),
            Outcome::Cancelled => Completion::Cancelled,
        }
    }

    fn is_done(&self) -> bool {
        self.outcome != Outcome::Pending
    }

    /// Set the number of item rows directly, then pull the window back over the selection.
    pub fn set_viewport_capacity(&mut self, capacity: usize) {
        if self.is_done() {
            return;
        }
        self.capacity = capacity.max(1);
        self.scroll = self.scroll.min(self.max_scroll());
        self.sync_scroll();
    }

    pub fn apply_key(&mut self, key: Key) -> bool {
        if self.is_done() {
            return false;
        }
        match key {
            Key::Up => {
                if !self.filtered.is_empty() {
                    self.selected = match self.selected {
                        0 => self.filtered.len() - 1,
                        i => i - 1,
                    };
                    self.sync_scroll();
                }
                true
            }
            Key::Down => {
                if !self.filtered.is_empty() {
                    self.selected = (self.selected + 1) % self.filtered.len();
                    self.sync_scroll();
                }
                true
            }
            Key::Confirm => {
                // Nothing to confirm on an empty list; stays pending.
                if let Some(&index) = self.filtered.get(self.selected) {
                    debug!(value = self.items[index].value(), "selection confirmed");
                    self.outcome = Outcome::Confirmed(index);
                }
                true
            }
            Key::Cancel => {
                debug!("selection cancelled");
                self.outcome = Outcome::Cancelled;
                true
            }
            Key::Backspace => {
                if self.filter.pop().is_some() {
                    self.refilter();
                }
                true
            }
            Key::Char(c) if !c.is_control() => {
                self.filter.push(c);
                self.refilter();
                true
            }
            Key::Char(_) | Key::Other => false,
        }
    }

    /// Rebuild the filtered view from the full item list.
    fn refilter(&mut self) {
        let needle = self.fold(&self.filter);
        let filtered: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                self.fold(item.display()).contains(needle.as_ref())
                    || self.fold(item.value()).contains(needle.as_ref())
            })
            .map(|(i, _)| i)
            .collect();
        self.filtered = filtered;

        if self.selected >= self.filtered.len() {
            self.selected = self.filtered.len().saturating_sub(1);
        }
        self.scroll = 0;
        self.sync_scroll();
        debug!(filter = %self.filter, matches = self.filtered.len(), "filter changed");
    }

    fn fold<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(text.to_lowercase())
        }
    }

    fn max_scroll(&self) -> usize {
        self.filtered.len().saturating_sub(self.capacity)
    }

    fn sync_scroll(&mut self) {
        self.scroll = compute_scroll(self.selected, self.capacity, self.filtered.len(), self.scroll);
    }

    fn status_line(&self) -> String {
        let len = self.filtered.len();
        let mut status = if len > self.capacity {
            format!("Showing {} of {} items (scrollable)", self.selected + 1, len)
        } else {
            format!("Showing {} items", len)
        };
        if self.focused {
            status.push_str(FOCUS_INDICATOR);
        }
        status
    }
}

/// Item rows available below `origin_y` on a surface `height` rows tall.
pub fn viewport_capacity_for(height: u16, origin_y: u16) -> usize {
    let rows = height.saturating_sub(origin_y).saturating_sub(OVERHEAD_LINES);
    (rows as usize).clamp(MIN_VIEWPORT, MAX_VIEWPORT)
}

/// Compute scroll offset to keep `selected` inside a window of `visible` rows.
pub fn compute_scroll(selected: usize, visible: usize, len: usize, current_offset: usize) -> usize {
    if len <= visible {
        0
    } else if selected < current_offset {
        selected
    } else if selected >= current_offset + visible {
        selected + 1 - visible
    } else {
        current_offset
    }
}

impl<T> Component for Selector<T> {
    fn on_attach(&mut self, size: Size, origin_y: u16) {
        self.origin_y = origin_y;
        self.focused = true;
        self.set_viewport_capacity(viewport_capacity_for(size.height, origin_y));
    }

    fn on_resize(&mut self, size: Size) {
        let capacity = viewport_capacity_for(size.height, self.origin_y);
        debug!(height = size.height, capacity, "viewport resized");
        self.set_viewport_capacity(capacity);
    }

    fn on_focus(&mut self, focused: bool) {
        if !self.is_done() {
            self.focused = focused;
        }
    }

    fn render(&self) -> View {
        let mut lines = Vec::with_capacity(self.height() as usize);
        lines.push(ViewLine::styled(self.prompt.clone(), TextStyle::Highlighted));
        lines.push(ViewLine::plain(INSTRUCTIONS));
        lines.push(ViewLine::blank());
        lines.push(ViewLine::plain(format!("Filter: {}_", self.filter)));

        if self.filtered.is_empty() {
            lines.push(ViewLine::plain(NO_MATCHES));
        } else {
            let end = (self.scroll + self.capacity).min(self.filtered.len());
            for (pos, &index) in self.filtered[self.scroll..end].iter().enumerate() {
                let display = self.items[index].display();
                if self.scroll + pos == self.selected {
                    lines.push(ViewLine::bar(format!("{MARKER}{display}"), TextStyle::Selected));
                } else {
                    lines.push(ViewLine::plain(format!("{UNMARKED}{display}")));
                }
            }
        }

        let list_end = OVERHEAD_LINES as usize - 1 + self.capacity;
        while lines.len() < list_end {
            lines.push(ViewLine::blank());
        }
        lines.push(ViewLine::plain(self.status_line()));

        View { lines, height: self.height() }
    }

    fn handle_input(&mut self, key: Key) -> bool {
        self.apply_key(key)
    }

    fn is_complete(&self) -> bool {
        self.is_done()
    }
}
