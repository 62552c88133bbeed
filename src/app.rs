// Event loop: draw, read one event, feed the selector, repeat until it completes.
// ref: ratatui app patterns — https://ratatui.rs/concepts/application-patterns/

use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info, trace};

use crate::{
    event::{poll_event, HostEvent},
    model::item::{Completion, Item},
    selector::Selector,
    tui::Tui,
    ui::{self, component::Component},
};

const TICK_MS: u64 = 100;
/// Row the selector starts on.
const ORIGIN_Y: u16 = 0;

pub struct App<T> {
    selector: Selector<T>,
}

impl<T> App<T> {
    pub fn new(selector: Selector<T>) -> Self {
        Self { selector }
    }

    pub fn run(mut self, terminal: &mut Tui) -> Result<Completion<Item<T>>> {
        let size = terminal.size()?;
        self.selector.on_attach(size, ORIGIN_Y);
        info!(
            width = size.width,
            height = size.height,
            capacity = self.selector.viewport_capacity(),
            "selector attached"
        );

        while !self.selector.is_complete() {
            terminal.draw(|frame| ui::render(frame, &self.selector, ORIGIN_Y))?;
            if let Some(event) = poll_event(Duration::from_millis(TICK_MS))? {
                self.handle_event(event);
            }
        }

        match self.selector.selected() {
            Some(item) => info!(value = item.value(), "confirmed"),
            None => info!("cancelled"),
        }
        Ok(self.selector.into_completion())
    }

    fn handle_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::Key(key) => {
                if !self.selector.handle_input(key) {
                    trace!(?key, "key ignored");
                    return;
                }
                trace!(
                    ?key,
                    filter = self.selector.filter_text(),
                    matches = self.selector.filtered_len(),
                    selected = self.selector.selected_index(),
                    scroll = self.selector.scroll_offset(),
                    "key applied"
                );
            }
            HostEvent::Resize(size) => {
                debug!(width = size.width, height = size.height, "terminal resized");
                self.selector.on_resize(size);
            }
            HostEvent::Focus(focused) => self.selector.on_focus(focused),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Key;
    use ratatui::layout::Size;

    fn app(n: usize) -> App<usize> {
        let items = (0..n).map(|i| Item::new(format!("row {i}"), format!("{i}"), i)).collect();
        let mut app = App::new(Selector::new(items, "Pick"));
        app.selector.on_attach(Size::new(80, 30), ORIGIN_Y);
        app
    }

    #[test]
    fn keys_drive_the_selector_to_confirmation() {
        let mut app = app(30);
        for event in [
            HostEvent::Key(Key::Char('2')),
            HostEvent::Key(Key::Down),
            HostEvent::Key(Key::Other),
            HostEvent::Key(Key::Confirm),
        ] {
            app.handle_event(event);
        }
        assert!(app.selector.is_complete());
        let picked = app.selector.into_completion().confirmed().map(|i| *i.payload());
        assert_eq!(picked, Some(12));
    }

    #[test]
    fn resize_events_reach_the_selector() {
        let mut app = app(30);
        assert_eq!(app.selector.viewport_capacity(), 20);
        for _ in 0..15 {
            app.handle_event(HostEvent::Key(Key::Down));
        }
        app.handle_event(HostEvent::Resize(Size::new(80, 12)));
        assert_eq!(app.selector.viewport_capacity(), 7);
        assert_eq!(app.selector.scroll_offset(), 9);
    }

    #[test]
    fn focus_events_toggle_indicator() {
        let mut app = app(3);
        app.handle_event(HostEvent::Focus(false));
        let view = app.selector.render();
        assert_eq!(view.text().last().copied(), Some("Showing 3 items"));
    }

    #[test]
    fn cancel_ends_without_item() {
        let mut app = app(3);
        app.handle_event(HostEvent::Key(Key::Cancel));
        assert_eq!(app.selector.into_completion(), Completion::Cancelled);
    }
}
