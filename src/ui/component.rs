// Lifecycle hooks shared by interactive console components.

use ratatui::layout::Size;

use crate::event::Key;
use super::view::View;

pub trait Component {
    /// First placement on a surface of `size`, with the component's top row at `origin_y`.
    fn on_attach(&mut self, size: Size, origin_y: u16);

    fn on_resize(&mut self, size: Size);

    fn on_focus(&mut self, _focused: bool) {}

    fn render(&self) -> View;

    /// Returns whether the key was consumed.
    fn handle_input(&mut self, key: Key) -> bool;

    fn is_complete(&self) -> bool;
}
