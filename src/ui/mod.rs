// Layout orchestration: components render a View, the View is drawn into the frame.

pub mod component;
pub mod surface;
pub mod view;

use ratatui::{layout::Rect, Frame};

use component::Component;

/// Draw `component` with its top row at `origin_y`.
pub fn render(frame: &mut Frame, component: &impl Component, origin_y: u16) {
    let area = frame.area();
    let top = origin_y.min(area.height);
    let region = Rect::new(area.x, area.y + top, area.width, area.height - top);
    let view = component.render();
    frame.render_widget(&view, region);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{event::Key, model::item::Item, selector::Selector};
    use ratatui::{backend::TestBackend, buffer::Buffer, layout::Size, style::Color, Terminal};

    fn draw(terminal: &mut Terminal<TestBackend>, sel: &Selector<()>, origin_y: u16) -> Buffer {
        terminal.draw(|frame| render(frame, sel, origin_y)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol().to_string()).collect::<String>()
    }

    fn fruit() -> Vec<Item<()>> {
        ["apple", "banana", "cherry", "damson", "elder", "fig", "grape"]
            .iter()
            .map(|s| Item::new(*s, *s, ()))
            .collect()
    }

    #[test]
    fn draws_prompt_filter_and_highlight_bar() {
        let mut terminal = Terminal::new(TestBackend::new(30, 12)).unwrap();
        let mut sel = Selector::new(fruit(), "Fruit?");
        sel.on_attach(Size::new(30, 12), 0);
        sel.handle_input(Key::Down);
        let buf = draw(&mut terminal, &sel, 0);

        assert_eq!(row(&buf, 0).trim_end(), "Fruit?");
        assert_eq!(buf[(0, 0)].fg, Color::Cyan);
        assert_eq!(row(&buf, 3).trim_end(), "Filter: _");
        assert_eq!(row(&buf, 4).trim_end(), "  apple");
        assert_eq!(row(&buf, 5).trim_end(), "► banana");
        // highlight spans the full width regardless of text length
        assert_eq!(buf[(29, 5)].bg, Color::Cyan);
        assert_eq!(buf[(29, 4)].bg, Color::Reset);
        assert_eq!(row(&buf, 11).trim_end(), "Showing 7 items  [active]");
    }

    #[test]
    fn shrinking_list_leaves_no_stale_rows() {
        let mut terminal = Terminal::new(TestBackend::new(30, 12)).unwrap();
        let mut sel = Selector::new(fruit(), "Fruit?");
        sel.on_attach(Size::new(30, 12), 0);
        for _ in 0..4 {
            sel.handle_input(Key::Down);
        }
        draw(&mut terminal, &sel, 0);

        sel.handle_input(Key::Char('g'));
        sel.handle_input(Key::Char('r'));
        let buf = draw(&mut terminal, &sel, 0);
        assert_eq!(row(&buf, 4).trim_end(), "► grape");
        for y in 5..11 {
            assert_eq!(row(&buf, y).trim(), "", "row {y}");
            assert_eq!(buf[(10, y)].bg, Color::Reset);
        }
    }

    #[test]
    fn origin_offsets_the_component() {
        let mut terminal = Terminal::new(TestBackend::new(30, 14)).unwrap();
        let mut sel = Selector::new(fruit(), "Fruit?");
        sel.on_attach(Size::new(30, 14), 2);
        let buf = draw(&mut terminal, &sel, 2);
        assert_eq!(row(&buf, 0).trim(), "");
        assert_eq!(row(&buf, 2).trim_end(), "Fruit?");
        assert_eq!(row(&buf, 6).trim_end(), "► apple");
    }
}
