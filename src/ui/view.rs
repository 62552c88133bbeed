// Frame description produced by a component's render(), drawn onto a Surface.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::surface::{BufferSurface, Surface, TextStyle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLine {
    pub text: String,
    pub style: TextStyle,
    /// Pad with spaces to the surface width so the style covers the whole row.
    pub fill: bool,
}

impl ViewLine {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: TextStyle::Default, fill: false }
    }

    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self { text: text.into(), style, fill: false }
    }

    pub fn bar(text: impl Into<String>, style: TextStyle) -> Self {
        Self { text: text.into(), style, fill: true }
    }

    pub fn blank() -> Self {
        Self::plain("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub lines: Vec<ViewLine>,
    /// Rows the component owns, cleared on every draw.
    pub height: u16,
}

impl View {
    pub fn text(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    /// Clear the owned region, then write each line starting at `origin_y`.
    pub fn draw(&self, surface: &mut impl Surface, origin_y: u16) {
        let width = surface.width() as usize;
        let blank = " ".repeat(width);
        for row in 0..self.height {
            let Some(y) = origin_y.checked_add(row) else { break };
            if y >= surface.height() {
                break;
            }
            surface.write(0, y, &blank, TextStyle::Default);
        }

        for (row, line) in self.lines.iter().enumerate() {
            let Some(y) = u16::try_from(row).ok().and_then(|r| origin_y.checked_add(r)) else { break };
            if y >= surface.height() {
                break;
            }
            if line.fill {
                let padded = format!("{:<width$}", line.text, width = width);
                surface.write(0, y, &padded, line.style);
            } else if !line.text.is_empty() {
                surface.write(0, y, &line.text, line.style);
            }
        }
    }
}

impl Widget for &View {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut surface = BufferSurface::new(buf, area);
        self.draw(&mut surface, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn draw_clears_the_whole_owned_region() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 4));
        for y in 0..4 {
            buf.set_string(0, y, "xxxxxxxx", ratatui::style::Style::default().bg(Color::Cyan));
        }
        let view = View { lines: vec![ViewLine::plain("hi")], height: 3 };
        let area = buf.area;
        (&view).render(area, &mut buf);

        assert_eq!(row(&buf, 0), "hi      ");
        assert_eq!(row(&buf, 1), "        ");
        assert_eq!(buf[(5, 2)].bg, Color::Reset);
        // outside the owned height
        assert_eq!(row(&buf, 3), "xxxxxxxx");
    }

    #[test]
    fn bar_lines_fill_the_width() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        let view = View { lines: vec![ViewLine::bar("ab", TextStyle::Selected)], height: 1 };
        let area = buf.area;
        (&view).render(area, &mut buf);

        assert_eq!(buf[(5, 0)].bg, Color::Cyan);
        assert_eq!(row(&buf, 0), "ab    ");
    }
}
