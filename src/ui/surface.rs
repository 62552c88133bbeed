// Write-only drawing target for components, backed by a ratatui Buffer.

use ratatui::{buffer::Buffer, layout::Rect, style::{Color, Style, Stylize}};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Default,
    Highlighted,
    Selected,
}

impl From<TextStyle> for Style {
    fn from(style: TextStyle) -> Self {
        match style {
            // reset(): Style::default() leaves existing cell colors in place
            TextStyle::Default => Style::reset(),
            TextStyle::Highlighted => Style::reset().fg(Color::Cyan).bold(),
            TextStyle::Selected => Style::reset().fg(Color::Black).bg(Color::Cyan),
        }
    }
}

/// Columns and rows are relative to the surface origin.
pub trait Surface {
    fn width(&self) -> u16;
    fn height(&self) -> u16;
    fn write(&mut self, x: u16, y: u16, text: &str, style: TextStyle);
}

/// A rectangle of a ratatui buffer. Writes outside the rectangle are clipped.
pub struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl<'a> BufferSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        let area = area.intersection(buf.area);
        Self { buf, area }
    }
}

impl Surface for BufferSurface<'_> {
    fn width(&self) -> u16 {
        self.area.width
    }

    fn height(&self) -> u16 {
        self.area.height
    }

    fn write(&mut self, x: u16, y: u16, text: &str, style: TextStyle) {
        if x >= self.area.width || y >= self.area.height {
            return;
        }
        let max_width = (self.area.width - x) as usize;
        self.buf.set_stringn(self.area.x + x, self.area.y + y, text, max_width, Style::from(style));
    }
}
