//! ClippedCanvas: a view over a `ratatui` buffer that discards every write
//! falling outside a clip rectangle.
//!
//! Windows and their hosted components paint through this type. The window
//! manager hands each window a canvas clipped to exactly that window's
//! rectangle, and each window hands its component a canvas clipped to its
//! interior, so misbehaving content can never paint over a neighbour.
//!
//! Coordinates are absolute buffer coordinates in signed space; negative or
//! out-of-region positions are silently ignored.
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::rect::Rect;

pub struct ClippedCanvas<'a> {
    clip: Rect,
    buffer: &'a mut Buffer,
    cursor: &'a mut Option<Position>,
}

impl<'a> ClippedCanvas<'a> {
    /// Canvas covering the whole buffer. The cursor slot receives the last
    /// position passed to [`ClippedCanvas::show_cursor`].
    pub fn new(buffer: &'a mut Buffer, cursor: &'a mut Option<Position>) -> Self {
        let clip = Rect::from(buffer.area);
        Self {
            clip,
            buffer,
            cursor,
        }
    }

    /// The region writes are restricted to.
    pub fn area(&self) -> Rect {
        self.clip
    }

    pub fn in_rect(&self, x: i32, y: i32) -> bool {
        self.clip.contains(x, y)
    }

    /// Narrow the canvas further. The result never exceeds the current clip.
    pub fn clip(&mut self, rect: Rect) -> ClippedCanvas<'_> {
        ClippedCanvas {
            clip: self.clip.intersection(rect),
            buffer: &mut *self.buffer,
            cursor: &mut *self.cursor,
        }
    }

    pub fn set_cell(&mut self, x: i32, y: i32, symbol: &str, style: Style) {
        if !self.in_rect(x, y) {
            return;
        }
        if let Some(cell) = self.buffer.cell_mut((x as u16, y as u16)) {
            cell.set_symbol(symbol);
            cell.set_style(style);
        }
    }

    pub fn set_char(&mut self, x: i32, y: i32, ch: char, style: Style) {
        if !self.in_rect(x, y) {
            return;
        }
        if let Some(cell) = self.buffer.cell_mut((x as u16, y as u16)) {
            cell.set_char(ch);
            cell.set_style(style);
        }
    }

    /// Print `text` one char per cell starting at `(x, y)`. Returns the number
    /// of columns advanced, including clipped ones.
    pub fn print(&mut self, x: i32, y: i32, text: &str, style: Style) -> i32 {
        let mut column = x;
        for ch in text.chars() {
            self.set_char(column, y, ch, style);
            column += 1;
        }
        column - x
    }

    pub fn fill(&mut self, ch: char, style: Style) {
        let area = self.clip;
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                self.set_char(x, y, ch, style);
            }
        }
    }

    pub fn clear(&mut self) {
        self.fill(' ', Style::default());
    }

    /// Record the cursor position if it lies inside the clip region.
    pub fn show_cursor(&mut self, x: i32, y: i32) {
        if self.in_rect(x, y) {
            *self.cursor = Some(Position::new(x as u16, y as u16));
        }
    }

    /// Render a ratatui widget into `area`, restricted to the clip region.
    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip.intersection(area).to_layout() {
            widget.render(clipped, self.buffer);
        }
    }
}

/// Read one buffer row back as a string, for asserting on rendered output.
/// Integration tests link the library without `cfg(test)`, so this stays public.
pub fn buffer_line(buffer: &Buffer, x: u16, y: u16, width: u16) -> String {
    (x..x.saturating_add(width))
        .filter_map(|column| buffer.cell((column, y)).map(|cell| cell.symbol().to_string()))
        .collect()
}
