use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::style::Style;
use ratatui::text::Text;
use ratatui::widgets::{Paragraph, Wrap};

use crate::components::Component;
use crate::event::{MouseAction, MouseOutcome};
use crate::rect::{Point, Rect};
use crate::ui::ClippedCanvas;

/// Scrollable block of text. Claims clicks to take focus and scrolls with the
/// wheel or the arrow/page keys while focused.
#[derive(Debug)]
pub struct TextPanel {
    text: Text<'static>,
    style: Style,
    wrap: bool,
    offset: usize,
    view: usize,
    focused: bool,
}

impl TextPanel {
    pub fn new(text: impl Into<Text<'static>>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
            wrap: true,
            offset: 0,
            view: 0,
            focused: false,
        }
    }

    pub fn set_text(&mut self, text: impl Into<Text<'static>>) {
        self.text = text.into();
        self.offset = 0;
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line_count(&self) -> usize {
        self.text.lines.len()
    }

    fn max_offset(&self) -> usize {
        self.line_count().saturating_sub(self.view.max(1))
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let next = if delta.is_negative() {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta as usize)
        };
        self.offset = next.min(self.max_offset());
    }
}

impl Default for TextPanel {
    fn default() -> Self {
        Self::new(Text::default())
    }
}

impl Component for TextPanel {
    fn render(&mut self, canvas: &mut ClippedCanvas<'_>, area: Rect) {
        if area.is_empty() {
            return;
        }
        self.view = area.height as usize;
        self.offset = self.offset.min(self.max_offset());
        let mut paragraph = Paragraph::new(self.text.clone()).style(self.style);
        if self.wrap {
            paragraph = paragraph.wrap(Wrap { trim: false });
        }
        paragraph = paragraph.scroll((self.offset.min(u16::MAX as usize) as u16, 0));
        canvas.render_widget(paragraph, area);
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn handle_mouse(
        &mut self,
        action: MouseAction,
        _position: Point,
        request_focus: &mut dyn FnMut(),
    ) -> MouseOutcome {
        match action {
            MouseAction::LeftDown => {
                request_focus();
                MouseOutcome::Consumed
            }
            MouseAction::ScrollUp => {
                self.scroll_by(-1);
                MouseOutcome::Consumed
            }
            MouseAction::ScrollDown => {
                self.scroll_by(1);
                MouseOutcome::Consumed
            }
            _ => MouseOutcome::Ignored,
        }
    }

    fn handle_key(&mut self, event: &KeyEvent, _request_focus: &mut dyn FnMut()) -> bool {
        if event.kind == KeyEventKind::Release {
            return false;
        }
        let page = self.view.max(1) as isize;
        match event.code {
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::PageDown => self.scroll_by(page),
            KeyCode::Home => self.offset = 0,
            KeyCode::End => self.offset = self.max_offset(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_line;
    use crossterm::event::KeyModifiers;
    use ratatui::buffer::Buffer;
    use ratatui::layout;
    use ratatui::text::Line;

    fn panel_with_lines(count: usize) -> TextPanel {
        let lines: Vec<Line<'static>> = (0..count).map(|i| Line::from(format!("line {i}"))).collect();
        TextPanel::new(Text::from(lines))
    }

    #[test]
    fn keys_scroll_within_bounds() {
        let mut panel = panel_with_lines(10);
        let mut buf = Buffer::empty(layout::Rect::new(0, 0, 10, 4));
        let mut cursor = None;
        let mut canvas = ClippedCanvas::new(&mut buf, &mut cursor);
        panel.render(&mut canvas, Rect::new(0, 0, 10, 4));

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert!(panel.handle_key(&down, &mut || {}));
        assert_eq!(panel.offset(), 1);
        let end = KeyEvent::new(KeyCode::End, KeyModifiers::NONE);
        panel.handle_key(&end, &mut || {});
        assert_eq!(panel.offset(), 6);
        panel.handle_key(&down, &mut || {});
        assert_eq!(panel.offset(), 6);
        let other = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(!panel.handle_key(&other, &mut || {}));
    }

    #[test]
    fn left_down_requests_focus() {
        let mut panel = panel_with_lines(1);
        let mut asked = 0;
        let outcome = panel.handle_mouse(MouseAction::LeftDown, Point::new(0, 0), &mut || {
            asked += 1
        });
        assert_eq!(outcome, MouseOutcome::Consumed);
        assert_eq!(asked, 1);
    }

    #[test]
    fn render_honours_scroll_offset() {
        let mut panel = panel_with_lines(5);
        panel.set_wrap(false);
        let mut buf = Buffer::empty(layout::Rect::new(0, 0, 6, 2));
        let mut cursor = None;
        {
            let mut canvas = ClippedCanvas::new(&mut buf, &mut cursor);
            panel.render(&mut canvas, Rect::new(0, 0, 6, 2));
        }
        assert_eq!(buffer_line(&buf, 0, 0, 6), "line 0");
        panel.scroll_by(2);
        {
            let mut canvas = ClippedCanvas::new(&mut buf, &mut cursor);
            panel.render(&mut canvas, Rect::new(0, 0, 6, 2));
        }
        assert_eq!(buffer_line(&buf, 0, 0, 6), "line 2");
        assert_eq!(buffer_line(&buf, 0, 1, 6), "line 3");
    }
}
