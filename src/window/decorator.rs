use crate::rect::Rect;
use crate::theme;
use crate::ui::ClippedCanvas;
use crate::window::button::WindowButton;

/// Paints window chrome. The canvas passed in is clipped to the window rect.
pub trait WindowDecorator: std::fmt::Debug + Send + Sync {
    fn render_frame(
        &self,
        canvas: &mut ClippedCanvas<'_>,
        rect: Rect,
        title: Option<&str>,
        focused: bool,
    );

    /// Paint a title-bar button as `[g]`, the glyph on the button's column.
    fn render_button(&self, canvas: &mut ClippedCanvas<'_>, rect: Rect, button: &WindowButton);
}

#[derive(Debug, Default)]
pub struct DefaultDecorator;

impl WindowDecorator for DefaultDecorator {
    fn render_frame(
        &self,
        canvas: &mut ClippedCanvas<'_>,
        rect: Rect,
        title: Option<&str>,
        focused: bool,
    ) {
        if rect.is_empty() {
            return;
        }
        let style = theme::border_style(focused);
        let left = rect.x;
        let top = rect.y;
        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;

        for x in left..=right {
            let (top_glyph, bottom_glyph) = if x == left {
                ('┌', '└')
            } else if x == right {
                ('┐', '┘')
            } else {
                ('─', '─')
            };
            canvas.set_char(x, top, top_glyph, style);
            if bottom != top {
                canvas.set_char(x, bottom, bottom_glyph, style);
            }
        }
        for y in top + 1..bottom {
            canvas.set_char(left, y, '│', style);
            if right != left {
                canvas.set_char(right, y, '│', style);
            }
        }

        // Title
        if let Some(title) = title {
            let available = rect.width - 2;
            let len = title.chars().count() as i32;
            if available > 0 && len > 0 {
                let shown: String = title.chars().take(available as usize).collect();
                let shown_len = len.min(available);
                let start = left + 1 + (available - shown_len) / 2;
                canvas.print(start, top, &shown, theme::title_style(focused));
            }
        }
    }

    fn render_button(&self, canvas: &mut ClippedCanvas<'_>, rect: Rect, button: &WindowButton) {
        let column = button.column(rect.x, rect.width);
        let row = button.row(rect.y, rect.height);
        let label = format!("[{}]", button.symbol());
        canvas.print(column - 1, row, &label, theme::button_style());
    }
}
