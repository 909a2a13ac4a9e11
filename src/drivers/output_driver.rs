use crate::ui::ClippedCanvas;
use ratatui::backend::Backend;
use std::io;

pub trait OutputDriver {
    type Backend: Backend;

    fn enter(&mut self) -> io::Result<()>;
    fn exit(&mut self) -> io::Result<()>;

    /// Paint one frame. The closure receives a canvas covering the whole
    /// terminal; a cursor position recorded on it is shown after the frame.
    fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ClippedCanvas<'_>);
}
