//! Terminal I/O seams. The window manager itself never touches the terminal;
//! hosts pair an [`InputDriver`] with an [`OutputDriver`] and pump events
//! through an [`EventLoop`](crate::event_loop::EventLoop).
pub mod console;
pub mod keyboard;
pub mod output_driver;

use ::crossterm::event::Event;
use std::io;
use std::time::Duration;

pub use output_driver::OutputDriver;

pub trait InputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
    fn set_mouse_capture(&mut self, _enabled: bool) -> io::Result<()> {
        Ok(())
    }
}

impl<T: InputDriver + ?Sized> InputDriver for &mut T {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        (**self).read()
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        (**self).set_mouse_capture(enabled)
    }
}
