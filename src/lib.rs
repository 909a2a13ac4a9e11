//! Floating, stackable windows for terminal user interfaces.
//!
//! A [`WindowManager`] owns a z-ordered stack of [`Window`]s inside a
//! rectangle of the terminal. Each frame it fits visible windows into its
//! bounds and paints them bottom to top through a [`ClippedCanvas`], so no
//! window ever draws outside its own rectangle. Pointer input is hit-tested
//! against the stack, with border drags moving and resizing windows, a modal
//! window blocking the rest, and title-bar buttons firing callbacks.
pub mod components;
pub mod constants;
pub mod drivers;
pub mod error;
pub mod event;
pub mod event_loop;
pub mod layout;
pub mod rect;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;

pub use components::{Component, SharedComponent, TextPanel, shared};
pub use error::WinmanError;
pub use event::{MouseAction, MouseDecoder, MouseOutcome};
pub use rect::{Point, Rect};
pub use ui::ClippedCanvas;
pub use window::{
    ButtonSide, DefaultDecorator, ManagerConfig, SetFocus, Stack, WeakWindow, Window, WindowButton,
    WindowDecorator, WindowManager,
};
