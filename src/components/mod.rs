use std::sync::{Arc, Mutex};

use crossterm::event::KeyEvent;

use crate::event::{MouseAction, MouseOutcome};
use crate::rect::{Point, Rect};
use crate::ui::ClippedCanvas;

pub mod text_panel;

pub use text_panel::TextPanel;

/// Content hosted inside a window.
///
/// The window manager never inspects a component; it only paints it, moves
/// focus in and out of it, and offers it pointer and key events the window
/// itself did not claim.
///
/// `request_focus` asks the host to focus the window this component lives in.
/// The request is applied once the handler returns, since focusing locks the
/// component again. Handlers may otherwise call back into the window manager
/// (for example to hide their own window); no manager lock is held while they
/// run.
pub trait Component: Send {
    /// Paint into `area`. The canvas is already clipped to it.
    fn render(&mut self, canvas: &mut ClippedCanvas<'_>, area: Rect);

    fn focus(&mut self);

    fn blur(&mut self);

    fn has_focus(&self) -> bool;

    fn handle_mouse(
        &mut self,
        _action: MouseAction,
        _position: Point,
        _request_focus: &mut dyn FnMut(),
    ) -> MouseOutcome {
        MouseOutcome::Ignored
    }

    /// Returns `true` when the key was handled. Components without key input
    /// keep the default.
    fn handle_key(&mut self, _event: &KeyEvent, _request_focus: &mut dyn FnMut()) -> bool {
        false
    }
}

/// Shared handle to a component. The creator keeps its own clone; windows
/// never take ownership away from it.
pub type SharedComponent = Arc<Mutex<dyn Component>>;

/// Wrap a component for attaching to a window.
pub fn shared<C: Component + 'static>(component: C) -> SharedComponent {
    Arc::new(Mutex::new(component))
}
