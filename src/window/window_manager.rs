use std::sync::{Arc, Mutex, MutexGuard};

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::style::Style;

use super::decorator::{DefaultDecorator, WindowDecorator};
use super::stack::Stack;
use super::{SetFocus, Window};
use crate::components::SharedComponent;
use crate::constants::{DEFAULT_MIN_WINDOW_HEIGHT, DEFAULT_MIN_WINDOW_WIDTH, WINDOW_Z_BOTTOM, WINDOW_Z_TOP};
use crate::error::WinmanError;
use crate::event::{MouseAction, MouseDecoder, MouseOutcome};
use crate::layout::{MinSize, WindowEdge, apply_drag, center_rect, edge_at, fit_rect};
use crate::rect::{Point, Rect};
use crate::theme;
use crate::ui::ClippedCanvas;

/// Tunables for a [`WindowManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Smallest width the fitting pass and drag gestures allow.
    pub min_window_width: i32,
    /// Smallest height the fitting pass and drag gestures allow.
    pub min_window_height: i32,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            min_window_width: DEFAULT_MIN_WINDOW_WIDTH,
            min_window_height: DEFAULT_MIN_WINDOW_HEIGHT,
        }
    }
}

impl ManagerConfig {
    pub fn validate(&self) -> Result<(), WinmanError> {
        if self.min_window_width < 1 || self.min_window_height < 1 {
            return Err(WinmanError::InvalidMinimumSize {
                width: self.min_window_width,
                height: self.min_window_height,
            });
        }
        Ok(())
    }

    fn min_size(&self) -> MinSize {
        MinSize {
            width: self.min_window_width,
            height: self.min_window_height,
        }
    }
}

struct DragState {
    window: Window,
    edge: WindowEdge,
    /// Pointer offset from the window origin when the gesture began.
    grab: Point,
}

struct ManagerState {
    windows: Stack<Window>,
    rect: Rect,
    border: bool,
    full_screen: bool,
    modal: Option<Window>,
    drag: Option<DragState>,
    capture: Option<Window>,
    decoder: MouseDecoder,
}

impl ManagerState {
    fn inner_rect(&self) -> Rect {
        if self.border {
            self.rect.inner(1)
        } else {
            self.rect
        }
    }

    /// The window that currently owns the pointer: the explicit modal if it
    /// is still shown, otherwise the topmost visible window flagged modal.
    fn effective_modal(&self) -> Option<Window> {
        if let Some(modal) = &self.modal
            && modal.is_visible()
            && self.windows.contains(modal)
        {
            return Some(modal.clone());
        }
        self.windows
            .find(|window| window.is_visible() && window.is_modal())
            .cloned()
    }

    fn hit_test(&self, position: Point) -> Option<Window> {
        if let Some(modal) = self.effective_modal() {
            if modal.rect().contains_point(position) {
                return Some(modal);
            }
            tracing::trace!(modal = modal.id(), x = position.x, y = position.y, "pointer blocked by modal window");
            return None;
        }
        self.windows
            .find(|window| window.is_visible() && window.rect().contains_point(position))
            .cloned()
    }
}

/// Top-border grabs need a draggable window; every other edge needs a
/// resizable one. Checked on every motion, so clearing a flag mid-gesture
/// freezes the window.
fn gesture_permitted(window: &Window, edge: WindowEdge) -> bool {
    if edge.is_move() {
        window.is_draggable()
    } else {
        window.is_resizable()
    }
}

pub(crate) struct ManagerShared {
    state: Mutex<ManagerState>,
    config: ManagerConfig,
}

/// Owns the window stack and routes input to it.
///
/// Like [`Window`], this is a shared handle: clones drive the same manager.
/// Stack index 0 is the bottom; the last index is painted last and wins
/// hit-tests.
#[derive(Clone)]
pub struct WindowManager {
    shared: Arc<ManagerShared>,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WindowManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.shared.state.try_lock() {
            Ok(state) => f
                .debug_struct("WindowManager")
                .field("rect", &state.rect)
                .field("windows", &state.windows.len())
                .field("dragging", &state.drag.is_some())
                .finish(),
            Err(_) => f.debug_struct("WindowManager").finish_non_exhaustive(),
        }
    }
}

impl WindowManager {
    /// An empty, borderless manager with a zero rect and default limits.
    pub fn new() -> Self {
        Self::build(ManagerConfig::default())
    }

    pub fn with_config(config: ManagerConfig) -> Result<Self, WinmanError> {
        if let Err(err) = config.validate() {
            tracing::warn!(%err, "rejected window manager config");
            return Err(err);
        }
        Ok(Self::build(config))
    }

    fn build(config: ManagerConfig) -> Self {
        Self {
            shared: Arc::new(ManagerShared {
                state: Mutex::new(ManagerState {
                    windows: Stack::new(),
                    rect: Rect::default(),
                    border: false,
                    full_screen: false,
                    modal: None,
                    drag: None,
                    capture: None,
                    decoder: MouseDecoder::new(),
                }),
                config,
            }),
        }
    }

    pub(crate) fn from_shared(shared: Arc<ManagerShared>) -> Self {
        Self { shared }
    }

    fn state(&self) -> MutexGuard<'_, ManagerState> {
        self.shared.state.lock().unwrap_or_else(|err| err.into_inner())
    }

    pub fn config(&self) -> ManagerConfig {
        self.shared.config
    }

    /// Create a window that already knows this manager, so its
    /// `open`/`close`/`center` conveniences work. It is not shown yet.
    pub fn new_window(&self) -> Window {
        let window = Window::new();
        window.attach(Arc::downgrade(&self.shared));
        window
    }

    /// Put `window` on top of the stack and mark it visible. Showing a window
    /// that is already in the stack only makes it visible again.
    pub fn show(&self, window: &Window) {
        let mut state = self.state();
        window.attach(Arc::downgrade(&self.shared));
        let added = state.windows.push(window.clone());
        window.show();
        tracing::debug!(
            window = window.id(),
            added,
            count = state.windows.len(),
            "showing window"
        );
    }

    /// Show `window` and make it the modal window. While it is shown, pointer
    /// events only reach it.
    pub fn show_modal(&self, window: &Window) {
        self.show(window);
        window.set_modal(true);
        self.state().modal = Some(window.clone());
        tracing::debug!(window = window.id(), "window is now modal");
    }

    /// Remove `window` from the stack and mark it hidden. Any drag, capture
    /// or modal designation it held is dropped.
    pub fn hide(&self, window: &Window) {
        let mut state = self.state();
        let removed = state.windows.remove(window).is_some();
        if state.modal.as_ref() == Some(window) {
            state.modal = None;
            window.set_modal(false);
        }
        if state.drag.as_ref().is_some_and(|drag| &drag.window == window) {
            state.drag = None;
        }
        if state.capture.as_ref() == Some(window) {
            state.capture = None;
        }
        window.hide();
        tracing::debug!(
            window = window.id(),
            removed,
            count = state.windows.len(),
            "hiding window"
        );
    }

    /// Centre `window` in the inner rect, keeping its size.
    pub fn center(&self, window: &Window) {
        let bounds = self.inner_rect();
        window.set_rect(center_rect(window.rect(), bounds));
    }

    pub fn window_count(&self) -> usize {
        self.state().windows.len()
    }

    /// The window at stack index `z`, if any.
    pub fn window_at(&self, z: usize) -> Option<Window> {
        self.state().windows.item(z).cloned()
    }

    /// Bottom-to-top snapshot of the stack.
    pub fn windows(&self) -> Vec<Window> {
        self.state().windows.as_slice().to_vec()
    }

    pub fn z_index(&self, window: &Window) -> Option<usize> {
        self.state().windows.index_of(window)
    }

    /// Move `window` to stack index `z`. [`WINDOW_Z_TOP`], or any index out
    /// of range, means the top. Windows not in the stack are ignored.
    pub fn set_z(&self, window: &Window, z: isize) {
        let mut state = self.state();
        if let Some(to) = state.windows.move_to(window, z) {
            tracing::trace!(window = window.id(), z = to, "restacked window");
        }
    }

    pub fn bring_to_front(&self, window: &Window) {
        self.set_z(window, WINDOW_Z_TOP);
    }

    pub fn send_to_back(&self, window: &Window) {
        self.set_z(window, WINDOW_Z_BOTTOM);
    }

    /// Topmost window in the stack hosting `content`.
    pub fn find_window_by_content(&self, content: &SharedComponent) -> Option<Window> {
        self.windows().into_iter().rev().find(|window| {
            window
                .content()
                .is_some_and(|hosted| Arc::ptr_eq(&hosted, content))
        })
    }

    pub fn set_rect(&self, rect: Rect) {
        self.state().rect = rect.normalized();
    }

    pub fn rect(&self) -> Rect {
        self.state().rect
    }

    /// The area windows are fitted into: the rect minus the border, if any.
    pub fn inner_rect(&self) -> Rect {
        self.state().inner_rect()
    }

    pub fn set_border(&self, border: bool) {
        self.state().border = border;
    }

    pub fn has_border(&self) -> bool {
        self.state().border
    }

    /// When set, each draw pass resizes the manager to the canvas it is
    /// handed.
    pub fn set_full_screen(&self, full_screen: bool) {
        self.state().full_screen = full_screen;
    }

    pub fn modal_window(&self) -> Option<Window> {
        self.state().effective_modal()
    }

    pub fn is_dragging(&self) -> bool {
        self.state().drag.is_some()
    }

    /// Focus the topmost visible window.
    pub fn focus(&self) {
        let top = self
            .windows()
            .into_iter()
            .rev()
            .find(|window| window.is_visible());
        if let Some(window) = top {
            self.set_focus(&window);
        }
    }

    /// True when any window in the stack has focus.
    pub fn has_focus(&self) -> bool {
        self.windows().iter().any(Window::has_focus)
    }

    /// Blur every other window and focus `window`. This is the focus delegate
    /// [`WindowManager::handle_event`] uses.
    pub fn set_focus(&self, window: &Window) {
        for other in self.windows() {
            if &other != window {
                other.blur();
            }
        }
        window.focus();
        tracing::trace!(window = window.id(), "focus moved");
    }

    /// Paint the manager and every visible window, bottom to top.
    ///
    /// Before painting, the focused window is promoted to the top of the
    /// stack and every visible window is fitted into the inner rect.
    pub fn draw(&self, canvas: &mut ClippedCanvas<'_>) {
        let (rect, border) = {
            let mut state = self.state();
            if state.full_screen {
                state.rect = canvas.area();
            }
            (state.rect, state.border)
        };

        {
            let mut desktop = canvas.clip(rect);
            desktop.fill(' ', Style::default().bg(theme::desktop_bg()));
            if border {
                DefaultDecorator.render_frame(&mut desktop, rect, None, self.has_focus());
            }
        }

        self.promote_focused();
        for window in self.fit_visible() {
            let mut window_canvas = canvas.clip(window.rect());
            window.draw(&mut window_canvas);
        }
    }

    fn promote_focused(&self) {
        let focused = self
            .windows()
            .into_iter()
            .rev()
            .find(|window| window.is_visible() && window.has_focus());
        let Some(focused) = focused else {
            return;
        };
        let mut state = self.state();
        let top = state.windows.len().saturating_sub(1);
        if let Some(from) = state.windows.index_of(&focused)
            && from < top
        {
            state.windows.move_to(&focused, WINDOW_Z_TOP);
            tracing::debug!(window = focused.id(), from, to = top, "raised focused window");
        }
    }

    /// Clamp every visible window into the inner rect and return them in
    /// paint order.
    fn fit_visible(&self) -> Vec<Window> {
        let state = self.state();
        let bounds = state.inner_rect();
        let min = self.shared.config.min_size();
        let mut visible = Vec::with_capacity(state.windows.len());
        for window in &state.windows {
            if !window.is_visible() {
                continue;
            }
            window.set_rect(fit_rect(window.rect(), bounds, min, window.is_maximized()));
            visible.push(window.clone());
        }
        visible
    }

    /// Route one pointer action.
    ///
    /// An active drag sees motion and the release first, wherever the
    /// pointer is. Then a capturing window gets the event; otherwise events
    /// outside the manager are ignored and the rest go to the topmost visible
    /// window under the pointer (only the modal window, while one is shown).
    /// A left press on a bordered window's frame starts a move or resize when
    /// the window permits it.
    pub fn handle_mouse(
        &self,
        action: MouseAction,
        position: Point,
        set_focus: SetFocus<'_>,
    ) -> MouseOutcome {
        let (target, captured) = {
            let mut state = self.state();
            if state.drag.is_some() {
                match action {
                    MouseAction::LeftUp => {
                        if let Some(drag) = state.drag.take() {
                            tracing::debug!(
                                window = drag.window.id(),
                                edge = ?drag.edge,
                                rect = %drag.window.rect(),
                                "drag finished"
                            );
                        }
                        return MouseOutcome::Consumed;
                    }
                    MouseAction::Move => {
                        if let Some(drag) = state.drag.as_ref()
                            && gesture_permitted(&drag.window, drag.edge)
                        {
                            let window = &drag.window;
                            let min = self.shared.config.min_size();
                            window.set_rect(apply_drag(window.rect(), drag.edge, position, drag.grab, min));
                        }
                        return MouseOutcome::Consumed;
                    }
                    _ => {}
                }
            }
            if let Some(captured) = state.capture.clone()
                && let Some(modal) = state.effective_modal()
                && captured != modal
            {
                state.capture = None;
                tracing::debug!(
                    window = captured.id(),
                    modal = modal.id(),
                    "pointer capture dropped for modal window"
                );
            }
            match state.capture.clone() {
                Some(window) => (None, Some(window)),
                None => {
                    if !state.rect.contains_point(position) {
                        return MouseOutcome::Ignored;
                    }
                    (state.hit_test(position), None)
                }
            }
        };

        if let Some(window) = captured {
            let outcome = window.handle_mouse(action, position, set_focus);
            if outcome != MouseOutcome::Captured {
                let mut state = self.state();
                if state.capture.as_ref() == Some(&window) {
                    state.capture = None;
                    tracing::trace!(window = window.id(), "pointer capture released");
                }
            }
            return outcome;
        }

        let Some(window) = target else {
            return MouseOutcome::Ignored;
        };

        if action == MouseAction::LeftDown && window.has_border() {
            if !window.has_focus() {
                set_focus(&window);
            }
            let rect = window.rect();
            if let Some(edge) = edge_at(rect, position) {
                if gesture_permitted(&window, edge) {
                    let grab = Point::new(position.x - rect.x, position.y - rect.y);
                    self.state().drag = Some(DragState {
                        window: window.clone(),
                        edge,
                        grab,
                    });
                    tracing::debug!(window = window.id(), ?edge, rect = %rect, "drag started");
                    return MouseOutcome::Consumed;
                }
            }
        }

        let outcome = window.handle_mouse(action, position, set_focus);
        if outcome == MouseOutcome::Captured {
            self.state().capture = Some(window.clone());
            tracing::trace!(window = window.id(), "pointer captured");
        }
        outcome
    }

    /// Offer a key to the topmost visible window with focus.
    pub fn handle_key(&self, event: &KeyEvent, set_focus: SetFocus<'_>) -> bool {
        let focused = self
            .windows()
            .into_iter()
            .rev()
            .find(|window| window.has_focus());
        match focused {
            Some(window) => window.handle_key(event, set_focus),
            None => false,
        }
    }

    /// Feed a raw crossterm event through the manager, using
    /// [`WindowManager::set_focus`] as the focus delegate. Key releases and
    /// non-input events are ignored. Returns whether anything consumed it.
    pub fn handle_event(&self, event: &Event) -> bool {
        match event {
            Event::Mouse(mouse) => {
                let actions = self.state().decoder.decode(mouse);
                let mut consumed = false;
                for (action, position) in actions {
                    let outcome =
                        self.handle_mouse(action, position, &mut |window: &Window| self.set_focus(window));
                    consumed |= outcome.is_consumed();
                }
                consumed
            }
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                self.handle_key(key, &mut |window: &Window| self.set_focus(window))
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Component, shared};
    use crate::ui::buffer_line;
    use ratatui::buffer::Buffer;
    use ratatui::layout;

    struct Grabber {
        focused: bool,
    }

    impl Component for Grabber {
        fn render(&mut self, canvas: &mut ClippedCanvas<'_>, _area: Rect) {
            canvas.fill('#', Style::default());
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
            _request_focus: &mut dyn FnMut(),
        ) -> MouseOutcome {
            match action {
                MouseAction::LeftDown | MouseAction::Move => MouseOutcome::Captured,
                MouseAction::LeftUp => MouseOutcome::Consumed,
                _ => MouseOutcome::Ignored,
            }
        }
    }

    fn manager(width: i32, height: i32) -> WindowManager {
        let manager = WindowManager::new();
        manager.set_rect(Rect::new(0, 0, width, height));
        manager
    }

    fn shown(manager: &WindowManager, rect: Rect) -> Window {
        let window = manager.new_window();
        window.set_rect(rect);
        manager.show(&window);
        window
    }

    fn draw(manager: &WindowManager, width: u16, height: u16) -> Buffer {
        let mut buf = Buffer::empty(layout::Rect::new(0, 0, width, height));
        let mut cursor = None;
        let mut canvas = ClippedCanvas::new(&mut buf, &mut cursor);
        manager.draw(&mut canvas);
        buf
    }

    fn route(manager: &WindowManager, action: MouseAction, x: i32, y: i32) -> MouseOutcome {
        manager.handle_mouse(action, Point::new(x, y), &mut |window: &Window| {
            manager.set_focus(window)
        })
    }

    #[test]
    fn config_rejects_zero_minimum() {
        let err = WindowManager::with_config(ManagerConfig {
            min_window_width: 0,
            min_window_height: 3,
        })
        .unwrap_err();
        assert_eq!(err, WinmanError::InvalidMinimumSize { width: 0, height: 3 });
        assert!(WindowManager::with_config(ManagerConfig::default()).is_ok());
    }

    #[test]
    fn show_is_idempotent_and_hide_removes() {
        let wm = manager(80, 24);
        let a = shown(&wm, Rect::new(0, 0, 10, 5));
        wm.show(&a);
        assert_eq!(wm.window_count(), 1);
        assert!(a.is_visible());
        wm.hide(&a);
        assert_eq!(wm.window_count(), 0);
        assert!(!a.is_visible());
        assert_eq!(wm.z_index(&a), None);
    }

    #[test]
    fn set_z_and_shortcuts_restack() {
        let wm = manager(80, 24);
        let a = shown(&wm, Rect::new(0, 0, 10, 5));
        let b = shown(&wm, Rect::new(0, 0, 10, 5));
        let c = shown(&wm, Rect::new(0, 0, 10, 5));
        wm.set_z(&c, 0);
        assert_eq!(wm.windows(), vec![c.clone(), a.clone(), b.clone()]);
        wm.bring_to_front(&c);
        assert_eq!(wm.z_index(&c), Some(2));
        wm.send_to_back(&b);
        assert_eq!(wm.window_at(0), Some(b.clone()));
        wm.set_z(&a, 42);
        assert_eq!(wm.z_index(&a), Some(2));
    }

    #[test]
    fn fitting_clamps_and_is_stable() {
        let wm = manager(80, 24);
        let far = shown(&wm, Rect::new(100, 50, 10, 5));
        let wide = shown(&wm, Rect::new(5, 5, 200, 4));
        let tiny = shown(&wm, Rect::new(2, 2, 1, 1));
        draw(&wm, 80, 24);
        assert_eq!(far.rect(), Rect::new(70, 19, 10, 5));
        assert_eq!(wide.rect(), Rect::new(0, 5, 80, 4));
        assert_eq!(tiny.rect(), Rect::new(2, 2, 3, 3));
        let before = (far.rect(), wide.rect(), tiny.rect());
        draw(&wm, 80, 24);
        assert_eq!(before, (far.rect(), wide.rect(), tiny.rect()));
    }

    #[test]
    fn hidden_windows_are_not_fitted() {
        let wm = manager(80, 24);
        let window = shown(&wm, Rect::new(100, 50, 10, 5));
        window.hide();
        draw(&wm, 80, 24);
        assert_eq!(window.rect(), Rect::new(100, 50, 10, 5));
    }

    #[test]
    fn maximized_window_fills_inner_rect() {
        let wm = manager(80, 24);
        wm.set_border(true);
        let window = shown(&wm, Rect::new(10, 10, 10, 5));
        window.maximize();
        assert_eq!(window.rect(), Rect::new(1, 1, 78, 22));
        draw(&wm, 80, 24);
        assert_eq!(window.rect(), Rect::new(1, 1, 78, 22));
        window.restore();
        assert_eq!(window.rect(), Rect::new(10, 10, 10, 5));
    }

    #[test]
    fn draw_raises_focused_window() {
        let wm = manager(80, 24);
        let a = shown(&wm, Rect::new(0, 0, 10, 5));
        let _b = shown(&wm, Rect::new(0, 0, 10, 5));
        let _c = shown(&wm, Rect::new(0, 0, 10, 5));
        wm.set_focus(&a);
        draw(&wm, 80, 24);
        assert_eq!(wm.z_index(&a), Some(wm.window_count() - 1));
    }

    #[test]
    fn full_screen_tracks_canvas() {
        let wm = WindowManager::new();
        wm.set_full_screen(true);
        draw(&wm, 30, 12);
        assert_eq!(wm.rect(), Rect::new(0, 0, 30, 12));
    }

    #[test]
    fn center_uses_inner_rect() {
        let wm = manager(80, 24);
        wm.set_border(true);
        let window = shown(&wm, Rect::new(0, 0, 21, 7));
        wm.center(&window);
        assert_eq!(window.rect(), Rect::new(29, 8, 21, 7));
    }

    #[test]
    fn windows_never_paint_outside_their_rect() {
        let wm = manager(20, 6);
        let window = shown(&wm, Rect::new(2, 1, 6, 4));
        window.set_content(Some(shared(Grabber { focused: false })));
        let buf = draw(&wm, 20, 6);
        assert_eq!(buffer_line(&buf, 0, 0, 20), " ".repeat(20));
        assert_eq!(buffer_line(&buf, 0, 1, 10), "  ┌────┐  ");
        assert_eq!(buffer_line(&buf, 0, 2, 10), "  │####│  ");
        assert_eq!(buffer_line(&buf, 0, 5, 20), " ".repeat(20));
    }

    #[test]
    fn right_border_drag_resizes_until_release() {
        let wm = manager(80, 24);
        let window = shown(&wm, Rect::new(10, 5, 20, 10));
        window.set_resizable(true);
        assert_eq!(route(&wm, MouseAction::LeftDown, 29, 8), MouseOutcome::Consumed);
        assert!(wm.is_dragging());
        assert!(window.has_focus());
        route(&wm, MouseAction::Move, 40, 8);
        assert_eq!(window.rect(), Rect::new(10, 5, 31, 10));
        route(&wm, MouseAction::LeftUp, 70, 20);
        assert!(!wm.is_dragging());
        route(&wm, MouseAction::Move, 50, 8);
        assert_eq!(window.rect().width, 31);
    }

    #[test]
    fn title_drag_moves_draggable_window() {
        let wm = manager(80, 24);
        let window = shown(&wm, Rect::new(10, 5, 20, 10));
        window.set_draggable(true);
        route(&wm, MouseAction::LeftDown, 15, 5);
        route(&wm, MouseAction::Move, 25, 9);
        assert_eq!(window.rect(), Rect::new(20, 9, 20, 10));
        route(&wm, MouseAction::LeftUp, 25, 9);
    }

    #[test]
    fn clearing_draggable_mid_gesture_freezes_window() {
        let wm = manager(80, 24);
        let window = shown(&wm, Rect::new(10, 5, 20, 10));
        window.set_draggable(true);
        route(&wm, MouseAction::LeftDown, 15, 5);
        window.set_draggable(false);
        assert_eq!(route(&wm, MouseAction::Move, 25, 9), MouseOutcome::Consumed);
        assert_eq!(window.rect(), Rect::new(10, 5, 20, 10));
    }

    #[test]
    fn frame_press_without_permission_does_not_drag() {
        let wm = manager(80, 24);
        let window = shown(&wm, Rect::new(10, 5, 20, 10));
        route(&wm, MouseAction::LeftDown, 15, 5);
        route(&wm, MouseAction::LeftDown, 29, 8);
        assert!(!wm.is_dragging());
        route(&wm, MouseAction::Move, 40, 8);
        assert_eq!(window.rect(), Rect::new(10, 5, 20, 10));
    }

    #[test]
    fn release_outside_manager_still_ends_drag() {
        let wm = manager(80, 24);
        let window = shown(&wm, Rect::new(10, 5, 20, 10));
        window.set_draggable(true);
        route(&wm, MouseAction::LeftDown, 15, 5);
        assert_eq!(route(&wm, MouseAction::LeftUp, 500, 500), MouseOutcome::Consumed);
        assert!(!wm.is_dragging());
    }

    #[test]
    fn events_outside_manager_are_ignored() {
        let wm = manager(10, 10);
        shown(&wm, Rect::new(0, 0, 10, 10));
        assert_eq!(route(&wm, MouseAction::LeftDown, 30, 3), MouseOutcome::Ignored);
    }

    #[test]
    fn topmost_visible_window_wins_hit_test() {
        let wm = manager(80, 24);
        let below = shown(&wm, Rect::new(0, 0, 20, 10));
        let above = shown(&wm, Rect::new(5, 2, 20, 10));
        route(&wm, MouseAction::LeftDown, 10, 5);
        assert!(above.has_focus());
        assert!(!below.has_focus());
        above.hide();
        route(&wm, MouseAction::LeftDown, 10, 5);
        assert!(below.has_focus());
    }

    #[test]
    fn modal_window_blocks_others() {
        let wm = manager(80, 24);
        let back = shown(&wm, Rect::new(0, 0, 40, 20));
        let dialog = wm.new_window();
        dialog.set_rect(Rect::new(50, 5, 10, 5));
        wm.show_modal(&dialog);
        assert_eq!(wm.modal_window(), Some(dialog.clone()));
        assert_eq!(route(&wm, MouseAction::LeftDown, 10, 10), MouseOutcome::Ignored);
        assert!(!back.has_focus());
        route(&wm, MouseAction::LeftDown, 55, 7);
        assert!(dialog.has_focus());
        wm.hide(&dialog);
        assert_eq!(wm.modal_window(), None);
        route(&wm, MouseAction::LeftDown, 10, 10);
        assert!(back.has_focus());
    }

    #[test]
    fn flagging_a_shown_window_modal_takes_effect() {
        let wm = manager(80, 24);
        let back = shown(&wm, Rect::new(0, 0, 40, 20));
        let later = shown(&wm, Rect::new(50, 5, 10, 5));
        later.set_modal(true);
        assert_eq!(wm.modal_window(), Some(later));
        route(&wm, MouseAction::LeftDown, 10, 10);
        assert!(!back.has_focus());
    }

    #[test]
    fn reshowing_a_hidden_modal_with_show_is_not_modal() {
        let wm = manager(80, 24);
        let back = shown(&wm, Rect::new(0, 0, 40, 20));
        let dialog = wm.new_window();
        dialog.set_rect(Rect::new(50, 5, 10, 5));
        wm.show_modal(&dialog);
        wm.hide(&dialog);
        assert!(!dialog.is_modal());
        wm.show(&dialog);
        assert_eq!(wm.modal_window(), None);
        assert_eq!(route(&wm, MouseAction::LeftDown, 10, 10), MouseOutcome::Consumed);
        assert!(back.has_focus());
    }

    #[test]
    fn modal_shown_mid_capture_takes_the_pointer() {
        let wm = manager(80, 24);
        let grabber = shown(&wm, Rect::new(0, 0, 20, 10));
        grabber.set_content(Some(shared(Grabber { focused: false })));
        assert_eq!(route(&wm, MouseAction::LeftDown, 5, 5), MouseOutcome::Captured);

        let dialog = wm.new_window();
        dialog.set_rect(Rect::new(50, 5, 10, 5));
        wm.show_modal(&dialog);
        assert_eq!(route(&wm, MouseAction::LeftDown, 5, 5), MouseOutcome::Ignored);
        assert_eq!(route(&wm, MouseAction::Move, 6, 5), MouseOutcome::Ignored);

        route(&wm, MouseAction::LeftDown, 55, 7);
        assert!(dialog.has_focus());
    }

    #[test]
    fn captured_pointer_follows_window_outside_its_rect() {
        let wm = manager(80, 24);
        let window = shown(&wm, Rect::new(0, 0, 10, 5));
        window.set_content(Some(shared(Grabber { focused: false })));
        let other = shown(&wm, Rect::new(30, 0, 10, 5));
        wm.bring_to_front(&other);
        assert_eq!(route(&wm, MouseAction::LeftDown, 4, 2), MouseOutcome::Captured);
        assert_eq!(route(&wm, MouseAction::Move, 35, 2), MouseOutcome::Captured);
        assert_eq!(route(&wm, MouseAction::LeftUp, 35, 2), MouseOutcome::Consumed);
        assert_eq!(route(&wm, MouseAction::Move, 35, 2), MouseOutcome::Ignored);
    }

    #[test]
    fn find_window_by_content_matches_identity() {
        let wm = manager(80, 24);
        let content = shared(Grabber { focused: false });
        let window = shown(&wm, Rect::new(0, 0, 10, 5));
        window.set_content(Some(content.clone()));
        shown(&wm, Rect::new(0, 0, 10, 5));
        assert_eq!(wm.find_window_by_content(&content), Some(window));
        assert_eq!(wm.find_window_by_content(&shared(Grabber { focused: false })), None);
    }

    #[test]
    fn set_focus_is_exclusive() {
        let wm = manager(80, 24);
        let a = shown(&wm, Rect::new(0, 0, 10, 5));
        let b = shown(&wm, Rect::new(0, 0, 10, 5));
        wm.set_focus(&a);
        wm.set_focus(&b);
        assert!(!a.has_focus());
        assert!(b.has_focus());
        assert!(wm.has_focus());
        wm.focus();
        assert!(b.has_focus());
    }
}
