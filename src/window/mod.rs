//! Floating windows and the manager that stacks them.
//!
//! A [`Window`] is a cheap, clonable handle; clones refer to the same window
//! and compare equal. State lives behind a mutex so the manager, button
//! callbacks and the host application can all hold handles at once.
//!
//! Lock order: manager state, then window state. Component locks are only
//! taken while neither is held, and no lock at all is held while a button
//! callback runs, so callbacks and components may freely call back into the
//! window or its manager.
pub mod button;
pub mod decorator;
pub mod stack;

mod window_manager;

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use crossterm::event::KeyEvent;
use ratatui::style::Style;

pub use button::{ButtonCallback, ButtonSide, WindowButton};
pub use decorator::{DefaultDecorator, WindowDecorator};
pub use stack::Stack;
pub use window_manager::{ManagerConfig, WindowManager};

use crate::components::{Component, SharedComponent};
use crate::event::{MouseAction, MouseOutcome};
use crate::rect::{Point, Rect};
use crate::theme;
use crate::ui::ClippedCanvas;
use window_manager::ManagerShared;

static NEXT_WINDOW_ID: AtomicUsize = AtomicUsize::new(1);

/// Focus delegate handed to pointer and key handlers. The host decides what
/// focusing a window means; [`WindowManager::set_focus`] is the usual choice.
pub type SetFocus<'a> = &'a mut dyn FnMut(&Window);

struct WindowState {
    id: usize,
    rect: Rect,
    restore_rect: Rect,
    title: Option<String>,
    maximized: bool,
    visible: bool,
    modal: bool,
    draggable: bool,
    resizable: bool,
    border: bool,
    focused: bool,
    buttons: Vec<WindowButton>,
    content: Option<SharedComponent>,
    decorator: Arc<dyn WindowDecorator>,
    manager: Weak<ManagerShared>,
}

#[derive(Clone)]
pub struct Window {
    inner: Arc<Mutex<WindowState>>,
}

/// Non-owning window handle, for button callbacks that refer to their own
/// window.
#[derive(Clone, Default)]
pub struct WeakWindow {
    inner: Weak<Mutex<WindowState>>,
}

impl WeakWindow {
    pub fn upgrade(&self) -> Option<Window> {
        self.inner.upgrade().map(|inner| Window { inner })
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Window {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Window {}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_lock() {
            Ok(state) => f
                .debug_struct("Window")
                .field("id", &state.id)
                .field("rect", &state.rect)
                .field("visible", &state.visible)
                .field("maximized", &state.maximized)
                .field("modal", &state.modal)
                .field("buttons", &state.buttons.len())
                .finish(),
            Err(_) => f.debug_struct("Window").finish_non_exhaustive(),
        }
    }
}

pub(crate) fn lock_component(component: &SharedComponent) -> MutexGuard<'_, dyn Component + 'static> {
    component.lock().unwrap_or_else(|err| err.into_inner())
}

impl Window {
    /// A detached window: hidden, bordered, not draggable or resizable, with
    /// an empty rect and no manager.
    pub fn new() -> Self {
        let id = NEXT_WINDOW_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            inner: Arc::new(Mutex::new(WindowState {
                id,
                rect: Rect::default(),
                restore_rect: Rect::default(),
                title: None,
                maximized: false,
                visible: false,
                modal: false,
                draggable: false,
                resizable: false,
                border: true,
                focused: false,
                buttons: Vec::new(),
                content: None,
                decorator: Arc::new(DefaultDecorator),
                manager: Weak::new(),
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, WindowState> {
        self.inner.lock().unwrap_or_else(|err| err.into_inner())
    }

    /// Process-unique id, used in diagnostics.
    pub fn id(&self) -> usize {
        self.state().id
    }

    pub fn downgrade(&self) -> WeakWindow {
        WeakWindow {
            inner: Arc::downgrade(&self.inner),
        }
    }

    pub(crate) fn attach(&self, manager: Weak<ManagerShared>) {
        self.state().manager = manager;
    }

    fn attached_manager(&self, operation: &str) -> WindowManager {
        let manager = self.state().manager.clone();
        match manager.upgrade() {
            Some(shared) => WindowManager::from_shared(shared),
            None => panic!("Window::{operation} called on a window that is not attached to a WindowManager"),
        }
    }

    pub fn set_content(&self, content: Option<SharedComponent>) -> &Self {
        self.state().content = content;
        self
    }

    pub fn content(&self) -> Option<SharedComponent> {
        self.state().content.clone()
    }

    pub fn set_title(&self, title: impl Into<String>) -> &Self {
        self.state().title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<String> {
        self.state().title.clone()
    }

    pub fn set_decorator(&self, decorator: Arc<dyn WindowDecorator>) -> &Self {
        self.state().decorator = decorator;
        self
    }

    /// Mark visible. Geometry is untouched.
    pub fn show(&self) -> &Self {
        self.state().visible = true;
        self
    }

    /// Mark hidden. Hidden windows are skipped by layout, drawing, focus and
    /// hit-testing but keep their place in the stack.
    pub fn hide(&self) -> &Self {
        self.state().visible = false;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.state().visible
    }

    /// Store new bounds. Negative sizes are clamped to zero.
    pub fn set_rect(&self, rect: Rect) -> &Self {
        self.state().rect = rect.normalized();
        self
    }

    pub fn rect(&self) -> Rect {
        self.state().rect
    }

    /// The content area: the rect minus the border, if any.
    pub fn inner_rect(&self) -> Rect {
        let state = self.state();
        if state.border {
            state.rect.inner(1)
        } else {
            state.rect
        }
    }

    /// Remember the current rect and flag the window maximized.
    ///
    /// The window fills its manager on the next draw pass, or immediately
    /// when it is attached to one. Maximizing an already-maximized window
    /// keeps the original restore rect.
    pub fn maximize(&self) -> &Self {
        let manager = {
            let mut state = self.state();
            if state.maximized {
                return self;
            }
            state.restore_rect = state.rect;
            state.maximized = true;
            state.manager.clone()
        };
        if let Some(shared) = manager.upgrade() {
            let bounds = WindowManager::from_shared(shared).inner_rect();
            let mut state = self.state();
            if state.maximized {
                state.rect = bounds;
            }
        }
        self
    }

    /// Return to the rect captured by [`Window::maximize`]. No-op when the
    /// window is not maximized.
    pub fn restore(&self) -> &Self {
        let mut state = self.state();
        if state.maximized {
            state.rect = state.restore_rect;
            state.maximized = false;
        }
        self
    }

    pub fn is_maximized(&self) -> bool {
        self.state().maximized
    }

    pub fn restore_rect(&self) -> Rect {
        self.state().restore_rect
    }

    pub fn set_modal(&self, modal: bool) -> &Self {
        self.state().modal = modal;
        self
    }

    pub fn is_modal(&self) -> bool {
        self.state().modal
    }

    pub fn set_draggable(&self, draggable: bool) -> &Self {
        self.state().draggable = draggable;
        self
    }

    pub fn is_draggable(&self) -> bool {
        self.state().draggable
    }

    pub fn set_resizable(&self, resizable: bool) -> &Self {
        self.state().resizable = resizable;
        self
    }

    pub fn is_resizable(&self) -> bool {
        self.state().resizable
    }

    pub fn set_border(&self, border: bool) -> &Self {
        self.state().border = border;
        self
    }

    pub fn has_border(&self) -> bool {
        self.state().border
    }

    /// Give focus to the content, or to the window itself when it has none.
    /// Focusing a hidden window makes it visible.
    pub fn focus(&self) {
        let content = {
            let mut state = self.state();
            state.visible = true;
            if state.content.is_none() {
                state.focused = true;
            }
            state.content.clone()
        };
        if let Some(content) = content {
            lock_component(&content).focus();
        }
    }

    pub fn blur(&self) {
        let content = {
            let mut state = self.state();
            state.focused = false;
            state.content.clone()
        };
        if let Some(content) = content {
            lock_component(&content).blur();
        }
    }

    /// Always false while hidden; otherwise the content's focus, or the
    /// window's own when it has no content.
    pub fn has_focus(&self) -> bool {
        let content = {
            let state = self.state();
            if !state.visible {
                return false;
            }
            match &state.content {
                Some(content) => content.clone(),
                None => return state.focused,
            }
        };
        lock_component(&content).has_focus()
    }

    /// Append a title-bar button and re-pack every button's offset.
    pub fn add_button(&self, button: WindowButton) -> &Self {
        let mut state = self.state();
        state.buttons.push(button);
        button::layout_buttons(&mut state.buttons);
        self
    }

    pub fn button(&self, index: usize) -> Option<WindowButton> {
        self.state().buttons.get(index).cloned()
    }

    pub fn button_count(&self) -> usize {
        self.state().buttons.len()
    }

    /// Replace the click callback of an existing button. Returns `false` when
    /// `index` is out of range.
    pub fn set_button_on_click<F>(&self, index: usize, on_click: F) -> bool
    where
        F: Fn() + Send + Sync + 'static,
    {
        match self.state().buttons.get_mut(index) {
            Some(button) => {
                button.set_on_click(on_click);
                true
            }
            None => false,
        }
    }

    /// Paint background, border, title, content and buttons, never outside
    /// the window rect. Content is clipped to the interior.
    pub fn draw(&self, canvas: &mut ClippedCanvas<'_>) {
        let (rect, border, title, buttons, content, decorator) = {
            let state = self.state();
            (
                state.rect,
                state.border,
                state.title.clone(),
                state.buttons.clone(),
                state.content.clone(),
                state.decorator.clone(),
            )
        };
        let focused = self.has_focus();
        let mut canvas = canvas.clip(rect);
        canvas.fill(' ', Style::default().bg(theme::window_bg()));
        if border {
            decorator.render_frame(&mut canvas, rect, title.as_deref(), focused);
        }
        if let Some(content) = content {
            let inner = if border { rect.inner(1) } else { rect };
            let mut inner_canvas = canvas.clip(inner);
            lock_component(&content).render(&mut inner_canvas, inner);
        }
        if border {
            for button in &buttons {
                decorator.render_button(&mut canvas, rect, button);
            }
        }
    }

    /// Offer a pointer event to the window.
    ///
    /// A left click on a button's cell runs its callback and is consumed,
    /// whatever the content would have done. Other events go to the content;
    /// a window without content claims left presses inside its rect and
    /// focuses itself.
    pub fn handle_mouse(
        &self,
        action: MouseAction,
        position: Point,
        set_focus: SetFocus<'_>,
    ) -> MouseOutcome {
        let (id, button_hit, content, rect) = {
            let state = self.state();
            let rect = state.rect;
            let hit = if action == MouseAction::LeftClick && state.border {
                state
                    .buttons
                    .iter()
                    .find(|button| {
                        button.row(rect.y, rect.height) == position.y
                            && button.column(rect.x, rect.width) == position.x
                    })
                    .map(|button| (button.symbol(), button.callback()))
            } else {
                None
            };
            (state.id, hit, state.content.clone(), rect)
        };

        if let Some((symbol, callback)) = button_hit {
            tracing::debug!(window = id, button = %symbol, "title-bar button clicked");
            if let Some(callback) = callback {
                callback();
            }
            return MouseOutcome::Consumed;
        }

        if let Some(content) = content {
            let mut wants_focus = false;
            let outcome = lock_component(&content).handle_mouse(action, position, &mut || {
                wants_focus = true;
            });
            if wants_focus {
                set_focus(self);
            }
            return outcome;
        }

        if action == MouseAction::LeftDown && rect.contains_point(position) {
            set_focus(self);
            return MouseOutcome::Consumed;
        }
        MouseOutcome::Ignored
    }

    /// Forward a key to the content. Windows without content drop keys.
    pub fn handle_key(&self, event: &KeyEvent, set_focus: SetFocus<'_>) -> bool {
        let Some(content) = self.content() else {
            return false;
        };
        let mut wants_focus = false;
        let handled = lock_component(&content).handle_key(event, &mut || {
            wants_focus = true;
        });
        if wants_focus {
            set_focus(self);
        }
        handled
    }

    /// Register with the attached manager and put the window on top.
    ///
    /// # Panics
    ///
    /// When the window was never attached to a manager.
    pub fn open(&self) {
        self.attached_manager("open").show(self);
    }

    /// Like [`Window::open`], and make the window modal.
    ///
    /// # Panics
    ///
    /// When the window was never attached to a manager.
    pub fn open_modal(&self) {
        self.attached_manager("open_modal").show_modal(self);
    }

    /// Remove the window from its manager's stack.
    ///
    /// # Panics
    ///
    /// When the window was never attached to a manager.
    pub fn close(&self) {
        self.attached_manager("close").hide(self);
    }

    /// Centre the window inside its manager.
    ///
    /// # Panics
    ///
    /// When the window was never attached to a manager.
    pub fn center(&self) {
        self.attached_manager("center").center(self);
    }
}
