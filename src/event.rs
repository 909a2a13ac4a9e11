//! Pointer vocabulary shared by the manager, windows and components.
//!
//! The core routes abstract [`MouseAction`]s rather than raw crossterm events
//! so gestures can be driven from tests or other backends. [`MouseDecoder`]
//! adapts crossterm's stream, synthesizing click actions the terminal never
//! reports on its own.
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::rect::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAction {
    LeftDown,
    LeftUp,
    LeftClick,
    MiddleDown,
    MiddleUp,
    MiddleClick,
    RightDown,
    RightUp,
    RightClick,
    /// Pointer motion, with or without a button held.
    Move,
    ScrollUp,
    ScrollDown,
    ScrollLeft,
    ScrollRight,
}

/// Result of offering a pointer event to a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseOutcome {
    #[default]
    Ignored,
    Consumed,
    /// Consumed, and every following pointer event should go to the same
    /// handler until it answers something else.
    Captured,
}

impl MouseOutcome {
    pub fn is_consumed(self) -> bool {
        !matches!(self, MouseOutcome::Ignored)
    }

    pub fn from_consumed(consumed: bool) -> Self {
        if consumed {
            MouseOutcome::Consumed
        } else {
            MouseOutcome::Ignored
        }
    }
}

/// Translates crossterm mouse events into [`MouseAction`]s.
///
/// A release on the same cell as the matching press yields the release
/// followed by a click, mirroring how desktop toolkits report clicks.
#[derive(Debug, Default, Clone)]
pub struct MouseDecoder {
    pressed: Option<(MouseButton, Point)>,
}

impl MouseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decode(&mut self, event: &MouseEvent) -> Vec<(MouseAction, Point)> {
        let position = Point::from((event.column, event.row));
        match event.kind {
            MouseEventKind::Down(button) => {
                self.pressed = Some((button, position));
                vec![(down_action(button), position)]
            }
            MouseEventKind::Up(button) => {
                let mut actions = vec![(up_action(button), position)];
                if self.pressed.take() == Some((button, position)) {
                    actions.push((click_action(button), position));
                }
                actions
            }
            MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                vec![(MouseAction::Move, position)]
            }
            MouseEventKind::ScrollUp => vec![(MouseAction::ScrollUp, position)],
            MouseEventKind::ScrollDown => vec![(MouseAction::ScrollDown, position)],
            MouseEventKind::ScrollLeft => vec![(MouseAction::ScrollLeft, position)],
            MouseEventKind::ScrollRight => vec![(MouseAction::ScrollRight, position)],
        }
    }
}

fn down_action(button: MouseButton) -> MouseAction {
    match button {
        MouseButton::Left => MouseAction::LeftDown,
        MouseButton::Middle => MouseAction::MiddleDown,
        MouseButton::Right => MouseAction::RightDown,
    }
}

fn up_action(button: MouseButton) -> MouseAction {
    match button {
        MouseButton::Left => MouseAction::LeftUp,
        MouseButton::Middle => MouseAction::MiddleUp,
        MouseButton::Right => MouseAction::RightUp,
    }
}

fn click_action(button: MouseButton) -> MouseAction {
    match button {
        MouseButton::Left => MouseAction::LeftClick,
        MouseButton::Middle => MouseAction::MiddleClick,
        MouseButton::Right => MouseAction::RightClick,
    }
}
