use std::fmt;
use std::sync::Arc;

use crate::constants::{BUTTON_LEFT_START, BUTTON_RIGHT_START, BUTTON_STRIDE};

/// Which end of the title bar a button packs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSide {
    #[default]
    Left,
    Right,
}

pub type ButtonCallback = Arc<dyn Fn() + Send + Sync>;

/// A single-glyph affordance on a window's top border, painted as `[g]`.
#[derive(Clone)]
pub struct WindowButton {
    symbol: char,
    side: ButtonSide,
    on_click: Option<ButtonCallback>,
    offset_x: i32,
    offset_y: i32,
}

impl WindowButton {
    pub fn new(symbol: char, side: ButtonSide) -> Self {
        Self {
            symbol,
            side,
            on_click: None,
            offset_x: 0,
            offset_y: 0,
        }
    }

    pub fn with_on_click<F>(mut self, on_click: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(on_click));
        self
    }

    pub fn set_on_click<F>(&mut self, on_click: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(on_click));
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn side(&self) -> ButtonSide {
        self.side
    }

    /// Column offset assigned by the last layout pass. Non-negative offsets
    /// count from the left edge, negative ones from the exclusive right edge.
    pub fn offset_x(&self) -> i32 {
        self.offset_x
    }

    pub fn offset_y(&self) -> i32 {
        self.offset_y
    }

    pub(crate) fn callback(&self) -> Option<ButtonCallback> {
        self.on_click.clone()
    }

    /// Absolute column of the glyph for a window spanning `x..x + width`.
    pub fn column(&self, x: i32, width: i32) -> i32 {
        if self.offset_x < 0 {
            x + width + self.offset_x
        } else {
            x + self.offset_x
        }
    }

    /// Absolute row of the glyph for a window spanning `y..y + height`.
    pub fn row(&self, y: i32, height: i32) -> i32 {
        if self.offset_y < 0 {
            y + height + self.offset_y
        } else {
            y + self.offset_y
        }
    }
}

impl fmt::Debug for WindowButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowButton")
            .field("symbol", &self.symbol)
            .field("side", &self.side)
            .field("offset_x", &self.offset_x)
            .field("has_on_click", &self.on_click.is_some())
            .finish()
    }
}

/// Recompute every button offset in insertion order. Left buttons pack
/// rightwards from the left edge, right buttons pack leftwards from the
/// right edge; each side keeps its own cursor.
pub(crate) fn layout_buttons(buttons: &mut [WindowButton]) {
    let mut left = BUTTON_LEFT_START;
    let mut right = BUTTON_RIGHT_START;
    for button in buttons {
        match button.side {
            ButtonSide::Left => {
                button.offset_x = left;
                left += BUTTON_STRIDE;
            }
            ButtonSide::Right => {
                button.offset_x = right;
                right -= BUTTON_STRIDE;
            }
        }
        button.offset_y = 0;
    }
}
