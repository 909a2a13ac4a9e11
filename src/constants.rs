//! Shared crate-wide constants.

/// Default minimum width, in columns, the fitting pass enforces on every
/// visible window.
pub const DEFAULT_MIN_WINDOW_WIDTH: i32 = 3;

/// Default minimum height, in rows, the fitting pass enforces on every
/// visible window.
pub const DEFAULT_MIN_WINDOW_HEIGHT: i32 = 3;

/// Column offset of the first left-aligned title-bar button, measured from
/// the window's left edge.
pub const BUTTON_LEFT_START: i32 = 2;

/// Column offset of the first right-aligned title-bar button, measured from
/// the window's exclusive right edge.
///
/// One column further from its edge than the left side, so `[x]` never
/// overwrites the top-right corner glyph.
pub const BUTTON_RIGHT_START: i32 = -3;

/// Distance between consecutive buttons on the same side. Each button is
/// painted as three cells: `[`, glyph, `]`.
pub const BUTTON_STRIDE: i32 = 3;

/// Target z-index meaning "the current top of the stack".
pub const WINDOW_Z_TOP: isize = -1;

/// Target z-index meaning "the bottom of the stack".
pub const WINDOW_Z_BOTTOM: isize = 0;
