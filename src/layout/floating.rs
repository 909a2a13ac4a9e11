//! Geometry for floating windows: border hit-testing, drag/resize math and
//! the per-frame fitting pass. Everything here is pure so the manager's state
//! machine stays small and the arithmetic can be tested in isolation.
use crate::rect::{Point, Rect};

/// Border region grabbed by a button-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEdge {
    Top,
    Right,
    Bottom,
    Left,
    BottomRight,
    BottomLeft,
}

impl WindowEdge {
    /// The top edge moves the window; every other edge resizes it.
    pub fn is_move(self) -> bool {
        matches!(self, WindowEdge::Top)
    }
}

/// Minimum window dimensions enforced after drags and on every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinSize {
    pub width: i32,
    pub height: i32,
}

/// Classify a pointer position against the border of `rect`.
///
/// The bottom row wins over the side columns, and the side columns win over
/// the top row, so the top corners resize horizontally rather than move.
pub fn edge_at(rect: Rect, point: Point) -> Option<WindowEdge> {
    let Rect {
        x: wx,
        y: wy,
        width: ww,
        height: wh,
    } = rect;
    let Point { x, y } = point;
    if y == wy + wh - 1 {
        if x == wx {
            Some(WindowEdge::BottomLeft)
        } else if x == wx + ww - 1 {
            Some(WindowEdge::BottomRight)
        } else {
            Some(WindowEdge::Bottom)
        }
    } else if x == wx {
        Some(WindowEdge::Left)
    } else if x == wx + ww - 1 {
        Some(WindowEdge::Right)
    } else if y == wy {
        Some(WindowEdge::Top)
    } else {
        None
    }
}

/// Apply one pointer motion of a drag gesture to the window's current rect.
///
/// `grab` is the pointer offset from the window origin recorded when the drag
/// began; it keeps the grabbed cell under the pointer while moving. Resizing
/// from the left keeps the right edge fixed. The result never drops below
/// `min` so the stored rect is always valid.
pub fn apply_drag(current: Rect, edge: WindowEdge, pointer: Point, grab: Point, min: MinSize) -> Rect {
    let Rect {
        x: wx,
        y: wy,
        width: ww,
        height: wh,
    } = current;
    let Point { x, y } = pointer;
    let (mut nx, ny, mut nw, mut nh) = match edge {
        WindowEdge::Top => (x - grab.x, y - grab.y, ww, wh),
        WindowEdge::Right => (wx, wy, x - wx + 1, wh),
        WindowEdge::Bottom => (wx, wy, ww, y - wy + 1),
        WindowEdge::Left => (x, wy, ww + wx - x, wh),
        WindowEdge::BottomRight => (wx, wy, x - wx + 1, y - wy + 1),
        WindowEdge::BottomLeft => (x, wy, ww + wx - x, y - wy + 1),
    };
    if nw < min.width {
        if matches!(edge, WindowEdge::Left | WindowEdge::BottomLeft) {
            nx = wx + ww - min.width;
        }
        nw = min.width;
    }
    if nh < min.height {
        nh = min.height;
    }
    Rect::new(nx, ny, nw, nh)
}

/// Clamp a window rect into `bounds` (the manager's inner rect).
///
/// The origin is pulled inside first, then the size is raised to the minimum,
/// capped to the bounds (or forced to fill them when maximized), and finally
/// the origin is shifted back so the window does not overflow the right or
/// bottom edge. Applying it to its own output is a no-op.
pub fn fit_rect(rect: Rect, bounds: Rect, min: MinSize, maximized: bool) -> Rect {
    let Rect {
        x: mut x,
        y: mut y,
        width: mut w,
        height: mut h,
    } = rect;
    let Rect {
        x: mx,
        y: my,
        width: mw,
        height: mh,
    } = bounds;

    if x < mx {
        x = mx;
    }
    if y < my {
        y = my;
    }
    if w < min.width {
        w = min.width;
    }
    if h < min.height {
        h = min.height;
    }
    if w > mw || maximized {
        w = mw.max(0);
        x = mx;
    }
    if h > mh || maximized {
        h = mh.max(0);
        y = my;
    }
    if x + w > mx + mw {
        x = mx + mw - w;
    }
    if y + h > my + mh {
        y = my + mh - h;
    }
    Rect::new(x, y, w, h)
}

/// Centre `rect` inside `bounds`, keeping its size. Uses truncating division,
/// so a window larger than the bounds ends up straddling them evenly.
pub fn center_rect(rect: Rect, bounds: Rect) -> Rect {
    Rect::new(
        bounds.x + (bounds.width - rect.width) / 2,
        bounds.y + (bounds.height - rect.height) / 2,
        rect.width,
        rect.height,
    )
}
