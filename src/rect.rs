//! Signed cell-grid geometry.
//!
//! Window geometry is kept in signed integers because drag and resize math
//! can push an origin left of or above the screen before the manager's fitting
//! pass pulls it back. Conversion to `ratatui::layout::Rect` happens only at
//! the paint boundary.

use std::fmt;

use ratatui::layout;

/// A cell position, used for pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(u16, u16)> for Point {
    fn from((column, row): (u16, u16)) -> Self {
        Self {
            x: column as i32,
            y: row as i32,
        }
    }
}

/// Axis-aligned rectangle with signed origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: `x <= px < x + width`, same for rows.
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub const fn contains_point(&self, point: Point) -> bool {
        self.contains(point.x, point.y)
    }

    /// Decompose into `(x, y, width, height)`.
    pub const fn into_parts(self) -> (i32, i32, i32, i32) {
        (self.x, self.y, self.width, self.height)
    }

    /// Exclusive right edge.
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Shrink by `margin` cells on every side. Sizes never go below zero.
    pub fn inner(&self, margin: i32) -> Self {
        Self {
            x: self.x + margin,
            y: self.y + margin,
            width: (self.width - 2 * margin).max(0),
            height: (self.height - 2 * margin).max(0),
        }
    }

    /// Overlap of two rectangles; empty (zero-sized) when they do not meet.
    pub fn intersection(&self, other: Self) -> Self {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 <= x0 || y1 <= y0 {
            return Self::new(x0, y0, 0, 0);
        }
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Clamp negative sizes to zero.
    pub fn normalized(self) -> Self {
        Self {
            width: self.width.max(0),
            height: self.height.max(0),
            ..self
        }
    }

    /// Convert to a buffer-space rectangle, dropping anything left of or above
    /// the origin. Returns `None` when nothing remains.
    pub fn to_layout(self) -> Option<layout::Rect> {
        let visible = self.intersection(Self::new(0, 0, u16::MAX as i32, u16::MAX as i32));
        if visible.is_empty() {
            return None;
        }
        Some(layout::Rect {
            x: visible.x as u16,
            y: visible.y as u16,
            width: visible.width as u16,
            height: visible.height as u16,
        })
    }
}

impl From<layout::Rect> for Rect {
    fn from(rect: layout::Rect) -> Self {
        Self {
            x: rect.x as i32,
            y: rect.y as i32,
            width: rect.width as i32,
            height: rect.height as i32,
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{({}, {}) {}x{}}}",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(2, 3, 4, 5);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 7));
        assert!(!r.contains(6, 3));
        assert!(!r.contains(2, 8));
        assert!(!r.contains(1, 3));
        assert!(!r.contains(2, 2));
    }

    #[test]
    fn zero_sized_rect_contains_nothing() {
        let r = Rect::new(0, 0, 0, 0);
        assert!(!r.contains(0, 0));
    }

    #[test]
    fn into_parts_returns_fields() {
        assert_eq!(Rect::new(-1, 2, 30, 4).into_parts(), (-1, 2, 30, 4));
    }

    #[test]
    fn display_matches_compact_format() {
        assert_eq!(Rect::new(1, 2, 30, 40).to_string(), "{(1, 2) 30x40}");
    }

    #[test]
    fn intersection_of_disjoint_rects_is_empty() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(10, 10, 2, 2);
        assert!(a.intersection(b).is_empty());
        let c = Rect::new(3, 4, 10, 10);
        assert_eq!(a.intersection(c), Rect::new(3, 4, 2, 1));
    }

    #[test]
    fn inner_never_goes_negative() {
        assert_eq!(Rect::new(0, 0, 10, 4).inner(1), Rect::new(1, 1, 8, 2));
        assert_eq!(Rect::new(0, 0, 1, 1).inner(1), Rect::new(1, 1, 0, 0));
    }

    #[test]
    fn to_layout_clips_negative_origin() {
        let r = Rect::new(-3, 1, 10, 2);
        assert_eq!(
            r.to_layout(),
            Some(layout::Rect {
                x: 0,
                y: 1,
                width: 7,
                height: 2
            })
        );
        assert_eq!(Rect::new(-10, 0, 5, 5).to_layout(), None);
    }
}
