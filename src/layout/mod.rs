pub mod floating;

pub use floating::{MinSize, WindowEdge, apply_drag, center_rect, edge_at, fit_rect};
