//! Geometry - screen rectangles and tab column allocation

use serde::{Deserialize, Serialize};

/// A screen rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// Partition a rectangle into `n` equal-width tab columns.
///
/// Each column is `rect.width / n` wide (integer division; leftover pixels
/// stay unused at the right edge) and `tab_height` tall at the rectangle's
/// y-origin, tiled left-to-right with no gaps.
pub fn tab_columns(rect: Rect, n: usize, tab_height: u32) -> Vec<Rect> {
    debug_assert!(n >= 1);
    let column_width = rect.width / n as u32;

    let mut columns = Vec::with_capacity(n);
    let mut x = rect.x;
    let mut remaining = rect.width;
    for _ in 0..n {
        let width = column_width.min(remaining);
        columns.push(Rect::new(x, rect.y, width, tab_height));
        x += width as i32;
        remaining -= width;
    }
    columns
}

/// Width of one tab column for `n` windows in `rect`
pub fn tab_width(rect: Rect, n: usize) -> u32 {
    if n == 0 {
        rect.width
    } else {
        rect.width / n as u32
    }
}

/// The area below the tab strip, given to the single visible window
pub fn content_area(rect: Rect, tab_height: u32) -> Rect {
    Rect::new(
        rect.x,
        rect.y + tab_height as i32,
        rect.width,
        rect.height.saturating_sub(tab_height),
    )
}
