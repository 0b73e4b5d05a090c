use serde::{Deserialize, Serialize};

/// A rectangle with integer screen coordinates.
///
/// Uses left/top/right/bottom format where right and bottom are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from x, y, width, height.
    ///
    /// The far edges saturate at `i32::MAX`.
    pub fn from_xywh(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            left: x,
            top: y,
            right: x.saturating_add_unsigned(width),
            bottom: y.saturating_add_unsigned(height),
        }
    }

    pub fn x(&self) -> i32 {
        self.left
    }

    pub fn y(&self) -> i32 {
        self.top
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top).max(0) as u32
    }

    pub fn size(&self) -> PhysicalSize {
        PhysicalSize::new(self.width(), self.height())
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn center(&self) -> (i32, i32) {
        ((self.left + self.right) / 2, (self.top + self.bottom) / 2)
    }

    /// Check if a point is inside the rectangle (exclusive of right/bottom edges)
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// Same position, new size.
    pub fn with_size(&self, width: u32, height: u32) -> Self {
        Self::from_xywh(self.left, self.top, width, height)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalSize {
    pub width: u32,
    pub height: u32,
}

impl PhysicalSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_from_xywh() {
        let r = Rect::from_xywh(10, 20, 100, 50);
        assert_eq!(r, Rect::new(10, 20, 110, 70));
        assert_eq!(r.x(), 10);
        assert_eq!(r.y(), 20);
    }

    #[test]
    fn rect_from_xywh_saturates() {
        let r = Rect::from_xywh(i32::MAX - 10, -5, u32::MAX, 20);
        assert_eq!(r.right, i32::MAX);
        assert_eq!(r.width(), 10);
        assert_eq!(r.bottom, 15);

        let wide = Rect::from_xywh(i32::MIN, 0, u32::MAX, 1);
        assert_eq!(wide.right, i32::MAX);
        assert_eq!(wide.width(), i32::MAX as u32);
    }

    #[test]
    fn rect_dimensions_never_negative() {
        let r = Rect::new(100, 100, 50, 50);
        assert_eq!(r.width(), 0);
        assert_eq!(r.height(), 0);
        assert!(r.is_empty());
    }

    #[test]
    fn rect_contains_is_exclusive() {
        let r = Rect::new(10, 10, 100, 100);
        assert!(r.contains(10, 10));
        assert!(r.contains(99, 99));
        assert!(!r.contains(100, 100));
    }

    #[test]
    fn rect_offset_and_resize() {
        let r = Rect::new(10, 10, 20, 20);
        assert_eq!(r.offset(5, -5), Rect::new(15, 5, 25, 15));
        assert_eq!(r.with_size(30, 40), Rect::new(10, 10, 40, 50));
        assert_eq!(r.size(), PhysicalSize::new(10, 10));
    }
}
