//! Rect value object - Rectangle representation
//!
//! Rectangles are in device units. They describe window bounds, either in
//! screen space or mapped into the host window's client space.

/// Width and height in device units
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A rectangle defined by its bounds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Create a new rectangle from bounds
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from position and size
    pub fn from_pos_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width,
            bottom: y + height,
        }
    }

    /// Rectangle anchored at the origin
    pub fn from_size(size: Size) -> Self {
        Self::from_pos_size(0, 0, size.width, size.height)
    }

    /// Get width
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Get height
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Get size
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Area, or `None` unless both dimensions are strictly positive.
    ///
    /// Computed in i64 so that oversized child windows cannot overflow.
    pub fn positive_area(&self) -> Option<i64> {
        let (w, h) = (self.width(), self.height());
        if w > 0 && h > 0 {
            Some(w as i64 * h as i64)
        } else {
            None
        }
    }

    /// Move the rectangle by an offset
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }
}
