//! 2D size

use serde::{Deserialize, Serialize};

use super::Vec2;

/// Width and height of a window or area
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum, used to floor a size at a minimum
    pub fn max(self, floor: Size) -> Size {
        Size::new(self.width.max(floor.width), self.height.max(floor.height))
    }

    /// Grow (or shrink) by a pointer delta
    pub fn grow(self, delta: Vec2) -> Size {
        Size::new(self.width + delta.x, self.height + delta.y)
    }

    /// True when both dimensions are strictly positive
    pub fn is_positive(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_max_floors_each_axis() {
        let s = Size::new(120.0, 400.0).max(Size::new(200.0, 150.0));
        assert_eq!(s, Size::new(200.0, 400.0));
    }

    #[test]
    fn test_size_grow() {
        let s = Size::new(400.0, 300.0).grow(Vec2::new(-50.0, 25.0));
        assert_eq!(s, Size::new(350.0, 325.0));
    }
}
