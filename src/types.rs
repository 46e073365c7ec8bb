//! Shared geometry types

/// Axis-aligned rectangle in host pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// The four 1-pixel edges of this rectangle: top, bottom, left, right
    pub fn frame_edges(&self) -> [Rect; 4] {
        let bottom_y = self.bottom() - 1;
        let right_x = self.right() - 1;
        [
            Rect::new(self.x, self.y, self.width, 1),
            Rect::new(self.x, bottom_y, self.width, 1),
            Rect::new(self.x, self.y, 1, self.height),
            Rect::new(right_x, self.y, 1, self.height),
        ]
    }
}
