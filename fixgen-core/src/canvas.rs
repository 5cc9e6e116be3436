/// Light grey used for every fixture
pub const FILL: [u8; 3] = [200, 200, 200];

/// Uniform RGB canvas to be encoded into each target format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub fill: [u8; 3],
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fill: FILL,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
