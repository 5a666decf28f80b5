use bitflags::bitflags;
use serde::{Deserialize, Serialize};

pub mod direction;
pub mod offset_coordinate;
pub mod rectangle;
pub mod square_grid;

pub use direction::Direction;
pub use offset_coordinate::OffsetCoordinate;
pub use rectangle::Rectangle;
pub use square_grid::{SquareGrid, square::Square};

/// Represents the size of a grid or map with a specified width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The number of cells covered by a grid of this size.
    #[inline]
    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

bitflags! {
    /// The map wrapping settings.
    ///
    /// - If `WrapX` is set, the left and right edges of the grid are adjacent.
    /// - If `WrapY` is set, the top and bottom edges of the grid are adjacent.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct WrapFlags: u8 {
        const WrapX = 0b00000001;
        const WrapY = 0b00000010;
    }
}
