use core::convert::From;

use glam::IVec2;

/// A coordinate in the offset coordinate system.
///
/// The origin `(0, 0)` is the bottom-left (south-west) corner of the grid.
///
/// # Coordinate Ranges
///
/// `width` and `height` are the dimensions of the grid:
///
/// - **Non-wrapped axis**: `x ∈ [0, width)`, `y ∈ [0, height)`
/// - **Wrapped axis**: any integer, with `x ≡ x + width` (resp. `y ≡ y + height`)
///
/// By convention, we store coordinates normalized to `x ∈ [0, width)` and `y ∈ [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetCoordinate(pub IVec2);

impl OffsetCoordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    pub const fn into_inner(self) -> IVec2 {
        self.0
    }

    pub const fn to_array(self) -> [i32; 2] {
        [self.0.x, self.0.y]
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.0.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.0.y
    }
}

impl From<[i32; 2]> for OffsetCoordinate {
    fn from(value: [i32; 2]) -> Self {
        OffsetCoordinate::new(value[0], value[1])
    }
}
