use std::ops::Add;

use glam::IVec2;

use crate::grid::offset_coordinate::OffsetCoordinate;

/// A square cell position used for footprint arithmetic.
///
/// Unlike [`OffsetCoordinate`], a [`Square`] is never normalized against a grid,
/// so it can freely step outside the map while shapes are being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square(IVec2);

impl Square {
    pub const fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    pub const fn x(&self) -> i32 {
        self.0.x
    }

    pub const fn y(&self) -> i32 {
        self.0.y
    }

    /// Convert the [`Square`] into an [`OffsetCoordinate`].
    pub fn to_offset(self) -> OffsetCoordinate {
        OffsetCoordinate::new(self.x(), self.y())
    }

    /// Return a [`Vec<Square>`] containing all [`Square`] around `self` in a given `distance`, including `self`. \
    /// The number of returned squares is equal to `2 * distance * (distance + 1) + 1`.
    pub fn squares_in_distance(self, distance: u32) -> Vec<Self> {
        let mut square_list = Vec::with_capacity((2 * distance * (distance + 1) + 1) as usize);
        let radius = distance as i32;

        for x in -radius..=radius {
            let y_max = radius - x.abs();
            for y in -y_max..=y_max {
                square_list.push(self + Self::new(x, y));
            }
        }

        square_list
    }
}

impl Add for Square {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
