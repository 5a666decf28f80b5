use serde::{Deserialize, Serialize};

use crate::tile::Tile;

use super::{Size, WrapFlags, direction::Direction, offset_coordinate::OffsetCoordinate};

pub mod square;

/// A rectangular grid of square cells.
///
/// Cells are stored row-major: the cell at `(x, y)` has index `y * width + x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareGrid {
    pub size: Size,
    pub wrap_flags: WrapFlags,
}

impl SquareGrid {
    pub const fn new(size: Size, wrap_flags: WrapFlags) -> Self {
        Self { size, wrap_flags }
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.size.width
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.size.height
    }

    #[inline]
    pub fn wrap_x(&self) -> bool {
        self.wrap_flags.contains(WrapFlags::WrapX)
    }

    #[inline]
    pub fn wrap_y(&self) -> bool {
        self.wrap_flags.contains(WrapFlags::WrapY)
    }

    /// Normalizes `offset_coordinate` into `[0, width) × [0, height)`.
    ///
    /// Wrapped axes are folded back into range; returns `None` if the coordinate
    /// lies outside a non-wrapped axis.
    pub fn normalize_offset(&self, offset_coordinate: OffsetCoordinate) -> Option<OffsetCoordinate> {
        let width = self.width() as i32;
        let height = self.height() as i32;
        if width == 0 || height == 0 {
            return None;
        }

        let [mut x, mut y] = offset_coordinate.to_array();

        if self.wrap_x() {
            x = x.rem_euclid(width);
        }
        if self.wrap_y() {
            y = y.rem_euclid(height);
        }

        if (0..width).contains(&x) && (0..height).contains(&y) {
            Some(OffsetCoordinate::new(x, y))
        } else {
            None
        }
    }

    /// Converts an offset coordinate into the [`Tile`] at that position.
    pub fn offset_to_tile(&self, offset_coordinate: OffsetCoordinate) -> Option<Tile> {
        self.normalize_offset(offset_coordinate).map(|offset_coordinate| {
            let [x, y] = offset_coordinate.to_array();
            Tile::new(y as usize * self.width() as usize + x as usize)
        })
    }

    /// Converts a [`Tile`] back into its offset coordinate.
    pub fn tile_to_offset(&self, tile: Tile) -> OffsetCoordinate {
        debug_assert!(
            tile.index() < self.size.area(),
            "Tile index {} is out of bounds for a {}x{} grid",
            tile.index(),
            self.width(),
            self.height()
        );
        let width = self.width() as usize;
        OffsetCoordinate::new((tile.index() % width) as i32, (tile.index() / width) as i32)
    }

    /// Returns the coordinate one step away in `direction`, or `None` when the step leaves a non-wrapped grid.
    pub fn neighbor(
        &self,
        offset_coordinate: OffsetCoordinate,
        direction: Direction,
    ) -> Option<OffsetCoordinate> {
        self.normalize_offset(OffsetCoordinate(
            offset_coordinate.into_inner() + direction.unit_offset(),
        ))
    }

    /// Manhattan distance between two coordinates, taking the shorter way around wrapped axes.
    pub fn distance_to(&self, start: OffsetCoordinate, dest: OffsetCoordinate) -> u32 {
        let mut dx = (dest.x() - start.x()).unsigned_abs();
        let mut dy = (dest.y() - start.y()).unsigned_abs();

        if self.wrap_x() {
            dx = dx.min(self.width().saturating_sub(dx));
        }
        if self.wrap_y() {
            dy = dy.min(self.height().saturating_sub(dy));
        }

        dx + dy
    }
}
