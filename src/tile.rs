use crate::{
    grid::{OffsetCoordinate, SquareGrid},
    map::{Map, PlayerId, ResourceBody},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// `Tile` represents a cell on the map, where the `usize` is the index of the current cell.
///
/// The index is row-major: the tile at `(x, y)` has index `y * width + x`.
pub struct Tile(usize);

impl Tile {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the index of the tile.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// Converts a tile to the corresponding offset coordinate based on grid parameters.
    pub fn to_offset(&self, grid: SquareGrid) -> OffsetCoordinate {
        grid.tile_to_offset(*self)
    }

    /// Returns the resource body on the tile, if any.
    #[inline]
    pub fn resource(&self, map: &Map) -> Option<ResourceBody> {
        map.resource_list[self.0]
    }

    /// Returns the player whose start marker sits on the tile, if any.
    #[inline]
    pub fn owner(&self, map: &Map) -> Option<PlayerId> {
        map.owner_list[self.0]
    }

    /// Resource quantity held by the tile, `0` when the tile is empty.
    #[inline]
    pub fn quantity(&self, map: &Map) -> u32 {
        self.resource(map).map_or(0, |resource| resource.quantity)
    }
}
