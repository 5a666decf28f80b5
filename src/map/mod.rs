//! This module defines the [`Map`] struct, the grid of cells populated by the generators.
//!
//! The map is owned by the caller. Generators receive it by mutable reference and only
//! overwrite the state of existing cells; the grid is never resized.

use std::fmt;

use crate::{
    grid::{OffsetCoordinate, Rectangle, Size, SquareGrid},
    map_parameters::MapParameters,
    tile::Tile,
};

/// Identifies a player. Player ids are `0..player_num`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// A resource-bearing body (planet or deposit) occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceBody {
    /// Amount of resource the cell holds, in `1..=MapParameters::MAX_CELL_QUANTITY`.
    pub quantity: u32,
    /// Radius of the body the cell belongs to.
    ///
    /// `0` is a single-cell deposit. A radius `r` body covers every cell within
    /// Manhattan distance `r` of its centre.
    pub radius: u32,
}

impl ResourceBody {
    pub const fn new(quantity: u32, radius: u32) -> Self {
        Self { quantity, radius }
    }

    /// A single-cell deposit.
    pub const fn deposit(quantity: u32) -> Self {
        Self::new(quantity, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    /// Grid of the map.
    grid: SquareGrid,
    /// Resource of each tile. The index of the resource is equal to [`Tile::index()`].
    pub(crate) resource_list: Vec<Option<ResourceBody>>,
    /// Player start marker of each tile. The index of the owner is equal to [`Tile::index()`].
    pub(crate) owner_list: Vec<Option<PlayerId>>,
}

impl Map {
    /// Creates an empty map: no resources and no start markers.
    pub fn new(grid: SquareGrid) -> Self {
        let size = grid.size.area();
        Self {
            grid,
            resource_list: vec![None; size],
            owner_list: vec![None; size],
        }
    }

    /// Creates an empty map sized for the given parameters.
    pub fn from_parameters(map_parameters: &MapParameters) -> Self {
        Self::new(map_parameters.grid)
    }

    #[inline]
    pub fn grid(&self) -> SquareGrid {
        self.grid
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.grid.size
    }

    /// Returns an iterator over all tiles in the map.
    #[must_use = "iterators are lazy and do nothing unless consumed"]
    pub fn all_tiles(&self) -> impl Iterator<Item = Tile> + use<> {
        (0..self.grid.size.area()).map(Tile::new)
    }

    /// Returns the tile at `offset_coordinate`, folding wrapped axes back into range.
    pub fn tile_at(&self, offset_coordinate: OffsetCoordinate) -> Option<Tile> {
        self.grid.offset_to_tile(offset_coordinate)
    }

    pub fn set_resource(&mut self, tile: Tile, resource: Option<ResourceBody>) {
        self.resource_list[tile.index()] = resource;
    }

    pub fn set_owner(&mut self, tile: Tile, owner: Option<PlayerId>) {
        self.owner_list[tile.index()] = owner;
    }

    /// Resets every cell to the explicit empty state.
    pub fn clear(&mut self) {
        self.resource_list.fill(None);
        self.owner_list.fill(None);
    }

    /// The number of tiles holding a resource body.
    pub fn resource_tile_count(&self) -> usize {
        self.resource_list.iter().flatten().count()
    }

    /// Sum of the resource quantity of every tile.
    pub fn total_quantity(&self) -> u64 {
        self.resource_list
            .iter()
            .flatten()
            .map(|resource| resource.quantity as u64)
            .sum()
    }

    /// Sum of the resource quantity of every tile inside `rectangle`.
    ///
    /// Coordinates outside the map are ignored.
    pub fn quantity_in(&self, rectangle: &Rectangle) -> u64 {
        rectangle
            .iter_offsets()
            .filter_map(|offset_coordinate| self.tile_at(offset_coordinate))
            .map(|tile| tile.quantity(self) as u64)
            .sum()
    }

    /// Every tile carrying a player start marker, ordered by tile index.
    pub fn starting_tiles(&self) -> Vec<(Tile, PlayerId)> {
        self.owner_list
            .iter()
            .enumerate()
            .filter_map(|(index, owner)| owner.map(|player| (Tile::new(index), player)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Map, PlayerId, ResourceBody};
    use crate::grid::{OffsetCoordinate, Rectangle, Size, SquareGrid, WrapFlags};

    fn small_map() -> Map {
        Map::new(SquareGrid::new(Size::new(4, 2), WrapFlags::empty()))
    }

    #[test]
    fn new_map_is_empty() {
        let map = small_map();
        assert_eq!(map.all_tiles().count(), 8);
        assert!(map.all_tiles().all(|tile| tile.resource(&map).is_none()));
        assert!(map.starting_tiles().is_empty());
        assert_eq!(map.total_quantity(), 0);
    }

    #[test]
    fn aggregates_follow_cell_writes() {
        let mut map = small_map();
        let a = map.tile_at(OffsetCoordinate::new(0, 0)).unwrap();
        let b = map.tile_at(OffsetCoordinate::new(3, 1)).unwrap();
        map.set_resource(a, Some(ResourceBody::deposit(100)));
        map.set_resource(b, Some(ResourceBody::new(40, 2)));
        map.set_owner(b, Some(PlayerId(1)));

        assert_eq!(map.resource_tile_count(), 2);
        assert_eq!(map.total_quantity(), 140);
        let left = Rectangle::new(OffsetCoordinate::new(0, 0), 2, 2);
        assert_eq!(map.quantity_in(&left), 100);
        assert_eq!(map.starting_tiles(), vec![(b, PlayerId(1))]);

        map.clear();
        assert_eq!(map, small_map());
    }
}
