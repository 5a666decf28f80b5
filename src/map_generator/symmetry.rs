//! Symmetric region layout shared by every generator.
//!
//! The map is cut into a `rows x cols` lattice of equal rectangles, one per player.
//! Generators fill a single base tile the size of one rectangle, and the layout stamps
//! it into every region, so every region has identical resource totals.
//!
//! Along each axis the copies are either mirrored (odd columns east-west, odd rows
//! north-south) or translated. Mirroring is used when it moves every start onto another
//! start: with exactly two regions along the axis, or an even count on a wrapped axis.
//! Any other count is translated, which spaces the starts one region apart. Either way
//! every player sees its rivals at the same distances.

use arrayvec::ArrayVec;
use log::debug;

use crate::{
    error::MapGenError,
    grid::{OffsetCoordinate, Rectangle, Size, SquareGrid, WrapFlags},
    map::{Map, PlayerId, ResourceBody},
    map_parameters::MapParameters,
};

/// The contents of one base tile, in the tile's local coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayout {
    size: Size,
    /// Resource of each cell of the tile, row-major.
    resource_list: Vec<Option<ResourceBody>>,
    /// The start tile of the player owning this tile.
    start: OffsetCoordinate,
}

impl TileLayout {
    /// An empty tile with the start marker at `start`.
    pub fn new(size: Size, start: OffsetCoordinate) -> Self {
        debug_assert!(
            start.x() >= 0
                && (start.x() as u32) < size.width
                && start.y() >= 0
                && (start.y() as u32) < size.height,
            "start ({}, {}) is outside the {}x{} tile",
            start.x(),
            start.y(),
            size.width,
            size.height
        );
        Self {
            size,
            resource_list: vec![None; size.area()],
            start,
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn start(&self) -> OffsetCoordinate {
        self.start
    }

    #[inline]
    fn index(&self, offset_coordinate: OffsetCoordinate) -> usize {
        offset_coordinate.y() as usize * self.size.width as usize + offset_coordinate.x() as usize
    }

    pub fn resource(&self, offset_coordinate: OffsetCoordinate) -> Option<ResourceBody> {
        self.resource_list[self.index(offset_coordinate)]
    }

    pub fn set_resource(&mut self, offset_coordinate: OffsetCoordinate, resource: Option<ResourceBody>) {
        let index = self.index(offset_coordinate);
        self.resource_list[index] = resource;
    }

    /// Sum of the resource quantity over the tile.
    pub fn total_quantity(&self) -> u64 {
        self.resource_list
            .iter()
            .flatten()
            .map(|resource| resource.quantity as u64)
            .sum()
    }
}

/// The assignment of players to mirrored rectangular regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymmetryLayout {
    map_grid: SquareGrid,
    rows: u32,
    cols: u32,
    /// Whether odd columns hold east-west mirror images of the base tile.
    mirror_x: bool,
    /// Whether odd rows hold north-south mirror images of the base tile.
    mirror_y: bool,
    tile_size: Size,
    /// Region of each player. The index is equal to the player id.
    region_list: ArrayVec<Rectangle, { MapParameters::MAX_PLAYER_NUM as usize }>,
}

impl SymmetryLayout {
    /// Computes the layout for the map and player count in `map_parameters`.
    pub fn new(map_parameters: &MapParameters) -> Result<Self, MapGenError> {
        Self::from_grid(map_parameters.grid, map_parameters.player_num)
    }

    /// Computes the region lattice for `player_num` players on `map_grid`.
    ///
    /// `rows` is the largest divisor of `player_num` not exceeding its square root and
    /// `cols = player_num / rows`, so 2 players split the map east-west and 4 players get quadrants.
    ///
    /// # Errors
    ///
    /// Returns [`MapGenError::Configuration`] when the map is empty, there are no players or too many,
    /// or the map cannot be cut into equal regions.
    pub fn from_grid(map_grid: SquareGrid, player_num: u32) -> Result<Self, MapGenError> {
        let map_size = map_grid.size;
        let infeasible = |reason: String| {
            Err(MapGenError::Configuration {
                width: map_size.width,
                height: map_size.height,
                player_num,
                reason,
            })
        };

        if map_size.width == 0 || map_size.height == 0 {
            return infeasible("the map has no cells".to_owned());
        }
        if player_num == 0 {
            return infeasible("at least one player is required".to_owned());
        }
        if player_num > MapParameters::MAX_PLAYER_NUM {
            return infeasible(format!(
                "at most {} players are supported",
                MapParameters::MAX_PLAYER_NUM
            ));
        }

        let rows = (1..=player_num)
            .take_while(|rows| rows * rows <= player_num)
            .filter(|rows| player_num % rows == 0)
            .last()
            .unwrap_or(1);
        let cols = player_num / rows;

        if map_size.width % cols != 0 || map_size.height % rows != 0 {
            return infeasible(format!(
                "the map does not split into {cols} columns and {rows} rows of equal regions"
            ));
        }

        let tile_size = Size::new(map_size.width / cols, map_size.height / rows);
        let mirror_x = mirrors_fairly(cols, map_grid.wrap_x());
        let mirror_y = mirrors_fairly(rows, map_grid.wrap_y());

        let region_list = (0..player_num)
            .map(|player| {
                let origin = OffsetCoordinate::new(
                    ((player % cols) * tile_size.width) as i32,
                    ((player / cols) * tile_size.height) as i32,
                );
                Rectangle::new(origin, tile_size.width, tile_size.height)
            })
            .collect();

        debug!(
            "{player_num} players on a {}x{} map: {rows}x{cols} regions of {}x{} (mirror x: {mirror_x}, mirror y: {mirror_y})",
            map_size.width, map_size.height, tile_size.width, tile_size.height
        );

        Ok(Self {
            map_grid,
            rows,
            cols,
            mirror_x,
            mirror_y,
            tile_size,
            region_list,
        })
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    pub fn mirror_x(&self) -> bool {
        self.mirror_x
    }

    #[inline]
    pub fn mirror_y(&self) -> bool {
        self.mirror_y
    }

    #[inline]
    pub fn tile_size(&self) -> Size {
        self.tile_size
    }

    #[inline]
    pub fn player_num(&self) -> u32 {
        self.region_list.len() as u32
    }

    /// Iterates over every player id.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + use<> {
        (0..self.player_num()).map(PlayerId)
    }

    /// The region owned by `player`.
    pub fn region(&self, player: PlayerId) -> Rectangle {
        self.region_list[player.0 as usize]
    }

    /// The grid the base tile is generated on.
    ///
    /// A translated axis wraps when the tile's east (north) edge meets a copy of its own west
    /// (south) edge: across several regions, or across a single region on a wrapped map.
    /// A mirrored axis never wraps, since there the tile edge borders its own reflection.
    pub fn tile_grid(&self) -> SquareGrid {
        let mut wrap_flags = WrapFlags::empty();
        if !self.mirror_x && (self.cols > 1 || self.map_grid.wrap_x()) {
            wrap_flags |= WrapFlags::WrapX;
        }
        if !self.mirror_y && (self.rows > 1 || self.map_grid.wrap_y()) {
            wrap_flags |= WrapFlags::WrapY;
        }
        SquareGrid::new(self.tile_size, wrap_flags)
    }

    /// Maps a coordinate local to the base tile into the map coordinate of its copy in `player`'s region.
    pub fn project(&self, player: PlayerId, local: OffsetCoordinate) -> OffsetCoordinate {
        let region = self.region(player);
        let col = player.0 % self.cols;
        let row = player.0 / self.cols;

        let x = if self.mirror_x && col % 2 == 1 {
            self.tile_size.width as i32 - 1 - local.x()
        } else {
            local.x()
        };
        let y = if self.mirror_y && row % 2 == 1 {
            self.tile_size.height as i32 - 1 - local.y()
        } else {
            local.y()
        };

        OffsetCoordinate::new(region.west_x() + x, region.south_y() + y)
    }

    /// Overwrites every cell of `map` with the copies of `tile_layout`.
    ///
    /// All cells are first reset, so cells are either explicitly empty or hold a resource afterwards.
    pub fn stamp(&self, tile_layout: &TileLayout, map: &mut Map) {
        debug_assert_eq!(map.size(), self.map_grid.size, "map size differs from the layout");
        debug_assert_eq!(tile_layout.size(), self.tile_size, "tile size differs from the layout");

        map.clear();

        let local_region = Rectangle::new(
            OffsetCoordinate::new(0, 0),
            self.tile_size.width,
            self.tile_size.height,
        );

        for player in self.players() {
            for local in local_region.iter_offsets() {
                if let Some(tile) = map.tile_at(self.project(player, local)) {
                    map.set_resource(tile, tile_layout.resource(local));
                }
            }

            if let Some(tile) = map.tile_at(self.project(player, tile_layout.start())) {
                map.set_owner(tile, Some(player));
            }
        }
    }
}

/// Whether mirroring `count` regions along an axis maps every start onto another start.
///
/// Two regions are a reflection of the whole axis. More regions only close up under
/// reflection when the axis wraps and their count is even.
fn mirrors_fairly(count: u32, wrap: bool) -> bool {
    count == 2 || (wrap && count % 2 == 0)
}

#[cfg(test)]
mod tests {
    use super::{SymmetryLayout, TileLayout};
    use crate::{
        error::MapGenError,
        grid::{OffsetCoordinate, Size, SquareGrid, WrapFlags},
        map::{Map, PlayerId, ResourceBody},
    };

    fn torus(width: u32, height: u32) -> SquareGrid {
        SquareGrid::new(Size::new(width, height), WrapFlags::WrapX | WrapFlags::WrapY)
    }

    fn bounded(width: u32, height: u32) -> SquareGrid {
        SquareGrid::new(Size::new(width, height), WrapFlags::empty())
    }

    #[test]
    fn lattice_shapes() {
        let cases = [(1, 1, 1), (2, 1, 2), (3, 1, 3), (4, 2, 2), (6, 2, 3), (8, 2, 4), (9, 3, 3), (16, 4, 4)];
        for (player_num, rows, cols) in cases {
            let layout = SymmetryLayout::from_grid(torus(48, 48), player_num).unwrap();
            assert_eq!((layout.rows(), layout.cols()), (rows, cols), "FAIL lattice {player_num}");
            assert_eq!(layout.player_num(), player_num);
        }
    }

    #[test]
    fn infeasible_layouts_are_rejected() {
        let cases = [
            (Size::new(2, 2), 8),
            (Size::new(0, 8), 1),
            (Size::new(8, 8), 0),
            (Size::new(64, 64), 17),
            (Size::new(15, 16), 2),
        ];
        for (size, player_num) in cases {
            assert!(
                matches!(
                    SymmetryLayout::from_grid(SquareGrid::new(size, WrapFlags::empty()), player_num),
                    Err(MapGenError::Configuration { .. })
                ),
                "FAIL {}x{} with {player_num} players",
                size.width,
                size.height
            );
        }
    }

    #[test]
    fn regions_partition_the_map() {
        let layout = SymmetryLayout::from_grid(bounded(12, 8), 4).unwrap();
        let mut covered = vec![0; 12 * 8];
        for player in layout.players() {
            for offset in layout.region(player).iter_offsets() {
                covered[(offset.y() * 12 + offset.x()) as usize] += 1;
            }
        }
        assert!(covered.iter().all(|&count| count == 1));
    }

    #[test]
    fn mirroring_depends_on_region_count_and_wrapping() {
        // (players, wrapped, mirror_x, mirror_y)
        let cases = [
            (1, true, false, false),
            (2, false, true, false),
            (3, true, false, false),
            (4, false, true, true),
            (6, true, false, true),
            (8, true, true, true),
            (8, false, false, true),
            (16, false, false, false),
        ];
        for (player_num, wrapped, mirror_x, mirror_y) in cases {
            let map_grid = if wrapped { torus(48, 48) } else { bounded(48, 48) };
            let layout = SymmetryLayout::from_grid(map_grid, player_num).unwrap();
            assert_eq!(
                (layout.mirror_x(), layout.mirror_y()),
                (mirror_x, mirror_y),
                "FAIL mirroring {player_num} players, wrapped {wrapped}"
            );
        }
    }

    #[test]
    fn project_mirrors_odd_columns_and_rows() {
        let layout = SymmetryLayout::from_grid(bounded(8, 6), 4).unwrap();
        let local = OffsetCoordinate::new(1, 0);
        assert_eq!(layout.project(PlayerId(0), local), OffsetCoordinate::new(1, 0));
        assert_eq!(layout.project(PlayerId(1), local), OffsetCoordinate::new(6, 0));
        assert_eq!(layout.project(PlayerId(2), local), OffsetCoordinate::new(1, 5));
        assert_eq!(layout.project(PlayerId(3), local), OffsetCoordinate::new(6, 5));
    }

    #[test]
    fn project_translates_odd_region_counts() {
        let layout = SymmetryLayout::from_grid(torus(12, 4), 3).unwrap();
        let local = OffsetCoordinate::new(1, 2);
        assert_eq!(layout.project(PlayerId(0), local), OffsetCoordinate::new(1, 2));
        assert_eq!(layout.project(PlayerId(1), local), OffsetCoordinate::new(5, 2));
        assert_eq!(layout.project(PlayerId(2), local), OffsetCoordinate::new(9, 2));
    }

    #[test]
    fn starts_are_equally_spaced_for_every_player() {
        let grids = [torus(48, 16), bounded(48, 16), torus(48, 48), bounded(48, 48)];
        for map_grid in grids {
            for player_num in [2, 3, 4, 6, 8, 9, 16] {
                let Ok(layout) = SymmetryLayout::from_grid(map_grid, player_num) else {
                    continue;
                };
                let tile_size = layout.tile_size();
                // A start close to the tile corner makes any unfair spacing visible.
                let start = OffsetCoordinate::new(
                    (tile_size.width / 4) as i32,
                    (tile_size.height / 3) as i32,
                );
                let starts: Vec<_> = layout.players().map(|player| layout.project(player, start)).collect();

                let nearest: Vec<u32> = starts
                    .iter()
                    .enumerate()
                    .map(|(i, &a)| {
                        starts
                            .iter()
                            .enumerate()
                            .filter(|&(j, _)| j != i)
                            .map(|(_, &b)| map_grid.distance_to(a, b))
                            .min()
                            .unwrap()
                    })
                    .collect();
                assert!(
                    nearest.iter().all(|&distance| distance == nearest[0]),
                    "FAIL spacing {player_num} players on {:?}: {nearest:?}",
                    map_grid.wrap_flags
                );
            }
        }
    }

    #[test]
    fn tile_grid_wraps_only_along_translated_axes() {
        let two = SymmetryLayout::from_grid(torus(8, 8), 2).unwrap();
        assert_eq!(two.tile_grid().wrap_flags, WrapFlags::WrapY);
        let one = SymmetryLayout::from_grid(torus(8, 8), 1).unwrap();
        assert_eq!(one.tile_grid().wrap_flags, WrapFlags::WrapX | WrapFlags::WrapY);
        let one_bounded = SymmetryLayout::from_grid(bounded(8, 8), 1).unwrap();
        assert_eq!(one_bounded.tile_grid().wrap_flags, WrapFlags::empty());
        let three_bounded = SymmetryLayout::from_grid(bounded(12, 8), 3).unwrap();
        assert_eq!(three_bounded.tile_grid().wrap_flags, WrapFlags::WrapX);
    }

    #[test]
    fn stamp_copies_tile_into_every_region() {
        let map_grid = bounded(6, 4);
        let layout = SymmetryLayout::from_grid(map_grid, 2).unwrap();
        let mut tile_layout = TileLayout::new(layout.tile_size(), OffsetCoordinate::new(0, 1));
        tile_layout.set_resource(OffsetCoordinate::new(2, 3), Some(ResourceBody::deposit(70)));

        let mut map = Map::new(map_grid);
        layout.stamp(&tile_layout, &mut map);

        assert_eq!(map.total_quantity(), 140);
        for player in layout.players() {
            assert_eq!(map.quantity_in(&layout.region(player)), tile_layout.total_quantity());
        }
        let starts: Vec<_> = map
            .starting_tiles()
            .into_iter()
            .map(|(tile, player)| (tile.to_offset(map_grid), player))
            .collect();
        assert_eq!(
            starts,
            vec![
                (OffsetCoordinate::new(0, 1), PlayerId(0)),
                (OffsetCoordinate::new(5, 1), PlayerId(1)),
            ]
        );
    }
}
