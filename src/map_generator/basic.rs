use log::debug;
use rand::{Rng, rngs::StdRng};

use super::{Generator, TileLayout};
use crate::{
    generate_common_methods,
    grid::{Square, SquareGrid},
    map::ResourceBody,
    map_parameters::MapParameters,
};

/// Scatters a few diamond-shaped planets over each player's region.
pub struct Basic {
    map_parameters: MapParameters,
    random_number_generator: StdRng,
}

impl Basic {
    /// One planet is attempted per this many cells of a region.
    pub const TILES_PER_PLANET: u32 = 48;
    pub const MAX_PLANET_RADIUS: u32 = 3;
    /// How many random centres are tried before a planet is given up.
    pub const PLACEMENT_ATTEMPTS: u32 = 24;
    /// Minimum distance between a planet cell and the start tile.
    pub const START_CLEARANCE: u32 = 2;
    pub const MIN_PLANET_QUANTITY: u32 = 250;
}

impl Generator for Basic {
    generate_common_methods!();

    fn generate_tile(&mut self, tile_grid: SquareGrid) -> TileLayout {
        let size = tile_grid.size;
        let start = self.choose_start(size);
        let mut tile_layout = TileLayout::new(size, start);

        // A planet of radius `r` spans `2r + 1` cells and must fit inside the tile.
        let max_radius = Self::MAX_PLANET_RADIUS
            .min((size.width - 1) / 2)
            .min((size.height - 1) / 2);
        let planet_num = (size.area() as u32 / Self::TILES_PER_PLANET).max(1);

        let random = &mut self.random_number_generator;
        let mut placed_planet_num = 0;

        for _ in 0..planet_num {
            let radius = random.random_range(0..=max_radius);
            let quantity = random.random_range(Self::MIN_PLANET_QUANTITY..=MapParameters::MAX_CELL_QUANTITY);

            let placed = (0..Self::PLACEMENT_ATTEMPTS).any(|_| {
                let center = Square::new(
                    random.random_range(radius..size.width - radius) as i32,
                    random.random_range(radius..size.height - radius) as i32,
                );
                let footprint = center.squares_in_distance(radius);

                let blocked = footprint.iter().any(|square| {
                    let offset_coordinate = square.to_offset();
                    tile_layout.resource(offset_coordinate).is_some()
                        || tile_grid.distance_to(offset_coordinate, start) <= Self::START_CLEARANCE
                });
                if blocked {
                    return false;
                }

                for square in footprint {
                    tile_layout.set_resource(
                        square.to_offset(),
                        Some(ResourceBody::new(quantity, radius)),
                    );
                }
                true
            });

            if placed {
                placed_planet_num += 1;
            }
        }

        debug!(
            "basic generator placed {placed_planet_num} of {planet_num} planets in a {}x{} region",
            size.width, size.height
        );

        tile_layout
    }
}

#[cfg(test)]
mod tests {
    use super::Basic;
    use crate::{
        grid::{OffsetCoordinate, Size, SquareGrid, WrapFlags},
        map_generator::Generator,
        map_parameters::{MapParameters, MapType},
    };

    fn generate_tile(seed: u64, tile_size: Size) -> super::TileLayout {
        let map_parameters = MapParameters::new(tile_size.width, tile_size.height, MapType::Basic, seed, 1);
        let mut generator = Basic::new(&map_parameters);
        generator.generate_tile(SquareGrid::new(tile_size, WrapFlags::empty()))
    }

    #[test]
    fn planets_keep_clear_of_the_start() {
        let tile_grid = SquareGrid::new(Size::new(24, 24), WrapFlags::empty());
        for seed in 0..8 {
            let tile_layout = generate_tile(seed, tile_grid.size);
            let start = tile_layout.start();
            for y in 0..24 {
                for x in 0..24 {
                    let offset_coordinate = OffsetCoordinate::new(x, y);
                    if tile_layout.resource(offset_coordinate).is_some() {
                        assert!(tile_grid.distance_to(offset_coordinate, start) > Basic::START_CLEARANCE);
                    }
                }
            }
        }
    }

    #[test]
    fn planets_are_placed_and_bounded() {
        let tile_layout = generate_tile(5, Size::new(24, 24));
        assert!(tile_layout.total_quantity() > 0);
        for y in 0..24 {
            for x in 0..24 {
                if let Some(resource) = tile_layout.resource(OffsetCoordinate::new(x, y)) {
                    assert!(resource.radius <= Basic::MAX_PLANET_RADIUS);
                    assert!(
                        (Basic::MIN_PLANET_QUANTITY..=MapParameters::MAX_CELL_QUANTITY)
                            .contains(&resource.quantity)
                    );
                }
            }
        }
    }

    #[test]
    fn single_cell_tile_has_only_the_start() {
        let tile_layout = generate_tile(1, Size::new(1, 1));
        assert_eq!(tile_layout.start(), OffsetCoordinate::new(0, 0));
        assert_eq!(tile_layout.total_quantity(), 0);
    }
}
