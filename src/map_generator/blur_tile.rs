use log::debug;
use rand::{Rng, rngs::StdRng};

use super::{Generator, TileLayout, deposits_from_field};
use crate::{
    blur::{BlurKernel, blur_iterations},
    generate_common_methods,
    grid::{OffsetCoordinate, SquareGrid},
    map_parameters::MapParameters,
    scalar_field::ScalarField,
};

/// Random deposits that grow richer away from the start, smoothed by a blur pass.
pub struct BlurTile {
    map_parameters: MapParameters,
    random_number_generator: StdRng,
}

impl BlurTile {
    pub const BLUR_ITERATIONS: u32 = 3;
    /// Weight of the random value at the start tile; it rises linearly to `1.0` at the farthest tile.
    pub const MIN_DISTANCE_WEIGHT: f64 = 0.3;
    /// Normalized values at or below this are left empty.
    pub const EMPTY_THRESHOLD: f64 = 0.2;
}

impl Generator for BlurTile {
    generate_common_methods!();

    fn generate_tile(&mut self, tile_grid: SquareGrid) -> TileLayout {
        let size = tile_grid.size;
        let start = self.choose_start(size);

        let max_distance = (0..size.height)
            .flat_map(|y| (0..size.width).map(move |x| OffsetCoordinate::new(x as i32, y as i32)))
            .map(|offset_coordinate| tile_grid.distance_to(start, offset_coordinate))
            .max()
            .unwrap_or(0)
            .max(1);

        let random = &mut self.random_number_generator;
        let raw_field = ScalarField::from_fn(size, |x, y| {
            let distance = tile_grid.distance_to(start, OffsetCoordinate::new(x as i32, y as i32));
            let weight = Self::MIN_DISTANCE_WEIGHT
                + (1.0 - Self::MIN_DISTANCE_WEIGHT) * distance as f64 / max_distance as f64;
            random.random::<f64>() * weight
        });

        let kernel = BlurKernel::gaussian();
        debug_assert!(kernel.is_symmetric(), "blur kernel must be mirror symmetric");

        let mut field = blur_iterations(&raw_field, tile_grid, &kernel, Self::BLUR_ITERATIONS);
        field.normalize_max();

        let tile_layout = deposits_from_field(&field, start, Self::EMPTY_THRESHOLD);
        debug!(
            "blur tile generator filled a {}x{} region with {} resources",
            size.width,
            size.height,
            tile_layout.total_quantity()
        );
        tile_layout
    }
}

#[cfg(test)]
mod tests {
    use super::BlurTile;
    use crate::{
        grid::{OffsetCoordinate, Size, SquareGrid, WrapFlags},
        map_generator::Generator,
        map_parameters::{MapParameters, MapType},
    };

    fn generator(seed: u64) -> BlurTile {
        BlurTile::new(&MapParameters::new(16, 16, MapType::BlurTile, seed, 1))
    }

    #[test]
    fn same_seed_gives_same_tile() {
        let tile_grid = SquareGrid::new(Size::new(16, 16), WrapFlags::empty());
        let a = generator(9).generate_tile(tile_grid);
        let b = generator(9).generate_tile(tile_grid);
        assert_eq!(a, b);
    }

    #[test]
    fn tile_has_deposits_but_not_on_the_start() {
        let tile_grid = SquareGrid::new(Size::new(16, 16), WrapFlags::WrapX | WrapFlags::WrapY);
        let tile_layout = generator(4).generate_tile(tile_grid);
        assert!(tile_layout.total_quantity() > 0);
        assert_eq!(tile_layout.resource(tile_layout.start()), None);

        let richest = (0..16)
            .flat_map(|y| (0..16).map(move |x| OffsetCoordinate::new(x, y)))
            .filter_map(|offset_coordinate| tile_layout.resource(offset_coordinate))
            .map(|resource| resource.quantity)
            .max()
            .unwrap_or(0);
        assert!(richest > MapParameters::MAX_CELL_QUANTITY / 2);
        assert!(richest <= MapParameters::MAX_CELL_QUANTITY);
    }
}
