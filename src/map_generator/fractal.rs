use log::debug;
use rand::rngs::StdRng;

use super::{Generator, TileLayout, deposits_from_field};
use crate::{
    fractal::ValueNoiseFractal, generate_common_methods, grid::SquareGrid,
    map_parameters::MapParameters,
};

/// Deposits carved out of thresholded fractal value noise.
pub struct Fractal {
    map_parameters: MapParameters,
    random_number_generator: StdRng,
}

impl Fractal {
    pub const PERSISTENCE: f64 = ValueNoiseFractal::DEFAULT_PERSISTENCE;
    /// Share of the region, in percent, with the lowest noise values that is left empty.
    pub const EMPTY_PERCENT: u32 = 40;
    /// Values above the threshold are raised to this power, concentrating resources in the peaks.
    pub const CONCENTRATION_EXPONENT: f64 = 2.0;
}

impl Generator for Fractal {
    generate_common_methods!();

    fn generate_tile(&mut self, tile_grid: SquareGrid) -> TileLayout {
        let size = tile_grid.size;
        let start = self.choose_start(size);

        let fractal = ValueNoiseFractal::create(
            self.random_number_generator(),
            tile_grid,
            ValueNoiseFractal::default_octave_num(size),
            Self::PERSISTENCE,
        );

        let [threshold] = fractal.values_from_percents([Self::EMPTY_PERCENT]);

        let mut field = fractal.into_field();
        field.map_values(|value| {
            if value > threshold {
                (value - threshold).powf(Self::CONCENTRATION_EXPONENT)
            } else {
                0.0
            }
        });
        field.normalize_max();

        let tile_layout = deposits_from_field(&field, start, 0.0);
        debug!(
            "fractal generator filled a {}x{} region with {} resources",
            size.width,
            size.height,
            tile_layout.total_quantity()
        );
        tile_layout
    }
}

#[cfg(test)]
mod tests {
    use super::Fractal;
    use crate::{
        grid::{OffsetCoordinate, Size, SquareGrid, WrapFlags},
        map_generator::Generator,
        map_parameters::{MapParameters, MapType},
    };

    fn generate_tile(seed: u64, tile_size: Size) -> super::TileLayout {
        let map_parameters = MapParameters::new(tile_size.width, tile_size.height, MapType::Fractal, seed, 1);
        Fractal::new(&map_parameters).generate_tile(SquareGrid::new(tile_size, WrapFlags::empty()))
    }

    #[test]
    fn lowest_noise_is_left_empty() {
        let tile_size = Size::new(20, 20);
        let tile_layout = generate_tile(42, tile_size);
        let empty = (0..20)
            .flat_map(|y| (0..20).map(move |x| OffsetCoordinate::new(x, y)))
            .filter(|&offset_coordinate| tile_layout.resource(offset_coordinate).is_none())
            .count();
        // The 40th percentile itself is empty too, so at least 40% of the cells are.
        assert!(empty >= tile_size.area() * Fractal::EMPTY_PERCENT as usize / 100);
        assert!(empty < tile_size.area());
    }

    #[test]
    fn different_seeds_give_different_tiles() {
        let tile_size = Size::new(16, 8);
        assert_eq!(generate_tile(1, tile_size), generate_tile(1, tile_size));
        assert_ne!(generate_tile(1, tile_size), generate_tile(2, tile_size));
    }
}
