//! This module defines the `Generator` trait for map generation and provides common methods for map generators.

use log::warn;
use rand::{Rng, rngs::StdRng};

use crate::{
    error::MapGenError,
    grid::{OffsetCoordinate, Size, SquareGrid},
    map::{Map, ResourceBody},
    map_parameters::MapParameters,
    scalar_field::ScalarField,
};

pub mod basic;
pub mod blur_tile;
pub mod fractal;
pub mod symmetry;

pub use symmetry::{SymmetryLayout, TileLayout};

/// A trait that allows for the generation of a map.
///
/// A generator only fills the base tile of player 0; [`Generator::generate`] validates the
/// parameters and copies the tile into every player's region.
///
/// If you want to create a new map generator, you need to implement this trait
/// and add a [`crate::map_parameters::MapType`] variant dispatching to it.
pub trait Generator {
    fn new(map_parameters: &MapParameters) -> Self
    where
        Self: Sized;

    fn map_parameters(&self) -> &MapParameters;

    fn random_number_generator(&mut self) -> &mut StdRng;

    /// Fills the base tile. `tile_grid` has the size of one player region.
    fn generate_tile(&mut self, tile_grid: SquareGrid) -> TileLayout;

    /// Chooses the start tile of the base tile.
    ///
    /// It is the tile centre, moved by up to a quarter of the tile size along each axis.
    fn choose_start(&mut self, tile_size: Size) -> OffsetCoordinate {
        let random = self.random_number_generator();

        let mut jittered = |extent: u32| {
            let center = (extent / 2) as i32;
            let jitter = (extent / 4) as i32;
            let offset = random.random_range(-jitter..=jitter);
            (center + offset).clamp(0, extent as i32 - 1)
        };

        let x = jittered(tile_size.width);
        let y = jittered(tile_size.height);
        OffsetCoordinate::new(x, y)
    }

    /// Populates `map` according to the parameters the generator was built from.
    ///
    /// Nothing is written to `map` unless the parameters are feasible and `map` has the requested size.
    ///
    /// # Errors
    ///
    /// - [`MapGenError::Configuration`] when the players cannot get symmetric regions.
    /// - [`MapGenError::MapSizeMismatch`] when `map` does not have the requested size.
    fn generate(&mut self, map: &mut Map) -> Result<(), MapGenError> {
        let map_grid = self.map_parameters().grid;

        let layout = SymmetryLayout::new(self.map_parameters()).inspect_err(|error| {
            warn!("rejected map generation request: {error}");
        })?;

        if map.size() != map_grid.size {
            return Err(MapGenError::MapSizeMismatch {
                expected: map_grid.size,
                actual: map.size(),
            });
        }

        let tile_layout = self.generate_tile(layout.tile_grid());
        layout.stamp(&tile_layout, map);
        Ok(())
    }
}

/// Turns a field normalized into `[0, 1]` into single-cell deposits.
///
/// Cells with a value above `threshold` get a deposit of `value * MAX_CELL_QUANTITY`
/// (at least `1`); the start tile is always left empty.
pub(crate) fn deposits_from_field(
    field: &ScalarField,
    start: OffsetCoordinate,
    threshold: f64,
) -> TileLayout {
    let size = field.size();
    let mut tile_layout = TileLayout::new(size, start);

    for y in 0..size.height {
        for x in 0..size.width {
            let offset_coordinate = OffsetCoordinate::new(x as i32, y as i32);
            let value = field.get(x, y);
            if offset_coordinate == start || value <= threshold {
                continue;
            }
            let quantity = ((value * MapParameters::MAX_CELL_QUANTITY as f64).round() as u32)
                .clamp(1, MapParameters::MAX_CELL_QUANTITY);
            tile_layout.set_resource(offset_coordinate, Some(ResourceBody::deposit(quantity)));
        }
    }

    tile_layout
}

/// Generates common methods for a struct.
///
/// The struct must have a `map_parameters: MapParameters` and a `random_number_generator: StdRng` field.
///
/// This macro generates the following methods:
/// - `new`: Creates a new instance of the struct, seeding its random number generator from the parameters.
/// - `map_parameters`: Provides a reference to the parameters.
/// - `random_number_generator`: Provides a mutable reference to the random number generator.
#[macro_export]
macro_rules! generate_common_methods {
    () => {
        /// Creates a new instance of the struct with the given `MapParameters`.
        fn new(map_parameters: &$crate::map_parameters::MapParameters) -> Self {
            Self {
                map_parameters: map_parameters.clone(),
                random_number_generator: <::rand::rngs::StdRng as ::rand::SeedableRng>::seed_from_u64(
                    map_parameters.seed,
                ),
            }
        }

        /// Provides a reference to the parameters the generator was built from.
        fn map_parameters(&self) -> &$crate::map_parameters::MapParameters {
            &self.map_parameters
        }

        /// Provides a mutable reference to the random number generator.
        fn random_number_generator(&mut self) -> &mut ::rand::rngs::StdRng {
            &mut self.random_number_generator
        }
    };
}
