//! Procedural generation of symmetric resource maps for multiplayer strategy games.
//!
//! The caller builds [`MapParameters`], allocates a [`Map`] and calls [`generate`],
//! which dispatches to the generator selected by [`MapType`].

pub mod blur;
pub mod error;
pub mod fractal;
pub mod grid;
pub mod map;
pub mod map_generator;
pub mod map_parameters;
pub mod scalar_field;
pub mod tile;

use log::debug;

pub use error::MapGenError;
pub use map::{Map, PlayerId, ResourceBody};
use map_generator::{Generator, basic::Basic, blur_tile::BlurTile, fractal::Fractal};
pub use map_parameters::{MapParameters, MapType};
pub use tile::Tile;

/// Generate a map based on parameters.
///
/// `map` must have the size requested by `map_parameters`. On success every cell has been
/// rewritten. On error `map` is left untouched.
///
/// # Errors
///
/// - [`MapGenError::Configuration`] when the players cannot be given symmetric regions.
/// - [`MapGenError::MapSizeMismatch`] when `map` has the wrong size.
pub fn generate(map: &mut Map, map_parameters: &MapParameters) -> Result<(), MapGenError> {
    debug!(
        "generating a {}x{} {} map for {} players with seed {}",
        map_parameters.width(),
        map_parameters.height(),
        map_parameters.map_type,
        map_parameters.player_num,
        map_parameters.seed
    );

    match map_parameters.map_type {
        MapType::Basic => Basic::new(map_parameters).generate(map),
        MapType::BlurTile => BlurTile::new(map_parameters).generate(map),
        MapType::Fractal => Fractal::new(map_parameters).generate(map),
    }
}

/// Allocates a map of the requested size and generates it.
pub fn generate_map(map_parameters: &MapParameters) -> Result<Map, MapGenError> {
    let mut map = Map::from_parameters(map_parameters);
    generate(&mut map, map_parameters)?;
    Ok(map)
}
