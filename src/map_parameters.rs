//! Parameters describing the map a caller wants generated.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::MapGenError,
    grid::{Size, SquareGrid, WrapFlags},
};

/// Describes the map to generate.
///
/// Constructed once by the caller and read-only afterwards.
/// The same parameters always produce the same map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapParameters {
    pub map_type: MapType,
    /// Size and wrapping of the map.
    pub grid: SquareGrid,
    /// Seed of the random number generator used by the generators.
    pub seed: u64,
    /// The number of players. Each player gets one symmetric starting region.
    pub player_num: u32,
}

impl MapParameters {
    /// The maximum number of players a map can be generated for.
    pub const MAX_PLAYER_NUM: u32 = 16;
    /// The maximum resource quantity of a single cell.
    pub const MAX_CELL_QUANTITY: u32 = 1000;

    /// Creates parameters for a map wrapping on both axes.
    pub fn new(width: u32, height: u32, map_type: MapType, seed: u64, player_num: u32) -> Self {
        Self {
            map_type,
            grid: SquareGrid::new(
                Size::new(width, height),
                WrapFlags::WrapX | WrapFlags::WrapY,
            ),
            seed,
            player_num,
        }
    }

    /// Loads parameters from a JSON document. Missing fields take their default value.
    pub fn from_json_str(json: &str) -> Result<Self, MapGenError> {
        Ok(serde_json::from_str(json)?)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.grid.height()
    }
}

impl Default for MapParameters {
    fn default() -> Self {
        Self::new(32, 32, MapType::Fractal, 0, 2)
    }
}

/// The generation strategy used to populate the map.
///
/// The set is closed: the dispatcher matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapType {
    /// Sparse planets with symmetric starting regions.
    Basic,
    /// Random tiles smoothed by a blur pass.
    BlurTile,
    /// Thresholded fractal value noise.
    Fractal,
}

impl MapType {
    /// The command line token naming this map type.
    pub const fn as_str(self) -> &'static str {
        match self {
            MapType::Basic => "basic",
            MapType::BlurTile => "blur_tile",
            MapType::Fractal => "fractal",
        }
    }

    /// Reads a map type from the next token of `tokens`.
    ///
    /// Exactly one token is consumed, whether or not it names a map type.
    /// An exhausted stream is treated as an empty token.
    ///
    /// # Examples
    ///
    /// ```
    /// use planet_map_generator::map_parameters::MapType;
    ///
    /// let mut tokens = "fractal 42".split_whitespace();
    /// assert_eq!(MapType::read_from(&mut tokens).unwrap(), MapType::Fractal);
    /// assert_eq!(tokens.next(), Some("42"));
    /// ```
    pub fn read_from<'a, I>(tokens: &mut I) -> Result<Self, MapGenError>
    where
        I: Iterator<Item = &'a str>,
    {
        tokens.next().unwrap_or_default().parse()
    }
}

impl FromStr for MapType {
    type Err = MapGenError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "basic" => Ok(MapType::Basic),
            "blur_tile" => Ok(MapType::BlurTile),
            "fractal" => Ok(MapType::Fractal),
            _ => Err(MapGenError::InvalidInput {
                token: token.to_owned(),
            }),
        }
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
