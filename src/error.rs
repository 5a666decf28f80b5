use thiserror::Error;

use crate::grid::Size;

/// Errors raised while parsing map parameters or generating a map.
#[derive(Debug, Error)]
pub enum MapGenError {
    /// The token does not name a map type. The raw token is kept for diagnostics.
    #[error("invalid map type `{token}`, expected one of `basic`, `blur_tile`, `fractal`")]
    InvalidInput { token: String },
    /// The requested players cannot be given symmetric starting regions on the map.
    #[error("cannot place {player_num} symmetric starting regions on a {width}x{height} map: {reason}")]
    Configuration {
        width: u32,
        height: u32,
        player_num: u32,
        reason: String,
    },
    /// The caller's map does not have the dimensions the parameters ask for.
    #[error(
        "map is {}x{} but the parameters request {}x{}",
        .actual.width,
        .actual.height,
        .expected.width,
        .expected.height
    )]
    MapSizeMismatch { expected: Size, actual: Size },
    /// The JSON parameter document could not be read.
    #[error("invalid map parameters: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
