//! Neighbourhood averaging used to smooth resource fields.
//!
//! Each pass recomputes every cell as the weighted average of itself and its eight
//! neighbours. Only in-bounds neighbours contribute; the weights of missing neighbours are
//! dropped from the normalisation, so edge cells and a 1x1 field never read outside the grid.
//! Wrapped axes take their neighbours from the opposite edge instead.
//!
//! Generators blur the base tile on its own, before it is copied into the player regions.
//! Where the tile borders a mirrored copy of itself, that seam is blurred like a map edge:
//! the neighbours across it are dropped, not reflected. Every copy gets the same treatment,
//! so the copies stay identical.

use enum_map::{EnumMap, enum_map};
#[cfg(feature = "threading")]
use rayon::prelude::*;

use crate::{
    grid::{Direction, OffsetCoordinate, SquareGrid},
    scalar_field::ScalarField,
};

/// Weights of a 3x3 blur kernel.
#[derive(Debug, Clone, PartialEq)]
pub struct BlurKernel {
    /// Weight of the cell itself.
    pub center: f64,
    /// Weight of each neighbour.
    pub neighbors: EnumMap<Direction, f64>,
}

impl BlurKernel {
    /// A kernel giving the cell, its edge neighbours and its corner neighbours the given weights.
    pub fn new(center: f64, edge: f64, corner: f64) -> Self {
        let mut neighbors = enum_map! { _ => 0.0 };
        for direction in Direction::EDGE {
            neighbors[direction] = edge;
        }
        for direction in Direction::CORNER {
            neighbors[direction] = corner;
        }
        Self { center, neighbors }
    }

    /// Every cell of the 3x3 neighbourhood weighs the same.
    pub fn box_filter() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// The binomial approximation of a gaussian: `1 2 1 / 2 4 2 / 1 2 1`.
    pub fn gaussian() -> Self {
        Self::new(4.0, 2.0, 1.0)
    }

    /// Whether the kernel looks the same after mirroring across either axis.
    ///
    /// Only such kernels commute with the mirrored region layout.
    pub fn is_symmetric(&self) -> bool {
        self.neighbors.iter().all(|(direction, &weight)| {
            weight == self.neighbors[direction.mirror_x()]
                && weight == self.neighbors[direction.mirror_y()]
        })
    }
}

impl Default for BlurKernel {
    fn default() -> Self {
        Self::gaussian()
    }
}

/// Runs one blur pass over `field`.
///
/// `grid` supplies the wrap flags; its size must match the field.
/// The input is read only, so every output cell sees the previous pass's finished values.
pub fn blur(field: &ScalarField, grid: SquareGrid, kernel: &BlurKernel) -> ScalarField {
    debug_assert_eq!(field.size(), grid.size, "field and grid sizes differ");

    let width = grid.width() as usize;
    let mut output = ScalarField::new(field.size(), 0.0);
    if width == 0 {
        return output;
    }

    #[cfg(feature = "threading")]
    output
        .values_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| blur_row(field, grid, kernel, y as u32, row));

    #[cfg(not(feature = "threading"))]
    output
        .values_mut()
        .chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| blur_row(field, grid, kernel, y as u32, row));

    output
}

/// Runs `iterations` blur passes, each reading the complete result of the previous one.
pub fn blur_iterations(
    field: &ScalarField,
    grid: SquareGrid,
    kernel: &BlurKernel,
    iterations: u32,
) -> ScalarField {
    let mut current = field.clone();
    for _ in 0..iterations {
        current = blur(&current, grid, kernel);
    }
    current
}

fn blur_row(field: &ScalarField, grid: SquareGrid, kernel: &BlurKernel, y: u32, row: &mut [f64]) {
    for (x, value) in row.iter_mut().enumerate() {
        let center = OffsetCoordinate::new(x as i32, y as i32);

        let mut sum = kernel.center * field.at(center);
        let mut weight_sum = kernel.center;

        for (direction, &weight) in kernel.neighbors.iter() {
            if let Some(neighbor) = grid.neighbor(center, direction) {
                sum += weight * field.at(neighbor);
                weight_sum += weight;
            }
        }

        *value = if weight_sum > 0.0 { sum / weight_sum } else { field.at(center) };
    }
}
