//! This module provides multi-octave value noise used to synthesize resource fields.

use log::trace;
use rand::{Rng, rngs::StdRng};

use crate::{
    grid::{Size, SquareGrid},
    scalar_field::ScalarField,
};

pub struct ValueNoiseFractal {
    /// The grid the noise is synthesized over.
    ///
    /// When an axis wraps, the noise lattice wraps too, so opposite edges join without a seam.
    grid: SquareGrid,
    /// The number of octaves summed into the field.
    octave_num: u32,
    /// Amplitude ratio between consecutive octaves, in `(0, 1]`.
    persistence: f64,
    /// The synthesized values, normalized into `[0, 1)`.
    field: ScalarField,
}

impl ValueNoiseFractal {
    pub const MAX_OCTAVE_NUM: u32 = 8;
    pub const DEFAULT_PERSISTENCE: f64 = 0.6;

    /// The octave count that takes the lattice period from the full grid down to a single cell.
    ///
    /// It is `floor(log2(min(width, height))) + 1`, capped at [`ValueNoiseFractal::MAX_OCTAVE_NUM`].
    pub fn default_octave_num(size: Size) -> u32 {
        let min_side = size.width.min(size.height).max(1);
        (min_side.ilog2() + 1).min(Self::MAX_OCTAVE_NUM)
    }

    /// Creates a fractal value noise field.
    ///
    /// # Arguments
    ///
    /// - `random`: Random number generator. It is the only source of randomness,
    ///   so the same generator state always yields the same field.
    /// - `grid`: The grid to synthesize over. Its wrap flags decide whether the lattice wraps.
    /// - `octave_num`: How many octaves to sum, at least `1`.
    ///     - Octave `0` samples the lattice with a period of `min(width, height)` cells.
    ///     - Each following octave halves the period (down to `1`) and multiplies the amplitude by `persistence`.
    /// - `persistence`: Amplitude ratio between consecutive octaves.
    ///     - Higher persistence → fine detail dominates → rougher field.
    ///     - Lower persistence → coarse octaves dominate → smoother field.
    pub fn create(random: &mut StdRng, grid: SquareGrid, octave_num: u32, persistence: f64) -> Self {
        debug_assert!(octave_num >= 1, "octave_num should be at least 1");
        debug_assert!(
            persistence > 0.0 && persistence <= 1.0,
            "persistence should be in (0, 1], but got {persistence}"
        );

        let size = grid.size;
        let octave_num = octave_num.max(1);

        // Each octave interpolates its own lattice, drawn in octave order.
        let mut lattice_list = Vec::with_capacity(octave_num as usize);
        for _ in 0..octave_num {
            lattice_list.push(ScalarField::from_fn(size, |_, _| random.random::<f64>()));
        }

        let mut fractal = Self {
            grid,
            octave_num,
            persistence,
            field: ScalarField::new(size, 0.0),
        };
        fractal.sum_octaves(&lattice_list);
        fractal
    }

    fn sum_octaves(&mut self, lattice_list: &[ScalarField]) {
        let size = self.grid.size;
        let min_side = size.width.min(size.height).max(1);

        let mut amplitude = 1.0;
        let mut total_amplitude = 0.0;

        for (octave, lattice) in lattice_list.iter().enumerate() {
            let period = (min_side >> octave).max(1);
            trace!("value noise octave {octave}: period {period}, amplitude {amplitude}");

            for y in 0..size.height {
                for x in 0..size.width {
                    let value = self.field.get(x, y)
                        + amplitude * self.sample_lattice(lattice, x, y, period);
                    self.field.set(x, y, value);
                }
            }

            total_amplitude += amplitude;
            amplitude *= self.persistence;
        }

        self.field.map_values(|value| value / total_amplitude);
    }

    /// Interpolates the `lattice` values at the lattice points surrounding `(x, y)`.
    ///
    /// Lattice points are the cells whose coordinates are multiples of `period`.
    /// The interpolation weight is eased with smoothstep, so the field has no visible grid creases.
    fn sample_lattice(&self, lattice: &ScalarField, x: u32, y: u32, period: u32) -> f64 {
        let (x0, x1, tx) = lattice_span(x, period, self.grid.width(), self.grid.wrap_x());
        let (y0, y1, ty) = lattice_span(y, period, self.grid.height(), self.grid.wrap_y());

        let sx = smoothstep(tx);
        let sy = smoothstep(ty);

        let bottom = lerp(lattice.get(x0, y0), lattice.get(x1, y0), sx);
        let top = lerp(lattice.get(x0, y1), lattice.get(x1, y1), sx);
        lerp(bottom, top, sy)
    }

    #[inline]
    pub fn octave_num(&self) -> u32 {
        self.octave_num
    }

    #[inline]
    pub fn get_value(&self, x: u32, y: u32) -> f64 {
        self.field.get(x, y)
    }

    #[inline]
    pub fn field(&self) -> &ScalarField {
        &self.field
    }

    pub fn into_field(self) -> ScalarField {
        self.field
    }

    /// Get the field values found at the given percentiles.
    ///
    /// Each percentage is clamped to `0..=100`. `0` yields the minimum value and `100` the maximum.
    pub fn values_from_percents<const N: usize>(&self, percents: [u32; N]) -> [f64; N] {
        let percents = percents.map(|p| p.clamp(0, 100));

        let mut sorted = self.field.values().to_vec();
        sorted.sort_unstable_by(|a, b| a.total_cmp(b));

        let len = sorted.len();
        percents.map(|percent| {
            let target_index = ((len - 1) * percent as usize) / 100;
            sorted[target_index]
        })
    }
}

/// Returns the two lattice coordinates bracketing `coordinate` and the position between them in `[0, 1)`.
///
/// On a wrapped axis the last lattice cell closes the loop at coordinate `0`, even when it
/// is shorter than `period` because `extent` is not a multiple of it.
fn lattice_span(coordinate: u32, period: u32, extent: u32, wrap: bool) -> (u32, u32, f64) {
    let low = coordinate - coordinate % period;
    let high = low + period;
    if high < extent {
        return (low, high, (coordinate - low) as f64 / period as f64);
    }
    if wrap {
        (low, 0, (coordinate - low) as f64 / (extent - low) as f64)
    } else {
        (low, extent - 1, (coordinate - low) as f64 / period as f64)
    }
}

#[inline]
fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
