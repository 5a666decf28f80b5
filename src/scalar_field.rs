use crate::grid::{OffsetCoordinate, Size};

/// A continuous value per cell of a rectangular grid, stored row-major.
///
/// This is the intermediate representation handed from the noise synthesizer and the
/// tile generators to the blur pass, before values are turned into resources.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    size: Size,
    values: Vec<f64>,
}

impl ScalarField {
    /// Create a new field filled with the given value.
    pub fn new(size: Size, fill: f64) -> Self {
        Self {
            size,
            values: vec![fill; size.area()],
        }
    }

    /// Create a field by evaluating `f(x, y)` for every cell.
    pub fn from_fn(size: Size, mut f: impl FnMut(u32, u32) -> f64) -> Self {
        let mut values = Vec::with_capacity(size.area());
        for y in 0..size.height {
            for x in 0..size.width {
                values.push(f(x, y));
            }
        }
        Self { size, values }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        self.values[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        let index = self.index(x, y);
        self.values[index] = value;
    }

    /// Value at an in-range offset coordinate.
    #[inline]
    pub fn at(&self, offset_coordinate: OffsetCoordinate) -> f64 {
        self.get(offset_coordinate.x() as u32, offset_coordinate.y() as u32)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.size.width && y < self.size.height,
            "({x}, {y}) is out of range of a {}x{} field",
            self.size.width,
            self.size.height
        );
        y as usize * self.size.width as usize + x as usize
    }

    pub fn max_value(&self) -> f64 {
        self.values.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn min_value(&self) -> f64 {
        self.values.iter().cloned().fold(f64::INFINITY, f64::min)
    }

    /// Applies `f` to every value.
    pub fn map_values(&mut self, f: impl Fn(f64) -> f64) {
        self.values.iter_mut().for_each(|value| *value = f(*value));
    }

    /// Scales the field so that its maximum becomes `1.0`.
    ///
    /// Fields whose maximum is not positive are left unchanged.
    pub fn normalize_max(&mut self) {
        let max = self.max_value();
        if max > 0.0 {
            self.map_values(|value| value / max);
        }
    }
}
