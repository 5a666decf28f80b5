use super::offset_coordinate::OffsetCoordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Defines a rectangular region within a tile-based map coordinate system.
///
/// Player regions are rectangles; they never wrap around the map edge.
pub struct Rectangle {
    /// The origin point in offset coordinates.
    ///
    /// Represents the south-west corner (bottom-left in visual terms).
    origin: OffsetCoordinate,

    /// The horizontal extent of the rectangle in tile units.
    width: u32,

    /// The vertical extent of the rectangle in tile units.
    height: u32,
}

impl Rectangle {
    /// Creates a new rectangle with the given origin, width and height.
    ///
    /// # Panics
    /// Panics in debug builds if the rectangle is empty.
    pub fn new(origin: OffsetCoordinate, width: u32, height: u32) -> Self {
        debug_assert!(
            width > 0 && height > 0,
            "Rectangle dimensions must be positive (got {}x{})",
            width,
            height
        );

        Self {
            origin,
            width,
            height,
        }
    }

    #[inline]
    pub fn origin(&self) -> OffsetCoordinate {
        self.origin
    }

    #[inline]
    pub fn west_x(&self) -> i32 {
        self.origin.x()
    }

    #[inline]
    pub fn south_y(&self) -> i32 {
        self.origin.y()
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns an iterator over all offset coordinates inside the rectangle, row by row.
    pub fn iter_offsets(&self) -> impl Iterator<Item = OffsetCoordinate> + use<> {
        let west_x = self.west_x();
        let south_y = self.south_y();
        let width = self.width as i32;
        let height = self.height as i32;
        (south_y..south_y + height)
            .flat_map(move |y| (west_x..west_x + width).map(move |x| OffsetCoordinate::new(x, y)))
    }

    /// Checks if the given coordinate is inside the current rectangle.
    pub fn contains(&self, offset_coordinate: OffsetCoordinate) -> bool {
        let [x, y] = offset_coordinate.to_array();

        x >= self.west_x()
            && x < self.west_x() + self.width as i32
            && y >= self.south_y()
            && y < self.south_y() + self.height as i32
    }
}

#[cfg(test)]
mod tests {
    use super::Rectangle;
    use crate::grid::OffsetCoordinate;

    #[test]
    fn iter_offsets_covers_the_rectangle_once() {
        let rectangle = Rectangle::new(OffsetCoordinate::new(2, 1), 3, 2);
        assert_eq!(rectangle.origin(), OffsetCoordinate::from([2, 1]));
        assert_eq!((rectangle.width(), rectangle.height()), (3, 2));
        let offsets: Vec<_> = rectangle.iter_offsets().collect();
        assert_eq!(offsets.len(), 6);
        assert_eq!(offsets[0], OffsetCoordinate::new(2, 1));
        assert_eq!(offsets[5], OffsetCoordinate::new(4, 2));
        assert!(offsets.iter().all(|&offset| rectangle.contains(offset)));
        assert!(!rectangle.contains(OffsetCoordinate::new(5, 1)));
        assert!(!rectangle.contains(OffsetCoordinate::new(2, 0)));
    }
}
