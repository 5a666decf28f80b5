use enum_map::Enum;
use glam::IVec2;

/// The eight directions around a square cell.
///
/// `North` points towards increasing `y`, `East` towards increasing `x`.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Enum)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// The four directions sharing an edge with the cell.
    pub const EDGE: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// The four directions sharing only a corner with the cell.
    pub const CORNER: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Mirrors the direction across the vertical axis (east <-> west).
    pub const fn mirror_x(self) -> Self {
        match self {
            Direction::NorthEast => Direction::NorthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::SouthWest,
            Direction::SouthWest => Direction::SouthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::NorthEast,
            direction => direction,
        }
    }

    /// Mirrors the direction across the horizontal axis (north <-> south).
    pub const fn mirror_y(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthEast,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthWest,
            Direction::NorthWest => Direction::SouthWest,
            direction => direction,
        }
    }

    /// The unit step taken when moving one cell in this direction.
    pub const fn unit_offset(self) -> IVec2 {
        match self {
            Direction::North => IVec2::new(0, 1),
            Direction::NorthEast => IVec2::new(1, 1),
            Direction::East => IVec2::new(1, 0),
            Direction::SouthEast => IVec2::new(1, -1),
            Direction::South => IVec2::new(0, -1),
            Direction::SouthWest => IVec2::new(-1, -1),
            Direction::West => IVec2::new(-1, 0),
            Direction::NorthWest => IVec2::new(-1, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn mirrors_flip_one_axis() {
        for direction in Direction::EDGE.into_iter().chain(Direction::CORNER) {
            let offset = direction.unit_offset();
            let mirrored_x = direction.mirror_x().unit_offset();
            let mirrored_y = direction.mirror_y().unit_offset();
            assert_eq!(mirrored_x, glam::IVec2::new(-offset.x, offset.y));
            assert_eq!(mirrored_y, glam::IVec2::new(offset.x, -offset.y));
        }
    }
}
