use glam::Vec2;
use crate::api::error::EngineError;

/// Eight-way compass facing, declared clockwise starting east.
/// Screen space is y-down, so `South` points to `+y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    East,
    SouthEast,
    #[default]
    South,
    SouthWest,
    West,
    NorthWest,
    North,
    NorthEast,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
    ];

    /// Position in the clockwise cycle (`East` = 0).
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Result<Self, EngineError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(EngineError::UnknownDirection(index))
    }

    /// Step `delta` compass positions: clockwise for positive, counter-clockwise for negative.
    pub fn rotate(self, delta: i32) -> Self {
        let index = (self.index() as i32 + delta.rem_euclid(8)).rem_euclid(8);
        Self::ALL[index as usize]
    }

    pub fn is_diagonal(self) -> bool {
        self.index() % 2 == 1
    }

    /// Unit vector pointing this way in screen space.
    pub fn unit(self) -> Vec2 {
        let d = std::f32::consts::FRAC_1_SQRT_2;
        match self {
            Direction::East => Vec2::new(1.0, 0.0),
            Direction::SouthEast => Vec2::new(d, d),
            Direction::South => Vec2::new(0.0, 1.0),
            Direction::SouthWest => Vec2::new(-d, d),
            Direction::West => Vec2::new(-1.0, 0.0),
            Direction::NorthWest => Vec2::new(-d, -d),
            Direction::North => Vec2::new(0.0, -1.0),
            Direction::NorthEast => Vec2::new(d, -d),
        }
    }

    /// Quantize a screen-space vector to the nearest compass direction.
    /// Returns `None` for the zero vector.
    pub fn from_vector(v: Vec2) -> Option<Self> {
        if v == Vec2::ZERO || !v.is_finite() {
            return None;
        }
        let octant = (v.y.atan2(v.x) / std::f32::consts::FRAC_PI_4).round() as i32;
        Some(Self::ALL[octant.rem_euclid(8) as usize])
    }
}
