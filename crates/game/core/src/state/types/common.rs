use std::fmt;

/// Unique identifier for any entity tracked in the state.
///
/// Allocated sequentially by [`crate::GameState`] and never reused within an
/// episode, so a removed entity can never be confused with a later one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in `(x, y)` cell coordinates.
///
/// `x` grows to the east and `y` grows to the north. Every module (engine,
/// perception, renderer) indexes cells in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step along `heading`.
    ///
    /// Pure vector addition: the result may lie outside the grid. Callers rely
    /// on the perimeter walls to stop movement, not on this function.
    pub const fn advance(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Squared Euclidean distance between two cells.
    pub const fn distance_squared(self, other: Position) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// One of the four cardinal unit vectors an agent can face.
///
/// The variants are declared in cyclic order `East → North → West → South`.
/// Turning left advances one step through that cycle, turning right goes back
/// one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    /// `(1, 0)`
    #[default]
    East,
    /// `(0, 1)`
    North,
    /// `(-1, 0)`
    West,
    /// `(0, -1)`
    South,
}

impl Heading {
    /// All headings in cyclic order.
    pub const CYCLE: [Heading; 4] = [Heading::East, Heading::North, Heading::West, Heading::South];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Heading::East => (1, 0),
            Heading::North => (0, 1),
            Heading::West => (-1, 0),
            Heading::South => (0, -1),
        }
    }

    /// Inverse of [`Heading::delta`]; `None` for anything but a unit vector.
    pub const fn from_delta(delta: (i32, i32)) -> Option<Self> {
        match delta {
            (1, 0) => Some(Heading::East),
            (0, 1) => Some(Heading::North),
            (-1, 0) => Some(Heading::West),
            (0, -1) => Some(Heading::South),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        match self {
            Heading::East => 0,
            Heading::North => 1,
            Heading::West => 2,
            Heading::South => 3,
        }
    }

    /// Rotates `inc` steps through the cycle (positive is left).
    pub fn turn(self, inc: i32) -> Self {
        let len = Self::CYCLE.len() as i32;
        let next = (self.index() as i32 + inc).rem_euclid(len);
        Self::CYCLE[next as usize]
    }

    pub fn turn_left(self) -> Self {
        self.turn(1)
    }

    pub fn turn_right(self) -> Self {
        self.turn(-1)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (dx, dy) = self.delta();
        write!(f, "({}, {})", dx, dy)
    }
}

/// Width and height of the rectangular grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Number of cells an arrow travels before it is spent.
    pub fn longest_side(&self) -> u32 {
        self.width.max(self.height)
    }
}

impl Default for MapDimensions {
    fn default() -> Self {
        Self::new(10, 10)
    }
}
