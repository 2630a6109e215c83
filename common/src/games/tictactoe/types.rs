use std::fmt;

pub const BOARD_SIZE: usize = 3;

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// The symbol a participant places; doubles as the player identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    pub fn mark(self) -> Mark {
        match self {
            Marker::X => Mark::X,
            Marker::O => Mark::O,
        }
    }
}

impl From<Marker> for Mark {
    fn from(marker: Marker) -> Self {
        marker.mark()
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark().symbol())
    }
}

/// Zero-based cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Three cells that win when owned by one marker.
pub type Line = [Position; BOARD_SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    InProgress,
    Win(Marker),
    Draw,
}

impl MatchResult {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MatchResult::InProgress)
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchResult::InProgress => write!(f, "Game not finished"),
            MatchResult::Win(marker) => write!(f, "{} wins", marker),
            MatchResult::Draw => write!(f, "Draw"),
        }
    }
}
