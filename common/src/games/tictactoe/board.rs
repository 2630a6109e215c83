use std::str::FromStr;

use super::types::{BOARD_SIZE, Line, Mark, Marker, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        if !pos.is_in_bounds() {
            return None;
        }
        Some(self.cells[pos.row][pos.col])
    }

    pub fn is_valid_move(&self, pos: Position) -> bool {
        self.get(pos) == Some(Mark::Empty)
    }

    pub fn place(&mut self, pos: Position, marker: Marker) -> Result<(), String> {
        match self.get(pos) {
            None => Err(format!("Position {} is out of bounds", pos)),
            Some(Mark::Empty) => {
                self.cells[pos.row][pos.col] = marker.mark();
                Ok(())
            }
            Some(_) => Err(format!("Cell {} is already marked", pos)),
        }
    }

    /// Copy of the board with `marker` written at `pos`. Used by search,
    /// which only passes positions taken from `empty_cells`.
    pub fn with_mark(&self, pos: Position, marker: Marker) -> Self {
        let mut next = *self;
        if pos.is_in_bounds() {
            next.cells[pos.row][pos.col] = marker.mark();
        }
        next
    }

    /// Empty cells in column-major order: (0,0), (1,0), (2,0), (0,1), ...
    pub fn empty_cells(&self) -> Vec<Position> {
        let mut cells = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for col in 0..BOARD_SIZE {
            for row in 0..BOARD_SIZE {
                if self.cells[row][col] == Mark::Empty {
                    cells.push(Position::new(row, col));
                }
            }
        }
        cells
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn line_marks(&self, line: &Line) -> [Mark; BOARD_SIZE] {
        line.map(|pos| self.cells[pos.row][pos.col])
    }
}

/// Parses nine cells from `X`, `O` and `.`/`_` (empty). Whitespace and `|`
/// are ignored, so `"XX. | OO. | ..."` and a multi-line grid both work.
impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks: Vec<Mark> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Ok(Mark::X),
                'O' => Ok(Mark::O),
                '.' | '_' => Ok(Mark::Empty),
                other => Err(format!("Unexpected board character '{}'", other)),
            })
            .collect::<Result<Vec<Mark>, String>>()?;

        if marks.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(format!(
                "Board needs {} cells, got {}",
                BOARD_SIZE * BOARD_SIZE,
                marks.len()
            ));
        }

        let mut cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (i, mark) in marks.into_iter().enumerate() {
            cells[i / BOARD_SIZE][i % BOARD_SIZE] = mark;
        }
        Ok(Self { cells })
    }
}
