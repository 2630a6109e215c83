use std::fmt;
use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

use common::games::tictactoe::{BOARD_SIZE, Board, HumanInput, Marker, Position};
use common::log;

use crate::prompt::read_prompted_line;

const COORDINATES_PROMPT: &str = "Enter the coordinates: ";

#[derive(Debug)]
pub enum InputError {
    NotNumbers,
    OutOfRange,
    Occupied,
    Closed,
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotNumbers => write!(f, "You should enter numbers!"),
            InputError::OutOfRange => write!(f, "Coordinates should be from 1 to {}!", BOARD_SIZE),
            InputError::Occupied => write!(f, "This cell is occupied! Choose another one!"),
            InputError::Closed => write!(f, "Input closed while waiting for coordinates"),
            InputError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for InputError {}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        InputError::Io(e)
    }
}

impl InputError {
    /// Errors the user can fix by typing again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            InputError::NotNumbers | InputError::OutOfRange | InputError::Occupied
        )
    }
}

/// Zero-based index for a one-based token, `None` when the number is outside
/// the board. Integers too large for `i64` are still numbers.
fn parse_coordinate(token: &str) -> Result<Option<usize>, InputError> {
    match token.parse::<i64>() {
        Ok(value) if (1..=BOARD_SIZE as i64).contains(&value) => Ok(Some(value as usize - 1)),
        Ok(_) => Ok(None),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(None)
        }
        Err(_) => Err(InputError::NotNumbers),
    }
}

/// Parses one-based `row col` and checks it against `board`.
pub fn parse_coordinates(line: &str, board: &Board) -> Result<Position, InputError> {
    let values = line
        .split_whitespace()
        .map(parse_coordinate)
        .collect::<Result<Vec<Option<usize>>, InputError>>()?;

    let [row, col] = values[..] else {
        return Err(InputError::NotNumbers);
    };
    let (Some(row), Some(col)) = (row, col) else {
        return Err(InputError::OutOfRange);
    };

    let pos = Position::new(row, col);
    if !board.is_valid_move(pos) {
        return Err(InputError::Occupied);
    }
    Ok(pos)
}

/// Reads coordinates from a line-based reader, re-prompting until they are
/// valid.
pub struct ConsoleHumanInput<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleHumanInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_move(&mut self, board: &Board) -> Result<Position, InputError> {
        loop {
            let line = read_prompted_line(&mut self.reader, &mut self.writer, COORDINATES_PROMPT)?
                .ok_or(InputError::Closed)?;

            match parse_coordinates(&line, board) {
                Ok(pos) => return Ok(pos),
                Err(e) if e.is_retryable() => {
                    writeln!(self.writer, "{}", e)?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: BufRead, W: Write> HumanInput for ConsoleHumanInput<R, W> {
    fn request_move(&mut self, board: &Board, marker: Marker) -> Result<Position, String> {
        let pos = self.read_move(board).map_err(|e| e.to_string())?;
        log!("human {} chose {}", marker, pos);
        Ok(pos)
    }
}
