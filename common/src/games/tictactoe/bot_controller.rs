use crate::games::SessionRng;
use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::minimax::calculate_minimax_move;
use super::participant::BotType;
use super::types::{Mark, Marker, Position};
use super::win_detector::lines_with_count;

pub struct BotInput {
    pub board: Board,
    pub current_marker: Marker,
}

impl BotInput {
    /// `None` once the match is over: there is nobody left to move.
    pub fn from_game_state(state: &TicTacToeGameState) -> Option<Self> {
        Some(Self {
            board: *state.board(),
            current_marker: state.current_marker()?,
        })
    }
}

/// Returns `None` only when the board has no empty cell left.
pub fn calculate_move(
    bot_type: BotType,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<Position> {
    match bot_type {
        BotType::Random => calculate_random_move(&input.board, rng),
        BotType::Heuristic => calculate_heuristic_move(input, rng),
        BotType::Minimax => calculate_minimax_move(&input.board, input.current_marker),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    rng.choose(&board.empty_cells()).copied()
}

/// Win if possible, otherwise block, otherwise play randomly.
pub fn calculate_heuristic_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    let marker = input.current_marker;
    find_winning_move(&input.board, marker)
        .or_else(|| find_winning_move(&input.board, marker.opponent()))
        .or_else(|| calculate_random_move(&input.board, rng))
}

/// Empty cell completing a line where `marker` already holds two cells.
/// Lines are scanned in `LINES` order.
pub fn find_winning_move(board: &Board, marker: Marker) -> Option<Position> {
    lines_with_count(board, marker, 2)
        .into_iter()
        .find_map(|line| line.into_iter().find(|&pos| board.get(pos) == Some(Mark::Empty)))
}
