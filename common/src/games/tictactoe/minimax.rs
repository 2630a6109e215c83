//! Exhaustive minimax search for 3x3 tic-tac-toe.
//!
//! Terminal boards score `WIN_SCORE` when the searching marker has a line,
//! `-WIN_SCORE` when its opponent does, and `DRAW_SCORE` on a full board.
//! Scores carry no depth discount, so every reachable value is one of
//! -10, 0 or 10.
//!
//! The search stops scanning a node as soon as one child reaches the best
//! value the choosing side can get (+10 on the searcher's turn, -10 on the
//! opponent's). Otherwise the first child with the best value wins, in
//! `Board::empty_cells` order.

use crate::log;
use super::board::Board;
use super::types::{Marker, Position};
use super::win_detector::is_winning;

pub const WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;

/// A candidate move and the score it leads to. `position` is `None` for a
/// board that is already terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub position: Option<Position>,
    pub score: i32,
}

impl ScoredMove {
    fn terminal(score: i32) -> Self {
        Self {
            position: None,
            score,
        }
    }
}

/// Optimal move for `marker` assuming both sides play perfectly from here.
pub fn find_best_move(board: &Board, marker: Marker) -> ScoredMove {
    minimax(*board, marker, marker)
}

pub fn calculate_minimax_move(board: &Board, marker: Marker) -> Option<Position> {
    let best = find_best_move(board, marker);
    if let Some(position) = best.position {
        log!("minimax picked {} for {} with score {}", position, marker, best.score);
    }
    best.position
}

fn minimax(board: Board, searching: Marker, current: Marker) -> ScoredMove {
    if is_winning(&board, searching.opponent()) {
        return ScoredMove::terminal(-WIN_SCORE);
    }
    if is_winning(&board, searching) {
        return ScoredMove::terminal(WIN_SCORE);
    }

    let available = board.empty_cells();
    if available.is_empty() {
        return ScoredMove::terminal(DRAW_SCORE);
    }

    let maximizing = current == searching;
    let target = if maximizing { WIN_SCORE } else { -WIN_SCORE };
    let mut best: Option<ScoredMove> = None;

    for position in available {
        let child = board.with_mark(position, current);
        let score = minimax(child, searching, current.opponent()).score;
        let candidate = ScoredMove {
            position: Some(position),
            score,
        };

        if score == target {
            return candidate;
        }

        let improves = match best {
            None => true,
            Some(current_best) if maximizing => score > current_best.score,
            Some(current_best) => score < current_best.score,
        };
        if improves {
            best = Some(candidate);
        }
    }

    best.unwrap_or(ScoredMove::terminal(DRAW_SCORE))
}
