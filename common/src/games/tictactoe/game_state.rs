use super::board::Board;
use super::types::{MatchResult, Marker, Position};
use super::win_detector::check_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    AwaitingMove(Marker),
    Terminal(MatchResult),
}

/// Live state of one match. The only place the real board is written.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    phase: MatchPhase,
    moves_made: usize,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: MatchPhase::AwaitingMove(Marker::X),
            moves_made: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Marker whose turn it is, or `None` once the match is over.
    pub fn current_marker(&self) -> Option<Marker> {
        match self.phase {
            MatchPhase::AwaitingMove(marker) => Some(marker),
            MatchPhase::Terminal(_) => None,
        }
    }

    pub fn result(&self) -> MatchResult {
        match self.phase {
            MatchPhase::AwaitingMove(_) => MatchResult::InProgress,
            MatchPhase::Terminal(result) => result,
        }
    }

    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    /// Places the active marker at `pos` and advances the turn. Returns the
    /// result after the placement.
    pub fn place_mark(&mut self, pos: Position) -> Result<MatchResult, String> {
        let marker = match self.phase {
            MatchPhase::AwaitingMove(marker) => marker,
            MatchPhase::Terminal(_) => return Err("Game is already over".to_string()),
        };

        self.board.place(pos, marker)?;
        self.moves_made += 1;

        let result = check_result(&self.board);
        self.phase = if result.is_terminal() {
            MatchPhase::Terminal(result)
        } else {
            MatchPhase::AwaitingMove(marker.opponent())
        };

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Mark;

    fn count_marks(board: &Board, mark: Mark) -> usize {
        board.rows().iter().flatten().filter(|&&cell| cell == mark).count()
    }

    fn play(state: &mut TicTacToeGameState, moves: &[(usize, usize)]) -> MatchResult {
        let mut result = MatchResult::InProgress;
        for &(row, col) in moves {
            result = state.place_mark(Position::new(row, col)).unwrap();
        }
        result
    }

    #[test]
    fn test_new_game_awaits_x() {
        let state = TicTacToeGameState::new();
        assert_eq!(state.phase(), MatchPhase::AwaitingMove(Marker::X));
        assert_eq!(state.result(), MatchResult::InProgress);
        assert_eq!(state.board().empty_cells().len(), 9);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(Position::new(0, 0)).unwrap();
        assert_eq!(state.current_marker(), Some(Marker::O));
        state.place_mark(Position::new(1, 1)).unwrap();
        assert_eq!(state.current_marker(), Some(Marker::X));

        assert_eq!(state.board().get(Position::new(0, 0)), Some(Mark::X));
        assert_eq!(state.board().get(Position::new(1, 1)), Some(Mark::O));
        assert_eq!(state.moves_made(), 2);
    }

    #[test]
    fn test_occupied_cell_rejected_without_turn_change() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(Position::new(0, 0)).unwrap();

        assert!(state.place_mark(Position::new(0, 0)).is_err());
        assert_eq!(state.current_marker(), Some(Marker::O));
        assert_eq!(state.moves_made(), 1);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut state = TicTacToeGameState::new();
        assert!(state.place_mark(Position::new(0, 3)).is_err());
        assert_eq!(state.phase(), MatchPhase::AwaitingMove(Marker::X));
    }

    #[test]
    fn test_win_is_terminal() {
        let mut state = TicTacToeGameState::new();
        let result = play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        assert_eq!(result, MatchResult::Win(Marker::X));
        assert_eq!(state.phase(), MatchPhase::Terminal(MatchResult::Win(Marker::X)));
        assert_eq!(state.current_marker(), None);
        assert!(state.place_mark(Position::new(2, 2)).is_err());
    }

    #[test]
    fn test_o_can_win() {
        let mut state = TicTacToeGameState::new();
        let result = play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]);
        assert_eq!(result, MatchResult::Win(Marker::O));
    }

    #[test]
    fn test_full_board_draw() {
        let mut state = TicTacToeGameState::new();
        // Ends as XOX / XOO / OXX.
        let result = play(
            &mut state,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(result, MatchResult::Draw);
        assert!(state.board().is_full());
    }

    #[test]
    fn test_marker_counts_stay_balanced() {
        let mut state = TicTacToeGameState::new();
        for pos in Board::new().empty_cells() {
            if state.place_mark(pos).is_err() {
                break;
            }
            let x = count_marks(state.board(), Mark::X);
            let o = count_marks(state.board(), Mark::O);
            assert!(x == o || x == o + 1);
        }
    }
}
