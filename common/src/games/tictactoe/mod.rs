mod board;
mod bot_controller;
mod game_state;
mod minimax;
mod participant;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotInput, calculate_heuristic_move, calculate_move, find_winning_move};
pub use game_state::{MatchPhase, TicTacToeGameState};
pub use minimax::{DRAW_SCORE, ScoredMove, WIN_SCORE, calculate_minimax_move, find_best_move};
pub use participant::{BotType, Participant};
pub use session::{GameBroadcaster, HumanInput, TicTacToeSession, TicTacToeSessionSettings};
pub use types::{BOARD_SIZE, Line, Mark, MatchResult, Marker, Position};
pub use win_detector::{LINES, check_result, check_win, is_winning, lines_with_count};
