use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::{MatchPhase, TicTacToeGameState};
use super::participant::{BotType, Participant};
use super::types::{MatchResult, Marker, Position};

/// Source of moves for `Participant::Human`. Implementations re-prompt on
/// bad input and only return an empty, in-range cell.
pub trait HumanInput {
    fn request_move(&mut self, board: &Board, marker: Marker) -> Result<Position, String>;
}

/// Receives the match transcript.
pub trait GameBroadcaster {
    fn broadcast_board(&mut self, board: &Board);

    fn broadcast_bot_turn(&mut self, marker: Marker, bot_type: BotType);

    /// Called after every placement, including the one that ends the match.
    fn broadcast_status(&mut self, result: MatchResult);

    fn broadcast_game_over(&mut self, result: MatchResult);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub player_x: Participant,
    pub player_o: Participant,
}

impl TicTacToeSessionSettings {
    pub fn new(player_x: Participant, player_o: Participant) -> Self {
        Self { player_x, player_o }
    }

    pub fn participant(&self, marker: Marker) -> Participant {
        match marker {
            Marker::X => self.player_x,
            Marker::O => self.player_o,
        }
    }
}

pub struct TicTacToeSession;

impl TicTacToeSession {
    pub fn run(
        session_id: &str,
        settings: &TicTacToeSessionSettings,
        rng: &mut SessionRng,
        human_input: &mut impl HumanInput,
        broadcaster: &mut impl GameBroadcaster,
    ) -> Result<MatchResult, String> {
        let mut game_state = TicTacToeGameState::new();
        log!(
            "[session:{}] X: {}, O: {}",
            session_id,
            settings.player_x,
            settings.player_o
        );

        broadcaster.broadcast_board(game_state.board());

        while let MatchPhase::AwaitingMove(marker) = game_state.phase() {
            let participant = settings.participant(marker);
            let pos = match participant {
                Participant::Bot(bot_type) => {
                    broadcaster.broadcast_bot_turn(marker, bot_type);
                    play_bot_turn(&game_state, bot_type, rng)?
                }
                Participant::Human => human_input.request_move(game_state.board(), marker)?,
            };

            let result = game_state.place_mark(pos).map_err(|e| {
                log!(
                    "[session:{}] {} ({}) failed to place at {}: {}",
                    session_id,
                    marker,
                    participant,
                    pos,
                    e
                );
                e
            })?;
            log!(
                "[session:{}] {} ({}) placed at {}",
                session_id,
                marker,
                participant,
                pos
            );

            broadcaster.broadcast_board(game_state.board());
            broadcaster.broadcast_status(result);
        }

        let result = game_state.result();
        log!(
            "[session:{}] finished after {} moves: {}",
            session_id,
            game_state.moves_made(),
            result
        );
        broadcaster.broadcast_game_over(result);
        Ok(result)
    }
}

fn play_bot_turn(
    game_state: &TicTacToeGameState,
    bot_type: BotType,
    rng: &mut SessionRng,
) -> Result<Position, String> {
    let bot_input = BotInput::from_game_state(game_state)
        .ok_or_else(|| "Bot asked to move after the game ended".to_string())?;
    calculate_move(bot_type, &bot_input, rng)
        .ok_or_else(|| format!("{} bot found no move on a non-terminal board", bot_type))
}
