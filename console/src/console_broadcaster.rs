use std::io::Write;

use common::games::tictactoe::{Board, BotType, GameBroadcaster, MatchResult, Marker};
use common::log;

use crate::config::AnnouncementConfig;
use crate::render::render_board;

/// Prints the match transcript to a text stream.
pub struct ConsoleBroadcaster<W: Write> {
    writer: W,
    announcements: AnnouncementConfig,
}

impl<W: Write> ConsoleBroadcaster<W> {
    pub fn new(writer: W, announcements: AnnouncementConfig) -> Self {
        Self {
            writer,
            announcements,
        }
    }

    fn emit(&mut self, text: &str) {
        let written = self.writer.write_all(text.as_bytes());
        if let Err(e) = written.and_then(|_| self.writer.flush()) {
            log!("Failed to write match output: {}", e);
        }
    }
}

impl<W: Write> GameBroadcaster for ConsoleBroadcaster<W> {
    fn broadcast_board(&mut self, board: &Board) {
        self.emit(&render_board(board));
    }

    fn broadcast_bot_turn(&mut self, _marker: Marker, bot_type: BotType) {
        if self.announcements.announce_bot_moves {
            self.emit(&format!("Making move level \"{}\"\n", bot_type.level()));
        }
    }

    fn broadcast_status(&mut self, result: MatchResult) {
        if result == MatchResult::InProgress && self.announcements.report_unfinished {
            self.emit(&format!("{}\n", result));
        }
    }

    fn broadcast_game_over(&mut self, result: MatchResult) {
        self.emit(&format!("{}\n", result));
    }
}
