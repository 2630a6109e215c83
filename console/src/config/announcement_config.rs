use serde::{Deserialize, Serialize};

/// Optional transcript lines around each move.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AnnouncementConfig {
    /// `Making move level "<level>"` before a computer move.
    pub announce_bot_moves: bool,
    /// `Game not finished` after a placement that did not end the match.
    pub report_unfinished: bool,
}

impl Default for AnnouncementConfig {
    fn default() -> Self {
        Self {
            announce_bot_moves: true,
            report_unfinished: true,
        }
    }
}
