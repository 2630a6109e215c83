use common::games::tictactoe::{Participant, TicTacToeSessionSettings};

pub const BAD_PARAMETERS: &str = "Bad parameters!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start(TicTacToeSessionSettings),
    Exit,
}

/// Parses `start <role> <role>` or `exit`. The error explains what was wrong;
/// the user only ever sees `BAD_PARAMETERS`.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["exit"] => Ok(Command::Exit),
        ["start", player_x, player_o] => {
            let player_x: Participant = player_x.parse()?;
            let player_o: Participant = player_o.parse()?;
            Ok(Command::Start(TicTacToeSessionSettings::new(player_x, player_o)))
        }
        ["start", ..] => Err(format!("start expects 2 roles, got {}", tokens.len() - 1)),
        [] => Err("Empty command".to_string()),
        [other, ..] => Err(format!("Unknown command '{}'", other)),
    }
}
