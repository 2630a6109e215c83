mod command;
mod config;
mod console_broadcaster;
mod human_input;
mod prompt;
mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use common::config::ConfigManager;
use common::games::SessionRng;
use common::games::tictactoe::TicTacToeSession;
use common::{log, logger};

use command::{BAD_PARAMETERS, Command, parse_command};
use config::{Config, get_config_manager};
use console_broadcaster::ConsoleBroadcaster;
use human_input::ConsoleHumanInput;
use prompt::read_prompted_line;

const COMMAND_PROMPT: &str = "Input command: ";

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe for humans and bots")]
struct Args {
    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the computer players, overrides the config
    #[arg(long)]
    seed: Option<u64>,

    /// Write diagnostic log lines to stderr
    #[arg(long)]
    log: bool,
}

fn load_config(args: &Args) -> Result<Config, String> {
    match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path.clone()).get_config(),
        None => get_config_manager().get_config(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_config(&args)?;

    if args.log || config.log.enabled {
        logger::init_logger(config.log.prefix.clone());
    }

    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Using seed {}", rng.seed());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let mut match_number: u64 = 0;

    while let Some(line) = read_prompted_line(&mut input, &mut stdout, COMMAND_PROMPT)? {
        let settings = match parse_command(&line) {
            Ok(Command::Exit) => break,
            Ok(Command::Start(settings)) => settings,
            Err(e) => {
                log!("Rejected command '{}': {}", line, e);
                writeln!(stdout, "{}", BAD_PARAMETERS)?;
                continue;
            }
        };

        match_number += 1;
        let session_id = format!("match-{}", match_number);
        let mut human_input = ConsoleHumanInput::new(&mut input, io::stdout());
        let mut broadcaster = ConsoleBroadcaster::new(io::stdout(), config.announcements.clone());

        if let Err(e) = TicTacToeSession::run(
            &session_id,
            &settings,
            &mut rng,
            &mut human_input,
            &mut broadcaster,
        ) {
            log!("[session:{}] aborted: {}", session_id, e);
            writeln!(stdout, "{}", e)?;
        }
    }

    log!("Bye after {} matches", match_number);
    Ok(())
}
