mod config;
mod render;

use std::io::{self, BufRead, Write};

use clap::Parser;
use tictactoe_game::{
    Difficulty, FirstPlayerMode, GameMode, Mark, MatchSession, SessionRng, log, logger,
};

use config::ClientConfig;
use render::{render_board, render_outcome, render_score};

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Tic-tac-toe against a heuristic bot")]
struct Args {
    /// Bot difficulty: easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Local two-player mode instead of playing the bot
    #[arg(long)]
    two_player: bool,

    /// Seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a YAML config file
    #[arg(long)]
    config: Option<String>,

    /// Pick the first player at random instead of X
    #[arg(long)]
    random_first_player: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = match args.config {
        Some(ref path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };

    let difficulty = args
        .difficulty
        .or(config.difficulty)
        .unwrap_or(Difficulty::Easy);
    let mode = if args.two_player {
        GameMode::LocalTwoPlayer
    } else {
        GameMode::BotMatch
    };
    let first_player_mode = if args.random_first_player || config.random_first_player {
        FirstPlayerMode::Random
    } else {
        FirstPlayerMode::XFirst
    };
    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!(
        "Starting session (difficulty: {}, seed: {})",
        difficulty,
        rng.seed()
    );

    let mut session = MatchSession::new(mode, difficulty, config.bot, first_player_mode, rng)?;
    run_session(&mut session).await?;

    Ok(())
}

async fn run_session(session: &mut MatchSession) -> Result<(), String> {
    println!("TicTacToeFuture - difficulty: {}", session.difficulty());

    loop {
        while !session.is_over() {
            println!("\n{}", render_board(session.state()));

            if session.is_bot_turn() {
                println!("Bot is thinking...");
                let index = session.play_bot_turn().await?;
                log!("Bot played cell {}", index + 1);
            } else {
                let Some(index) = prompt_for_move(session)? else {
                    return Ok(());
                };
                if let Err(e) = session.play_human_turn(index) {
                    println!("{}", e);
                }
            }
        }

        println!("\n{}", render_board(session.state()));
        println!("{}", render_outcome(session.state(), session.mode()));
        if let Some(line) = session.state().board.winning_line() {
            println!(
                "Winning line: {} - {} - {}",
                line.cells[0] + 1,
                line.cells[1] + 1,
                line.cells[2] + 1
            );
        }
        println!("{}", render_score(session.score(), session.mode()));

        if !prompt_yes_no("Play another match? (y/n) > ")? {
            return Ok(());
        }
        session.start_next_match();
    }
}

/// Prompts until the current player enters a valid empty cell. Returns
/// None when the player quits or the input stream closes.
fn prompt_for_move(session: &MatchSession) -> Result<Option<usize>, String> {
    let player = match (session.mode(), session.state().current_mark) {
        (GameMode::BotMatch, _) => "You".to_string(),
        (GameMode::LocalTwoPlayer, mark) => format!("Player {}", mark.symbol()),
    };

    loop {
        let Some(input) = read_prompt(&format!("{} - enter a position (1-9, q to quit) > ", player))?
        else {
            return Ok(None);
        };

        if input.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        let position: usize = match input.parse() {
            Ok(p) => p,
            Err(_) => {
                println!("Enter a number between 1 and 9");
                continue;
            }
        };

        if !(1..=9).contains(&position) {
            println!("Position must be between 1 and 9");
            continue;
        }

        let index = position - 1;
        if session.state().board.get(index) != Some(Mark::Empty) {
            println!("That cell is already taken");
            continue;
        }

        return Ok(Some(index));
    }
}

fn prompt_yes_no(prompt: &str) -> Result<bool, String> {
    loop {
        let Some(input) = read_prompt(prompt)? else {
            return Ok(false);
        };
        match input.to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "q" => return Ok(false),
            _ => println!("Enter y or n"),
        }
    }
}

/// One trimmed line from stdin, None on end of input.
fn read_prompt(prompt: &str) -> Result<Option<String>, String> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {}", e))?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read input: {}", e))?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
