// Terminal Sokoban with ratatui
// Controls: W/A/S/D or arrow keys (immediate response). R to restart, Q to quit.
// Tiles: '#' wall, '@' player, '$' box, '.' goal, '*' box on goal, '+' player on goal, ' ' or '_' floor.

use clap::{Args, Parser, Subcommand};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sokoban_term::console_interface::{
    cleanup_terminal, handle_input, render_game, setup_terminal, ConsoleInput,
};
use sokoban_term::core::{UserAction, DEFAULT_LOG_FILE};
use sokoban_term::engine::{GameChangeType, GameEngine};
use sokoban_term::level::{get_level_json, parse_level, parse_level_file, Level, BUILTIN_LEVEL};
use sokoban_term::models::GameRenderState;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sokoban")]
#[command(about = "Sokoban in the terminal", long_about = None)]
struct Cli {
    /// File that receives log output (the terminal is busy drawing the board)
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a level interactively (default)
    Play {
        #[command(flatten)]
        level: LevelArgs,
    },
    /// Print the starting layout of a level and exit
    Show {
        #[command(flatten)]
        level: LevelArgs,

        /// Print a JSON description instead of the board
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Default)]
struct LevelArgs {
    /// Level file to load; the built-in level is used when omitted
    #[arg(value_name = "LEVEL_FILE")]
    path: Option<PathBuf>,

    /// Level name to display, defaults to the file name
    #[arg(long)]
    name: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    let command = cli.command.unwrap_or(Commands::Play {
        level: LevelArgs::default(),
    });

    match command {
        Commands::Play { level } => {
            let level = load_level(&level)?;
            let mut terminal = setup_terminal()?;
            let result = run_interactive(&level, &mut terminal);
            cleanup_terminal()?;
            if let Err(err) = &result {
                error!(error = %err, "interactive session failed");
            }
            result
        }
        Commands::Show { level, json } => {
            let level = load_level(&level)?;
            if json {
                println!("{}", get_level_json(&level)?);
            } else {
                println!("{}", GameEngine::new(&level).render());
            }
            Ok(())
        }
    }
}

fn init_tracing(log_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}

fn load_level(args: &LevelArgs) -> Result<Level, Box<dyn std::error::Error>> {
    let level = match &args.path {
        Some(path) => parse_level_file(path, args.name.as_deref())?,
        None => parse_level(BUILTIN_LEVEL, Some(args.name.as_deref().unwrap_or("Built-in")))?,
    };
    Ok(level)
}

fn snapshot(
    engine: &GameEngine,
    error: Option<String>,
    last_change: Option<GameChangeType>,
) -> GameRenderState {
    GameRenderState {
        game: engine.state().clone(),
        won: engine.is_level_complete(),
        error,
        last_change,
    }
}

fn run_interactive(
    level: &Level,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = GameEngine::new(level);
    render_game(terminal, &snapshot(&engine, None, None))?;

    loop {
        match handle_input()? {
            ConsoleInput::Quit => break,
            ConsoleInput::UserAction(UserAction::Restart) => {
                engine.reset(level);
                render_game(terminal, &snapshot(&engine, None, None))?;
            }
            ConsoleInput::UserAction(UserAction::Move(direction)) => {
                let to_render = match engine.try_move(direction) {
                    Ok(change) => snapshot(&engine, None, Some(change)),
                    Err(blocked) => snapshot(&engine, Some(blocked.to_string()), None),
                };
                render_game(terminal, &to_render)?;

                if to_render.won {
                    // Keep showing the win screen until the player decides
                    loop {
                        match handle_input()? {
                            ConsoleInput::Timeout => {}
                            ConsoleInput::UserAction(UserAction::Restart) => {
                                engine.reset(level);
                                render_game(terminal, &snapshot(&engine, None, None))?;
                                break;
                            }
                            _ => {
                                info!(moves = engine.move_count(), "leaving after completing level");
                                return Ok(());
                            }
                        }
                    }
                }
            }
            ConsoleInput::Timeout | ConsoleInput::Unknown => {
                // No input, continue polling
            }
        }
    }

    Ok(())
}
