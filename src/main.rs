use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use samurai_charge::{run_session, Game, GameConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board side length N (1-10)
    #[arg(value_name = "N")]
    config: GameConfig,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: log::LevelFilter,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version land here too and are not failures.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    env_logger::Builder::new()
        .filter_level(args.log_level)
        .format_timestamp(None)
        .init();

    match run(args.config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(config: GameConfig) -> Result<()> {
    let mut game = Game::new(config).context("failed to start game")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let end = run_session(&mut game, stdin.lock(), stdout.lock())?;

    let size = game.config().board_size();
    log::info!(
        "{}x{} session ended: {:?} after {} rounds",
        size,
        size,
        end,
        game.round()
    );
    Ok(())
}
