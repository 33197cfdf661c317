//! Bowling scorer CLI - score a ten-pin game throw by throw.
//!
//! Interactive by default; `--throws` scores a fixed list instead.

mod telemetry;

use std::io::{self, Cursor, Write};

use bowling::config::DEFAULT_QUIT_WORD;
use bowling::{Game, LogFormat, Shell, ShellConfig};
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "bowling")]
#[command(about = "Score a ten-pin bowling game one throw at a time")]
struct Args {
    /// Comma-separated throws to score without prompting (e.g. 10,7,3,9,0)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    throws: Option<Vec<String>>,

    /// Input that ends the game early
    #[arg(long, env = "BOWLING_QUIT_WORD", default_value = DEFAULT_QUIT_WORD)]
    quit_word: String,

    /// Print the scorecard as JSON when the game ends
    #[arg(long)]
    scorecard: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log output format
    #[arg(long, default_value = "text")]
    log_format: LogFormat,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    telemetry::init_tracing(args.log_format, args.verbose);

    let config = ShellConfig::default()
        .with_quit_word(&args.quit_word)?
        .with_show_prompt(args.throws.is_none());
    let mut game = Game::new()?;

    let stdout = io::stdout();
    let summary = match args.throws {
        Some(throws) => {
            info!(count = throws.len(), "scoring scripted throws");
            let script = Cursor::new(throws.join("\n"));
            Shell::new(config, script, stdout.lock()).run(&mut game)?
        }
        None => Shell::new(config, io::stdin().lock(), stdout.lock()).run(&mut game)?,
    };

    if args.scorecard {
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &game.scorecard())?;
        writeln!(out)?;
    }

    if !summary.completed {
        info!(score = summary.final_score, "game left unfinished");
    }

    Ok(())
}
