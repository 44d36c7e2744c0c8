//! Deal generator for the classic numbered FreeCell games.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};
use rayon::prelude::*;

use freecell_core::Game;
use freecell_notation::{format_oneline, format_rows};

/// The classic catalogue runs from game 1 to game 32000.
const LAST_GAME: u32 = 32000;

#[derive(Parser)]
#[command(name = "freecell-deal", about = "Deal numbered FreeCell games")]
struct Args {
    /// Game number to deal (1-32000); picked from the clock when omitted
    #[arg(short = 'g', long = "game")]
    game: Option<u32>,

    /// Number of consecutive games to deal
    #[arg(short = 'p', long = "produce", default_value = "1")]
    produce: u32,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "oneline")]
    format: Format,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One tagged layout per line
    Oneline,
    /// Dealing-order rows under a header
    Rows,
}

fn main() {
    let args = Args::parse();

    let first_game = args.game.unwrap_or_else(random_game_number);
    if first_game < 1 || first_game > LAST_GAME {
        eprintln!("Error: game number {} is outside 1-{}", first_game, LAST_GAME);
        std::process::exit(2);
    }
    if args.produce < 1 {
        eprintln!("Error: nothing to produce");
        std::process::exit(2);
    }
    let last_game = first_game as u64 + args.produce as u64 - 1;
    if last_game > LAST_GAME as u64 {
        eprintln!(
            "Error: games {}-{} run past the end of the catalogue at {}",
            first_game, last_game, LAST_GAME
        );
        std::process::exit(2);
    }

    let start = Instant::now();
    let outputs: Vec<String> = if args.produce > 1 {
        let numbers: Vec<u32> = (first_game..first_game + args.produce).collect();
        numbers
            .into_par_iter()
            .map(|number| render(number, args.format))
            .collect()
    } else {
        vec![render(first_game, args.format)]
    };
    let elapsed = start.elapsed();

    for (i, output) in outputs.iter().enumerate() {
        match args.format {
            Format::Oneline => println!("{}", output),
            Format::Rows => {
                if i > 0 {
                    println!();
                }
                print!("{}", output);
            }
        }
    }

    let rate = args.produce as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
    eprintln!(
        "Dealt {} game{} in {:?} ({:.0} games/sec)",
        args.produce,
        if args.produce == 1 { "" } else { "s" },
        elapsed,
        rate
    );
}

fn render(game_number: u32, format: Format) -> String {
    let game = Game::new(game_number);
    match format {
        Format::Oneline => format_oneline(&game),
        Format::Rows => format_rows(&game),
    }
}

/// Pick a game number from the clock, like hitting "new game" in the UI.
fn random_game_number() -> u32 {
    let micros = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_micros();
    (micros % LAST_GAME as u128) as u32 + 1
}
