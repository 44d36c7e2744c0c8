//! Deal a numbered game and print its layout.
//!
//! Usage: cargo run --example deal_game [game_number]

use freecell_core::Game;
use freecell_notation::format_rows;

fn main() {
    let game_number: u32 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1);

    let game = Game::new(game_number);
    print!("{}", format_rows(&game));
}
