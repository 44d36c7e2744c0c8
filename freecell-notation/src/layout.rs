//! Human-readable layout rendering.

use freecell_core::Game;

use crate::format_card;

/// Render a deal in dealing order: a header line, then rows of cards as
/// they were dealt left to right across the piles.
pub fn format_rows(game: &Game) -> String {
    let mut out = format!("Game #{}:\n", game.game_number());
    let piles = game.tableau();
    let tallest = piles.iter().map(|pile| pile.len()).max().unwrap_or(0);
    for row in 0..tallest {
        let cards: Vec<String> = piles
            .iter()
            .filter_map(|pile| pile.get(row))
            .map(|&id| format_card(game.card(id)))
            .collect();
        out.push_str(&cards.join(" "));
        out.push('\n');
    }
    out
}

/// Render a full position: free cells, foundation tops, then the piles.
/// Empty slots show as "--".
pub fn format_board(game: &Game) -> String {
    let cells: Vec<String> = game
        .free_cells()
        .iter()
        .map(|cell| match cell {
            Some(id) => format_card(game.card(*id)),
            None => "--".to_string(),
        })
        .collect();
    let tops: Vec<String> = game
        .foundations()
        .iter()
        .map(|pile| match pile.last() {
            Some(&id) => format_card(game.card(id)),
            None => "--".to_string(),
        })
        .collect();

    let mut out = format!("Cells: {}\n", cells.join(" "));
    out.push_str(&format!("Foundations: {}\n", tops.join(" ")));
    for (i, pile) in game.tableau().iter().enumerate() {
        let cards: Vec<String> = pile
            .iter()
            .map(|&id| format_card(game.card(id)))
            .collect();
        out.push_str(&format!("{}: {}\n", i + 1, cards.join(" ")));
    }
    out
}
