//! One-line layout format.
//!
//! A layout is eight slash-separated piles of space-separated card codes,
//! optionally tagged with its game number:
//!
//! ```text
//! #1: JD KD 2S 4C 3S 6D 6S/2D KC KS 5C TD 8S 9C/.../5H 3H 3C 7S 7D TC
//! ```
//!
//! Piles run left to right, cards bottom to top.

use freecell_core::{Card, Game};

use crate::{format_card, parse_card, ParseError};

/// A parsed one-line layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRecord {
    /// Game number from the "#N:" tag, when present
    pub game_number: Option<u32>,
    /// The eight tableau piles, bottom card first
    pub piles: [Vec<Card>; 8],
}

/// Format a game's tableau as one line, tagged with its game number.
pub fn format_oneline(game: &Game) -> String {
    let piles: Vec<String> = game
        .tableau()
        .iter()
        .map(|pile| {
            pile.iter()
                .map(|&id| format_card(game.card(id)))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    format!("#{}: {}", game.game_number(), piles.join("/"))
}

/// Parse a one-line layout, with or without the "#N:" tag.
pub fn parse_oneline(line: &str) -> Result<LayoutRecord, ParseError> {
    let line = line.trim();
    let (game_number, body) = match line.strip_prefix('#') {
        Some(tagged) => {
            let (number, body) = tagged
                .split_once(':')
                .ok_or_else(|| ParseError::new("Missing ':' after the game number tag"))?;
            let number = number
                .trim()
                .parse::<u32>()
                .map_err(|_| ParseError::new(format!("Bad game number {:?}", number.trim())))?;
            (Some(number), body)
        }
        None => (None, line),
    };

    let pile_texts: Vec<&str> = body.trim().split('/').collect();
    if pile_texts.len() != 8 {
        return Err(ParseError::new(format!(
            "Expected 8 piles, found {}",
            pile_texts.len()
        )));
    }

    let mut piles: [Vec<Card>; 8] = Default::default();
    for (pile, text) in piles.iter_mut().zip(&pile_texts) {
        for code in text.split_whitespace() {
            pile.push(parse_card(code)?);
        }
    }
    Ok(LayoutRecord { game_number, piles })
}
