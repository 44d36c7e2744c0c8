use crate::deck::CardId;

/// Address of one card slot on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// One of the four free cells (0-3)
    FreeCell(usize),
    /// One of the four foundation piles (0-3)
    Foundation(usize),
    /// One of the eight tableau piles (0-7)
    Tableau(usize),
}

/// The piles of one position: four free cells, four foundations, eight
/// tableau piles. A consistent board holds each card id in exactly one
/// place; the engine preserves that once it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) free_cells: [Option<CardId>; 4],
    pub(crate) foundations: [Vec<CardId>; 4],
    pub(crate) tableau: [Vec<CardId>; 8],
}

impl Board {
    /// Start a board from a fresh deal: empty cells and foundations.
    pub(crate) fn new(tableau: [Vec<CardId>; 8]) -> Self {
        Board {
            free_cells: [None; 4],
            foundations: Default::default(),
            tableau,
        }
    }

    pub(crate) fn from_parts(
        free_cells: [Option<CardId>; 4],
        foundations: [Vec<CardId>; 4],
        tableau: [Vec<CardId>; 8],
    ) -> Self {
        Board {
            free_cells,
            foundations,
            tableau,
        }
    }

    /// Find a card among the free cells and exposed tableau cards.
    ///
    /// Buried tableau cards and foundation cards report `None`: neither can
    /// be picked up, so neither has an addressable location.
    pub(crate) fn card_location(&self, card: CardId) -> Option<Location> {
        for (i, cell) in self.free_cells.iter().enumerate() {
            if *cell == Some(card) {
                return Some(Location::FreeCell(i));
            }
        }
        for (i, pile) in self.tableau.iter().enumerate() {
            if pile.last() == Some(&card) {
                return Some(Location::Tableau(i));
            }
        }
        None
    }

    pub(crate) fn empty_free_cells(&self) -> usize {
        self.free_cells.iter().filter(|cell| cell.is_none()).count()
    }

    pub(crate) fn empty_tableau_piles(&self) -> usize {
        self.tableau.iter().filter(|pile| pile.is_empty()).count()
    }

    /// Indices of the empty free cells, lowest first.
    pub(crate) fn empty_free_cell_indices(&self) -> Vec<usize> {
        self.free_cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of the empty tableau piles, lowest first, skipping `exclude`.
    pub(crate) fn empty_tableau_indices_excluding(&self, exclude: usize) -> Vec<usize> {
        self.tableau
            .iter()
            .enumerate()
            .filter(|(i, pile)| *i != exclude && pile.is_empty())
            .map(|(i, _)| i)
            .collect()
    }
}
