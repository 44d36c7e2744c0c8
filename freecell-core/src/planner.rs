//! Multi-card move planning.
//!
//! A supermove shuttles a run through free cells and empty columns as a
//! sequence of single-card moves. Planning is pure: the planner reads the
//! board, never mutates it, and returns the full move list for the caller
//! to execute one step at a time.

use crate::board::{Board, Location};
use crate::deck::CardId;

/// One step of a supermove plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedMove {
    pub card: CardId,
    pub from: Location,
    pub to: Location,
}

/// Largest run movable with `free_cells` empty cells and `empty_piles`
/// empty tableau columns as scratch space: (1 + cells) * 2^columns.
pub fn max_move_size(free_cells: usize, empty_piles: usize) -> usize {
    (1 + free_cells) << empty_piles
}

/// Plan moving `run` from tableau pile `from` onto pile `to`.
///
/// `run` is ordered bottom to top: `run[0]` is the deepest card and lands
/// first. The destination never counts as scratch, and an empty source
/// only joins the scratch columns once the whole run has left it. Returns
/// an empty plan when the run is empty or exceeds the current capacity;
/// the caller checks capacity before asking.
pub(crate) fn supermove_plan(
    board: &Board,
    run: &[CardId],
    from: usize,
    to: usize,
) -> Vec<PlannedMove> {
    let cells = board.empty_free_cell_indices();
    let spares = board.empty_tableau_indices_excluding(to);
    if run.is_empty() || run.len() > max_move_size(cells.len(), spares.len()) {
        return Vec::new();
    }
    let source_clears = board.tableau[from].len() == run.len();
    let mut plan = Vec::new();
    plan_onto(run, from, to, &cells, &spares, source_clears, &mut plan);
    plan
}

fn plan_onto(
    run: &[CardId],
    from: usize,
    to: usize,
    cells: &[usize],
    spares: &[usize],
    source_clears: bool,
    plan: &mut Vec<PlannedMove>,
) {
    let n = run.len();
    if n <= cells.len() + 1 {
        // Everything above the base card parks in cells, top card first,
        // then unparks in reverse once the base card has landed.
        let mut parked = Vec::new();
        for (&cell, &card) in cells.iter().zip(run[1..].iter().rev()) {
            plan.push(PlannedMove {
                card,
                from: Location::Tableau(from),
                to: Location::FreeCell(cell),
            });
            parked.push((cell, card));
        }
        plan.push(PlannedMove {
            card: run[0],
            from: Location::Tableau(from),
            to: Location::Tableau(to),
        });
        for (cell, card) in parked.into_iter().rev() {
            plan.push(PlannedMove {
                card,
                from: Location::FreeCell(cell),
                to: Location::Tableau(to),
            });
        }
        return;
    }

    // Drop scratch columns from the end while the run fits without them,
    // then split around the first remaining column: the top half waits
    // there while the bottom half moves to the destination.
    let mut usable = spares.len();
    while usable > 0 && n <= max_move_size(cells.len(), usable - 1) {
        usable -= 1;
    }
    let Some((&spare, rest)) = spares[..usable].split_first() else {
        return; // n > cells + 1 guarantees at least one column survives
    };
    let half = max_move_size(cells.len(), rest.len());
    let (bottom, top) = run.split_at(half);

    plan_onto(top, from, spare, cells, rest, false, plan);
    plan_onto(bottom, from, to, cells, rest, source_clears, plan);

    let mut handoff = rest.to_vec();
    if source_clears {
        handoff.push(from);
    }
    plan_onto(top, spare, to, cells, &handoff, true, plan);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;
    use crate::rules::tableau_accepts;
    use crate::test_util::{id, ids};

    fn cell_move(card: &str, from: usize, to: usize) -> PlannedMove {
        PlannedMove {
            card: id(card),
            from: Location::Tableau(from),
            to: Location::FreeCell(to),
        }
    }

    fn uncell_move(card: &str, from: usize, to: usize) -> PlannedMove {
        PlannedMove {
            card: id(card),
            from: Location::FreeCell(from),
            to: Location::Tableau(to),
        }
    }

    fn pile_move(card: &str, from: usize, to: usize) -> PlannedMove {
        PlannedMove {
            card: id(card),
            from: Location::Tableau(from),
            to: Location::Tableau(to),
        }
    }

    /// Replay a plan against copies of the piles, checking that every step
    /// picks up an exposed card and makes a legal placement, and that the
    /// run ends up on the destination with the scratch space restored.
    fn assert_plan_executes(
        board: &Board,
        run: &[CardId],
        from: usize,
        to: usize,
        plan: &[PlannedMove],
    ) {
        let deck = Deck::standard();
        let mut cells = board.free_cells;
        let mut tableau = board.tableau.clone();
        for step in plan {
            match step.from {
                Location::FreeCell(i) => {
                    assert_eq!(cells[i], Some(step.card), "Cell {} pickup mismatch", i);
                    cells[i] = None;
                }
                Location::Tableau(i) => {
                    assert_eq!(
                        tableau[i].pop(),
                        Some(step.card),
                        "Pile {} pickup mismatch",
                        i
                    );
                }
                Location::Foundation(_) => panic!("Plan moved a foundation card"),
            }
            match step.to {
                Location::FreeCell(i) => {
                    assert!(cells[i].is_none(), "Cell {} was occupied", i);
                    cells[i] = Some(step.card);
                }
                Location::Tableau(i) => {
                    let top = tableau[i].last().map(|&t| deck.card(t));
                    assert!(
                        tableau_accepts(deck.card(step.card), top),
                        "Illegal placement on pile {}",
                        i
                    );
                    tableau[i].push(step.card);
                }
                Location::Foundation(_) => panic!("Plan placed onto a foundation"),
            }
        }
        let dest = &tableau[to];
        assert_eq!(&dest[dest.len() - run.len()..], run);
        assert_eq!(tableau[from].len(), board.tableau[from].len() - run.len());
        assert_eq!(cells, board.free_cells, "Scratch cells were not restored");
    }

    fn board_with_cells_only() -> Board {
        let mut tableau: [Vec<CardId>; 8] = Default::default();
        tableau[0] = ids(&["8C", "4H", "3S", "2D"]);
        tableau[1] = ids(&["9D", "5S"]);
        tableau[2] = ids(&["KC"]);
        tableau[3] = ids(&["KD"]);
        tableau[4] = ids(&["KH"]);
        tableau[5] = ids(&["KS"]);
        tableau[6] = ids(&["QC"]);
        tableau[7] = ids(&["QD"]);
        Board::from_parts(
            [Some(id("JC")), Some(id("JD")), None, None],
            Default::default(),
            tableau,
        )
    }

    #[test]
    fn test_capacity_formula() {
        assert_eq!(max_move_size(0, 0), 1);
        assert_eq!(max_move_size(4, 0), 5);
        assert_eq!(max_move_size(0, 2), 4);
        assert_eq!(max_move_size(1, 1), 4);
        assert_eq!(max_move_size(2, 3), 24);
        assert_eq!(max_move_size(4, 4), 80);
    }

    #[test]
    fn test_plan_with_cells_only() {
        let board = board_with_cells_only();
        let run = ids(&["4H", "3S", "2D"]);
        let plan = supermove_plan(&board, &run, 0, 1);
        assert_eq!(
            plan,
            vec![
                cell_move("2D", 0, 2),
                cell_move("3S", 0, 3),
                pile_move("4H", 0, 1),
                uncell_move("3S", 3, 1),
                uncell_move("2D", 2, 1),
            ]
        );
        assert_plan_executes(&board, &run, 0, 1, &plan);
    }

    #[test]
    fn test_plan_recurses_through_spare_column() {
        let mut tableau: [Vec<CardId>; 8] = Default::default();
        tableau[0] = ids(&["9C", "5H", "4S", "3D", "2C"]);
        tableau[1] = ids(&["6S"]);
        tableau[2] = ids(&["KC"]);
        tableau[3] = ids(&["KD"]);
        tableau[4] = ids(&["KH"]);
        tableau[5] = ids(&["KS"]);
        tableau[6] = ids(&["QC"]);
        let board = Board::from_parts(
            [Some(id("JC")), Some(id("JD")), Some(id("JH")), None],
            Default::default(),
            tableau,
        );
        let run = ids(&["5H", "4S", "3D", "2C"]);
        let plan = supermove_plan(&board, &run, 0, 1);
        assert_eq!(
            plan,
            vec![
                cell_move("2C", 0, 3),
                pile_move("3D", 0, 7),
                uncell_move("2C", 3, 7),
                cell_move("4S", 0, 3),
                pile_move("5H", 0, 1),
                uncell_move("4S", 3, 1),
                cell_move("2C", 7, 3),
                pile_move("3D", 7, 1),
                uncell_move("2C", 3, 1),
            ]
        );
        assert_plan_executes(&board, &run, 0, 1, &plan);
    }

    #[test]
    fn test_plan_sheds_unneeded_columns() {
        let mut tableau: [Vec<CardId>; 8] = Default::default();
        tableau[0] = ids(&["9C", "4H", "3S", "2D"]);
        tableau[1] = ids(&["5S"]);
        tableau[2] = ids(&["KC"]);
        tableau[3] = ids(&["KD"]);
        tableau[4] = ids(&["KH"]);
        let board = Board::from_parts(
            [Some(id("JC")), Some(id("JD")), Some(id("JH")), Some(id("JS"))],
            Default::default(),
            tableau,
        );
        let run = ids(&["4H", "3S", "2D"]);
        let plan = supermove_plan(&board, &run, 0, 1);
        assert_eq!(
            plan,
            vec![
                pile_move("2D", 0, 5),
                pile_move("3S", 0, 6),
                pile_move("4H", 0, 1),
                pile_move("3S", 6, 1),
                pile_move("2D", 5, 1),
            ]
        );
        assert!(
            !plan
                .iter()
                .any(|step| step.from == Location::Tableau(7) || step.to == Location::Tableau(7)),
            "Third empty column should have been shed"
        );
        assert_plan_executes(&board, &run, 0, 1, &plan);
    }

    #[test]
    fn test_single_card_plan() {
        let board = board_with_cells_only();
        let run = ids(&["2D"]);
        let plan = supermove_plan(&board, &run, 0, 1);
        assert_eq!(plan, vec![pile_move("2D", 0, 1)]);
    }

    #[test]
    fn test_oversized_run_gets_empty_plan() {
        let mut tableau: [Vec<CardId>; 8] = Default::default();
        tableau[0] = ids(&["8H", "7S", "6D", "5C", "4H", "3S", "2D"]);
        tableau[1] = ids(&["9S"]);
        tableau[2] = ids(&["KC"]);
        tableau[3] = ids(&["KD"]);
        tableau[4] = ids(&["KH"]);
        tableau[5] = ids(&["KS"]);
        tableau[6] = ids(&["QC"]);
        tableau[7] = ids(&["QD"]);
        let board = Board::from_parts(
            [Some(id("JC")), None, None, None],
            Default::default(),
            tableau,
        );
        let run = ids(&["8H", "7S", "6D", "5C", "4H", "3S", "2D"]);
        assert!(supermove_plan(&board, &run, 0, 1).is_empty());
    }

    #[test]
    fn test_empty_run_gets_empty_plan() {
        let board = board_with_cells_only();
        assert!(supermove_plan(&board, &[], 0, 1).is_empty());
    }
}
