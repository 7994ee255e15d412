//! Legal-move computation for the player's chickens. A chicken may step one
//! cell up or sideways into a present empty cell, never downward or
//! diagonally.

use super::board::Board;
use super::types::{CellStatus, Coord};

/// An active chicken selection: the selected cell and its legal destinations.
#[derive(Debug, Clone)]
pub struct Selection {
    pub cell: Coord,
    pub candidates: Vec<Coord>,
}

/// Candidate destinations for a chicken at `from`: (r−1,c), (r,c−1), (r,c+1),
/// restricted to present empty cells.
pub fn candidate_moves(board: &Board, from: Coord) -> Vec<Coord> {
    let (row, col) = from;
    [(row - 1, col), (row, col - 1), (row, col + 1)]
        .into_iter()
        .filter(|&dest| !board.is_occupied(dest))
        .collect()
}

/// Select the chicken at `at`, marking it and its candidates for rendering.
pub(crate) fn select(board: &mut Board, at: Coord) -> Selection {
    let candidates = candidate_moves(board, at);
    board.set_status(at, CellStatus::Selected);
    for &dest in &candidates {
        board.set_status(dest, CellStatus::CanMoveTo);
    }
    Selection { cell: at, candidates }
}

/// Clear the highlight state left by `select`.
pub(crate) fn clear(board: &mut Board, selection: &Selection) {
    board.set_status(selection.cell, CellStatus::Default);
    for &dest in &selection.candidates {
        board.set_status(dest, CellStatus::Default);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Piece;

    fn seeded_board() -> Board {
        let mut board = Board::new();
        board.seed(20);
        board
    }

    #[test]
    fn candidates_are_up_and_sideways_only() {
        let mut board = Board::new();
        board.put_chicken((4, 3));
        let moves = candidate_moves(&board, (4, 3));
        assert_eq!(moves, vec![(3, 3), (4, 2), (4, 4)]);
        assert!(!moves.contains(&(5, 3)));
    }

    #[test]
    fn occupied_and_absent_cells_are_excluded() {
        let board = seeded_board();
        // Front-row chicken: up is free, both sides hold chickens.
        assert_eq!(candidate_moves(&board, (3, 3)), vec![(2, 3)]);
        // Front-row chicken below a fox.
        assert_eq!(candidate_moves(&board, (3, 2)), vec![]);
        // Bottom-left chicken: left neighbour is a removed corner.
        assert_eq!(candidate_moves(&board, (5, 2)), vec![]);
    }

    #[test]
    fn edge_chicken_never_escapes_the_grid() {
        let mut board = Board::new();
        board.put_chicken((3, 0));
        let moves = candidate_moves(&board, (3, 0));
        assert_eq!(moves, vec![(2, 0), (3, 1)]);
    }

    #[test]
    fn select_and_clear_manage_statuses() {
        let mut board = Board::new();
        board.put_chicken((4, 3));
        let selection = select(&mut board, (4, 3));
        assert_eq!(
            board.cell((4, 3)).map(|c| c.status),
            Some(CellStatus::Selected)
        );
        assert_eq!(
            board.cell((3, 3)).map(|c| c.status),
            Some(CellStatus::CanMoveTo)
        );
        clear(&mut board, &selection);
        for &at in [(4, 3), (3, 3), (4, 2), (4, 4)].iter() {
            assert_eq!(board.cell(at).map(|c| c.status), Some(CellStatus::Default));
        }
        // Highlighting never touches occupancy.
        assert_eq!(board.piece_at((4, 3)), Some(Piece::Chicken));
    }
}
