use super::types::{CellKind, CellStatus, Coord, Piece};

pub const GRID_DIM: i32 = 7;

/// Rows/cols whose pairwise combinations form the four removed 2×2 corner
/// blocks.
const CORNER_LINES: [i32; 4] = [0, 1, 5, 6];

/// A single present cell. Kind is fixed at construction; occupant and status
/// are the only mutable parts, and occupancy is only mutated through `Board`
/// methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    pub status: CellStatus,
    pub occupant: Option<Piece>,
}

/// The 7×7 cross-shaped game board. Structurally absent positions (the corner
/// blocks) are `None` and stay `None` for the life of the board; restarts only
/// reset occupancy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Cell>; GRID_DIM as usize]; GRID_DIM as usize],
    targets: [Coord; 9],
}

impl Board {
    /// Build the empty board structure. Rows 0–2 × cols 2–4 are targets,
    /// every other present cell is common.
    pub fn new() -> Self {
        let mut cells: [[Option<Cell>; GRID_DIM as usize]; GRID_DIM as usize] = Default::default();
        let mut targets = [(0, 0); 9];
        let mut target_count = 0;

        for row in 0..GRID_DIM {
            for col in 0..GRID_DIM {
                if CORNER_LINES.contains(&row) && CORNER_LINES.contains(&col) {
                    continue;
                }
                let kind = if (0..=2).contains(&row) && (2..=4).contains(&col) {
                    targets[target_count] = (row, col);
                    target_count += 1;
                    CellKind::Target
                } else {
                    CellKind::Common
                };
                cells[row as usize][col as usize] = Some(Cell {
                    kind,
                    status: CellStatus::Default,
                    occupant: None,
                });
            }
        }
        debug_assert_eq!(target_count, 9);

        Self { cells, targets }
    }

    /// The cell at (row, col), or `None` for out-of-range and structurally
    /// absent positions. Callers treat `None` as "no legal interaction here".
    pub fn cell(&self, at: Coord) -> Option<&Cell> {
        let (row, col) = at;
        if !(0..GRID_DIM).contains(&row) || !(0..GRID_DIM).contains(&col) {
            return None;
        }
        self.cells[row as usize][col as usize].as_ref()
    }

    fn cell_mut(&mut self, at: Coord) -> Option<&mut Cell> {
        let (row, col) = at;
        if !(0..GRID_DIM).contains(&row) || !(0..GRID_DIM).contains(&col) {
            return None;
        }
        self.cells[row as usize][col as usize].as_mut()
    }

    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.cell(at).and_then(|c| c.occupant)
    }

    /// Whether (row, col) cannot be moved into or through. Absent and
    /// out-of-range positions count as occupied.
    pub fn is_occupied(&self, at: Coord) -> bool {
        match self.cell(at) {
            Some(cell) => cell.occupant.is_some(),
            None => true,
        }
    }

    /// The nine target cells in a fixed row-major order.
    pub fn target_cells(&self) -> &[Coord; 9] {
        &self.targets
    }

    pub fn chicken_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .filter(|c| c.occupant == Some(Piece::Chicken))
            .count()
    }

    pub fn all_targets_reached(&self) -> bool {
        self.targets
            .iter()
            .all(|&t| self.piece_at(t) == Some(Piece::Chicken))
    }

    /// Relocate the occupant of `from` to the empty present cell `to`.
    /// The sole primitive for committed moves; occupancy is never left in an
    /// intermediate state observable by the rules layer.
    pub fn move_piece(&mut self, from: Coord, to: Coord) {
        debug_assert!(!self.is_occupied(to), "move into occupied cell {to:?}");
        if let Some(piece) = self.remove_piece(from) {
            self.put_piece(to, piece);
        }
    }

    pub(crate) fn put_piece(&mut self, at: Coord, piece: Piece) {
        if let Some(cell) = self.cell_mut(at) {
            debug_assert!(cell.occupant.is_none(), "cell {at:?} already occupied");
            cell.occupant = Some(piece);
        }
    }

    pub(crate) fn remove_piece(&mut self, at: Coord) -> Option<Piece> {
        self.cell_mut(at).and_then(|c| c.occupant.take())
    }

    pub(crate) fn take_chicken(&mut self, at: Coord) {
        let taken = self.remove_piece(at);
        debug_assert_eq!(taken, Some(Piece::Chicken), "no chicken at {at:?}");
    }

    pub(crate) fn put_chicken(&mut self, at: Coord) {
        self.put_piece(at, Piece::Chicken);
    }

    pub(crate) fn set_status(&mut self, at: Coord, status: CellStatus) {
        if let Some(cell) = self.cell_mut(at) {
            cell.status = status;
        }
    }

    /// Reset occupancy for a fresh session: two foxes flanking the centre of
    /// row 2, then `chicken_count` chickens filling present cells from row 3
    /// downward in row-major order. Returns the fox starting positions.
    /// Cell structure and classification are untouched.
    pub(crate) fn seed(&mut self, chicken_count: usize) -> [Coord; 2] {
        for row in 0..GRID_DIM {
            for col in 0..GRID_DIM {
                if let Some(cell) = self.cell_mut((row, col)) {
                    cell.occupant = None;
                    cell.status = CellStatus::Default;
                }
            }
        }

        let fox_positions = [(2, 2), (2, 4)];
        for (slot, &pos) in fox_positions.iter().enumerate() {
            self.put_piece(pos, Piece::Fox(slot));
        }

        let mut remaining = chicken_count;
        for row in 3..GRID_DIM {
            for col in 0..GRID_DIM {
                if remaining == 0 {
                    break;
                }
                if self.cell((row, col)).is_some() {
                    self.put_chicken((row, col));
                    remaining -= 1;
                }
            }
        }

        fox_positions
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
