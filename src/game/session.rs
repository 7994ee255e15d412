use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::ai::{self, FoxAction};
use crate::storage::{self, Settings};

use super::board::{Board, GRID_DIM};
use super::rules::{self, Selection};
use super::types::{
    CellKind, CellStatus, Coord, Fox, GameOutcome, Phase, Piece, Statistics,
};

/// Central game state for one sitting: the board, the two foxes, the player's
/// selection, the turn phase and cross-session statistics.
///
/// The board structure is built once; restarts only re-seed pieces.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    foxes: [Fox; 2],
    selection: Option<Selection>,
    phase: Phase,
    statistics: Statistics,
    chicken_count: usize,
    last_action: Option<FoxAction>,
    persist: bool,
    rng: StdRng,
}

/// What a click did. Rules failures are not errors: an uninterpretable click
/// simply reports `Ignored`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Not the player's turn, a dead cell, or nothing selectable there.
    Ignored,
    /// A chicken was selected (or the selection was replaced).
    Selected,
    /// The active selection was cancelled.
    Cancelled,
    /// The player's move was committed and the foxes answered; play goes on.
    Moved,
    /// The player's move ended the game.
    GameOver(GameOutcome),
}

impl GameSession {
    /// A fresh session with entropy-seeded randomness, carrying on from the
    /// persisted statistics.
    pub fn new(settings: &Settings) -> Self {
        Self::with_rng(
            settings,
            StdRng::from_entropy(),
            storage::load_statistics(),
            true,
        )
    }

    /// A fresh session with reproducible randomness. Reproducible sessions
    /// are hermetic: tallies start at zero and are never written to disk.
    pub fn from_seed(settings: &Settings, seed: u64) -> Self {
        Self::with_rng(
            settings,
            StdRng::seed_from_u64(seed),
            Statistics::default(),
            false,
        )
    }

    fn with_rng(settings: &Settings, rng: StdRng, statistics: Statistics, persist: bool) -> Self {
        let mut board = Board::new();
        let chicken_count = settings.chicken_count.clamp(9, 20);
        let fox_positions = board.seed(chicken_count);
        let session = Self {
            board,
            foxes: fox_positions.map(Fox::new),
            selection: None,
            phase: Phase::PlayerTurn,
            statistics,
            chicken_count,
            last_action: None,
            persist,
            rng,
        };
        debug_assert!(session.pieces_consistent());
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// The fox action of the most recent computer turn, for rendering the
    /// capture trail.
    pub fn last_action(&self) -> Option<&FoxAction> {
        self.last_action.as_ref()
    }

    /// Handle a pointer click already resolved to a cell coordinate by the
    /// caller. Only meaningful during the player's turn; everything else is a
    /// no-op.
    pub fn handle_click(&mut self, at: Coord) -> ClickOutcome {
        if self.phase != Phase::PlayerTurn {
            return ClickOutcome::Ignored;
        }
        if self.board.cell(at).is_none() {
            return ClickOutcome::Ignored;
        }

        match self.selection.take() {
            None => {
                if self.board.piece_at(at) == Some(Piece::Chicken) {
                    self.selection = Some(rules::select(&mut self.board, at));
                    ClickOutcome::Selected
                } else {
                    ClickOutcome::Ignored
                }
            }
            Some(selection) => {
                rules::clear(&mut self.board, &selection);
                if selection.candidates.contains(&at) {
                    self.last_action = None;
                    self.board.move_piece(selection.cell, at);
                    debug_assert!(self.pieces_consistent());
                    self.computer_turn()
                } else if self.board.piece_at(at) == Some(Piece::Chicken) {
                    self.selection = Some(rules::select(&mut self.board, at));
                    ClickOutcome::Selected
                } else {
                    ClickOutcome::Cancelled
                }
            }
        }
    }

    /// Run the fox turn and evaluate end conditions.
    fn computer_turn(&mut self) -> ClickOutcome {
        self.phase = Phase::ComputerTurn;
        let action = ai::take_turn(&mut self.board, &mut self.foxes, &mut self.rng);
        debug_assert!(self.pieces_consistent());
        self.last_action = Some(action);

        if self.board.chicken_count() < 9 {
            self.phase = Phase::Ended(GameOutcome::Lost);
            ClickOutcome::GameOver(GameOutcome::Lost)
        } else if self.board.all_targets_reached() {
            self.phase = Phase::Ended(GameOutcome::Won);
            ClickOutcome::GameOver(GameOutcome::Won)
        } else {
            self.phase = Phase::PlayerTurn;
            ClickOutcome::Moved
        }
    }

    /// Start over: record a finished session into the statistics, re-seed the
    /// pieces on the existing board and hand the turn back to the player.
    pub fn restart(&mut self) {
        if let Phase::Ended(outcome) = self.phase {
            self.statistics.record(outcome);
            if self.persist {
                // Best effort; a failed save never blocks the game.
                let _ = storage::save_statistics(&self.statistics);
            }
        }
        self.selection = None;
        self.last_action = None;
        let fox_positions = self.board.seed(self.chicken_count);
        self.foxes = fox_positions.map(Fox::new);
        self.phase = Phase::PlayerTurn;
        debug_assert!(self.pieces_consistent());
    }

    /// Read-only snapshot of everything a view needs to draw a frame.
    pub fn snapshot(&self) -> GameView {
        let mut cells: [[Option<CellView>; GRID_DIM as usize]; GRID_DIM as usize] =
            Default::default();
        for row in 0..GRID_DIM {
            for col in 0..GRID_DIM {
                if let Some(cell) = self.board.cell((row, col)) {
                    cells[row as usize][col as usize] = Some(CellView {
                        kind: cell.kind,
                        status: cell.status,
                        occupant: cell.occupant,
                        reached: cell.kind == CellKind::Target
                            && cell.occupant == Some(Piece::Chicken),
                    });
                }
            }
        }
        GameView {
            cells,
            foxes: [self.foxes[0].pos, self.foxes[1].pos],
            chicken_count: self.board.chicken_count(),
            phase: self.phase,
            statistics: self.statistics.clone(),
        }
    }

    /// Every fox's stored index must point at the one cell that holds it
    /// back. Checked after every public mutation.
    fn pieces_consistent(&self) -> bool {
        let mut fox_cells = 0;
        for row in 0..GRID_DIM {
            for col in 0..GRID_DIM {
                if let Some(Piece::Fox(slot)) = self.board.piece_at((row, col)) {
                    fox_cells += 1;
                    if slot > 1 || self.foxes[slot].pos != (row, col) {
                        return false;
                    }
                }
            }
        }
        fox_cells == 2
    }
}

/// One present cell as a view sees it. `reached` is derived render-state: a
/// target cell currently occupied by a chicken.
#[derive(Debug, Clone, Copy)]
pub struct CellView {
    pub kind: CellKind,
    pub status: CellStatus,
    pub occupant: Option<Piece>,
    pub reached: bool,
}

/// A full frame snapshot: cell grid, fox positions, counts and tallies.
#[derive(Debug, Clone)]
pub struct GameView {
    pub cells: [[Option<CellView>; GRID_DIM as usize]; GRID_DIM as usize],
    pub foxes: [Coord; 2],
    pub chicken_count: usize,
    pub phase: Phase,
    pub statistics: Statistics,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> GameSession {
        GameSession::from_seed(&Settings::default(), 42)
    }

    #[test]
    fn fresh_session_matches_initial_seeding() {
        let session = fresh();
        let view = session.snapshot();
        assert_eq!(view.chicken_count, 20);
        assert_eq!(view.phase, Phase::PlayerTurn);
        assert_eq!(view.foxes, [(2, 2), (2, 4)]);
        let reached = view
            .cells
            .iter()
            .flatten()
            .flatten()
            .filter(|c| c.reached)
            .count();
        assert_eq!(reached, 0);
    }

    #[test]
    fn clicking_a_chicken_selects_it() {
        let mut session = fresh();
        assert_eq!(session.handle_click((3, 3)), ClickOutcome::Selected);
        assert_eq!(
            session.board().cell((3, 3)).map(|c| c.status),
            Some(CellStatus::Selected)
        );
        assert_eq!(
            session.board().cell((2, 3)).map(|c| c.status),
            Some(CellStatus::CanMoveTo)
        );
    }

    #[test]
    fn clicking_elsewhere_is_ignored_or_cancels() {
        let mut session = fresh();
        // Nothing selected: a fox or an empty cell selects nothing.
        assert_eq!(session.handle_click((2, 2)), ClickOutcome::Ignored);
        assert_eq!(session.handle_click((0, 2)), ClickOutcome::Ignored);
        // Absent corner and out-of-range clicks are no-ops.
        assert_eq!(session.handle_click((0, 0)), ClickOutcome::Ignored);
        assert_eq!(session.handle_click((9, 9)), ClickOutcome::Ignored);
        // With a selection, a dead cell cancels it.
        assert_eq!(session.handle_click((3, 3)), ClickOutcome::Selected);
        assert_eq!(session.handle_click((0, 2)), ClickOutcome::Cancelled);
        assert_eq!(
            session.board().cell((3, 3)).map(|c| c.status),
            Some(CellStatus::Default)
        );
    }

    #[test]
    fn selecting_another_chicken_replaces_selection() {
        let mut session = fresh();
        assert_eq!(session.handle_click((3, 3)), ClickOutcome::Selected);
        assert_eq!(session.handle_click((3, 0)), ClickOutcome::Selected);
        assert_eq!(
            session.board().cell((3, 3)).map(|c| c.status),
            Some(CellStatus::Default)
        );
        assert_eq!(
            session.board().cell((3, 0)).map(|c| c.status),
            Some(CellStatus::Selected)
        );
    }

    #[test]
    fn clicking_the_selected_chicken_reselects_it() {
        let mut session = fresh();
        assert_eq!(session.handle_click((3, 3)), ClickOutcome::Selected);
        assert_eq!(session.handle_click((3, 3)), ClickOutcome::Selected);
        assert_eq!(
            session.board().cell((3, 3)).map(|c| c.status),
            Some(CellStatus::Selected)
        );
        assert_eq!(
            session.board().cell((2, 3)).map(|c| c.status),
            Some(CellStatus::CanMoveTo)
        );
    }

    #[test]
    fn committed_move_triggers_fox_reply() {
        let mut session = fresh();
        assert_eq!(session.handle_click((3, 3)), ClickOutcome::Selected);
        // (2,3) sits between the two foxes and is a legal destination.
        assert_eq!(session.handle_click((2, 3)), ClickOutcome::Moved);
        assert_eq!(session.phase(), Phase::PlayerTurn);
        assert_eq!(session.board().piece_at((2, 3)), Some(Piece::Chicken));
        assert!(session.last_action().is_some());
        // No capture was possible on the reply, so the flock is intact.
        assert_eq!(session.board().chicken_count(), 20);
    }

    #[test]
    fn fewer_than_nine_chickens_loses() {
        let mut session = fresh();
        // Strip the back rows down to 8 chickens.
        let mut removed = 0;
        'outer: for row in (3..GRID_DIM).rev() {
            for col in 0..GRID_DIM {
                if session.board.piece_at((row, col)) == Some(Piece::Chicken) {
                    session.board.take_chicken((row, col));
                    removed += 1;
                    if removed == 12 {
                        break 'outer;
                    }
                }
            }
        }
        assert_eq!(session.board.chicken_count(), 8);
        assert_eq!(
            session.computer_turn(),
            ClickOutcome::GameOver(GameOutcome::Lost)
        );
        assert_eq!(session.phase(), Phase::Ended(GameOutcome::Lost));
        // Further input is ignored once ended.
        assert_eq!(session.handle_click((3, 0)), ClickOutcome::Ignored);
    }

    #[test]
    fn nine_reached_targets_win() {
        let mut session = fresh();
        // The foxes start on targets (2,2) and (2,4); walk them off the
        // target block first, keeping their stored positions in sync.
        session.board.move_piece((2, 2), (2, 0));
        session.foxes[0].pos = (2, 0);
        session.board.move_piece((2, 4), (2, 6));
        session.foxes[1].pos = (2, 6);
        let targets = *session.board.target_cells();
        for target in targets {
            if session.board.piece_at(target).is_none() {
                session.board.put_chicken(target);
            }
        }
        assert_eq!(
            session.computer_turn(),
            ClickOutcome::GameOver(GameOutcome::Won)
        );
        assert_eq!(session.phase(), Phase::Ended(GameOutcome::Won));
        let view = session.snapshot();
        let reached = view
            .cells
            .iter()
            .flatten()
            .flatten()
            .filter(|c| c.reached)
            .count();
        assert_eq!(reached, 9);
    }

    #[test]
    fn restart_reseeds_but_keeps_board_structure() {
        let mut session = fresh();
        session.handle_click((3, 3));
        session.handle_click((2, 3));
        session.restart();
        let view = session.snapshot();
        assert_eq!(view.phase, Phase::PlayerTurn);
        assert_eq!(view.chicken_count, 20);
        assert_eq!(view.foxes, [(2, 2), (2, 4)]);
        assert!(view.cells[0][0].is_none());
        assert_eq!(
            view.cells[1][3].as_ref().map(|c| c.kind),
            Some(CellKind::Target)
        );
    }

    #[test]
    fn restart_after_loss_records_the_tally() {
        let mut session = fresh();
        // Seeded sessions are hermetic, so the tallies are exactly zero
        // regardless of anything persisted on this machine.
        assert_eq!(session.statistics().losses, 0);
        assert_eq!(session.statistics().wins, 0);
        session.phase = Phase::Ended(GameOutcome::Lost);
        session.restart();
        assert_eq!(session.statistics().losses, 1);
        assert_eq!(session.statistics().wins, 0);
        assert_eq!(session.phase(), Phase::PlayerTurn);
    }

    #[test]
    fn reduced_flock_setting_is_honoured() {
        let settings = Settings { chicken_count: 12 };
        let session = GameSession::from_seed(&settings, 1);
        assert_eq!(session.snapshot().chicken_count, 12);
    }
}
