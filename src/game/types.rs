/// Board coordinate as (row, col). Row 0 is the top (fox side), row 6 the
/// bottom (chicken side). Signed so that neighbour arithmetic near the edges
/// stays range-checkable instead of wrapping.
pub type Coord = (i32, i32);

/// The fixed classification of a present cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Common,
    /// One of the nine cells the chickens must occupy to win.
    Target,
}

/// Transient highlight state of a cell, cleared whenever the selection changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStatus {
    #[default]
    Default,
    Selected,
    CanMoveTo,
}

/// The occupant of a cell. Foxes carry their slot (0 or 1) so the session can
/// keep the fox roster and the board occupancy in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    Chicken,
    Fox(usize),
}

/// One jump of a capture chain: the chicken removed and the cell the fox
/// lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jump {
    pub captured: Coord,
    pub landing: Coord,
}

/// A fox's horizontal bias when no capture is available: toward the board
/// centre column, or none when already centred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovePreference {
    Left,
    Right,
    None,
}

/// One of the two foxes. `chain` is per-turn scratch: the best capture chain
/// found for this fox during the current computer turn, cleared once the turn
/// is resolved.
#[derive(Debug, Clone)]
pub struct Fox {
    pub pos: Coord,
    pub chain: Vec<Jump>,
}

impl Fox {
    pub fn new(pos: Coord) -> Self {
        Self {
            pos,
            chain: Vec::new(),
        }
    }

    pub fn preference(&self) -> MovePreference {
        match self.pos.1 {
            c if c < 3 => MovePreference::Right,
            c if c > 3 => MovePreference::Left,
            _ => MovePreference::None,
        }
    }
}

/// Outcome of a finished session, from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// All nine target cells are chicken-occupied.
    Won,
    /// Fewer than nine chickens remain.
    Lost,
}

/// Turn state machine. Input is only accepted during `PlayerTurn`;
/// `ComputerTurn` is resolved synchronously within the same call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PlayerTurn,
    ComputerTurn,
    Ended(GameOutcome),
}

/// Cumulative win/loss statistics across sessions.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Statistics {
    pub wins: u32,
    pub losses: u32,
}

impl Statistics {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Won => self.wins += 1,
            GameOutcome::Lost => self.losses += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
