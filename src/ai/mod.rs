//! Fox decision-making: exhaustive multi-jump capture search, and the
//! column-preference fallback movement used when no capture exists.

use rand::Rng;

use crate::game::board::{Board, GRID_DIM};
use crate::game::types::{Coord, Fox, Jump, MovePreference, Piece};

const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Upper bound on chain length; a chain can never capture more chickens than
/// the board holds cells.
const MAX_CHAIN: usize = 33;

/// The action a computer turn resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoxAction {
    /// The fox executed a capture chain, in order.
    Chain { fox: usize, jumps: Vec<Jump> },
    /// No capture existed; a fox stepped one cell.
    Step { fox: usize, from: Coord, to: Coord },
    /// No fox could act at all.
    Stuck,
}

// ════════════════════════════════════════════════════════════════════════════
// Capture search
// ════════════════════════════════════════════════════════════════════════════

/// Removes a jumped chicken for the duration of one search branch and puts it
/// back when the branch is abandoned, on every exit path.
struct ScratchJump<'b> {
    board: &'b mut Board,
    jumped: Coord,
}

impl<'b> ScratchJump<'b> {
    fn take(board: &'b mut Board, jumped: Coord) -> Self {
        board.take_chicken(jumped);
        Self { board, jumped }
    }

    fn board(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for ScratchJump<'_> {
    fn drop(&mut self) {
        self.board.put_chicken(self.jumped);
    }
}

/// Find the longest capture chain for a fox standing at `start`. Ties between
/// equal-length chains go to the first one discovered. The board is returned
/// to its exact pre-call state; all mutation during the search is scratch.
pub fn plan_chain(board: &mut Board, start: Coord) -> Vec<Jump> {
    let mut best = Vec::new();
    let mut chain = Vec::new();
    extend_chain(board, start, &mut chain, &mut best);
    best
}

fn extend_chain(board: &mut Board, pos: Coord, chain: &mut Vec<Jump>, best: &mut Vec<Jump>) {
    debug_assert!(chain.len() < MAX_CHAIN, "runaway capture recursion");
    if chain.len() > best.len() {
        *best = chain.clone();
    }

    for (dr, dc) in DIRECTIONS {
        let over = (pos.0 + dr, pos.1 + dc);
        let landing = (pos.0 + 2 * dr, pos.1 + 2 * dc);

        // A jumped-over cell is never revisited within one chain.
        if chain.iter().any(|jump| jump.captured == over) {
            continue;
        }
        if board.piece_at(over) != Some(Piece::Chicken) {
            continue;
        }
        if board.is_occupied(landing) {
            continue;
        }

        let mut scratch = ScratchJump::take(board, over);
        chain.push(Jump {
            captured: over,
            landing,
        });
        extend_chain(scratch.board(), landing, chain, best);
        chain.pop();
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Turn resolution
// ════════════════════════════════════════════════════════════════════════════

/// Resolve one computer turn: plan the best chain for each fox, execute the
/// longer one (fox 0 on ties), or fall back to a single preference-guided
/// step. Both foxes' scratch chains are cleared before returning.
pub fn take_turn(board: &mut Board, foxes: &mut [Fox; 2], rng: &mut impl Rng) -> FoxAction {
    for fox in foxes.iter_mut() {
        fox.chain = plan_chain(board, fox.pos);
    }

    let chosen = if foxes[0].chain.len() >= foxes[1].chain.len() {
        0
    } else {
        1
    };
    let jumps = std::mem::take(&mut foxes[chosen].chain);
    foxes[1 - chosen].chain.clear();

    if !jumps.is_empty() {
        for jump in &jumps {
            board.take_chicken(jump.captured);
            board.move_piece(foxes[chosen].pos, jump.landing);
            foxes[chosen].pos = jump.landing;
        }
        return FoxAction::Chain { fox: chosen, jumps };
    }

    fallback_step(board, foxes, rng)
}

/// Non-capturing movement, attempted in fixed rule order: up, sideways by
/// column preference, sideways at random for a centred fox, and downward as a
/// last resort. The fox tried first within each rule is chosen at random.
fn fallback_step(board: &mut Board, foxes: &mut [Fox; 2], rng: &mut impl Rng) -> FoxAction {
    let first = rng.gen_range(0..2usize);
    let order = [first, 1 - first];

    // Up.
    for &slot in &order {
        let (row, col) = foxes[slot].pos;
        if let Some(action) = try_step(board, foxes, slot, (row - 1, col)) {
            return action;
        }
    }

    // Sideways, toward the centre column.
    for &slot in &order {
        let (row, col) = foxes[slot].pos;
        let dest = match foxes[slot].preference() {
            MovePreference::Left => (row, col - 1),
            MovePreference::Right => (row, col + 1),
            MovePreference::None => continue,
        };
        if let Some(action) = try_step(board, foxes, slot, dest) {
            return action;
        }
    }

    // Sideways for a centred fox: random direction, other side as fallback.
    for &slot in &order {
        if foxes[slot].preference() != MovePreference::None {
            continue;
        }
        let (row, col) = foxes[slot].pos;
        let dir: i32 = if rng.gen_range(0..2) == 0 { -1 } else { 1 };
        if let Some(action) = try_step(board, foxes, slot, (row, col + dir)) {
            return action;
        }
        if let Some(action) = try_step(board, foxes, slot, (row, col - dir)) {
            return action;
        }
    }

    // Down.
    for &slot in &order {
        let (row, col) = foxes[slot].pos;
        if row + 1 < GRID_DIM {
            if let Some(action) = try_step(board, foxes, slot, (row + 1, col)) {
                return action;
            }
        }
    }

    FoxAction::Stuck
}

fn try_step(
    board: &mut Board,
    foxes: &mut [Fox; 2],
    slot: usize,
    dest: Coord,
) -> Option<FoxAction> {
    if board.is_occupied(dest) {
        return None;
    }
    let from = foxes[slot].pos;
    board.move_piece(from, dest);
    foxes[slot].pos = dest;
    Some(FoxAction::Step {
        fox: slot,
        from,
        to: dest,
    })
}
