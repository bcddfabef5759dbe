//! Move selection: the depth-bounded minimax search and a scripted
//! one-move-lookahead tier.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};
use crate::eval::{is_winning_placement, score_board};
use crate::WIDTH;

/// Plies explored by [`choose_move`]; the root move consumes the first ply.
pub const SEARCH_DEPTH: u32 = 4;

/// Returned for a forced win inside the search. Dominates every heuristic
/// board score (the window sum never exceeds 6 900 in magnitude).
const WIN_SCORE: i32 = 10_000;

/// Column preference for the scripted tier, center outwards.
const MOVE_ORDER: [usize; WIDTH] = [3, 2, 4, 1, 5, 0, 6];

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// One-move lookahead: take a win, block a win, else play centrally.
    Easy,
    /// The full minimax search.
    #[default]
    Hard,
}

/// Picks a column for `ai` to play on `board`.
///
/// A one-move win is taken before any search is spent. Otherwise every legal
/// column is scored by minimax and the highest score wins, ties keeping the
/// leftmost column. On a full board this falls back to the center column;
/// callers are expected to have ruled a finished position out already.
pub fn choose_move(board: &Board, ai: Player) -> usize {
    if let Some(column) = winning_column(board, ai) {
        return column;
    }

    let mut best_column = WIDTH / 2;
    let mut best_score = i32::MIN;
    for column in 0..WIDTH {
        let mut child = *board;
        let Some(row) = child.drop_piece(column, ai) else {
            continue;
        };
        if is_winning_placement(&child, row, column, ai) {
            return column;
        }
        let score = minimax(&child, SEARCH_DEPTH - 1, i32::MIN, i32::MAX, false, ai);
        if score > best_score {
            best_score = score;
            best_column = column;
        }
    }
    best_column
}

/// The easy tier: take a one-move win, block the opponent's one-move win,
/// else the first open column in center-outward order.
pub fn scripted_move(board: &Board, ai: Player) -> usize {
    if let Some(column) = winning_column(board, ai) {
        return column;
    }
    if let Some(column) = winning_column(board, ai.opponent()) {
        return column;
    }
    MOVE_ORDER
        .into_iter()
        .find(|&column| board.drop_row(column).is_some())
        .unwrap_or(WIDTH / 2)
}

/// Lowest-index column where dropping a token wins for `player` outright.
fn winning_column(board: &Board, player: Player) -> Option<usize> {
    (0..WIDTH).find(|&column| {
        let mut probe = *board;
        match probe.drop_piece(column, player) {
            Some(row) => is_winning_placement(&probe, row, column, player),
            None => false,
        }
    })
}

/// Minimax with alpha-beta pruning. Maximizing nodes drop `ai`'s tokens,
/// minimizing nodes the opponent's; a placement that wins ends the whole
/// call at +/-`WIN_SCORE`. Leaves are always scored from `ai`'s perspective,
/// even when the opponent is the one to move there.
fn minimax(
    board: &Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ai: Player,
) -> i32 {
    if depth == 0 {
        return score_board(board, ai);
    }

    if maximizing {
        let mut best = i32::MIN;
        for column in 0..WIDTH {
            let mut child = *board;
            let Some(row) = child.drop_piece(column, ai) else {
                continue;
            };
            if is_winning_placement(&child, row, column, ai) {
                return WIN_SCORE;
            }
            let score = minimax(&child, depth - 1, alpha, beta, false, ai);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let opponent = ai.opponent();
        let mut best = i32::MAX;
        for column in 0..WIDTH {
            let mut child = *board;
            let Some(row) = child.drop_piece(column, opponent) else {
                continue;
            };
            if is_winning_placement(&child, row, column, opponent) {
                return -WIN_SCORE;
            }
            let score = minimax(&child, depth - 1, alpha, beta, true, ai);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
