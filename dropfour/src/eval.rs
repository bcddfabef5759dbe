//! Placement win detection and the window-sum board heuristic.

use once_cell::sync::Lazy;

use crate::board::{Board, Cell, Player};
use crate::{HEIGHT, WIDTH};

/// Line axes as `(row, column)` deltas; each is scanned in both directions.
const AXES: [(isize, isize); 4] = [(1, 1), (1, 0), (1, -1), (0, 1)];

/// Every four-cell line on the grid, by cell coordinates.
static WINDOWS: Lazy<Vec<[(usize, usize); 4]>> = Lazy::new(generate_windows);

/// Whether the token just written at `(row, column)` completed four in a row.
/// Counts the run through the placed cell along each line axis, extending in
/// both directions. Trusts that the cell already holds `player`'s token.
pub fn is_winning_placement(board: &Board, row: usize, column: usize, player: Player) -> bool {
    let token = player.to_cell();
    for (dr, dc) in AXES {
        let mut run = 1;
        for sign in [1, -1] {
            let mut r = row as isize + dr * sign;
            let mut c = column as isize + dc * sign;
            while in_bounds(r, c) && board.get(r as usize, c as usize) == token {
                run += 1;
                r += dr * sign;
                c += dc * sign;
            }
        }
        if run >= 4 {
            return true;
        }
    }
    false
}

/// Scores one four-cell window for `perspective`.
pub fn score_window(cells: [Cell; 4], perspective: Player) -> i32 {
    let own_token = perspective.to_cell();
    let opp_token = perspective.opponent().to_cell();
    let own = cells.iter().filter(|&&cell| cell == own_token).count();
    let opp = cells.iter().filter(|&&cell| cell == opp_token).count();
    let empty = 4 - own - opp;

    let mut score = 0;
    if own == 4 {
        score += 100;
    } else if own == 3 && empty == 1 {
        score += 5;
    } else if own == 2 && empty == 2 {
        score += 2;
    }
    // Keyed on the opponent's count alone, separate from the chain above.
    if opp == 3 && empty == 1 {
        score -= 4;
    }
    score
}

/// Heuristic board score for `perspective`: the sum of [`score_window`] over
/// every window. Never reaches the +/-10 000 win sentinels.
pub fn score_board(board: &Board, perspective: Player) -> i32 {
    WINDOWS
        .iter()
        .map(|window| {
            score_window(
                window.map(|(row, column)| board.get(row, column)),
                perspective,
            )
        })
        .sum()
}

fn in_bounds(row: isize, column: isize) -> bool {
    (0..HEIGHT as isize).contains(&row) && (0..WIDTH as isize).contains(&column)
}

fn generate_windows() -> Vec<[(usize, usize); 4]> {
    let mut windows = Vec::new();
    // Horizontal
    for row in 0..HEIGHT {
        for column in 0..=WIDTH - 4 {
            windows.push(std::array::from_fn(|i| (row, column + i)));
        }
    }
    // Vertical
    for column in 0..WIDTH {
        for row in 0..=HEIGHT - 4 {
            windows.push(std::array::from_fn(|i| (row + i, column)));
        }
    }
    // Diagonal \
    for row in 0..=HEIGHT - 4 {
        for column in 0..=WIDTH - 4 {
            windows.push(std::array::from_fn(|i| (row + i, column + i)));
        }
    }
    // Diagonal /
    for row in 3..HEIGHT {
        for column in 0..=WIDTH - 4 {
            windows.push(std::array::from_fn(|i| (row - i, column + i)));
        }
    }
    windows
}
