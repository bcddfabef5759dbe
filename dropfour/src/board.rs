use serde::{Deserialize, Serialize};

use crate::{HEIGHT, WIDTH};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// The 6x7 grid. Row 0 is the top, row `HEIGHT - 1` the bottom; tokens fall
/// to the lowest empty row of their column.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// Row a token dropped in `column` would land in, scanning up from the
    /// floor. `None` when the column is full or out of range.
    pub fn drop_row(&self, column: usize) -> Option<usize> {
        if column >= WIDTH {
            return None;
        }
        (0..HEIGHT)
            .rev()
            .find(|&row| self.cells[row][column] == Cell::Empty)
    }

    /// Drops a token for `player` and returns the row it settled in. A full
    /// column leaves the board untouched and returns `None`.
    pub fn drop_piece(&mut self, column: usize, player: Player) -> Option<usize> {
        let row = self.drop_row(column)?;
        self.cells[row][column] = player.to_cell();
        Some(row)
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| self.cells[0][column] != Cell::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                assert_eq!(board.get(row, column), Cell::Empty);
            }
        }
        assert!(!board.is_full());
    }

    #[test]
    fn pieces_stack_from_the_floor() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(3, Player::Red), Some(HEIGHT - 1));
        assert_eq!(board.drop_piece(3, Player::Yellow), Some(HEIGHT - 2));
        assert_eq!(board.get(HEIGHT - 1, 3), Cell::Red);
        assert_eq!(board.get(HEIGHT - 2, 3), Cell::Yellow);
        assert_eq!(board.get(HEIGHT - 3, 3), Cell::Empty);
    }

    #[test]
    fn drop_row_matches_where_the_next_piece_lands() {
        let mut board = Board::new();
        for turn in 0..4 {
            let expected = board.drop_row(0);
            let player = if turn % 2 == 0 {
                Player::Red
            } else {
                Player::Yellow
            };
            assert_eq!(board.drop_piece(0, player), expected);
        }
        assert_eq!(board.drop_row(0), Some(1));
    }

    #[test]
    fn full_column_rejects_the_drop() {
        let mut board = Board::new();
        for _ in 0..HEIGHT {
            assert!(board.drop_piece(6, Player::Red).is_some());
        }
        let before = board;
        assert_eq!(board.drop_row(6), None);
        assert_eq!(board.drop_piece(6, Player::Yellow), None);
        assert_eq!(board, before);
    }

    #[test]
    fn out_of_range_column_has_no_drop_row() {
        let board = Board::new();
        assert_eq!(board.drop_row(WIDTH), None);
        assert_eq!(board.drop_row(42), None);
    }

    #[test]
    fn board_fills_up() {
        let mut board = Board::new();
        for column in 0..WIDTH {
            for _ in 0..HEIGHT {
                board.drop_piece(column, Player::Red);
            }
        }
        assert!(board.is_full());
        assert_eq!(board.drop_row(0), None);
    }

    #[test]
    fn gravity_holds_under_random_play() {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};

        let mut rng = SmallRng::seed_from_u64(0x5eed);
        let mut board = Board::new();
        let mut player = Player::Red;
        for _ in 0..200 {
            let column = rng.gen_range(0..WIDTH);
            if board.drop_piece(column, player).is_some() {
                player = player.opponent();
            }
            for col in 0..WIDTH {
                let boundary = (0..HEIGHT)
                    .find(|&row| board.get(row, col) != Cell::Empty)
                    .unwrap_or(HEIGHT);
                for row in 0..boundary {
                    assert_eq!(board.get(row, col), Cell::Empty);
                }
                for row in boundary..HEIGHT {
                    assert_ne!(board.get(row, col), Cell::Empty);
                }
            }
        }
    }
}
