//! Game session state: the authoritative board, turn rotation, and win/draw
//! bookkeeping, replayable from a move-history string.

use thiserror::Error;

use crate::board::{Board, Player};
use crate::eval::is_winning_placement;
use crate::{HEIGHT, WIDTH};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid move string at position {position}: {reason}")]
    ParseMove { position: usize, reason: String },
    #[error("column {column} is full")]
    ColumnFull { column: usize },
    #[error("column {column} is out of bounds")]
    ColumnOutOfBounds { column: usize },
    #[error("the game is already over")]
    GameOver,
}

/// How a finished game ended.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A resolved move: who dropped where, the row gravity settled it in, and
/// whether it won the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub player: Player,
    pub column: usize,
    pub row: usize,
    pub won: bool,
}

/// One move of a history string: the recorded owner and column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypedMove {
    pub player: Player,
    pub column: usize,
}

/// A live game. Owns the authoritative board, whose turn it is, and the
/// outcome once one exists.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    starter: Player,
    moves_played: u8,
    outcome: Option<GameOutcome>,
}

impl Game {
    pub fn new(starter: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: starter,
            starter,
            moves_played: 0,
            outcome: None,
        }
    }

    /// Replays a recorded move list. Owners are taken from the records
    /// rather than strict alternation, so partial and test positions replay
    /// as written. An empty history starts a fresh game with Red to move.
    pub fn from_history(moves: &[TypedMove]) -> Result<Self, GameError> {
        if moves.is_empty() {
            return Ok(Self::new(Player::Red));
        }
        let mut game = Self::new(moves[0].player);
        for mv in moves {
            game.force_play(mv.player, mv.column)?;
        }
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn moves_played(&self) -> u8 {
        self.moves_played
    }

    /// Drops a token for the side to move.
    pub fn play(&mut self, column: usize) -> Result<MoveOutcome, GameError> {
        let player = self.to_move;
        self.force_play(player, column)
    }

    /// A fresh game opened by the other side, so successive games alternate
    /// who goes first.
    pub fn rematch(&self) -> Game {
        Game::new(self.starter.opponent())
    }

    fn force_play(&mut self, player: Player, column: usize) -> Result<MoveOutcome, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }
        if column >= WIDTH {
            return Err(GameError::ColumnOutOfBounds { column });
        }
        let row = self
            .board
            .drop_piece(column, player)
            .ok_or(GameError::ColumnFull { column })?;
        self.moves_played += 1;
        let won = is_winning_placement(&self.board, row, column, player);
        if won {
            self.outcome = Some(GameOutcome::Win(player));
        } else if self.moves_played as usize == WIDTH * HEIGHT {
            self.outcome = Some(GameOutcome::Draw);
        }
        self.to_move = player.opponent();
        Ok(MoveOutcome {
            player,
            column,
            row,
            won,
        })
    }
}

/// Parses a `R3Y3R2`-style history: `<color><column>` pairs, columns 0-6,
/// colors case-insensitive.
pub fn parse_history(history: &str) -> Result<Vec<TypedMove>, GameError> {
    let mut moves = Vec::new();
    let mut stream = history.trim().char_indices();
    while let Some((position, symbol)) = stream.next() {
        let player = match symbol {
            'R' | 'r' => Player::Red,
            'Y' | 'y' => Player::Yellow,
            other => {
                return Err(GameError::ParseMove {
                    position,
                    reason: format!("expected R or Y, found {other}"),
                })
            }
        };
        let Some((digit_position, digit)) = stream.next() else {
            return Err(GameError::ParseMove {
                position: position + 1,
                reason: "missing column number".to_string(),
            });
        };
        let column = digit.to_digit(10).ok_or_else(|| GameError::ParseMove {
            position: digit_position,
            reason: format!("expected column digit, found {digit}"),
        })? as usize;
        if column >= WIDTH {
            return Err(GameError::ParseMove {
                position: digit_position,
                reason: format!("column must be 0-{}", WIDTH - 1),
            });
        }
        moves.push(TypedMove { player, column });
    }
    Ok(moves)
}
