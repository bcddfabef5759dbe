//! Four-in-a-row engine for the classic 6x7 grid, with a depth-bounded
//! minimax AI. The wire surface is stateless: callers feed a move history
//! string (e.g. `R3Y3R2Y4`) and get back the column the engine plays for the
//! side whose turn is next after that history.
use serde::{Deserialize, Serialize};

pub mod board;
pub mod eval;
pub mod game;
pub mod search;

pub use board::{Board, Cell, Player};
pub use eval::{is_winning_placement, score_board, score_window};
pub use game::{parse_history, Game, GameError, GameOutcome, MoveOutcome, TypedMove};
pub use search::{choose_move, scripted_move, Difficulty, SEARCH_DEPTH};

/// Board width in columns.
pub const WIDTH: usize = 7;
/// Board height in rows; row 0 is the top.
pub const HEIGHT: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub position: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    pub column: usize,
}

/// Replays `request.position` and picks a column for the side to move.
/// Finished games (won or drawn) are refused rather than searched.
pub fn best_move(request: MoveRequest) -> Result<MoveResponse, GameError> {
    let moves = parse_history(&request.position)?;
    let game = Game::from_history(&moves)?;
    if game.is_over() {
        return Err(GameError::GameOver);
    }
    let column = match request.difficulty {
        Difficulty::Easy => scripted_move(game.board(), game.to_move()),
        Difficulty::Hard => choose_move(game.board(), game.to_move()),
    };
    Ok(MoveResponse { column })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_an_open_three_through_the_wire() {
        // Red threatens a horizontal four on the bottom row; yellow must
        // block at column 3.
        let res = best_move(MoveRequest {
            position: "R0Y0R1Y1R2".to_string(),
            difficulty: Difficulty::Hard,
        })
        .unwrap();
        assert_eq!(res.column, 3);
    }

    #[test]
    fn easy_tier_blocks_through_the_wire() {
        let res = best_move(MoveRequest {
            position: "R0Y0R1Y1R2".to_string(),
            difficulty: Difficulty::Easy,
        })
        .unwrap();
        assert_eq!(res.column, 3);
    }

    #[test]
    fn empty_position_gets_a_legal_reply() {
        let res = best_move(MoveRequest {
            position: String::new(),
            difficulty: Difficulty::Hard,
        })
        .unwrap();
        assert!(res.column < WIDTH);
    }

    #[test]
    fn refuses_a_finished_game() {
        // Red already owns the bottom row through column 3.
        let res = best_move(MoveRequest {
            position: "R0Y0R1Y1R2Y2R3".to_string(),
            difficulty: Difficulty::Hard,
        });
        assert!(matches!(res, Err(GameError::GameOver)));
    }

    #[test]
    fn surfaces_parse_errors() {
        let res = best_move(MoveRequest {
            position: "R9".to_string(),
            difficulty: Difficulty::Easy,
        });
        assert!(matches!(res, Err(GameError::ParseMove { .. })));
    }

    #[test]
    fn difficulty_defaults_to_hard() {
        let request: MoveRequest = serde_json::from_str(r#"{"position": ""}"#).unwrap();
        assert_eq!(request.difficulty, Difficulty::Hard);
    }

    #[test]
    fn difficulty_uses_lowercase_names_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&Difficulty::Easy).unwrap(),
            "\"easy\""
        );
        let parsed: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(parsed, Difficulty::Hard);
    }
}
