mod board;
mod game_state;
mod player;

pub use board::{
    Board, BoardError, BoardPosition, BoardPositionError, BoardSpace, DEFAULT_BOARD_SIZE,
    MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};
pub use game_state::{GameState, Move, PlaceOutcome, RoundPhase, UndoOutcome, WIN_LENGTH};
pub use player::{PlayerNum, Scores};
