mod gomoku;

pub use gomoku::{
    Board, BoardError, BoardPosition, BoardPositionError, BoardSpace, GameState, Move,
    PlaceOutcome, PlayerNum, RoundPhase, Scores, UndoOutcome, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE,
    MIN_BOARD_SIZE, WIN_LENGTH,
};
