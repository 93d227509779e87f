use crate::gomoku::board::{Board, BoardPosition, BoardSpace, DEFAULT_BOARD_SIZE};
use crate::gomoku::player::{PlayerNum, Scores};
use serde::{Deserialize, Serialize};

pub const WIN_LENGTH: usize = 5;

// One step along each of the four axes scanned for a winning run:
// horizontal, vertical, diagonal-down-right, diagonal-down-left
const AXES: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

// A committed move, in play order. Popped only by undo, last-in-first-out.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub player: PlayerNum,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaceOutcome {
    Placed,
    Win,
    Rejected,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UndoOutcome {
    Undone(Move),
    NoOp,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    InProgress,
    RoundOver,
}

#[derive(Debug)]
pub struct GameState {
    board: Board,
    current_player: PlayerNum,
    scores: Scores,
    history: Vec<Move>,
    phase: RoundPhase,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new(Board::new(DEFAULT_BOARD_SIZE).unwrap())
    }
}

impl GameState {
    pub fn new(board: Board) -> Self {
        GameState {
            board,
            current_player: PlayerNum::Black,
            scores: Scores::new(),
            history: Vec::new(),
            phase: RoundPhase::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> PlayerNum {
        self.current_player
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    // Commit a stone for the current player. Rejects without touching any
    // state when:
    // - the round is already over (awaiting an explicit reset)
    // - the coordinates are off the board
    // - the target space is occupied
    // A winning placement scores for the mover and freezes the round so the
    // caller can still read the final board; it does not reset anything.
    pub fn place_stone(&mut self, row: i32, col: i32) -> PlaceOutcome {
        if self.phase == RoundPhase::RoundOver {
            return PlaceOutcome::Rejected;
        }
        let pos = match BoardPosition::new(&self.board, row, col) {
            Ok(pos) => pos,
            Err(_) => return PlaceOutcome::Rejected,
        };
        if self.board.get_space(row, col) != BoardSpace::Empty {
            return PlaceOutcome::Rejected;
        }

        let player = self.current_player;
        self.board
            .set_space(pos, BoardSpace::Stone { player_num: player });
        self.history.push(Move {
            row: pos.row(),
            col: pos.col(),
            player,
        });

        if self.is_winning_move(pos, player) {
            self.scores[player] += 1;
            self.phase = RoundPhase::RoundOver;
            PlaceOutcome::Win
        } else {
            self.current_player = player.opponent();
            PlaceOutcome::Placed
        }
    }

    // Take back the most recent move: the space becomes empty again and it is
    // the mover's turn once more. A finished round cannot be taken back, and
    // scores are never reverted.
    pub fn undo(&mut self) -> UndoOutcome {
        if self.phase == RoundPhase::RoundOver {
            return UndoOutcome::NoOp;
        }
        match self.history.pop() {
            None => UndoOutcome::NoOp,
            Some(mv) => {
                // History only ever holds validated positions
                let pos = BoardPosition::new(&self.board, mv.row as i32, mv.col as i32).unwrap();
                self.board.set_space(pos, BoardSpace::Empty);
                self.current_player = mv.player;
                UndoOutcome::Undone(mv)
            }
        }
    }

    // Start a fresh round on the same board size. Scores carry over.
    pub fn reset(&mut self) {
        self.board.clear();
        self.history.clear();
        self.current_player = PlayerNum::Black;
        self.phase = RoundPhase::InProgress;
    }

    // A win can only be created by the newest stone, so scanning out from it
    // is enough: for each axis, sum the two opposite runs plus the placed
    // stone itself.
    fn is_winning_move(&self, pos: BoardPosition, player: PlayerNum) -> bool {
        AXES.iter().any(|&(d_row, d_col)| {
            let run = 1
                + self.board.count_run(pos, d_row, d_col, player)
                + self.board.count_run(pos, -d_row, -d_col, player);
            run >= WIN_LENGTH
        })
    }
}
