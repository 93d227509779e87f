use crate::gomoku::player::PlayerNum;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const MIN_BOARD_SIZE: usize = 5;
pub const MAX_BOARD_SIZE: usize = 26;
pub const DEFAULT_BOARD_SIZE: usize = 15;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Board of size {size} is below the minimum of {min}")]
    TooSmall { size: usize, min: usize },
    #[error("Board of size {size} exceeds the maximum of {max}")]
    TooLarge { size: usize, max: usize },
}

#[derive(Debug)]
pub enum Coordinate {
    Row,
    Col,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Row => write!(f, "row"),
            Coordinate::Col => write!(f, "column"),
        }
    }
}

#[derive(Error, Debug)]
pub enum BoardPositionError {
    #[error("{0} coordinate {1} is outside a board of size {2}")]
    OutOfBounds(Coordinate, i32, usize),
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoardSpace {
    Empty,
    Stone { player_num: PlayerNum },
    OutOfBounds,
}

impl BoardSpace {
    pub fn is_stone(&self, num: PlayerNum) -> bool {
        match self {
            BoardSpace::Stone { player_num } => *player_num == num,
            _ => false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardPosition(usize, usize);

impl BoardPosition {
    // Ensure that the given position meets the following criteria:
    // - row index is non-negative and less than the board size
    // - column index is non-negative and less than the board size
    pub fn new(board: &Board, row: i32, col: i32) -> Result<Self, BoardPositionError> {
        let size = board.size();
        let row_idx = usize::try_from(row)
            .ok()
            .filter(|r| *r < size)
            .ok_or(BoardPositionError::OutOfBounds(Coordinate::Row, row, size))?;
        let col_idx = usize::try_from(col)
            .ok()
            .filter(|c| *c < size)
            .ok_or(BoardPositionError::OutOfBounds(Coordinate::Col, col, size))?;
        Ok(BoardPosition(row_idx, col_idx))
    }

    pub fn row(&self) -> usize {
        self.0
    }

    pub fn col(&self) -> usize {
        self.1
    }
}

// Not an array: the size is picked at construction time
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Board(Vec<Vec<BoardSpace>>);

impl Board {
    // Ensure that the given size meets the following criteria:
    // - at least the minimum size, so a winning run fits on every axis
    // - at most the maximum size
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < MIN_BOARD_SIZE {
            return Err(BoardError::TooSmall {
                size,
                min: MIN_BOARD_SIZE,
            });
        }
        if size > MAX_BOARD_SIZE {
            return Err(BoardError::TooLarge {
                size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Board(vec![vec![BoardSpace::Empty; size]; size]))
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn rows(&self) -> &Vec<Vec<BoardSpace>> {
        &self.0
    }

    // Takes signed coordinates so callers can probe past the edge
    pub fn get_space(&self, row: i32, col: i32) -> BoardSpace {
        self.try_get_space(row, col)
            .unwrap_or(BoardSpace::OutOfBounds)
    }

    fn try_get_space(&self, row: i32, col: i32) -> Option<BoardSpace> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;

        let spaces = self.0.get(row)?;
        let space = spaces.get(col)?;
        Some(*space)
    }

    pub fn set_space(&mut self, pos: BoardPosition, space: BoardSpace) {
        self.0[pos.row()][pos.col()] = space;
    }

    pub fn clear(&mut self) {
        for row in self.0.iter_mut() {
            for space in row.iter_mut() {
                *space = BoardSpace::Empty;
            }
        }
    }

    // Count contiguous stones of `player` strictly beyond `pos` along one
    // direction, stopping at the first non-matching or off-board space
    pub fn count_run(&self, pos: BoardPosition, d_row: i32, d_col: i32, player: PlayerNum) -> usize {
        let mut count = 0;
        let mut row = pos.row() as i32 + d_row;
        let mut col = pos.col() as i32 + d_col;
        while self.get_space(row, col).is_stone(player) {
            count += 1;
            row += d_row;
            col += d_col;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_board() {
        let too_small = Board::new(MIN_BOARD_SIZE - 1);
        assert!(too_small.is_err());

        let zero = Board::new(0);
        assert!(zero.is_err());

        let too_large = Board::new(MAX_BOARD_SIZE + 1);
        assert!(too_large.is_err());

        let min_valid_board = Board::new(MIN_BOARD_SIZE);
        assert!(min_valid_board.is_ok());

        let max_valid_board = Board::new(MAX_BOARD_SIZE);
        assert!(max_valid_board.is_ok());

        let default_board = Board::new(DEFAULT_BOARD_SIZE).unwrap();
        assert_eq!(default_board.size(), 15);
        assert_eq!(default_board.rows().len(), 15);
        assert!(default_board.rows().iter().all(|row| row.len() == 15));
        assert!(default_board
            .rows()
            .iter()
            .flatten()
            .all(|s| *s == BoardSpace::Empty));
    }

    #[test]
    fn test_construct_board_position() {
        let board = Board::new(MIN_BOARD_SIZE).unwrap();
        let negative_row = BoardPosition::new(&board, -1, 0);
        assert!(negative_row.is_err());
        let negative_col = BoardPosition::new(&board, 0, -1);
        assert!(negative_col.is_err());
        let outside_row = BoardPosition::new(&board, 5, 0);
        assert!(outside_row.is_err());
        let outside_col = BoardPosition::new(&board, 0, 5);
        assert!(outside_col.is_err());
        let valid_pos = BoardPosition::new(&board, 4, 4).unwrap();
        assert_eq!(valid_pos.row(), 4);
        assert_eq!(valid_pos.col(), 4);
    }

    #[test]
    fn test_get_and_set_space() {
        let mut board = Board::new(MIN_BOARD_SIZE).unwrap();
        assert_eq!(board.get_space(-1, 0), BoardSpace::OutOfBounds);
        assert_eq!(board.get_space(0, -1), BoardSpace::OutOfBounds);
        assert_eq!(board.get_space(5, 0), BoardSpace::OutOfBounds);
        assert_eq!(board.get_space(0, 5), BoardSpace::OutOfBounds);
        assert_eq!(board.get_space(2, 2), BoardSpace::Empty);

        let pos = BoardPosition::new(&board, 2, 2).unwrap();
        board.set_space(
            pos,
            BoardSpace::Stone {
                player_num: PlayerNum::Black,
            },
        );
        assert!(board.get_space(2, 2).is_stone(PlayerNum::Black));
        assert!(!board.get_space(2, 2).is_stone(PlayerNum::White));
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new(MIN_BOARD_SIZE).unwrap();
        let pos = BoardPosition::new(&board, 1, 3).unwrap();
        board.set_space(
            pos,
            BoardSpace::Stone {
                player_num: PlayerNum::White,
            },
        );
        board.clear();
        assert!(board
            .rows()
            .iter()
            .flatten()
            .all(|s| *s == BoardSpace::Empty));
        assert_eq!(board.size(), MIN_BOARD_SIZE);
    }

    #[test]
    fn test_count_run() {
        let black = BoardSpace::Stone {
            player_num: PlayerNum::Black,
        };
        let white = BoardSpace::Stone {
            player_num: PlayerNum::White,
        };
        let mut board = Board::new(MIN_BOARD_SIZE).unwrap();
        for col in 1..4 {
            let pos = BoardPosition::new(&board, 2, col).unwrap();
            board.set_space(pos, black);
        }
        let start = BoardPosition::new(&board, 2, 1).unwrap();
        // Stones at columns 2 and 3 lie to the right of column 1
        assert_eq!(board.count_run(start, 0, 1, PlayerNum::Black), 2);
        // Column 0 is empty, so the leftward run is 0
        assert_eq!(board.count_run(start, 0, -1, PlayerNum::Black), 0);
        assert_eq!(board.count_run(start, 1, 0, PlayerNum::Black), 0);
        assert_eq!(board.count_run(start, 0, 1, PlayerNum::White), 0);

        // An opposing stone interrupts the run
        let blocker = BoardPosition::new(&board, 2, 3).unwrap();
        board.set_space(blocker, white);
        assert_eq!(board.count_run(start, 0, 1, PlayerNum::Black), 1);
    }

    #[test]
    fn test_count_run_stops_at_edge() {
        let black = BoardSpace::Stone {
            player_num: PlayerNum::Black,
        };
        let mut board = Board::new(MIN_BOARD_SIZE).unwrap();
        for col in 0..5 {
            let pos = BoardPosition::new(&board, 0, col).unwrap();
            board.set_space(pos, black);
        }
        let corner = BoardPosition::new(&board, 0, 0).unwrap();
        assert_eq!(board.count_run(corner, 0, 1, PlayerNum::Black), 4);
        assert_eq!(board.count_run(corner, 0, -1, PlayerNum::Black), 0);
        assert_eq!(board.count_run(corner, -1, 0, PlayerNum::Black), 0);
    }
}
