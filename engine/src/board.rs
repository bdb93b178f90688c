use crate::error::PlaceError;
use crate::types::{Mark, Position};

pub const BOARD_SIZE: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    #[cfg(test)]
    pub fn from_rows(rows: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells: rows }
    }

    pub fn mark_at(&self, row: usize, col: usize) -> Mark {
        self.cells[row][col]
    }

    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), PlaceError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(PlaceError::OutOfRange { row, col });
        }

        if self.cells[row][col] != Mark::Empty {
            return Err(PlaceError::CellOccupied { row, col });
        }

        self.cells[row][col] = mark;
        Ok(())
    }

    // Unchecked writes for search code that probes cells it already knows
    // are empty and in range. The public API stays `place`.
    pub(crate) fn set_cell(&mut self, row: usize, col: usize, mark: Mark) {
        self.cells[row][col] = mark;
    }

    pub(crate) fn clear_cell(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Mark::Empty;
    }

    pub fn reset(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, row_cells) in self.cells.iter().enumerate() {
            for (col, &cell) in row_cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }

        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
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
    use crate::types::Mark::{Empty as E, O, X};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                assert_eq!(board.mark_at(row, col), E);
            }
        }
        assert!(!board.is_full());
        assert_eq!(board.available_moves().len(), 9);
    }

    #[test]
    fn test_place_sets_mark() {
        let mut board = Board::new();
        board.place(1, 2, X).unwrap();
        assert_eq!(board.mark_at(1, 2), X);
        assert_eq!(board.available_moves().len(), 8);
    }

    #[test]
    fn test_place_rejects_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.place(3, 0, X),
            Err(PlaceError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            board.place(0, 7, O),
            Err(PlaceError::OutOfRange { row: 0, col: 7 })
        );
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut board = Board::new();
        board.place(0, 0, X).unwrap();
        assert_eq!(
            board.place(0, 0, O),
            Err(PlaceError::CellOccupied { row: 0, col: 0 })
        );
        assert_eq!(board.mark_at(0, 0), X);
    }

    #[test]
    fn test_available_moves_row_major_order() {
        #[rustfmt::skip]
        let board = Board::from_rows([
            [X, E, O],
            [E, X, E],
            [O, E, E],
        ]);
        assert_eq!(
            board.available_moves(),
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_is_full() {
        #[rustfmt::skip]
        let board = Board::from_rows([
            [X, O, X],
            [O, X, O],
            [O, X, O],
        ]);
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board = Board::new();
        board.place(0, 0, X).unwrap();
        board.place(2, 2, O).unwrap();
        board.reset();
        assert_eq!(board, Board::new());
    }
}
