use crate::board::Board;
use crate::error::MoveError;
use crate::types::{Mark, Outcome, Position};
use crate::win_detector::evaluate;

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current_mark: Mark,
    status: Outcome,
    last_move: Option<Position>,
    move_count: usize,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: Outcome::InProgress,
            last_move: None,
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> Outcome {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn play(&mut self, row: usize, col: usize) -> Result<Outcome, MoveError> {
        if self.status != Outcome::InProgress {
            return Err(MoveError::GameOver);
        }

        self.board.place(row, col, self.current_mark)?;
        self.last_move = Some(Position::new(row, col));
        self.move_count += 1;
        self.status = evaluate(&self.board);

        if self.status == Outcome::InProgress {
            self.switch_turn();
        }

        Ok(self.status)
    }

    fn switch_turn(&mut self) {
        if self.current_mark == Mark::X {
            self.current_mark = Mark::O;
        } else {
            self.current_mark = Mark::X;
        }
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.current_mark = Mark::X;
        self.status = Outcome::InProgress;
        self.last_move = None;
        self.move_count = 0;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
