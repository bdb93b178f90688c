use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{BOARD_SIZE, Board};
use crate::minimax;
use crate::rng::GameRng;
use crate::types::{Mark, Outcome, Position};
use crate::win_detector::evaluate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotStrategy {
    Minimax,
    LineScan,
    MagicSquare,
    Random,
}

impl fmt::Display for BotStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BotStrategy::Minimax => "minimax",
            BotStrategy::LineScan => "line_scan",
            BotStrategy::MagicSquare => "magic_square",
            BotStrategy::Random => "random",
        };
        write!(f, "{}", name)
    }
}

pub fn calculate_move(
    strategy: BotStrategy,
    board: &Board,
    mover: Mark,
    rng: &mut GameRng,
) -> Option<Position> {
    if evaluate(board) != Outcome::InProgress {
        return None;
    }

    match strategy {
        BotStrategy::Minimax => minimax::best_move(board, mover),
        BotStrategy::LineScan => calculate_line_scan_move(board, mover),
        BotStrategy::MagicSquare => calculate_magic_square_move(board, mover),
        BotStrategy::Random => calculate_random_move(board, rng),
    }
}

fn calculate_random_move(board: &Board, rng: &mut GameRng) -> Option<Position> {
    let moves = board.available_moves();
    rng.choose(&moves).copied()
}

fn calculate_line_scan_move(board: &Board, mover: Mark) -> Option<Position> {
    let opponent = mover.opponent()?;
    let moves = board.available_moves();
    let mut scratch = board.clone();

    if let Some(position) = find_winning_move(&mut scratch, mover, &moves) {
        return Some(position);
    }
    if let Some(position) = find_winning_move(&mut scratch, opponent, &moves) {
        return Some(position);
    }

    if board.mark_at(1, 1) == Mark::Empty {
        return Some(Position::new(1, 1));
    }

    moves.first().copied()
}

fn find_winning_move(board: &mut Board, mark: Mark, moves: &[Position]) -> Option<Position> {
    for &position in moves {
        board.set_cell(position.row, position.col, mark);
        let outcome = evaluate(board);
        board.clear_cell(position.row, position.col);

        if outcome == Outcome::Win(mark) {
            return Some(position);
        }
    }

    None
}

// Rows, columns and diagonals of the magic square all sum to 15, so
// three cells form a winning line exactly when their values do.
const MAGIC_SQUARE: [[i32; 3]; 3] = [
    [8, 1, 6],
    [3, 5, 7],
    [4, 9, 2],
];

fn calculate_magic_square_move(board: &Board, mover: Mark) -> Option<Position> {
    let opponent = mover.opponent()?;

    if let Some(position) = complete_pair(board, &magic_values(board, mover)) {
        return Some(position);
    }
    if let Some(position) = complete_pair(board, &magic_values(board, opponent)) {
        return Some(position);
    }

    // Center, then corners (values 2, 4, 6, 8), then edges
    if let Some(position) = free_cell_for_value(board, 5) {
        return Some(position);
    }
    for value in [2, 4, 6, 8, 1, 3, 7, 9] {
        if let Some(position) = free_cell_for_value(board, value) {
            return Some(position);
        }
    }

    None
}

fn magic_values(board: &Board, mark: Mark) -> Vec<i32> {
    let mut values = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if board.mark_at(row, col) == mark {
                values.push(MAGIC_SQUARE[row][col]);
            }
        }
    }

    values
}

fn complete_pair(board: &Board, values: &[i32]) -> Option<Position> {
    for (index, &first) in values.iter().enumerate() {
        for &second in &values[index + 1..] {
            if let Some(position) = free_cell_for_value(board, 15 - first - second) {
                return Some(position);
            }
        }
    }

    None
}

fn free_cell_for_value(board: &Board, value: i32) -> Option<Position> {
    if !(1..=9).contains(&value) {
        return None;
    }

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if MAGIC_SQUARE[row][col] == value && board.mark_at(row, col) == Mark::Empty {
                return Some(Position::new(row, col));
            }
        }
    }

    None
}
