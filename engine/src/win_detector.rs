use crate::board::Board;
use crate::types::{Mark, Outcome};

// Scan order is fixed: rows top to bottom, then columns left to right,
// then the main diagonal, then the anti-diagonal.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn evaluate(board: &Board) -> Outcome {
    for line in &LINES {
        let (row, col) = line[0];
        let mark = board.mark_at(row, col);
        if mark == Mark::Empty {
            continue;
        }

        if line[1..].iter().all(|&(r, c)| board.mark_at(r, c) == mark) {
            return Outcome::Win(mark);
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
