use crate::board::Board;
use crate::types::{Mark, Outcome, Position, SearchResult};
use crate::win_detector::evaluate;

const WIN_SCORE: i32 = 10;

pub fn best_move(board: &Board, mover: Mark) -> Option<Position> {
    search(board, mover).position
}

pub fn search(board: &Board, mover: Mark) -> SearchResult {
    let Some(opponent) = mover.opponent() else {
        return SearchResult {
            score: 0,
            position: None,
        };
    };

    match evaluate(board) {
        Outcome::Win(mark) => {
            let score = if mark == mover { WIN_SCORE } else { -WIN_SCORE };
            return SearchResult {
                score,
                position: None,
            };
        }
        Outcome::Draw => {
            return SearchResult {
                score: 0,
                position: None,
            };
        }
        Outcome::InProgress => {}
    }

    let mut scratch = board.clone();
    let mut best_score = i32::MIN;
    let mut best_position = None;

    for position in board.available_moves() {
        scratch.set_cell(position.row, position.col, mover);
        let score = value(&mut scratch, mover, opponent, 1, false);
        scratch.clear_cell(position.row, position.col);

        // Strictly greater, so the first cell in row-major order wins ties
        if score > best_score {
            best_score = score;
            best_position = Some(position);
        }
    }

    SearchResult {
        score: best_score,
        position: best_position,
    }
}

fn value(board: &mut Board, mover: Mark, opponent: Mark, depth: i32, maximizing: bool) -> i32 {
    match evaluate(board) {
        Outcome::Win(mark) => {
            return if mark == mover {
                WIN_SCORE - depth
            } else {
                -WIN_SCORE + depth
            };
        }
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let ply_mark = if maximizing { mover } else { opponent };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for position in board.available_moves() {
        board.set_cell(position.row, position.col, ply_mark);
        let score = value(board, mover, opponent, depth + 1, !maximizing);
        board.clear_cell(position.row, position.col);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::Game;
    use crate::types::Mark::{Empty as E, O, X};

    #[test]
    fn test_takes_immediate_win() {
        #[rustfmt::skip]
        let board = Board::from_rows([
            [O, O, E],
            [E, E, E],
            [E, E, E],
        ]);
        assert_eq!(best_move(&board, O), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_blocks_opponent_win() {
        #[rustfmt::skip]
        let board = Board::from_rows([
            [X, X, E],
            [E, O, E],
            [E, E, E],
        ]);
        assert_eq!(best_move(&board, O), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_win_beats_block() {
        // Completing row 1 at (1, 2) wins outright and must beat the
        // row 0 block at (0, 2), even though the block is scanned first.
        #[rustfmt::skip]
        let board = Board::from_rows([
            [X, X, E],
            [O, O, E],
            [E, E, E],
        ]);
        assert_eq!(best_move(&board, O), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_faster_win_scores_higher() {
        // O wins on the next placement
        #[rustfmt::skip]
        let one_ply = Board::from_rows([
            [O, O, E],
            [X, X, O],
            [X, O, X],
        ]);
        // O has no immediate completion but forks with (0, 2): row 0
        // and column 2 both threaten, X can only block one.
        #[rustfmt::skip]
        let three_ply = Board::from_rows([
            [O, E, E],
            [E, X, E],
            [E, E, O],
        ]);

        let fast = search(&one_ply, O);
        let slow = search(&three_ply, O);
        assert_eq!(fast.score, WIN_SCORE - 1);
        assert_eq!(slow.score, WIN_SCORE - 3);
        assert!(fast.score > slow.score);
    }

    #[test]
    fn test_slower_loss_scores_higher_than_faster_loss() {
        // O is lost either way: ignoring the diagonal loses in two
        // plies, blocking at (2, 2) holds out for four.
        #[rustfmt::skip]
        let board = Board::from_rows([
            [X, O, E],
            [E, X, E],
            [E, E, E],
        ]);
        let result = search(&board, O);
        assert_eq!(result.score, -WIN_SCORE + 4);
        assert_eq!(result.position, Some(Position::new(2, 2)));
    }

    #[test]
    fn test_first_maximal_cell_wins_ties() {
        // Both remaining cells lead to a draw, so row-major scanning
        // must settle on the first one.
        #[rustfmt::skip]
        let board = Board::from_rows([
            [X, E, O],
            [O, X, X],
            [X, E, O],
        ]);
        let result = search(&board, O);
        assert_eq!(result.score, 0);
        assert_eq!(result.position, Some(Position::new(0, 1)));
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        #[rustfmt::skip]
        let board = Board::from_rows([
            [X, E, E],
            [E, O, E],
            [E, E, E],
        ]);
        let snapshot = board.clone();
        search(&board, X);
        assert_eq!(board, snapshot);

        let empty = Board::new();
        let snapshot = empty.clone();
        best_move(&empty, X);
        assert_eq!(empty, snapshot);
    }

    #[test]
    fn test_no_move_on_won_board() {
        #[rustfmt::skip]
        let board = Board::from_rows([
            [O, O, O],
            [X, X, E],
            [X, E, E],
        ]);
        assert_eq!(best_move(&board, X), None);
        assert_eq!(best_move(&board, O), None);

        let result = search(&board, O);
        assert_eq!(result.score, WIN_SCORE);
        assert_eq!(result.position, None);
        assert_eq!(search(&board, X).score, -WIN_SCORE);
    }

    #[test]
    fn test_no_move_on_drawn_board() {
        #[rustfmt::skip]
        let board = Board::from_rows([
            [X, O, X],
            [O, X, O],
            [O, X, O],
        ]);
        let result = search(&board, X);
        assert_eq!(result.score, 0);
        assert_eq!(result.position, None);
    }

    #[test]
    fn test_no_move_for_empty_mark() {
        assert_eq!(best_move(&Board::new(), E), None);
    }

    #[test]
    fn test_self_play_is_a_draw_and_deterministic() {
        let first = play_self_game();
        let second = play_self_game();
        assert_eq!(first.0, Outcome::Draw);
        assert_eq!(first, second);
    }

    fn play_self_game() -> (Outcome, Vec<Position>) {
        let mut game = Game::new();
        let mut moves = Vec::new();
        while game.status() == Outcome::InProgress {
            let position = best_move(game.board(), game.current_mark()).unwrap();
            game.play(position.row, position.col).unwrap();
            moves.push(position);
        }
        (game.status(), moves)
    }

    #[test]
    fn test_never_loses_as_x() {
        assert_never_loses(X);
    }

    #[test]
    fn test_never_loses_as_o() {
        assert_never_loses(O);
    }

    // Walks every opponent line exhaustively while the engine answers
    // with its search. The engine may win or draw, never lose.
    fn assert_never_loses(engine_mark: Mark) {
        walk(&Game::new(), engine_mark);
    }

    fn walk(game: &Game, engine_mark: Mark) {
        match game.status() {
            Outcome::Win(mark) => {
                assert_eq!(mark, engine_mark, "engine lost a game");
                return;
            }
            Outcome::Draw => return,
            Outcome::InProgress => {}
        }

        if game.current_mark() == engine_mark {
            let position = best_move(game.board(), engine_mark).unwrap();
            let mut next = game.clone();
            next.play(position.row, position.col).unwrap();
            walk(&next, engine_mark);
        } else {
            for position in game.board().available_moves() {
                let mut next = game.clone();
                next.play(position.row, position.col).unwrap();
                walk(&next, engine_mark);
            }
        }
    }
}
