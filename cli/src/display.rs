use tictactoe_engine::{BOARD_SIZE, Board};

pub fn print_board(board: &Board) {
    println!();
    print!("{}", format_board(board));
    println!();
}

fn format_board(board: &Board) -> String {
    let mut output = String::new();
    for row in 0..BOARD_SIZE {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| format!(" {} ", board.mark_at(row, col)))
            .collect();
        output.push_str(&cells.join("|"));
        output.push('\n');
        if row < BOARD_SIZE - 1 {
            output.push_str("---+---+---\n");
        }
    }

    output
}
