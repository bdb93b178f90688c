use std::io::{self, BufRead, Write};

use tictactoe_engine::bot_controller::{BotStrategy, calculate_move};
use tictactoe_engine::log;
use tictactoe_engine::rng::GameRng;
use tictactoe_engine::types::{Mark, Outcome};
use tictactoe_engine::Game;

use crate::display::print_board;

pub fn run_solo(strategy: BotStrategy, human_mark: Mark, rng: &mut GameRng) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    play_solo_session(&mut input, strategy, human_mark, rng)
}

pub fn run_pvp() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    play_pvp_session(&mut input)
}

fn play_solo_session(
    input: &mut impl BufRead,
    strategy: BotStrategy,
    human_mark: Mark,
    rng: &mut GameRng,
) -> io::Result<()> {
    let Some(computer_mark) = human_mark.opponent() else {
        return Ok(());
    };
    println!("You play {}, the computer plays {}.", human_mark, computer_mark);

    let mut game = Game::new();
    loop {
        print_board(game.board());
        while game.status() == Outcome::InProgress {
            let moved = if game.current_mark() == human_mark {
                human_turn(input, &mut game)?
            } else {
                computer_turn(&mut game, strategy, rng)
            };
            if !moved {
                return Ok(());
            }
            print_board(game.board());
        }

        announce_solo_result(game.status(), human_mark);
        if !ask_yes_no(input, "Play again? (y/n): ")? {
            return Ok(());
        }
        game.reset();
        log!("Board reset, new game started");
    }
}

fn play_pvp_session(input: &mut impl BufRead) -> io::Result<()> {
    let mut game = Game::new();
    loop {
        print_board(game.board());
        while game.status() == Outcome::InProgress {
            println!("Player {} to move.", game.current_mark());
            if !human_turn(input, &mut game)? {
                return Ok(());
            }
            print_board(game.board());
        }

        match game.status() {
            Outcome::Win(mark) => println!("Player {} wins!", mark),
            Outcome::Draw => println!("It's a draw!"),
            Outcome::InProgress => {}
        }
        if !ask_yes_no(input, "Play again? (y/n): ")? {
            return Ok(());
        }
        game.reset();
    }
}

pub fn run_demo(
    x_strategy: BotStrategy,
    o_strategy: BotStrategy,
    games: u32,
    rng: &mut GameRng,
) -> (u32, u32, u32) {
    let mut x_wins = 0u32;
    let mut o_wins = 0u32;
    let mut draws = 0u32;

    for round in 1..=games {
        log!(
            "Demo game {} of {}: {} (X) vs {} (O)",
            round,
            games,
            x_strategy,
            o_strategy
        );

        let mut game = Game::new();
        while game.status() == Outcome::InProgress {
            let strategy = if game.current_mark() == Mark::X {
                x_strategy
            } else {
                o_strategy
            };
            if !computer_turn(&mut game, strategy, rng) {
                break;
            }
        }

        print_board(game.board());
        match game.status() {
            Outcome::Win(Mark::X) => {
                x_wins += 1;
                println!("Game {}: X ({}) wins", round, x_strategy);
            }
            Outcome::Win(Mark::O) => {
                o_wins += 1;
                println!("Game {}: O ({}) wins", round, o_strategy);
            }
            Outcome::Draw => {
                draws += 1;
                println!("Game {}: draw", round);
            }
            _ => {}
        }
    }

    println!(
        "Results after {} game(s): X ({}) {} wins, O ({}) {} wins, {} draws",
        games, x_strategy, x_wins, o_strategy, o_wins, draws
    );
    log!(
        "Demo finished: {} X wins, {} O wins, {} draws",
        x_wins,
        o_wins,
        draws
    );

    (x_wins, o_wins, draws)
}

fn human_turn(input: &mut impl BufRead, game: &mut Game) -> io::Result<bool> {
    loop {
        print!("Enter your move (row and column, 0-2 each): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            return Ok(false);
        }

        let Some((row, col)) = parse_move(&line) else {
            println!("Invalid move, try again.");
            continue;
        };

        match game.play(row, col) {
            Ok(_) => return Ok(true),
            Err(error) => println!("{}. Try again.", error),
        }
    }
}

fn computer_turn(game: &mut Game, strategy: BotStrategy, rng: &mut GameRng) -> bool {
    let mark = game.current_mark();
    let Some(position) = calculate_move(strategy, game.board(), mark, rng) else {
        return false;
    };

    log!("Computer ({}) plays ({}, {})", mark, position.row, position.col);
    match game.play(position.row, position.col) {
        Ok(_) => true,
        Err(error) => {
            log!("Computer move rejected: {}", error);
            false
        }
    }
}

fn announce_solo_result(status: Outcome, human_mark: Mark) {
    match status {
        Outcome::Win(mark) if mark == human_mark => println!("You win!"),
        Outcome::Win(_) => println!("Computer wins!"),
        Outcome::Draw => println!("It's a draw!"),
        Outcome::InProgress => {}
    }
}

fn ask_yes_no(input: &mut impl BufRead, prompt: &str) -> io::Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(false);
    }
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

fn parse_move(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    Some((row, col))
}
