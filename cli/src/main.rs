mod app_config;
mod display;
mod game_loop;

use clap::{Parser, ValueEnum};

use app_config::PlayAs;
use tictactoe_engine::bot_controller::BotStrategy;
use tictactoe_engine::rng::GameRng;
use tictactoe_engine::types::Mark;
use tictactoe_engine::{log, logger};

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    #[arg(long, value_enum, default_value_t = Mode::Solo)]
    mode: Mode,

    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    #[arg(long, value_enum)]
    opponent_strategy: Option<StrategyArg>,

    #[arg(long, value_enum)]
    play_as: Option<PlayAsArg>,

    #[arg(long)]
    games: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Solo,
    Pvp,
    Demo,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Minimax,
    LineScan,
    MagicSquare,
    Random,
}

impl StrategyArg {
    fn to_strategy(self) -> BotStrategy {
        match self {
            StrategyArg::Minimax => BotStrategy::Minimax,
            StrategyArg::LineScan => BotStrategy::LineScan,
            StrategyArg::MagicSquare => BotStrategy::MagicSquare,
            StrategyArg::Random => BotStrategy::Random,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlayAsArg {
    X,
    O,
    Random,
}

impl PlayAsArg {
    fn to_play_as(self) -> PlayAs {
        match self {
            PlayAsArg::X => PlayAs::X,
            PlayAsArg::O => PlayAs::O,
            PlayAsArg::Random => PlayAs::Random,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let manager = app_config::get_config_manager(args.config.as_deref());
    let config = manager.get_config()?;

    let prefix = if args.use_log_prefix || config.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    if let Some(path) = args.config.as_deref() {
        log!("Config file: {}", path);
    }

    let strategy = args
        .strategy
        .map(StrategyArg::to_strategy)
        .unwrap_or(config.strategy);
    let opponent_strategy = args
        .opponent_strategy
        .map(StrategyArg::to_strategy)
        .unwrap_or(BotStrategy::Minimax);
    let play_as = args
        .play_as
        .map(PlayAsArg::to_play_as)
        .unwrap_or(config.play_as);
    let games = args.games.unwrap_or(config.demo_games);

    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    match args.mode {
        Mode::Solo => {
            let human_mark = resolve_human_mark(play_as, &mut rng);
            log!(
                "Solo game: human plays {}, computer strategy {}",
                human_mark,
                strategy
            );
            game_loop::run_solo(strategy, human_mark, &mut rng)?;
        }
        Mode::Pvp => {
            log!("Player vs player game");
            game_loop::run_pvp()?;
        }
        Mode::Demo => {
            log!(
                "Demo: {} (X) vs {} (O), {} game(s)",
                strategy,
                opponent_strategy,
                games
            );
            game_loop::run_demo(strategy, opponent_strategy, games, &mut rng);
        }
    }

    Ok(())
}

fn resolve_human_mark(play_as: PlayAs, rng: &mut GameRng) -> Mark {
    match play_as {
        PlayAs::X => Mark::X,
        PlayAs::O => Mark::O,
        PlayAs::Random => {
            if rng.random_bool() {
                Mark::X
            } else {
                Mark::O
            }
        }
    }
}
