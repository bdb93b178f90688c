use serde::{Deserialize, Serialize};
use tictactoe_engine::BotStrategy;
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(path: Option<&str>) -> ConfigManager<FileContentConfigProvider, Config> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum PlayAs {
    X,
    O,
    Random,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub strategy: BotStrategy,
    pub play_as: PlayAs,
    pub demo_games: u32,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub use_log_prefix: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.demo_games == 0 || self.demo_games > 100 {
            return Err(format!(
                "demo_games must be between 1 and 100, got {}",
                self.demo_games
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: BotStrategy::Minimax,
            play_as: PlayAs::X,
            demo_games: 1,
            seed: None,
            use_log_prefix: false,
        }
    }
}
