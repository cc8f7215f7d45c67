use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::{DisplayConfig, TicTacToeGameConfig};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

pub type ConfigManagerType = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

fn get_default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(path_override: Option<PathBuf>) -> ConfigManagerType {
    ConfigManager::from_yaml_file(path_override.unwrap_or_else(get_default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub game: TicTacToeGameConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.display.validate()?;
        Ok(())
    }
}
