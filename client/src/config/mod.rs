mod config;
mod display_config;
mod tictactoe_game_config;

pub use config::{Config, ConfigManagerType, get_config_manager};
pub use display_config::DisplayConfig;
pub use tictactoe_game_config::{MAX_BOT_DELAY_MS, TicTacToeGameConfig};
