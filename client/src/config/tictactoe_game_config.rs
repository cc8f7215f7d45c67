use std::time::Duration;

use common::config::Validate;
use common::games::tictactoe::{DEFAULT_BOT_DELAY, TicTacToeSessionSettings};
use serde::{Deserialize, Serialize};

pub const MAX_BOT_DELAY_MS: u64 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeGameConfig {
    pub ai_enabled: bool,
    pub bot_delay_ms: u64,
}

impl TicTacToeGameConfig {
    pub fn to_session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            bot_enabled: self.ai_enabled,
            bot_delay: Duration::from_millis(self.bot_delay_ms),
        }
    }
}

impl Validate for TicTacToeGameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must be at most {}, got {}",
                MAX_BOT_DELAY_MS, self.bot_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeGameConfig {
    fn default() -> Self {
        Self {
            ai_enabled: false,
            bot_delay_ms: DEFAULT_BOT_DELAY.as_millis() as u64,
        }
    }
}
