use std::time::Duration;

pub const DEFAULT_BOT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub bot_enabled: bool,
    pub bot_delay: Duration,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            bot_enabled: false,
            bot_delay: DEFAULT_BOT_DELAY,
        }
    }
}
