mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{count_marks, get_available_moves, is_board_full, is_valid_move};
pub use bot_controller::{BOT_MARK, BotError, HUMAN_MARK, calculate_move};
pub use game_state::TicTacToeGameState;
pub use session::{GameSnapshot, TicTacToeSession, TicTacToeSessionState};
pub use settings::{DEFAULT_BOT_DELAY, TicTacToeSessionSettings};
pub use types::{
    BOARD_SIZE, Board, CENTER, CORNERS, EMPTY_BOARD, GameOutcome, GameStatus, LINES, Line, Mark,
    WinningLine,
};
pub use win_detector::{check_win, check_win_with_line, get_outcome, is_draw};
