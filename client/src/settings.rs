pub const WINDOW_WIDTH: f32 = 480.0;
pub const WINDOW_HEIGHT: f32 = 640.0;
pub const WINDOW_TITLE: &str = "Tic Tac Toe";
pub const BOT_REPAINT_INTERVAL: std::time::Duration = std::time::Duration::from_millis(50);
