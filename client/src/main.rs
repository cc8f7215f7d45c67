mod colors;
mod config;
mod game_ui;
mod settings;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::TicTacToeSession;
use common::{log, logger};
use eframe::egui;

use config::{Config, get_config_manager};
use settings::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start in single-player mode regardless of the saved setting
    #[arg(long)]
    ai: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config);
    let mut config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    };
    if args.ai {
        config.game.ai_enabled = true;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let session = TicTacToeSession::new(
        config.game.to_session_settings(),
        SessionRng::from_random(),
        runtime.handle().clone(),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(session, config_manager, config)))),
    )?;

    log!("Client shut down");
    Ok(())
}
