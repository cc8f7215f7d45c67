use common::games::tictactoe::{GameSnapshot, GameStatus, Mark, TicTacToeSession};
use common::log;
use eframe::egui;
use std::time::Duration;

use crate::colors::{board_colors, visuals};
use crate::config::{Config, ConfigManagerType, MAX_BOT_DELAY_MS};
use crate::game_ui::TicTacToeGameUi;
use crate::settings::BOT_REPAINT_INTERVAL;

pub struct TicTacToeApp {
    session: TicTacToeSession,
    config_manager: ConfigManagerType,
    config: Config,
    game_ui: TicTacToeGameUi,
    show_settings: bool,
    marks_on_board: usize,
    applied_dark_mode: Option<bool>,
}

impl TicTacToeApp {
    pub fn new(session: TicTacToeSession, config_manager: ConfigManagerType, config: Config) -> Self {
        Self {
            session,
            config_manager,
            config,
            game_ui: TicTacToeGameUi::new(),
            show_settings: false,
            marks_on_board: 0,
            applied_dark_mode: None,
        }
    }

    fn save_config(&self) {
        if let Err(e) = self.config_manager.set_config(&self.config) {
            log!("Failed to save config: {}", e);
        }
    }

    // No audio backend; the click is only logged.
    fn play_click_sound(&self) {
        if self.config.display.sound_enabled {
            log!("Click");
        }
    }

    fn track_placed_marks(&mut self, snapshot: &GameSnapshot) {
        let placed = snapshot
            .board
            .iter()
            .filter(|&&cell| cell != Mark::Empty)
            .count();
        if placed > self.marks_on_board {
            self.play_click_sound();
        }
        self.marks_on_board = placed;
    }

    fn render_settings_panel(&mut self, ui: &mut egui::Ui) {
        let mut changed = false;

        ui.group(|ui| {
            ui.heading("Settings");

            if ui
                .checkbox(&mut self.config.game.ai_enabled, "Play with Computer")
                .changed()
            {
                self.session.set_bot_enabled(self.config.game.ai_enabled);
                changed = true;
            }

            let sound_label = if self.config.display.sound_enabled {
                "Sound ON"
            } else {
                "Sound OFF"
            };
            changed |= ui
                .checkbox(&mut self.config.display.sound_enabled, sound_label)
                .changed();

            let theme_label = if self.config.display.dark_mode {
                "Dark Mode"
            } else {
                "Light Mode"
            };
            changed |= ui
                .checkbox(&mut self.config.display.dark_mode, theme_label)
                .changed();

            let delay = ui.add(
                egui::Slider::new(&mut self.config.game.bot_delay_ms, 0..=MAX_BOT_DELAY_MS)
                    .text("Computer delay (ms)"),
            );
            if delay.changed() {
                self.session
                    .set_bot_delay(Duration::from_millis(self.config.game.bot_delay_ms));
            }
            if delay.drag_stopped() || (delay.changed() && !delay.dragged()) {
                changed = true;
            }
        });

        if changed {
            self.save_config();
        }
    }

    fn render_status(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        let text = TicTacToeGameUi::status_text(snapshot);
        match snapshot.status {
            GameStatus::Won(_) => {
                ui.colored_label(egui::Color32::from_rgb(40, 170, 80), egui::RichText::new(text).heading());
            }
            GameStatus::Draw => {
                ui.colored_label(egui::Color32::from_rgb(200, 140, 30), egui::RichText::new(text).heading());
            }
            GameStatus::XTurn | GameStatus::OTurn => {
                ui.heading(text);
            }
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dark_mode = self.config.display.dark_mode;
        if self.applied_dark_mode != Some(dark_mode) {
            ctx.set_visuals(visuals(dark_mode));
            self.applied_dark_mode = Some(dark_mode);
        }

        let snapshot = self.session.snapshot();
        self.track_placed_marks(&snapshot);
        let colors = board_colors(dark_mode);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Tic Tac Toe");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⚙").clicked() {
                        self.show_settings = !self.show_settings;
                    }
                });
            });

            if self.show_settings {
                self.render_settings_panel(ui);
            }

            ui.separator();

            ui.vertical_centered(|ui| {
                self.render_status(ui, &snapshot);
                ui.add_space(8.0);

                if let Some(index) = self.game_ui.render_board(ui, &snapshot, &colors) {
                    self.session.handle_cell_click(index);
                    ctx.request_repaint();
                }

                ui.add_space(12.0);
                if ui.button("Restart Game").clicked() {
                    self.session.restart();
                }
            });
        });

        if snapshot.bot_pending {
            ctx.request_repaint_after(BOT_REPAINT_INTERVAL);
        }
    }
}
