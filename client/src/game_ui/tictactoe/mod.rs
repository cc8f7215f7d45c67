use common::games::tictactoe::{GameSnapshot, GameStatus, Mark};
use eframe::egui;

use crate::colors::BoardColors;

const SIDE: usize = 3;

pub struct TicTacToeGameUi {
    last_hover: Option<usize>,
}

impl TicTacToeGameUi {
    const MIN_CELL_SIZE: f32 = 60.0;
    const MAX_CELL_SIZE: f32 = 140.0;
    const LINE_WIDTH: f32 = 2.0;
    const MARK_WIDTH: f32 = 5.0;
    const FOOTER_HEIGHT: f32 = 60.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let cell_size = available_width.min(available_height) / SIDE as f32;
        cell_size.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    pub fn status_text(snapshot: &GameSnapshot) -> String {
        match snapshot.status {
            GameStatus::Won(mark) => format!("Winner: {}", mark.symbol()),
            GameStatus::Draw => "Game Draw".to_string(),
            GameStatus::OTurn if snapshot.bot_enabled => "Computer is thinking...".to_string(),
            GameStatus::XTurn | GameStatus::OTurn => {
                format!("Next Player: {}", snapshot.current_mark.symbol())
            }
        }
    }

    fn accepts_clicks(snapshot: &GameSnapshot) -> bool {
        match snapshot.status {
            GameStatus::XTurn => true,
            GameStatus::OTurn => !snapshot.bot_enabled,
            GameStatus::Won(_) | GameStatus::Draw => false,
        }
    }

    /// Draws the board and returns the index of a clicked empty cell.
    pub fn render_board(
        &mut self,
        ui: &mut egui::Ui,
        snapshot: &GameSnapshot,
        colors: &BoardColors,
    ) -> Option<usize> {
        let cell_size = Self::calculate_cell_size(
            ui.available_width(),
            ui.available_height() - Self::FOOTER_HEIGHT,
        );
        let board_side = cell_size * SIDE as f32;

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(board_side, board_side), egui::Sense::click());

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, colors.background);

        if let Some(line) = snapshot.winning_line {
            for index in line.cells {
                painter.rect_filled(Self::cell_rect(rect, cell_size, index), 0.0, colors.winning_cell);
            }
        }

        for i in 0..=SIDE {
            let offset = i as f32 * cell_size;
            let stroke = egui::Stroke::new(Self::LINE_WIDTH, colors.grid);
            painter.line_segment(
                [
                    egui::pos2(rect.left() + offset, rect.top()),
                    egui::pos2(rect.left() + offset, rect.bottom()),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(rect.left(), rect.top() + offset),
                    egui::pos2(rect.right(), rect.top() + offset),
                ],
                stroke,
            );
        }

        for (index, &mark) in snapshot.board.iter().enumerate() {
            let cell_rect = Self::cell_rect(rect, cell_size, index);
            match mark {
                Mark::X => self.draw_x(painter, cell_rect, colors.x_mark),
                Mark::O => self.draw_o(painter, cell_rect, colors.o_mark),
                Mark::Empty => {}
            }
        }

        self.last_hover = None;
        if !Self::accepts_clicks(snapshot) {
            return None;
        }

        if let Some(hover_pos) = response.hover_pos()
            && let Some(index) = Self::cell_at(rect, cell_size, hover_pos)
            && snapshot.board[index] == Mark::Empty
        {
            painter.rect_filled(Self::cell_rect(rect, cell_size, index), 0.0, colors.hover);
            self.last_hover = Some(index);
        }

        if response.clicked() {
            return self.last_hover;
        }
        None
    }

    fn cell_rect(board_rect: egui::Rect, cell_size: f32, index: usize) -> egui::Rect {
        let x = (index % SIDE) as f32;
        let y = (index / SIDE) as f32;
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + x * cell_size,
                board_rect.top() + y * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn cell_at(board_rect: egui::Rect, cell_size: f32, pos: egui::Pos2) -> Option<usize> {
        if !board_rect.contains(pos) {
            return None;
        }
        let x = ((pos.x - board_rect.left()) / cell_size) as usize;
        let y = ((pos.y - board_rect.top()) / cell_size) as usize;
        Some(y.min(SIDE - 1) * SIDE + x.min(SIDE - 1))
    }

    fn draw_x(&self, painter: &egui::Painter, rect: egui::Rect, color: egui::Color32) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(Self::MARK_WIDTH, color);

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );

        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(&self, painter: &egui::Painter, rect: egui::Rect, color: egui::Color32) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        let stroke = egui::Stroke::new(Self::MARK_WIDTH, color);

        painter.circle_stroke(rect.center(), radius, stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{EMPTY_BOARD, GameOutcome, WinningLine};

    fn snapshot(status: GameStatus, bot_enabled: bool) -> GameSnapshot {
        let current_mark = if status == GameStatus::OTurn { Mark::O } else { Mark::X };
        GameSnapshot {
            board: EMPTY_BOARD,
            status,
            outcome: GameOutcome::InProgress,
            current_mark,
            winning_line: None,
            last_move: None,
            generation: 0,
            bot_enabled,
            bot_pending: false,
        }
    }

    #[test]
    fn test_status_text() {
        assert_eq!(
            TicTacToeGameUi::status_text(&snapshot(GameStatus::XTurn, false)),
            "Next Player: X"
        );
        assert_eq!(
            TicTacToeGameUi::status_text(&snapshot(GameStatus::OTurn, false)),
            "Next Player: O"
        );
        assert_eq!(
            TicTacToeGameUi::status_text(&snapshot(GameStatus::OTurn, true)),
            "Computer is thinking..."
        );
        assert_eq!(
            TicTacToeGameUi::status_text(&snapshot(GameStatus::Won(Mark::O), true)),
            "Winner: O"
        );
        assert_eq!(
            TicTacToeGameUi::status_text(&snapshot(GameStatus::Draw, false)),
            "Game Draw"
        );
    }

    #[test]
    fn test_clicks_blocked_on_bot_turn_and_after_game_end() {
        assert!(TicTacToeGameUi::accepts_clicks(&snapshot(GameStatus::XTurn, true)));
        assert!(TicTacToeGameUi::accepts_clicks(&snapshot(GameStatus::OTurn, false)));
        assert!(!TicTacToeGameUi::accepts_clicks(&snapshot(GameStatus::OTurn, true)));
        assert!(!TicTacToeGameUi::accepts_clicks(&snapshot(GameStatus::Draw, false)));

        let mut won = snapshot(GameStatus::Won(Mark::X), false);
        won.winning_line = Some(WinningLine::new(Mark::X, [0, 1, 2]));
        assert!(!TicTacToeGameUi::accepts_clicks(&won));
    }

    #[test]
    fn test_cell_geometry() {
        let board_rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(300.0, 300.0));

        assert_eq!(TicTacToeGameUi::cell_at(board_rect, 100.0, egui::pos2(15.0, 25.0)), Some(0));
        assert_eq!(TicTacToeGameUi::cell_at(board_rect, 100.0, egui::pos2(160.0, 170.0)), Some(4));
        assert_eq!(TicTacToeGameUi::cell_at(board_rect, 100.0, egui::pos2(309.0, 319.0)), Some(8));
        assert_eq!(TicTacToeGameUi::cell_at(board_rect, 100.0, egui::pos2(5.0, 25.0)), None);

        let rect = TicTacToeGameUi::cell_rect(board_rect, 100.0, 5);
        assert_eq!(rect.min, egui::pos2(210.0, 120.0));
    }
}
