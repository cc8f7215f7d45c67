use super::board::is_valid_move;
use super::types::{BOARD_SIZE, Board, EMPTY_BOARD, GameOutcome, GameStatus, Mark, WinningLine};
use super::win_detector::{check_win_with_line, get_outcome};

/// Board and turn of the running game. Outcome and status are derived from
/// the board on every read.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    generation: u64,
    last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: EMPTY_BOARD,
            current_mark: Mark::X,
            generation: 0,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    /// Bumped by every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn outcome(&self) -> GameOutcome {
        get_outcome(&self.board)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn status(&self) -> GameStatus {
        match self.outcome() {
            GameOutcome::Win(mark) => GameStatus::Won(mark),
            GameOutcome::Draw => GameStatus::Draw,
            GameOutcome::InProgress => match self.current_mark {
                Mark::O => GameStatus::OTurn,
                _ => GameStatus::XTurn,
            },
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status().is_terminal() {
            return Err("Game is already over".to_string());
        }

        if index >= BOARD_SIZE {
            return Err(format!("Cell {} is out of bounds", index));
        }

        if !is_valid_move(&self.board, index) {
            return Err(format!("Cell {} is already marked", index));
        }

        self.board[index] = self.current_mark;
        self.last_move = Some(index);

        if !self.status().is_terminal() {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn reset(&mut self) {
        self.board = EMPTY_BOARD;
        self.current_mark = Mark::X;
        self.last_move = None;
        self.generation += 1;
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }
}
