use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::games::SessionRng;
use crate::log;
use super::bot_controller::{BOT_MARK, calculate_move};
use super::game_state::TicTacToeGameState;
use super::settings::TicTacToeSessionSettings;
use super::types::{Board, GameOutcome, GameStatus, Mark, WinningLine};

/// Read-only view handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub status: GameStatus,
    pub outcome: GameOutcome,
    pub current_mark: Mark,
    pub winning_line: Option<WinningLine>,
    pub last_move: Option<usize>,
    pub generation: u64,
    pub bot_enabled: bool,
    pub bot_pending: bool,
}

struct PendingBotMove {
    ticket: u64,
    handle: JoinHandle<()>,
}

pub struct TicTacToeSessionState {
    game_state: TicTacToeGameState,
    rng: SessionRng,
    settings: TicTacToeSessionSettings,
    pending_bot: Option<PendingBotMove>,
    next_ticket: u64,
}

impl TicTacToeSessionState {
    pub fn new(settings: TicTacToeSessionSettings, rng: SessionRng) -> Self {
        Self {
            game_state: TicTacToeGameState::new(),
            rng,
            settings,
            pending_bot: None,
            next_ticket: 0,
        }
    }

    fn is_bot_turn(&self) -> bool {
        self.settings.bot_enabled && self.game_state.status() == GameStatus::OTurn
    }

    fn cancel_pending_bot(&mut self) {
        if let Some(pending) = self.pending_bot.take() {
            pending.handle.abort();
        }
    }

    fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: *self.game_state.board(),
            status: self.game_state.status(),
            outcome: self.game_state.outcome(),
            current_mark: self.game_state.current_mark(),
            winning_line: self.game_state.winning_line(),
            last_move: self.game_state.last_move(),
            generation: self.game_state.generation(),
            bot_enabled: self.settings.bot_enabled,
            bot_pending: self.pending_bot.is_some(),
        }
    }
}

/// Owns the running game and is the only place the board is mutated.
///
/// Bot moves run as delayed tasks on `runtime`. Each task carries the board
/// generation and a ticket captured when it was scheduled and only applies its
/// move if both still match when it fires.
#[derive(Clone)]
pub struct TicTacToeSession {
    state: Arc<Mutex<TicTacToeSessionState>>,
    runtime: Handle,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings, rng: SessionRng, runtime: Handle) -> Self {
        log!(
            "Session created: bot {}, delay {} ms, seed {}",
            if settings.bot_enabled { "on" } else { "off" },
            settings.bot_delay.as_millis(),
            rng.seed()
        );
        Self {
            state: Arc::new(Mutex::new(TicTacToeSessionState::new(settings, rng))),
            runtime,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.lock().unwrap().snapshot()
    }

    pub fn handle_cell_click(&self, index: usize) {
        let mut state = self.state.lock().unwrap();

        if state.settings.bot_enabled && state.game_state.current_mark() == BOT_MARK {
            log!("Ignoring click on cell {}: waiting for bot", index);
            return;
        }

        let mark = state.game_state.current_mark();
        if let Err(e) = state.game_state.place_mark(index) {
            log!("Ignoring click on cell {}: {}", index, e);
            return;
        }
        log!("{} placed on cell {}", mark.symbol(), index);

        self.schedule_bot_move(&mut state);
    }

    pub fn restart(&self) {
        let mut state = self.state.lock().unwrap();
        state.cancel_pending_bot();
        state.game_state.reset();
        log!("Game restarted (generation {})", state.game_state.generation());
    }

    pub fn set_bot_enabled(&self, enabled: bool) {
        let mut state = self.state.lock().unwrap();
        if state.settings.bot_enabled == enabled {
            return;
        }
        state.settings.bot_enabled = enabled;
        log!("Bot {}", if enabled { "enabled" } else { "disabled" });

        if enabled {
            self.schedule_bot_move(&mut state);
        } else {
            state.cancel_pending_bot();
        }
    }

    pub fn set_bot_delay(&self, delay: Duration) {
        self.state.lock().unwrap().settings.bot_delay = delay;
    }

    fn schedule_bot_move(&self, state: &mut TicTacToeSessionState) {
        if !state.is_bot_turn() || state.pending_bot.is_some() {
            return;
        }

        let ticket = state.next_ticket;
        state.next_ticket += 1;
        let generation = state.game_state.generation();
        let delay = state.settings.bot_delay;

        let session = self.clone();
        let handle = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            session.play_bot_turn(ticket, generation);
        });

        state.pending_bot = Some(PendingBotMove { ticket, handle });
    }

    fn play_bot_turn(&self, ticket: u64, generation: u64) {
        let mut guard = self.state.lock().unwrap();
        let state = &mut *guard;

        match &state.pending_bot {
            Some(pending) if pending.ticket == ticket => {}
            _ => {
                log!("Discarding stale bot move (ticket {})", ticket);
                return;
            }
        }
        state.pending_bot = None;

        if state.game_state.generation() != generation || !state.is_bot_turn() {
            log!("Discarding bot move for generation {}", generation);
            return;
        }

        match calculate_move(state.game_state.board(), &mut state.rng) {
            Ok(index) => match state.game_state.place_mark(index) {
                Ok(()) => log!("Bot placed {} on cell {}", BOT_MARK.symbol(), index),
                Err(e) => log!("Bot failed to place mark on cell {}: {}", index, e),
            },
            Err(e) => log!("Bot could not move: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::count_marks;
    use crate::games::tictactoe::types::EMPTY_BOARD;

    const DELAY: Duration = Duration::from_millis(500);

    fn create_session(bot_enabled: bool) -> TicTacToeSession {
        let settings = TicTacToeSessionSettings {
            bot_enabled,
            bot_delay: DELAY,
        };
        TicTacToeSession::new(settings, SessionRng::new(12345), Handle::current())
    }

    async fn wait_for_bot() {
        tokio::time::sleep(DELAY + Duration::from_millis(100)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_two_player_mode_alternates_marks() {
        let session = create_session(false);

        session.handle_cell_click(0);
        session.handle_cell_click(4);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.board[0], Mark::X);
        assert_eq!(snapshot.board[4], Mark::O);
        assert_eq!(snapshot.status, GameStatus::XTurn);
        assert!(!snapshot.bot_pending);
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_on_occupied_cell_is_ignored() {
        let session = create_session(false);

        session.handle_cell_click(0);
        session.handle_cell_click(0);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.board[0], Mark::X);
        assert_eq!(snapshot.status, GameStatus::OTurn);
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_after_win_is_ignored() {
        let session = create_session(false);
        for index in [0, 3, 1, 4, 2] {
            session.handle_cell_click(index);
        }

        session.handle_cell_click(8);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.status, GameStatus::Won(Mark::X));
        assert_eq!(snapshot.board[8], Mark::Empty);
        assert_eq!(snapshot.winning_line.map(|line| line.cells), Some([0, 1, 2]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_bot_answers_after_delay() {
        let session = create_session(true);

        session.handle_cell_click(0);

        let snapshot = session.snapshot();
        assert!(snapshot.bot_pending);
        assert_eq!(count_marks(&snapshot.board, Mark::O), 0);

        wait_for_bot().await;

        let snapshot = session.snapshot();
        assert!(!snapshot.bot_pending);
        assert_eq!(snapshot.board[4], Mark::O);
        assert_eq!(snapshot.status, GameStatus::XTurn);
    }

    #[tokio::test(start_paused = true)]
    async fn test_human_click_during_bot_turn_is_ignored() {
        let session = create_session(true);

        session.handle_cell_click(0);
        session.handle_cell_click(1);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.board[1], Mark::Empty);
        assert_eq!(count_marks(&snapshot.board, Mark::X), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bot_blocks_top_row() {
        let session = create_session(true);

        session.handle_cell_click(0);
        wait_for_bot().await;
        session.handle_cell_click(1);
        wait_for_bot().await;

        let snapshot = session.snapshot();
        assert_eq!(snapshot.board[4], Mark::O);
        assert_eq!(snapshot.board[2], Mark::O);
        assert_eq!(snapshot.status, GameStatus::XTurn);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_resets_board_and_turn() {
        let session = create_session(false);
        for index in [0, 3, 1, 4, 2] {
            session.handle_cell_click(index);
        }

        session.restart();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.board, EMPTY_BOARD);
        assert_eq!(snapshot.status, GameStatus::XTurn);
        assert_eq!(snapshot.generation, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_during_bot_delay_discards_pending_move() {
        let session = create_session(true);

        session.handle_cell_click(0);
        tokio::time::sleep(DELAY / 2).await;
        session.restart();
        wait_for_bot().await;

        let snapshot = session.snapshot();
        assert_eq!(snapshot.board, EMPTY_BOARD);
        assert_eq!(snapshot.status, GameStatus::XTurn);
        assert!(!snapshot.bot_pending);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_game_after_restart_gets_single_bot_move() {
        let session = create_session(true);

        session.handle_cell_click(0);
        session.restart();
        session.handle_cell_click(8);
        wait_for_bot().await;
        wait_for_bot().await;

        let snapshot = session.snapshot();
        assert_eq!(snapshot.board[8], Mark::X);
        assert_eq!(snapshot.board[0], Mark::Empty);
        assert_eq!(count_marks(&snapshot.board, Mark::O), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_enabling_bot_on_its_turn_schedules_once() {
        let session = create_session(false);
        session.handle_cell_click(0);

        session.set_bot_enabled(true);
        session.set_bot_enabled(true);
        wait_for_bot().await;
        wait_for_bot().await;

        let snapshot = session.snapshot();
        assert_eq!(count_marks(&snapshot.board, Mark::O), 1);
        assert_eq!(snapshot.status, GameStatus::XTurn);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggling_bot_does_not_double_move() {
        let session = create_session(true);
        session.handle_cell_click(0);

        session.set_bot_enabled(false);
        session.set_bot_enabled(true);
        wait_for_bot().await;
        wait_for_bot().await;

        let snapshot = session.snapshot();
        assert_eq!(count_marks(&snapshot.board, Mark::O), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabling_bot_cancels_pending_move() {
        let session = create_session(true);
        session.handle_cell_click(0);

        session.set_bot_enabled(false);
        wait_for_bot().await;

        let snapshot = session.snapshot();
        assert_eq!(count_marks(&snapshot.board, Mark::O), 0);
        assert_eq!(snapshot.status, GameStatus::OTurn);
        assert!(!snapshot.bot_pending);

        session.handle_cell_click(4);
        assert_eq!(session.snapshot().board[4], Mark::O);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bot_not_scheduled_after_human_wins() {
        let session = create_session(false);
        for index in [0, 3, 1, 4] {
            session.handle_cell_click(index);
        }
        session.set_bot_enabled(true);

        session.handle_cell_click(2);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.status, GameStatus::Won(Mark::X));
        assert!(!snapshot.bot_pending);
    }
}
