use std::fmt;

use crate::games::SessionRng;
use super::board::{get_available_moves, line_marks};
use super::types::{Board, CENTER, CORNERS, LINES, Mark};

pub const BOT_MARK: Mark = Mark::O;
pub const HUMAN_MARK: Mark = Mark::X;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotError {
    InvalidState,
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::InvalidState => write!(f, "Bot asked to move on a full board"),
        }
    }
}

impl std::error::Error for BotError {}

/// Picks the bot's move: win, block, center, random corner, random cell.
///
/// Forks are not looked for, so the bot can be beaten.
pub fn calculate_move(board: &Board, rng: &mut SessionRng) -> Result<usize, BotError> {
    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return Err(BotError::InvalidState);
    }

    if let Some(index) = find_completing_move(board, BOT_MARK) {
        return Ok(index);
    }

    if let Some(index) = find_completing_move(board, HUMAN_MARK) {
        return Ok(index);
    }

    if board[CENTER] == Mark::Empty {
        return Ok(CENTER);
    }

    let free_corners: Vec<usize> = CORNERS
        .iter()
        .copied()
        .filter(|&index| board[index] == Mark::Empty)
        .collect();
    if let Some(index) = rng.choose(&free_corners) {
        return Ok(index);
    }

    rng.choose(&available_moves).ok_or(BotError::InvalidState)
}

/// Empty cell of the first line holding exactly two `mark` and one empty cell.
fn find_completing_move(board: &Board, mark: Mark) -> Option<usize> {
    for line in LINES {
        let marks = line_marks(board, &line);
        let owned = marks.iter().filter(|&&cell| cell == mark).count();
        if owned != 2 {
            continue;
        }
        if let Some(pos) = marks.iter().position(|&cell| cell == Mark::Empty) {
            return Some(line[pos]);
        }
    }
    None
}
