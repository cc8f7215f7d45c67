use super::board::is_board_full;
use super::types::{Board, GameOutcome, LINES, Mark, WinningLine};

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// First completed line in `LINES` order, if any.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in LINES {
        let [a, b, c] = line;
        let mark = board[a];
        if mark == Mark::Empty {
            continue;
        }
        if board[b] == mark && board[c] == mark {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

pub fn is_draw(board: &Board) -> bool {
    check_win(board).is_none() && is_board_full(board)
}

pub fn get_outcome(board: &Board) -> GameOutcome {
    if let Some(mark) = check_win(board) {
        return GameOutcome::Win(mark);
    }
    if is_board_full(board) {
        return GameOutcome::Draw;
    }
    GameOutcome::InProgress
}
