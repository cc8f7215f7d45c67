use super::types::{BOARD_SIZE, Board, Line, Mark};

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    if index >= BOARD_SIZE {
        return false;
    }
    board[index] == Mark::Empty
}

pub fn is_board_full(board: &Board) -> bool {
    board.iter().all(|&cell| cell != Mark::Empty)
}

pub fn count_marks(board: &Board, mark: Mark) -> usize {
    board.iter().filter(|&&cell| cell == mark).count()
}

pub fn line_marks(board: &Board, line: &Line) -> [Mark; 3] {
    line.map(|index| board[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::EMPTY_BOARD;

    #[test]
    fn test_empty_board_has_nine_moves() {
        assert_eq!(get_available_moves(&EMPTY_BOARD), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_available_moves_skip_marked_cells() {
        let mut board = EMPTY_BOARD;
        board[0] = Mark::X;
        board[4] = Mark::O;

        assert_eq!(get_available_moves(&board), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_is_valid_move() {
        let mut board = EMPTY_BOARD;
        board[3] = Mark::X;

        assert!(is_valid_move(&board, 0));
        assert!(!is_valid_move(&board, 3));
        assert!(!is_valid_move(&board, 9));
    }

    #[test]
    fn test_is_board_full() {
        let mut board = [Mark::X; BOARD_SIZE];
        assert!(is_board_full(&board));

        board[8] = Mark::Empty;
        assert!(!is_board_full(&board));
    }
}
