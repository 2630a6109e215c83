use super::board::Board;
use super::types::{Line, MatchResult, Marker, Position};

/// Rows, then columns, then the two diagonals.
pub const LINES: [Line; 8] = [
    [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
    [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
    [Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
    [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
    [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)],
];

/// Lines holding exactly `count` cells of `marker`.
pub fn lines_with_count(board: &Board, marker: Marker, count: usize) -> Vec<Line> {
    LINES
        .iter()
        .filter(|line| {
            board
                .line_marks(line)
                .iter()
                .filter(|&&mark| mark == marker.mark())
                .count()
                == count
        })
        .copied()
        .collect()
}

pub fn is_winning(board: &Board, marker: Marker) -> bool {
    !lines_with_count(board, marker, 3).is_empty()
}

pub fn check_win(board: &Board) -> Option<Marker> {
    [Marker::X, Marker::O]
        .into_iter()
        .find(|&marker| is_winning(board, marker))
}

pub fn check_result(board: &Board) -> MatchResult {
    if let Some(winner) = check_win(board) {
        return MatchResult::Win(winner);
    }

    if board.is_full() {
        MatchResult::Draw
    } else {
        MatchResult::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_is_not_winning() {
        let empty = Board::new();
        assert!(!is_winning(&empty, Marker::X));
        assert!(!is_winning(&empty, Marker::O));
        assert_eq!(check_result(&empty), MatchResult::InProgress);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let mut b = Board::new();
            for pos in line {
                b.place(pos, Marker::O).unwrap();
            }
            assert!(is_winning(&b, Marker::O), "line {:?} should win", line);
            assert!(!is_winning(&b, Marker::X));
            assert_eq!(check_result(&b), MatchResult::Win(Marker::O));
        }
    }

    #[test]
    fn test_top_row_win() {
        let b = board("XXX OO. ...");
        assert_eq!(check_result(&b), MatchResult::Win(Marker::X));
        assert_eq!(lines_with_count(&b, Marker::X, 3), vec![LINES[0]]);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let b = board("XOX XOO OXX");
        assert!(!is_winning(&b, Marker::X));
        assert!(!is_winning(&b, Marker::O));
        assert_eq!(check_result(&b), MatchResult::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        let b = board("XXX OOX XOO");
        assert_eq!(check_result(&b), MatchResult::Win(Marker::X));
    }

    #[test]
    fn test_lines_with_count_two() {
        let b = board("XX. OO. ...");
        let x_lines = lines_with_count(&b, Marker::X, 2);
        assert_eq!(x_lines, vec![LINES[0]]);
        let o_lines = lines_with_count(&b, Marker::O, 2);
        assert_eq!(o_lines, vec![LINES[1]]);
    }

    #[test]
    fn test_lines_with_count_zero_on_empty_board() {
        assert_eq!(lines_with_count(&Board::new(), Marker::X, 0).len(), 8);
    }

    #[test]
    fn test_anti_diagonal_win() {
        let b = board("XXO XO. O..");
        assert!(is_winning(&b, Marker::O));
        assert_eq!(lines_with_count(&b, Marker::O, 3), vec![LINES[7]]);
        assert_eq!(check_win(&b), Some(Marker::O));
    }
}
