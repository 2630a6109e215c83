use common::games::tictactoe::Board;

const BORDER: &str = "---------";

/// Text grid framed by dashed borders, one `| a b c |` line per row.
pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity(64);
    out.push_str(BORDER);
    out.push('\n');
    for row in board.rows() {
        let cells: Vec<String> = row.iter().map(|mark| mark.symbol().to_string()).collect();
        out.push_str(&format!("| {} |\n", cells.join(" ")));
    }
    out.push_str(BORDER);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board() {
        assert_eq!(
            render_board(&Board::new()),
            "---------\n|       |\n|       |\n|       |\n---------\n"
        );
    }

    #[test]
    fn test_render_mixed_board() {
        let board: Board = "XOX .O. ..X".parse().unwrap();
        assert_eq!(
            render_board(&board),
            "---------\n| X O X |\n|   O   |\n|     X |\n---------\n"
        );
    }
}
