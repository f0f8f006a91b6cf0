use crate::{Board, Coord, BOARD_SIZE};

/// Renders the board as a text grid with row and column indices.
///
/// Empty cells are drawn as `■`, matching the console driver's display.
pub fn render_board(board: &Board) -> String {
    let mut result = String::from("   ");
    for col in 0..BOARD_SIZE {
        result += &format!("  {}", col);
    }
    result.push('\n');
    for row in 0..BOARD_SIZE {
        result += &format!("  {} ", row);
        for col in 0..BOARD_SIZE {
            match board.get(Coord::new(row as u8, col as u8)) {
                Some(marble) => result += &format!(" {} ", marble.letter()),
                None => result += " ■ ",
            }
        }
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_initial_layout() {
        let rendered = render_board(&Board::initial());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 1 + BOARD_SIZE);
        assert_eq!(lines[0].trim(), "0  1  2  3  4  5  6");
        assert_eq!(lines[1].trim(), "0  W  W  ■  ■  ■  B  B");
        assert_eq!(lines[4].trim(), "3  ■  R  R  R  R  R  ■");
        assert_eq!(lines[7].trim(), "6  B  B  ■  ■  ■  W  W");
    }
}
