//! Area scoring: stones on the board plus empty regions enclosed by a
//! single color.

use crate::board::Board;
use crate::chains::chain_and_reached;
use crate::stone::Stone;

/// Scratch marker for empty regions bordered by both colors. Never appears
/// on a live board.
const DAME: i8 = 2;

/// Fill every empty region with the sign of its enclosing color, or with
/// `DAME` when the region touches both colors or no stone at all. Works on
/// a clone; the input board is left untouched.
fn fill_regions(board: &Board) -> Board {
    let mut scratch = board.clone();
    let area = scratch.grid().area();

    for start in 0..area {
        if !scratch.is_vacant(start) {
            continue;
        }
        let (region, reached) = chain_and_reached(&scratch, start);
        let owner = match reached.first().map(|&p| scratch.sign(p)) {
            Some(first) if reached.iter().all(|&p| scratch.sign(p) == first) => first,
            _ => DAME,
        };
        scratch.set_many(&region, owner);
    }

    scratch
}

/// Area score of a position: Black points minus White points. Regions
/// touching both colors count for neither side.
pub fn area_score(board: &Board) -> i32 {
    let filled = fill_regions(board);
    let black = filled
        .points()
        .iter()
        .filter(|&&s| s == Stone::Black.to_int())
        .count();
    let white = filled
        .points()
        .iter()
        .filter(|&&s| s == Stone::White.to_int())
        .count();
    black as i32 - white as i32
}

/// Per-point ownership of a position: `1` Black, `-1` White, `0` neutral.
/// Stones own their own points.
pub fn territory_owners(board: &Board) -> Vec<i8> {
    fill_regions(board)
        .points()
        .iter()
        .map(|&s| if s == DAME { 0 } else { s })
        .collect()
}

/// Render a score as a result string: "B+{n}", "W+{n}", or "Draw".
pub fn format_result(score: i32) -> String {
    if score > 0 {
        format!("B+{score}")
    } else if score < 0 {
        format!("W+{}", -score)
    } else {
        "Draw".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test helper: build a board from an ASCII layout. 'B' = Black, 'W' = White, '+' = Empty.
    fn board_from_layout(layout: &[&str]) -> Board {
        let size = layout.len();
        let mut board = Board::new(size);
        for (row, line) in layout.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                let sign = match c {
                    'B' => Stone::Black.to_int(),
                    'W' => Stone::White.to_int(),
                    _ => 0,
                };
                let index = row * size + col;
                board.set(index, sign);
            }
        }
        board
    }

    #[test]
    fn empty_board_scores_zero() {
        assert_eq!(area_score(&Board::new(9)), 0);
        assert_eq!(area_score(&Board::new(19)), 0);
    }

    #[test]
    fn lone_stone_owns_the_whole_board() {
        let mut board = Board::new(19);
        let center = board.grid().flatten(9, 9);
        board.set(center, Stone::Black.to_int());

        assert_eq!(area_score(&board), 361);
    }

    #[test]
    fn lone_white_stone_scores_negative() {
        let mut board = Board::new(5);
        board.set(12, Stone::White.to_int());

        assert_eq!(area_score(&board), -25);
    }

    #[test]
    fn walls_split_the_board() {
        let board = board_from_layout(&["+B+W+", "+B+W+", "+B+W+", "+B+W+", "+B+W+"]);

        // Column 0 is Black's, column 4 is White's, column 2 touches both.
        assert_eq!(area_score(&board), 0);

        let owners = territory_owners(&board);
        assert_eq!(owners[0], 1);
        assert_eq!(owners[1], 1);
        assert_eq!(owners[2], 0);
        assert_eq!(owners[3], -1);
        assert_eq!(owners[4], -1);
    }

    #[test]
    fn unequal_walls_score_for_the_larger_side() {
        let board = board_from_layout(&["++B+W", "++B+W", "++B+W", "++B+W", "++B+W"]);

        assert_eq!(area_score(&board), 10);
        assert_eq!(format_result(area_score(&board)), "B+10");
    }

    #[test]
    fn enclosed_eye_counts_for_the_surrounding_color() {
        let board = board_from_layout(&["BBB", "B+B", "BBB"]);
        assert_eq!(area_score(&board), 9);
    }

    #[test]
    fn fully_filled_board_counts_stones() {
        let board = board_from_layout(&["BBW", "BWW", "BBW"]);
        assert_eq!(area_score(&board), 1);
    }

    #[test]
    fn scoring_leaves_the_board_untouched() {
        let board = board_from_layout(&["+B+", "B+B", "+B+"]);
        let before = board.clone();

        assert_eq!(area_score(&board), 9);
        territory_owners(&board);
        assert_eq!(board, before);
    }

    #[test]
    fn format_result_black_wins() {
        assert_eq!(format_result(5), "B+5");
    }

    #[test]
    fn format_result_white_wins() {
        assert_eq!(format_result(-3), "W+3");
    }

    #[test]
    fn format_result_draw() {
        assert_eq!(format_result(0), "Draw");
    }
}
