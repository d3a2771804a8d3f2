use crate::types::{Mark, WinningLine};

/// The 8 winning triples of a 3x3 board: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Mark; 9], mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }

    LINES
        .iter()
        .any(|line| line.iter().all(|&i| cells[i] == mark))
}

pub fn find_winning_line(cells: &[Mark; 9]) -> Option<WinningLine> {
    for line in LINES {
        let mark = cells[line[0]];
        if mark == Mark::Empty {
            continue;
        }
        if cells[line[1]] == mark && cells[line[2]] == mark {
            return Some(WinningLine::new(mark, line));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Mark)]) -> [Mark; 9] {
        let mut cells = [Mark::Empty; 9];
        for &(index, mark) in marks {
            cells[index] = mark;
        }
        cells
    }

    #[test]
    fn test_check_win_top_row() {
        let cells = board_with(&[(0, Mark::X), (1, Mark::X), (2, Mark::X)]);
        assert!(check_win(&cells, Mark::X));
        assert!(!check_win(&cells, Mark::O));
    }

    #[test]
    fn test_check_win_middle_column() {
        let cells = board_with(&[(1, Mark::O), (4, Mark::O), (7, Mark::O)]);
        assert!(check_win(&cells, Mark::O));
    }

    #[test]
    fn test_check_win_main_diagonal() {
        let cells = board_with(&[(0, Mark::X), (4, Mark::X), (8, Mark::X)]);
        assert!(check_win(&cells, Mark::X));
    }

    #[test]
    fn test_check_win_anti_diagonal() {
        let cells = board_with(&[(2, Mark::O), (4, Mark::O), (6, Mark::O)]);
        assert!(check_win(&cells, Mark::O));
    }

    #[test]
    fn test_check_win_mixed_line_is_not_a_win() {
        let cells = board_with(&[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);
        assert!(!check_win(&cells, Mark::X));
        assert!(!check_win(&cells, Mark::O));
    }

    #[test]
    fn test_check_win_empty_mark_never_wins() {
        let cells = [Mark::Empty; 9];
        assert!(!check_win(&cells, Mark::Empty));
    }

    #[test]
    fn test_find_winning_line_returns_first_in_enumeration_order() {
        // Both the top row and the left column are complete; the row
        // comes first in the table.
        let cells = board_with(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (3, Mark::X),
            (6, Mark::X),
        ]);

        let line = find_winning_line(&cells).unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.cells, [0, 1, 2]);
    }

    #[test]
    fn test_find_winning_line_none_without_winner() {
        let cells = board_with(&[(0, Mark::X), (4, Mark::O), (8, Mark::X)]);
        assert!(find_winning_line(&cells).is_none());
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut cells = [Mark::Empty; 9];
            for i in line {
                cells[i] = Mark::O;
            }
            assert!(check_win(&cells, Mark::O), "line {:?} not detected", line);
            assert_eq!(find_winning_line(&cells).unwrap().cells, line);
        }
    }
}
