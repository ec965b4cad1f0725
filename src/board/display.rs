use std::fmt;

use super::{Board, BoardLocation, Color};

const WHITE_PIECE: char = '○';
const BLACK_PIECE: char = '●';
const EMPTY_POINT: char = '·';

impl fmt::Display for Board {
    /// Renders the board with its connection lines, so a nine piece
    /// board shows the familiar three concentric squares. Lines count
    /// from 1 at the top and columns are labeled with letters.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let size = self.size();
        for column in 0..size {
            write!(f, "   {}", (b'a' + column) as char)?;
        }
        writeln!(f)?;
        for line in 0..size {
            write!(f, "{:>2} ", line + 1)?;
            for column in 0..size {
                let location = BoardLocation::new(line, column);
                let cell = if self.is_valid_location(location) {
                    match self.piece_at(location) {
                        Some(Color::White) => WHITE_PIECE,
                        Some(Color::Black) => BLACK_PIECE,
                        None => EMPTY_POINT,
                    }
                } else if self.crossed_horizontally(line, column) {
                    '─'
                } else if self.crossed_vertically(line, column) {
                    '│'
                } else {
                    ' '
                };
                write!(f, "{}", cell)?;
                if column + 1 < size {
                    let gap = if self.horizontal_span_covers(line, column) {
                        "───"
                    } else {
                        "   "
                    };
                    write!(f, "{}", gap)?;
                }
            }
            writeln!(f)?;
            if line + 1 < size {
                write!(f, "   ")?;
                for column in 0..size {
                    let connector = if self.vertical_span_covers(line, column) {
                        '│'
                    } else {
                        ' '
                    };
                    write!(f, "{}", connector)?;
                    if column + 1 < size {
                        write!(f, "   ")?;
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Board {
    /// True if a horizontal connection passes through the gap between
    /// `column` and `column + 1` on the given grid line.
    fn horizontal_span_covers(&self, line: u8, column: u8) -> bool {
        self.locations().iter().any(|&from| {
            from.line() == line
                && self.adjacent_locations(from).iter().any(|&to| {
                    to.line() == line && from.column() <= column && column < to.column()
                })
        })
    }

    /// True if a vertical connection passes through the gap between
    /// `line` and `line + 1` in the given grid column.
    fn vertical_span_covers(&self, line: u8, column: u8) -> bool {
        self.locations().iter().any(|&from| {
            from.column() == column
                && self
                    .adjacent_locations(from)
                    .iter()
                    .any(|&to| to.column() == column && from.line() <= line && line < to.line())
        })
    }

    fn crossed_horizontally(&self, line: u8, column: u8) -> bool {
        column > 0
            && self.horizontal_span_covers(line, column - 1)
            && self.horizontal_span_covers(line, column)
    }

    fn crossed_vertically(&self, line: u8, column: u8) -> bool {
        line > 0
            && self.vertical_span_covers(line - 1, column)
            && self.vertical_span_covers(line, column)
    }
}

/// Builds a board from a picture of the grid. Cells are given line by
/// line from the top; `W` and `B` put a piece down, `.` leaves the
/// cell empty. Unplayable grid cells must be given as `.` as well.
#[macro_export]
macro_rules! morris_position {
    ($game_type:expr, $($cell:tt)*) => {{
        let mut board = Board::new($game_type);
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<_> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        let size = board.size() as usize;
        assert_eq!(
            cells.len(),
            size * size,
            "Invalid number of grid cells. Expected {}, got {}",
            size * size,
            cells.len()
        );
        for (i, &c) in cells.iter().enumerate() {
            let color = match c {
                'W' => Color::White,
                'B' => Color::Black,
                '.' => continue,
                _ => panic!("Invalid character in morris position"),
            };
            let location = BoardLocation::new((i / size) as u8, (i % size) as u8);
            board.add_piece(location, color).unwrap();
        }
        board
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GameType;

    #[test]
    fn test_render_smallest_board() {
        let mut board = Board::new(GameType::ThreeMensMorris);
        board
            .add_piece(BoardLocation::new(0, 0), Color::White)
            .unwrap();
        board
            .add_piece(BoardLocation::new(1, 1), Color::Black)
            .unwrap();
        let expected = "\
   a   b   c
 1 ○───·───·
   │   │   │
 2 ·───●───·
   │   │   │
 3 ·───·───·
";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_render_draws_ring_connections_only() {
        let board = Board::new(GameType::NineMensMorris);
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        // The top edge of the outer ring is one unbroken line.
        assert_eq!(lines[1], " 1 ·───────────·───────────·");
        // The middle line leaves the board center open.
        assert_eq!(lines[7], " 4 ·───·───·       ·───·───·");
    }

    #[test]
    fn test_morris_position_macro() {
        let board = morris_position! {
            GameType::ThreeMensMorris,
            W W .
            B B .
            . . .
        };
        assert_eq!(board.piece_at(BoardLocation::new(0, 0)), Some(Color::White));
        assert_eq!(board.piece_at(BoardLocation::new(0, 1)), Some(Color::White));
        assert_eq!(board.piece_at(BoardLocation::new(1, 0)), Some(Color::Black));
        assert_eq!(board.piece_at(BoardLocation::new(1, 1)), Some(Color::Black));
        assert_eq!(board.piece_at(BoardLocation::new(2, 2)), None);
        assert_eq!(board.piece_count(Color::White), 2);
        assert_eq!(board.piece_count(Color::Black), 2);
    }
}
