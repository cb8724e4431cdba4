//! The 3×3 board and the fixed table of winning lines.
//!
//! Cells are indexed 0-8, row-major:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;
use std::str::FromStr;

use super::mark::{Cell, Mark};
use crate::error::EngineError;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Indices of empty cells. Never more than nine, so it stays on the stack.
pub type MoveList = SmallVec<[usize; CELL_COUNT]>;

/// A row, column, or diagonal of three cell indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine(pub [usize; 3]);

impl WinningLine {
    /// The three cell indices of this line.
    #[must_use]
    pub const fn cells(self) -> [usize; 3] {
        self.0
    }
}

/// All eight lines: rows, then columns, then diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    WinningLine([0, 1, 2]),
    WinningLine([3, 4, 5]),
    WinningLine([6, 7, 8]),
    WinningLine([0, 3, 6]),
    WinningLine([1, 4, 7]),
    WinningLine([2, 5, 8]),
    WinningLine([0, 4, 8]),
    WinningLine([2, 4, 6]),
];

/// Nine cells, each empty or holding one mark.
///
/// `Board` is `Copy` so search can branch on it without allocation.
/// It enforces only the one-mark-per-cell invariant; turn order and
/// game-over checks belong to [`crate::rules`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Cell at `index`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Mark at `index`, if the cell is in bounds and occupied.
    #[must_use]
    pub fn mark_at(&self, index: usize) -> Option<Mark> {
        self.get(index).and_then(Cell::mark)
    }

    /// Whether `index` is in bounds and empty.
    #[must_use]
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Place a mark without any rule checks.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Cell::Occupied(mark);
    }

    /// Clear a cell without any rule checks.
    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    /// Copy of this board with `mark` placed at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    #[must_use]
    pub fn with_mark(mut self, index: usize, mark: Mark) -> Self {
        self.place(index, mark);
        self
    }

    /// Indices of all empty cells in ascending order.
    #[must_use]
    pub fn empty_cells(&self) -> MoveList {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Number of cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|c| c.mark() == Some(mark)).count()
    }

    /// Mark that owns all three cells of `line`, if any.
    #[must_use]
    pub fn line_owner(&self, line: WinningLine) -> Option<Mark> {
        let [a, b, c] = line.cells();
        let mark = self.cells[a].mark()?;
        (self.cells[b] == self.cells[a] && self.cells[c] == self.cells[a]).then_some(mark)
    }
}

impl Index<usize> for Board {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = |i: usize| self.cells[i].mark().map_or(' ', Mark::symbol);
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "-+-+-")?;
            }
            let start = row * 3;
            writeln!(f, "{}|{}|{}", symbol(start), symbol(start + 1), symbol(start + 2))?;
        }
        Ok(())
    }
}

/// Parses nine cell characters. `X`/`x` and `O`/`o` are marks; `.`, `_`,
/// `-` and space are empty. `|`, `/` and newlines are ignored so rows
/// may be written out visually.
///
/// ```
/// use tictac_engine::core::{Board, Mark};
///
/// let board: Board = "XX./.O./...".parse().unwrap();
/// assert_eq!(board.mark_at(1), Some(Mark::X));
/// assert_eq!(board.mark_at(4), Some(Mark::O));
/// assert_eq!(board.filled(), 3);
/// ```
impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;

        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '_' | '-' | ' ' => Cell::Empty,
                '|' | '/' | '\n' | '\r' => continue,
                _ => return Err(EngineError::InvalidBoard(s.to_string())),
            };
            if count == CELL_COUNT {
                return Err(EngineError::InvalidBoard(s.to_string()));
            }
            cells[count] = cell;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(EngineError::InvalidBoard(s.to_string()));
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.filled(), 0);
        assert_eq!(board.empty_cells().as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_and_clear() {
        let mut board = Board::new();
        board.place(4, Mark::X);
        assert_eq!(board.mark_at(4), Some(Mark::X));
        assert_eq!(board[4], Cell::Occupied(Mark::X));
        assert!(!board.is_empty_at(4));
        assert_eq!(board.count(Mark::X), 1);

        board.clear(4);
        assert!(board.is_empty_at(4));
    }

    #[test]
    fn test_out_of_bounds_lookup() {
        let board = Board::new();
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty_at(9));
    }

    #[test]
    fn test_line_owner() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(board.line_owner(WINNING_LINES[0]), Some(Mark::X));
        assert_eq!(board.line_owner(WINNING_LINES[1]), None);
        assert_eq!(board.line_owner(WINNING_LINES[2]), None);
    }

    #[test]
    fn test_lines_cover_each_cell() {
        // Center is on 4 lines, corners on 3, edges on 2.
        let mut seen = [0; CELL_COUNT];
        for line in WINNING_LINES {
            for i in line.cells() {
                seen[i] += 1;
            }
        }
        assert_eq!(seen, [3, 2, 3, 2, 4, 2, 3, 2, 3]);
    }

    #[test]
    fn test_parse_errors() {
        assert!("XX".parse::<Board>().is_err());
        assert!("XXXXXXXXXX".parse::<Board>().is_err());
        assert!("XX.Z.....".parse::<Board>().is_err());
    }

    #[test]
    fn test_display() {
        let board: Board = "X.O/.X./..O".parse().unwrap();
        assert_eq!(board.to_string(), "X| |O\n-+-+-\n |X| \n-+-+-\n | |O\n");
        assert_eq!(
            Board::new().to_string(),
            " | | \n-+-+-\n | | \n-+-+-\n | | \n"
        );
    }

    #[test]
    fn test_serde() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, restored);
    }
}
