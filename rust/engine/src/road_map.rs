//! Scrolling road map grid.
//!
//! Outcomes fill the grid column by column, top to bottom. Once every column
//! is used, each further column start shifts the whole grid one column to the
//! left so the grid always holds the latest `rows * cols` outcomes.

use crate::errors::GridError;
use crate::outcome::{Cell, Outcome};

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 12;

/// Next write position as `(row, col)`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RoadMapGrid {
    rows: usize,
    cols: usize,
    // columns[c][r]
    columns: Vec<Vec<Cell>>,
    // Raw write position; `row` may equal `rows` until the next append wraps it.
    row: usize,
    col: usize,
}

impl Default for RoadMapGrid {
    fn default() -> Self {
        Self::blank(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl RoadMapGrid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        validate_dimensions(rows, cols)?;
        Ok(Self::blank(rows, cols))
    }

    fn blank(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            columns: vec![vec![Cell::Empty; rows]; cols],
            row: 0,
            col: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// Clears every cell and rewinds the cursor to (0, 0).
    pub fn reset(&mut self) {
        for column in &mut self.columns {
            column.fill(Cell::Empty);
        }
        self.row = 0;
        self.col = 0;
    }

    /// Clears the grid and changes its dimensions.
    pub fn reset_with(&mut self, rows: usize, cols: usize) -> Result<(), GridError> {
        validate_dimensions(rows, cols)?;
        *self = Self::blank(rows, cols);
        Ok(())
    }

    /// Resets, then appends every item in order. Replaying the same history
    /// always produces the same grid.
    pub fn replay<I>(&mut self, history: I)
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        self.reset();
        for item in history {
            self.append_cell(item.into());
        }
    }

    pub fn append(&mut self, outcome: Outcome) {
        self.append_cell(Cell::Mark(outcome));
    }

    pub fn append_cell(&mut self, cell: Cell) {
        if self.row >= self.rows {
            self.row = 0;
            self.col += 1;
        }
        if self.col >= self.cols {
            self.shift_left();
            self.col = self.cols - 1;
        }
        // Writing Empty would leave a hole the cursor has already passed.
        let cell = if cell.is_empty() { Cell::Neutral } else { cell };
        self.columns[self.col][self.row] = cell;
        self.row += 1;
    }

    fn shift_left(&mut self) {
        self.columns.rotate_left(1);
        if let Some(last) = self.columns.last_mut() {
            last.fill(Cell::Empty);
        }
    }

    /// Where the next append will write. A pending column wrap or left shift
    /// is already applied, so the result is always inside the grid.
    pub fn cursor(&self) -> Cursor {
        if self.row >= self.rows {
            Cursor {
                row: 0,
                col: (self.col + 1).min(self.cols - 1),
            }
        } else {
            Cursor {
                row: self.row,
                col: self.col,
            }
        }
    }

    /// True when the next append will shift the grid left.
    pub fn is_full(&self) -> bool {
        self.row >= self.rows && self.col + 1 >= self.cols
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.columns.get(col).and_then(|c| c.get(row)).copied()
    }

    pub fn column(&self, col: usize) -> Option<&[Cell]> {
        self.columns.get(col).map(Vec::as_slice)
    }

    /// Cells row by row, for painting a display surface.
    pub fn rows_iter(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        (0..self.rows).map(move |r| self.columns.iter().map(|c| c[r]).collect())
    }

    /// Non-empty cells in column-major order, oldest first.
    pub fn filled(&self) -> Vec<Cell> {
        self.columns
            .iter()
            .flat_map(|c| c.iter().copied())
            .filter(|c| !c.is_empty())
            .collect()
    }
}

fn validate_dimensions(rows: usize, cols: usize) -> Result<(), GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::InvalidDimensions { rows, cols });
    }
    Ok(())
}
