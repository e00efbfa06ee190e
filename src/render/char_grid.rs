//! Row-major grid of output characters.

use std::fmt;

/// The characters produced by one render, indexed `[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    rows: Vec<Vec<char>>,
}

impl CharGrid {
    pub fn new(rows: Vec<Vec<char>>) -> Self {
        Self { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row)?.get(col).copied()
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<char>> {
        self.rows
    }
}

/// One line per row, no trailing newline.
impl fmt::Display for CharGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}
