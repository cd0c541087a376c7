use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::types::{Symbol, PRIMARIES};

/// A 3x3 matrix of cell symbols, used both for cards (player-placed colors)
/// and targets (the pattern an overlay must reproduce).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    // Cells 0..=8 laid out row-major (r*3 + c)
    cells: [Symbol; 9],
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cells: [Symbol::Empty; 9],
        }
    }
}

impl Grid {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub const fn from_cells(cells: [Symbol; 9]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn from_rows(rows: [[Symbol; 3]; 3]) -> Self {
        let mut cells = [Symbol::Empty; 9];
        for (r, row) in rows.iter().enumerate() {
            for (c, sym) in row.iter().enumerate() {
                cells[r * 3 + c] = *sym;
            }
        }
        Self { cells }
    }

    #[inline]
    pub fn rows(&self) -> [[Symbol; 3]; 3] {
        let g = &self.cells;
        [
            [g[0], g[1], g[2]],
            [g[3], g[4], g[5]],
            [g[6], g[7], g[8]],
        ]
    }

    #[inline]
    pub fn get(&self, idx: u8) -> Symbol {
        self.cells[idx as usize]
    }

    #[inline]
    pub fn set(&mut self, idx: u8, sym: Symbol) {
        self.cells[idx as usize] = sym;
    }

    #[inline]
    pub fn get_rc(&self, r: u8, c: u8) -> Symbol {
        debug_assert!(r < 3 && c < 3);
        self.cells[(r * 3 + c) as usize]
    }

    #[inline]
    pub fn set_rc(&mut self, r: u8, c: u8, sym: Symbol) {
        debug_assert!(r < 3 && c < 3);
        self.cells[(r * 3 + c) as usize] = sym;
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.cells.iter().copied()
    }

    #[inline]
    pub fn center(&self) -> Symbol {
        self.cells[4]
    }

    #[inline]
    pub fn center_empty(&self) -> bool {
        self.center().is_empty()
    }

    #[inline]
    pub fn colored_count(&self) -> u8 {
        self.cells.iter().filter(|s| !s.is_empty()).count() as u8
    }

    #[inline]
    pub fn mixed_count(&self) -> u8 {
        self.cells.iter().filter(|s| s.is_mixed()).count() as u8
    }

    #[inline]
    pub fn black_count(&self) -> u8 {
        self.cells.iter().filter(|&&s| s == Symbol::Black).count() as u8
    }

    #[inline]
    pub fn contains(&self, sym: Symbol) -> bool {
        self.cells.iter().any(|&s| s == sym)
    }

    /// Which color families appear in this grid, indexed as [`PRIMARIES`]:
    /// `[red, blue, yellow]`. A family is present when any cell contains the
    /// primary or a mixed color derived from it.
    #[inline]
    pub fn families_present(&self) -> [bool; 3] {
        let mut present = [false; 3];
        for (i, primary) in PRIMARIES.iter().enumerate() {
            present[i] = self.cells.iter().any(|s| s.in_family_of(*primary));
        }
        present
    }

    /// One 90-degree clockwise quarter turn: output cell (r, c) comes from
    /// input cell (2-c, r).
    #[inline]
    pub fn rot90(&self) -> Grid {
        let mut out = Grid::new();
        for r in 0..3u8 {
            for c in 0..3u8 {
                out.set_rc(r, c, self.get_rc(2 - c, r));
            }
        }
        out
    }

    /// Rotate by `k` clockwise quarter turns (`k mod 4`); `rotated(0)` is
    /// the identity. Produces a new grid, never aliases the input.
    #[inline]
    pub fn rotated(&self, k: u8) -> Grid {
        let mut out = *self;
        for _ in 0..(k % 4) {
            out = out.rot90();
        }
        out
    }
}

/// Free-function form of [`Grid::rotated`] for callers that prefer the
/// `rotate(grid, k)` surface.
#[inline]
pub fn rotate(grid: &Grid, k: u8) -> Grid {
    grid.rotated(k)
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..3u8 {
            for c in 0..3u8 {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get_rc(r, c).letter())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// Wire format: a 3x3 array of one-letter codes, byte-compatible with the
// JSON the web player consumes.
impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = <[[Symbol; 3]; 3]>::deserialize(deserializer)?;
        Ok(Grid::from_rows(rows))
    }
}
