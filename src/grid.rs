use crate::{GridError, GridResult, Pattern};
use log::debug;
use std::fmt;

const DEFAULT_SEED: u64 = 42;
const DEFAULT_FILL_RATE: f64 = 0.3;

const ALIVE_GLYPH: char = '◼';
const DEAD_GLYPH: char = '◻';

/// Conway's Game of Life on a fixed-size torus.
///
/// Cells are packed 8 per byte, LSB-first: the cell at `(row, col)` has
/// logical index `row * width + col`, lives in byte `index / 8` and is
/// selected by mask `1 << (index % 8)`. This layout is part of the public
/// contract (see [`TorusGrid::raw_cells`]); renderers read the buffer
/// directly instead of going through a per-cell accessor.
///
/// The grid keeps a second buffer of the same size so that [`TorusGrid::step`]
/// can compute the next generation from an unmodified snapshot of the current
/// one and swap the two at the end.
#[derive(Debug)]
pub struct TorusGrid {
    cells_curr: Vec<u8>,
    cells_next: Vec<u8>,
    width: usize,
    height: usize,
    generation: u64,
}

impl TorusGrid {
    /// Creates an all-dead grid.
    ///
    /// The spawn policy is deliberately deterministic: every cell starts
    /// dead, and [`TorusGrid::randomize`] is the explicit opt-in for a
    /// seeded random fill.
    pub fn new(width: usize, height: usize) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        let len = (width * height).div_ceil(8);
        debug!("creating {width}x{height} grid, {len} packed bytes");
        Ok(Self {
            cells_curr: vec![0; len],
            cells_next: vec![0; len],
            width,
            height,
            generation: 0,
        })
    }

    /// Creates a grid with random cells, `new` followed by `randomize`.
    pub fn random(
        width: usize,
        height: usize,
        seed: Option<u64>,
        fill_rate: Option<f64>,
    ) -> GridResult<Self> {
        let mut grid = Self::new(width, height)?;
        grid.randomize(seed, fill_rate);
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of completed [`TorusGrid::step`] calls since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> GridResult<()> {
        if row >= self.height || col >= self.width {
            return Err(GridError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    fn bit(&self, idx: usize) -> bool {
        self.cells_curr[idx / 8] & (1 << (idx % 8)) != 0
    }

    fn set_bit(buf: &mut [u8], idx: usize, alive: bool) {
        let mask = 1 << (idx % 8);
        if alive {
            buf[idx / 8] |= mask;
        } else {
            buf[idx / 8] &= !mask;
        }
    }

    /// Returns the cell state at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> GridResult<bool> {
        self.check_bounds(row, col)?;
        Ok(self.bit(self.index(row, col)))
    }

    /// Sets the cell state at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> GridResult<()> {
        self.check_bounds(row, col)?;
        let idx = self.index(row, col);
        Self::set_bit(&mut self.cells_curr, idx, alive);
        Ok(())
    }

    /// Flips the cell state at `(row, col)`.
    ///
    /// Editing is not simulation: the generation counter is untouched.
    pub fn toggle(&mut self, row: usize, col: usize) -> GridResult<()> {
        self.check_bounds(row, col)?;
        let idx = self.index(row, col);
        self.cells_curr[idx / 8] ^= 1 << (idx % 8);
        Ok(())
    }

    /// Overwrites every cell from a seeded ChaCha8 stream.
    ///
    /// `seed` - random seed (defaults to 42), `fill_rate` - probability of a
    /// cell spawning alive (defaults to 0.3). Identical arguments always
    /// produce an identical grid.
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: Option<f64>) {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let seed = seed.unwrap_or(DEFAULT_SEED);
        let fill_rate = fill_rate.unwrap_or(DEFAULT_FILL_RATE);
        debug!("randomizing with seed={seed} fill_rate={fill_rate}");

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for idx in 0..self.width * self.height {
            Self::set_bit(&mut self.cells_curr, idx, rng.gen_bool(fill_rate));
        }
    }

    fn count_neibs(&self, row: usize, col: usize) -> usize {
        let r1 = if row == 0 { self.height - 1 } else { row - 1 };
        let r2 = if row == self.height - 1 { 0 } else { row + 1 };
        let c1 = if col == 0 { self.width - 1 } else { col - 1 };
        let c2 = if col == self.width - 1 { 0 } else { col + 1 };
        self.bit(self.index(r1, c1)) as usize
            + self.bit(self.index(r1, col)) as usize
            + self.bit(self.index(r1, c2)) as usize
            + self.bit(self.index(row, c1)) as usize
            + self.bit(self.index(row, c2)) as usize
            + self.bit(self.index(r2, c1)) as usize
            + self.bit(self.index(r2, col)) as usize
            + self.bit(self.index(r2, c2)) as usize
    }

    /// Advances the grid by one generation.
    ///
    /// Standard B3/S23 rule with all 8 neighbors looked up on the torus. The
    /// next state is written into the back buffer and the buffers are swapped,
    /// so an observer never sees a half-stepped grid and every neighbor count
    /// reads the pre-step snapshot.
    pub fn step(&mut self) {
        for row in 0..self.height {
            for col in 0..self.width {
                let neibs = self.count_neibs(row, col);
                let idx = self.index(row, col);
                let next = if self.bit(idx) {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                Self::set_bit(&mut self.cells_next, idx, next);
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        self.generation += 1;
    }

    /// Advances the grid by `n` generations.
    pub fn step_many(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Stamps a [`Pattern`] with its top-left corner at `(origin_row, origin_col)`.
    ///
    /// Stamping is additive: the pattern's live cells are set alive, dead
    /// offsets inside its bounding box are left as they were. Offsets landing
    /// past an edge wrap around the torus, so any origin is valid and the
    /// call cannot fail.
    pub fn stamp(&mut self, origin_row: usize, origin_col: usize, pattern: Pattern) {
        let base_row = origin_row % self.height;
        let base_col = origin_col % self.width;
        for &(dr, dc) in pattern.cells() {
            let row = (base_row + dr) % self.height;
            let col = (base_col + dc) % self.width;
            let idx = self.index(row, col);
            Self::set_bit(&mut self.cells_curr, idx, true);
        }
    }

    /// Read-only view of the packed cell buffer.
    ///
    /// Length is `ceil(width * height / 8)`; bit `i` of the buffer (byte
    /// `i / 8`, mask `1 << (i % 8)`) is the cell with logical index `i`.
    /// Trailing padding bits in the last byte are always zero. The borrow
    /// ends at the next mutating call, which is exactly how long the view
    /// stays valid.
    pub fn raw_cells(&self) -> &[u8] {
        &self.cells_curr
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells_curr
            .iter()
            .map(|b| b.count_ones() as usize)
            .sum()
    }

    /// Row-major textual rendering, one glyph per cell.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TorusGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let alive = self.bit(self.index(row, col));
                write!(f, "{}", if alive { ALIVE_GLYPH } else { DEAD_GLYPH })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
