//! Board structure with per-player occupancy

use std::fmt;

use super::bitboard::Bitboard;
use super::{is_supported_size, Cell, Player, Pos, DIRECTIONS};
use crate::error::{ReversiError, Result};

/// Game board.
///
/// A board is a small `Copy` value: the search explores hypothetical moves by
/// copying it, so sibling branches never observe each other's discs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    /// Black discs bitboard
    black: Bitboard,
    /// White discs bitboard
    white: Bitboard,
}

impl Board {
    /// Standard opening position: White on the main diagonal of the centre
    /// block, Black on the anti-diagonal.
    pub fn new(size: usize) -> Result<Self> {
        let mut board = Self::empty(size)?;
        #[allow(clippy::cast_possible_truncation)]
        let h = (size / 2) as u8;
        board.place(Pos::new(h - 1, h - 1), Player::White);
        board.place(Pos::new(h, h), Player::White);
        board.place(Pos::new(h, h - 1), Player::Black);
        board.place(Pos::new(h - 1, h), Player::Black);
        Ok(board)
    }

    /// Board with no discs, for setting up arbitrary positions
    pub fn empty(size: usize) -> Result<Self> {
        if !is_supported_size(size) {
            return Err(ReversiError::InvalidBoardSize(size));
        }
        #[allow(clippy::cast_possible_truncation)]
        let size = size as u8;
        Ok(Self {
            size,
            black: Bitboard::new(),
            white: Bitboard::new(),
        })
    }

    /// Parse a position from text rows, top row first.
    ///
    /// `.` is empty, `B`/`X` black, `W`/`O` white; whitespace is ignored.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let mut board = Self::empty(rows.len())?;
        for (y, row) in rows.iter().enumerate() {
            let cells: Vec<char> = row
                .as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            if cells.len() != rows.len() {
                return Err(ReversiError::InvalidBoardText(format!(
                    "row {y} has {} cells, expected {}",
                    cells.len(),
                    rows.len()
                )));
            }
            for (x, ch) in cells.into_iter().enumerate() {
                let cell = Cell::from_symbol(ch).ok_or_else(|| {
                    ReversiError::InvalidBoardText(format!("unknown symbol {ch:?} at ({x}, {y})"))
                })?;
                #[allow(clippy::cast_possible_truncation)]
                board.set(Pos::new(x as u8, y as u8), cell);
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Check whether signed coordinates fall on this board
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        Pos::is_valid(x, y, self.size())
    }

    /// Validate a coordinate pair coming from outside the engine.
    pub fn pos(&self, x: usize, y: usize) -> Result<Pos> {
        if x >= self.size() || y >= self.size() {
            return Err(ReversiError::OutOfBounds {
                x,
                y,
                size: self.size(),
            });
        }
        #[allow(clippy::cast_possible_truncation)]
        let pos = Pos::new(x as u8, y as u8);
        Ok(pos)
    }

    /// Contents of `(x, y)`, rejecting coordinates off the board
    pub fn occupant(&self, x: usize, y: usize) -> Result<Cell> {
        let pos = self.pos(x, y)?;
        Ok(self.get(pos))
    }

    /// Get the cell at an already validated position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        debug_assert!((pos.x as usize) < self.size() && (pos.y as usize) < self.size());
        let idx = pos.to_index(self.size());
        if self.black.get(idx) {
            Cell::Black
        } else if self.white.get(idx) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Put a disc on the board without flipping anything.
    /// Use `rules::apply` or `rules::play` for game moves.
    #[inline]
    pub fn place(&mut self, pos: Pos, player: Player) {
        self.set(pos, player.cell());
    }

    /// Overwrite a cell
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        let idx = pos.to_index(self.size());
        self.black.clear(idx);
        self.white.clear(idx);
        match cell {
            Cell::Black => self.black.set(idx),
            Cell::White => self.white.set(idx),
            Cell::Empty => {}
        }
    }

    /// Convert every disc in `flips` to `player`.
    #[inline]
    pub(crate) fn flip(&mut self, flips: Bitboard, player: Player) {
        match player {
            Player::Black => {
                self.black |= flips;
                self.white = self.white & !flips;
            }
            Player::White => {
                self.white |= flips;
                self.black = self.black & !flips;
            }
        }
    }

    /// Discs owned by `player`
    #[inline]
    pub fn discs(&self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Empty cells of this board
    #[inline]
    pub fn empty_cells(&self) -> Bitboard {
        Bitboard::full(self.size()) & !(self.black | self.white)
    }

    /// Number of discs owned by `player`
    #[inline]
    pub fn count(&self, player: Player) -> u32 {
        self.discs(player).count()
    }

    /// Total discs on board
    #[inline]
    pub fn total(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn empties(&self) -> u32 {
        self.empty_cells().count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empties() == 0
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        let size = self.size();
        (0..size * size).map(move |idx| {
            let pos = Pos::from_index(idx, size);
            (pos, self.get(pos))
        })
    }

    /// Grid of cells, `rows()[y][x]`
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        let size = self.size();
        (0..size)
            .map(|y| {
                (0..size)
                    .map(|x| self.get(Pos::from_index(y * size + x, size)))
                    .collect()
            })
            .collect()
    }

    /// On-board positions adjacent to `pos` in the eight compass directions
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size();
        DIRECTIONS
            .iter()
            .filter_map(move |&(dx, dy)| pos.offset(dx, dy, size))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.into_iter().map(Cell::symbol).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
