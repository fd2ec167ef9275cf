//! The 8x8 board and its piece counters.
//!
//! `Board` is a plain value: copying it is the snapshot used when the move
//! selector simulates candidates. All writes go through [`Board::set`], which
//! keeps the owner x rank counter table equal to the live cell contents.

use serde::{Deserialize, Serialize};

use super::coord::{Coord, BOARD_SIZE};
use super::error::BoardError;
use super::moves::Move;
use super::piece::{Cell, Piece, Rank};
use super::player::{Player, PlayerMap};

const SIZE: usize = BOARD_SIZE as usize;

/// What `Board::apply_move` changed besides moving the piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Applied {
    /// Square and piece removed by a capture.
    pub captured: Option<(Coord, Piece)>,
    /// The moved man was crowned on landing.
    pub promoted: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
    /// Live piece counts indexed by owner, then `Rank::index`.
    counts: PlayerMap<[u8; 2]>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
            counts: PlayerMap::with_value([0, 0]),
        }
    }

    /// The standard opening position.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::empty();
        board.initialize_standard_setup();
        board
    }

    /// Reset to the opening position: twelve men per side on the three
    /// playable rows nearest their own edge.
    pub fn initialize_standard_setup(&mut self) {
        *self = Self::empty();
        for coord in Coord::playable() {
            let owner = match coord.row {
                0..=2 => Player::Black,
                5..=7 => Player::White,
                _ => continue,
            };
            self.put(coord, Cell::Occupied(Piece::man(owner)));
        }
    }

    /// Contents of a square; off-board squares read as `Empty`.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Cell {
        if !coord.is_on_board() {
            return Cell::Empty;
        }
        self.cells[coord.row as usize][coord.col as usize]
    }

    /// The piece on a square, if any.
    #[must_use]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.get(coord).piece()
    }

    /// Write a square, keeping the counters in step.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), BoardError> {
        if !coord.is_on_board() {
            return Err(BoardError::out_of_range(coord));
        }
        self.put(coord, cell);
        Ok(())
    }

    fn put(&mut self, coord: Coord, cell: Cell) {
        let slot = &mut self.cells[coord.row as usize][coord.col as usize];
        let old = std::mem::replace(slot, cell);
        if let Cell::Occupied(p) = old {
            self.counts[p.owner][p.rank.index()] -= 1;
        }
        if let Cell::Occupied(p) = cell {
            self.counts[p.owner][p.rank.index()] += 1;
        }
    }

    #[must_use]
    pub fn is_playable(&self, coord: Coord) -> bool {
        coord.is_playable()
    }

    /// Men plus kings owned by `player`.
    #[must_use]
    pub fn piece_count(&self, player: Player) -> u32 {
        let [men, kings] = self.counts[player];
        u32::from(men) + u32::from(kings)
    }

    #[must_use]
    pub fn king_count(&self, player: Player) -> u32 {
        u32::from(self.counts[player][Rank::King.index()])
    }

    #[must_use]
    pub fn man_count(&self, player: Player) -> u32 {
        u32::from(self.counts[player][Rank::Man.index()])
    }

    #[must_use]
    pub fn total_pieces(&self) -> u32 {
        Player::all().map(|p| self.piece_count(p)).sum()
    }

    /// Crown a man standing on its owner's promotion row.
    ///
    /// Returns true if a promotion happened. Off-board coordinates and kings
    /// are left alone.
    pub fn promote_if_needed(&mut self, coord: Coord) -> bool {
        match self.get(coord) {
            Cell::Occupied(piece)
                if piece.rank == Rank::Man && coord.row == piece.owner.promotion_row() =>
            {
                self.put(coord, Cell::Occupied(piece.crowned()));
                true
            }
            _ => false,
        }
    }

    /// Move a piece, remove the jumped piece for captures and crown on landing.
    ///
    /// No legality check is made here; callers validate first.
    pub fn apply_move(&mut self, mv: &Move) -> Result<Applied, BoardError> {
        self.set(mv.to, Cell::Occupied(mv.piece))?;
        self.set(mv.from, Cell::Empty)?;

        let captured = match mv.captured_square() {
            Some(mid) => {
                let taken = self.piece_at(mid);
                self.set(mid, Cell::Empty)?;
                taken.map(|p| (mid, p))
            }
            None => None,
        };

        let promoted = self.promote_if_needed(mv.to);
        Ok(Applied { captured, promoted })
    }

    /// Copy of the board with `mv` applied.
    pub fn with_move(&self, mv: &Move) -> Result<Board, BoardError> {
        let mut next = self.clone();
        next.apply_move(mv)?;
        Ok(next)
    }

    /// Pieces owned by `player`, row-major.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.occupied().filter(move |(_, p)| p.owner == player)
    }

    /// Every occupied square, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::playable().filter_map(move |c| self.piece_at(c).map(|p| (c, p)))
    }

    /// Parse eight rows of `.`/`w`/`W`/`b`/`B`, top row first.
    ///
    /// Whitespace inside a row is ignored; blank lines are skipped. Pieces on
    /// light squares are rejected.
    ///
    /// ```
    /// use rust_draughts::core::{Board, Coord, Player};
    ///
    /// let board = Board::from_diagram(
    ///     "
    ///     . . . . . . . .
    ///     . . . . . . . .
    ///     . . . . . . . .
    ///     . . . . . . . .
    ///     . . . b . . . .
    ///     . . w . . . . .
    ///     . . . . . . . .
    ///     . . . . . . . .
    ///     ",
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(board.piece_count(Player::White), 1);
    /// assert!(board.piece_at(Coord::new(4, 3)).is_some());
    /// ```
    pub fn from_diagram(diagram: &str) -> Result<Board, BoardError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != SIZE {
            return Err(BoardError::BadDiagram(format!("expected {SIZE} rows, found {}", rows.len())));
        }

        let mut board = Board::empty();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != SIZE {
                return Err(BoardError::BadDiagram(format!(
                    "row {r} has {} squares, expected {SIZE}",
                    row.len()
                )));
            }
            for (c, &symbol) in row.iter().enumerate() {
                let coord = Coord::new(r as i8, c as i8);
                if symbol == '.' {
                    continue;
                }
                let piece = Piece::from_symbol(symbol)
                    .ok_or_else(|| BoardError::BadDiagram(format!("unknown symbol `{symbol}` at {coord}")))?;
                if !coord.is_playable() {
                    return Err(BoardError::BadDiagram(format!("piece on light square {coord}")));
                }
                board.set(coord, Cell::Occupied(piece))?;
            }
        }
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            let line: Vec<String> = (0..BOARD_SIZE)
                .map(|col| match self.get(Coord::new(row, col)) {
                    Cell::Empty => ".".to_string(),
                    Cell::Occupied(p) => p.symbol().to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
