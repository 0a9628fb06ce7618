//! A chess position tracker and pseudo-legal move generator.
//!
//! The crate maintains an 8×8 board loaded from (and dumped back to) FEN
//! notation, enumerates candidate moves for either side, and applies a
//! selected candidate to step to the next position. Generated moves are
//! *pseudo-legal*: they obey each piece's movement geometry and occupancy
//! rules, but no attempt is made to verify that the mover's own king is
//! left safe. Search, evaluation and rendering are left to callers.
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
#![warn(missing_docs, missing_debug_implementations, unused_extern_crates)]

use std::fmt;
use std::ops;
use std::str::FromStr;

pub mod error;
pub use error::{Error, Result};

mod square;
pub use square::Square;

mod board;
pub use board::Board;

mod game;
pub use game::{Game, START_FEN};

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Which side a piece or player is on, based on the color of the pieces for that side.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The number of colors
    pub const COUNT: usize = 2;
}

impl ops::Not for Color {
    type Output = Color;

    /// Returns the opposite color
    ///
    /// # Example
    /// ```
    /// use woodpusher::Color;
    /// assert_eq!(!Color::White, Color::Black);
    /// assert_eq!(!Color::Black, Color::White);
    /// ```
    fn not(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => 'w'.fmt(f),
            Color::Black => 'b'.fmt(f),
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "w" => Ok(Color::White),
            "b" => Ok(Color::Black),
            _   => Err(Error::ParseTurn),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::White
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The type of a chess piece.
///
/// The discriminants are the piece rank codes used for ownership tests: a black piece keeps
/// its discriminant (1 through 6, king through pawn), while a white piece adds 8 (9 through 14).
/// Black pieces therefore always code below 7 and white pieces above it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Piece {
    King = 1,
    Queen = 2,
    Rook = 3,
    Bishop = 4,
    Knight = 5,
    Pawn = 6,
}

impl Piece {
    /// Returns the piece rank code for a piece of the given color.
    ///
    /// # Example
    /// ```
    /// use woodpusher::{Color, Piece};
    /// assert_eq!(Piece::King.code(Color::Black), 1);
    /// assert_eq!(Piece::King.code(Color::White), 9);
    /// assert_eq!(Piece::Pawn.code(Color::White), 14);
    /// ```
    pub fn code(self, color: Color) -> u8 {
        match color {
            Color::White => self as u8 + 8,
            Color::Black => self as u8,
        }
    }

    /// Returns the FEN letter for a piece of the given color (uppercase for white,
    /// lowercase for black).
    pub fn fen_char(self, color: Color) -> char {
        let c = match self {
            Piece::King => 'K',
            Piece::Queen => 'Q',
            Piece::Rook => 'R',
            Piece::Bishop => 'B',
            Piece::Knight => 'N',
            Piece::Pawn => 'P',
        };
        match color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    /// Returns the piece and color denoted by a FEN letter, or `None` for any other character.
    pub fn from_fen_char(c: char) -> Option<(Color, Piece)> {
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        let piece = match c.to_ascii_lowercase() {
            'k' => Piece::King,
            'q' => Piece::Queen,
            'r' => Piece::Rook,
            'b' => Piece::Bishop,
            'n' => Piece::Knight,
            'p' => Piece::Pawn,
            _ => return None,
        };

        Some((color, piece))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fen_char(Color::White).fmt(f)
    }
}

impl FromStr for Piece {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Piece::from_fen_char(c).map(|(_, p)| p).ok_or(Error::ParsePiece),
            _ => Err(Error::ParsePiece),
        }
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::Pawn
    }
}
