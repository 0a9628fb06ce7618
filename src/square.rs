//! A single cell of the board and its occupancy state
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use crate::{Color, Piece};

////////////////////////////////////////////////////////////////////////////////////////////////////
/// One square of the board: its coordinates, its occupant (if any), and the per-square flags
/// the move rules depend on.
///
/// Emptiness, piece identity, color and rank code are all views of the single `occupant`
/// field, so they can never disagree. All mutation goes through the board's own methods,
/// which funnel into the square's `place`, `clear` and `receive` entry points.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Square {
    row: usize,
    col: usize,
    occupant: Option<(Color, Piece)>,
    unmoved: bool,
    in_check: bool,
}

impl Square {
    /// Returns an empty square at the given grid coordinates (row 0 is rank 8).
    ///
    /// A fresh square is `unmoved`: whatever is later placed on it is eligible for
    /// first-move-only rules (the pawn double step, castling) until it relocates.
    pub fn new(row: usize, col: usize) -> Square {
        Square {
            row,
            col,
            occupant: None,
            unmoved: true,
            in_check: false,
        }
    }

    /// Returns the square's grid row (0 is rank 8).
    pub fn row(self) -> usize {
        self.row
    }

    /// Returns the square's grid column (0 is the a-file).
    pub fn col(self) -> usize {
        self.col
    }

    /// Returns the square's algebraic coordinate, e.g. `"e4"`.
    pub fn id(self) -> String {
        format!("{}{}", (b'a' + self.col as u8) as char, 8 - self.row)
    }

    /// Returns `true` if no piece occupies the square.
    pub fn is_empty(self) -> bool {
        self.occupant.is_none()
    }

    /// Returns the occupying color and piece, if any.
    pub fn occupant(self) -> Option<(Color, Piece)> {
        self.occupant
    }

    /// Returns the color of the occupant, if any.
    pub fn color(self) -> Option<Color> {
        self.occupant.map(|(c, _)| c)
    }

    /// Returns the kind of the occupant, if any.
    pub fn piece(self) -> Option<Piece> {
        self.occupant.map(|(_, p)| p)
    }

    /// Returns the occupant's piece rank code, or 0 for an empty square.
    pub fn code(self) -> u8 {
        match self.occupant {
            Some((c, p)) => p.code(c),
            None => 0,
        }
    }

    /// Returns the occupant's FEN letter, or `None` for an empty square.
    pub fn fen_char(self) -> Option<char> {
        self.occupant.map(|(c, p)| p.fen_char(c))
    }

    /// Returns `true` if the occupant is still eligible for first-move-only rules.
    ///
    /// The flag starts out true when a position is loaded and is permanently lowered by any
    /// relocation through the square, including clearing it.
    pub fn unmoved(self) -> bool {
        self.unmoved
    }

    /// Returns the square's in-check flag. Only meaningful for a king's square; nothing in
    /// this crate ever computes it (see [`Board::set_king_in_check`](crate::Board)).
    pub fn in_check(self) -> bool {
        self.in_check
    }

    pub(crate) fn set_in_check(&mut self, value: bool) {
        self.in_check = value;
    }

    /// Puts a piece of the given color on the square, replacing any previous occupant.
    ///
    /// The `unmoved` flag is left as-is; placement is used both for initial setup and for
    /// rewriting a promoting pawn in place.
    pub(crate) fn place(&mut self, color: Color, piece: Piece) {
        self.occupant = Some((color, piece));
    }

    /// Empties the square and lowers its `unmoved` flag.
    pub(crate) fn clear(&mut self) {
        self.occupant = None;
        self.unmoved = false;
    }

    /// Takes over another square's occupant (and its in-check flag), marking self as moved-to.
    pub(crate) fn receive(&mut self, from: &Square) {
        debug_assert!(!from.is_empty());
        self.occupant = from.occupant;
        self.in_check = from.in_check;
        self.unmoved = false;
    }
}

impl fmt::Display for Square {
    /// An empty square formats as `.`, an occupied one as its FEN letter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fen_char().unwrap_or('.').fmt(f)
    }
}
