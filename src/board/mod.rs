//! The board: an 8×8 grid of squares plus the game metadata carried by position notation
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use crate::{Color, Error, Piece, Result, Square};

use Color::*;

mod moves;

pub(crate) const RANKS: usize = 8;
pub(crate) const FILES: usize = 8;

pub(crate) const CASTLE_KING_SIDE: u8 = 0x1;
pub(crate) const CASTLE_QUEEN_SIDE: u8 = 0x2;
pub(crate) const CASTLE_BOTH_SIDES: u8 = CASTLE_KING_SIDE | CASTLE_QUEEN_SIDE;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The arrangement of pieces on the board at a given point in the game, together with the
/// side to move, castling availability, en-passant target, half-move clock and full-move
/// number.
///
/// Grid row 0 holds rank 8, matching the order the placement field of the notation is
/// written in. The board owns its 64 squares outright; they are only ever mutated through
/// the board's own methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Square; FILES]; RANKS],
    turn: Color,
    castling: [u8; Color::COUNT],
    ep_target: Option<String>,
    halfmove: String,
    fullmove: u32,
}

impl Board {
    /// Returns a board with no pieces on it.
    fn empty() -> Board {
        let mut grid = [[Square::new(0, 0); FILES]; RANKS];
        for (r, rank) in grid.iter_mut().enumerate() {
            for (c, sq) in rank.iter_mut().enumerate() {
                *sq = Square::new(r, c);
            }
        }

        Board {
            grid,
            turn: White,
            castling: [0; Color::COUNT],
            ep_target: None,
            halfmove: "0".to_string(),
            fullmove: 1,
        }
    }

    /// Parses a board from position notation.
    ///
    /// The notation must carry exactly six space-separated fields: piece placement, side to
    /// move, castling rights, en-passant target, half-move clock and full-move number. The
    /// half-move clock is kept verbatim and round-trips byte-for-byte; every other field is
    /// validated. All squares of a freshly parsed board are eligible for first-move-only
    /// rules, since the notation does not carry move history.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first malformed field. Nothing partially parsed is
    /// ever observable.
    pub fn from_fen(s: &str) -> Result<Board> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(Error::ParseFieldCount);
        }

        let mut board = Board::empty();

        // the placement field, rank 8 first
        let mut row = 0;
        let mut col = 0;
        for c in fields[0].chars() {
            match c {
                '1'..='8' => {
                    col += c.to_digit(10).expect("INFALLIBLE") as usize;
                    if col > FILES {
                        return Err(Error::ParseBoard);
                    }
                }
                '/' => {
                    if col == FILES && row < RANKS - 1 {
                        row += 1;
                        col = 0;
                    } else {
                        return Err(Error::ParseBoard);
                    }
                }
                _ => {
                    if col >= FILES {
                        return Err(Error::ParseBoard);
                    }
                    let (color, piece) = Piece::from_fen_char(c).ok_or(Error::ParsePiece)?;
                    board.grid[row][col].place(color, piece);
                    col += 1;
                }
            }
        }
        if row != RANKS - 1 || col != FILES {
            return Err(Error::ParseBoard);
        }

        // side to move
        board.turn = fields[1].parse()?;

        // castling rights
        match fields[2] {
            "-" => {}
            flags => {
                for c in flags.chars() {
                    match c {
                        'K' => board.castling[White as usize] |= CASTLE_KING_SIDE,
                        'Q' => board.castling[White as usize] |= CASTLE_QUEEN_SIDE,
                        'k' => board.castling[Black as usize] |= CASTLE_KING_SIDE,
                        'q' => board.castling[Black as usize] |= CASTLE_QUEEN_SIDE,
                        _ => return Err(Error::ParseCastling),
                    }
                }
            }
        }

        // en-passant target; tracked but never acted on
        match fields[3] {
            "-" => {}
            id => {
                if Board::id_to_coord(id).is_none() {
                    return Err(Error::ParseEnPassant);
                }
                board.ep_target = Some(id.to_string());
            }
        }

        // half-move clock is an opaque passthrough
        board.halfmove = fields[4].to_string();

        board.fullmove = fields[5].parse().map_err(|_| Error::ParseMoveNumber)?;

        Ok(board)
    }

    /// Converts the board back to position notation.
    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for (r, rank) in self.grid.iter().enumerate() {
            let mut run = 0;
            for sq in rank.iter() {
                match sq.fen_char() {
                    Some(c) => {
                        if run > 0 {
                            placement += &run.to_string();
                            run = 0;
                        }
                        placement.push(c);
                    }
                    None => run += 1,
                }
            }
            if run > 0 {
                placement += &run.to_string();
            }
            if r < RANKS - 1 {
                placement.push('/');
            }
        }

        let mut castling = String::new();
        castling += match self.castling[White as usize] {
            CASTLE_KING_SIDE => "K",
            CASTLE_QUEEN_SIDE => "Q",
            CASTLE_BOTH_SIDES => "KQ",
            _ => "",
        };
        castling += match self.castling[Black as usize] {
            CASTLE_KING_SIDE => "k",
            CASTLE_QUEEN_SIDE => "q",
            CASTLE_BOTH_SIDES => "kq",
            _ => "",
        };
        if castling.is_empty() {
            castling.push('-');
        }

        let ep_target = self.ep_target.as_deref().unwrap_or("-");

        format!("{} {} {} {} {} {}", placement, self.turn, castling, ep_target,
                                     self.halfmove, self.fullmove)
    }

    /// Returns the color whose turn it is.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the square at the given grid coordinates (row 0 is rank 8).
    pub fn square(&self, row: usize, col: usize) -> &Square {
        &self.grid[row][col]
    }

    /// Converts an algebraic coordinate to grid coordinates, or `None` if it is not one.
    pub fn id_to_coord(id: &str) -> Option<(usize, usize)> {
        match id.as_bytes() {
            &[file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                Some((8 - (rank - b'0') as usize, (file - b'a') as usize))
            }
            _ => None,
        }
    }

    /// Converts grid coordinates to an algebraic coordinate.
    pub fn coord_to_id(row: usize, col: usize) -> String {
        format!("{}{}", (b'a' + col as u8) as char, 8 - row)
    }

    /// Returns the grid coordinates of the given color's king.
    ///
    /// The board does not enforce that exactly one king of each color exists; if several do,
    /// the first in scan order is returned.
    pub fn find_king(&self, color: Color) -> Option<(usize, usize)> {
        let code = Piece::King.code(color);
        for rank in self.grid.iter() {
            for sq in rank.iter() {
                if sq.code() == code {
                    return Some((sq.row(), sq.col()));
                }
            }
        }

        None
    }

    /// Sets the in-check flag on the given color's king square.
    ///
    /// Check is never detected by this crate; the flag exists as an input to the castling
    /// rules and must be maintained by the caller, if at all. Has no effect when the color
    /// has no king on the board.
    pub fn set_king_in_check(&mut self, color: Color, value: bool) {
        if let Some((row, col)) = self.find_king(color) {
            self.grid[row][col].set_in_check(value);
        }
    }

    /// Returns the castling-rights flags still held by the given color.
    pub(crate) fn rights(&self, color: Color) -> u8 {
        self.castling[color as usize]
    }

    /// Drops one side's castling right for the given color.
    pub(crate) fn drop_right(&mut self, color: Color, side: u8) {
        self.castling[color as usize] &= !side;
    }

    /// Drops both castling rights for the given color.
    pub(crate) fn drop_both_rights(&mut self, color: Color) {
        self.castling[color as usize] = 0;
    }

    /// Moves the occupant of `from` onto `to`, emptying the origin. Both squares come out
    /// of it marked as no longer eligible for first-move-only rules.
    pub(crate) fn relocate(&mut self, from: (usize, usize), to: (usize, usize)) {
        let mover = self.grid[from.0][from.1];
        self.grid[to.0][to.1].receive(&mover);
        self.grid[from.0][from.1].clear();
    }

    pub(crate) fn square_mut(&mut self, row: usize, col: usize) -> &mut Square {
        &mut self.grid[row][col]
    }

    pub(crate) fn flip_turn(&mut self) {
        self.turn = !self.turn;
    }

    pub(crate) fn bump_fullmove(&mut self) {
        self.fullmove += 1;
    }
}

impl fmt::Display for Board {
    /// Formats the board as its position notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_fen().fmt(f)
    }
}
