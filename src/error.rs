//! Defines the error types used throughout the crate
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Error type used by fallible methods in this crate.
///
/// All variants describe malformed position notation; parsing rebuilds the board from scratch,
/// so a failed load leaves nothing partially mutated behind.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Notation does not have exactly six space-separated fields
    ParseFieldCount,
    /// Malformed piece-placement field (bad rank count or empty-square run)
    ParseBoard,
    /// Unrecognized piece letter
    ParsePiece,
    /// Malformed side-to-move field
    ParseTurn,
    /// Malformed castling-rights field
    ParseCastling,
    /// Malformed en-passant field
    ParseEnPassant,
    /// Malformed full-move number
    ParseMoveNumber,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            ParseFieldCount => "notation must have exactly six fields",
            ParseBoard => "cannot parse piece placement",
            ParsePiece => "unrecognized piece letter",
            ParseTurn => "cannot parse side to move",
            ParseCastling => "cannot parse castling rights",
            ParseEnPassant => "cannot parse en-passant square",
            ParseMoveNumber => "cannot parse full-move number",
        }.fmt(f)
    }
}

impl std::error::Error for Error { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Result type used by fallible methods in this crate.
pub type Result<T> = std::result::Result<T, Error>;
