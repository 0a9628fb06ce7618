//! Module to track a game in progress: the board, the candidate-move list and the history
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::board::{CASTLE_KING_SIDE, CASTLE_QUEEN_SIDE};
use crate::{Board, Color, Piece, Result};

use Color::*;

/// The notation of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

lazy_static! {
    // piece letter, origin, optional capture marker, destination
    static ref MOVE_RE: Regex =
        Regex::new("^[KQRBNPkqrbnp]([a-h][1-8])x?([a-h][1-8])$").expect("INFALLIBLE");
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A game in progress: a board, the candidate moves generated for it last, and the history
/// of moves applied so far.
///
/// The intended control flow is [`load`](Game::load) (or [`new`](Game::new)), then
/// repeatedly [`generate_moves`](Game::generate_moves), pick an entry from
/// [`candidates`](Game::candidates) and [`apply`](Game::apply) it by index. Applying
/// consumes the candidate list, so generation must be re-run before every apply.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    hist: Vec<String>,
    pending: Vec<String>,
    fen: String,
}

impl Game {
    /// Starts a game from the standard starting position.
    pub fn new() -> Game {
        Game::load(START_FEN).expect("INFALLIBLE")
    }

    /// Starts a game from the given position notation.
    ///
    /// # Errors
    ///
    /// Returns an error if the notation is malformed; see [`Board::from_fen`].
    pub fn load(notation: &str) -> Result<Game> {
        let board = Board::from_fen(notation)?;
        let fen = board.to_fen();
        debug!("loaded position {}", fen);

        Ok(Game {
            board,
            hist: Vec::new(),
            pending: Vec::new(),
            fen,
        })
    }

    /// Returns the notation of the current position.
    ///
    /// The notation is re-derived after every applied move, so this is always current.
    pub fn dump(&self) -> &str {
        &self.fen
    }

    /// Returns the board as it currently stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Gives mutable access to the board, e.g. to maintain a king's in-check flag.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replaces the candidate list with the pseudo-legal moves available to `color`.
    ///
    /// Any previously generated candidates are discarded. The result is read through
    /// [`candidates`](Game::candidates) and consumed by [`apply`](Game::apply).
    pub fn generate_moves(&mut self, color: Color) {
        self.pending = self.board.pseudo_legal_moves(color);
        debug!("{} candidate moves for {}", self.pending.len(), color);
    }

    /// Returns the candidate moves produced by the last generation call.
    pub fn candidates(&self) -> &[String] {
        &self.pending
    }

    /// Returns the moves applied so far, oldest first.
    pub fn history(&self) -> &[String] {
        &self.hist
    }

    /// Applies the candidate at `index`, mutating the board and recording the move.
    ///
    /// Castling relocates the home rook as well and costs the mover both castling rights;
    /// the first move of a rook or king revokes the corresponding rights; a pawn reaching
    /// the last rank is promoted to a queen (the history keeps the plain pawn notation).
    /// Afterwards the candidate list is empty, the turn has flipped, the full-move number
    /// has advanced if black moved, and the cached notation is up to date.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not an index into [`candidates`](Game::candidates); only
    /// indices into the most recent generation are valid.
    pub fn apply(&mut self, index: usize) {
        let notation = self.pending[index].clone();
        self.pending.clear();
        self.hist.push(notation.clone());
        debug!("applying {}", notation);

        let (origin, dest) = match notation.as_str() {
            "O-O" | "o-o" | "O-O-O" | "o-o-o" => {
                let color = if notation.starts_with('O') { White } else { Black };
                let home = match color {
                    White => 7,
                    Black => 0,
                };
                let (rook_from, rook_to, king_to) = match notation.len() {
                    3 => (7, 5, 6),
                    _ => (0, 3, 2),
                };
                self.board.relocate((home, rook_from), (home, rook_to));
                // both rights go away no matter which side was castled
                self.board.drop_both_rights(color);

                ((home, 4), (home, king_to))
            }
            _ => {
                // candidates are generated in-house, so the notation always matches
                let caps = MOVE_RE.captures(&notation).expect("INFALLIBLE");
                let origin = Board::id_to_coord(&caps[1]).expect("INFALLIBLE");
                let dest = Board::id_to_coord(&caps[2]).expect("INFALLIBLE");

                (origin, dest)
            }
        };

        let mover = *self.board.square(origin.0, origin.1);
        let color = mover.color().expect("INFALLIBLE");

        // the first move of a rook or king permanently revokes castling rights
        if mover.unmoved() {
            match mover.piece() {
                Some(Piece::Rook) => match origin.1 {
                    0 => self.board.drop_right(color, CASTLE_QUEEN_SIDE),
                    7 => self.board.drop_right(color, CASTLE_KING_SIDE),
                    _ => {}
                },
                Some(Piece::King) => self.board.drop_both_rights(color),
                _ => {}
            }
        }

        // a pawn reaching the last rank becomes a queen before it relocates
        if mover.piece() == Some(Piece::Pawn) && (dest.0 == 0 || dest.0 == 7) {
            self.board.square_mut(origin.0, origin.1).place(color, Piece::Queen);
        }

        self.board.relocate(origin, dest);

        if self.board.turn() == Black {
            self.board.bump_fullmove();
        }
        self.board.flip_turn();
        self.fen = self.board.to_fen();
    }

    /// Returns `true` if the move history ends in a repeating pattern.
    ///
    /// The check is a notation-echo heuristic over the recorded move strings: with more
    /// than six entries recorded, the last move must equal the move three back, the
    /// second-last the move four back, and the fifth-last the sixth-last. It is not a
    /// three-fold repetition count of board positions; a transposition reaching the same
    /// position through different notations goes undetected.
    pub fn is_repetition_draw(&self) -> bool {
        let n = self.hist.len();

        n > 6
            && self.hist[n - 1] == self.hist[n - 3]
            && self.hist[n - 2] == self.hist[n - 4]
            && self.hist[n - 5] == self.hist[n - 6]
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
