//! Pseudo-legal move enumeration
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::*;

use Piece::*;

const ORTHOGONALS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const KNIGHT_JUMPS: [(isize, isize); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1),
];
const KING_STEPS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1),
];

fn in_bounds(row: isize, col: isize) -> bool {
    row >= 0 && row < RANKS as isize && col >= 0 && col < FILES as isize
}

impl Board {
    /// Enumerates the pseudo-legal moves available to the given color, as move notations.
    ///
    /// Squares are scanned in grid order (row 0 through 7, then column 0 through 7 within
    /// each row); a square belongs to `color` when its piece rank code falls on that color's
    /// side of the split at 7. Each notation is the mover's FEN letter, its origin
    /// coordinate, an `x` marker for captures, and the destination coordinate; castling
    /// candidates appear as the literal tokens `O-O`/`O-O-O` (white) or `o-o`/`o-o-o`
    /// (black).
    ///
    /// The moves are pseudo-legal only: nothing filters out a move that would leave the
    /// mover's own king attacked, en-passant captures are not generated, and a pawn reaching
    /// the last rank is listed like any other pawn move (promotion happens on application).
    pub fn pseudo_legal_moves(&self, color: Color) -> Vec<String> {
        let mut out = Vec::new();

        for row in 0..RANKS {
            for col in 0..FILES {
                let code = self.grid[row][col].code();
                if code == 0 {
                    continue;
                }
                let owned = match color {
                    White => code > 7,
                    Black => code < 7,
                };
                if owned {
                    self.moves_from(row, col, &mut out);
                }
            }
        }

        out
    }

    /// Appends the moves available from one square onto `out`. An empty square contributes
    /// nothing.
    fn moves_from(&self, row: usize, col: usize, out: &mut Vec<String>) {
        let sq = self.grid[row][col];
        let (color, piece) = match sq.occupant() {
            Some(occupant) => occupant,
            None => return,
        };

        // destinations as (row, col, is_capture)
        let mut dests: Vec<(usize, usize, bool)> = Vec::new();

        match piece {
            Pawn => self.pawn_moves(row, col, color, &mut dests),
            Knight => self.step_moves(row, col, color, &KNIGHT_JUMPS, &mut dests),
            Bishop => self.sliding_moves(row, col, color, &DIAGONALS, &mut dests),
            Rook => self.sliding_moves(row, col, color, &ORTHOGONALS, &mut dests),
            Queen => {
                self.sliding_moves(row, col, color, &DIAGONALS, &mut dests);
                self.sliding_moves(row, col, color, &ORTHOGONALS, &mut dests);
            }
            King => {
                // castling candidates go straight onto the list, ahead of the step moves
                self.castling_moves(&sq, color, out);
                self.step_moves(row, col, color, &KING_STEPS, &mut dests);
            }
        }

        let origin = sq.id();
        let letter = piece.fen_char(color);
        let mut seen: Vec<(usize, usize)> = Vec::new();
        for &(r, c, capture) in &dests {
            if seen.contains(&(r, c)) {
                continue;
            }
            seen.push((r, c));
            let marker = if capture { "x" } else { "" };
            out.push(format!("{}{}{}{}", letter, origin, marker, Board::coord_to_id(r, c)));
        }
    }

    /// Pawns advance one square to an empty square, two squares on their first move when
    /// both squares ahead are empty, and capture on the two forward diagonals only. Black
    /// advances toward increasing row index, white toward decreasing.
    fn pawn_moves(&self, row: usize, col: usize, color: Color,
                  dests: &mut Vec<(usize, usize, bool)>) {
        let dir: isize = match color {
            Black => 1,
            White => -1,
        };

        let ahead = row as isize + dir;
        if in_bounds(ahead, col as isize) && self.grid[ahead as usize][col].is_empty() {
            dests.push((ahead as usize, col, false));

            let two_ahead = row as isize + 2 * dir;
            if in_bounds(two_ahead, col as isize)
                && self.grid[two_ahead as usize][col].is_empty()
                && self.grid[row][col].unmoved() {
                dests.push((two_ahead as usize, col, false));
            }
        }

        for &dc in &[-1isize, 1] {
            let (r, c) = (row as isize + dir, col as isize + dc);
            if in_bounds(r, c) {
                let target = self.grid[r as usize][c as usize];
                if target.color() == Some(!color) {
                    dests.push((r as usize, c as usize, true));
                }
            }
        }
    }

    /// Single-step movers: an empty destination is a quiet move, an enemy one a capture,
    /// and an own piece blocks only that destination.
    fn step_moves(&self, row: usize, col: usize, color: Color, offsets: &[(isize, isize)],
                  dests: &mut Vec<(usize, usize, bool)>) {
        for &(dr, dc) in offsets {
            let (r, c) = (row as isize + dr, col as isize + dc);
            if !in_bounds(r, c) {
                continue;
            }
            let target = self.grid[r as usize][c as usize];
            if target.is_empty() {
                dests.push((r as usize, c as usize, false));
            } else if target.color() == Some(!color) {
                dests.push((r as usize, c as usize, true));
            }
        }
    }

    /// Sliding movers: walk outward one square at a time; empty squares continue the walk,
    /// an enemy square is a terminal capture, an own piece stops the walk silently.
    fn sliding_moves(&self, row: usize, col: usize, color: Color, dirs: &[(isize, isize)],
                     dests: &mut Vec<(usize, usize, bool)>) {
        for &(dr, dc) in dirs {
            let (mut r, mut c) = (row as isize + dr, col as isize + dc);
            while in_bounds(r, c) {
                let target = self.grid[r as usize][c as usize];
                if target.is_empty() {
                    dests.push((r as usize, c as usize, false));
                } else if target.color() == Some(!color) {
                    dests.push((r as usize, c as usize, true));
                    break;
                } else {
                    break;
                }
                r += dr;
                c += dc;
            }
        }
    }

    /// Appends the castling candidates for the given king, when every precondition holds:
    /// the king has never moved and is not flagged in check, the right for that side is
    /// still held, every square between king and rook is empty, and the home rook is in
    /// place and has never moved.
    fn castling_moves(&self, king: &Square, color: Color, out: &mut Vec<String>) {
        if !king.unmoved() || king.in_check() || self.rights(color) == 0 {
            return;
        }

        let home = match color {
            White => RANKS - 1,
            Black => 0,
        };

        if self.rights(color) & CASTLE_KING_SIDE != 0
            && self.grid[home][5].is_empty()
            && self.grid[home][6].is_empty()
            && self.grid[home][7].occupant() == Some((color, Rook))
            && self.grid[home][7].unmoved() {
            out.push(match color {
                White => "O-O",
                Black => "o-o",
            }.to_string());
        }

        if self.rights(color) & CASTLE_QUEEN_SIDE != 0
            && self.grid[home][3].is_empty()
            && self.grid[home][2].is_empty()
            && self.grid[home][1].is_empty()
            && self.grid[home][0].occupant() == Some((color, Rook))
            && self.grid[home][0].unmoved() {
            out.push(match color {
                White => "O-O-O",
                Black => "o-o-o",
            }.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::START_FEN;

    fn moves(fen: &str, color: Color) -> Vec<String> {
        Board::from_fen(fen).unwrap().pseudo_legal_moves(color)
    }

    #[test]
    fn start_position_has_twenty_candidates_per_side() {
        let board = Board::from_fen(START_FEN).unwrap();
        assert_eq!(board.pseudo_legal_moves(White).len(), 20);
        assert_eq!(board.pseudo_legal_moves(Black).len(), 20);
    }

    #[test]
    fn color_without_pieces_contributes_nothing() {
        assert!(moves("8/8/8/8/4P3/8/8/8 w - - 0 1", Black).is_empty());
    }

    #[test]
    fn home_rank_pawn_gets_single_and_double_advance() {
        assert_eq!(moves("8/8/8/8/8/8/4P3/8 w - - 0 1", White), ["Pe2e3", "Pe2e4"]);
        assert_eq!(moves("8/4p3/8/8/8/8/8/8 b - - 0 1", Black), ["pe7e6", "pe7e5"]);
    }

    #[test]
    fn blocked_pawn_generates_nothing_forward() {
        // own piece directly ahead
        assert!(!moves("8/8/8/8/8/4N3/4P3/8 w - - 0 1", White).iter()
            .any(|m| m.starts_with("Pe2")));
        // double step needs the intermediate square empty as well
        let with_blocker = moves("8/8/8/8/8/4n3/4P3/8 w - - 0 1", White);
        assert!(!with_blocker.contains(&"Pe2e3".to_string()));
        assert!(!with_blocker.contains(&"Pe2e4".to_string()));
    }

    #[test]
    fn pawns_capture_only_on_the_forward_diagonals() {
        let found = moves("8/8/8/3p4/4P3/8/8/8 w - - 0 1", White);
        assert_eq!(found, ["Pe4e5", "Pe4e6", "Pe4xd5"]);

        // an empty diagonal is not a destination, and a rearward enemy is untouchable
        let found = moves("8/8/8/8/4P3/3p4/8/8 w - - 0 1", White);
        assert_eq!(found, ["Pe4e5", "Pe4e6"]);
    }

    #[test]
    fn knight_respects_the_board_edge() {
        assert_eq!(moves("8/8/8/8/8/8/8/N7 w - - 0 1", White), ["Na1b3", "Na1c2"]);
    }

    #[test]
    fn knight_own_piece_blocks_only_that_destination() {
        // b3 is occupied by an own pawn: the jump there disappears, c2 stays
        let found = moves("8/8/8/8/8/1P6/8/N7 w - - 0 1", White);
        assert!(!found.contains(&"Na1b3".to_string()));
        assert!(found.contains(&"Na1c2".to_string()));

        // an enemy piece on the same square is a capture instead
        let found = moves("8/8/8/8/8/1p6/8/N7 w - - 0 1", White);
        assert!(found.contains(&"Na1xb3".to_string()));
        assert!(found.contains(&"Na1c2".to_string()));
    }

    #[test]
    fn rook_stops_before_an_own_blocker() {
        let found = moves("8/8/8/8/8/P7/8/R7 w - - 0 1", White);
        let rook_file_moves: Vec<_> = found.iter()
            .filter(|m| m.starts_with("Ra1a"))
            .collect();
        assert_eq!(rook_file_moves, ["Ra1a2"]);
        // the rank stays fully open
        assert!(found.contains(&"Ra1h1".to_string()));
    }

    #[test]
    fn sliding_capture_ends_the_walk() {
        let found = moves("8/8/3p4/8/3R4/8/8/8 w - - 0 1", White);
        assert!(found.contains(&"Rd4d5".to_string()));
        assert!(found.contains(&"Rd4xd6".to_string()));
        assert!(!found.contains(&"Rd4d7".to_string()));
        assert!(!found.contains(&"Rd4d8".to_string()));
    }

    #[test]
    fn queen_slides_both_diagonally_and_orthogonally() {
        let found = moves("8/8/3p4/8/3Q4/8/8/8 w - - 0 1", White);
        assert!(found.contains(&"Qd4xd6".to_string()));
        assert!(found.contains(&"Qd4h8".to_string()));
        assert!(found.contains(&"Qd4a1".to_string()));
        assert!(found.contains(&"Qd4a4".to_string()));
        assert!(!found.contains(&"Qd4d7".to_string()));
    }

    #[test]
    fn no_castling_from_the_start_position() {
        let board = Board::from_fen(START_FEN).unwrap();
        for m in board.pseudo_legal_moves(White) {
            assert!(!m.starts_with("O-"));
        }
        for m in board.pseudo_legal_moves(Black) {
            assert!(!m.starts_with("o-"));
        }
    }

    #[test]
    fn castling_appears_once_the_path_is_clear() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        let white = moves(fen, White);
        assert_eq!(white.iter().filter(|m| *m == "O-O").count(), 1);
        assert_eq!(white.iter().filter(|m| *m == "O-O-O").count(), 1);
        let black = moves(fen, Black);
        assert_eq!(black.iter().filter(|m| *m == "o-o").count(), 1);
        assert_eq!(black.iter().filter(|m| *m == "o-o-o").count(), 1);
    }

    #[test]
    fn castling_candidates_precede_the_king_steps() {
        let found = moves("4k3/8/8/8/8/8/8/4K2R w K - 0 1", White);
        let castle = found.iter().position(|m| m == "O-O").unwrap();
        let step = found.iter().position(|m| m == "Ke1d1").unwrap();
        assert!(castle < step);
    }

    #[test]
    fn castling_requires_the_matching_right() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w Kkq - 0 1";
        let white = moves(fen, White);
        assert!(white.contains(&"O-O".to_string()));
        assert!(!white.contains(&"O-O-O".to_string()));
    }

    #[test]
    fn castling_requires_an_unobstructed_path() {
        let fen = "r3k2r/8/8/8/8/8/8/R2QK2R w KQkq - 0 1";
        let white = moves(fen, White);
        assert!(white.contains(&"O-O".to_string()));
        assert!(!white.contains(&"O-O-O".to_string()));
    }

    #[test]
    fn castling_requires_the_home_rook() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K3 w KQkq - 0 1";
        let white = moves(fen, White);
        assert!(!white.contains(&"O-O".to_string()));
        assert!(white.contains(&"O-O-O".to_string()));
    }

    #[test]
    fn a_king_flagged_in_check_cannot_castle() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        board.set_king_in_check(White, true);
        let white = board.pseudo_legal_moves(White);
        assert!(!white.contains(&"O-O".to_string()));
        assert!(!white.contains(&"O-O-O".to_string()));
        // the other king is unaffected
        assert!(board.pseudo_legal_moves(Black).contains(&"o-o".to_string()));
    }

    #[test]
    fn king_steps_use_the_single_step_rule() {
        let found = moves("8/8/8/8/8/8/3p4/3K4 w - - 0 1", White);
        assert!(found.contains(&"Kd1xd2".to_string()));
        assert!(found.contains(&"Kd1c1".to_string()));
        assert!(found.contains(&"Kd1e1".to_string()));
        assert_eq!(found.len(), 5);
    }

    #[test]
    fn ownership_is_decided_by_the_requested_color() {
        // black to move in the notation, but white's pieces are enumerated on request
        let found = moves("8/8/8/8/4P3/8/8/8 b - - 0 1", White);
        assert_eq!(found, ["Pe4e5", "Pe4e6"]);
    }
}
