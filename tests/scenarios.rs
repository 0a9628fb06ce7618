//! End-to-end scenarios through the public surface: load, generate, apply, dump
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use woodpusher::{Color, Game, START_FEN};

fn apply_named(game: &mut Game, color: Color, notation: &str) {
    game.generate_moves(color);
    let index = game.candidates().iter()
        .position(|m| m == notation)
        .unwrap_or_else(|| panic!("{} not among candidates", notation));
    game.apply(index);
}

#[test]
fn opening_pawn_advance_updates_the_whole_position() {
    let mut game = Game::new();
    game.generate_moves(Color::White);
    assert_eq!(game.candidates().len(), 20);

    let index = game.candidates().iter().position(|m| m == "Pe2e4").unwrap();
    game.apply(index);

    // e2 emptied, e4 occupied, turn flipped, full-move number untouched
    assert_eq!(game.dump(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1");
    assert_eq!(game.history(), ["Pe2e4"]);
}

#[test]
fn double_advance_is_gone_after_the_pawn_has_moved() {
    let mut game = Game::new();
    apply_named(&mut game, Color::White, "Pe2e4");
    apply_named(&mut game, Color::Black, "pd7d5");

    game.generate_moves(Color::White);
    assert!(game.candidates().contains(&"Pe4e5".to_string()));
    assert!(!game.candidates().contains(&"Pe4e6".to_string()));
    // the advanced pawn can now capture toward d5
    assert!(game.candidates().contains(&"Pe4xd5".to_string()));
}

#[test]
fn a_full_exchange_keeps_the_counters_in_step() {
    let mut game = Game::new();
    apply_named(&mut game, Color::White, "Pe2e4");
    apply_named(&mut game, Color::Black, "pd7d5");
    apply_named(&mut game, Color::White, "Pe4xd5");

    assert_eq!(game.dump(), "rnbqkbnr/ppp1pppp/8/3P4/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 2");
    assert_eq!(game.history(), ["Pe2e4", "pd7d5", "Pe4xd5"]);
}

#[test]
fn castling_becomes_available_once_the_wing_is_cleared() {
    let mut game = Game::new();
    game.generate_moves(Color::White);
    assert!(!game.candidates().contains(&"O-O".to_string()));

    // clear the white kingside: knight out, pawn and bishop out of the way
    apply_named(&mut game, Color::White, "Ng1f3");
    apply_named(&mut game, Color::Black, "pa7a6");
    apply_named(&mut game, Color::White, "Pe2e3");
    apply_named(&mut game, Color::Black, "pa6a5");
    apply_named(&mut game, Color::White, "Bf1e2");
    apply_named(&mut game, Color::Black, "ph7h6");

    game.generate_moves(Color::White);
    let count = game.candidates().iter().filter(|m| *m == "O-O").count();
    assert_eq!(count, 1);
    assert!(!game.candidates().contains(&"O-O-O".to_string()));

    apply_named(&mut game, Color::White, "O-O");
    let castling = game.dump().split_whitespace().nth(2).unwrap();
    assert_eq!(castling, "kq");
    // king on g1, rook on f1, bishop still on e2
    assert_eq!(game.dump(), "rnbqkbnr/1pppppp1/7p/p7/8/4PN2/PPPPBPPP/RNBQ1RK1 b kq - 0 4");
}

#[test]
fn loaded_positions_round_trip_through_the_game() {
    for fen in &[
        START_FEN,
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        "8/P7/8/8/8/8/8/8 w - - 13 64",
    ] {
        assert_eq!(Game::load(fen).unwrap().dump(), *fen);
    }
}

#[test]
fn generating_for_a_bare_color_is_a_silent_no_op() {
    let mut game = Game::load("8/8/8/8/4P3/8/8/8 w - - 0 1").unwrap();
    game.generate_moves(Color::Black);
    assert!(game.candidates().is_empty());
}
