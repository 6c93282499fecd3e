//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;
use crate::color::Color;
use crate::movegen::generate_legal_moves;

/// Count the leaf nodes of the legal move tree at the given depth, `side` to move.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number of
/// legal moves without making them.
pub fn perft(board: &Board, side: Color, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(board, side);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|&mv| perft(&board.make_move(mv), side.flip(), depth - 1))
        .sum()
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(move, node_count)` pairs in coordinate notation, sorted alphabetically.
pub fn divide(board: &Board, side: Color, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = generate_legal_moves(board, side)
        .into_iter()
        .map(|mv| {
            let child = board.make_move(mv);
            let count = if depth <= 1 {
                1
            } else {
                perft(&child, side.flip(), depth - 1)
            };
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
