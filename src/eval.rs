/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::{Board, PieceColor, Score, Square};

/// Returns a heuristic value for `board`: the number of White pieces minus
/// the number of Black pieces.
///
/// If the side to move has no legal moves it has lost, and the score is the
/// [`Score::WIN`] sentinel against it instead. Terminal detection goes
/// through [`Board::is_move`], which is why the board is borrowed mutably;
/// the search only ever evaluates its private clones.
pub fn evaluate(board: &mut Board) -> Score {
    if !board.is_move() {
        return match board.side_to_move() {
            PieceColor::White => -Score::WIN,
            _ => Score::WIN,
        };
    }

    let mut white = 0;
    let mut black = 0;
    for sq in Square::iter() {
        match board.get(sq) {
            PieceColor::White => white += 1,
            PieceColor::Black => black += 1,
            PieceColor::Empty => {}
        }
    }
    Score::material(white, black)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_material() {
        let mut board = Board::new();
        board
            .set_pieces("----- ----- ----w --bb- bb-bb", PieceColor::White)
            .unwrap();
        assert_eq!(evaluate(&mut board), -5);
    }

    #[test]
    fn start_position_is_even() {
        assert_eq!(evaluate(&mut Board::new()), Score::EVEN);
    }

    #[test]
    fn a_stuck_side_has_lost() {
        let mut board = Board::new();
        // Black has no pieces, so White's single piece decides the game.
        board
            .set_pieces("----- --w-- ----- ----- -----", PieceColor::Black)
            .unwrap();
        assert_eq!(evaluate(&mut board), Score::WIN);

        board
            .set_pieces("----- --b-- ----- ----- -----", PieceColor::White)
            .unwrap();
        assert_eq!(evaluate(&mut board), -Score::WIN);
    }
}
