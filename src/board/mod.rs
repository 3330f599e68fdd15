/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// The Qirkat board itself: cells, legality, move generation, undo.
mod board;

/// Moves: single steps and linked jump chains, plus their text notation.
mod moves;

/// Cell contents: empty, or a piece of either color.
mod piece;

/// Squares of the 5x5 lattice, addressed by linearized index.
mod square;

pub use board::*;
pub use moves::*;
pub use piece::*;
pub use square::*;

use thiserror::Error;

/// Errors arising from parsing square or move notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text was not a column `a`-`e` followed by a row `1`-`5`.
    #[error("invalid square {0:?}")]
    BadSquare(String),

    /// A move listed fewer than two squares.
    #[error("a move needs a source and a destination")]
    TooFewSquares,
}
