/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// The board library: squares, pieces, moves, and the Qirkat board itself.
mod board;

/// Command grammar for the engine's input loop and startup arguments.
mod cli;

/// Code related to the engine's functionality, such as user input handling.
mod engine;

/// Evaluation of Qirkat positions.
mod eval;

/// Numeric evaluation type shared by the evaluator and the search.
mod score;

/// Main engine logic; all search related code.
mod search;

pub use board::*;
pub use cli::*;
pub use engine::*;
pub use eval::*;
pub use score::*;
pub use search::*;
