/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::{evaluate, Board, Move, PieceColor, Score};

/// Maximum minimax search depth, in plies, before going to static
/// evaluation.
pub const MAX_DEPTH: usize = 5;

/// The result of a search: the move to play, its score, and the total
/// number of nodes visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Number of nodes searched.
    pub nodes: u64,

    /// Best move found during the search; `None` only if the root position
    /// had no legal moves.
    pub bestmove: Option<Move>,

    /// Evaluation of the root position after searching.
    pub score: Score,
}

impl Default for SearchResult {
    /// A default search result should initialize to a *very bad* value,
    /// since there isn't a move to play.
    #[inline(always)]
    fn default() -> Self {
        Self {
            nodes: 0,
            bestmove: None,
            score: -Score::INF,
        }
    }
}

/// Executes a depth-limited [minimax](https://www.chessprogramming.org/Minimax)
/// search with [alpha-beta](https://www.chessprogramming.org/Alpha-Beta)
/// pruning on a position, on behalf of one automated color.
///
/// The search never mutates the board it was given: every recursive call
/// clones the position before applying a candidate move, and the clone dies
/// with the call. Sibling branches are therefore independent by
/// construction.
pub struct Search<'a> {
    /// The root position to search. Only ever cloned, never mutated.
    board: &'a Board,

    /// The color the automated player controls. Decides the root sense:
    /// White maximizes the evaluation, Black minimizes it.
    color: PieceColor,

    /// The result of the search, updated as the search runs.
    result: SearchResult,
}

impl<'a> Search<'a> {
    /// Constructs a new [`Search`] for `color` on the provided position.
    #[inline(always)]
    pub fn new(board: &'a Board, color: PieceColor) -> Self {
        Self {
            board,
            color,
            result: SearchResult::default(),
        }
    }

    /// Runs the search to [`MAX_DEPTH`] with a full `(-INF, INF)` window
    /// and returns its result.
    ///
    /// Callers must treat "no legal move" as game over *before* asking for
    /// a move; on such positions `bestmove` is `None`.
    pub fn find_move(mut self) -> SearchResult {
        let sense = if self.color == PieceColor::White { 1 } else { -1 };
        let mut root = self.board.clone();
        let score = self.minimax(&mut root, MAX_DEPTH, sense, -Score::INF, Score::INF, true);
        self.result.score = score;
        self.result
    }

    /// Finds a move from `board` and returns its value.
    ///
    /// `sense` is `+1` when evaluating on behalf of White (maximizing) and
    /// `-1` on behalf of Black (minimizing); it flips at each ply so that
    /// the opponent's replies are searched under the opposite framing. At
    /// depth 0, or when the position has no move, the static evaluation is
    /// returned. The root call records the winning move in the result.
    ///
    /// Ties break toward the last candidate examined: the maximizer keeps a
    /// move scoring greater than *or equal to* the best so far, and the
    /// minimizer mirrors that.
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: usize,
        sense: i32,
        mut alpha: Score,
        mut beta: Score,
        root: bool,
    ) -> Score {
        self.result.nodes += 1;

        if depth == 0 || !board.is_move() {
            return evaluate(board);
        }

        let mut best: Option<Move> = None;
        let mut best_score = Score::EVEN;

        for mv in board.get_moves() {
            // Copy-make: apply the candidate to a private clone.
            let mut next = board.clone();
            next.make_move(mv.clone());

            let response = self.minimax(&mut next, depth - 1, -sense, alpha, beta, false);

            let keep = match &best {
                None => true,
                Some(_) if sense > 0 => response >= best_score,
                Some(_) => response <= best_score,
            };
            if keep {
                best_score = response;
                best = Some(mv);
                if sense > 0 {
                    alpha = alpha.max(response);
                } else {
                    beta = beta.min(response);
                }
                if beta <= alpha {
                    break;
                }
            }
        }

        if root {
            self.result.bestmove = best;
        }
        best_score
    }
}
