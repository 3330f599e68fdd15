/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use thiserror::Error;

use super::{Move, PieceColor, Square};

/// The standard starting layout, bottom row first: White owns the bottom two
/// rows and the two right-of-center middle squares, Black mirrors, and the
/// center point is empty.
const INIT_LAYOUT: &str = "wwwww wwwww bb-ww bbbbb bbbbb";

/// White's back row starts at this linearized index; a White piece there can
/// no longer step, only jump. Black's back row ends just below [`Square::SIDE`].
const WHITE_BACK_ROW: usize = Square::COUNT - Square::SIDE as usize;

/// Errors rejecting a malformed board description given to
/// [`Board::set_pieces`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The layout did not contain exactly 25 squares.
    #[error("board layout must have exactly 25 squares, got {0}")]
    BadLength(usize),

    /// The layout contained a character other than `w`, `b` or `-`.
    #[error("invalid symbol {0:?} in board layout")]
    BadSymbol(char),

    /// The given side to move was not an actual color.
    #[error("side to move must be White or Black")]
    BadSideToMove,
}

/// A Qirkat board: 25 cells, the side to move, and the move history.
///
/// Squares are labeled by column (`'a'..='e'`) and row (`'1'..='5'`), or by
/// their linearized index; see [`Square`]. Moves are denoted by [`Move`]s.
///
/// Cloning a board deep-copies its cells, turn state, backtrack guard and
/// history; clones never share storage. The search and the jump-chain
/// machinery rely on this to simulate moves on scratch copies without the
/// authoritative board ever seeing partially-applied state.
#[derive(Debug, Clone)]
pub struct Board {
    /// Cell contents in linearized-index order.
    cells: [PieceColor; Square::COUNT],

    /// The player with the next move. Arbitrary once the game is over.
    side_to_move: PieceColor,

    /// Set once the side to move has been found to have no legal moves.
    /// Sticky: only [`Board::set_pieces`] (or [`Board::clear`]) resets it.
    game_over: bool,

    /// Every applied move, oldest first. Consumed by [`Board::undo`].
    history: Vec<Move>,

    /// Backtrack guard. `visited[k]` holds the linearized indices the piece
    /// currently on `k` has stepped from since its last jump; a step back
    /// onto any of them is illegal until a capture resets the record.
    visited: [Vec<u8>; Square::COUNT],
}

impl Board {
    /// A new board with pieces in their starting positions, White to move.
    pub fn new() -> Self {
        let mut board = Self {
            cells: [PieceColor::Empty; Square::COUNT],
            side_to_move: PieceColor::White,
            game_over: false,
            history: Vec::new(),
            visited: std::array::from_fn(|_| Vec::new()),
        };
        board.clear();
        board
    }

    /// Resets to the starting position, with White to move.
    pub fn clear(&mut self) {
        self.set_pieces(INIT_LAYOUT, PieceColor::White)
            .expect("the standard starting layout is valid");
    }

    /// Sets the board from `layout` and gives `side_to_move` the move.
    ///
    /// `layout` consists of 25 characters over `{'b', 'w', '-'}`, optionally
    /// interspersed with whitespace, giving the cell contents in row-major
    /// order starting with the bottom row and left column. The backtrack
    /// guard, game-over flag and history are reset: a freshly set position
    /// has nothing to undo into.
    pub fn set_pieces(
        &mut self,
        layout: &str,
        side_to_move: PieceColor,
    ) -> Result<(), ValidationError> {
        if !side_to_move.is_piece() {
            return Err(ValidationError::BadSideToMove);
        }

        let symbols: Vec<char> = layout.chars().filter(|ch| !ch.is_whitespace()).collect();
        if symbols.len() != Square::COUNT {
            return Err(ValidationError::BadLength(symbols.len()));
        }

        let mut cells = [PieceColor::Empty; Square::COUNT];
        for (cell, &symbol) in cells.iter_mut().zip(&symbols) {
            *cell = PieceColor::from_symbol(symbol).ok_or(ValidationError::BadSymbol(symbol))?;
        }

        self.cells = cells;
        self.side_to_move = side_to_move;
        self.game_over = false;
        self.history.clear();
        for stack in &mut self.visited {
            stack.clear();
        }
        Ok(())
    }

    /// The current contents of `sq`.
    #[inline(always)]
    pub fn get(&self, sq: Square) -> PieceColor {
        self.cells[sq.index()]
    }

    /// Sets the contents of `sq` directly, bypassing all move legality.
    #[inline(always)]
    fn set(&mut self, sq: Square, color: PieceColor) {
        self.cells[sq.index()] = color;
    }

    /// The color of the player who has the next move.
    #[inline(always)]
    pub fn side_to_move(&self) -> PieceColor {
        self.side_to_move
    }

    /// Whether the game is over: the side to move has no legal moves.
    ///
    /// Only becomes true once [`Board::is_move`] has observed the position
    /// to be terminal.
    #[inline(always)]
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// The moves applied to this board so far, oldest first.
    #[inline(always)]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// A read-only view of this board.
    #[inline(always)]
    pub fn view(&self) -> BoardView<'_> {
        BoardView { board: self }
    }

    /// Returns `true` iff `mv` is legal on the current board.
    ///
    /// Equivalent to membership in [`Board::get_moves`]: jumps are checked
    /// in full-chain mode (so a non-maximal capture is rejected), and steps
    /// are checked against mandatory capture, the mover's forward-only
    /// rule, and the backtrack guard.
    pub fn legal_move(&self, mv: &Move) -> bool {
        if self.game_over {
            return false;
        }
        let mover = self.side_to_move;
        if self.get(mv.from()) != mover {
            return false;
        }

        if mv.is_jump() || mv.tail().is_some() {
            return self.check_jump(mv, false);
        }

        // A step is never legal while any capture is available.
        if self.jump_possible_any() {
            return false;
        }

        let (from, to) = (mv.from(), mv.to());
        let dc = to.col() as i8 - from.col() as i8;
        let dr = to.row() as i8 - from.row() as i8;
        if dc.abs() > 1 || dr.abs() > 1 || (dc == 0 && dr == 0) {
            return false;
        }
        if dc != 0 && dr != 0 && !from.allows_diagonal() {
            return false;
        }

        // Steps may not retreat, and a piece that has reached the far row
        // has nowhere left to step at all.
        match mover {
            PieceColor::White if dr < 0 || from.index() >= WHITE_BACK_ROW => return false,
            PieceColor::Black if dr > 0 || from.index() < Square::SIDE as usize => return false,
            _ => {}
        }

        if self.visited[from.index()].contains(&(to.index() as u8)) {
            return false;
        }
        self.get(to) == PieceColor::Empty
    }

    /// Returns a list of all legal moves from the current position.
    ///
    /// If any jump is available to the mover, only (maximal) jump chains are
    /// returned. Otherwise steps are enumerated per origin square in a fixed
    /// neighbor order: the color's two forward diagonals (even-parity
    /// origins only), then right, left, and straight ahead.
    pub fn get_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        if self.game_over {
            return moves;
        }
        if self.jump_possible_any() {
            for sq in Square::iter() {
                self.jump_chains(&mut moves, sq);
            }
        } else {
            for sq in Square::iter() {
                self.step_moves(&mut moves, sq);
            }
        }
        moves
    }

    /// Returns `true` iff there is a move for the current player, recording
    /// the game as over the first time there is none.
    ///
    /// This is the sole terminal-detection mechanism; the search and the
    /// game loop learn that the game has ended by calling it.
    pub fn is_move(&mut self) -> bool {
        if self.get_moves().is_empty() {
            self.game_over = true;
            return false;
        }
        true
    }

    /// Adds all legal steps from `from` to `moves`.
    fn step_moves(&self, moves: &mut Vec<Move>, from: Square) {
        if self.get(from) != self.side_to_move {
            return;
        }
        let forward: i8 = match self.side_to_move {
            PieceColor::White => 1,
            _ => -1,
        };

        let mut directions: Vec<(i8, i8)> = Vec::with_capacity(5);
        if from.allows_diagonal() {
            if forward > 0 {
                directions.extend([(1, 1), (-1, 1)]);
            } else {
                directions.extend([(-1, -1), (1, -1)]);
            }
        }
        directions.extend([(1, 0), (-1, 0), (0, forward)]);

        for (dc, dr) in directions {
            if let Some(to) = from.offset(dc, dr) {
                let mv = Move::new(from, to);
                if self.legal_move(&mv) {
                    moves.push(mv);
                }
            }
        }
    }

    /// Finds the single jumps available to the mover's piece at `from` in
    /// the current position: one square over an adjacent opposing piece
    /// onto an empty landing square, diagonally only from even-parity
    /// origins.
    pub fn single_jumps(&self, from: Square) -> Vec<Move> {
        let mut jumps = Vec::new();
        if self.get(from) != self.side_to_move {
            return jumps;
        }
        for &(dc, dr) in jump_directions(from) {
            let Some(over) = from.offset(dc, dr) else {
                continue;
            };
            let Some(to) = from.offset(2 * dc, 2 * dr) else {
                continue;
            };
            if self.get(over) == self.side_to_move.opposite() && self.get(to) == PieceColor::Empty
            {
                jumps.push(Move::new(from, to));
            }
        }
        jumps
    }

    /// Returns `true` iff a jump is possible for the mover's piece at `from`.
    #[inline(always)]
    pub fn jump_possible(&self, from: Square) -> bool {
        !self.single_jumps(from).is_empty()
    }

    /// Returns `true` iff any jump is possible for the side to move.
    #[inline(always)]
    pub fn jump_possible_any(&self) -> bool {
        Square::iter().any(|sq| self.jump_possible(sq))
    }

    /// Adds all maximal jump chains starting at `from` to `moves`.
    ///
    /// Works a frontier of partial chains: each chain is re-simulated on a
    /// scratch copy of this board, and either extended by every single jump
    /// available from its landing square, or — when none remains — emitted.
    /// Partial chains are never emitted, so capture continues while it can.
    fn jump_chains(&self, moves: &mut Vec<Move>, from: Square) {
        let mut frontier = self.single_jumps(from);
        while let Some(chain) = frontier.pop() {
            let mut scratch = self.clone();
            scratch.apply_segments(&chain);

            let landing = chain.final_to();
            let continuations = scratch.single_jumps(landing);
            if continuations.is_empty() {
                moves.push(chain);
            } else {
                for next in continuations {
                    frontier.push(Move::join(chain.clone(), next));
                }
            }
        }
    }

    /// Replays the segments of a jump chain onto this board without any
    /// legality checking or turn bookkeeping. Scratch-board use only.
    fn apply_segments(&mut self, chain: &Move) {
        let mover = self.side_to_move;
        for seg in chain.segments() {
            self.set(seg.jumped(), PieceColor::Empty);
            self.set(seg.from(), PieceColor::Empty);
            self.set(seg.to(), mover);
        }
    }

    /// Returns `true` iff `mv` is a valid jump sequence on the current
    /// board.
    ///
    /// Every segment must leap an adjacent opposing piece onto an empty
    /// square, with the position evolving segment by segment on a scratch
    /// copy; a diagonal leap is rejected from an odd-parity origin even
    /// though it is geometrically two steps away. Unless `allow_partial`,
    /// the chain must also be maximal: its final landing square, in the
    /// resulting position, has no further single jump.
    pub fn check_jump(&self, mv: &Move, allow_partial: bool) -> bool {
        let mover = self.side_to_move;
        let mut scratch = self.clone();
        for seg in mv.segments() {
            if !scratch.check_segment(seg) {
                return false;
            }
            scratch.set(seg.jumped(), PieceColor::Empty);
            scratch.set(seg.from(), PieceColor::Empty);
            scratch.set(seg.to(), mover);
        }
        allow_partial || !scratch.jump_possible(mv.final_to())
    }

    /// Validates one jump segment against this position, ignoring any tail.
    fn check_segment(&self, seg: &Move) -> bool {
        if !seg.is_jump() {
            return false;
        }
        let (from, to) = (seg.from(), seg.to());
        if from.col() != to.col() && from.row() != to.row() && !from.allows_diagonal() {
            // An orthogonal-only square has no diagonal to leap along.
            return false;
        }
        self.get(seg.jumped()) == self.side_to_move.opposite()
            && self.get(to) == PieceColor::Empty
    }

    /// Makes the move `mv`, which must be legal (see [`Board::legal_move`]).
    ///
    /// Passing an illegal move is a contract violation: it is asserted in
    /// debug builds and leaves the board in an unspecified state otherwise.
    /// Callers validate with [`Board::legal_move`] or pick from
    /// [`Board::get_moves`] first.
    pub fn make_move(&mut self, mv: Move) {
        debug_assert!(self.legal_move(&mv), "attempted illegal move {mv}");
        let mover = self.side_to_move;

        if mv.is_jump() {
            for seg in mv.segments() {
                self.set(seg.jumped(), PieceColor::Empty);
                self.set(seg.from(), PieceColor::Empty);
                self.set(seg.to(), mover);
                // A capture changes the position irreversibly, releasing
                // the vacated and captured squares from the guard.
                self.visited[seg.jumped().index()].clear();
                self.visited[seg.from().index()].clear();
            }
        } else {
            self.set(mv.to(), mover);
            self.set(mv.from(), PieceColor::Empty);
            // The piece carries its travel record with it.
            let mut stack = std::mem::take(&mut self.visited[mv.from().index()]);
            stack.push(mv.from().index() as u8);
            self.visited[mv.to().index()] = stack;
        }

        self.history.push(mv);
        self.side_to_move = mover.opposite();
    }

    /// Undoes the last move, if any.
    ///
    /// Restores the cell contents, side to move and history to their exact
    /// state before the move. Backtrack-guard entries released by a jump
    /// are not resurrected; the guard constrains live play, not replays.
    pub fn undo(&mut self) {
        let Some(mv) = self.history.pop() else {
            return;
        };
        self.side_to_move = self.side_to_move.opposite();
        let mover = self.side_to_move;

        if mv.is_jump() {
            let segments: Vec<&Move> = mv.segments().collect();
            for seg in segments.into_iter().rev() {
                self.set(seg.to(), PieceColor::Empty);
                self.set(seg.jumped(), mover.opposite());
                self.set(seg.from(), mover);
            }
        } else {
            self.set(mv.to(), PieceColor::Empty);
            self.set(mv.from(), mover);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Board {
    /// Boards compare equal on cells, side to move and history. The
    /// backtrack guard and the sticky game-over flag are bookkeeping, not
    /// position.
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
            && self.side_to_move == other.side_to_move
            && self.history == other.history
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    /// Renders the 25 cells one row per line, highest row first, with
    /// space-separated symbols. The alternate form (`{:#}`) adds a row and
    /// column legend.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..Square::SIDE).rev() {
            if f.alternate() {
                write!(f, "{} ", row + 1)?;
            } else {
                write!(f, " ")?;
            }
            for col in 0..Square::SIDE {
                write!(f, " {}", self.get(Square::new(col, row)).symbol())?;
            }
            if row != 0 {
                writeln!(f)?;
            }
        }
        if f.alternate() {
            write!(f, "\n   a b c d e")?;
        }
        Ok(())
    }
}

/// The directions a piece on `from` could conceivably jump along.
fn jump_directions(from: Square) -> &'static [(i8, i8)] {
    const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
    const ALL: [(i8, i8); 8] = [
        (-1, 1),
        (1, 1),
        (1, -1),
        (-1, -1),
        (-1, 0),
        (0, 1),
        (1, 0),
        (0, -1),
    ];
    if from.allows_diagonal() {
        &ALL
    } else {
        &ORTHOGONAL
    }
}

/// Read-only access to a [`Board`].
///
/// Borrowed from an owning board via [`Board::view`]; exposes the query
/// half of the API only. Mutating operations simply do not exist here.
#[derive(Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
}

impl BoardView<'_> {
    /// The current contents of `sq`.
    #[inline(always)]
    pub fn get(&self, sq: Square) -> PieceColor {
        self.board.get(sq)
    }

    /// The color of the player who has the next move.
    #[inline(always)]
    pub fn side_to_move(&self) -> PieceColor {
        self.board.side_to_move()
    }

    /// Whether the game has been found to be over.
    #[inline(always)]
    pub fn game_over(&self) -> bool {
        self.board.game_over()
    }

    /// All legal moves in the current position.
    #[inline(always)]
    pub fn get_moves(&self) -> Vec<Move> {
        self.board.get_moves()
    }

    /// Whether `mv` is legal on the current board.
    #[inline(always)]
    pub fn legal_move(&self, mv: &Move) -> bool {
        self.board.legal_move(mv)
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.board, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_TEXT: &str =
        "  b b b b b\n  b b b b b\n  b b - w w\n  w w w w w\n  w w w w w";

    fn board(layout: &str, side: PieceColor) -> Board {
        let mut board = Board::new();
        board.set_pieces(layout, side).unwrap();
        board
    }

    fn mv(text: &str) -> Move {
        text.parse().unwrap()
    }

    #[test]
    fn start_position_text() {
        assert_eq!(Board::new().to_string(), START_TEXT);
    }

    #[test]
    fn start_position_has_four_moves() {
        let board = Board::new();
        assert!(!board.jump_possible_any());
        assert_eq!(board.get_moves().len(), 4);
    }

    #[test]
    fn set_pieces_rejects_bad_descriptions() {
        let mut board = Board::new();
        assert_eq!(
            board.set_pieces("----- ----- ----- ----- ----", PieceColor::White),
            Err(ValidationError::BadLength(24))
        );
        assert_eq!(
            board.set_pieces("----- ----- --x-- ----- -----", PieceColor::White),
            Err(ValidationError::BadSymbol('x'))
        );
        assert_eq!(
            board.set_pieces(INIT_LAYOUT, PieceColor::Empty),
            Err(ValidationError::BadSideToMove)
        );
    }

    #[test]
    fn set_pieces_accepts_uppercase_and_whitespace() {
        let board = board("  W W W W W\nwwwww bb-ww BBBBB bbbbb", PieceColor::Black);
        assert_eq!(board.to_string(), START_TEXT);
        assert_eq!(board.side_to_move(), PieceColor::Black);
    }

    #[test]
    fn mandatory_capture_filters_steps() {
        let board = board("----- -w--- -bbb- ----- -----", PieceColor::White);
        let moves = board.get_moves();
        assert!(moves.iter().all(Move::is_jump));
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&mv("b2-b4-d2-d4")));
    }

    #[test]
    fn jump_chains_are_maximal() {
        let board = board("----- -w--- -bb-- ----- -----", PieceColor::White);
        // b2-b4 could continue over c3; only the full chain is legal.
        assert!(!board.legal_move(&mv("b2-b4")));
        assert!(board.legal_move(&mv("b2-b4-d2")));

        // And every generated jump is non-extendable from its landing square.
        for chain in board.get_moves() {
            let mut scratch = board.clone();
            scratch.apply_segments(&chain);
            assert!(
                !scratch.jump_possible(chain.final_to()),
                "{chain} can be extended"
            );
        }
    }

    #[test]
    fn black_jumps_both_ways_from_the_middle() {
        let board = board("----- -w--- -bbb- --w-- -----", PieceColor::Black);
        assert_eq!(board.get_moves().len(), 3);
    }

    #[test]
    fn single_jump_discovery() {
        let board = board("----- -w--- -bbb- ----- -----", PieceColor::White);
        let jumps = board.single_jumps(Square::B2);
        assert_eq!(jumps.len(), 2);
        assert!(jumps.contains(&mv("b2-b4")));
        assert!(jumps.contains(&mv("b2-d4")));

        // Not the mover's piece.
        assert!(board.single_jumps(Square::C3).is_empty());
    }

    #[test]
    fn steps_may_not_backtrack() {
        let mut board = board("----- --b-- ----- -w--- -----", PieceColor::White);
        board.make_move(mv("b4-c4"));
        board.make_move(mv("c2-b2"));

        assert!(!board.legal_move(&mv("c4-b4")));
        assert!(!board.legal_move(&mv("b2-c2")));

        // Any other destination is still fine.
        assert!(board.legal_move(&mv("c4-d4")));
    }

    #[test]
    fn guard_travels_with_the_piece() {
        let mut board = board("----- --b-- ----- -w--- -----", PieceColor::White);
        board.make_move(mv("b4-c4"));
        board.make_move(mv("c2-b2"));
        board.make_move(mv("c4-d4"));
        board.make_move(mv("b2-a2"));

        // The white piece on d4 has visited both b4 and c4.
        assert!(!board.legal_move(&mv("d4-c4")));
        assert_eq!(
            board.visited[Square::D4.index()],
            vec![Square::B4.index() as u8, Square::C4.index() as u8]
        );
    }

    #[test]
    fn guard_stack_after_opening_step() {
        let mut board = Board::new();
        board.make_move(mv("c2-c3"));
        assert_eq!(board.visited[Square::C3.index()], vec![Square::C2.index() as u8]);
    }

    #[test]
    fn jumps_release_the_guard() {
        let mut board = board("--b-- b--bw ----- w---- -----", PieceColor::Black);
        board.make_move(mv("a2-a1"));
        assert_eq!(board.visited[Square::A1.index()], vec![Square::A2.index() as u8]);

        // White's jump clears the vacated and captured squares.
        board.make_move(mv("e2-c2"));
        assert!(board.visited[Square::C2.index()].is_empty());
        assert!(board.visited[Square::E2.index()].is_empty());
    }

    #[test]
    fn steps_obey_the_forward_only_rule() {
        let board = board("----- -w--- ----- -bb-- -----", PieceColor::White);
        // No piece on b3.
        assert!(!board.legal_move(&mv("b3-b4")));
        // White may not retreat.
        assert!(!board.legal_move(&mv("b2-b1")));
        // Not White's piece.
        assert!(!board.legal_move(&mv("b4-b3")));
    }

    #[test]
    fn far_row_pieces_are_frozen() {
        {
            let board = board("----- ----- ----- ----- --w--", PieceColor::White);
            assert!(!board.legal_move(&mv("c5-b5")));
            assert_eq!(board.get_moves(), vec![]);
        }
        {
            let board = board("--b-- ----- ----- ----- -----", PieceColor::Black);
            assert!(!board.legal_move(&mv("c1-d1")));
            assert_eq!(board.get_moves(), vec![]);
        }
    }

    #[test]
    fn diagonal_steps_require_even_parity() {
        // b2 (index 6) is even: diagonals allowed. c2 (index 7) is odd.
        let board = board("----- -ww-- ----- ----- -----", PieceColor::White);
        assert!(board.legal_move(&mv("b2-a3")));
        assert!(!board.legal_move(&mv("c2-b3")));
        assert!(board.legal_move(&mv("c2-c3")));
    }

    #[test]
    fn diagonal_jumps_require_even_parity() {
        // c4 (index 17) is odd; c4-a2 is a diagonal double-skip, not a jump.
        {
            let board = board("----- ----- -w--- -bb-- -----", PieceColor::Black);
            assert!(!board.legal_move(&mv("c4-a2")));
            assert!(board.legal_move(&mv("b4-b2")));
        }

        // b4 (index 16) is even and leaps the same diagonal freely.
        {
            let board = board("----- ----- --w-- -b--- -----", PieceColor::Black);
            assert!(board.legal_move(&mv("b4-d2")));
        }
    }

    #[test]
    fn partial_and_phantom_chains_are_rejected() {
        let board = board("----- ----- -w--- -b-wb -----", PieceColor::Black);
        assert!(board.legal_move(&mv("e4-c4")));
        // The continuation c4-c2 leaps an empty square.
        assert!(!board.legal_move(&mv("e4-c4-c2")));
    }

    #[test]
    fn jump_over_an_empty_square_is_illegal() {
        let board = board("----- ----- ----w --bb- bb-bb", PieceColor::White);
        assert!(!board.legal_move(&mv("e3-e5")));
    }

    #[test]
    fn non_adjacent_steps_are_illegal() {
        let board = board("w---- ----- ----- ----- -----", PieceColor::White);
        assert!(!board.legal_move(&mv("a1-d1")));
        assert!(board.legal_move(&mv("a1-b1")));
    }

    #[test]
    fn game_over_is_detected_and_sticky() {
        let mut board = board("----- -w--- --bb- ----- -----", PieceColor::White);
        assert!(board.is_move());
        let moves = board.get_moves();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0], mv("b2-d4-d2"));

        board.make_move(mv("b2-d4-d2"));
        assert_eq!(board.side_to_move(), PieceColor::Black);
        assert!(!board.is_move());
        assert!(board.game_over());

        // Terminal positions refuse every candidate.
        assert!(board.get_moves().is_empty());
        assert!(!board.legal_move(&mv("d2-d3")));
    }

    #[test]
    fn undo_restores_a_step() {
        let mut board = Board::new();
        let snapshot = board.clone();
        board.make_move(mv("c2-c3"));
        board.undo();
        assert_eq!(board, snapshot);
        assert_eq!(board.side_to_move(), PieceColor::White);
    }

    #[test]
    fn undo_restores_a_jump_chain() {
        let mut board = board("----- -w--- -bbb- ----- -----", PieceColor::White);
        let snapshot = board.clone();
        board.make_move(mv("b2-b4-d2-d4"));
        assert_eq!(board.history().len(), 1);
        board.undo();
        assert_eq!(board, snapshot);
        assert!(board.history().is_empty());
    }

    #[test]
    fn undo_on_an_empty_history_is_a_no_op() {
        let mut board = Board::new();
        let snapshot = board.clone();
        board.undo();
        assert_eq!(board, snapshot);
    }

    #[test]
    fn view_exposes_queries_only() {
        let board = Board::new();
        let view = board.view();
        assert_eq!(view.get(Square::C3), PieceColor::Empty);
        assert_eq!(view.side_to_move(), PieceColor::White);
        assert!(!view.game_over());
        assert_eq!(view.get_moves().len(), 4);
        assert!(view.legal_move(&mv("c2-c3")));
        assert_eq!(view.to_string(), board.to_string());
    }

    #[test]
    fn legend_rendering() {
        let text = format!("{:#}", Board::new());
        assert!(text.starts_with("5  b b b b b\n"));
        assert!(text.ends_with("\n   a b c d e"));
    }
}
