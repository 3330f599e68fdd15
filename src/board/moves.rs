/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use super::{ParseError, Square};

/// Represents a move made on a Qirkat board.
///
/// A move is either a single step to an adjacent square, a single jump over
/// an opposing piece, or a chain of jumps performed as one turn. Chains are
/// a singly-linked sequence of jump segments: each [`Move`] holds `from` and
/// `to` for its own segment plus an optional `tail` for the rest of the
/// turn, terminating at a segment with no tail.
///
/// Moves are immutable once constructed, and chains are contiguous by
/// construction: a tail always starts where its head lands.
///
/// The text notation joins coordinates with `-`: two coordinates are a step
/// or a single jump (disambiguated by distance), three or more are a jump
/// chain.
///
/// # Example
/// ```
/// # use qirkat::Move;
/// let mv: Move = "a3-a5-c3".parse().unwrap();
/// assert!(mv.is_jump());
/// assert_eq!(mv.to_string(), "a3-a5-c3");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    tail: Option<Box<Move>>,
}

impl Move {
    /// Creates a new single-segment [`Move`] from `from` to `to`.
    ///
    /// # Example
    /// ```
    /// # use qirkat::{Move, Square};
    /// let mv = Move::new(Square::C2, Square::C3);
    /// assert_eq!(mv.to_string(), "c2-c3");
    /// assert!(!mv.is_jump());
    /// ```
    #[inline(always)]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            tail: None,
        }
    }

    /// Creates a new [`Move`] whose turn continues with `tail` after landing
    /// on `to`.
    #[inline(always)]
    pub fn chained(from: Square, to: Square, tail: Move) -> Self {
        debug_assert_eq!(to, tail.from, "jump chains must be contiguous");
        Self {
            from,
            to,
            tail: Some(Box::new(tail)),
        }
    }

    /// Appends the chain `tail` to the end of the chain `head`.
    ///
    /// Used by move generation to extend a partial jump chain by one more
    /// discovered segment.
    pub fn join(head: Self, tail: Self) -> Self {
        let Self {
            from,
            to,
            tail: next,
        } = head;
        match next {
            Some(next) => Self::chained(from, to, Self::join(*next, tail)),
            None => Self::chained(from, to, tail),
        }
    }

    /// The square this move's first segment starts from.
    #[inline(always)]
    pub const fn from(&self) -> Square {
        self.from
    }

    /// The square this move's first segment lands on.
    #[inline(always)]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// The remaining segments of this turn, if any.
    #[inline(always)]
    pub fn tail(&self) -> Option<&Move> {
        self.tail.as_deref()
    }

    /// Iterates over the segments of this move, head first.
    pub fn segments(&self) -> impl Iterator<Item = &Move> {
        std::iter::successors(Some(self), |seg| seg.tail())
    }

    /// The landing square of the final segment of this turn.
    pub fn final_to(&self) -> Square {
        let mut last = self;
        while let Some(next) = last.tail() {
            last = next;
        }
        last.to
    }

    /// Whether this move's first segment is a jump: exactly two lattice
    /// steps apart orthogonally or diagonally.
    ///
    /// This is a purely geometric predicate; whether a diagonal two-step is
    /// actually playable from `from` (odd-parity squares have no diagonals)
    /// is the board's concern.
    ///
    /// # Example
    /// ```
    /// # use qirkat::Move;
    /// assert!(!"a3-b2".parse::<Move>().unwrap().is_jump());
    /// assert!("a3-a5".parse::<Move>().unwrap().is_jump());
    /// ```
    #[inline(always)]
    pub fn is_jump(&self) -> bool {
        let dc = self.from.col().abs_diff(self.to.col());
        let dr = self.from.row().abs_diff(self.to.row());
        matches!((dc, dr), (2, 0) | (0, 2) | (2, 2))
    }

    /// The square jumped over by this move's first segment: the midpoint
    /// between `from` and `to`. Only meaningful when [`Move::is_jump`].
    #[inline(always)]
    pub fn jumped(&self) -> Square {
        debug_assert!(self.is_jump(), "{self} has no jumped square");
        // Both coordinate deltas are even, so the midpoint is on the lattice.
        Square::new(
            (self.from.col() + self.to.col()) / 2,
            (self.from.row() + self.to.row()) / 2,
        )
    }

    /// Whether this move is a single step to the left.
    #[inline(always)]
    pub fn is_left_move(&self) -> bool {
        self.from.row() == self.to.row() && self.from.col() == self.to.col() + 1
    }
}

impl FromStr for Move {
    type Err = ParseError;

    /// Parses a move from `-`-joined coordinates, e.g. `"c2-c3"` or
    /// `"a3-a5-c3"`. Fails with a [`ParseError`] on malformed coordinates
    /// or fewer than two of them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .trim()
            .split('-')
            .map(|part| part.trim().parse::<Square>())
            .collect::<Result<Vec<_>, _>>()?;

        if squares.len() < 2 {
            return Err(ParseError::TooFewSquares);
        }

        // Build the chain back to front so each head can own its tail.
        let mut mv = Self::new(squares[squares.len() - 2], squares[squares.len() - 1]);
        for i in (0..squares.len() - 2).rev() {
            mv = Self::chained(squares[i], squares[i + 1], mv);
        }
        Ok(mv)
    }
}

impl fmt::Display for Move {
    /// Formats the move in its text notation; the exact inverse of parsing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.from)?;
        for seg in self.segments() {
            write!(f, "-{}", seg.to)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_jump() { "jump" } else { "step" };
        write!(f, "{self} ({kind})")
    }
}
