/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::str::FromStr;

use clap::{builder::PossibleValue, Parser, ValueEnum};

use crate::{Move, PieceColor, Square};

/// A command to be sent to the engine.
#[derive(Debug, Clone, Parser)]
#[command(
    multicall = true,
    about,
    rename_all = "lower",
    override_usage("<COMMAND> | <MOVE>")
)]
pub enum EngineCommand {
    /// Let the engine play `color`'s moves automatically.
    Auto {
        /// The color to hand over to the engine.
        color: PieceColor,
    },

    /// Reset the board to the starting position and stop play.
    Clear,

    /// Print the current board with a row/column legend.
    #[command(alias = "d")]
    Display,

    /// Print the raw board between `===` fences.
    Dump,

    /// Print the static evaluation of the current position.
    Eval {
        /// If set, the board is printed alongside the score.
        #[arg(short, long, default_value = "false")]
        pretty: bool,
    },

    /// Quit the engine.
    #[command(alias = "quit")]
    Exit,

    /// Take manual control of `color`'s moves.
    Manual {
        /// The color to play by hand.
        color: PieceColor,
    },

    /// Apply a move to the current game, if it is legal.
    ///
    /// Bare move notation (e.g. `c2-c3` or `a3-a5-c3`) is also accepted
    /// without the leading `move`.
    #[command(alias = "mv")]
    Move { mv: Move },

    /// Show all legal moves in the current position, or from one square.
    Moves { square: Option<Square> },

    /// Set the board and the side to move.
    ///
    /// The layout is 25 squares over `w`, `b` and `-`, bottom row first,
    /// and may be split across several arguments.
    Set {
        /// The color that moves next.
        color: PieceColor,

        /// Board layout, e.g. `wwwww wwwww bb-ww bbbbb bbbbb`.
        #[arg(required = true)]
        layout: Vec<String>,
    },

    /// Begin play from the current position.
    Start,

    /// Retract the most recently played move.
    Undo,
}

impl FromStr for EngineCommand {
    type Err = clap::Error;

    /// Attempt to parse an [`EngineCommand`] from a string.
    ///
    /// If this fails, the string is tried as bare move notation and, on
    /// success, becomes a [`EngineCommand::Move`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::try_parse_from(s.split_ascii_whitespace()) {
            Ok(cmd) => Ok(cmd),
            Err(e) => {
                if let Ok(mv) = s.trim().parse::<Move>() {
                    Ok(Self::Move { mv })
                } else {
                    Err(e)
                }
            }
        }
    }
}

impl ValueEnum for PieceColor {
    fn value_variants<'a>() -> &'a [Self] {
        &[PieceColor::White, PieceColor::Black]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            PieceColor::White => Some(PossibleValue::new("white").alias("w")),
            PieceColor::Black => Some(PossibleValue::new("black").alias("b")),
            // Not a playable color, so not a command-line value.
            PieceColor::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_aliases() {
        assert!(matches!(
            "start".parse::<EngineCommand>(),
            Ok(EngineCommand::Start)
        ));
        assert!(matches!(
            "d".parse::<EngineCommand>(),
            Ok(EngineCommand::Display)
        ));
        assert!(matches!(
            "auto black".parse::<EngineCommand>(),
            Ok(EngineCommand::Auto {
                color: PieceColor::Black
            })
        ));
    }

    #[test]
    fn bare_moves_parse_as_move_commands() {
        let cmd = "a3-a5-c3".parse::<EngineCommand>().unwrap();
        let EngineCommand::Move { mv } = cmd else {
            panic!("expected a move command");
        };
        assert_eq!(mv.to_string(), "a3-a5-c3");
    }

    #[test]
    fn set_collects_a_split_layout() {
        let cmd = "set white wwwww wwwww bb-ww bbbbb bbbbb"
            .parse::<EngineCommand>()
            .unwrap();
        let EngineCommand::Set { color, layout } = cmd else {
            panic!("expected a set command");
        };
        assert_eq!(color, PieceColor::White);
        assert_eq!(layout.concat().len(), 25);
    }

    #[test]
    fn gibberish_is_rejected() {
        assert!("flarb".parse::<EngineCommand>().is_err());
        assert!("a9-b9".parse::<EngineCommand>().is_err());
    }
}
