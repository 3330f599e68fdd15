/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    io,
    sync::mpsc::{channel, Receiver, Sender},
    thread,
};

use anyhow::{bail, Context, Result};

use crate::{evaluate, Board, EngineCommand, Move, PieceColor, Search, Square};

/// How one side's moves are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayerKind {
    /// Moves arrive as commands typed by the user.
    Manual,

    /// Moves are computed by [`Search`].
    Auto,
}

/// The Qirkat engine: the authoritative board and the command loop driving
/// a game on it.
///
/// By default White is played manually and Black by the engine, as in a
/// human-vs-machine game; `auto`/`manual` commands rearrange that freely.
#[derive(Debug)]
pub struct Engine {
    /// The current state of the game, as known to the engine.
    ///
    /// Modified when moves are played or positions are set, and reset when
    /// the engine is told to start a new game.
    board: Board,

    /// Who produces White's moves.
    white: PlayerKind,

    /// Who produces Black's moves.
    black: PlayerKind,

    /// Whether a game is in progress. Moves are only accepted while this is
    /// set; board setup commands work at any time.
    playing: bool,

    /// One half of a channel, responsible for sending commands to the
    /// engine to execute.
    sender: Sender<EngineCommand>,

    /// One half of a channel, responsible for receiving commands for the
    /// engine to execute.
    receiver: Receiver<EngineCommand>,
}

impl Engine {
    /// Constructs a new [`Engine`] instance to be executed with
    /// [`Engine::run`].
    pub fn new() -> Self {
        let (sender, receiver) = channel();

        Self {
            board: Board::new(),
            white: PlayerKind::Manual,
            black: PlayerKind::Auto,
            playing: false,
            sender,
            receiver,
        }
    }

    /// Returns a string of the engine's name and current version.
    pub fn name(&self) -> String {
        format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    /// Sends an [`EngineCommand`] to the engine to be executed.
    pub fn send_command(&self, command: EngineCommand) {
        // `send` only fails when the corresponding receiver is gone, and
        // the engine owns its receiver for as long as it exists.
        self.sender
            .send(command)
            .expect("engine command channel closed");
    }

    /// Execute the main event loop for the engine.
    ///
    /// This function spawns a thread to handle input from `stdin` and waits
    /// on received commands.
    pub fn run(&mut self) -> Result<()> {
        // Spawn a separate thread for handling user input
        let sender = self.sender.clone();
        thread::spawn(|| {
            if let Err(err) = input_handler(sender) {
                eprintln!("Input handler thread stopping after fatal error: {err}");
            }
        });

        // Loop on user input
        while let Ok(cmd) = self.receiver.recv() {
            match cmd {
                EngineCommand::Auto { color } => {
                    self.set_player(color, PlayerKind::Auto);
                    self.advance();
                }

                EngineCommand::Clear => {
                    self.board.clear();
                    self.playing = false;
                }

                EngineCommand::Display => println!("{:#}", self.board.view()),

                EngineCommand::Dump => println!("===\n{}\n===", self.board.view()),

                EngineCommand::Eval { pretty } => self.eval(pretty),

                EngineCommand::Exit => break,

                EngineCommand::Manual { color } => self.set_player(color, PlayerKind::Manual),

                EngineCommand::Move { mv } => {
                    // Keep running, even on an illegal or mistimed move
                    if let Err(e) = self.manual_move(mv) {
                        eprintln!("Error: {e}");
                    }
                }

                EngineCommand::Moves { square } => self.list_moves(square),

                EngineCommand::Set { color, layout } => {
                    let layout = layout.concat();
                    if let Err(e) = self
                        .board
                        .set_pieces(&layout, color)
                        .context("cannot set board")
                    {
                        eprintln!("Error: {e:#}");
                    }
                }

                EngineCommand::Start => {
                    self.playing = true;
                    self.advance();
                }

                EngineCommand::Undo => self.board.undo(),
            };
        }

        Ok(())
    }

    /// Records who produces `color`'s moves.
    fn set_player(&mut self, color: PieceColor, kind: PlayerKind) {
        match color {
            PieceColor::White => self.white = kind,
            PieceColor::Black => self.black = kind,
            PieceColor::Empty => unreachable!("Empty is not a playable color"),
        }
    }

    /// Who produces `color`'s moves.
    fn player(&self, color: PieceColor) -> PlayerKind {
        match color {
            PieceColor::Black => self.black,
            _ => self.white,
        }
    }

    /// Validates and applies a user-entered move, then lets automated
    /// players respond.
    fn manual_move(&mut self, mv: Move) -> Result<()> {
        if !self.playing {
            bail!("no game in progress; use 'start'");
        }
        let mover = self.board.side_to_move();
        if self.player(mover) != PlayerKind::Manual {
            bail!("{mover} is played by the engine");
        }
        if !self.board.legal_move(&mv) {
            bail!("illegal move: {mv}");
        }

        self.board.make_move(mv);
        self.advance();
        Ok(())
    }

    /// Lets automated players reply until a manual player is to move or the
    /// game ends, reporting each move and any outcome.
    fn advance(&mut self) {
        if !self.playing {
            return;
        }
        while self.board.is_move() {
            let mover = self.board.side_to_move();
            if self.player(mover) != PlayerKind::Auto {
                return;
            }

            let res = Search::new(&self.board, mover).find_move();
            // `is_move` held above, so the search always has a decision.
            let Some(mv) = res.bestmove else { return };

            println!("{mover} moves {mv}.");
            self.board.make_move(mv);
        }

        // The side to move is stuck and loses.
        let loser = self.board.side_to_move();
        println!("{} wins.", loser.opposite());
        self.playing = false;
    }

    /// Executes the `eval` command, printing a static evaluation of the
    /// current position.
    fn eval(&self, pretty: bool) {
        if pretty {
            print!("{:#}\n\nScore: ", self.board.view());
        }

        // The evaluator's terminal probe mutates, so feed it a clone.
        let mut probe = self.board.clone();
        println!("{}", evaluate(&mut probe));
    }

    /// Executes the `moves` command, listing legal moves — all of them, or
    /// only those from `square`.
    fn list_moves(&self, square: Option<Square>) {
        let moves = self.board.view().get_moves();
        let moves = moves
            .iter()
            .filter(|mv| square.map_or(true, |sq| mv.from() == sq))
            .map(Move::to_string)
            .collect::<Vec<_>>();

        // If there are none, print "(none)"
        let moves_string = if moves.is_empty() {
            String::from("(none)")
        } else {
            moves.join(", ")
        };
        println!("{moves_string}");
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Loops endlessly to await input via `stdin`, sending all
/// successfully-parsed commands through the supplied `sender`.
fn input_handler(sender: Sender<EngineCommand>) -> Result<()> {
    let mut buffer = String::with_capacity(256);

    loop {
        // Clear the buffer, read input, and trim the trailing newline
        buffer.clear();
        let bytes = io::stdin()
            .read_line(&mut buffer)
            .context("failed to read line when parsing commands")?;

        // For ctrl + d
        if 0 == bytes {
            sender
                .send(EngineCommand::Exit)
                .context("failed to send 'exit' command after receiving empty input")?;

            bail!("engine received input of 0 bytes and is quitting");
        }

        let buf = buffer.trim();

        // Ignore empty lines
        if buf.is_empty() {
            continue;
        }

        // Commands first; anything else may be bare move notation.
        match buf.parse::<EngineCommand>() {
            Ok(cmd) => sender
                .send(cmd)
                .context("failed to send command to engine")?,

            Err(err) => eprintln!("{err}"),
        }
    }
}
