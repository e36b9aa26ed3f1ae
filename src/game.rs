//! Game session.
//!
//! Owns the board, the configuration, the random source and the modal, and
//! turns front-end input into board operations. Every event runs to
//! completion before the next one is handled.

use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{deal, Board};
use crate::catalog::Quote;
use crate::config::{ConfigError, GameConfig};
use crate::protocol::Command;
use crate::rules::{move_selected, MoveRejection, Moved};
use crate::ui::{render_board, Key, ModalView, Surface, TextSurface, UiError};

/// What a key press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Moved(Moved),
    Rejected(MoveRejection),
    ModalClosed,
}

/// Mutable state of one game between events.
pub struct Game<M: ModalView> {
    config: GameConfig,
    board: Board,
    modal: M,
    rng: SmallRng,
    /// Detection passes that found a match and tried to open the modal.
    notifications: usize,
    /// Quote from the latest notification the modal accepted.
    last_quote: Option<Quote>,
}

impl<M: ModalView> Game<M> {
    /// Validates `config` and deals the first board.
    pub fn new(config: GameConfig, modal: M, mut rng: SmallRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = deal(&config.setup(), &mut rng)?;
        Ok(Game {
            config,
            board,
            modal,
            rng,
            notifications: 0,
            last_quote: None,
        })
    }

    /// Starts a game on a prepared board.
    pub fn with_board(config: GameConfig, board: Board, modal: M, rng: SmallRng) -> Self {
        Game {
            config,
            board,
            modal,
            rng,
            notifications: 0,
            last_quote: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn modal(&self) -> &M {
        &self.modal
    }

    pub fn notifications(&self) -> usize {
        self.notifications
    }

    pub fn last_quote(&self) -> Option<&Quote> {
        self.last_quote.as_ref()
    }

    /// Selects the piece under a pointer click.
    pub fn click(&mut self, x: f64, y: f64) -> Option<usize> {
        let selected = self.board.select_point(x, y, self.config.tile_size);
        log::debug!("click at ({}, {}) -> selection {:?}", x, y, selected);
        selected
    }

    /// Handles a key press. A move that completes a match opens the modal
    /// once for the whole detection pass.
    pub fn key(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Close => {
                if let Err(e) = self.modal.hide() {
                    log::error!("{}", e);
                }
                KeyOutcome::ModalClosed
            }
            Key::Arrow(dir) => match move_selected(&mut self.board, dir) {
                Ok(moved) => {
                    if moved.matches.found() {
                        self.announce_match();
                    }
                    KeyOutcome::Moved(moved)
                }
                Err(rejection) => {
                    log::debug!("move {} ignored: {}", dir.name(), rejection);
                    KeyOutcome::Rejected(rejection)
                }
            },
        }
    }

    /// Opens the modal with a random quote.
    fn announce_match(&mut self) {
        self.notifications += 1;
        self.last_quote = None;
        let Some(quote) = self.config.quotes.pick(&mut self.rng).cloned() else {
            return;
        };
        match self.modal.show(&quote) {
            Ok(()) => self.last_quote = Some(quote),
            Err(UiError::ModalMissing) => {
                log::error!("modal element not found; match notification dropped");
            }
        }
    }

    /// Deals a fresh board, clearing matches and the selection.
    pub fn shuffle(&mut self) {
        match deal(&self.config.setup(), &mut self.rng) {
            Ok(board) => {
                self.board = board;
                log::info!("board reshuffled");
            }
            Err(e) => log::error!("shuffle failed: {}", e),
        }
    }

    /// Replaces the random source and deals a fresh board from it.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
        self.shuffle();
    }

    pub fn render<S: Surface>(&self, surface: &mut S) {
        render_board(surface, &self.board, &self.config.images, self.config.tile_size);
    }

    fn write_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut surface = TextSurface::for_config(&self.config);
        self.render(&mut surface);
        writeln!(out, "board {}x{}", self.board.rows(), self.board.cols())?;
        for line in surface.lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// Dispatches one protocol command and writes the response. Returns false
    /// once the session should end.
    pub fn handle_command<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<bool> {
        match cmd {
            Command::Click { x, y } => {
                match self.click(x, y).and_then(|idx| self.board.piece(idx)) {
                    Some(piece) => writeln!(out, "selected {} {}", piece.cell.row, piece.cell.col)?,
                    None => writeln!(out, "selected none")?,
                }
                self.write_board(out)?;
            }
            Command::Key(key) => {
                match self.key(key) {
                    KeyOutcome::Moved(moved) => {
                        writeln!(
                            out,
                            "moved {} {} {} {}",
                            moved.from.row, moved.from.col, moved.to.row, moved.to.col
                        )?;
                        if moved.matches.found() {
                            writeln!(out, "match {}", moved.matches.runs.len())?;
                            if let Some(quote) = &self.last_quote {
                                writeln!(out, "quote {}", quote.text)?;
                                writeln!(out, "author {}", quote.author)?;
                            }
                        }
                    }
                    KeyOutcome::Rejected(_) => {}
                    KeyOutcome::ModalClosed => writeln!(out, "closed")?,
                }
                self.write_board(out)?;
            }
            Command::Shuffle => {
                self.shuffle();
                self.write_board(out)?;
            }
            Command::Seed(seed) => {
                self.reseed(seed);
                self.write_board(out)?;
            }
            Command::Board => self.write_board(out)?,
            Command::Quit => return Ok(false),
        }
        out.flush()?;
        Ok(true)
    }
}
