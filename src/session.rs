//! Game session: turn alternation and the start/pause/quit lifecycle.
//!
//! [`GameSession`] is the only entry point for external commands. Each
//! command runs to completion against a checkpoint of the session; if it
//! fails the checkpoint is restored, so the board and the reported lifecycle
//! never disagree.

extern crate alloc;

use alloc::{boxed::Box, format, string::String, vec::Vec};
use core::fmt;

use crate::{
    board::Board,
    common::{BoardError, Cell, Player},
    config::NUM_CELLS,
    sink::{LogSink, StatusSink},
};

pub const STATUS_IDLE: &str = "Press start to play";
pub const STATUS_STARTED: &str = "Game started";
pub const STATUS_RESUMED: &str = "Game resumed";
pub const STATUS_PAUSED: &str = "Game paused";
pub const STATUS_QUIT: &str = "Game quit";
pub const STATUS_DRAW: &str = "It's a draw!";
/// Shown in place of the details of an internal fault.
pub const STATUS_FAILURE: &str = "Something went wrong. Please try again.";

/// Lifecycle of a session. Finished games return to `Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum LifecycleState {
    Stopped,
    Running,
    Paused,
}

/// External commands accepted by [`GameSession::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    /// Quit, with the user's answer to the confirmation prompt.
    Quit { confirmed: bool },
    CellClick(usize),
}

/// How a dispatched command was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command changed the session and published a status.
    Applied,
    /// The command does not apply in the current state; nothing changed.
    Ignored,
    /// The move was invalid; the status carries the reason.
    Rejected(BoardError),
    /// An internal fault occurred; the session was rolled back.
    Faulted,
}

/// Everything a presentation layer needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub cells: [Cell; NUM_CELLS],
    pub current_player: Player,
    pub state: LifecycleState,
    pub status: String,
}

/// Why a command did not complete. Only errors from `Board::make_move` are
/// rejections; everything else, sink errors included, is a fault.
enum Failure {
    Rejected(BoardError),
    Fault(anyhow::Error),
}

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        Failure::Fault(err)
    }
}

struct Checkpoint {
    board: Board,
    current: Player,
    state: LifecycleState,
    status: String,
}

pub struct GameSession {
    board: Board,
    current: Player,
    state: LifecycleState,
    status: String,
    sinks: Vec<Box<dyn StatusSink>>,
}

impl GameSession {
    /// Create a stopped session with an empty board. Status messages are
    /// forwarded to the `log` facade.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::First,
            state: LifecycleState::Stopped,
            status: String::from(STATUS_IDLE),
            sinks: alloc::vec![Box::new(LogSink) as Box<dyn StatusSink>],
        }
    }

    /// Register an additional observer for status messages.
    pub fn subscribe(&mut self, sink: Box<dyn StatusSink>) {
        self.sinks.push(sink);
    }

    pub fn with_sink(mut self, sink: Box<dyn StatusSink>) -> Self {
        self.subscribe(sink);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cells(&self) -> [Cell; NUM_CELLS] {
        self.board.cells()
    }

    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.board.cell(index)
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.board.cells(),
            current_player: self.current,
            state: self.state,
            status: self.status.clone(),
        }
    }

    pub fn start(&mut self) -> CommandOutcome {
        self.dispatch(Command::Start)
    }

    pub fn pause(&mut self) -> CommandOutcome {
        self.dispatch(Command::Pause)
    }

    /// Quit the current game. The caller obtains `confirmed` from the user.
    pub fn quit(&mut self, confirmed: bool) -> CommandOutcome {
        self.dispatch(Command::Quit { confirmed })
    }

    pub fn cell_click(&mut self, index: usize) -> CommandOutcome {
        self.dispatch(Command::CellClick(index))
    }

    /// Run a single command to completion.
    ///
    /// Invalid moves leave the session untouched and report the reason as the
    /// status. Any other failure is logged, reported with a generic status,
    /// and the session is restored to the state it held before the command.
    pub fn dispatch(&mut self, command: Command) -> CommandOutcome {
        let checkpoint = self.checkpoint();
        let failure = match self.apply(command) {
            Ok(outcome) => return outcome,
            Err(failure) => failure,
        };
        self.restore(checkpoint);
        match failure {
            Failure::Rejected(reason) => {
                log::warn!("rejected {:?}: {}", command, reason);
                match self.emit(format!("{}", reason)) {
                    Ok(()) => CommandOutcome::Rejected(reason),
                    Err(sink_err) => self.fault(command, sink_err),
                }
            }
            Failure::Fault(err) => self.fault(command, err),
        }
    }

    fn apply(&mut self, command: Command) -> Result<CommandOutcome, Failure> {
        use LifecycleState::*;
        match (command, self.state) {
            (Command::Start, Stopped) => {
                self.board.reset();
                self.current = Player::First;
                self.state = Running;
                self.emit(String::from(STATUS_STARTED))?;
            }
            (Command::Start, Paused) => {
                self.state = Running;
                self.emit(String::from(STATUS_RESUMED))?;
            }
            (Command::Pause, Running) => {
                self.state = Paused;
                self.emit(String::from(STATUS_PAUSED))?;
            }
            (Command::Quit { confirmed: true }, _) => {
                self.board.reset();
                self.current = Player::First;
                self.state = Stopped;
                self.emit(String::from(STATUS_QUIT))?;
            }
            (Command::CellClick(index), Running) => self.play(index)?,
            (command, state) => {
                log::debug!("ignoring {:?} while {:?}", command, state);
                return Ok(CommandOutcome::Ignored);
            }
        }
        Ok(CommandOutcome::Applied)
    }

    fn play(&mut self, index: usize) -> Result<(), Failure> {
        if self.board.check_winner() || self.board.is_full() {
            return Err(Failure::Fault(anyhow::anyhow!(
                "session is running on a finished board:\n{}",
                self.board
            )));
        }
        let mover = self.current;
        self.board
            .make_move(index, mover)
            .map_err(Failure::Rejected)?;

        if self.board.check_winner() {
            self.state = LifecycleState::Stopped;
            self.emit(format!("Player {} wins!", mover))?;
        } else if self.board.is_full() {
            self.state = LifecycleState::Stopped;
            self.emit(String::from(STATUS_DRAW))?;
        } else {
            self.current = mover.other();
            self.emit(format!("Player {}'s turn", self.current))?;
        }
        Ok(())
    }

    fn emit(&mut self, status: String) -> anyhow::Result<()> {
        self.status = status;
        for sink in self.sinks.iter_mut() {
            sink.on_status(&self.status)?;
        }
        Ok(())
    }

    fn fault(&mut self, command: Command, err: anyhow::Error) -> CommandOutcome {
        log::error!("internal fault while handling {:?}: {:?}", command, err);
        self.status = String::from(STATUS_FAILURE);
        for sink in self.sinks.iter_mut() {
            if let Err(e) = sink.on_status(&self.status) {
                log::error!("status sink failed while reporting a fault: {:?}", e);
            }
        }
        CommandOutcome::Faulted
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            board: self.board,
            current: self.current,
            state: self.state,
            status: self.status.clone(),
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.board = checkpoint.board;
        self.current = checkpoint.current;
        self.state = checkpoint.state;
        self.status = checkpoint.status;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("current", &self.current)
            .field("state", &self.state)
            .field("status", &self.status)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
