//! Inter-task coordination: command channel, signals and shared flags
//!
//! The [`GateBus`] is the only state shared between the edge source and the
//! four application tasks:
//!
//! - `commands`: bounded FIFO of [`GateCommand`]s, edge source to actuator
//! - `emergency`: binary signal, edge source to emergency task. Several
//!   posts before one wait collapse into a single wakeup.
//! - `refresh`: binary signal, actuator to indicator, posted after every
//!   completed motion
//! - `flags`: gate position and emergency interlock
//!
//! Posting never blocks, so the edge source can run at the highest
//! priority (or in interrupt context) without waiting on any task.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Channel, TrySendError};
use embassy_sync::signal::Signal;

use crate::command::{GateCommand, InputLine};
use crate::state::GateFlags;

/// Capacity of the command channel
pub const COMMAND_QUEUE_DEPTH: usize = 10;

/// Command channel type
pub type CommandChannel<M> = Channel<M, GateCommand, COMMAND_QUEUE_DEPTH>;

/// What happened to a debounced button edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Command appended to the channel
    Queued(GateCommand),
    /// Channel full, command discarded
    Dropped(GateCommand),
    /// Emergency signal posted (coalesces with any pending post)
    EmergencyPosted,
}

/// Shared coordination primitives
///
/// Lives in a `static` on the target; tests create one per case.
pub struct GateBus<M: RawMutex> {
    commands: CommandChannel<M>,
    emergency: Signal<M, ()>,
    refresh: Signal<M, ()>,
    flags: GateFlags,
}

impl<M: RawMutex> Default for GateBus<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> GateBus<M> {
    /// Create an empty bus in the power-on state
    pub const fn new() -> Self {
        Self {
            commands: Channel::new(),
            emergency: Signal::new(),
            refresh: Signal::new(),
            flags: GateFlags::new(),
        }
    }

    /// Shared gate and emergency flags
    pub fn flags(&self) -> &GateFlags {
        &self.flags
    }

    /// Dispatch one debounced falling edge
    ///
    /// Gate buttons append their command if there is room and drop it
    /// otherwise. The emergency button posts the emergency signal. Never
    /// waits.
    pub fn on_edge(&self, line: InputLine) -> EdgeOutcome {
        match line.command() {
            Some(command) => match self.commands.try_send(command) {
                Ok(()) => EdgeOutcome::Queued(command),
                Err(TrySendError::Full(command)) => EdgeOutcome::Dropped(command),
            },
            None => {
                self.emergency.signal(());
                EdgeOutcome::EmergencyPosted
            }
        }
    }

    /// Wait for the next queued command (FIFO)
    pub async fn next_command(&self) -> GateCommand {
        self.commands.receive().await
    }

    /// Take the next queued command without waiting
    pub fn try_next_command(&self) -> Option<GateCommand> {
        self.commands.try_receive().ok()
    }

    /// Number of commands waiting in the channel
    pub fn pending_commands(&self) -> usize {
        self.commands.len()
    }

    /// Wait until the emergency signal has been posted, consuming it
    pub async fn wait_emergency(&self) {
        self.emergency.wait().await
    }

    /// Consume a pending emergency post without waiting
    pub fn take_emergency(&self) -> bool {
        self.emergency.try_take().is_some()
    }

    /// Ask the indicator to re-read the flags now
    pub fn request_refresh(&self) {
        self.refresh.signal(());
    }

    /// Wait for a refresh request, consuming it
    pub async fn wait_refresh(&self) {
        self.refresh.wait().await
    }
}
