//! Gate actuator task
//!
//! The actuator is the only consumer of the command channel and the only
//! task that moves the servo or writes the gate position. For each
//! command it:
//!
//! 1. Refuses it if the emergency interlock is active (blocked cue)
//! 2. Waits at most `lock_timeout_ms` for the servo lock, dropping the
//!    command on timeout
//! 3. Refuses it if the interlock became active while it waited, then
//!    skips it if the gate is already in the target position
//! 4. Otherwise plays the pre-move cue, steps through the motion profile,
//!    records the new position, refreshes the indicator and plays the
//!    completion cue
//!
//! The lock is held from step 2 until the move completes, so a move is
//! never interleaved with another move or with the emergency fence.

pub mod lock;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::delay::DelayNs;

use crate::bus::GateBus;
use crate::command::GateCommand;
use crate::config::GateConfig;
use crate::feedback::{Buzzer, Cue};
use crate::motion::MotionProfile;
use crate::traits::{ServoDriver, ToneOutput};

pub use lock::{lock_within, ServoLock};

/// What the actuator is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorPhase {
    /// Waiting for a command, or handling one that does not move the gate
    #[default]
    Idle,
    /// Holding the servo lock and stepping through a profile
    Moving,
}

/// Result of handling one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandOutcome {
    /// Full profile executed, gate now in the target position
    Moved { command: GateCommand, opened: bool },
    /// Gate was already in the target position
    AlreadyThere(GateCommand),
    /// Refused: emergency interlock active
    Blocked(GateCommand),
    /// Servo lock not acquired within the timeout, command dropped
    Contended(GateCommand),
}

impl CommandOutcome {
    pub fn command(&self) -> GateCommand {
        match *self {
            CommandOutcome::Moved { command, .. }
            | CommandOutcome::AlreadyThere(command)
            | CommandOutcome::Blocked(command)
            | CommandOutcome::Contended(command) => command,
        }
    }

    /// Check if the servo moved
    pub fn moved(&self) -> bool {
        matches!(self, CommandOutcome::Moved { .. })
    }
}

/// Actuator task body
pub struct Actuator<'a, M: RawMutex, S, T, D> {
    bus: &'a GateBus<M>,
    servo: &'a ServoLock<M, S>,
    buzzer: &'a Buzzer<M, T>,
    delay: D,
    profile: MotionProfile,
    lock_timeout_ms: u32,
    settle_ms: u32,
    phase: ActuatorPhase,
}

impl<'a, M, S, T, D> Actuator<'a, M, S, T, D>
where
    M: RawMutex,
    S: ServoDriver,
    T: ToneOutput,
    D: DelayNs,
{
    pub fn new(
        bus: &'a GateBus<M>,
        servo: &'a ServoLock<M, S>,
        buzzer: &'a Buzzer<M, T>,
        delay: D,
        config: &GateConfig,
    ) -> Self {
        Self {
            bus,
            servo,
            buzzer,
            delay,
            profile: config.motion,
            lock_timeout_ms: config.timing.lock_timeout_ms,
            settle_ms: config.timing.settle_ms,
            phase: ActuatorPhase::Idle,
        }
    }

    pub fn phase(&self) -> ActuatorPhase {
        self.phase
    }

    /// Drive the servo to the closed position and let it settle
    ///
    /// Runs once before the first command. The gate position is unknown at
    /// power-on, so the servo is commanded unconditionally.
    pub async fn home(&mut self) {
        let mut servo = self.servo.lock().await;
        servo.set_angle(self.profile.rest_angle(false));
        self.bus.flags().store_open(false);
        self.bus.request_refresh();
        self.delay.delay_ms(self.settle_ms).await;
    }

    /// Handle one command taken from the channel
    pub async fn handle(&mut self, command: GateCommand) -> CommandOutcome {
        if self.bus.flags().emergency_active() {
            self.buzzer.play(Cue::Blocked, &mut self.delay).await;
            return CommandOutcome::Blocked(command);
        }

        let servo_lock = self.servo;
        let Some(mut servo) = lock_within(servo_lock, &mut self.delay, self.lock_timeout_ms).await
        else {
            return CommandOutcome::Contended(command);
        };

        // The emergency may have fenced and released while this task waited
        let flags = self.bus.flags();
        if flags.emergency_active() {
            drop(servo);
            self.buzzer.play(Cue::Blocked, &mut self.delay).await;
            return CommandOutcome::Blocked(command);
        }

        if !command.changes(flags.is_open()) {
            self.buzzer.play(Cue::AlreadyThere, &mut self.delay).await;
            return CommandOutcome::AlreadyThere(command);
        }

        self.phase = ActuatorPhase::Moving;
        self.buzzer.play(Cue::PreMove, &mut self.delay).await;

        for (step, angle) in self.profile.waypoints(command).into_iter().enumerate() {
            if step > 0 {
                self.delay.delay_ms(self.profile.step_interval_ms).await;
            }
            servo.set_angle(angle);
        }

        let opened = command.target_open();
        flags.store_open(opened);
        self.bus.request_refresh();
        self.buzzer.play(Cue::completion(command), &mut self.delay).await;

        drop(servo);
        self.phase = ActuatorPhase::Idle;

        CommandOutcome::Moved { command, opened }
    }

    /// Home, then handle commands forever, reporting each outcome
    pub async fn run(mut self, mut report: impl FnMut(CommandOutcome)) -> ! {
        self.home().await;
        loop {
            let command = self.bus.next_command().await;
            let outcome = self.handle(command).await;
            report(outcome);
        }
    }
}
