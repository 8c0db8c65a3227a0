//! Shared harness for the integration tests
//!
//! A [`Rig`] owns one bus plus the shared peripherals, backed by the
//! crate's recording doubles.

#![allow(dead_code)]

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;

use portcullis_core::actuator::ServoLock;
use portcullis_core::feedback::{Buzzer, Indicator};
use portcullis_core::testing::{RecordingLeds, RecordingServo, RecordingTone, VirtualDelay};
use portcullis_core::{
    Actuator, CommandOutcome, EdgeOutcome, EmergencyMonitor, EmergencyOutcome, GateBus,
    GateConfig, InputLine,
};

pub type Raw = CriticalSectionRawMutex;

pub type TestActuator<'a> = Actuator<'a, Raw, RecordingServo, RecordingTone, VirtualDelay>;
pub type TestMonitor<'a> = EmergencyMonitor<'a, Raw, RecordingServo, RecordingTone, VirtualDelay>;
pub type TestIndicator<'a> = Indicator<'a, Raw, RecordingLeds, VirtualDelay>;

/// One gate controller's shared state
pub struct Rig {
    pub bus: GateBus<Raw>,
    pub servo: ServoLock<Raw, RecordingServo>,
    pub buzzer: Buzzer<Raw, RecordingTone>,
    pub config: GateConfig,
}

impl Rig {
    pub fn new() -> Self {
        Self {
            bus: GateBus::new(),
            servo: Mutex::new(RecordingServo::default()),
            buzzer: Buzzer::new(RecordingTone::default()),
            config: GateConfig::new(),
        }
    }

    pub fn actuator(&self) -> TestActuator<'_> {
        Actuator::new(
            &self.bus,
            &self.servo,
            &self.buzzer,
            VirtualDelay::new(),
            &self.config,
        )
    }

    pub fn monitor(&self) -> TestMonitor<'_> {
        EmergencyMonitor::new(
            &self.bus,
            &self.servo,
            &self.buzzer,
            VirtualDelay::new(),
            &self.config.timing,
        )
    }

    pub fn indicator(&self) -> TestIndicator<'_> {
        Indicator::new(
            &self.bus,
            RecordingLeds::default(),
            VirtualDelay::new(),
            &self.config.timing,
        )
    }

    pub fn press(&self, line: InputLine) -> EdgeOutcome {
        self.bus.on_edge(line)
    }

    /// Servo angles written so far (lock must be free)
    pub fn angles(&self) -> Vec<u8> {
        self.servo
            .try_lock()
            .map(|servo| servo.angles.clone())
            .expect("servo lock held")
    }

    pub fn tones(&self) -> Vec<u32> {
        self.buzzer.with(|out| out.started())
    }

    pub fn clear_tones(&self) {
        self.buzzer.with(|out| out.clear());
    }
}

/// Outcomes of one [`drain`]
#[derive(Debug, Default)]
pub struct Drained {
    pub emergencies: Vec<EmergencyOutcome>,
    pub commands: Vec<CommandOutcome>,
}

/// Run the emergency and actuator tasks until no work is pending
///
/// A pending emergency post is always handled before the next command,
/// mirroring the emergency task's higher rank.
pub async fn drain(rig: &Rig, actuator: &mut TestActuator<'_>, monitor: &mut TestMonitor<'_>) -> Drained {
    let mut drained = Drained::default();
    loop {
        if rig.bus.take_emergency() {
            drained.emergencies.push(monitor.handle().await);
        } else if let Some(command) = rig.bus.try_next_command() {
            drained.commands.push(actuator.handle(command).await);
        } else {
            return drained;
        }
    }
}

/// Check that servo writes form whole, alternating profiles
///
/// Returns the number of profiles.
pub fn assert_whole_profiles(angles: &[u8]) -> usize {
    assert_eq!(angles.len() % 3, 0, "partial profile in {:?}", angles);
    let mut expect_open = true;
    for chunk in angles.chunks(3) {
        let expected: &[u8] = if expect_open { &[0, 45, 90] } else { &[90, 45, 0] };
        assert_eq!(chunk, expected, "interleaved or reversed profile in {:?}", angles);
        expect_open = !expect_open;
    }
    angles.len() / 3
}
