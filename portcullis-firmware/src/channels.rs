//! Inter-task communication
//!
//! The gate bus (command channel, emergency and refresh signals, shared
//! flags) and the types of the two peripherals shared between tasks.

use embassy_rp::pwm::PwmOutput;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use portcullis_core::actuator::ServoLock;
use portcullis_core::feedback::Buzzer;
use portcullis_core::GateBus;
use portcullis_drivers::PwmServo;
use portcullis_hal_rp2040::PwmBuzzer;

/// Coordination primitives shared by every task on both cores
pub static BUS: GateBus<CriticalSectionRawMutex> = GateBus::new();

/// Servo on PWM slice 7, channel B
pub type GateServo = PwmServo<PwmOutput<'static>>;

/// Servo guarded by the actuator lock
pub type ServoMutex = ServoLock<CriticalSectionRawMutex, GateServo>;

/// Buzzer shared by the actuator, emergency and alert tasks
pub type SharedBuzzer = Buzzer<CriticalSectionRawMutex, PwmBuzzer<'static>>;
