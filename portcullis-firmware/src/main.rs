//! Portcullis - Gate Controller Firmware
//!
//! Main firmware binary for RP2040-based gate controllers. Three buttons
//! (OPEN, CLOSE, EMERGENCY) drive a servo-actuated gate through a bounded
//! command queue, with an emergency interlock, position LEDs and audible
//! cues.
//!
//! Core 0 runs the edge source on a software-interrupt executor and the
//! actuator and alert tasks in thread mode. Core 1 runs the emergency and
//! indicator tasks in thread mode.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{Executor, InterruptExecutor};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::multicore::{spawn_core1, Stack};
use embassy_rp::pwm::Pwm;
use embassy_sync::mutex::Mutex;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use portcullis_core::feedback::Buzzer;
use portcullis_core::scheduler::{CoreId, ExecutorKind, TaskId};
use portcullis_core::InputLine;
use portcullis_drivers::{LedPair, PwmServo};
use portcullis_hal_rp2040::pwm::frame_config;
use portcullis_hal_rp2040::{pins, PwmBuzzer};

mod channels;
mod config;
mod tasks;

use channels::{ServoMutex, SharedBuzzer};
use config::GATE_CONFIG;

/// Core 1 stack size in bytes
const CORE1_STACK_SIZE: usize = 4096;

// Executor wiring below must match the placement table
const _: () = {
    core::assert!(matches!(TaskId::Edge.placement().core, CoreId::Core0));
    core::assert!(matches!(
        TaskId::Edge.placement().executor,
        ExecutorKind::Interrupt
    ));
    core::assert!(matches!(TaskId::Actuator.placement().core, CoreId::Core0));
    core::assert!(matches!(TaskId::Alert.placement().core, CoreId::Core0));
    core::assert!(matches!(TaskId::Emergency.placement().core, CoreId::Core1));
    core::assert!(matches!(TaskId::Indicator.placement().core, CoreId::Core1));
    core::assert!(TaskId::Edge.preempts(TaskId::Actuator));
    core::assert!(!TaskId::Edge.preempts(TaskId::Emergency));
    core::assert!(TaskId::Emergency.outranks(TaskId::Actuator));
    core::assert!(TaskId::Actuator.outranks(TaskId::Alert));
    core::assert!(TaskId::Emergency.outranks(TaskId::Indicator));
};

static mut CORE1_STACK: Stack<CORE1_STACK_SIZE> = Stack::new();
static EXECUTOR0: StaticCell<Executor> = StaticCell::new();
static EXECUTOR1: StaticCell<Executor> = StaticCell::new();

/// Edge source executor (core 0, preempts thread mode)
static EXECUTOR_EDGE: InterruptExecutor = InterruptExecutor::new();

// Shared peripherals (must live forever for task references)
static SERVO: StaticCell<ServoMutex> = StaticCell::new();
static BUZZER: StaticCell<SharedBuzzer> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_EDGE.on_interrupt()
}

/// Main entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    info!("Portcullis firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = &GATE_CONFIG;
    info!(
        "Motion profile: {}/{}/{} deg, {} ms per step",
        config.motion.closed_deg,
        config.motion.intermediate_deg,
        config.motion.open_deg,
        config.motion.step_interval_ms
    );

    // Servo on slice 7 channel B at the calibrated frame rate
    let servo_pwm = Pwm::new_output_b(
        p.PWM_SLICE7,
        p.PIN_15,
        frame_config(config.servo.frequency_hz),
    );
    let (_, servo_channel) = servo_pwm.split();
    let servo = PwmServo::new(unwrap!(servo_channel), config.servo);
    let servo: &'static ServoMutex = SERVO.init(Mutex::new(servo));
    info!("Servo on GPIO{} at {} Hz", pins::SERVO, config.servo.frequency_hz);

    // Buzzer on slice 1 channel A, silent until the first cue
    let buzzer_pwm = Pwm::new_output_a(p.PWM_SLICE1, p.PIN_18, Default::default());
    let buzzer: &'static SharedBuzzer = BUZZER.init(Buzzer::new(PwmBuzzer::new(buzzer_pwm)));
    info!("Buzzer on GPIO{}", pins::BUZZER);

    // Position LEDs, both off until the indicator's first cycle
    let leds = LedPair::new_active_high(
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_4, Level::Low),
    );
    info!("LEDs on GPIO{} (open) and GPIO{} (closed)", pins::LED_OPEN, pins::LED_CLOSED);

    // Buttons pull low when pressed
    let buttons = [
        (Input::new(p.PIN_12, Pull::Up), InputLine::Open),
        (Input::new(p.PIN_13, Pull::Up), InputLine::Close),
        (Input::new(p.PIN_14, Pull::Up), InputLine::Emergency),
    ];
    info!(
        "Buttons: OPEN=GPIO{} CLOSE=GPIO{} EMERGENCY=GPIO{}",
        pins::BUTTON_OPEN,
        pins::BUTTON_CLOSE,
        pins::BUTTON_EMERGENCY
    );

    // Core 1: emergency and indicator
    spawn_core1(
        p.CORE1,
        unsafe { &mut *core::ptr::addr_of_mut!(CORE1_STACK) },
        move || {
            let executor1 = EXECUTOR1.init(Executor::new());
            executor1.run(|spawner| {
                spawner.spawn(tasks::emergency_task(servo, buzzer)).unwrap();
                spawner.spawn(tasks::indicator_task(leds)).unwrap();
            });
        },
    );

    // Core 0, interrupt level: edge source
    interrupt::SWI_IRQ_1.set_priority(Priority::P1);
    let edge_spawner = EXECUTOR_EDGE.start(interrupt::SWI_IRQ_1);
    for (button, line) in buttons {
        edge_spawner.spawn(tasks::edge_task(button, line)).unwrap();
    }

    // Core 0, thread mode: actuator and alert
    let executor0 = EXECUTOR0.init(Executor::new());
    executor0.run(|spawner| {
        spawner.spawn(tasks::actuator_task(servo, buzzer)).unwrap();
        spawner.spawn(tasks::alert_task(buzzer)).unwrap();
    });
}
