//! Actuator task
//!
//! Homes the gate, then consumes commands forever.

use defmt::*;
use embassy_time::Delay;

use portcullis_core::{Actuator, CommandOutcome};

use crate::channels::{ServoMutex, SharedBuzzer, BUS};
use crate::config::GATE_CONFIG;

#[embassy_executor::task]
pub async fn actuator_task(servo: &'static ServoMutex, buzzer: &'static SharedBuzzer) {
    info!("Actuator task started");

    let actuator = Actuator::new(&BUS, servo, buzzer, Delay, &GATE_CONFIG);
    actuator
        .run(|outcome| match outcome {
            CommandOutcome::Moved { command, opened } => {
                info!("{} complete, gate open={}", command, opened)
            }
            CommandOutcome::AlreadyThere(command) => info!("{} ignored, already there", command),
            CommandOutcome::Blocked(command) => warn!("{} refused, emergency active", command),
            CommandOutcome::Contended(command) => warn!("{} dropped, servo busy", command),
        })
        .await
}
