//! Emergency task
//!
//! Toggles the interlock on every emergency post.

use defmt::*;
use embassy_time::Delay;

use portcullis_core::{EmergencyMonitor, EmergencyOutcome};

use crate::channels::{ServoMutex, SharedBuzzer, BUS};
use crate::config::GATE_CONFIG;

#[embassy_executor::task]
pub async fn emergency_task(servo: &'static ServoMutex, buzzer: &'static SharedBuzzer) {
    info!("Emergency task started");

    let monitor = EmergencyMonitor::new(&BUS, servo, buzzer, Delay, &GATE_CONFIG.timing);
    monitor
        .run(|outcome| match outcome {
            EmergencyOutcome::Activated { fenced: true } => warn!("EMERGENCY ACTIVE"),
            EmergencyOutcome::Activated { fenced: false } => {
                warn!("EMERGENCY ACTIVE (servo lock not acquired within timeout)")
            }
            EmergencyOutcome::Deactivated => info!("Emergency cleared"),
        })
        .await
}
