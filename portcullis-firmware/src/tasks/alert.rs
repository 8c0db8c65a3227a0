//! Alert task

use defmt::*;
use embassy_time::Delay;

use portcullis_core::feedback::Alert;

use crate::channels::{SharedBuzzer, BUS};
use crate::config::GATE_CONFIG;

/// Alert task - startup chirp, then the alarm while the emergency is active
#[embassy_executor::task]
pub async fn alert_task(buzzer: &'static SharedBuzzer) {
    info!("Alert task started");

    Alert::new(&BUS, buzzer, Delay, &GATE_CONFIG.timing)
        .run()
        .await
}
