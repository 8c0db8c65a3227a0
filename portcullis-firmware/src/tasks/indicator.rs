//! Indicator task

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::Delay;

use portcullis_core::feedback::Indicator;
use portcullis_drivers::LedPair;

use crate::channels::BUS;
use crate::config::GATE_CONFIG;

/// Indicator task - mirrors gate position and emergency state on the LEDs
#[embassy_executor::task]
pub async fn indicator_task(leds: LedPair<Output<'static>, Output<'static>>) {
    info!("Indicator task started");

    Indicator::new(&BUS, leds, Delay, &GATE_CONFIG.timing)
        .run()
        .await
}
