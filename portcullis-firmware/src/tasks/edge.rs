//! Button edge source
//!
//! One task instance per input line. Each press is dispatched to the bus
//! on its falling edge; the line re-arms once the button has been released
//! and stayed high for the debounce window.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Delay;

use portcullis_core::{EdgeOutcome, EdgeWatcher, InputLine};

use crate::channels::BUS;
use crate::config::GATE_CONFIG;

/// Edge task - dispatches debounced button presses
#[embassy_executor::task(pool_size = 3)]
pub async fn edge_task(button: Input<'static>, line: InputLine) {
    info!("Edge task started for {} button", line);

    let watcher = EdgeWatcher::new(&BUS, line, button, Delay, &GATE_CONFIG.timing);

    watcher
        .run(|line, outcome| match outcome {
            EdgeOutcome::Queued(command) => debug!("{} queued", command),
            EdgeOutcome::Dropped(command) => warn!(
                "Command channel full ({} pending), {} dropped",
                BUS.pending_commands(),
                command
            ),
            EdgeOutcome::EmergencyPosted => info!("{} button pressed", line),
        })
        .await
}
