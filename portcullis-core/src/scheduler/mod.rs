//! Task placement
//!
//! Maps each task to a core, an executor and a priority rank.
//!
//! | Task      | Core | Rank | Executor                   |
//! |-----------|------|------|----------------------------|
//! | Edge      | 0    | 5    | interrupt, `SWI_IRQ_1`     |
//! | Emergency | 1    | 4    | thread                     |
//! | Actuator  | 0    | 3    | thread                     |
//! | Alert     | 0    | 2    | thread                     |
//! | Indicator | 1    | 1    | thread                     |
//!
//! An interrupt executor preempts the thread executor on its core. Tasks
//! sharing a thread executor are polled cooperatively, higher rank first
//! in spawn order; none of them blocks between awaits.
//!
//! Only the edge source runs on an interrupt executor. Its wakers fire on
//! core 0 (GPIO and timer interrupts). The other tasks are woken from
//! both cores, and an interrupt executor's pender only pends its IRQ on
//! the core that calls it, so they live on thread executors, which are
//! woken with `SEV` on both cores.
//!
//! The firmware checks its executor wiring against this table at compile
//! time.

pub mod placement;

pub use placement::{CoreId, ExecutorKind, Placement, TaskId};
