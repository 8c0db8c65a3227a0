//! Servo lock with a bounded wait

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};
use embedded_hal_async::delay::DelayNs;

/// Mutex guarding the servo
///
/// Held by the actuator for a whole move and briefly by the emergency
/// task as a fence.
pub type ServoLock<M, S> = Mutex<M, S>;

/// Acquire the servo lock, giving up after `timeout_ms`
///
/// Returns `None` on timeout. The lock is never stolen; a timed-out
/// caller simply proceeds without it.
pub async fn lock_within<'l, M, S, D>(
    lock: &'l ServoLock<M, S>,
    delay: &mut D,
    timeout_ms: u32,
) -> Option<MutexGuard<'l, M, S>>
where
    M: RawMutex,
    D: DelayNs,
{
    match select(lock.lock(), delay.delay_ms(timeout_ms)).await {
        Either::First(guard) => Some(guard),
        Either::Second(()) => None,
    }
}
