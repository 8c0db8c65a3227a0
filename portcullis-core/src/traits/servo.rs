//! Servo driver trait

/// Positional servo driving the gate arm
///
/// Implementations clamp the angle to the gate's travel limit before
/// converting it to a pulse width. Writes are fire-and-forget: the servo
/// has no position feedback, so the caller paces motion with delays.
pub trait ServoDriver {
    /// Command the servo to an angle (degrees)
    fn set_angle(&mut self, degrees: u8);
}
