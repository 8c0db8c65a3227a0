//! PWM servo driver
//!
//! Drives a hobby servo from any `embedded-hal` [`SetDutyCycle`] channel.
//! The channel must already run at the calibrated frame rate (50 Hz for a
//! standard servo); this driver only sets the duty cycle.

use embedded_hal::pwm::SetDutyCycle;
use portcullis_core::config::ServoCalibration;
use portcullis_core::motion::MAX_TRAVEL_DEG;
use portcullis_core::traits::ServoDriver;

/// Servo on a PWM channel
pub struct PwmServo<P> {
    pwm: P,
    calibration: ServoCalibration,
}

impl<P: SetDutyCycle> PwmServo<P> {
    /// Create a new servo driver
    ///
    /// The output is left untouched until the first `set_angle`.
    pub fn new(pwm: P, calibration: ServoCalibration) -> Self {
        Self { pwm, calibration }
    }

    /// Duty count that would be written for an angle
    pub fn duty_for(&self, degrees: u8) -> u16 {
        self.calibration.duty(degrees, self.pwm.max_duty_cycle())
    }
}

impl<P: SetDutyCycle> ServoDriver for PwmServo<P> {
    fn set_angle(&mut self, degrees: u8) {
        let degrees = degrees.min(MAX_TRAVEL_DEG);
        let duty = self.duty_for(degrees);

        if self.pwm.set_duty_cycle(duty).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Servo: duty write rejected at {} deg", degrees);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::pwm::{ErrorKind, ErrorType};

    /// Mock PWM channel for testing
    struct MockPwm {
        max: u16,
        duty: u16,
    }

    impl MockPwm {
        fn new(max: u16) -> Self {
            Self { max, duty: 0 }
        }
    }

    impl ErrorType for MockPwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for MockPwm {
        fn max_duty_cycle(&self) -> u16 {
            self.max
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    /// PWM channel that rejects every write
    struct FailingPwm;

    impl ErrorType for FailingPwm {
        type Error = ErrorKind;
    }

    impl SetDutyCycle for FailingPwm {
        fn max_duty_cycle(&self) -> u16 {
            20_000
        }

        fn set_duty_cycle(&mut self, _duty: u16) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }
    }

    #[test]
    fn test_untouched_until_first_write() {
        let servo = PwmServo::new(MockPwm::new(20_000), ServoCalibration::new());
        assert_eq!(servo.pwm.duty, 0);
    }

    #[test]
    fn test_angles_map_to_pulse_width() {
        // One count per microsecond of a 20 ms frame
        let mut servo = PwmServo::new(MockPwm::new(20_000), ServoCalibration::new());

        servo.set_angle(0);
        assert_eq!(servo.pwm.duty, 500);

        servo.set_angle(45);
        assert_eq!(servo.pwm.duty, 1000);

        servo.set_angle(90);
        assert_eq!(servo.pwm.duty, 1500);
    }

    #[test]
    fn test_angle_clamped_to_travel() {
        let mut servo = PwmServo::new(MockPwm::new(20_000), ServoCalibration::new());

        servo.set_angle(170);
        assert_eq!(servo.pwm.duty, servo.duty_for(MAX_TRAVEL_DEG));
        assert_eq!(servo.pwm.duty, 1500);
    }

    #[test]
    fn test_rejected_write_is_not_fatal() {
        let mut servo = PwmServo::new(FailingPwm, ServoCalibration::new());
        servo.set_angle(45);
        servo.set_angle(90);
        assert_eq!(servo.duty_for(90), 1500);
    }
}
