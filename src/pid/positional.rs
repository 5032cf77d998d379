// src/pid/positional.rs

//! # Positional PID
//!
//! Classic PID producing an absolute command, with integral anti-windup.

use crate::{Number, PidChannel};

impl<T: Number> PidChannel<T> {
    /// Advances the positional strategy by one tick.
    ///
    /// The newest error `measurement - set_point` is added to the
    /// accumulator. If the resulting integral term leaves the integral limits,
    /// this tick's contribution is taken back out of the accumulator and the
    /// term is pinned to the limit it crossed. Earlier contributions are never
    /// rolled back. The accumulator saturates at the bounds of `T` rather than
    /// overflowing. Returns `kp * e2 + ki * sum + kd * (e2 - e1)` clamped to the
    /// output limits.
    pub fn compute_positional(&mut self, measurement: T) -> T {
        self.err1 = self.err2;
        self.err2 = measurement - self.set_point;
        let previous_sum = self.sum_err;
        self.sum_err = self.sum_err.bounded_add(self.err2);

        let p = self.kp * self.err2;
        let mut i = self.ki * self.sum_err;
        let d = self.kd * (self.err2 - self.err1);

        if i > self.ki_max {
            self.sum_err = previous_sum;
            i = self.ki_max;
        } else if i < self.ki_min {
            self.sum_err = previous_sum;
            i = self.ki_min;
        }

        self.saturate(p + i + d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use fixed::types::I16F16;

    /// Test a short sequence against hand-computed values.
    #[test]
    fn test_pid_positional_sequence() {
        let mut pid = PidChannel::<f32>::new();
        pid.set_gains(2.0, 0.1, 0.5);

        // e2 = 1, sum = 1: 2 + 0.1 + 0.5
        assert!(value_close(2.6, pid.compute_positional(1.0)));
        // e2 = 2, sum = 3: 4 + 0.3 + 0.5
        assert!(value_close(4.8, pid.compute_positional(2.0)));
        // e2 = 1.5, sum = 4.5: 3 + 0.45 - 0.25
        assert!(value_close(3.2, pid.compute_positional(1.5)));

        assert!(value_close(4.5, pid.integral_sum()));
        let (err0, err1, err2) = pid.error_window();
        assert!(value_close(0.0, err0), "Oldest error is unused here.");
        assert!(value_close(2.0, err1));
        assert!(value_close(1.5, err2));
    }

    /// Test that the tick which crosses the upper integral limit is rolled back.
    #[test]
    fn test_pid_positional_anti_windup_upper() {
        let mut pid = PidChannel::<f32>::new();
        pid.set_ki(10.0);

        assert!(value_close(300.0, pid.compute_positional(30.0)));
        let sum_before = pid.integral_sum();

        // 10 * 60 = 600 would exceed the limit of 400.
        assert!(value_close(400.0, pid.compute_positional(30.0)));
        assert!(
            value_close(sum_before, pid.integral_sum()),
            "Accumulation should be rolled back for the saturated tick."
        );

        // Still saturated, still not accumulating.
        assert!(value_close(400.0, pid.compute_positional(30.0)));
        assert!(value_close(30.0, pid.integral_sum()));
    }

    /// Test the lower integral limit and recovery after saturation.
    #[test]
    fn test_pid_positional_anti_windup_lower() {
        let mut pid = PidChannel::<f32>::new();
        pid.set_ki(10.0);

        pid.compute_positional(-30.0);
        assert!(value_close(-400.0, pid.compute_positional(-30.0)));
        assert!(value_close(-30.0, pid.integral_sum()));

        // An opposite error unwinds immediately because nothing extra was stored.
        assert!(value_close(-200.0, pid.compute_positional(10.0)));
        assert!(value_close(-20.0, pid.integral_sum()));
    }

    /// Test that only the current tick is rolled back, not earlier history.
    #[test]
    fn test_pid_positional_rollback_single_tick() {
        let mut pid = PidChannel::<f32>::new();
        pid.set_ki(1.0);
        pid.set_integral_limits(-100.0, 100.0).unwrap();

        pid.compute_positional(60.0);
        pid.compute_positional(30.0);
        assert!(value_close(90.0, pid.integral_sum()));

        // Limits tightened by the caller between ticks.
        pid.set_integral_limits(-50.0, 50.0).unwrap();
        assert!(value_close(50.0, pid.compute_positional(5.0)));
        assert!(value_close(90.0, pid.integral_sum()));
    }

    /// Test that the output limits apply after the integral limits.
    #[test]
    fn test_pid_positional_output_clamping() {
        let mut pid = PidChannel::<f32>::new();
        pid.set_gains(100.0, 10.0, 0.0);

        // 100 * 30 + 10 * 30 = 3300
        assert!(value_close(800.0, pid.compute_positional(30.0)));
        assert!(value_close(-800.0, pid.compute_positional(-60.0)));
    }

    /// Test that a NaN measurement poisons the accumulator.
    #[test]
    fn test_pid_positional_nan_propagates() {
        let mut pid = PidChannel::<f32>::new();
        pid.set_gains(1.0, 1.0, 0.0);

        assert!(pid.compute_positional(f32::NAN).is_nan());
        assert!(pid.integral_sum().is_nan());
        assert!(pid.compute_positional(1.0).is_nan());
    }

    /// Test that the fixed-point accumulator saturates when no integral
    /// limit triggers a rollback.
    #[test]
    fn test_pid_positional_fixed_point_accumulator_saturates() {
        let mut pid = PidChannel::<I16F16>::new();

        for _ in 0..400 {
            pid.compute_positional(I16F16::from_num(-100));
        }
        assert_eq!(I16F16::MIN, pid.integral_sum());

        pid.compute_positional(I16F16::from_num(50));
        assert_eq!(I16F16::MIN + I16F16::from_num(50), pid.integral_sum());
    }
}
