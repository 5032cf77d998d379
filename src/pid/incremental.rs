// src/pid/incremental.rs

//! # Incremental PID
//!
//! Velocity form of the PID controller. The returned command is a change to
//! apply to the actuator (a motor delta, for example) rather than an
//! absolute command, so the proportional term acts on the difference of the
//! two newest errors and the derivative term on the second difference.

use crate::{Number, PidChannel};

impl<T: Number> PidChannel<T> {
    /// Advances the incremental strategy by one tick.
    ///
    /// Shifts the error window, stores `measurement - set_point` as the
    /// newest error and returns
    /// `kp * (e2 - e1) + ki * e2 + kd * (e2 - 2 e1 + e0)` clamped to the
    /// output limits. The integral accumulator is left untouched, and the
    /// integral limits do not apply.
    pub fn compute_incremental(&mut self, measurement: T) -> T {
        self.err0 = self.err1;
        self.err1 = self.err2;
        self.err2 = measurement - self.set_point;

        let p = self.kp * (self.err2 - self.err1);
        let i = self.ki * self.err2;
        let d = self.kd * (self.err2 - (self.err1 + self.err1) + self.err0);

        self.saturate(p + i + d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn tuned() -> PidChannel<f32> {
        let mut pid = PidChannel::new();
        pid.set_gains(2.0, 0.1, 0.5);
        pid
    }

    /// Test a short sequence against hand-computed values.
    #[test]
    fn test_pid_incremental_sequence() {
        let mut pid = tuned();

        // e = (0, 0, 1): 2*1 + 0.1*1 + 0.5*1
        assert!(value_close(2.6, pid.compute_incremental(1.0)));
        // e = (0, 1, 2): 2*1 + 0.1*2 + 0.5*0
        assert!(value_close(2.2, pid.compute_incremental(2.0)));
        // e = (1, 2, 1.5): 2*(-0.5) + 0.1*1.5 + 0.5*(-1.5)
        assert!(value_close(-1.6, pid.compute_incremental(1.5)));

        assert!(triple_close((1.0, 2.0, 1.5), pid.error_window()));
        assert!(
            value_close(0.0, pid.integral_sum()),
            "Incremental strategy should not accumulate."
        );
    }

    /// Test that the set point is subtracted from the measurement.
    #[test]
    fn test_pid_incremental_set_point() {
        let mut pid = tuned();
        pid.set_set_point(10.0);

        pid.compute_incremental(12.0);

        assert!(triple_close((0.0, 0.0, 2.0), pid.error_window()));
    }

    /// Test that replaying the same inputs from a fresh channel is deterministic.
    #[test]
    fn test_pid_incremental_replay() {
        let inputs = [0.3, -1.2, 4.5, 4.5, 0.0, -7.25];
        let mut first = tuned();
        let mut second = tuned();

        for input in inputs {
            assert_eq!(
                first.compute_incremental(input).to_bits(),
                second.compute_incremental(input).to_bits()
            );
        }
    }

    /// Test that the output is clamped and that no integral limit applies.
    #[test]
    fn test_pid_incremental_clamping() {
        let mut pid = PidChannel::<f32>::new();
        pid.set_ki(10.0);

        // 10 * 50 = 500 exceeds the integral limit but not the output limit.
        assert!(value_close(500.0, pid.compute_incremental(50.0)));

        // 10 * 100 = 1000 saturates the output.
        assert!(value_close(800.0, pid.compute_incremental(100.0)));
        assert!(value_close(800.0, pid.output()));
        assert!(value_close(-800.0, pid.compute_incremental(-100.0)));
    }

    /// Test that zero gains give zero output for any measurement.
    #[test]
    fn test_pid_incremental_zero_gains() {
        let mut pid = PidChannel::<f32>::new();
        assert!(value_close(0.0, pid.compute_incremental(123.0)));
        assert!(value_close(0.0, pid.compute_incremental(-45.0)));
    }
}
