// demos/attitude_hold.rs

use channel_pid::{AttitudeStabilizer, ChannelConfig, FlightStabilizer, StabilizerConfig};

fn main() {
    let mut config = StabilizerConfig::<f32>::new();

    // Set the PID gains for roll, pitch, and yaw.
    config.roll = ChannelConfig::new().with_gains(0.8, 0.02, 0.3);
    config.pitch = config.roll;
    config.yaw = ChannelConfig::new().with_gains(0.6, 0.0, 0.2);

    // Tighter limits than the defaults.
    config.roll.integral_max = 50.0;
    config.roll.integral_min = -50.0;
    config.pitch = config.roll;

    let mut stabilizer = match AttitudeStabilizer::with_config(config) {
        Ok(stabilizer) => stabilizer,
        Err(error) => {
            eprintln!("invalid configuration: {error:?}");
            return;
        }
    };

    // Hold level flight on a heading of 175 degrees starting across the wrap.
    let set_point = (0.0, 0.0, 175.0); // desired roll, pitch, yaw
    let mut imu_attitude = (5.0, -5.0, -170.0); // current roll, pitch, yaw
    let mut gyro_rate = (0.0, 0.0, 0.0); // current roll rate, pitch rate, yaw rate
    let response = 0.05; // plant response per tick

    println!("                  Roll,    Pitch,      Yaw");
    for tick in 0..=10 {
        let (roll_pid, pitch_pid, yaw_pid) =
            stabilizer.control(set_point, imu_attitude, gyro_rate);

        println!("tick = {tick}");
        println!(
            "    IMU:      {:-8.3}, {:-8.3}, {:-8.3}",
            imu_attitude.0, imu_attitude.1, imu_attitude.2
        );
        println!(
            "    Command:  {:-8.3}, {:-8.3}, {:-8.3}",
            roll_pid, pitch_pid, yaw_pid
        );

        // Simulate a plant whose rate follows the command polarity.
        gyro_rate = (-roll_pid * response, -pitch_pid * response, yaw_pid * response);
        imu_attitude.0 += gyro_rate.0;
        imu_attitude.1 += gyro_rate.1;
        imu_attitude.2 += gyro_rate.2;
        if imu_attitude.2 > 180.0 {
            imu_attitude.2 -= 360.0;
        } else if imu_attitude.2 < -180.0 {
            imu_attitude.2 += 360.0;
        }
    }
}
