// demos/fixed_point.rs

use channel_pid::{Channel, ChannelConfig, ChannelController, Sample, Strategy};
use fixed::types::I16F16;

fn main() {
    let mut config = ChannelConfig::<I16F16>::new();
    config.kp = I16F16::from_num(2);
    config.ki = I16F16::from_num(0.1);
    config.kd = I16F16::from_num(0.5);

    let mut positional = match Channel::with_config(Strategy::Positional, config) {
        Ok(channel) => channel,
        Err(error) => {
            eprintln!("invalid configuration: {error:?}");
            return;
        }
    };
    let mut incremental = Channel::new(Strategy::Incremental);
    *incremental.pid_mut() = *positional.pid();

    println!("measurement, positional, incremental");
    for measurement in [1.0, 2.0, 1.5, 0.5, 0.0] {
        let sample = Sample::measurement(I16F16::from_num(measurement));
        println!(
            "{:-11.3}, {:-10.3}, {:-11.3}",
            measurement,
            positional.advance(sample).to_num::<f32>(),
            incremental.advance(sample).to_num::<f32>()
        );
    }
}
