use measured_loop::{loop_nullary_tokio, BlackHole};
use std::time::Duration;

fn main() {
    _ = env_logger::try_init();

    let mut sink = BlackHole::new();
    let nanos = loop_nullary_tokio(&mut sink, 10, || async {
        tokio::time::sleep(Duration::from_millis(1)).await;
        42
    });

    println!("10 x 1ms sleep: {:?}", Duration::from_nanos(nanos));
}
