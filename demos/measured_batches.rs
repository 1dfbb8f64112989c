use measured_loop::{BlackHole, Measured};

fn main() {
    _ = env_logger::try_init();

    let mut measured = Measured::new(
        || (0..256u32).rev().collect::<Vec<_>>(),
        |v: &Vec<u32>| {
            let mut v = v.clone();
            v.sort_unstable();
            v
        },
    );

    let mut sink = BlackHole::new();
    for eval_count in [1, 10, 100, 1000] {
        let sample = measured.batch(&mut sink, eval_count);
        println!(
            "eval_count={}, elapsed={:?}",
            sample.eval_count,
            sample.elapsed()
        );
    }
}
