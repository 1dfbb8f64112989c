use measured_loop::{loop_nullary, loop_with_state, BlackHole};

fn fib(n: u64) -> u64 {
    if n < 2 {
        n
    } else {
        fib(n - 1) + fib(n - 2)
    }
}

fn main() {
    _ = env_logger::try_init();

    let mut sink = BlackHole::new();

    let nanos = loop_nullary(&mut sink, 1000, || fib(15));
    println!("fib(15) x 1000: {nanos} ns");

    let input: Vec<u64> = (0..1024).collect();
    let nanos = loop_with_state(&mut sink, 1000, |v: &Vec<u64>| v.iter().sum::<u64>(), &input);
    println!("sum of 1024 elements x 1000: {nanos} ns");

    println!("values consumed: {}", sink.consumed());
}
