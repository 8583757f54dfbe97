//! Minimal end-to-end example: mix prefixes, derive a velocity and hand a timeout to `std`.

use sidim::{Kilometers, Meters, MetersPerSecond, Milliseconds, Millimeters, Seconds};

fn main() {
    let total = Millimeters::<i32>::new(1) + Meters::<u32>::new(1);
    assert_eq!(total, Millimeters::<u32>::new(1_001));
    println!("1 mm + 1 m = {}", total);

    let d = Kilometers::<f64>::new(1.0);
    let t = Seconds::<f64>::new(100.0);
    let v = d / t;
    assert_eq!(v, MetersPerSecond::<f64>::new(10.0));
    println!("{} / {} = {}", d, t, v);

    let timeout = Milliseconds::<u64>::new(250);
    match timeout.to_duration() {
        Ok(duration) => println!("{} -> {:?}", timeout, duration),
        Err(err) => eprintln!("cannot use {} as a timeout: {}", timeout, err),
    }
}
