//! Replays the three reference steque scenarios and prints what each one holds.
//!
//! Run with `cargo run --example scenarios`.

use std::time::Instant;
use steque::Steque;

fn print_scenario(number: usize, steque: &Steque<i32>, expected: &str) {
    println!("{}. Checking all operations", number);
    println!("----------------");

    let mut items = Vec::with_capacity(steque.len());
    let mut iter = steque.iter();
    while iter.has_next() {
        match iter.try_next() {
            Ok(item) => items.push(item.to_string()),
            Err(err) => {
                println!("   iteration stopped early: {}", err);
                break;
            }
        }
    }

    println!("Steque items are:");
    println!("{}", items.join(" "));
    println!("Expected items in steque are:");
    println!("{}", expected);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();

    let mut first = Steque::new();
    first.push(1);
    first.push(2);
    first.push(3);
    first.pop()?;
    first.enqueue(5);
    first.enqueue(6);
    print_scenario(1, &first, "2 1 5 6");

    let mut second = Steque::new();
    second.enqueue(5);
    second.enqueue(6);
    second.pop()?;
    second.push(1);
    second.push(2);
    second.push(3);
    print_scenario(2, &second, "3 2 1 6");

    let mut third = Steque::new();
    third.push(1);
    third.enqueue(2);
    third.pop()?;
    third.push(3);
    third.enqueue(4);
    third.pop()?;
    third.push(5);
    third.enqueue(6);
    third.pop()?;
    print_scenario(3, &third, "2 4 6");

    println!("Time Elapsed is: {:?}", start.elapsed());
    Ok(())
}
