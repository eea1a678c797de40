//! Basic Keypad
//!
//! This example drives the engine the way a keypad front end would.
//!
//! Key concepts:
//! - One key event at a time through `Engine::handle`
//! - Display text read back after every key
//! - Left-to-right chaining and percent of the left operand
//! - Error shown on division by zero until cleared
//!
//! Run with: cargo run --example basic_keypad

use keycalc::core::{Digit, KeyEvent, Operator};
use keycalc::Engine;

fn press(engine: &mut Engine, keys: &[KeyEvent]) {
    for key in keys {
        engine.handle(*key);
        println!("  {:>3}  ->  {}", key.to_string(), engine.display_text());
    }
}

fn main() {
    println!("=== Basic Keypad Example ===\n");

    let mut engine = Engine::new();

    println!("Chaining: 3 + 4 * 2 =");
    press(
        &mut engine,
        &[
            KeyEvent::Digit(Digit::Three),
            KeyEvent::Operator(Operator::Add),
            KeyEvent::Digit(Digit::Four),
            KeyEvent::Operator(Operator::Multiply),
            KeyEvent::Digit(Digit::Two),
            KeyEvent::Equals,
        ],
    );

    println!("\nPercent of the left operand: AC 200 + 10 % =");
    press(
        &mut engine,
        &[
            KeyEvent::ClearAll,
            KeyEvent::Digit(Digit::Two),
            KeyEvent::Digit(Digit::DoubleZero),
            KeyEvent::Operator(Operator::Add),
            KeyEvent::Digit(Digit::One),
            KeyEvent::Digit(Digit::Zero),
            KeyEvent::Percent,
            KeyEvent::Equals,
        ],
    );

    println!("\nDivision by zero: 5 / 0 = AC");
    press(
        &mut engine,
        &[
            KeyEvent::Digit(Digit::Five),
            KeyEvent::Operator(Operator::Divide),
            KeyEvent::Digit(Digit::Zero),
            KeyEvent::Equals,
        ],
    );
    println!("  mode: {}", engine.mode());
    press(&mut engine, &[KeyEvent::ClearAll]);

    println!("\n=== Example Complete ===");
}
