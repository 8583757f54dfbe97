//! Examples of serializing and deserializing quantities.
//!
//! To run this example with serde support:
//! ```bash
//! cargo run --example serialization --features serde
//! ```

#[cfg(feature = "serde")]
fn main() {
    use serde::{Deserialize, Serialize};
    use sidim::{Joules, Kilograms, Meters, Milliseconds, Minutes};

    println!("=== Quantity Serialization Examples ===\n");

    // Bare counts: the type carries the scale and the dimension.
    println!("1. Bare counts:");
    let distance = Meters::<f64>::new(42.5);
    let json = serde_json::to_string(&distance).unwrap();
    println!("   {} -> {}", distance, json);

    let mass = Kilograms::<i32>::new(75);
    let json = serde_json::to_string(&mass).unwrap();
    println!("   {} -> {}", mass, json);

    let back: Meters<f64> = serde_json::from_str("42.5").unwrap();
    println!("   42.5 -> {}", back);
    println!();

    // Structs mixing bare and self-describing fields.
    #[derive(Serialize, Deserialize, Debug)]
    struct Run {
        distance: Meters<f64>,
        #[serde(with = "sidim::serde_with_scale")]
        elapsed: Milliseconds<u64>,
        #[serde(with = "sidim::serde_with_scale")]
        spent: Joules<f64>,
    }

    println!("2. Structs:");
    let run = Run {
        distance: Meters::new(400.0),
        elapsed: Milliseconds::new(58_320),
        spent: Joules::new(95_000.0),
    };
    let json = serde_json::to_string_pretty(&run).unwrap();
    println!("{}", json);
    let restored: Run = serde_json::from_str(&json).unwrap();
    println!("   Restored: {:?}", restored);
    println!();

    // The self-describing form refuses data written at another scale.
    println!("3. Scale checks:");
    #[derive(Deserialize, Debug)]
    struct Break {
        #[serde(with = "sidim::serde_with_scale")]
        length: Minutes<u32>,
    }
    let written_in_seconds = r#"{"length":{"count":300,"ratio":[1,1]}}"#;
    match serde_json::from_str::<Break>(written_in_seconds) {
        Ok(value) => println!("   unexpected: {:?}", value),
        Err(err) => println!("   rejected: {}", err),
    }

    println!();
    println!("=== Important Notes ===");
    println!("• Quantities serialize as their bare count by default");
    println!("• `serde_with_scale` adds the ratio and the dimension exponents");
    println!("• Convert before serializing if the reader expects another scale");
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serialization --features serde");
}
