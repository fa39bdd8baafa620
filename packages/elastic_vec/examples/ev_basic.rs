//! Basic usage of the `elastic_vec` crate:
//!
//! * Creating a vector.
//! * Appending items.
//! * Reading and modifying items.
//! * Removing items.
#![allow(
    clippy::indexing_slicing,
    reason = "example code indexes positions it just created"
)]

use elastic_vec::ElasticVec;

fn main() {
    let mut names = ElasticVec::new();

    // An empty vector owns no allocation at all; the first push allocates one slot.
    assert_eq!(names.capacity(), 0);

    names.push("Alice".to_string());
    names.push("Bob".to_string());
    names.push("Charlie".to_string());

    println!(
        "Vector contains {} items, with a doubling capacity of {}",
        names.len(),
        names.capacity()
    );

    // The live elements are an ordinary slice, so reading works like `Vec`.
    println!("First item: {}", names[0]);

    for name in &names {
        println!("Iterated item: {name}");
    }

    // Items can be modified in place.
    names[1].push_str(" Smith");
    println!("Modified item: {}", names[1]);

    // Removing from the middle shifts the rest down and hands the item back.
    let removed = names.remove(1);
    println!("Removed item: {removed}");

    // Popping takes from the end until nothing is left.
    while let Some(name) = names.pop() {
        println!("Popped item: {name}");
    }

    assert!(names.is_empty());
}
