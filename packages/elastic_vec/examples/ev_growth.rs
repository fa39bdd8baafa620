//! How `elastic_vec` manages its storage:
//!
//! * The exact doubling growth policy.
//! * Reserving capacity up front.
//! * Resizing with default-constructed elements.
//! * Constructing elements directly in their final slot.
#![allow(
    clippy::indexing_slicing,
    reason = "example code indexes positions it just created"
)]

use elastic_vec::ElasticVec;

fn main() {
    let mut vec = ElasticVec::new();

    // Watch the capacity double: 1, 2, 4, 8, ... Every growth step allocates the new
    // storage, relocates the elements and only then releases the old allocation.
    let mut last_capacity = vec.capacity();

    for value in 0..32_u32 {
        vec.push(value);

        if vec.capacity() != last_capacity {
            println!(
                "Growth at length {}: capacity {} -> {}",
                vec.len(),
                last_capacity,
                vec.capacity()
            );
            last_capacity = vec.capacity();
        }
    }

    // Reserving ahead of time allocates exactly the requested capacity, once.
    let mut reserved = ElasticVec::<u32>::new();
    reserved.reserve(1_000);
    assert_eq!(reserved.capacity(), 1_000);

    for value in 0..1_000 {
        reserved.push(value);
    }

    // No further growth happened - the capacity is exactly what was reserved.
    assert_eq!(reserved.capacity(), 1_000);
    println!(
        "Reserved vector filled to {} items without reallocating",
        reserved.len()
    );

    // Resizing appends default values or trims the tail.
    let mut sized = ElasticVec::<u64>::with_len(3);
    assert_eq!(sized.as_slice(), &[0, 0, 0]);

    sized.resize(5);
    assert_eq!(sized.as_slice(), &[0, 0, 0, 0, 0]);

    sized.resize(2);
    assert_eq!(sized.as_slice(), &[0, 0]);
    println!("Resized vector down to {} items", sized.len());

    // `push_with` builds the element in its final slot - useful when construction is
    // expensive and the value should never exist anywhere else.
    let mut reports = ElasticVec::new();
    let entries = 3;
    reports.push_with(|| format!("report with {entries} entries"));
    println!("Constructed in place: {}", reports[0]);
}
