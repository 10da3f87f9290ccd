//! Simplified example demonstrating key `leak_tracker` types working together.
//!
//! This example shows how to use the main types in the `leak_tracker` crate:
//! - `Session`: a tracking window over externally-owned objects
//! - `Identity`: the address-based key of a tracked object
//! - `Report`: site-attributed diagnostics produced at a checkpoint
//!
//! Run with: `cargo run --example leak_tracker_basic`

use leak_tracker::{Identity, Session};

fn main() -> Result<(), leak_tracker::Error> {
    println!("=== Lifecycle Tracking Example ===\n");

    // Create a tracking session - a fresh window with an empty registry.
    let session = Session::new();
    println!("✓ Created tracking session\n");

    // Example 1: a well-behaved lifecycle.
    println!("1. Matched create/destroy:");
    let surface = Identity::from_addr(0x5100);
    session.mark_for_leak_detection(surface)?;
    println!("   Registered {surface}");
    session.destroy(surface)?;
    println!("   Released {surface}, {} object(s) tracked\n", session.tracked_count());

    // Example 2: a leak caught at the checkpoint.
    println!("2. A forgotten release:");
    let layout = Identity::from_addr(0x5200);
    let pattern = Identity::from_addr(0x5300);
    session.mark_for_leak_detection(layout)?;
    session.mark_for_leak_detection(pattern)?;
    session.destroy(layout)?;
    println!("   Registered two objects, released one");

    let report = session.checkpoint();
    println!("   Checkpoint found {} defect(s):", report.len());
    print!("{report}");
    println!();

    // Example 3: the checkpoint drained the window, so the session is clean again.
    println!("3. Fresh window after checkpoint:");
    println!("   {} object(s) tracked", session.tracked_count());
    session.assert_no_leaks();
    println!("   ✓ No outstanding leaks");

    Ok(())
}
