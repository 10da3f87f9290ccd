//! Demonstrates the ambient process-wide hooks and the tracing toggle.
//!
//! With tracing disabled (the default) every ambient hook is a no-op; nothing is
//! observed and nothing can fail. A harness flips the toggle on - programmatically or
//! via the `LEAK_TRACKER_TRACING` environment variable - to activate tracking without
//! changing any forwarding code.
//!
//! Run with: `cargo run --example leak_tracker_ambient`

use leak_tracker::{Identity, hooks, tracing};

fn main() -> Result<(), leak_tracker::Error> {
    // Honor LEAK_TRACKER_TRACING if the caller set it.
    tracing::init_from_env();

    let handle = Identity::from_addr(0x6100);

    println!("tracing enabled: {}", tracing::is_enabled());

    // While disabled these observe nothing - the registry is not even initialized.
    hooks::mark_for_leak_detection(handle)?;
    hooks::destroy(handle)?;
    println!("tracked after disabled hooks: {}", hooks::tracked_count());

    // Opt in and run the same lifecycle again, this time observed.
    tracing::enable();
    println!("\ntracing enabled: {}", tracing::is_enabled());

    hooks::mark_for_leak_detection(handle)?;
    hooks::reference(handle);
    println!("tracked after registration: {}", hooks::tracked_count());

    hooks::destroy(handle)?;
    hooks::assert_no_leaks();
    println!("✓ lifecycle fully retired, no leaks at checkpoint");

    Ok(())
}
