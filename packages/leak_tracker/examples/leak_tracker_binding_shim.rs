//! Shows the hook contract from the perspective of a forwarding layer.
//!
//! A real binding forwards hundreds of calls to an external 2D-graphics library and
//! instruments each constructor, reference increment and destructor. This example stands
//! in a tiny fake "native library" for the real one; the shim functions around it follow
//! the exact pattern generated wrapper code uses:
//!
//! - call the external library first, check its status, register only on success;
//! - release unconditionally, error paths included;
//! - report reference increments for attribution only.
//!
//! Run with: `cargo run --example leak_tracker_binding_shim`

use leak_tracker::{Identity, Session};

/// Stand-in for an opaque native object behind an FFI boundary.
struct NativeSurface {
    width: u32,
    height: u32,
}

/// Stand-in for the external library's constructor: returns null on failure.
fn native_surface_create(width: u32, height: u32) -> *mut NativeSurface {
    if width == 0 || height == 0 {
        return std::ptr::null_mut();
    }

    Box::into_raw(Box::new(NativeSurface { width, height }))
}

/// Stand-in for the external library's destructor.
fn native_surface_destroy(surface: *mut NativeSurface) {
    // SAFETY: in this example every pointer passed here came from native_surface_create.
    drop(unsafe { Box::from_raw(surface) });
}

/// The wrapped constructor: forward, check status, then - and only then - register.
fn create_surface(
    session: &Session,
    width: u32,
    height: u32,
) -> Result<*mut NativeSurface, String> {
    let surface = native_surface_create(width, height);
    if surface.is_null() {
        // The external call failed; there is nothing to track.
        return Err(format!("cannot create {width}x{height} surface"));
    }

    session
        .mark_for_leak_detection(Identity::from_ptr(surface))
        .map_err(|error| error.to_string())?;
    Ok(surface)
}

/// The wrapped destructor: unregister unconditionally.
fn destroy_surface(session: &Session, surface: *mut NativeSurface) -> Result<(), String> {
    session
        .destroy(Identity::from_ptr(surface))
        .map_err(|error| error.to_string())?;
    native_surface_destroy(surface);
    Ok(())
}

fn main() -> Result<(), String> {
    let session = Session::new();

    // A failed external call registers nothing.
    assert!(create_surface(&session, 0, 0).is_err());
    assert_eq!(session.tracked_count(), 0);

    // Successful creations are tracked with the caller's attribution.
    let canvas = create_surface(&session, 640, 480)?;
    let thumbnail = create_surface(&session, 64, 48)?;
    println!("created two surfaces, tracking {}", session.tracked_count());

    // SAFETY: canvas came from native_surface_create and has not been destroyed.
    let canvas_size = unsafe { ((*canvas).width, (*canvas).height) };
    println!("canvas is {}x{}", canvas_size.0, canvas_size.1);

    destroy_surface(&session, canvas)?;

    // The thumbnail release was forgotten; the checkpoint names the creation site.
    let report = session.checkpoint();
    println!("\ncheckpoint output:");
    print!("{report}");

    // Clean up the fake native object for real before exiting.
    native_surface_destroy(thumbnail);

    Ok(())
}
