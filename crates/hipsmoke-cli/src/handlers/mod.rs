//! Command handlers, one per binary.
//!
//! Handlers take their collaborators and output stream as arguments so the
//! binaries stay thin composition roots.

pub mod device_probe;
pub mod release_dir;
