//! Library half of the `datefix` binary
//!
//! Kept separate from `main.rs` so the console reporter and drive
//! discovery can be unit tested.

pub mod console;
pub mod drives;
pub mod scan;
pub mod util;
