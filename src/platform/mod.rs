//! Platform abstraction layer
//!
//! Translates host events (key names, pointer pixels, clicks, viewport
//! size) into per-tick simulation input.

pub mod input;

pub use input::{InputState, Key};
