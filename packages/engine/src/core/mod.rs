//! Core helpers shared by every layer of the engine.

#[macro_use]
pub mod utils;
