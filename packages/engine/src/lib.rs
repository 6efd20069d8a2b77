//! Blockstep Engine - kinematic platformer core in WASM
//!
//! One square body, gravity, three buttons and a world of square cells.
//!
//! Architecture:
//! - core/        - Logging macros
//! - domain/      - Constants, tuning, level bundles, key bindings
//! - spatial/     - Static world layout
//! - systems/     - Body, input, collision predicate, the step
//! - simulation/  - Orchestration + wasm facade

// Macros first so every later module can use them.
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Blockstep engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::level::Level;
pub use domain::params::PhysicsParams;
pub use simulation::{Game, GameCore, PerfStats};
pub use spatial::world::{Obstacle, World};
pub use systems::{overlaps, step, Body, InputState};
