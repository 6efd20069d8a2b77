//! Game - owns one level and the body moving through it
//!
//! Orchestration only: the physics lives in `systems/`, the layout in
//! `spatial/`, tuning and bundles in `domain/`. This module adds the frame
//! counter, held-key tracking, perf timing and render extraction the host
//! page needs around the step.

use std::collections::HashSet;

use crate::domain::bindings::KeyBindings;
use crate::domain::level::Level;
use crate::domain::params::PhysicsParams;
use crate::spatial::world::World;
use crate::systems::{Body, InputState};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "input/keys.rs"]
mod keys;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Game;
pub use perf_stats::PerfStats;
pub use render_extract::{RECT_KIND_BODY, RECT_KIND_OBSTACLE, RECT_STRIDE};

use perf_timer::PerfTimer;

/// The simulation state behind the wasm facade
pub struct GameCore {
    level: Level,
    body: Body,

    // Input
    bindings: KeyBindings,
    held_keys: HashSet<String>,
    manual_input: InputState,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,

    // Render transfer: [kind, x, y, w, h] per rect
    render_rects: Vec<i32>,
}

impl GameCore {
    /// Built-in level with default tuning
    pub fn new() -> Self {
        init::create_game_core(Level::default_level())
    }

    pub fn with_level(level: Level) -> Self {
        init::create_game_core(level)
    }

    pub fn from_level_json(json: &str) -> Result<Self, String> {
        let level = Level::from_bundle_json(json)?;
        Ok(init::create_game_core(level))
    }

    /// Swap in a new level. On error the current level is kept untouched.
    pub fn load_level_json(&mut self, json: &str) -> Result<(), String> {
        let level = Level::from_bundle_json(json)?;
        init::install_level(self, level);
        Ok(())
    }

    pub fn load_key_bindings_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_key_bindings_json(self, json)
    }

    pub fn level_manifest_json(&self) -> String {
        self.level.manifest_json()
    }

    pub fn level_name(&self) -> &str { &self.level.name }

    pub fn params(&self) -> &PhysicsParams { &self.level.params }

    pub fn world(&self) -> &World { &self.level.world }

    pub fn body(&self) -> &Body { &self.body }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn key_bindings(&self) -> &KeyBindings { &self.bindings }

    /// Press or release a host key. Returns false for unbound codes.
    pub fn set_key(&mut self, code: &str, pressed: bool) -> bool {
        keys::set_key(self, code, pressed)
    }

    /// Direct snapshot, merged with whatever keys are held.
    pub fn set_input(&mut self, input: InputState) {
        keys::set_input(self, input);
    }

    /// Release every key and clear the direct snapshot (e.g. on window blur).
    pub fn clear_input(&mut self) {
        keys::clear_input(self);
    }

    /// Input the next tick will see
    pub fn current_input(&self) -> InputState {
        keys::current_input(self)
    }

    /// Run one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Back to spawn, frame counter to zero. Held input is kept.
    pub fn reset(&mut self) {
        self.body = Body::at_spawn(&self.level.params);
        self.frame = 0;
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Pack obstacles then the body into the render buffer; returns rect count
    pub fn collect_render_rects(&mut self) -> usize {
        render_extract::collect_render_rects(self)
    }

    pub fn render_rects(&self) -> &[i32] {
        &self.render_rects
    }

    pub fn render_rects_ptr(&self) -> *const i32 {
        self.render_rects.as_ptr()
    }
}

impl Default for GameCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
