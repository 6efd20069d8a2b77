use wasm_bindgen::prelude::*;

use crate::systems::InputState;

use super::perf_stats::PerfStats;
use super::GameCore;

/// JS-facing handle. The host polls keys, calls `step()` once per frame and
/// draws from the pose getters or the packed render rects.
#[wasm_bindgen]
pub struct Game {
    core: GameCore,
}

#[wasm_bindgen]
impl Game {
    /// Built-in level with default tuning
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: GameCore::new() }
    }

    #[wasm_bindgen(js_name = fromLevelJson)]
    pub fn from_level_json(json: String) -> Result<Game, JsValue> {
        let core = GameCore::from_level_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    /// Replace the level; the current one stays if the bundle is rejected
    pub fn load_level(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_level_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn load_key_bindings(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_key_bindings_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn level_manifest_json(&self) -> String {
        self.core.level_manifest_json()
    }

    // === INPUT ===

    /// Forward a `keydown`/`keyup` by `KeyboardEvent.code`. False if unbound.
    pub fn set_key(&mut self, code: &str, pressed: bool) -> bool {
        self.core.set_key(code, pressed)
    }

    pub fn set_input(&mut self, left: bool, right: bool, jump: bool) {
        self.core.set_input(InputState::new(left, right, jump));
    }

    pub fn clear_input(&mut self) {
        self.core.clear_input();
    }

    // === SIMULATION ===

    pub fn step(&mut self) {
        self.core.step();
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    // === BODY POSE ===

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f32 { self.core.body().x }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f32 { self.core.body().y }

    #[wasm_bindgen(getter)]
    pub fn vx(&self) -> f32 { self.core.body().vx }

    #[wasm_bindgen(getter)]
    pub fn vy(&self) -> f32 { self.core.body().vy }

    #[wasm_bindgen(getter)]
    pub fn grounded(&self) -> bool { self.core.body().grounded }

    // === WORLD ===

    #[wasm_bindgen(getter)]
    pub fn obstacle_count(&self) -> usize { self.core.world().len() }

    #[wasm_bindgen(getter)]
    pub fn body_size(&self) -> f32 { self.core.params().body_size }

    #[wasm_bindgen(getter)]
    pub fn block_size(&self) -> i32 { self.core.params().block_size }

    #[wasm_bindgen(getter)]
    pub fn world_width(&self) -> f32 { self.core.params().world_width }

    #[wasm_bindgen(getter)]
    pub fn world_height(&self) -> f32 { self.core.params().world_height }

    // === RENDERING API ===

    /// Pack `[kind, x, y, w, h]` per rect (obstacles first, body last).
    /// Returns the rect count; read with `render_rects_ptr` / `render_rects_len`.
    pub fn collect_render_rects(&mut self) -> usize {
        self.core.collect_render_rects()
    }

    pub fn render_rects_ptr(&self) -> *const i32 {
        self.core.render_rects_ptr()
    }

    /// Length in i32 elements
    pub fn render_rects_len(&self) -> usize {
        self.core.render_rects().len()
    }

    // === PERF ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Rust-side access for tests and native tools
    pub fn core(&self) -> &GameCore {
        &self.core
    }
}
