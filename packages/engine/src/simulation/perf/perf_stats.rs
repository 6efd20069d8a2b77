use wasm_bindgen::prelude::*;

/// Snapshot of the last step (all zeros while perf metrics are off)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) frame: u64,
    pub(super) obstacle_count: usize,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }

    /// Frame number the snapshot was taken after
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }

    /// Cells scanned per axis during the step
    #[wasm_bindgen(getter)]
    pub fn obstacle_count(&self) -> usize { self.obstacle_count }
}
