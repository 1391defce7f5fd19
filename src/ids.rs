//! Random note id candidates from `Math.random`

use notes_core::IdSource;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsRandomIds;

impl IdSource for JsRandomIds {
    fn next_candidate(&mut self) -> u32 {
        (js_sys::Math::random() * f64::from(u32::MAX)) as u32
    }
}
