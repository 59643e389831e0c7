use wasm_bindgen::prelude::*;
use fractal_history_core::{FractalDescriptor, RenderError};

#[wasm_bindgen]
extern "C" {
    /// Any JS object with `render()` and `resize()` methods, as produced by
    /// the viewer's fractal engine.
    pub type JsFractal;

    #[wasm_bindgen(method, catch, js_name = render)]
    fn js_render(this: &JsFractal) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = resize)]
    fn js_resize(this: &JsFractal) -> Result<JsFractal, JsValue>;

    #[wasm_bindgen(js_name = String)]
    fn js_string(value: &JsValue) -> String;
}

/// Thrown values become render errors; `String(e)` gives `"TypeError: ..."`
/// for errors and a readable form for anything else thrown.
fn thrown(value: JsValue) -> RenderError {
    RenderError::new(js_string(&value))
}

impl FractalDescriptor for JsFractal {
    fn render(&self) -> Result<(), RenderError> {
        self.js_render().map_err(thrown)
    }

    fn resize(&self) -> Result<Self, RenderError> {
        self.js_resize().map_err(thrown)
    }
}

/// `null` and `undefined` map to `None`. Anything else is treated as a
/// descriptor; one without the right methods fails when it is drawn.
pub(crate) fn from_js(value: JsValue) -> Option<JsFractal> {
    if value.is_null() || value.is_undefined() {
        None
    } else {
        Some(value.unchecked_into())
    }
}
