mod descriptor;
mod logger;

use wasm_bindgen::prelude::*;
use fractal_history_core::{HistoryConfig, SharedHistory};

pub use descriptor::JsFractal;
pub use logger::init_logging;

thread_local! {
    static INSTANCE: SharedHistory<JsFractal> = SharedHistory::default();
}

/// Browser handle to a render history. Handles obtained from `getInstance`
/// all share one stack; `new RenderHistory()` gets its own.
///
/// Errors thrown by a descriptor's `render`/`resize` are rethrown as JS
/// `Error`s and leave the stack unchanged. A descriptor that calls back into
/// the same history while being drawn gets a "busy" error.
#[wasm_bindgen]
pub struct RenderHistory {
    shared: SharedHistory<JsFractal>,
}

#[wasm_bindgen]
impl RenderHistory {
    #[wasm_bindgen(constructor)]
    pub fn new() -> RenderHistory {
        RenderHistory { shared: SharedHistory::default() }
    }

    /// Accepts e.g. `{"maxDepth": 50, "resize": "discard"}`.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> Result<RenderHistory, JsError> {
        let config = HistoryConfig::from_json(config_json)?;
        Ok(RenderHistory { shared: SharedHistory::new(config) })
    }

    pub fn render(&self, fractal: JsValue) -> Result<(), JsError> {
        self.shared.try_borrow_mut()?.try_render(descriptor::from_js(fractal))?;
        Ok(())
    }

    #[wasm_bindgen(js_name = fractalBack)]
    pub fn fractal_back(&self) -> Result<(), JsError> {
        self.shared.try_borrow_mut()?.fractal_back()?;
        Ok(())
    }

    #[wasm_bindgen(js_name = resizeRender)]
    pub fn resize_render(&self) -> Result<(), JsError> {
        self.shared.try_borrow_mut()?.resize_render()?;
        Ok(())
    }

    pub fn clear(&self) -> Result<(), JsError> {
        self.shared.try_borrow_mut()?.clear();
        Ok(())
    }

    pub fn last(&self) -> Result<JsValue, JsError> {
        let history = self.shared.try_borrow()?;
        let last: &JsValue = history.last()?.as_ref();
        Ok(last.clone())
    }

    pub fn len(&self) -> Result<usize, JsError> { Ok(self.shared.try_borrow()?.len()) }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> Result<bool, JsError> { Ok(self.shared.try_borrow()?.is_empty()) }

    #[wasm_bindgen(js_name = canGoBack)]
    pub fn can_go_back(&self) -> Result<bool, JsError> { Ok(self.shared.try_borrow()?.can_go_back()) }
}

impl Default for RenderHistory {
    fn default() -> Self { Self::new() }
}

/// The page-wide history, created on first use.
#[wasm_bindgen(js_name = getInstance)]
pub fn get_instance() -> RenderHistory {
    INSTANCE.with(|shared| RenderHistory { shared: shared.clone() })
}
