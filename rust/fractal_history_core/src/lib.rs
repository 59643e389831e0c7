pub mod config;
pub mod descriptor;
pub mod error;
pub mod history;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod shared;

pub use config::{HistoryConfig, ResizePolicy};
pub use descriptor::FractalDescriptor;
pub use error::{HistoryError, RenderError, Result};
pub use history::RenderHistory;
pub use shared::SharedHistory;
