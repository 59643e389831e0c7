//! History configuration, parsed from the JSON the viewer passes in.

use serde::{Deserialize, Serialize};
use crate::error::Result;

/// What happens to the resized descriptor produced by a resize render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ResizePolicy {
    /// The resized descriptor replaces the current entry.
    #[default]
    Replace,
    /// The resized descriptor is drawn and dropped; the stored entry keeps
    /// its pre-resize state.
    Discard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct HistoryConfig {
    /// Maximum number of entries kept. Oldest entries are evicted first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    pub resize: ResizePolicy,
}

impl HistoryConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_resize(mut self, resize: ResizePolicy) -> Self {
        self.resize = resize;
        self
    }

    /// Effective depth limit. The current view is always kept, so a limit of
    /// zero behaves like one.
    pub(crate) fn depth_limit(&self) -> Option<usize> {
        self.max_depth.map(|d| d.max(1))
    }
}
