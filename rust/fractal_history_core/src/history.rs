//! Back-navigable history of rendered fractal views.

use log::{debug, trace, warn};

use crate::config::{HistoryConfig, ResizePolicy};
use crate::descriptor::FractalDescriptor;
use crate::error::{HistoryError, Result};

/// Stack of rendered views. The last element is the one currently on screen.
#[derive(Debug, Clone)]
pub struct RenderHistory<D> {
    stack: Vec<D>,
    config: HistoryConfig,
}

impl<D> Default for RenderHistory<D> {
    fn default() -> Self {
        Self { stack: Vec::new(), config: HistoryConfig::default() }
    }
}

impl<D: FractalDescriptor> RenderHistory<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HistoryConfig) -> Self {
        Self { stack: Vec::new(), config }
    }

    /// Draw a new view and record it as the current one. Nothing is recorded
    /// if drawing fails.
    pub fn render(&mut self, descriptor: D) -> Result<()> {
        descriptor.render().map_err(|e| {
            warn!("new view failed to render: {e}");
            e
        })?;
        self.stack.push(descriptor);
        if let Some(limit) = self.config.depth_limit() {
            if self.stack.len() > limit {
                let evicted = self.stack.len() - limit;
                self.stack.drain(..evicted);
                trace!("evicted {evicted} oldest render(s), depth limit {limit}");
            }
        }
        debug!("rendered new view, history depth {}", self.stack.len());
        Ok(())
    }

    /// Like [`render`](Self::render), for callers whose descriptor may be absent.
    pub fn try_render(&mut self, descriptor: Option<D>) -> Result<()> {
        match descriptor {
            Some(d) => self.render(d),
            None => {
                warn!("render called without a descriptor");
                Err(HistoryError::MissingDescriptor)
            }
        }
    }

    /// Step back to the previous view and redraw it at the current size.
    ///
    /// The first view is never removed: going back from it redraws it in
    /// place. The current view is only dropped once the previous one has
    /// been drawn.
    pub fn fractal_back(&mut self) -> Result<()> {
        if self.stack.is_empty() {
            warn!("back requested with no render history");
            return Err(HistoryError::EmptyHistory { op: "go back" });
        }
        let target = if self.can_go_back() { self.stack.len() - 2 } else { self.stack.len() - 1 };
        self.redraw(target)?;
        self.stack.truncate(target + 1);
        debug!("went back, history depth {}", self.stack.len());
        Ok(())
    }

    /// Redraw the current view fitted to the viewport.
    pub fn resize_render(&mut self) -> Result<()> {
        let top = self
            .stack
            .len()
            .checked_sub(1)
            .ok_or(HistoryError::EmptyHistory { op: "resize" })?;
        self.redraw(top)
    }

    fn redraw(&mut self, index: usize) -> Result<()> {
        let policy = self.config.resize;
        let resized = self.stack[index]
            .resize()
            .and_then(|resized| resized.render().map(|()| resized))
            .map_err(|e| {
                warn!("resize render of entry {index} failed: {e}");
                e
            })?;
        trace!("resize render of entry {index}, policy {policy:?}");
        if policy == ResizePolicy::Replace {
            self.stack[index] = resized;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        debug!("cleared {} render(s) from history", self.stack.len());
        self.stack.clear();
    }
}

impl<D> RenderHistory<D> {
    /// The view currently on screen.
    pub fn last(&self) -> Result<&D> {
        self.stack.last().ok_or(HistoryError::EmptyHistory { op: "read last render" })
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Whether going back would reach an earlier view.
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Oldest to newest.
    pub fn iter(&self) -> std::slice::Iter<'_, D> {
        self.stack.iter()
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::testing::{new_log, Frame, Recorded};

    fn names(h: &RenderHistory<Recorded>) -> Vec<&'static str> {
        h.iter().map(|d| d.frame.name).collect()
    }

    #[test]
    fn render_draws_then_records() {
        let log = new_log();
        let mut h = RenderHistory::new();
        h.render(Recorded::new("a", &log)).unwrap();
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(h.len(), 1);
        assert_eq!(h.last().unwrap().frame.name, "a");
    }

    #[test]
    fn last_is_most_recent_render() {
        let log = new_log();
        let mut h = RenderHistory::new();
        h.render(Recorded::new("a", &log)).unwrap();
        h.render(Recorded::new("b", &log)).unwrap();
        assert_eq!(h.last().unwrap().frame.name, "b");
    }

    #[test]
    fn clear_then_last_is_empty_error() {
        let log = new_log();
        let mut h = RenderHistory::new();
        for name in ["a", "b", "c"] {
            h.render(Recorded::new(name, &log)).unwrap();
        }
        h.clear();
        assert!(h.is_empty());
        assert!(matches!(h.last(), Err(HistoryError::EmptyHistory { .. })));
        // clearing draws nothing
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn back_on_single_entry_keeps_it_and_redraws_once() {
        let log = new_log();
        let mut h = RenderHistory::new();
        h.render(Recorded::new("a", &log)).unwrap();
        log.borrow_mut().clear();

        h.fractal_back().unwrap();
        assert_eq!(h.len(), 1);
        assert_eq!(*log.borrow(), vec![Frame { name: "a", generation: 1 }]);
    }

    #[test]
    fn back_from_two_renders_previous_view() {
        let log = new_log();
        let mut h = RenderHistory::new();
        h.render(Recorded::new("a", &log)).unwrap();
        h.render(Recorded::new("b", &log)).unwrap();
        log.borrow_mut().clear();

        h.fractal_back().unwrap();
        assert_eq!(names(&h), vec!["a"]);
        assert_eq!(*log.borrow(), vec![Frame { name: "a", generation: 1 }]);
    }

    #[test]
    fn back_on_empty_fails() {
        let mut h: RenderHistory<Recorded> = RenderHistory::new();
        let err = h.fractal_back().unwrap_err();
        assert!(matches!(err, HistoryError::EmptyHistory { op: "go back" }));
    }

    #[test]
    fn resize_render_on_empty_fails() {
        let mut h: RenderHistory<Recorded> = RenderHistory::new();
        assert!(matches!(h.resize_render(), Err(HistoryError::EmptyHistory { op: "resize" })));
    }

    #[test]
    fn try_render_rejects_missing_descriptor() {
        let log = new_log();
        let mut h = RenderHistory::new();
        h.render(Recorded::new("a", &log)).unwrap();
        let err = h.try_render(None).unwrap_err();
        assert!(matches!(err, HistoryError::MissingDescriptor));
        assert_eq!(names(&h), vec!["a"]);
        assert_eq!(log.borrow().len(), 1);

        h.try_render(Some(Recorded::new("b", &log))).unwrap();
        assert_eq!(names(&h), vec!["a", "b"]);
    }

    #[test]
    fn replace_policy_stores_resized_view() {
        let log = new_log();
        let mut h = RenderHistory::new();
        h.render(Recorded::new("a", &log)).unwrap();
        h.resize_render().unwrap();
        h.resize_render().unwrap();
        assert_eq!(h.last().unwrap().frame.generation, 2);
        assert_eq!(log.borrow().last().unwrap().generation, 2);
    }

    #[test]
    fn discard_policy_leaves_stored_view_stale() {
        let log = new_log();
        let mut h = RenderHistory::with_config(HistoryConfig::default().with_resize(ResizePolicy::Discard));
        h.render(Recorded::new("a", &log)).unwrap();
        h.resize_render().unwrap();
        h.resize_render().unwrap();
        assert_eq!(h.last().unwrap().frame.generation, 0);
        assert_eq!(log.borrow().last().unwrap().generation, 1);
    }

    #[test]
    fn depth_limit_evicts_oldest() {
        let log = new_log();
        let mut h = RenderHistory::with_config(HistoryConfig::default().with_max_depth(2));
        for name in ["a", "b", "c", "d"] {
            h.render(Recorded::new(name, &log)).unwrap();
        }
        assert_eq!(names(&h), vec!["c", "d"]);
        assert_eq!(log.borrow().len(), 4);
    }

    #[test]
    fn can_go_back_tracks_depth() {
        let log = new_log();
        let mut h = RenderHistory::new();
        assert!(!h.can_go_back());
        h.render(Recorded::new("a", &log)).unwrap();
        assert!(!h.can_go_back());
        h.render(Recorded::new("b", &log)).unwrap();
        assert!(h.can_go_back());
        h.fractal_back().unwrap();
        assert!(!h.can_go_back());
    }

    #[test]
    fn repeated_back_walks_to_first_view() {
        let log = new_log();
        let mut h = RenderHistory::new();
        for name in ["a", "b", "c"] {
            h.render(Recorded::new(name, &log)).unwrap();
        }
        log.borrow_mut().clear();
        for _ in 0..4 {
            h.fractal_back().unwrap();
        }
        assert_eq!(names(&h), vec!["a"]);
        let drawn: Vec<_> = log.borrow().iter().map(|f| f.name).collect();
        assert_eq!(drawn, vec!["b", "a", "a", "a"]);
    }

    #[test]
    fn failed_render_is_not_recorded() {
        let log = new_log();
        let mut h = RenderHistory::new();
        h.render(Recorded::new("a", &log)).unwrap();
        let b = Recorded::new("b", &log);
        b.breaker().set(true);

        let err = h.render(b).unwrap_err();
        assert!(matches!(err, HistoryError::Render(_)));
        assert_eq!(names(&h), vec!["a"]);

        h.render(Recorded::new("c", &log)).unwrap();
        assert_eq!(names(&h), vec!["a", "c"]);
    }

    #[test]
    fn failed_back_keeps_current_view() {
        let log = new_log();
        let mut h = RenderHistory::new();
        let a = Recorded::new("a", &log);
        let breaker = a.breaker();
        h.render(a).unwrap();
        h.render(Recorded::new("b", &log)).unwrap();
        breaker.set(true);

        assert!(matches!(h.fractal_back(), Err(HistoryError::Render(_))));
        assert_eq!(names(&h), vec!["a", "b"]);
        assert_eq!(h.iter().next().unwrap().frame.generation, 0);

        breaker.set(false);
        h.fractal_back().unwrap();
        assert_eq!(names(&h), vec!["a"]);
    }

    #[test]
    fn failed_resize_render_leaves_entry_untouched() {
        let log = new_log();
        let mut h = RenderHistory::new();
        let a = Recorded::new("a", &log);
        let breaker = a.breaker();
        h.render(a).unwrap();
        breaker.set(true);

        assert!(h.resize_render().is_err());
        assert_eq!(h.last().unwrap().frame.generation, 0);
        assert_eq!(log.borrow().len(), 1);
    }
}
