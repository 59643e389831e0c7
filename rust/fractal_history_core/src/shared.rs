//! Single-threaded shared handle, for handing one history to every UI handler.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::config::HistoryConfig;
use crate::descriptor::FractalDescriptor;
use crate::error::{HistoryError, Result};
use crate::history::RenderHistory;

/// Cloning the handle shares the underlying history.
#[derive(Debug)]
pub struct SharedHistory<D> {
    inner: Rc<RefCell<RenderHistory<D>>>,
}

impl<D> Clone for SharedHistory<D> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<D: FractalDescriptor> SharedHistory<D> {
    pub fn new(config: HistoryConfig) -> Self {
        Self::from_history(RenderHistory::with_config(config))
    }
}

impl<D> SharedHistory<D> {
    pub fn from_history(history: RenderHistory<D>) -> Self {
        Self { inner: Rc::new(RefCell::new(history)) }
    }

    /// Panics if a mutable borrow is live, e.g. when called from inside a
    /// descriptor's `render`.
    pub fn borrow(&self) -> Ref<'_, RenderHistory<D>> {
        self.inner.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, RenderHistory<D>> {
        self.inner.borrow_mut()
    }

    /// Like [`borrow`](Self::borrow), but reports a live mutable borrow as
    /// [`HistoryError::Busy`] instead of panicking.
    pub fn try_borrow(&self) -> Result<Ref<'_, RenderHistory<D>>> {
        self.inner.try_borrow().map_err(|_| HistoryError::Busy)
    }

    pub fn try_borrow_mut(&self) -> Result<RefMut<'_, RenderHistory<D>>> {
        self.inner.try_borrow_mut().map_err(|_| HistoryError::Busy)
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<D: FractalDescriptor> Default for SharedHistory<D> {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}
