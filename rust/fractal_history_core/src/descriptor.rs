//! The capability the history needs from a rendered fractal view.

use crate::error::RenderError;

/// A fractal view produced by the rendering engine.
///
/// The history stores descriptors as opaque values and only ever asks them to
/// draw themselves or to produce a copy fitted to the current viewport.
/// Either call may fail; the history is left as it was when one does.
pub trait FractalDescriptor {
    /// Draw this view to the display.
    fn render(&self) -> Result<(), RenderError>;

    /// Return a new descriptor adapted to the current viewport size.
    /// The receiver is left unchanged.
    fn resize(&self) -> Result<Self, RenderError>
    where
        Self: Sized;
}
