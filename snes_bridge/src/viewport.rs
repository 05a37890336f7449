//! Dimensions of the host rendering surface.
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Size of the visible rendering surface in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for ViewportSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Reports the current size of the host's rendering surface.
///
/// Implementations must answer immediately. A host that cannot measure its surface reports 0.
pub trait ViewportProvider {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn size(&self) -> ViewportSize {
        ViewportSize::new(self.width(), self.height())
    }
}

/// A size is a viewport that never changes.
impl ViewportProvider for ViewportSize {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn size(&self) -> ViewportSize {
        *self
    }
}

/// Viewport whose size is set by the host, e.g. from a resize handler.
///
/// Clones share the same size, so the host keeps one handle and the bridge owns another.
#[derive(Clone, Debug, Default)]
pub struct SharedViewport(Rc<Cell<ViewportSize>>);

impl SharedViewport {
    pub fn new(size: ViewportSize) -> Self {
        Self(Rc::new(Cell::new(size)))
    }

    pub fn resize(&self, size: ViewportSize) {
        self.0.set(size);
    }
}

impl ViewportProvider for SharedViewport {
    fn width(&self) -> u32 {
        self.0.get().width
    }

    fn height(&self) -> u32 {
        self.0.get().height
    }

    fn size(&self) -> ViewportSize {
        self.0.get()
    }
}

/// Detects changes of the surface size between presented frames.
///
/// Starts out at 0x0, so the first non-empty observation is always reported.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResizeTracker {
    last: ViewportSize,
}

impl ResizeTracker {
    /// Returns the new size if it differs from the previously observed one.
    pub fn observe(&mut self, size: ViewportSize) -> Option<ViewportSize> {
        if size == self.last {
            return None;
        }
        log::debug!("Viewport resized from {} to {}", self.last, size);
        self.last = size;
        Some(size)
    }

    pub fn last(&self) -> ViewportSize {
        self.last
    }
}
