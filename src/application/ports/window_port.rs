//! WindowPort - interface to the OS windowing system
//!
//! Everything runs on the thread that owns the windows. Implementations
//! post the quit message when a top-level window is destroyed.

use crate::domain::services::auto_fit::WindowTree;
use crate::domain::value_objects::{HResult, Rect, Size, WindowId};

/// Port interface for host window management
pub trait WindowSystem: WindowTree {
    /// Register the shared window class. Already registered is success.
    fn register_class(&self) -> Result<(), HResult>;

    /// Create a hidden top-level popup window with screen `bounds`
    fn create_top_level(&self, title: &str, bounds: Rect) -> Result<WindowId, HResult>;

    /// Show a window and paint it immediately
    fn show(&self, window: WindowId);

    /// Create a visible child window with `bounds` in `parent` client space
    fn create_host(&self, parent: WindowId, title: &str, bounds: Rect)
        -> Result<WindowId, HResult>;

    fn destroy(&self, window: WindowId);

    fn is_alive(&self, window: WindowId) -> bool;

    /// Move and resize a window (child windows use parent client space)
    fn set_bounds(&self, window: WindowId, bounds: Rect);

    /// Resize a window, keeping its position
    fn resize(&self, window: WindowId, size: Size);

    /// Deliver a synthetic resize notification
    fn notify_resized(&self, window: WindowId, size: Size);

    /// Dispatch messages until the quit message arrives
    fn run_message_loop(&self);
}

/// A window destroyed when the guard goes out of scope.
///
/// Windows already destroyed by someone else (e.g. the external launcher)
/// are left alone.
pub struct OwnedWindow<'w, W: WindowSystem + ?Sized> {
    system: &'w W,
    id: WindowId,
}

impl<'w, W: WindowSystem + ?Sized> OwnedWindow<'w, W> {
    pub fn new(system: &'w W, id: WindowId) -> Self {
        Self { system, id }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }
}

impl<W: WindowSystem + ?Sized> Drop for OwnedWindow<'_, W> {
    fn drop(&mut self) {
        if self.system.is_alive(self.id) {
            crate::log!("destroying window {:?}", self.id);
            self.system.destroy(self.id);
        }
    }
}
