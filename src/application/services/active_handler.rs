//! ActiveHandler - the one preview component owned by a preview run
//!
//! Lifecycle: activated -> initialised -> bound -> unloaded -> released.
//! Dropping the handler unloads it if it is still bound, then releases the
//! component.

use std::path::{Path, PathBuf};

use crate::application::ports::component_port::PreviewComponent;
use crate::domain::value_objects::{ClassId, HResult, Rect, WindowId};

pub struct ActiveHandler<C: PreviewComponent> {
    component: C,
    class_id: ClassId,
    path: Option<PathBuf>,
    host: Option<WindowId>,
}

impl<C: PreviewComponent> ActiveHandler<C> {
    pub fn new(component: C, class_id: ClassId) -> Self {
        Self {
            component,
            class_id,
            path: None,
            host: None,
        }
    }

    pub fn class_id(&self) -> ClassId {
        self.class_id
    }

    /// File the handler was initialised with
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Host window the handler is bound to
    pub fn host(&self) -> Option<WindowId> {
        self.host
    }

    pub fn is_bound(&self) -> bool {
        self.host.is_some()
    }

    pub fn initialize(&mut self, path: &Path) -> Result<(), HResult> {
        self.component.initialize_with_file(path)?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Bind to `rect` of `host`; also used to re-bind after a resize
    pub fn set_window(&mut self, host: WindowId, rect: Rect) -> Result<(), HResult> {
        self.component.set_window(host, rect)?;
        self.host = Some(host);
        Ok(())
    }

    pub fn do_preview(&self) -> Result<(), HResult> {
        self.component.do_preview()
    }

    /// Unbind from the host. Does nothing if not bound.
    pub fn unload(&mut self) {
        if let Some(host) = self.host.take() {
            crate::log!("unloading handler {} from {:?}", self.class_id, host);
            if let Err(code) = self.component.unload() {
                crate::log!("Unload failed: {}", code);
            }
        }
    }
}

impl<C: PreviewComponent> Drop for ActiveHandler<C> {
    fn drop(&mut self) {
        self.unload();
        crate::log!("releasing handler {}", self.class_id);
    }
}

/// Keeps a fresh surface binding until the bind sequence completes.
///
/// Dropped without [`SurfaceBinding::commit`], it unloads the handler, so a
/// failure after binding unbinds before any window is destroyed.
pub struct SurfaceBinding<'h, C: PreviewComponent> {
    handler: &'h mut ActiveHandler<C>,
    committed: bool,
}

impl<'h, C: PreviewComponent> SurfaceBinding<'h, C> {
    pub fn bind(
        handler: &'h mut ActiveHandler<C>,
        host: WindowId,
        rect: Rect,
    ) -> Result<Self, HResult> {
        handler.set_window(host, rect)?;
        Ok(Self {
            handler,
            committed: false,
        })
    }

    pub fn handler(&self) -> &ActiveHandler<C> {
        &*self.handler
    }

    /// Keep the binding past this guard
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl<C: PreviewComponent> Drop for SurfaceBinding<'_, C> {
    fn drop(&mut self) {
        if !self.committed {
            self.handler.unload();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ComponentFactory;
    use crate::test_support::{FakeComponent, FakeComponentFactory, Journal};

    const CLSID: ClassId = ClassId::from_u128(7);

    fn handler(journal: &Journal) -> ActiveHandler<FakeComponent> {
        let factory = FakeComponentFactory::new(journal.clone()).accepting(CLSID);
        let instance = factory.instantiate(&CLSID).unwrap();
        let component = factory.negotiate(&instance).unwrap();
        ActiveHandler::new(component, CLSID)
    }

    #[test]
    fn test_drop_unbound_only_releases() {
        let journal = Journal::default();
        drop(handler(&journal));

        assert!(!journal.contains("unload"));
        assert!(journal.contains("release component"));
    }

    #[test]
    fn test_drop_bound_unloads_then_releases() {
        let journal = Journal::default();
        let mut h = handler(&journal);
        h.set_window(WindowId(3), Rect::from_pos_size(0, 0, 10, 10)).unwrap();
        assert!(h.is_bound());
        drop(h);

        assert!(journal.before("unload", "release component"));
    }

    #[test]
    fn test_uncommitted_binding_unloads() {
        let journal = Journal::default();
        let mut h = handler(&journal);
        {
            let _binding =
                SurfaceBinding::bind(&mut h, WindowId(3), Rect::from_pos_size(0, 0, 5, 5))
                    .unwrap();
        }
        assert!(!h.is_bound());
        assert_eq!(journal.count("unload"), 1);
    }

    #[test]
    fn test_committed_binding_stays_bound() {
        let journal = Journal::default();
        let mut h = handler(&journal);
        SurfaceBinding::bind(&mut h, WindowId(3), Rect::from_pos_size(0, 0, 5, 5))
            .unwrap()
            .commit();

        assert_eq!(h.host(), Some(WindowId(3)));
        assert!(!journal.contains("unload"));
    }
}
