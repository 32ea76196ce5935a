//! ComponentPort - interface to in-process handler components
//!
//! A factory instantiates a registered class and negotiates the two
//! capabilities a preview handler needs. Dropping any instance or component
//! releases exactly the references it holds.

use std::path::Path;

use crate::domain::value_objects::{ClassId, HResult, Rect, WindowId};

/// A component that supports both file initialisation and previewing
pub trait PreviewComponent {
    /// Point the component at its backing file, read-only
    fn initialize_with_file(&self, path: &Path) -> Result<(), HResult>;

    /// Bind (or re-bind) the component to a rectangle of `host`
    fn set_window(&self, host: WindowId, rect: Rect) -> Result<(), HResult>;

    /// Start rendering into the bound window
    fn do_preview(&self) -> Result<(), HResult>;

    /// Tear down whatever the component created inside the host
    fn unload(&self) -> Result<(), HResult>;
}

/// Port interface for component instantiation
pub trait ComponentFactory {
    /// A freshly created, not yet negotiated instance
    type Instance;

    /// The negotiated preview capability
    type Component: PreviewComponent;

    /// Create an in-process instance of `class_id`
    fn instantiate(&self, class_id: &ClassId) -> Result<Self::Instance, HResult>;

    /// Query both capabilities on `instance`.
    ///
    /// Returns `None` if either is missing. The instance is left to the
    /// caller, who releases it by dropping.
    fn negotiate(&self, instance: &Self::Instance) -> Option<Self::Component>;
}
