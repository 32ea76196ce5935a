//! PlatformPort - the set of OS services one preview run needs

use crate::domain::errors::PreviewError;
use crate::domain::repositories::RegistrationStore;

use super::component_port::ComponentFactory;
use super::window_port::WindowSystem;

/// Bundles the adapters the preview pipeline runs against
pub trait PreviewPlatform {
    type Store: RegistrationStore;
    type Factory: ComponentFactory;
    type Windows: WindowSystem;

    /// Guard keeping the component runtime initialised while alive
    type Runtime;

    /// Initialise the component runtime for this thread
    fn initialize_runtime(&self) -> Result<Self::Runtime, PreviewError>;

    fn registration_store(&self) -> &Self::Store;

    fn component_factory(&self) -> &Self::Factory;

    fn window_system(&self) -> &Self::Windows;
}
