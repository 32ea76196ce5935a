//! CompositionRoot - Dependency Injection Container
//!
//! Wires the Win32 adapters into a [`PreviewPlatform`] for the preview
//! pipeline.

use crate::application::ports::PreviewPlatform;
use crate::domain::errors::PreviewError;
use crate::platform::win32::{
    ComApartment, Win32ComponentFactory, Win32RegistrationStore, Win32WindowSystem,
};
use crate::shared::config::PreviewConfig;

/// The live Windows platform - owns all adapters
pub struct Win32Platform {
    store: Win32RegistrationStore,
    factory: Win32ComponentFactory,
    windows: Win32WindowSystem,
}

impl Win32Platform {
    pub fn new(config: &PreviewConfig) -> Self {
        Self {
            store: Win32RegistrationStore::new(),
            factory: Win32ComponentFactory::new(),
            windows: Win32WindowSystem::new(&config.window.class_name),
        }
    }
}

impl PreviewPlatform for Win32Platform {
    type Store = Win32RegistrationStore;
    type Factory = Win32ComponentFactory;
    type Windows = Win32WindowSystem;
    type Runtime = ComApartment;

    fn initialize_runtime(&self) -> Result<ComApartment, PreviewError> {
        ComApartment::initialize()
    }

    fn registration_store(&self) -> &Win32RegistrationStore {
        &self.store
    }

    fn component_factory(&self) -> &Win32ComponentFactory {
        &self.factory
    }

    fn window_system(&self) -> &Win32WindowSystem {
        &self.windows
    }
}
