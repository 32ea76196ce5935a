//! Ports - interfaces the infrastructure layer implements

pub mod component_port;
pub mod platform_port;
pub mod window_port;

pub use component_port::{ComponentFactory, PreviewComponent};
pub use platform_port::PreviewPlatform;
pub use window_port::{OwnedWindow, WindowSystem};
