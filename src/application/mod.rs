//! Application Layer - the preview pipeline
//!
//! This layer orchestrates domain services against abstract OS services.
//! It contains:
//! - **Use Cases**: ShowPreview, the whole run from arguments to teardown
//! - **Ports**: Interfaces for the registry, components and windows
//! - **Services**: Activation, binding and auto-fit stages
//!
//! # Clean Architecture Rules
//! - Depends only on the domain layer
//! - Defines ports that infrastructure implements
//! - Contains no Win32 code

pub mod ports;
pub mod services;
pub mod use_cases;

pub use ports::*;
pub use services::*;
pub use use_cases::*;
