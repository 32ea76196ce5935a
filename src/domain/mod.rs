//! Domain Layer - preview hosting concepts with no OS dependencies
//!
//! - **Value objects**: class identifiers, status codes, rectangles, handles
//! - **Entities**: handler candidates and validated requests
//! - **Repositories**: the registration store interface
//! - **Services**: registry discovery and the auto-fit search

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use errors::{BindStep, PreviewError};
