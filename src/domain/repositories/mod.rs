//! Domain Repository Interfaces
//!
//! These are trait definitions only. Implementations belong in the
//! adapters/gateways layer (in-memory) or the infrastructure layer (Win32).

pub mod registration_store;

pub use registration_store::{join_path, NullRegistrationStore, RegistrationStore};
