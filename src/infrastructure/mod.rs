//! Infrastructure Layer - wiring of the Win32 adapters

pub mod composition_root;

pub use composition_root::Win32Platform;
