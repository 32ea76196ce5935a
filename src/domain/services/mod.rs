//! Domain Services - pure logic over domain types

pub mod auto_fit;
pub mod registry_walker;

pub use auto_fit::{find_largest_descendant, FitResult, WindowTree};
pub use registry_walker::{is_preferred_category, RegistryWalker, HANDLERS_SUBKEY};
