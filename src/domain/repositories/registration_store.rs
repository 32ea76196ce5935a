//! RegistrationStore - read-only view of the class registration database
//!
//! Paths are backslash separated and relative to the class root, e.g.
//! `.clip\ShellEx`. Implementations never write.

/// Repository interface for handler registrations
pub trait RegistrationStore {
    /// Names of the direct subkeys of `path`, in the store's enumeration
    /// order, or `None` when `path` does not exist.
    fn subkeys(&self, path: &str) -> Option<Vec<String>>;

    /// The default (unnamed) string value of `path`, if present.
    fn default_value(&self, path: &str) -> Option<String>;
}

impl<T: RegistrationStore + ?Sized> RegistrationStore for &T {
    fn subkeys(&self, path: &str) -> Option<Vec<String>> {
        (**self).subkeys(path)
    }

    fn default_value(&self, path: &str) -> Option<String> {
        (**self).default_value(path)
    }
}

/// Join registry path segments
pub fn join_path(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{parent}\\{child}")
    }
}

/// A store with nothing registered
pub struct NullRegistrationStore;

impl RegistrationStore for NullRegistrationStore {
    fn subkeys(&self, _path: &str) -> Option<Vec<String>> {
        None
    }

    fn default_value(&self, _path: &str) -> Option<String> {
        None
    }
}
