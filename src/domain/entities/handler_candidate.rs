//! HandlerCandidate entity - a class discovered under a type's handler subtree

use crate::domain::value_objects::ClassId;

/// A handler class discovered during registry discovery.
///
/// Candidates only live for the duration of discovery and activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandlerCandidate {
    /// Class identifier read from the subkey's default value
    pub class_id: ClassId,
    /// Name of the subkey the identifier was read from
    pub subkey: String,
    /// Whether the subkey is the preview handler category
    pub preferred: bool,
}

impl HandlerCandidate {
    pub fn new(class_id: ClassId, subkey: impl Into<String>, preferred: bool) -> Self {
        Self {
            class_id,
            subkey: subkey.into(),
            preferred,
        }
    }
}
