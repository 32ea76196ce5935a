//! RegistryWalker - discovers handler classes registered for a file type
//!
//! Layout read (relative to the class root):
//!
//! ```text
//! .clip                      (default) = CSP.ClipFile      <- alias, optional
//! .clip\ShellEx\{category}   (default) = {handler CLSID}
//! CSP.ClipFile\ShellEx\...   used when .clip has no ShellEx
//! ```

use crate::domain::entities::HandlerCandidate;
use crate::domain::errors::PreviewError;
use crate::domain::repositories::{join_path, RegistrationStore};
use crate::domain::value_objects::ClassId;

/// Name of the per-type shell extension handler subtree
pub const HANDLERS_SUBKEY: &str = "ShellEx";

/// True if `subkey` names the preview handler category.
pub fn is_preferred_category(subkey: &str) -> bool {
    ClassId::parse(subkey).is_some_and(|id| id.is_preview_category())
}

/// Walks a [`RegistrationStore`] to find handler candidates
pub struct RegistryWalker<S: RegistrationStore> {
    store: S,
}

impl<S: RegistrationStore> RegistryWalker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Ordered handler candidates for `file_type`.
    ///
    /// Preferred-category entries come first, then every other entry, each
    /// group in store enumeration order. Entries whose value is not a class
    /// identifier are skipped. Fails only when neither the type nor its alias
    /// has a handler subtree.
    pub fn discover(&self, file_type: &str) -> Result<Vec<HandlerCandidate>, PreviewError> {
        let Some((handlers_path, subkeys)) = self.locate_handlers(file_type) else {
            crate::log!("discover({}): no {} subtree", file_type, HANDLERS_SUBKEY);
            return Err(PreviewError::NotRegistered {
                file_type: file_type.to_string(),
            });
        };

        // Two passes instead of a sort: pass order is the priority.
        let preferred = subkeys.iter().filter(|name| is_preferred_category(name));
        let others = subkeys.iter().filter(|name| !is_preferred_category(name));

        let candidates: Vec<HandlerCandidate> = preferred
            .map(|name| (name, true))
            .chain(others.map(|name| (name, false)))
            .filter_map(|(name, is_preferred)| {
                self.read_candidate(&handlers_path, name, is_preferred)
            })
            .collect();

        crate::log!(
            "discover({}): {} candidate(s) under {}",
            file_type,
            candidates.len(),
            handlers_path
        );
        Ok(candidates)
    }

    /// Find the handler subtree, directly or through the type's alias
    fn locate_handlers(&self, file_type: &str) -> Option<(String, Vec<String>)> {
        let direct = join_path(file_type, HANDLERS_SUBKEY);
        if let Some(subkeys) = self.store.subkeys(&direct) {
            return Some((direct, subkeys));
        }

        let alias = self.store.default_value(file_type)?;
        let alias = alias.trim();
        if alias.is_empty() || alias.eq_ignore_ascii_case(file_type) {
            return None;
        }

        crate::log!("discover({}): following alias {}", file_type, alias);
        let via_alias = join_path(alias, HANDLERS_SUBKEY);
        let subkeys = self.store.subkeys(&via_alias)?;
        Some((via_alias, subkeys))
    }

    fn read_candidate(
        &self,
        handlers_path: &str,
        name: &str,
        preferred: bool,
    ) -> Option<HandlerCandidate> {
        let value = self.store.default_value(&join_path(handlers_path, name));
        match value.as_deref().and_then(ClassId::parse) {
            Some(class_id) => Some(HandlerCandidate::new(class_id, name, preferred)),
            None => {
                crate::log!(
                    "discover: skipping {}\\{} (value {:?})",
                    handlers_path,
                    name,
                    value
                );
                None
            }
        }
    }
}
