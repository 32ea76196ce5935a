//! ClassId value object - registered component class identifier
//!
//! Class identifiers are 128-bit values stored in the registry in their braced
//! textual form, e.g. `{8895B1C6-B41F-4C1C-A562-0D564250836F}`.

use std::fmt;
use std::str::FromStr;

/// Shell extension category for preview handlers
pub const PREVIEW_HANDLER_CATEGORY: ClassId =
    ClassId::from_u128(0x8895B1C6_B41F_4C1C_A562_0D564250836F);

/// Group lengths of the textual form, in hex digits
const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

/// A 128-bit class identifier
///
/// The integer uses the same digit order as the textual form, so
/// `{01234567-89AB-...}` is `0x01234567_89AB_...`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClassId(u128);

impl ClassId {
    pub const fn from_u128(value: u128) -> Self {
        Self(value)
    }

    pub const fn to_u128(self) -> u128 {
        self.0
    }

    /// Parse the braced registry form, returning `None` when malformed.
    ///
    /// Surrounding whitespace is tolerated; ProgIDs and unbraced values are not.
    pub fn parse(text: &str) -> Option<Self> {
        let inner = text.trim().strip_prefix('{')?.strip_suffix('}')?;

        let mut value: u128 = 0;
        let mut groups = inner.split('-');
        for expected in GROUPS {
            let group = groups.next()?;
            if group.len() != expected || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            let digits = u128::from_str_radix(group, 16).ok()?;
            value = (value << (expected * 4)) | digits;
        }
        if groups.next().is_some() {
            return None;
        }

        Some(Self(value))
    }

    /// True if this identifier is the preview handler category
    pub fn is_preview_category(&self) -> bool {
        *self == PREVIEW_HANDLER_CATEGORY
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        write!(
            f,
            "{{{:08X}-{:04X}-{:04X}-{:04X}-{:012X}}}",
            (v >> 96) as u32,
            (v >> 80) as u16,
            (v >> 64) as u16,
            (v >> 48) as u16,
            v & 0xFFFF_FFFF_FFFF
        )
    }
}

/// Error returned by [`ClassId::from_str`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a class identifier: {0:?}")]
pub struct InvalidClassId(pub String);

impl FromStr for ClassId {
    type Err = InvalidClassId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidClassId(s.to_string()))
    }
}
