//! HResult value object - component and OS status codes

use std::fmt;

/// A 32-bit status code as returned by component and window APIs.
///
/// Only used for diagnostics; callers never branch on specific values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HResult(pub i32);

impl HResult {
    /// Generic failure (`E_FAIL`)
    pub const FAIL: HResult = HResult(0x8000_4005_u32 as i32);

    /// Class not registered (`REGDB_E_CLASSNOTREG`)
    pub const CLASS_NOT_REGISTERED: HResult = HResult(0x8004_0154_u32 as i32);

    pub fn is_failure(&self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for HResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0 as u32)
    }
}

#[cfg(target_os = "windows")]
impl From<windows::core::Error> for HResult {
    fn from(err: windows::core::Error) -> Self {
        HResult(err.code().0)
    }
}
