//! WindowId value object - opaque OS window handle

/// Raw window handle value.
///
/// Kept as an integer so that the hosting pipeline stays platform
/// independent; the Win32 adapters convert to and from `HWND`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WindowId(pub isize);

impl WindowId {
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}
