//! Domain Value Objects - Immutable values that describe characteristics
//!
//! Value objects have no identity and are compared by their values.

pub mod class_id;
pub mod hresult;
pub mod rect;
pub mod window_id;

pub use class_id::{ClassId, InvalidClassId, PREVIEW_HANDLER_CATEGORY};
pub use hresult::HResult;
pub use rect::{Rect, Size};
pub use window_id::WindowId;
