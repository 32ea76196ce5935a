//! Win32 platform implementation

pub mod com;
pub mod event;
pub mod registry;
pub mod window;

pub use com::{ComApartment, Win32ComponentFactory, Win32PreviewComponent};
pub use event::{post_quit, run_message_loop};
pub use registry::Win32RegistrationStore;
pub use window::{hwnd, window_id, Win32WindowSystem};
