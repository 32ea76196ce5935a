//! ClipThumb library - hosts a shell preview handler for `.clip` documents
//!
//! Everything except the Win32 adapters is platform independent, so the
//! pipeline can be tested without Windows.

// Include the log module so the log! macro works
#[macro_use]
pub mod log;

pub mod adapters;
pub mod application;
pub mod domain;
pub mod shared;

// Win32 adapters and their wiring
#[cfg(target_os = "windows")]
pub mod infrastructure;
pub mod platform;

#[cfg(test)]
mod test_support;
