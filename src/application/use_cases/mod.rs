//! Use Cases - application-level workflows

pub mod show_preview;

pub use show_preview::ShowPreviewUseCase;
