//! Domain Entities - Core objects of the preview pipeline

pub mod handler_candidate;
pub mod preview_request;

pub use handler_candidate::HandlerCandidate;
pub use preview_request::PreviewRequest;
