//! Application Services - the steps of one preview run
//!
//! Each service owns one stage of the pipeline and hands a scoped resource
//! to the next; dropping that resource undoes the stage.

pub mod active_handler;
pub mod auto_fitter;
pub mod handler_activator;
pub mod host_binder;

pub use active_handler::{ActiveHandler, SurfaceBinding};
pub use auto_fitter::{AutoFitSettings, AutoFitter};
pub use handler_activator::HandlerActivator;
pub use host_binder::{BoundPreview, HostBinder, WindowLayout};
