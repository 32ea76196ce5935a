//! ShowPreviewUseCase - host a discovered preview handler until killed
//!
//! validate args -> runtime -> discover -> activate -> bind -> auto-fit ->
//! message loop -> teardown. Every step before the message loop is a hard
//! failure point; nothing created by this run survives a failure.
//!
//! Validation is separate from [`ShowPreviewUseCase::run`] so callers can
//! reject bad arguments before creating anything of their own.

use std::time::Duration;

use crate::application::ports::platform_port::PreviewPlatform;
use crate::application::ports::window_port::WindowSystem;
use crate::application::services::{
    AutoFitSettings, AutoFitter, HandlerActivator, HostBinder, WindowLayout,
};
use crate::domain::entities::PreviewRequest;
use crate::domain::errors::PreviewError;
use crate::domain::services::RegistryWalker;
use crate::domain::value_objects::Size;
use crate::shared::config::{AutoFitConfig, PreviewConfig, WindowConfig};

/// Use case for showing one preview
pub struct ShowPreviewUseCase<'a, P: PreviewPlatform> {
    platform: &'a P,
    config: &'a PreviewConfig,
}

impl<'a, P: PreviewPlatform> ShowPreviewUseCase<'a, P> {
    pub fn new(platform: &'a P, config: &'a PreviewConfig) -> Self {
        Self { platform, config }
    }

    /// Check `args` (program name first) without touching the registry or
    /// creating anything
    pub fn validate(&self, args: &[String]) -> Result<PreviewRequest, PreviewError> {
        PreviewRequest::from_args(
            args,
            &self.config.required_extension,
            &self.config.window.default_title,
        )
    }

    /// Validate `args`, then [`run`](Self::run) the preview
    pub fn execute(&self, args: &[String]) -> Result<(), PreviewError> {
        let request = self.validate(args)?;
        self.run(&request)
    }

    /// Run the pipeline for an already validated request.
    ///
    /// Returns once the top-level window has been destroyed and every
    /// resource released.
    pub fn run(&self, request: &PreviewRequest) -> Result<(), PreviewError> {
        crate::log!("preview {:?} as {:?}", request.path, request.title);

        // Component runtime; dropped last
        let _runtime = self.platform.initialize_runtime()?;

        let file_type = request.file_type_key();
        let candidates =
            RegistryWalker::new(self.platform.registration_store()).discover(&file_type)?;

        let handler =
            HandlerActivator::new(self.platform.component_factory()).activate(&candidates)?;

        let windows = self.platform.window_system();
        let mut preview = HostBinder::new(windows, window_layout(&self.config.window)).bind(
            handler,
            &request.path,
            &request.title,
        )?;

        // Best-effort resize to content
        if self.config.auto_fit.enabled {
            AutoFitter::new(auto_fit_settings(&self.config.auto_fit)).fit(&mut preview);
        }

        // Idle until the launcher destroys the window or kills us
        crate::log!("entering message loop");
        windows.run_message_loop();
        crate::log!("message loop exited, tearing down");

        drop(preview);
        Ok(())
    }
}

/// Initial window placement; non-positive sizes fall back to the default
fn window_layout(config: &WindowConfig) -> WindowLayout {
    let fallback = WindowLayout::default().size;
    let width = if config.width > 0 { config.width } else { fallback.width };
    let height = if config.height > 0 { config.height } else { fallback.height };
    WindowLayout {
        x: config.x,
        y: config.y,
        size: Size::new(width, height),
        host_title: config.host_title.clone(),
    }
}

fn auto_fit_settings(config: &AutoFitConfig) -> AutoFitSettings {
    AutoFitSettings {
        grace: Duration::from_millis(config.grace_ms),
        poll_interval: Duration::from_millis(config.poll_interval_ms),
        settle_timeout: Duration::from_millis(config.settle_timeout_ms),
    }
}
