//! HostBinder - creates the host windows and starts the preview
//!
//! Each step either succeeds or unwinds everything created before it, in
//! reverse order, before the handler itself is released.

use std::path::Path;

use crate::application::ports::component_port::PreviewComponent;
use crate::application::ports::window_port::{OwnedWindow, WindowSystem};
use crate::domain::errors::{BindStep, PreviewError};
use crate::domain::value_objects::{HResult, Rect, Size, WindowId};

use super::active_handler::{ActiveHandler, SurfaceBinding};

/// Initial placement of the preview windows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowLayout {
    pub x: i32,
    pub y: i32,
    pub size: Size,
    pub host_title: String,
}

impl Default for WindowLayout {
    fn default() -> Self {
        Self {
            x: 100,
            y: 100,
            size: Size::new(800, 800),
            host_title: "Clip Preview Host".to_string(),
        }
    }
}

/// A rendering preview: the handler plus the windows it draws into.
///
/// Fields drop in declaration order, so the handler is unloaded and
/// released before any remaining window is destroyed.
pub struct BoundPreview<'w, C: PreviewComponent, W: WindowSystem + ?Sized> {
    handler: ActiveHandler<C>,
    host: OwnedWindow<'w, W>,
    top_level: OwnedWindow<'w, W>,
    windows: &'w W,
}

impl<'w, C: PreviewComponent, W: WindowSystem + ?Sized> BoundPreview<'w, C, W> {
    pub fn handler(&self) -> &ActiveHandler<C> {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut ActiveHandler<C> {
        &mut self.handler
    }

    pub fn host(&self) -> WindowId {
        self.host.id()
    }

    pub fn top_level(&self) -> WindowId {
        self.top_level.id()
    }

    pub fn windows(&self) -> &'w W {
        self.windows
    }
}

/// Binds an activated handler to a freshly created host window
pub struct HostBinder<'w, W: WindowSystem + ?Sized> {
    windows: &'w W,
    layout: WindowLayout,
}

impl<'w, W: WindowSystem + ?Sized> HostBinder<'w, W> {
    pub fn new(windows: &'w W, layout: WindowLayout) -> Self {
        Self { windows, layout }
    }

    /// Initialise, create windows, bind and start rendering.
    ///
    /// The top-level window is shown before content exists; the handler
    /// fills it in asynchronously.
    pub fn bind<C: PreviewComponent>(
        &self,
        mut handler: ActiveHandler<C>,
        path: &Path,
        title: &str,
    ) -> Result<BoundPreview<'w, C, W>, PreviewError> {
        handler
            .initialize(path)
            .map_err(|code| fail(BindStep::Initialize, code))?;

        self.windows
            .register_class()
            .map_err(|code| fail(BindStep::RegisterClass, code))?;

        let size = self.layout.size;
        let top_level = self
            .windows
            .create_top_level(
                title,
                Rect::from_pos_size(self.layout.x, self.layout.y, size.width, size.height),
            )
            .map(|id| OwnedWindow::new(self.windows, id))
            .map_err(|code| fail(BindStep::CreateTopLevel, code))?;
        self.windows.show(top_level.id());

        let host = self
            .windows
            .create_host(top_level.id(), &self.layout.host_title, Rect::from_size(size))
            .map(|id| OwnedWindow::new(self.windows, id))
            .map_err(|code| fail(BindStep::CreateHost, code))?;

        let binding = SurfaceBinding::bind(&mut handler, host.id(), Rect::from_size(size))
            .map_err(|code| fail(BindStep::SetWindow, code))?;
        binding
            .handler()
            .do_preview()
            .map_err(|code| fail(BindStep::DoPreview, code))?;
        binding.commit();

        crate::log!(
            "preview bound: top={:?} host={:?} size={}x{}",
            top_level.id(),
            host.id(),
            size.width,
            size.height
        );

        Ok(BoundPreview {
            handler,
            host,
            top_level,
            windows: self.windows,
        })
    }
}

fn fail(step: BindStep, code: HResult) -> PreviewError {
    crate::log!("{} failed: {}", step, code);
    PreviewError::bind(step, code)
}
