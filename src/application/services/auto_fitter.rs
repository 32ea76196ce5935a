//! AutoFitter - sizes the preview windows to the handler's real content
//!
//! There is no signal for "the handler finished building its child
//! windows". The fitter waits a grace period, then samples the window tree
//! until two consecutive samples agree or the settle timeout runs out.
//! It never fails the preview and never blocks past its deadline.

use std::thread;
use std::time::{Duration, Instant};

use crate::application::ports::component_port::PreviewComponent;
use crate::application::ports::window_port::WindowSystem;
use crate::domain::services::auto_fit::{find_largest_descendant, FitResult};
use crate::domain::value_objects::{Rect, WindowId};

use super::host_binder::BoundPreview;

/// Timing of the auto-fit pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoFitSettings {
    pub grace: Duration,
    pub poll_interval: Duration,
    pub settle_timeout: Duration,
}

impl Default for AutoFitSettings {
    fn default() -> Self {
        Self {
            grace: Duration::from_millis(200),
            poll_interval: Duration::from_millis(50),
            settle_timeout: Duration::from_millis(1000),
        }
    }
}

pub struct AutoFitter {
    settings: AutoFitSettings,
}

impl AutoFitter {
    pub fn new(settings: AutoFitSettings) -> Self {
        Self { settings }
    }

    /// Resize host and top-level window to the largest visible descendant.
    ///
    /// Leaves the windows untouched when nothing qualifies.
    pub fn fit<C, W>(&self, preview: &mut BoundPreview<'_, C, W>) -> Option<FitResult>
    where
        C: PreviewComponent,
        W: WindowSystem + ?Sized,
    {
        let windows = preview.windows();
        let host = preview.host();

        let Some(best) = self.settle(windows, host) else {
            crate::log!("auto-fit: no visible content under {:?}, keeping size", host);
            return None;
        };

        let size = best.rect.size();
        crate::log!(
            "auto-fit: {:?} is {}x{} (area {})",
            best.window,
            size.width,
            size.height,
            best.area
        );

        windows.set_bounds(host, Rect::from_size(size));
        windows.resize(preview.top_level(), size);
        if let Err(code) = preview
            .handler_mut()
            .set_window(host, Rect::from_size(size))
        {
            crate::log!("auto-fit: SetWindow after resize failed: {}", code);
        }
        windows.notify_resized(host, size);

        Some(best)
    }

    fn settle<W: WindowSystem + ?Sized>(&self, windows: &W, host: WindowId) -> Option<FitResult> {
        thread::sleep(self.settings.grace);
        let mut sample = find_largest_descendant(windows, host);

        let deadline = Instant::now() + self.settings.settle_timeout;
        while Instant::now() < deadline {
            thread::sleep(self.settings.poll_interval);
            let next = find_largest_descendant(windows, host);
            if next == sample {
                break;
            }
            sample = next;
        }

        sample
    }
}
