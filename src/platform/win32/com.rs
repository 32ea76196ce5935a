//! COM apartment and preview handler components

use std::path::Path;

use windows::core::{Interface, GUID, HSTRING, IUnknown, PCWSTR};
use windows::Win32::Foundation::RECT;
use windows::Win32::System::Com::{
    CoCreateInstance, CoInitializeEx, CoUninitialize, CLSCTX_INPROC_SERVER,
    COINIT_APARTMENTTHREADED, STGM_READ,
};
use windows::Win32::UI::Shell::IPreviewHandler;
use windows::Win32::UI::Shell::PropertiesSystem::IInitializeWithFile;

use crate::application::ports::{ComponentFactory, PreviewComponent};
use crate::domain::errors::PreviewError;
use crate::domain::value_objects::{ClassId, HResult, Rect, WindowId};

use super::window::hwnd;

/// Single-threaded COM apartment for the current thread.
///
/// Every interface pointer must be released before this is dropped.
pub struct ComApartment {
    _not_send: std::marker::PhantomData<*const ()>,
}

impl ComApartment {
    pub fn initialize() -> Result<Self, PreviewError> {
        let code = HResult(unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) }.0);
        if code.is_failure() {
            log!("CoInitializeEx failed: {}", code);
            return Err(PreviewError::Environment { code });
        }
        log!("COM apartment initialised");
        Ok(Self {
            _not_send: std::marker::PhantomData,
        })
    }
}

impl Drop for ComApartment {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
        log!("COM apartment released");
    }
}

/// Creates handler components in-process
#[derive(Default)]
pub struct Win32ComponentFactory;

impl Win32ComponentFactory {
    pub fn new() -> Self {
        Self
    }
}

impl ComponentFactory for Win32ComponentFactory {
    type Instance = IUnknown;
    type Component = Win32PreviewComponent;

    fn instantiate(&self, class_id: &ClassId) -> Result<IUnknown, HResult> {
        let clsid = GUID::from_u128(class_id.to_u128());
        unsafe { CoCreateInstance::<_, IUnknown>(&clsid, None, CLSCTX_INPROC_SERVER) }
            .map_err(HResult::from)
    }

    fn negotiate(&self, instance: &IUnknown) -> Option<Win32PreviewComponent> {
        let init = instance.cast::<IInitializeWithFile>().ok()?;
        let handler = instance.cast::<IPreviewHandler>().ok()?;
        Some(Win32PreviewComponent { init, handler })
    }
}

/// A handler exposing file initialisation and previewing.
///
/// Both interfaces are released when this is dropped.
pub struct Win32PreviewComponent {
    init: IInitializeWithFile,
    handler: IPreviewHandler,
}

impl PreviewComponent for Win32PreviewComponent {
    fn initialize_with_file(&self, path: &Path) -> Result<(), HResult> {
        let wide = HSTRING::from(path);
        unsafe { self.init.Initialize(PCWSTR(wide.as_ptr()), STGM_READ.0) }.map_err(HResult::from)
    }

    fn set_window(&self, host: WindowId, rect: Rect) -> Result<(), HResult> {
        let rc = RECT {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
        };
        unsafe { self.handler.SetWindow(hwnd(host), &rc) }.map_err(HResult::from)
    }

    fn do_preview(&self) -> Result<(), HResult> {
        unsafe { self.handler.DoPreview() }.map_err(HResult::from)
    }

    fn unload(&self) -> Result<(), HResult> {
        unsafe { self.handler.Unload() }.map_err(HResult::from)
    }
}
