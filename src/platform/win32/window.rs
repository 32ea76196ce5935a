//! Win32 window creation and management

use std::ffi::c_void;

use windows::core::{Error, HSTRING, PCWSTR};
use windows::Win32::Foundation::{
    BOOL, ERROR_CLASS_ALREADY_EXISTS, HWND, LPARAM, LRESULT, POINT, RECT, TRUE, WPARAM,
};
use windows::Win32::Graphics::Gdi::{ScreenToClient, UpdateWindow, COLOR_WINDOW, HBRUSH};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::*;

use crate::application::ports::WindowSystem;
use crate::domain::services::auto_fit::WindowTree;
use crate::domain::value_objects::{HResult, Rect, Size, WindowId};

use super::event::{post_quit, run_message_loop};

pub fn hwnd(id: WindowId) -> HWND {
    HWND(id.0 as *mut c_void)
}

pub fn window_id(hwnd: HWND) -> WindowId {
    WindowId(hwnd.0 as isize)
}

fn is_top_level(hwnd: HWND) -> bool {
    unsafe { GetAncestor(hwnd, GA_PARENT) == GetDesktopWindow() }
}

/// Window procedure shared by the top-level and host windows
unsafe extern "system" fn wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_DESTROY => {
            // Child windows die with their parent; only the top-level ends the loop
            if is_top_level(hwnd) {
                log!("WM_DESTROY for top-level {:?} - posting quit message", hwnd.0);
                post_quit();
            }
            LRESULT(0)
        }
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

/// [`WindowSystem`] backed by real Win32 windows of one class
pub struct Win32WindowSystem {
    class_name: HSTRING,
}

impl Win32WindowSystem {
    pub fn new(class_name: &str) -> Self {
        Self {
            class_name: HSTRING::from(class_name),
        }
    }

    fn class(&self) -> PCWSTR {
        PCWSTR(self.class_name.as_ptr())
    }

    fn create(
        &self,
        title: &str,
        style: WINDOW_STYLE,
        bounds: Rect,
        parent: HWND,
    ) -> Result<WindowId, HResult> {
        let title = HSTRING::from(title);
        unsafe {
            let hinstance = GetModuleHandleW(None)?;
            let hwnd = CreateWindowExW(
                WINDOW_EX_STYLE(0),
                self.class(),
                PCWSTR(title.as_ptr()),
                style,
                bounds.left,
                bounds.top,
                bounds.width(),
                bounds.height(),
                parent,
                None,
                hinstance,
                None,
            )?;
            Ok(window_id(hwnd))
        }
    }

    fn set_pos(&self, window: WindowId, bounds: Rect, flags: SET_WINDOW_POS_FLAGS) {
        let result = unsafe {
            SetWindowPos(
                hwnd(window),
                HWND::default(),
                bounds.left,
                bounds.top,
                bounds.width(),
                bounds.height(),
                flags | SWP_NOZORDER | SWP_NOACTIVATE,
            )
        };
        if let Err(e) = result {
            log!("SetWindowPos({:?}) failed: {:?}", window, e);
        }
    }
}

impl WindowSystem for Win32WindowSystem {
    fn register_class(&self) -> Result<(), HResult> {
        unsafe {
            let hinstance = GetModuleHandleW(None)?;

            let wc = WNDCLASSEXW {
                cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
                style: CS_HREDRAW | CS_VREDRAW,
                lpfnWndProc: Some(wnd_proc),
                hInstance: hinstance.into(),
                hCursor: LoadCursorW(None, IDC_ARROW)?,
                hbrBackground: HBRUSH((COLOR_WINDOW.0 + 1) as usize as *mut c_void),
                lpszClassName: self.class(),
                ..Default::default()
            };

            if RegisterClassExW(&wc) == 0 {
                let err = Error::from_win32();
                // A second bind in the same process reuses the class
                if err.code() == ERROR_CLASS_ALREADY_EXISTS.to_hresult() {
                    return Ok(());
                }
                return Err(err.into());
            }
        }
        Ok(())
    }

    fn create_top_level(&self, title: &str, bounds: Rect) -> Result<WindowId, HResult> {
        let id = self.create(title, WS_POPUP, bounds, HWND::default())?;
        log!("created top-level window {:?}", id);
        Ok(id)
    }

    fn show(&self, window: WindowId) {
        unsafe {
            let _ = ShowWindow(hwnd(window), SW_SHOW);
            let _ = UpdateWindow(hwnd(window));
        }
    }

    fn create_host(
        &self,
        parent: WindowId,
        title: &str,
        bounds: Rect,
    ) -> Result<WindowId, HResult> {
        let id = self.create(title, WS_CHILD | WS_VISIBLE, bounds, hwnd(parent))?;
        log!("created host window {:?} in {:?}", id, parent);
        Ok(id)
    }

    fn destroy(&self, window: WindowId) {
        if let Err(e) = unsafe { DestroyWindow(hwnd(window)) } {
            log!("DestroyWindow({:?}) failed: {:?}", window, e);
        }
    }

    fn is_alive(&self, window: WindowId) -> bool {
        !window.is_null() && unsafe { IsWindow(hwnd(window)) }.as_bool()
    }

    fn set_bounds(&self, window: WindowId, bounds: Rect) {
        self.set_pos(window, bounds, SET_WINDOW_POS_FLAGS(0));
    }

    fn resize(&self, window: WindowId, size: Size) {
        self.set_pos(window, Rect::from_size(size), SWP_NOMOVE);
    }

    fn notify_resized(&self, window: WindowId, size: Size) {
        let packed = ((size.height as u32 & 0xFFFF) << 16) | (size.width as u32 & 0xFFFF);
        unsafe {
            let _ = SendMessageW(
                hwnd(window),
                WM_SIZE,
                WPARAM(SIZE_RESTORED as usize),
                LPARAM(packed as isize),
            );
        }
    }

    fn run_message_loop(&self) {
        run_message_loop();
    }
}

struct ChildSearch {
    parent: HWND,
    found: Vec<WindowId>,
}

/// EnumChildWindows visits every descendant; keep direct children only
unsafe extern "system" fn collect_child(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let search = &mut *(lparam.0 as *mut ChildSearch);
    if GetAncestor(hwnd, GA_PARENT) == search.parent {
        search.found.push(window_id(hwnd));
    }
    TRUE
}

impl WindowTree for Win32WindowSystem {
    fn children(&self, window: WindowId) -> Vec<WindowId> {
        let mut search = ChildSearch {
            parent: hwnd(window),
            found: Vec::new(),
        };
        unsafe {
            let _ = EnumChildWindows(
                hwnd(window),
                Some(collect_child),
                LPARAM(&mut search as *mut ChildSearch as isize),
            );
        }
        search.found
    }

    fn visible_rect_in(&self, window: WindowId, host: WindowId) -> Option<Rect> {
        unsafe {
            let h = hwnd(window);
            if !IsWindow(h).as_bool() || !IsWindowVisible(h).as_bool() {
                return None;
            }

            let mut rc = RECT::default();
            GetWindowRect(h, &mut rc).ok()?;

            // Same offset for both corners: map one, shift the rect
            let mut origin = POINT {
                x: rc.left,
                y: rc.top,
            };
            let _ = ScreenToClient(hwnd(host), &mut origin);

            let screen = Rect::new(rc.left, rc.top, rc.right, rc.bottom);
            Some(screen.translate(origin.x - rc.left, origin.y - rc.top))
        }
    }
}
